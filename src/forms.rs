//! Demo form validation: a name field and an email field, two checks.

/// Minimum accepted name length, in characters.
pub const MIN_NAME_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub name: String,
    pub email: String,
}

/// Per-field validation messages. `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl FormErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Run both field checks and collect the messages.
pub fn validate(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.name.chars().count() < MIN_NAME_LEN {
        errors.name = Some("Name must be at least 3 characters");
    }
    if !is_valid_email(&data.email) {
        errors.email = Some("Please enter a valid email");
    }

    errors
}

/// Shape check: `local@domain.tld`, every segment non-empty and free of
/// whitespace and extra `@`. The domain may itself contain dots; only the
/// last one splits host from TLD.
fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    [local, host, tld]
        .iter()
        .all(|part| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@'))
}
