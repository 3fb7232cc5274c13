//! Online/offline reachability probe.
//!
//! One blocking round-trip against a generate-204 endpoint. The host
//! runs this on a background thread at a fixed cadence and treats the
//! boolean as the connectivity flag; no caching strategy is attached to
//! it.

use std::time::Duration;

use url::Url;

/// Endpoint that answers 204 with an empty body when the network is up.
pub const DEFAULT_PROBE_URL: &str = "https://www.gstatic.com/generate_204";

/// How often the host re-probes.
pub const PROBE_INTERVAL: Duration = Duration::from_secs(10);

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// One reachability check (blocking). Any transport failure is "offline".
pub fn probe(probe_url: &str) -> bool {
    let parsed = match Url::parse(probe_url) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Invalid probe URL {}: {}", probe_url, e);
            return false;
        }
    };

    let client = match reqwest::blocking::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            log::warn!("Probe client error: {}", e);
            return false;
        }
    };

    match client.head(parsed.as_str()).send() {
        Ok(response) => {
            let online = response.status().is_success();
            log::debug!("Connectivity probe {}: {}", probe_url, response.status());
            online
        }
        Err(e) => {
            log::debug!("Connectivity probe failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_is_offline() {
        assert!(!probe("not a url"));
    }

    #[test]
    fn unreachable_host_is_offline() {
        // Reserved TLD, guaranteed to never resolve.
        assert!(!probe("https://probe.invalid/generate_204"));
    }
}
