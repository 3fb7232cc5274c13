//! Geolocation lookup.
//!
//! Desktop hosts have no positioning hardware to ask, so the fix comes
//! from an IP-geolocation HTTP endpoint instead. A refused or failed
//! lookup is `Denied`; the caller runs this blocking call off the UI
//! thread.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::Capability;

/// A resolved position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub lat: f64,
    pub lon: f64,
}

/// Source of position fixes, swappable for tests.
pub trait GeolocationSource {
    fn current_fix(&self) -> Capability<GeoFix>;
}

/// ip-api.com response envelope; `status` is "success" or "fail".
#[derive(Deserialize)]
struct LookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// IP-based lookup against a public geolocation endpoint.
pub struct IpGeolocation {
    endpoint: String,
}

impl IpGeolocation {
    pub const DEFAULT_ENDPOINT: &'static str = "http://ip-api.com/json/";

    pub fn new() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for IpGeolocation {
    fn default() -> Self {
        Self::new()
    }
}

impl GeolocationSource for IpGeolocation {
    fn current_fix(&self) -> Capability<GeoFix> {
        let parsed = match Url::parse(&self.endpoint) {
            Ok(url) => url,
            Err(e) => return Capability::Denied(format!("Invalid endpoint: {}", e)),
        };

        let client = match reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
        {
            Ok(client) => client,
            Err(e) => return Capability::Denied(format!("Client error: {}", e)),
        };

        let response = match client.get(parsed.as_str()).send() {
            Ok(response) => response,
            Err(e) => return Capability::Denied(format!("Lookup failed: {}", e)),
        };

        let body: LookupResponse = match response.json() {
            Ok(body) => body,
            Err(e) => return Capability::Denied(format!("Malformed response: {}", e)),
        };

        if body.status != "success" {
            let reason = body.message.unwrap_or_else(|| "Lookup refused".to_string());
            return Capability::Denied(reason);
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => {
                log::info!("Geolocation fix: {:.4}, {:.4}", lat, lon);
                Capability::Granted(GeoFix { lat, lon })
            }
            _ => Capability::Denied("Response missing coordinates".to_string()),
        }
    }
}

/// Fixed-position source for tests and demos.
pub struct StaticLocation(pub GeoFix);

impl GeolocationSource for StaticLocation {
    fn current_fix(&self) -> Capability<GeoFix> {
        Capability::Granted(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_grants_its_fix() {
        let source = StaticLocation(GeoFix {
            lat: 35.6895,
            lon: 139.6917,
        });
        match source.current_fix() {
            Capability::Granted(fix) => {
                assert!((fix.lat - 35.6895).abs() < 1e-9);
                assert!((fix.lon - 139.6917).abs() < 1e-9);
            }
            other => panic!("Expected Granted, got {:?}", other),
        }
    }

    #[test]
    fn bad_endpoint_is_denied() {
        let source = IpGeolocation::with_endpoint("not a url");
        assert!(matches!(source.current_fix(), Capability::Denied(_)));
    }

    #[test]
    fn unreachable_endpoint_is_denied() {
        let source = IpGeolocation::with_endpoint("http://geo.invalid/json/");
        assert!(matches!(source.current_fix(), Capability::Denied(_)));
    }

    #[test]
    fn response_envelope_parses() {
        let raw = r#"{"status":"success","lat":51.5074,"lon":-0.1278}"#;
        let body: LookupResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.status, "success");
        assert_eq!(body.lat, Some(51.5074));
        assert_eq!(body.lon, Some(-0.1278));

        let fail = r#"{"status":"fail","message":"private range"}"#;
        let body: LookupResponse = serde_json::from_str(fail).unwrap();
        assert_eq!(body.status, "fail");
        assert_eq!(body.message.as_deref(), Some("private range"));
    }
}
