//! Configuration management for ddns-reconciler.

use crate::error::{DdnsError, Result};
use std::env;

/// Environment variable naming the record to reconcile.
const DOMAIN_VAR: &str = "DOMAIN";

/// Environment variable holding the Cloudflare API token.
const API_TOKEN_VAR: &str = "API_TOKEN";

/// Environment variable holding the zone identifier.
const ZONE_ID_VAR: &str = "ZONE_ID";

/// Validated configuration.
///
/// Built once at startup and passed by parameter into each step, so no code
/// after construction reads the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// DNS record name to reconcile (e.g., "vpn.example.com").
    pub domain: String,
    /// Cloudflare API token, sent as a bearer token.
    pub api_token: String,
    /// Zone ID scoping the record lookup.
    pub zone_id: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary lookup function.
    ///
    /// Tests supply fixtures here instead of mutating the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            domain: required(&lookup, DOMAIN_VAR)?,
            api_token: required(&lookup, API_TOKEN_VAR)?,
            zone_id: required(&lookup, ZONE_ID_VAR)?,
        })
    }
}

/// An empty value is treated the same as an absent one.
fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DdnsError::Config(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_all_values_present() {
        let config = Config::from_lookup(lookup_from(&[
            ("DOMAIN", "vpn.example.com"),
            ("API_TOKEN", "secret-token"),
            ("ZONE_ID", "zone-123"),
        ]))
        .unwrap();

        assert_eq!(config.domain, "vpn.example.com");
        assert_eq!(config.api_token, "secret-token");
        assert_eq!(config.zone_id, "zone-123");
    }

    #[test]
    fn test_missing_domain() {
        let err = Config::from_lookup(lookup_from(&[
            ("API_TOKEN", "secret-token"),
            ("ZONE_ID", "zone-123"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("DOMAIN"));
    }

    #[test]
    fn test_missing_api_token() {
        let err = Config::from_lookup(lookup_from(&[
            ("DOMAIN", "vpn.example.com"),
            ("ZONE_ID", "zone-123"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("API_TOKEN"));
    }

    #[test]
    fn test_missing_zone_id() {
        let err = Config::from_lookup(lookup_from(&[
            ("DOMAIN", "vpn.example.com"),
            ("API_TOKEN", "secret-token"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("ZONE_ID"));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("DOMAIN", "vpn.example.com"),
            ("API_TOKEN", ""),
            ("ZONE_ID", "zone-123"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("API_TOKEN"));
    }
}
