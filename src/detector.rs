//! Public IP detection.

use crate::error::{DdnsError, Result};

/// IP-echo service queried for the caller's public IPv4 address.
const DEFAULT_ENDPOINT: &str = "https://api.ipify.org";

/// Resolves the caller's public IPv4 address from an IP-echo service.
pub struct IpDetector {
    client: reqwest::Client,
    endpoint: String,
}

impl IpDetector {
    /// Create a detector pointed at the default IP-echo service.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string())
    }

    /// Create a detector with a custom endpoint (for testing).
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Fetch the public IPv4 address as reported by the echo service.
    ///
    /// The response body is returned verbatim; the caller compares it against
    /// record content as an opaque string. Transport failures are collapsed
    /// into a single generic message.
    pub async fn public_ipv4(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|_| DdnsError::PublicIp("network error".to_string()))?;

        if !response.status().is_success() {
            return Err(DdnsError::PublicIp(format!(
                "http status {}",
                response.status().as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|_| DdnsError::PublicIp("network error".to_string()))
    }
}

impl Default for IpDetector {
    fn default() -> Self {
        Self::new()
    }
}
