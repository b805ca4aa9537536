//! Cloudflare DNS API client.

use crate::error::{DdnsError, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// TTL in seconds written with every update.
const UPDATE_TTL_SECS: u32 = 60;

/// One provider-side DNS record, as returned by the record listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecord {
    /// Record identifier, addresses the update call.
    pub id: String,
    /// Identifier of the zone owning the record.
    pub zone_id: String,
    /// Record name (e.g., "vpn.example.com").
    pub name: String,
    /// Record type, e.g. "A".
    #[serde(rename = "type")]
    pub record_type: String,
    /// Current record content, an IP address string.
    pub content: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    /// Whether the record is proxied by Cloudflare.
    pub proxied: bool,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    #[serde(rename = "type")]
    record_type: &'a str,
    name: &'a str,
    content: &'a str,
    ttl: u32,
    proxied: bool,
}

/// Cloudflare API client for record lookup and update.
pub struct CloudflareClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
    dry_run: bool,
}

impl CloudflareClient {
    /// Create a client against the production Cloudflare API.
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, DEFAULT_BASE_URL.to_string())
    }

    /// Create with custom base URL (for testing).
    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_token,
            base_url,
            dry_run: false,
        }
    }

    /// Log intended updates instead of issuing them. Lookups still happen.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fetch the record matching `name` within `zone_id`.
    ///
    /// Returns the first record of the listing; a listing with no match is
    /// reported as an error rather than dereferenced blindly.
    pub async fn fetch_record(&self, zone_id: &str, name: &str) -> Result<DnsRecord> {
        let url = format!(
            "{}/zones/{}/dns_records?name={}",
            self.base_url, zone_id, name
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| DdnsError::FetchRecord(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DdnsError::FetchRecord(format!(
                "http status {}",
                response.status().as_u16()
            )));
        }

        let envelope: ApiEnvelope<Vec<DnsRecord>> = response
            .json()
            .await
            .map_err(|e| DdnsError::FetchRecord(e.to_string()))?;

        if !envelope.success {
            return Err(DdnsError::FetchRecord(first_error(&envelope.errors)));
        }

        envelope
            .result
            .and_then(|records| records.into_iter().next())
            .ok_or_else(|| DdnsError::FetchRecord(format!("no record found for {}", name)))
    }

    /// Rewrite `record` to carry `ip` as its content.
    ///
    /// The call is addressed by the record's own zone and record identifiers.
    /// Every update writes an A record with a fixed 60 second TTL and
    /// proxying disabled.
    pub async fn update_record(&self, record: &DnsRecord, ip: &str) -> Result<()> {
        if self.dry_run {
            tracing::info!(
                "dry run: would update DNS record for {} to {}",
                record.name,
                ip
            );
            return Ok(());
        }

        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.base_url, record.zone_id, record.id
        );

        let request = UpdateRequest {
            record_type: "A",
            name: &record.name,
            content: ip,
            ttl: UPDATE_TTL_SECS,
            proxied: false,
        };

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&request)
            .send()
            .await
            .map_err(|e| DdnsError::UpdateRecord(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DdnsError::UpdateRecord(format!(
                "http status {}",
                response.status().as_u16()
            )));
        }

        let envelope: ApiEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DdnsError::UpdateRecord(e.to_string()))?;

        if !envelope.success {
            return Err(DdnsError::UpdateRecord(first_error(&envelope.errors)));
        }

        tracing::info!("DNS record for {} updated successfully", record.name);
        Ok(())
    }
}

fn first_error(errors: &[ApiError]) -> String {
    errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "Unknown error".to_string())
}
