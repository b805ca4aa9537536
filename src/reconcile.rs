//! The reconciliation flow.

use crate::cloudflare::CloudflareClient;
use crate::config::Config;
use crate::detector::IpDetector;
use crate::error::Result;

/// How a reconciliation run finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The published record already carries the current public IP.
    AlreadyCurrent { ip: String },
    /// The record was rewritten to carry the current public IP.
    Updated { ip: String },
}

/// Run one reconciliation pass.
///
/// Resolves the public IP, fetches the published record, and issues a single
/// update only when the two differ. Each step short-circuits the run on
/// failure.
pub async fn reconcile(
    config: &Config,
    detector: &IpDetector,
    dns: &CloudflareClient,
) -> Result<Outcome> {
    let public_ip = detector.public_ipv4().await?;
    let record = dns.fetch_record(&config.zone_id, &config.domain).await?;

    if record.content == public_ip {
        tracing::info!("{} is already set for {}", public_ip, config.domain);
        return Ok(Outcome::AlreadyCurrent { ip: public_ip });
    }

    tracing::info!("Updating DNS record for {} to {}", config.domain, public_ip);
    dns.update_record(&record, &public_ip).await?;

    Ok(Outcome::Updated { ip: public_ip })
}
