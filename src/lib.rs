//! # ddns-reconciler
//!
//! A single-shot dynamic DNS reconciler for Cloudflare.
//!
//! Each run resolves the caller's public IPv4 address, fetches the DNS record
//! published for the configured domain, and rewrites the record only when the
//! two differ. Nothing is cached or persisted between runs, which makes the
//! binary a good fit for cron or a systemd timer.
//!
//! ## Usage
//!
//! ```bash
//! export DOMAIN=vpn.example.com
//! export API_TOKEN=your-cloudflare-token
//! export ZONE_ID=your-zone-id
//! ddns-reconciler
//!
//! # Log the intended change without touching the record
//! ddns-reconciler --dry-run
//! ```

pub mod cloudflare;
pub mod config;
pub mod detector;
pub mod error;
pub mod reconcile;

pub use cloudflare::{CloudflareClient, DnsRecord};
pub use config::Config;
pub use detector::IpDetector;
pub use error::{DdnsError, Result};
pub use reconcile::{reconcile, Outcome};
