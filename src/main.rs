//! ddns-reconciler - reconcile a Cloudflare DNS record with the current public IP.

use clap::Parser;
use ddns_reconciler::cloudflare::CloudflareClient;
use ddns_reconciler::config::Config;
use ddns_reconciler::detector::IpDetector;
use ddns_reconciler::error::Result;
use ddns_reconciler::reconcile::reconcile;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ddns-reconciler")]
#[command(about = "Reconcile a Cloudflare DNS record with the current public IP")]
#[command(version)]
struct Cli {
    /// Log the intended update without issuing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(cli.dry_run).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(dry_run: bool) -> Result<()> {
    let config = Config::from_env()?;

    let detector = IpDetector::new();
    let dns = CloudflareClient::new(config.api_token.clone()).dry_run(dry_run);

    reconcile(&config, &detector, &dns).await?;
    Ok(())
}
