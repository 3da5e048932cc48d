//! candidate-finder binary: look up graphsync retrieval candidates for CIDs
//!
//! Run with:
//! ```bash
//! cargo run -p finder-client --bin candidate-finder -- bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use cid::Cid;
use clap::Parser;
use finder_client::{IndexerEndpoint, LookupContext};
use finder_core::{IndexerConfig, RetrievalCandidate};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "candidate-finder")]
#[command(about = "Find storage providers serving CIDs over graphsync")]
struct Args {
    /// CIDs to look up
    #[arg(required = true)]
    cids: Vec<String>,

    /// Indexer base URL (default: https://cid.contact)
    #[arg(long)]
    indexer_url: Option<String>,

    /// Request timeout in seconds (0 keeps the default of 60)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// JSON config file with `base_url` and `timeout_ms`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON object per candidate
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("finder_client=info".parse()?))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => IndexerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => IndexerConfig::default(),
    };
    if let Some(url) = args.indexer_url {
        config.base_url = Some(url);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let cids = args
        .cids
        .iter()
        .map(|s| s.parse::<Cid>().with_context(|| format!("invalid CID: {}", s)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let endpoint = IndexerEndpoint::from_config(&config)?;

    let cx = LookupContext::background();
    let interrupt = cx.token().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling lookup");
            interrupt.cancel();
        }
    });

    for cid in &cids {
        let candidates = endpoint.find_candidates(&cx, cid).await?;
        tracing::info!(cid = %cid, candidates = candidates.len(), "Lookup finished");

        for candidate in &candidates {
            if args.json {
                println!("{}", candidate_json(candidate));
            } else {
                println!(
                    "{}\t{}\t{}",
                    candidate.root_cid,
                    candidate.provider.id,
                    candidate.provider.addrs.join(",")
                );
            }
        }
    }

    Ok(())
}

fn candidate_json(candidate: &RetrievalCandidate) -> serde_json::Value {
    serde_json::json!({
        "root_cid": candidate.root_cid.to_string(),
        "provider": candidate.provider,
    })
}
