//! finder-client: Indexer lookups for graphsync retrieval candidates
//!
//! [`IndexerEndpoint`] sends one `GET {base}/multihash/{hash}` per lookup,
//! decodes the find response and filters it down to providers that serve
//! the content over graphsync-filecoin-v1.
//!
//! ## Usage
//!
//! ```no_run
//! use finder_client::{IndexerEndpoint, LookupContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let endpoint = IndexerEndpoint::new("https://cid.contact")?;
//!     let cid: finder_core::Cid = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi".parse()?;
//!     let candidates = endpoint.find_candidates(&LookupContext::background(), &cid).await?;
//!     println!("{} candidates", candidates.len());
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod endpoint;
pub mod error;

pub use context::LookupContext;
pub use endpoint::{CandidateFinder, IndexerEndpoint};
pub use error::{ClientError, Result};
