//! finder-core: Data model and filtering logic for indexer candidate lookups
//!
//! An IPNI indexer (e.g. `https://cid.contact`) maps multihashes to the
//! providers advertising them. This crate covers everything about a lookup
//! that does not touch the network:
//! - the JSON find-response envelope returned by `/multihash/{hash}`
//! - the graphsync-filecoin-v1 transfer metadata codec
//! - the candidate filter that turns an envelope into retrieval candidates
//! - indexer endpoint configuration
//!
//! # Filtering rules
//!
//! | Record | Outcome |
//! |--------|---------|
//! | Group multihash differs from the requested one | dropped |
//! | Provider metadata is graphsync-filecoin-v1 | **candidate** |
//! | Provider metadata is another protocol or malformed | dropped |
//!
//! Dropped records never fail a lookup. Group order is randomized per call so
//! the indexer's ordering is not treated as a ranking.

mod candidate;
mod config;
mod error;
mod filter;
mod metadata;
mod model;

pub use candidate::{AddrInfo, RetrievalCandidate};
pub use config::IndexerConfig;
pub use error::{Error, MetadataError};
pub use filter::{filter_candidates, filter_candidates_with_rng};
pub use metadata::{protocol_id, GraphsyncFilecoinV1};
pub use model::{FindResponse, MultihashResult, ProviderResult};

pub use cid::Cid;

pub type Result<T> = std::result::Result<T, Error>;

/// Constants shared by the client and the core
pub mod constants {
    /// Public indexer used when no endpoint is configured
    pub const DEFAULT_INDEXER_URL: &str = "https://cid.contact";

    /// Lookup path joined between the base URL and the encoded multihash
    pub const MULTIHASH_PATH: &str = "/multihash/";

    /// Hard timeout for a single indexer request, in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// Multicodec code for `transport-graphsync-filecoinv1`
    pub const TRANSPORT_GRAPHSYNC_FILECOINV1: u64 = 0x0910;

    /// Multicodec code for `transport-bitswap`
    pub const TRANSPORT_BITSWAP: u64 = 0x0900;

    /// Multicodec code for `transport-ipfs-gateway-http`
    pub const TRANSPORT_IPFS_GATEWAY_HTTP: u64 = 0x0920;
}
