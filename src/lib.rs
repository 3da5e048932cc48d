//! candidate-finder: resolve CIDs to graphsync retrieval candidates via an IPNI indexer
//!
//! - [`finder_core`]: find-response model, metadata codec, candidate filter, config
//! - [`finder_client`]: indexer endpoint, lookup context, errors

pub use finder_client;
pub use finder_core;

pub use finder_client::{CandidateFinder, ClientError, IndexerEndpoint, LookupContext};
pub use finder_core::{
    AddrInfo, Cid, FindResponse, GraphsyncFilecoinV1, IndexerConfig, RetrievalCandidate,
};
