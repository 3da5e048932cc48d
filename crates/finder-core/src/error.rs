//! Error types for finder-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a provider metadata blob is not a usable graphsync descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("metadata is empty")]
    Empty,

    #[error("invalid protocol varint: {0}")]
    Varint(String),

    #[error("transport ID does not match transport-graphsync-filecoinv1: 0x{0:x}")]
    UnsupportedProtocol(u64),

    #[error("invalid dag-cbor payload: {0}")]
    Cbor(String),
}
