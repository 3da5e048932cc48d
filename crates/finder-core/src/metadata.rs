//! Transfer-protocol metadata codec
//!
//! Providers attach a metadata blob to every advertisement. It starts with
//! the multicodec code of the transfer protocol as an unsigned varint,
//! followed by a protocol-specific payload. The only protocol this client
//! retrieves over is graphsync-filecoin-v1, whose payload is a dag-cbor map:
//!
//! ```text
//! uvarint(0x0910) { "PieceCID": cid, "VerifiedDeal": bool, "FastRetrieval": bool }
//! ```

use cid::Cid;
use serde::{Deserialize, Serialize};

use crate::constants::TRANSPORT_GRAPHSYNC_FILECOINV1;
use crate::error::MetadataError;

/// Graphsync-filecoin-v1 retrieval parameters advertised by a storage provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphsyncFilecoinV1 {
    /// Piece the content lives in
    #[serde(rename = "PieceCID")]
    pub piece_cid: Cid,
    /// Whether the storage deal is verified
    #[serde(rename = "VerifiedDeal")]
    pub verified_deal: bool,
    /// Whether the provider keeps an unsealed copy for fast retrieval
    #[serde(rename = "FastRetrieval")]
    pub fast_retrieval: bool,
}

impl GraphsyncFilecoinV1 {
    pub fn new(piece_cid: Cid, verified_deal: bool, fast_retrieval: bool) -> Self {
        Self {
            piece_cid,
            verified_deal,
            fast_retrieval,
        }
    }

    /// Decode a metadata blob
    ///
    /// Bytes after the cbor payload belong to further protocols advertised by
    /// the same provider and are not read.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetadataError> {
        if bytes.is_empty() {
            return Err(MetadataError::Empty);
        }

        let (code, payload) = unsigned_varint::decode::u64(bytes)
            .map_err(|e| MetadataError::Varint(e.to_string()))?;
        if code != TRANSPORT_GRAPHSYNC_FILECOINV1 {
            return Err(MetadataError::UnsupportedProtocol(code));
        }

        let mut de = serde_ipld_dagcbor::de::Deserializer::from_slice(payload);
        Self::deserialize(&mut de).map_err(|e| MetadataError::Cbor(e.to_string()))
    }

    /// Encode as a metadata blob
    pub fn to_bytes(&self) -> Result<Vec<u8>, MetadataError> {
        let mut buf = unsigned_varint::encode::u64_buffer();
        let prefix = unsigned_varint::encode::u64(TRANSPORT_GRAPHSYNC_FILECOINV1, &mut buf);
        let payload =
            serde_ipld_dagcbor::to_vec(self).map_err(|e| MetadataError::Cbor(e.to_string()))?;

        let mut out = Vec::with_capacity(prefix.len() + payload.len());
        out.extend_from_slice(prefix);
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Returns the descriptor if the blob advertises graphsync-filecoin-v1
    pub fn decode_supported(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes).ok()
    }
}

/// Leading protocol code of a metadata blob, if it has a valid varint prefix
pub fn protocol_id(bytes: &[u8]) -> Option<u64> {
    unsigned_varint::decode::u64(bytes).ok().map(|(code, _)| code)
}
