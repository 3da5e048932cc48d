//! Provider identity and retrieval candidates

use cid::Cid;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A provider's peer identity and dial addresses, as advertised to the indexer
///
/// Serialized with the libp2p `AddrInfo` JSON keys (`ID`, `Addrs`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AddrInfo {
    /// Peer ID in its text form (e.g. `12D3KooW...`)
    #[serde(rename = "ID")]
    pub id: String,
    /// Multiaddrs in their text form
    #[serde(rename = "Addrs", default, deserialize_with = "null_as_empty")]
    pub addrs: Vec<String>,
}

impl AddrInfo {
    pub fn new(id: impl Into<String>, addrs: Vec<String>) -> Self {
        Self {
            id: id.into(),
            addrs,
        }
    }
}

impl fmt::Display for AddrInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: [{}]}}", self.id, self.addrs.join(" "))
    }
}

/// A source that can serve `root_cid` over graphsync
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RetrievalCandidate {
    /// The CID the lookup was issued for
    pub root_cid: Cid,
    /// The provider to retrieve from
    pub provider: AddrInfo,
}

impl RetrievalCandidate {
    pub fn new(root_cid: Cid, provider: AddrInfo) -> Self {
        Self { root_cid, provider }
    }
}

/// Go encodes nil slices as `null`; treat that the same as a missing field.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
