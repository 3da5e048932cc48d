//! Find-response envelope returned by the indexer's `/multihash/{hash}` route
//!
//! Byte fields are standard base64 strings, the way Go's `encoding/json`
//! writes `[]byte`.

use serde::{Deserialize, Serialize};

use crate::candidate::{null_as_empty, AddrInfo};

/// Decoded indexer answer: one result per multihash the indexer matched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindResponse {
    #[serde(rename = "MultihashResults", default, deserialize_with = "null_as_empty")]
    pub multihash_results: Vec<MultihashResult>,
}

/// All providers the indexer holds for one multihash
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultihashResult {
    #[serde(rename = "Multihash", with = "base64_bytes")]
    pub multihash: Vec<u8>,
    #[serde(rename = "ProviderResults", default, deserialize_with = "null_as_empty")]
    pub provider_results: Vec<ProviderResult>,
}

/// One provider's advertisement for a multihash
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResult {
    #[serde(rename = "ContextID", default, with = "base64_bytes")]
    pub context_id: Vec<u8>,
    /// Opaque transfer-protocol metadata
    #[serde(rename = "Metadata", default, with = "base64_bytes")]
    pub metadata: Vec<u8>,
    #[serde(rename = "Provider")]
    pub provider: AddrInfo,
}

impl FindResponse {
    /// Parse a response body
    ///
    /// A malformed body is an error, never an empty response.
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize to the wire JSON form
    pub fn to_vec(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.multihash_results.is_empty()
    }

    /// Total provider entries across all groups
    pub fn provider_count(&self) -> usize {
        self.multihash_results
            .iter()
            .map(|r| r.provider_results.len())
            .sum()
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => STANDARD.decode(s.as_bytes()).map_err(de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
