//! Indexer endpoint: query dispatch and candidate lookup

use async_trait::async_trait;
use cid::Cid;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use finder_core::constants::{DEFAULT_INDEXER_URL, MULTIHASH_PATH};
use finder_core::{filter_candidates, FindResponse, IndexerConfig, RetrievalCandidate};

use crate::context::LookupContext;
use crate::error::{ClientError, Result};

/// Anything that can resolve a CID to retrieval candidates
#[async_trait]
pub trait CandidateFinder: Send + Sync {
    async fn find_candidates(
        &self,
        cx: &LookupContext,
        cid: &Cid,
    ) -> Result<Vec<RetrievalCandidate>>;
}

/// Client for an IPNI indexer's `/multihash` lookup route
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct IndexerEndpoint {
    http: Client,
    base_url: String,
}

impl IndexerEndpoint {
    /// Create an endpoint for `base_url` with the default one minute timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&IndexerConfig::new(base_url))
    }

    /// Create an endpoint from configuration
    ///
    /// A missing or empty base URL falls back to the public indexer.
    pub fn from_config(config: &IndexerConfig) -> Result<Self> {
        if config.uses_fallback() {
            tracing::warn!(
                configured = ?config.base_url,
                fallback = DEFAULT_INDEXER_URL,
                "No indexer endpoint configured, using public fallback"
            );
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.effective_base_url(),
        })
    }

    /// Base URL lookups are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lookup URL for a CID: `{base}/multihash/{base58 multihash}`
    pub fn lookup_url(&self, cid: &Cid) -> String {
        let hash = bs58::encode(cid.hash().to_bytes()).into_string();
        format!("{}{}{}", self.base_url, MULTIHASH_PATH, hash)
    }

    /// Send one find query for `cid`
    ///
    /// 404 means the indexer has no records and yields an empty response.
    pub async fn find(&self, cid: &Cid) -> Result<FindResponse> {
        let url = self.lookup_url(cid);
        tracing::debug!(cid = %cid, url = %url, "Querying indexer");

        let resp = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(FindResponse::default());
        }
        if status != StatusCode::OK {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = resp.bytes().await.map_err(ClientError::from_transport)?;
        FindResponse::from_slice(&body).map_err(ClientError::Decode)
    }

    /// Resolve `cid` to providers that serve it over graphsync-filecoin-v1
    ///
    /// One request, no retries. Providers advertising other protocols or
    /// unrelated multihashes are dropped without failing the lookup.
    pub async fn find_candidates(
        &self,
        cx: &LookupContext,
        cid: &Cid,
    ) -> Result<Vec<RetrievalCandidate>> {
        let resp = cx.run(self.find(cid)).await?;
        let candidates = filter_candidates(&resp, cid);

        tracing::debug!(
            cid = %cid,
            groups = resp.multihash_results.len(),
            providers = resp.provider_count(),
            candidates = candidates.len(),
            "Indexer lookup complete"
        );

        Ok(candidates)
    }
}

#[async_trait]
impl CandidateFinder for IndexerEndpoint {
    async fn find_candidates(
        &self,
        cx: &LookupContext,
        cid: &Cid,
    ) -> Result<Vec<RetrievalCandidate>> {
        IndexerEndpoint::find_candidates(self, cx, cid).await
    }
}
