//! Candidate filter: turns a find response into graphsync retrieval candidates

use cid::Cid;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::candidate::RetrievalCandidate;
use crate::metadata::{protocol_id, GraphsyncFilecoinV1};
use crate::model::FindResponse;

/// Select the providers in `resp` that can serve `cid` over graphsync
///
/// Groups are visited in a fresh random order on every call; entries keep
/// the indexer's order within a group. Never fails: records that do not
/// match are dropped.
pub fn filter_candidates(resp: &FindResponse, cid: &Cid) -> Vec<RetrievalCandidate> {
    filter_candidates_with_rng(resp, cid, &mut rand::thread_rng())
}

/// [`filter_candidates`] with a caller-supplied random source
pub fn filter_candidates_with_rng<R: Rng + ?Sized>(
    resp: &FindResponse,
    cid: &Cid,
    rng: &mut R,
) -> Vec<RetrievalCandidate> {
    let hash = cid.hash().to_bytes();

    let mut order: Vec<usize> = (0..resp.multihash_results.len()).collect();
    order.shuffle(rng);

    let mut matches = Vec::new();
    for i in order {
        let group = &resp.multihash_results[i];

        if group.multihash != hash {
            tracing::trace!(
                requested = %hex::encode(&hash),
                returned = %hex::encode(&group.multihash),
                "Skipping unrelated multihash group"
            );
            continue;
        }

        for entry in &group.provider_results {
            if GraphsyncFilecoinV1::decode_supported(&entry.metadata).is_none() {
                tracing::trace!(
                    provider = %entry.provider.id,
                    protocol = ?protocol_id(&entry.metadata),
                    "Skipping provider without graphsync-filecoin-v1 metadata"
                );
                continue;
            }

            matches.push(RetrievalCandidate::new(*cid, entry.provider.clone()));
        }
    }

    matches
}
