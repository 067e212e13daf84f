use super::TestVector;
use crate::hash::Hash;
use crate::tree::{hash_leaf, th};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Parameters of an inclusion proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionRecord {
    pub leaf_hash: Hash,
    pub leaf_index: u64,
    pub tree_size: u64,
    pub root_hash: Hash,
    pub inclusion_path: Vec<Hash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl InclusionRecord {
    fn new(leaf: u8, leaf_index: u64, tree_size: u64, root_hash: Hash, path: &[Hash]) -> Self {
        Self {
            leaf_hash: hash_leaf(&[leaf]),
            leaf_index,
            tree_size,
            root_hash,
            inclusion_path: path.to_vec(),
            comment: None,
        }
    }
}

static VALID: LazyLock<Vec<InclusionRecord>> = LazyLock::new(|| {
    vec![
        // Size 1
        InclusionRecord::new(b'a', 0, 1, th(b'a', b'a'), &[]),
        // Size 2
        InclusionRecord::new(b'a', 0, 2, th(b'a', b'b'), &[th(b'b', b'b')]),
        InclusionRecord::new(b'b', 1, 2, th(b'a', b'b'), &[th(b'a', b'a')]),
        // Size 10, RFC 6962 path for leaf 0 (older fixtures listed a path that does not verify)
        InclusionRecord::new(
            b'a',
            0,
            10,
            th(b'a', b'j'),
            &[th(b'b', b'b'), th(b'c', b'd'), th(b'e', b'h'), th(b'i', b'j')],
        ),
    ]
});

/// Derive invalid records from valid ones
///
/// The root was computed over the original leaf, so flipping any bit of the
/// leaf hash breaks the proof.
fn mutate(valid: &[InclusionRecord]) -> Vec<InclusionRecord> {
    let mut params = Vec::with_capacity(valid.len());
    for v in valid {
        let mut p = v.clone();
        p.leaf_hash.as_bytes_mut()[0] ^= 0x01;
        p.comment = Some("mutated \"leaf_hash\"".to_string());
        params.push(p);
    }
    tracing::debug!(valid = valid.len(), invalid = params.len(), "mutated inclusion vectors");
    params
}

impl TestVector for InclusionRecord {
    const KIND: &'static str = "inclusion";

    fn valid() -> &'static [Self] {
        &VALID
    }

    fn invalid() -> Vec<Self> {
        mutate(&VALID)
    }
}
