use super::TestVector;
use crate::hash::Hash;
use crate::tree::{root_hash, th};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Parameters of a consistency proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyRecord {
    pub old_size: u64,
    pub new_size: u64,
    pub old_root: Hash,
    pub new_root: Hash,
    pub consistency_path: Vec<Hash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ConsistencyRecord {
    fn new(old_size: u64, new_size: u64, old_root: Hash, new_root: Hash, path: &[Hash]) -> Self {
        Self {
            old_size,
            new_size,
            old_root,
            new_root,
            consistency_path: path.to_vec(),
            comment: None,
        }
    }
}

static VALID: LazyLock<Vec<ConsistencyRecord>> = LazyLock::new(|| {
    let empty = root_hash(&[]);
    vec![
        // Size 0
        ConsistencyRecord::new(0, 0, empty, empty, &[]),
        // Size 1
        ConsistencyRecord::new(0, 1, empty, th(b'a', b'a'), &[]),
        ConsistencyRecord::new(1, 1, th(b'a', b'a'), th(b'a', b'a'), &[]),
        // Size 10
        ConsistencyRecord::new(
            1,
            10,
            th(b'a', b'a'),
            th(b'a', b'j'),
            &[th(b'b', b'b'), th(b'c', b'd'), th(b'e', b'h'), th(b'i', b'j')],
        ),
    ]
});

/// Derive invalid records from valid ones
///
/// A consistency proof is an inclusion proof for a particular subtree of the
/// new tree, so it only holds for the exact old size it was built for. Every
/// other size in `0..=new_size + 1` must be rejected.
fn mutate(valid: &[ConsistencyRecord]) -> Vec<ConsistencyRecord> {
    let mut params = Vec::new();
    for v in valid {
        for old_size in (0..=v.new_size + 1).filter(|&size| size != v.old_size) {
            let mut p = v.clone();
            p.old_size = old_size;
            p.comment = Some("mutated \"old_size\"".to_string());
            params.push(p);
        }
    }
    tracing::debug!(valid = valid.len(), invalid = params.len(), "mutated consistency vectors");
    params
}

impl TestVector for ConsistencyRecord {
    const KIND: &'static str = "consistency";

    fn valid() -> &'static [Self] {
        &VALID
    }

    fn invalid() -> Vec<Self> {
        mutate(&VALID)
    }
}
