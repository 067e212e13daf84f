//! RFC 6962 Merkle tree hashing and proof test vectors
//!
//! This crate computes RFC 6962 tree hashes and produces JSON fixtures of
//! valid and deliberately invalid inclusion and consistency proofs, for use
//! when testing third-party Merkle tree implementations.

pub mod error;
pub mod hash;
pub mod proof;
pub mod sink;
pub mod tree;
pub mod vectors;

pub use error::{Error, Result};
pub use hash::{Hash, HASH_SIZE};
pub use proof::{verify_consistency_proof, verify_inclusion_proof};
pub use tree::{
    hash_children, hash_leaf, inclusion_path, root_hash, th, LEAF_HASH_PREFIX, NODE_HASH_PREFIX,
};
pub use vectors::{ConsistencyRecord, InclusionRecord, TestVector};
