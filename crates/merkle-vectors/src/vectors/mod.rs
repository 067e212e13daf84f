//! Proof test vectors
//!
//! Each proof kind has a hand-maintained table of valid records and a mutator
//! that derives invalid records from it. The tables are built once on first
//! access and never modified; mutation always works on clones.

mod consistency;
mod inclusion;

pub use consistency::ConsistencyRecord;
pub use inclusion::InclusionRecord;

use serde::{de::DeserializeOwned, Serialize};

/// A kind of proof test vector
pub trait TestVector: Clone + Serialize + DeserializeOwned + 'static {
    /// Short name used on the command line and in logs
    const KIND: &'static str;

    /// Records whose proofs verify
    fn valid() -> &'static [Self];

    /// Records derived from [`TestVector::valid`] whose proofs must not verify
    fn invalid() -> Vec<Self>;
}
