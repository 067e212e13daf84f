//! Merkle proof verification
//!
//! Reference verifier for inclusion and consistency proofs, following the
//! algorithms of RFC 6962 / RFC 9162. Vector generation never calls into this
//! module; it exists so the vector tables and the mutated records can be
//! checked against an independent implementation.

use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::tree::{bit_length, hash_children};

/// Verify an inclusion proof for a leaf in a Merkle tree
///
/// # Arguments
/// * `leaf_hash` - The hash of the leaf entry
/// * `leaf_index` - Index of the leaf in the tree (0-based)
/// * `tree_size` - Total number of leaves in the tree
/// * `proof_hashes` - The hashes in the inclusion proof path
/// * `expected_root` - The expected root hash to verify against
pub fn verify_inclusion_proof(
    leaf_hash: &Hash,
    leaf_index: u64,
    tree_size: u64,
    proof_hashes: &[Hash],
    expected_root: &Hash,
) -> Result<()> {
    if tree_size == 0 {
        return Err(Error::InvalidTreeSize(
            "tree size cannot be zero".to_string(),
        ));
    }

    if leaf_index >= tree_size {
        return Err(Error::InvalidLeafIndex(format!(
            "leaf index {} >= tree size {}",
            leaf_index, tree_size
        )));
    }

    let expected_proof_len = expected_inclusion_proof_length(leaf_index, tree_size);
    if proof_hashes.len() != expected_proof_len {
        return Err(Error::InvalidProof(format!(
            "expected {} proof hashes for leaf {} in tree of size {}, got {}",
            expected_proof_len,
            leaf_index,
            tree_size,
            proof_hashes.len()
        )));
    }

    let mut hash = *leaf_hash;
    let mut index = leaf_index;
    let mut last_node = tree_size - 1;

    for proof_hash in proof_hashes {
        // A right child, or the rightmost node of an incomplete level, has its
        // sibling on the left.
        if index % 2 == 1 || index == last_node {
            hash = hash_children(proof_hash, &hash);
        } else {
            hash = hash_children(&hash, proof_hash);
        }
        index /= 2;
        last_node /= 2;
    }

    if &hash != expected_root {
        return Err(Error::HashMismatch {
            expected: expected_root.to_hex(),
            actual: hash.to_hex(),
        });
    }

    Ok(())
}

/// Verify a consistency proof between two tree states
///
/// An empty old tree is consistent with every new tree, but its root must be
/// the empty-tree hash and the proof must be empty.
///
/// # Arguments
/// * `old_size` - Size of the older tree
/// * `new_size` - Size of the newer tree
/// * `proof_hashes` - The hashes in the consistency proof
/// * `old_root` - Root hash of the older tree
/// * `new_root` - Root hash of the newer tree
pub fn verify_consistency_proof(
    old_size: u64,
    new_size: u64,
    proof_hashes: &[Hash],
    old_root: &Hash,
    new_root: &Hash,
) -> Result<()> {
    if old_size > new_size {
        return Err(Error::InvalidTreeSize(format!(
            "old size {} > new size {}",
            old_size, new_size
        )));
    }

    if old_size == new_size {
        if !proof_hashes.is_empty() {
            return Err(Error::InvalidProof(
                "proof should be empty for same-size trees".to_string(),
            ));
        }
        if old_root != new_root {
            return Err(Error::HashMismatch {
                expected: old_root.to_hex(),
                actual: new_root.to_hex(),
            });
        }
        return Ok(());
    }

    if old_size == 0 {
        if !proof_hashes.is_empty() {
            return Err(Error::InvalidProof(
                "proof should be empty when old tree is empty".to_string(),
            ));
        }
        let empty = Hash::empty();
        if old_root != &empty {
            return Err(Error::HashMismatch {
                expected: empty.to_hex(),
                actual: old_root.to_hex(),
            });
        }
        return Ok(());
    }

    // 0 < old_size < new_size
    if proof_hashes.is_empty() {
        return Err(Error::InvalidProof(
            "proof cannot be empty for different-size trees".to_string(),
        ));
    }

    let shift = old_size.trailing_zeros() as usize;
    let (inner, border) = decompose_inclusion_proof(old_size - 1, new_size);
    let inner = inner - shift;

    // Unless the old tree is a perfect subtree, its largest complete subtree
    // root leads the proof.
    let (seed, start) = if old_size == 1 << shift {
        (old_root, 0)
    } else {
        (&proof_hashes[0], 1)
    };

    let expected_len = start + inner + border;
    if proof_hashes.len() != expected_len {
        return Err(Error::InvalidProof(format!(
            "expected {} proof hashes, got {}",
            expected_len,
            proof_hashes.len()
        )));
    }

    let proof = &proof_hashes[start..];
    let mask = (old_size - 1) >> shift;

    let hash1 = chain_inner_right(seed, &proof[..inner], mask);
    let calc_old_root = chain_border_right(&hash1, &proof[inner..]);

    let hash2 = chain_inner(seed, &proof[..inner], mask);
    let calc_new_root = chain_border_right(&hash2, &proof[inner..]);

    if &calc_old_root != old_root {
        return Err(Error::VerificationFailed(format!(
            "old root mismatch: expected {}, got {}",
            old_root.to_hex(),
            calc_old_root.to_hex()
        )));
    }

    if &calc_new_root != new_root {
        return Err(Error::VerificationFailed(format!(
            "new root mismatch: expected {}, got {}",
            new_root.to_hex(),
            calc_new_root.to_hex()
        )));
    }

    Ok(())
}

/// Decompose an inclusion proof into inner and border path lengths
///
/// Returns (inner_path_length, border_path_length)
fn decompose_inclusion_proof(index: u64, tree_size: u64) -> (usize, usize) {
    let inner = inner_proof_size(index, tree_size);
    let border = (index >> inner).count_ones() as usize;
    (inner, border)
}

/// Calculate the inner proof size for a given index and tree size
fn inner_proof_size(index: u64, tree_size: u64) -> usize {
    bit_length(index ^ (tree_size - 1)) as usize
}

/// Expected inclusion proof length for a leaf index and tree size
///
/// Leaves on the right edge of a tree whose size is not a power of two are
/// promoted past levels where they have no sibling, giving shorter proofs.
fn expected_inclusion_proof_length(leaf_index: u64, tree_size: u64) -> usize {
    let (inner, border) = decompose_inclusion_proof(leaf_index, tree_size);
    inner + border
}

/// Chain hashes along the inner proof path for new root verification
fn chain_inner(seed: &Hash, proof: &[Hash], index: u64) -> Hash {
    let mut hash = *seed;
    for (i, p) in proof.iter().enumerate() {
        if (index >> i) & 1 == 0 {
            hash = hash_children(&hash, p);
        } else {
            hash = hash_children(p, &hash);
        }
    }
    hash
}

/// Chain hashes along the inner proof path for old root verification
///
/// Only hashes when the index bit is 1 (we're coming from the left)
fn chain_inner_right(seed: &Hash, proof: &[Hash], index: u64) -> Hash {
    let mut hash = *seed;
    for (i, p) in proof.iter().enumerate() {
        if (index >> i) & 1 == 1 {
            hash = hash_children(p, &hash);
        }
    }
    hash
}

/// Chain hashes along the right border (all proof hashes go on the left)
fn chain_border_right(seed: &Hash, proof: &[Hash]) -> Hash {
    let mut hash = *seed;
    for p in proof {
        hash = hash_children(p, &hash);
    }
    hash
}
