//! Merkle tree hashing utilities
//!
//! Implements RFC 6962 compliant Merkle tree hashing with:
//! - Domain separation via prefixes (0x00 for leaf, 0x01 for node)
//! - SHA-256 hash function
//! - The left subtree of every interior node holding the largest power of two
//!   strictly smaller than the number of leaves

use crate::hash::Hash;
use sha2::{Digest, Sha256};

/// Prefix for leaf nodes in RFC 6962 Merkle tree
pub const LEAF_HASH_PREFIX: u8 = 0x00;

/// Prefix for internal nodes in RFC 6962 Merkle tree
pub const NODE_HASH_PREFIX: u8 = 0x01;

/// Hash a leaf node
///
/// Returns: SHA256(0x00 || leaf_data)
pub fn hash_leaf(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_HASH_PREFIX]);
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Hash two child nodes to create a parent node
///
/// Returns: SHA256(0x01 || left || right)
pub fn hash_children(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([NODE_HASH_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    Hash::from_bytes(hasher.finalize().into())
}

/// Compute the Merkle tree hash of an ordered list of leaf hashes
///
/// - no leaves: SHA256 of the empty string
/// - one leaf: the leaf hash itself
/// - otherwise: `hash_children(MTH(leaves[..k]), MTH(leaves[k..]))` with
///   `k = split_point(leaves.len())`
pub fn root_hash(leaves: &[Hash]) -> Hash {
    match leaves.len() {
        0 => Hash::empty(),
        1 => leaves[0],
        n => {
            let (left, right) = leaves.split_at(split_point(n as u64) as usize);
            hash_children(&root_hash(left), &root_hash(right))
        }
    }
}

/// Largest power of two strictly less than `n`
///
/// Only meaningful for `n >= 2`; returns 0 otherwise.
pub fn split_point(n: u64) -> u64 {
    if n < 2 {
        return 0;
    }
    1 << (bit_length(n - 1) - 1)
}

/// Derive the inclusion proof for `leaves[index]`
///
/// The path is ordered from the leaf's sibling up to the child of the root,
/// as in RFC 6962 section 2.1.1. Returns `None` if `index` is out of range.
pub fn inclusion_path(leaves: &[Hash], index: u64) -> Option<Vec<Hash>> {
    if index >= leaves.len() as u64 {
        return None;
    }
    let mut path = Vec::new();
    collect_path(leaves, index, &mut path);
    Some(path)
}

fn collect_path(leaves: &[Hash], index: u64, path: &mut Vec<Hash>) {
    let n = leaves.len() as u64;
    if n < 2 {
        return;
    }
    let k = split_point(n);
    let (left, right) = leaves.split_at(k as usize);
    if index < k {
        collect_path(left, index, path);
        path.push(root_hash(right));
    } else {
        collect_path(right, index - k, path);
        path.push(root_hash(left));
    }
}

/// Tree hash over the single-byte leaves `from..=to`
///
/// Shorthand for writing vector tables: `th(b'a', b'd')` is the root of the
/// four-leaf tree "a", "b", "c", "d".
pub fn th(from: u8, to: u8) -> Hash {
    let leaves: Vec<Hash> = (from..=to).map(|ch| hash_leaf(&[ch])).collect();
    root_hash(&leaves)
}

/// Calculate the position of the most significant bit
pub fn bit_length(n: u64) -> u32 {
    if n == 0 {
        0
    } else {
        64 - n.leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(from: u8, to: u8) -> Vec<Hash> {
        (from..=to).map(|ch| hash_leaf(&[ch])).collect()
    }

    #[test]
    fn test_hash_leaf() {
        let data = b"test data";
        let hash = hash_leaf(data);

        // Verify it's different from raw SHA256
        assert_ne!(hash, Hash::digest(data));

        let mut prefixed = vec![LEAF_HASH_PREFIX];
        prefixed.extend_from_slice(data);
        assert_eq!(hash, Hash::digest(&prefixed));
    }

    #[test]
    fn test_hash_children() {
        let left = Hash::from_bytes([0u8; 32]);
        let right = Hash::from_bytes([1u8; 32]);
        let hash = hash_children(&left, &right);

        let mut raw = vec![NODE_HASH_PREFIX];
        raw.extend_from_slice(left.as_bytes());
        raw.extend_from_slice(right.as_bytes());
        assert_eq!(hash, Hash::digest(&raw));

        // Verify order matters
        let hash_reversed = hash_children(&right, &left);
        assert_ne!(hash, hash_reversed);
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(3), 2);
        assert_eq!(bit_length(4), 3);
        assert_eq!(bit_length(255), 8);
        assert_eq!(bit_length(256), 9);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    #[test]
    fn test_split_point() {
        assert_eq!(split_point(0), 0);
        assert_eq!(split_point(1), 0);
        assert_eq!(split_point(2), 1);
        assert_eq!(split_point(3), 2);
        assert_eq!(split_point(4), 2);
        assert_eq!(split_point(5), 4);
        assert_eq!(split_point(8), 4);
        assert_eq!(split_point(9), 8);
        assert_eq!(split_point(10), 8);
        assert_eq!(split_point(1 << 40), 1 << 39);
        assert_eq!(split_point((1 << 40) + 1), 1 << 40);
        assert_eq!(split_point(u64::MAX), 1 << 63);
    }

    #[test]
    fn test_root_hash_small_trees() {
        assert_eq!(root_hash(&[]), Hash::empty());

        let a = hash_leaf(b"a");
        let b = hash_leaf(b"b");
        let c = hash_leaf(b"c");
        assert_eq!(root_hash(&[a]), a);
        assert_eq!(root_hash(&[a, b]), hash_children(&a, &b));
        assert_eq!(
            root_hash(&[a, b, c]),
            hash_children(&hash_children(&a, &b), &c)
        );
    }

    #[test]
    fn test_th_matches_root_hash() {
        for to in b'a'..=b'j' {
            assert_eq!(th(b'a', to), root_hash(&leaves(b'a', to)));
        }
        assert_eq!(th(b'b', b'a'), Hash::empty());
    }

    #[test]
    fn test_inclusion_path_ten_leaves() {
        let all = leaves(b'a', b'j');
        assert_eq!(
            inclusion_path(&all, 0).unwrap(),
            vec![
                th(b'b', b'b'),
                th(b'c', b'd'),
                th(b'e', b'h'),
                th(b'i', b'j')
            ]
        );
        assert_eq!(
            inclusion_path(&all, 9).unwrap(),
            vec![th(b'i', b'i'), th(b'a', b'h')]
        );
        assert!(inclusion_path(&all, 10).is_none());
    }

    #[test]
    fn test_inclusion_path_single_leaf() {
        let one = leaves(b'a', b'a');
        assert_eq!(inclusion_path(&one, 0).unwrap(), Vec::<Hash>::new());
        assert!(inclusion_path(&[], 0).is_none());
    }
}
