//! Tree construction tests
//!
//! Checks root derivation against hand-computed expectations.

use merkle_audit::{
    core::hash::{hash_pair, hash_string},
    Hash, MerkleError, MerkleTree, PairEncoding,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn h(s: &str) -> Hash {
    hash_string(s)
}

fn pair(l: &Hash, r: &Hash) -> Hash {
    hash_pair(l, r, PairEncoding::Raw)
}

#[test]
fn test_deterministic_root() -> anyhow::Result<()> {
    let chunks = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let first = MerkleTree::from_chunks(chunks)?;
    let second = MerkleTree::from_chunks(chunks)?;
    assert_eq!(first.root(), second.root());
    Ok(())
}

#[test]
fn test_single_leaf_root_is_chunk_hash() -> anyhow::Result<()> {
    let tree = MerkleTree::from_chunks(["lonely chunk"])?;
    assert_eq!(tree.root(), h("lonely chunk"));
    assert_eq!(tree.leaf_count(), 1);
    Ok(())
}

#[test]
fn test_three_leaves_duplicate_last() -> anyhow::Result<()> {
    let tree = MerkleTree::from_chunks(["A", "B", "C"])?;
    let expected = pair(&pair(&h("A"), &h("B")), &pair(&h("C"), &h("C")));
    assert_eq!(tree.root(), expected);
    Ok(())
}

#[test]
fn test_four_leaf_end_to_end_root() -> anyhow::Result<()> {
    let tree = MerkleTree::from_chunks(["aa", "bb", "cc", "dd"])?;
    let expected = pair(&pair(&h("aa"), &h("bb")), &pair(&h("cc"), &h("dd")));
    assert_eq!(tree.root(), expected);
    assert_eq!(
        tree.leaves().collect::<Vec<_>>(),
        vec![h("aa"), h("bb"), h("cc"), h("dd")]
    );
    Ok(())
}

#[test]
fn test_five_leaves_duplicate_at_every_odd_level() -> anyhow::Result<()> {
    // Level 1 has three nodes, so its last node is paired with itself too
    let tree = MerkleTree::from_chunks(["1", "2", "3", "4", "5"])?;
    let ab = pair(&h("1"), &h("2"));
    let cd = pair(&h("3"), &h("4"));
    let ee = pair(&h("5"), &h("5"));
    let expected = pair(&pair(&ab, &cd), &pair(&ee, &ee));
    assert_eq!(tree.root(), expected);
    assert_eq!(tree.depth(), 3);
    Ok(())
}

#[test]
fn test_hex_encoding_concatenates_hex_text() -> anyhow::Result<()> {
    let tree = MerkleTree::from_chunks_with_encoding(["aa", "bb", "cc"], PairEncoding::Hex)?;

    let text_pair = |l: &Hash, r: &Hash| hash_string(&format!("{}{}", l, r));
    let expected = text_pair(
        &text_pair(&h("aa"), &h("bb")),
        &text_pair(&h("cc"), &h("cc")),
    );

    assert_eq!(tree.root(), expected);
    assert_eq!(tree.encoding(), PairEncoding::Hex);
    Ok(())
}

#[test]
fn test_from_hashes_matches_from_chunks() -> anyhow::Result<()> {
    let chunks = ["x", "y", "z"];
    let hashes: Vec<Hash> = chunks.iter().map(|c| h(c)).collect();
    let a = MerkleTree::from_hashes(&hashes, PairEncoding::Raw)?;
    let b = MerkleTree::from_chunks(chunks)?;
    assert_eq!(a.root(), b.root());
    Ok(())
}

#[test]
fn test_empty_input_is_rejected() {
    let result = MerkleTree::from_hashes(&[], PairEncoding::Raw);
    assert!(matches!(result, Err(MerkleError::EmptyInput)));
}

#[rstest]
#[case(1, 0)]
#[case(2, 1)]
#[case(3, 2)]
#[case(4, 2)]
#[case(5, 3)]
#[case(8, 3)]
#[case(9, 4)]
#[case(33, 6)]
fn test_depth_by_leaf_count(#[case] leaves: usize, #[case] depth: usize) -> anyhow::Result<()> {
    let chunks: Vec<String> = (0..leaves).map(|i| format!("chunk-{i}")).collect();
    let tree = MerkleTree::from_chunks(&chunks)?;
    assert_eq!(tree.leaf_count(), leaves);
    assert_eq!(tree.depth(), depth);
    Ok(())
}

#[test]
fn test_tree_is_shareable_across_threads() -> anyhow::Result<()> {
    let chunks: Vec<String> = (0..17).map(|i| format!("part {i}")).collect();
    let tree = MerkleTree::from_chunks(&chunks)?;
    let root = tree.root();

    std::thread::scope(|scope| {
        for chunk in &chunks {
            let tree = &tree;
            scope.spawn(move || {
                let leaf = hash_string(chunk);
                let trail = tree.audit_trail(&leaf).unwrap();
                assert!(trail.verify(&leaf, &root));
            });
        }
    });
    Ok(())
}
