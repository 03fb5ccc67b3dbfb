//! Hash utilities

use crate::core::types::{Hash, PairEncoding};
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Compute SHA-256 hash of a string, encoded as UTF-8
pub fn hash_string(s: &str) -> Hash {
    sha256(s.as_bytes())
}

/// Compute the parent hash of two nodes (left is always hashed first)
pub fn hash_pair(left: &Hash, right: &Hash, encoding: PairEncoding) -> Hash {
    let mut hasher = Sha256::new();
    match encoding {
        PairEncoding::Raw => {
            hasher.update(left.as_bytes());
            hasher.update(right.as_bytes());
        }
        PairEncoding::Hex => {
            hasher.update(left.to_hex().as_bytes());
            hasher.update(right.to_hex().as_bytes());
        }
    }
    Hash::from_bytes(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // sha256("abc")
        let hash = sha256(b"abc");
        assert_eq!(
            hash.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(hash, sha256(b"abc"));
    }

    #[test]
    fn test_hash_string() {
        let s = "AGCT";
        assert_eq!(hash_string(s), sha256(s.as_bytes()));
    }

    #[test]
    fn test_hash_pair_raw() {
        let hash1 = sha256(b"first");
        let hash2 = sha256(b"second");
        let combined = hash_pair(&hash1, &hash2, PairEncoding::Raw);

        let mut concatenated = hash1.as_bytes().to_vec();
        concatenated.extend_from_slice(hash2.as_bytes());
        assert_eq!(combined, sha256(&concatenated));

        // Order should matter
        assert_ne!(combined, hash_pair(&hash2, &hash1, PairEncoding::Raw));
    }

    #[test]
    fn test_hash_pair_hex() {
        let hash1 = sha256(b"first");
        let hash2 = sha256(b"second");
        let combined = hash_pair(&hash1, &hash2, PairEncoding::Hex);

        let text = format!("{}{}", hash1.to_hex(), hash2.to_hex());
        assert_eq!(combined, hash_string(&text));
        assert_ne!(combined, hash_pair(&hash1, &hash2, PairEncoding::Raw));
    }
}
