//! Core data types for merkle audit trails

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 32-byte SHA-256 hash
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; 32]);

impl Hash {
    /// Create a Hash from a 32-byte array
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create a Hash from a hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(Hash(array))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &hex::encode(self.0)[..8])
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }
}

impl FromStr for Hash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s.trim())
    }
}

// Hex strings on the wire, not byte arrays
impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_string = String::deserialize(deserializer)?;
        Hash::from_hex(&hex_string).map_err(serde::de::Error::custom)
    }
}

/// Chunk hash
pub type ChunkHash = Hash;

/// Root hash of a tree
pub type RootHash = Hash;

/// How two child digests are laid out before hashing their parent.
///
/// Left always comes first. `Hex` hashes the UTF-8 text of both lowercase
/// hex renderings, which is what tools that keep digests as hex strings do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PairEncoding {
    /// 64 raw bytes: left digest then right digest
    #[default]
    Raw,
    /// 128 ASCII bytes: left hex then right hex
    Hex,
}

impl fmt::Display for PairEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairEncoding::Raw => write!(f, "raw"),
            PairEncoding::Hex => write!(f, "hex"),
        }
    }
}

/// A data chunk with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Content hash of the chunk
    pub hash: ChunkHash,
    /// Offset within the original input
    pub offset: u64,
    /// Size of the chunk in bytes
    pub size: u32,
    /// The actual chunk data
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_and_length_check() {
        let hash = Hash::from_bytes([0xab; 32]);
        assert_eq!(hash.to_hex().len(), 64);
        assert_eq!(Hash::from_hex(&hash.to_hex()).unwrap(), hash);
        assert_eq!(
            Hash::from_hex("abcd"),
            Err(hex::FromHexError::InvalidStringLength)
        );
        assert!(Hash::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_debug_is_short_prefix() {
        let hash = Hash::from_bytes([0x01; 32]);
        assert_eq!(format!("{:?}", hash), "Hash(01010101)");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let hash = Hash::from_bytes([0x0f; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", "0f".repeat(32)));
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_pair_encoding_names() {
        assert_eq!(PairEncoding::default(), PairEncoding::Raw);
        assert_eq!(serde_json::to_string(&PairEncoding::Hex).unwrap(), "\"hex\"");
        assert_eq!(PairEncoding::Raw.to_string(), "raw");
    }
}
