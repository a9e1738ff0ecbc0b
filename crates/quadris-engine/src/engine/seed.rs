use std::fmt::Write as _;

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 128-bit seed for deterministic pseudo-random behavior.
///
/// The same seed reproduces the same piece sequence (and, for agents, the
/// same exploration choices), enabling reproducible training runs and
/// deterministic tests. Serialized as a 32-character hex string.
///
/// # Example
///
/// ```
/// use quadris_engine::{GameSession, Seed};
/// use rand::Rng as _;
///
/// let seed: Seed = rand::rng().random();
/// let a = GameSession::with_seed(seed);
/// let b = GameSession::with_seed(seed);
/// // `a` and `b` spawn the same sequence of pieces
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Seed([u8; 16]);

impl Seed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl Distribution<Seed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Seed {
        let mut bytes = [0; 16];
        rng.fill(&mut bytes);
        Seed(bytes)
    }
}

impl Serialize for Seed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        if hex_str.len() != 32 {
            return Err(serde::de::Error::custom(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            )));
        }
        let num = u128::from_str_radix(&hex_str, 16)
            .map_err(|e| serde::de::Error::custom(format!("invalid hex: {hex_str} ({e})")))?;
        Ok(Self(num.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_random_seed() {
        let seed: Seed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let deserialized: Seed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(seed.0, deserialized.0);
    }

    #[test]
    fn test_format_is_32_char_hex_string() {
        let seed: Seed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let hex_str = serialized.trim_matches('"');
        assert_eq!(hex_str.len(), 32);
        assert!(hex_str.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_value_all_zeros() {
        let seed = Seed([0u8; 16]);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"00000000000000000000000000000000\"");
    }

    #[test]
    fn test_byte_order_is_big_endian() {
        let seed = Seed([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");
    }

    #[test]
    fn test_error_on_wrong_length() {
        assert!(serde_json::from_str::<Seed>("\"0123\"").is_err());
        assert!(
            serde_json::from_str::<Seed>("\"0123456789abcdef0123456789abcdef0\"").is_err()
        );
    }

    #[test]
    fn test_error_on_invalid_hex() {
        let json = "\"ghijklmnopqrstuvwxyzghijklmnopqr\"";
        assert!(serde_json::from_str::<Seed>(json).is_err());
    }
}
