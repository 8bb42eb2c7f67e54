//! Content fingerprints
//!
//! Provides [`Fingerprint`], a 32-byte Blake3 hash used to compare compiled
//! outputs and to seed deterministic image URLs.

use std::fmt::{self, Display, Formatter};

/// A 32-byte content hash (Blake3)
///
/// Displays as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Hash arbitrary data
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Hash a sequence of `(name, content)` entries
    ///
    /// Entries are length-prefixed so that moving bytes between a name and its
    /// content changes the result.
    #[must_use]
    pub fn of_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut hasher = blake3::Hasher::new();
        for (name, content) in entries {
            hasher.update(&(name.len() as u64).to_le_bytes());
            hasher.update(name.as_bytes());
            hasher.update(&(content.len() as u64).to_le_bytes());
            hasher.update(content.as_bytes());
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_is_deterministic() {
        assert_eq!(Fingerprint::compute(b"abc"), Fingerprint::compute(b"abc"));
        assert_ne!(Fingerprint::compute(b"abc"), Fingerprint::compute(b"abd"));
    }

    #[test]
    fn entries_are_length_prefixed() {
        let a = Fingerprint::of_entries([("ab", "c")]);
        let b = Fingerprint::of_entries([("a", "bc")]);
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_hex_and_short_is_its_prefix() {
        let fp = Fingerprint::compute(b"site");
        let full = fp.to_string();
        assert_eq!(full.len(), 64);
        assert!(full.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(fp.short(), &full[..16]);
    }
}
