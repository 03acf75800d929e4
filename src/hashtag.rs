//! Hashtag value type.
//!
//! A [`Hashtag`] stores the bare tag text, without the leading `#` marker.
//! Rendering with `Display` puts the marker back.

use sha2::{Digest, Sha256};
use std::fmt;

/// The character that marks a hashtag on the platform.
pub const MARKER: char = '#';

/// A normalized hashtag, compared and hashed by its bare tag text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hashtag {
    tag: String,
}

impl Hashtag {
    /// Creates a hashtag from raw text, stripping a single leading marker if present.
    ///
    /// `"#DaftPunk"` and `"DaftPunk"` produce equal values. Case is kept as received.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hashofhashtag::Hashtag;
    ///
    /// assert_eq!(Hashtag::new("#DaftPunk"), Hashtag::new("DaftPunk"));
    /// assert_eq!(Hashtag::new("#DaftPunk").to_string(), "#DaftPunk");
    /// ```
    pub fn new(raw: &str) -> Self {
        let tag = raw.strip_prefix(MARKER).unwrap_or(raw);
        Hashtag {
            tag: tag.to_string(),
        }
    }

    /// Returns true if the candidate is a marker-prefixed tag with at least one
    /// character after the marker.
    ///
    /// Plain trending phrases (no marker) and absent names are not hashtags.
    pub fn is_hashtag(candidate: Option<&str>) -> bool {
        match candidate {
            Some(text) => text.chars().count() > 1 && text.starts_with(MARKER),
            None => false,
        }
    }

    /// Builds a hashtag from a candidate name only when [`Hashtag::is_hashtag`] accepts it.
    pub fn from_candidate(candidate: Option<&str>) -> Option<Self> {
        if Self::is_hashtag(candidate) {
            candidate.map(Hashtag::new)
        } else {
            None
        }
    }

    /// The bare tag text, without marker.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// SHA-256 of the UTF-8 tag text, lowercase hex, as a new hashtag.
    pub fn hashed(&self) -> Hashtag {
        let digest = Sha256::digest(self.tag.as_bytes());
        Hashtag {
            tag: hex::encode(digest),
        }
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", MARKER, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_marker() {
        assert_eq!(Hashtag::new("##double").tag(), "#double");
        assert_eq!(Hashtag::new("plain").tag(), "plain");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(!Hashtag::is_hashtag(Some("#")));
        assert!(Hashtag::is_hashtag(Some("#é")));
        assert!(!Hashtag::is_hashtag(Some("é")));
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["#Foo", "Foo", "#日本", "#a_b"] {
            let once = Hashtag::new(raw);
            let twice = Hashtag::new(&once.to_string());
            assert_eq!(once, twice);
        }
    }
}
