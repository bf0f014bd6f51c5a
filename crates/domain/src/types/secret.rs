//! Secret string type with automatic memory zeroization
//!
//! Wraps credentials (client secret, API key, bearer and refresh tokens) so
//! they are zeroed on drop and never show up in `Debug` or `Display` output.

use std::fmt;

use serde::{Deserialize, Deserializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret string that zeroes memory on drop
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    /// Create a new secret string
    pub fn new(value: impl Into<String>) -> Self {
        Self { inner: value.into() }
    }

    /// Expose the inner value
    ///
    /// The exposed value should not be stored or logged. Use only for the
    /// immediate operation that needs it (a header, a form field).
    pub fn expose(&self) -> &str {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(***)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_are_redacted() {
        let secret = SecretString::new("aga81WRW");

        assert_eq!(format!("{secret:?}"), "SecretString(***)");
        assert_eq!(secret.to_string(), "***");
        assert_eq!(secret.expose(), "aga81WRW");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let secret: SecretString = serde_json::from_str("\"token-123\"").unwrap();
        assert_eq!(secret.expose(), "token-123");
        assert_eq!(secret.len(), 9);
        assert!(!secret.is_empty());
    }
}
