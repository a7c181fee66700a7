//! Address value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A free-text address as typed by the user
///
/// The only rule is that it is not blank; everything else is left to the
/// geocoding provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse user input into an address
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyAddress` for empty or whitespace-only input.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyAddress);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The address text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_input() {
        let address = Address::parse("  Istanbul  ").unwrap();
        assert_eq!(address.as_str(), "Istanbul");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Address::parse(""), Err(DomainError::EmptyAddress));
    }

    #[test]
    fn parse_rejects_whitespace_only() {
        assert_eq!(Address::parse(" \t\n "), Err(DomainError::EmptyAddress));
    }

    #[test]
    fn display_shows_text() {
        let address = Address::parse("Kızılay, Ankara").unwrap();
        assert_eq!(address.to_string(), "Kızılay, Ankara");
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<Address, _> = serde_json::from_str("\"Ankara\"");
        assert!(ok.is_ok());

        let err: Result<Address, _> = serde_json::from_str("\"   \"");
        assert!(err.is_err());
    }
}
