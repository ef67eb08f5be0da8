//! Client model.

use std::fmt;

use crate::error::{LedgerError, LedgerResult};

use super::meets_min_length;

/// A named customer shipping packages with the airline.
///
/// The name is validated once at construction and never changes. Two
/// clients with the same name are still separate values; the
/// [`Airline`](crate::Airline) registry is what keeps names unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: String,
}

impl Client {
    /// Creates a client, rejecting names shorter than three characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use airline_ledger::models::Client;
    ///
    /// let client = Client::new("John Doe").unwrap();
    /// assert_eq!(client.name(), "John Doe");
    /// assert!(Client::new("Jo").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> LedgerResult<Self> {
        let name = name.into();
        if !meets_min_length(&name) {
            return Err(LedgerError::InvalidClientName { name });
        }
        Ok(Self { name })
    }

    /// Returns the client's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_name() {
        let client = Client::new("John Doe").unwrap();
        assert_eq!(client.name(), "John Doe");
    }

    #[test]
    fn test_new_with_short_name_fails() {
        match Client::new("Jo") {
            Err(LedgerError::InvalidClientName { name }) => assert_eq!(name, "Jo"),
            other => panic!("Expected InvalidClientName, got {:?}", other),
        }
    }

    #[test]
    fn test_three_characters_is_enough() {
        assert!(Client::new("Ada").is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert!(Client::new("éé").is_err());
        assert!(Client::new("ééé").is_ok());
    }

    #[test]
    fn test_display_is_name() {
        let client = Client::new("Jane Roe").unwrap();
        assert_eq!(client.to_string(), "Jane Roe");
    }
}
