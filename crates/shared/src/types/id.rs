//! Typed IDs for type-safe entity references.

use serde::{Deserialize, Serialize};

/// Unique identifier of a configured tax.
///
/// Taxes are numbered by the bookkeeping backend; the id is opaque here and
/// only used for grouping and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(pub i64);

impl TaxId {
    /// Creates an ID from its numeric value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaxId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_tax_id_roundtrip_through_string() {
        let id = TaxId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(TaxId::from_str("42").unwrap(), id);
        assert!(TaxId::from_str("vat").is_err());
    }

    #[test]
    fn test_tax_id_serializes_transparently() {
        let json = serde_json::to_string(&TaxId::new(7)).unwrap();
        assert_eq!(json, "7");
        let id: TaxId = serde_json::from_str("7").unwrap();
        assert_eq!(id.into_inner(), 7);
    }

    #[test]
    fn test_tax_id_ordering() {
        assert!(TaxId::new(1) < TaxId::new(2));
    }
}
