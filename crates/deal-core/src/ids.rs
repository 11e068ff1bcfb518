//! Venture identifiers.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Unique numeric id of a venture.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct VentureId(pub u64);

impl VentureId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, used for sequential assignment.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for VentureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VentureId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for VentureId {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::Validation(format!("invalid venture id '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_id() {
        assert_eq!(" 42 ".parse::<VentureId>().unwrap(), VentureId(42));
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = "ven-1".parse::<VentureId>().unwrap_err();
        assert!(err.to_string().contains("invalid venture id 'ven-1'"));
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&VentureId(7)).unwrap(), "7");
    }
}
