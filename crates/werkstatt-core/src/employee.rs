//! The staff roster.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// An employee of the shop.
///
/// The roster is a closed set: every ledger entry is attributed to exactly
/// one of these names, and the serialized form is the bare name as it
/// appears in exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Employee {
    /// Momo
    Momo,
    /// Lom
    Lom,
    /// Musti
    Musti,
    /// Murat
    Murat,
    /// Jan
    Jan,
    /// Mehdi
    Mehdi,
    /// Antonio
    Antonio,
}

impl Employee {
    /// The full roster, in display order.
    pub const ALL: [Self; 7] = [
        Self::Momo,
        Self::Lom,
        Self::Musti,
        Self::Murat,
        Self::Jan,
        Self::Mehdi,
        Self::Antonio,
    ];

    /// Get the employee name as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Momo => "Momo",
            Self::Lom => "Lom",
            Self::Musti => "Musti",
            Self::Murat => "Murat",
            Self::Jan => "Jan",
            Self::Mehdi => "Mehdi",
            Self::Antonio => "Antonio",
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Employee {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownEmployee {
                name: s.to_string(),
            })
    }
}
