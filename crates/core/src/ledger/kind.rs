//! Transaction direction.

use serde::{Deserialize, Serialize};

/// Direction of a ledger transaction.
///
/// Amounts are always positive magnitudes; direction is carried here, never
/// by the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Decreases the client balance.
    Debit,
    /// Increases the client balance.
    Credit,
}

impl TransactionKind {
    /// Parses a kind from its wire representation.
    ///
    /// Accepts exactly `"debit"` or `"credit"`; anything else (including
    /// case variants) is invalid input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "debit" => Some(Self::Debit),
            "credit" => Some(Self::Credit),
            _ => None,
        }
    }

    /// Wire representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
