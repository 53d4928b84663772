//! Record and condition types.

use crate::error::CommerceError;
use crate::ids::RecordId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical grading of a record, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    Mint,
    NearMint,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Every grade, best first.
    pub const ALL: [Condition; 6] = [
        Condition::Mint,
        Condition::NearMint,
        Condition::VeryGood,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Mint => "Mint",
            Condition::NearMint => "Near Mint",
            Condition::VeryGood => "Very Good",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl FromStr for Condition {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidSelector {
                field: "condition",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record in the catalog. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Unique record identifier.
    pub id: RecordId,
    /// Album title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Release year.
    pub year: u16,
    /// Genre label, compared by exact equality.
    pub genre: String,
    /// Physical condition.
    pub condition: Condition,
    /// Unit price.
    pub price: Money,
    /// Glyph shown in place of cover art.
    pub glyph: String,
}

impl Record {
    /// Case-insensitive substring match against title or artist.
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}
