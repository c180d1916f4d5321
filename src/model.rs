//! Roster data types.

use serde::{Deserialize, Serialize};

/// A tracked picker and their daily scores.
///
/// A score of `0` marks a day with no recorded observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picker {
    /// Picker name, assumed unique within a roster.
    pub name: String,

    /// Daily scores in observation order.
    pub scores: Vec<i64>,
}

impl Picker {
    pub fn new(name: impl Into<String>, scores: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }
}

/// Immutable roster of pickers, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub pickers: Vec<Picker>,
}

impl Dataset {
    pub fn new(pickers: Vec<Picker>) -> Self {
        Self { pickers }
    }

    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }
}
