use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HandicapLookupRow {
    pub rounds_played: u32,
    pub rounds_to_be_used: u32,
    /// Subtracted from the truncated average.
    pub adjustment: f64,
}

/// A computed index together with the inputs needed to explain it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HandicapIndex {
    pub value: f64,
    pub rounds_to_be_used: u32,
    pub rounds_considered: u32,
    pub adjustment: f64,
    pub differentials_used: Vec<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HandicapOutcome {
    InsufficientRounds { rounds_played: u32 },
    Computed(HandicapIndex),
}

impl HandicapOutcome {
    #[must_use]
    pub fn index(&self) -> Option<&HandicapIndex> {
        match self {
            HandicapOutcome::Computed(index) => Some(index),
            HandicapOutcome::InsufficientRounds { .. } => None,
        }
    }

    /// Rounds still missing before an index can be calculated.
    #[must_use]
    pub fn rounds_needed(&self) -> u32 {
        match self {
            HandicapOutcome::InsufficientRounds { rounds_played } => {
                crate::handicap::MIN_ROUNDS_FOR_INDEX.saturating_sub(*rounds_played)
            }
            HandicapOutcome::Computed(_) => 0,
        }
    }
}

/// One row of the append-only handicap ledger.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HandicapRecord {
    pub handicap_id: i64,
    pub user_id: i64,
    pub handicap_index: f64,
    pub rounds_considered: u32,
    pub rounds_to_be_used: u32,
    pub recorded_at: NaiveDateTime,
}
