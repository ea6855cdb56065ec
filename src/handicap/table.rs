use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{HandicapError, MAX_ROUNDS_CONSIDERED};
use crate::model::HandicapLookupRow;

/// Read access to the rounds-played lookup table.
pub trait HandicapLookupTable {
    fn lookup_handicap_table(&self, rounds_played: u32) -> Option<HandicapLookupRow>;
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LookupTable {
    rows: BTreeMap<u32, HandicapLookupRow>,
}

/// (rounds played, rounds to be used, adjustment)
const WORLD_HANDICAP_SYSTEM: [(u32, u32, f64); 20] = [
    (1, 0, 0.0),
    (2, 0, 0.0),
    (3, 1, 2.0),
    (4, 1, 1.0),
    (5, 1, 0.0),
    (6, 2, 1.0),
    (7, 2, 0.0),
    (8, 2, 0.0),
    (9, 3, 0.0),
    (10, 3, 0.0),
    (11, 3, 0.0),
    (12, 4, 0.0),
    (13, 4, 0.0),
    (14, 4, 0.0),
    (15, 5, 0.0),
    (16, 5, 0.0),
    (17, 6, 0.0),
    (18, 6, 0.0),
    (19, 7, 0.0),
    (20, 8, 0.0),
];

impl LookupTable {
    #[must_use]
    pub fn world_handicap_system() -> Self {
        Self::from_rows(WORLD_HANDICAP_SYSTEM.iter().map(
            |&(rounds_played, rounds_to_be_used, adjustment)| HandicapLookupRow {
                rounds_played,
                rounds_to_be_used,
                adjustment,
            },
        ))
    }

    /// Later rows win when a key repeats.
    pub fn from_rows(rows: impl IntoIterator<Item = HandicapLookupRow>) -> Self {
        Self {
            rows: rows.into_iter().map(|r| (r.rounds_played, r)).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> Vec<HandicapLookupRow> {
        self.rows.values().copied().collect()
    }

    /// # Errors
    ///
    /// Will return `Err` naming the first key in 1..=20 without a row
    pub fn validate_coverage(&self) -> Result<(), HandicapError> {
        match (1..=MAX_ROUNDS_CONSIDERED).find(|k| !self.rows.contains_key(k)) {
            Some(rounds_played) => Err(HandicapError::MissingLookupRow { rounds_played }),
            None => Ok(()),
        }
    }
}

impl HandicapLookupTable for LookupTable {
    fn lookup_handicap_table(&self, rounds_played: u32) -> Option<HandicapLookupRow> {
        self.rows.get(&rounds_played).copied()
    }
}
