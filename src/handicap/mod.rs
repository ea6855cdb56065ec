pub mod calculator;
pub mod message;
pub mod table;

pub use calculator::*;
pub use message::*;
pub use table::*;

use thiserror::Error;

/// Fewer complete rounds than this never yields an index.
pub const MIN_ROUNDS_FOR_INDEX: u32 = 3;
/// Rounds played saturate here for both the table lookup and the differential window.
pub const MAX_ROUNDS_CONSIDERED: u32 = 20;
/// Slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HandicapError {
    #[error("handicap table has no row for {rounds_played} rounds played")]
    MissingLookupRow { rounds_played: u32 },
    #[error(
        "handicap table row for {rounds_played} rounds uses {rounds_to_be_used} differentials, expected 1 to {rounds_played}"
    )]
    InvalidLookupRow {
        rounds_played: u32,
        rounds_to_be_used: u32,
    },
    #[error(
        "{rounds_played} qualifying rounds reported but only {available} score differentials available, expected {expected}"
    )]
    HistoryMismatch {
        rounds_played: u32,
        expected: u32,
        available: usize,
    },
    #[error("score differential at position {position} is not a finite number")]
    NonFiniteDifferential { position: usize },
    #[error("course slope must be a positive number, got {0}")]
    InvalidSlope(f64),
    #[error("course rating must be a finite number, got {0}")]
    InvalidRating(f64),
}
