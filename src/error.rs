use thiserror::Error;

use crate::handicap::HandicapError;
use crate::storage::StorageError;

/// Rejected user input for a course, round or seed file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be blank")]
    Blank(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("a scorecard needs at least one recorded hole")]
    EmptyScorecard,
    #[error("hole {hole} has {strokes} strokes, expected 1 to 20")]
    HoleOutOfRange { hole: usize, strokes: i32 },
    #[error("hole {hole} is not on a 9 hole course")]
    HoleNotOnCourse { hole: usize },
    #[error("hole {hole} has {putts} putts but only {strokes} strokes")]
    PuttsOutOfRange { hole: usize, putts: i32, strokes: i32 },
    #[error("hole {hole} has putts, fairway or green recorded but no strokes")]
    StatWithoutStrokes { hole: usize },
    #[error("course card {field} is invalid on hole {hole}")]
    InvalidLayout { field: &'static str, hole: usize },
    #[error("course card pars add up to {actual}, course par is {expected}")]
    LayoutParMismatch { expected: i32, actual: i32 },
    #[error("unknown course: {0}")]
    UnknownCourse(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("db error: {0}")]
    Db(#[from] StorageError),
    #[error("handicap error: {0}")]
    Handicap(#[from] HandicapError),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
