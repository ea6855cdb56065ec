pub mod sqlite;

pub use sqlite::SqliteStore;

use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt;

use crate::handicap::LookupTable;
use crate::model::{
    Course, CourseLayout, HandicapIndex, HandicapRecord, NewCourse, NewRound, RoundRecord,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// The two reads the handicap calculation needs.
pub trait RoundHistoryRepository {
    /// Rounds of the user that have a scorecard.
    fn fetch_qualifying_rounds_played(&self, user_id: i64) -> Result<u32, StorageError>;

    /// Differentials of the `limit` most recent scored rounds, most recent first.
    fn fetch_recent_score_differentials(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<Vec<f64>, StorageError>;
}

pub trait Storage: RoundHistoryRepository {
    fn fetch_handicap_table(&self) -> Result<LookupTable, StorageError>;

    /// Appends to the ledger and returns the new row id.
    fn record_handicap(
        &self,
        user_id: i64,
        index: &HandicapIndex,
        recorded_at: NaiveDateTime,
    ) -> Result<i64, StorageError>;
    fn latest_handicap(&self, user_id: i64) -> Result<Option<HandicapRecord>, StorageError>;

    /// Inserts the course and, when given, its per-hole card together.
    fn insert_course(&self, course: &NewCourse) -> Result<i64, StorageError>;
    fn get_course(&self, course_id: i64) -> Result<Option<Course>, StorageError>;
    fn get_course_layout(&self, course_id: i64) -> Result<Option<CourseLayout>, StorageError>;
    fn course_id_by_name(&self, name: &str) -> Result<Option<i64>, StorageError>;
    fn list_course_names(&self) -> Result<Vec<String>, StorageError>;

    /// Inserts the round, its scorecard and any putts, fairway or green cards together.
    fn insert_round(&self, round: &NewRound) -> Result<i64, StorageError>;
    /// Every round of the user, scored or not, most recent first.
    fn fetch_rounds(&self, user_id: i64) -> Result<Vec<RoundRecord>, StorageError>;
}
