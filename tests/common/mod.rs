#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rusty_handicap::model::{HOLES_PER_ROUND, HoleScores};
use rusty_handicap::storage::{SqliteStore, StorageError};

pub struct TestContext {
    pub store: SqliteStore,
}

/// Fresh in-memory database with the full schema, the lookup table and `fixture_sql`.
pub fn setup_test_context(fixture_sql: &str) -> Result<TestContext, StorageError> {
    let store = SqliteStore::open_in_memory()?;
    store.reset_schema()?;
    if !fixture_sql.is_empty() {
        store.execute_batch(fixture_sql)?;
    }
    Ok(TestContext { store })
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn recorded_at() -> NaiveDateTime {
    date(2022, 7, 1).and_hms_opt(12, 0, 0).expect("valid time")
}

/// Every hole played in `strokes`.
pub fn flat_card(strokes: i32) -> HoleScores {
    HoleScores([Some(strokes); HOLES_PER_ROUND])
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
