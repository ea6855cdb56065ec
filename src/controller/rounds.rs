use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use super::handicap::refresh_handicap;
use crate::error::{AppError, ValidationError};
use crate::handicap::HandicapLookupTable;
use crate::model::{HandicapOutcome, NewCourse, NewRound};
use crate::storage::Storage;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RoundSubmitted {
    pub round_id: i64,
    pub outcome: HandicapOutcome,
}

/// # Errors
///
/// Will return `Err` if the course is invalid or the store rejects it (e.g. a duplicate name)
pub fn add_course<S: Storage + ?Sized>(store: &S, course: &NewCourse) -> Result<i64, AppError> {
    course.validate()?;
    let course_id = store.insert_course(course)?;
    info!(course_id, name = %course.name, "course added");
    Ok(course_id)
}

/// Checks a round against its course without writing anything.
///
/// # Errors
///
/// Will return `Err` if the course does not exist or the scorecard does not fit it
pub fn validate_round<S: Storage + ?Sized>(store: &S, round: &NewRound) -> Result<(), AppError> {
    let course = store
        .get_course(round.course_id)?
        .ok_or_else(|| ValidationError::UnknownCourse(round.course_id.to_string()))?;
    round.validate(course.holes_18)?;
    Ok(())
}

/// Stores a scorecard and recomputes the player's handicap once.
///
/// # Errors
///
/// Will return `Err` if the round is invalid, the insert fails, or the refresh fails
pub fn submit_round<S, T>(
    store: &S,
    table: &T,
    round: &NewRound,
    recorded_at: NaiveDateTime,
) -> Result<RoundSubmitted, AppError>
where
    S: Storage + ?Sized,
    T: HandicapLookupTable + ?Sized,
{
    validate_round(store, round)?;
    let round_id = store.insert_round(round)?;
    info!(round_id, user_id = round.user_id, "round submitted");
    let outcome = refresh_handicap(store, table, round.user_id, recorded_at)?;
    Ok(RoundSubmitted { round_id, outcome })
}
