use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::error::AppError;
use crate::handicap::{
    HandicapLookupTable, MAX_ROUNDS_CONSIDERED, MIN_ROUNDS_FOR_INDEX, calculate_handicap_index,
};
use crate::model::HandicapOutcome;
use crate::storage::{RoundHistoryRepository, Storage};

/// Fetches the user's history and runs the calculator. Differentials are only
/// fetched once the user has enough qualifying rounds.
///
/// # Errors
///
/// Will return `Err` if a repository read fails or the calculator rejects the history
pub fn compute_handicap_for_user<R, T>(
    repo: &R,
    table: &T,
    user_id: i64,
) -> Result<HandicapOutcome, AppError>
where
    R: RoundHistoryRepository + ?Sized,
    T: HandicapLookupTable + ?Sized,
{
    let rounds_played = repo.fetch_qualifying_rounds_played(user_id)?;
    if rounds_played < MIN_ROUNDS_FOR_INDEX {
        debug!(user_id, rounds_played, "not enough rounds for a handicap index");
        return Ok(HandicapOutcome::InsufficientRounds { rounds_played });
    }
    let differentials = repo.fetch_recent_score_differentials(user_id, MAX_ROUNDS_CONSIDERED)?;
    Ok(calculate_handicap_index(rounds_played, &differentials, table)?)
}

/// Computes the index and appends it to the ledger when one was produced.
///
/// # Errors
///
/// Will return `Err` if computing or recording fails
pub fn refresh_handicap<S, T>(
    store: &S,
    table: &T,
    user_id: i64,
    recorded_at: NaiveDateTime,
) -> Result<HandicapOutcome, AppError>
where
    S: Storage + ?Sized,
    T: HandicapLookupTable + ?Sized,
{
    let outcome = compute_handicap_for_user(store, table, user_id)?;
    if let HandicapOutcome::Computed(index) = &outcome {
        let handicap_id = store.record_handicap(user_id, index, recorded_at)?;
        info!(
            user_id,
            handicap_id,
            index = index.value,
            rounds_considered = index.rounds_considered,
            "handicap index refreshed"
        );
    }
    Ok(outcome)
}
