use std::cmp::Ordering;

use super::{
    HandicapError, HandicapLookupTable, MAX_ROUNDS_CONSIDERED, MIN_ROUNDS_FOR_INDEX,
    STANDARD_SLOPE,
};
use crate::model::{HandicapIndex, HandicapOutcome};

/// `(113 / slope) * (total_strokes - rating)`
///
/// # Errors
///
/// Will return `Err` if the slope is not a positive finite number or the rating is not finite
pub fn score_differential(total_strokes: i32, slope: f64, rating: f64) -> Result<f64, HandicapError> {
    if !slope.is_finite() || slope <= 0.0 {
        return Err(HandicapError::InvalidSlope(slope));
    }
    if !rating.is_finite() {
        return Err(HandicapError::InvalidRating(rating));
    }
    Ok((STANDARD_SLOPE / slope) * (f64::from(total_strokes) - rating))
}

/// Truncates toward zero to `places` decimals: `truncate(-12.34, 1) == -12.3`.
#[must_use]
pub fn truncate(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).trunc() / factor
}

/// Computes a World Handicap System index.
///
/// `score_differentials` must be ordered by date played, most recent first. The best
/// differentials are picked from the 20 most recent entries, or all of them when fewer
/// are supplied. At least `min(rounds_played, 20)` entries are required.
///
/// # Errors
///
/// Will return `Err` if the table has no usable row for the clamped round count, if fewer
/// differentials are supplied than the clamped round count, or if a considered
/// differential is not finite
pub fn calculate_handicap_index<T>(
    rounds_played: u32,
    score_differentials: &[f64],
    table: &T,
) -> Result<HandicapOutcome, HandicapError>
where
    T: HandicapLookupTable + ?Sized,
{
    if rounds_played < MIN_ROUNDS_FOR_INDEX {
        return Ok(HandicapOutcome::InsufficientRounds { rounds_played });
    }

    let rounds_considered = rounds_played.min(MAX_ROUNDS_CONSIDERED);
    let row = table
        .lookup_handicap_table(rounds_considered)
        .ok_or(HandicapError::MissingLookupRow {
            rounds_played: rounds_considered,
        })?;
    if row.rounds_to_be_used == 0 || row.rounds_to_be_used > rounds_considered {
        return Err(HandicapError::InvalidLookupRow {
            rounds_played: rounds_considered,
            rounds_to_be_used: row.rounds_to_be_used,
        });
    }

    if score_differentials.len() < rounds_considered as usize {
        return Err(HandicapError::HistoryMismatch {
            rounds_played,
            expected: rounds_considered,
            available: score_differentials.len(),
        });
    }
    let window_len = score_differentials.len().min(MAX_ROUNDS_CONSIDERED as usize);
    let window = &score_differentials[..window_len];
    if let Some(position) = window.iter().position(|d| !d.is_finite()) {
        return Err(HandicapError::NonFiniteDifferential { position });
    }

    // stable, so equal differentials keep their date-descending order
    let mut ranked = window.to_vec();
    ranked.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    ranked.truncate(row.rounds_to_be_used as usize);

    let average = ranked.iter().sum::<f64>() / ranked.len() as f64;
    let value = truncate(average, 1) - row.adjustment;

    Ok(HandicapOutcome::Computed(HandicapIndex {
        value,
        rounds_to_be_used: row.rounds_to_be_used,
        rounds_considered,
        adjustment: row.adjustment,
        differentials_used: ranked,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handicap::LookupTable;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn truncates_toward_zero() {
        assert!(close(truncate(12.37, 1), 12.3));
        assert!(close(truncate(-12.34, 1), -12.3));
        assert!(close(truncate(12.3, 1), 12.3));
        assert!(close(truncate(14.9875, 1), 14.9));
        assert!(close(truncate(0.0, 1), 0.0));
        assert!(close(truncate(-0.05, 1), 0.0));
        assert!(close(truncate(14.99999999995, 1), 14.9));
        assert!(close(truncate(-1.25, 1), -1.2));
    }

    #[test]
    fn differential_formula() {
        let d = score_differential(90, 113.0, 72.0).unwrap();
        assert!(close(d, 18.0));
        let d = score_differential(85, 130.0, 71.5).unwrap();
        assert!(close(d, (113.0 / 130.0) * 13.5));
        assert_eq!(
            score_differential(85, 0.0, 71.5),
            Err(HandicapError::InvalidSlope(0.0))
        );
        assert!(matches!(
            score_differential(85, 120.0, f64::NAN),
            Err(HandicapError::InvalidRating(_))
        ));
    }

    #[test]
    fn three_rounds_use_lowest_and_subtract_two() {
        let table = LookupTable::world_handicap_system();
        let outcome = calculate_handicap_index(3, &[20.4, 17.85, 25.0], &table).unwrap();
        let index = outcome.index().unwrap();
        assert_eq!(index.rounds_to_be_used, 1);
        assert_eq!(index.rounds_considered, 3);
        assert_eq!(index.differentials_used, vec![17.85]);
        assert!(close(index.value, 15.8));
    }

    #[test]
    fn rejects_non_finite_differential_in_window() {
        let table = LookupTable::world_handicap_system();
        let err = calculate_handicap_index(3, &[20.0, f64::NAN, 18.0], &table).unwrap_err();
        assert_eq!(err, HandicapError::NonFiniteDifferential { position: 1 });
    }

    #[test]
    fn best_is_picked_from_every_recent_differential() {
        let table = LookupTable::world_handicap_system();
        // three rounds reported, five differentials supplied: all five compete
        let outcome = calculate_handicap_index(3, &[20.0, 19.0, 18.0, 1.0, 5.0], &table).unwrap();
        let index = outcome.index().unwrap();
        assert_eq!(index.differentials_used, vec![1.0]);
        assert!(close(index.value, -1.0));
    }

    #[test]
    fn differentials_past_the_twentieth_are_ignored() {
        let table = LookupTable::world_handicap_system();
        let mut diffs = vec![10.0; 20];
        diffs.push(f64::NAN);
        diffs.push(0.5);
        let outcome = calculate_handicap_index(20, &diffs, &table).unwrap();
        assert!(close(outcome.index().unwrap().value, 10.0));
    }
}
