use crate::model::{HandicapIndex, HandicapOutcome, HandicapRecord, format_date_played};

fn plural(count: u32, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

#[must_use]
pub fn computed_handicap_text(index: &HandicapIndex) -> String {
    format!(
        "Your handicap index is {:.1}. As defined by the World Handicap System, this has been calculated using the best {} {} from your {} most recent rounds.",
        index.value,
        index.rounds_to_be_used,
        plural(index.rounds_to_be_used, "score", "scores"),
        index.rounds_considered
    )
}

#[must_use]
pub fn insufficient_rounds_text(rounds_played: u32, rounds_needed: u32) -> String {
    format!(
        "You need a minimum of three rounds to calculate your handicap index. You've played {rounds_played}. {rounds_needed} more {} to go.",
        plural(rounds_needed, "round", "rounds")
    )
}

/// The ledger value, which can lag behind the live index until the next refresh.
#[must_use]
pub fn recorded_handicap_text(record: &HandicapRecord) -> String {
    format!(
        "Your last recorded handicap index is {:.1}, saved on {}.",
        record.handicap_index,
        format_date_played(record.recorded_at.date())
    )
}

#[must_use]
pub fn handicap_text(outcome: &HandicapOutcome) -> String {
    match outcome {
        HandicapOutcome::Computed(index) => computed_handicap_text(index),
        HandicapOutcome::InsufficientRounds { rounds_played } => {
            insufficient_rounds_text(*rounds_played, outcome.rounds_needed())
        }
    }
}
