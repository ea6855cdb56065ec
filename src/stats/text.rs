use super::{NineComparison, ParAverages, PlayedTotals, RoundSummary};
use crate::model::{format_date_played, format_over_under};

#[must_use]
pub fn played_totals_text(totals: &PlayedTotals) -> String {
    format!(
        "You've played {} rounds across {} golf courses in {} different countries.",
        totals.rounds, totals.courses, totals.countries
    )
}

#[must_use]
pub fn nine_comparison_text(comparison: NineComparison) -> &'static str {
    match comparison {
        NineComparison::FrontNine => "You get off to a hot start!",
        NineComparison::BackNine => "You are able to finish your round well!",
        NineComparison::Consistent => "You are consistent throughout your round!",
    }
}

#[must_use]
pub fn par_averages_text(averages: &ParAverages) -> String {
    format!(
        "For par {} courses, your average 18 hole score is {}. From these rounds, your average front 9 score is {} and your back 9 score is {}. {}",
        averages.par,
        averages.full_round,
        averages.front_nine,
        averages.back_nine,
        nine_comparison_text(averages.comparison())
    )
}

#[must_use]
pub fn best_round_text(best: &RoundSummary) -> String {
    format!(
        "You played your best round at {} ({}, {}) on {}. You shot a {} ({}).",
        best.course_name,
        best.city,
        best.country,
        format_date_played(best.date_played),
        best.score,
        format_over_under(best.over_under)
    )
}

#[must_use]
pub fn recent_round_text(recent: &RoundSummary) -> String {
    format!(
        "The last round you played was on {} at {} ({}, {}). You shot a {} ({}).",
        format_date_played(recent.date_played),
        recent.course_name,
        recent.city,
        recent.country,
        recent.score,
        format_over_under(recent.over_under)
    )
}
