use ahash::RandomState;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;

use crate::handicap::{HandicapError, score_differential};
use crate::model::{HoleScores, RoundRecord};

pub const AVERAGES_PAR: i32 = 72;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedTotals {
    pub rounds: usize,
    pub courses: usize,
    pub countries: usize,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NineComparison {
    FrontNine,
    BackNine,
    Consistent,
}

/// Averages rounded to whole strokes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParAverages {
    pub par: i32,
    pub rounds: usize,
    pub full_round: i32,
    pub front_nine: i32,
    pub back_nine: i32,
}

impl ParAverages {
    #[must_use]
    pub fn comparison(&self) -> NineComparison {
        match self.front_nine.cmp(&self.back_nine) {
            std::cmp::Ordering::Less => NineComparison::FrontNine,
            std::cmp::Ordering::Greater => NineComparison::BackNine,
            std::cmp::Ordering::Equal => NineComparison::Consistent,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundSummary {
    pub round_id: i64,
    pub date_played: NaiveDate,
    pub course_name: String,
    pub city: String,
    pub country: String,
    pub score: i32,
    pub over_under: i32,
}

/// One row of the per-round table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundLine {
    pub round_id: i64,
    pub date_played: NaiveDate,
    pub course_name: String,
    pub par: i32,
    pub shots: i32,
    pub over_under: i32,
    /// Truncated toward zero.
    pub score_differential: i32,
    /// `None` when no putts card was submitted; likewise for fairways and greens.
    pub putts: Option<i32>,
    pub fir: Option<i32>,
    pub gir: Option<i32>,
}

fn scored(rounds: &[RoundRecord]) -> impl Iterator<Item = (&RoundRecord, HoleScores)> {
    rounds.iter().filter_map(|r| r.holes.map(|h| (r, h)))
}

fn summarize(round: &RoundRecord, holes: HoleScores) -> RoundSummary {
    let score = holes.total();
    RoundSummary {
        round_id: round.round_id,
        date_played: round.date_played,
        course_name: round.course.name.clone(),
        city: round.course.city.clone(),
        country: round.course.country.clone(),
        score,
        over_under: score - round.course.par,
    }
}

/// Counts every round, scored or not.
#[must_use]
pub fn played_totals(rounds: &[RoundRecord]) -> PlayedTotals {
    let courses: HashSet<&str, RandomState> =
        rounds.iter().map(|r| r.course.name.as_str()).collect();
    let countries: HashSet<&str, RandomState> =
        rounds.iter().map(|r| r.course.country.as_str()).collect();
    PlayedTotals {
        rounds: rounds.len(),
        courses: courses.len(),
        countries: countries.len(),
    }
}

fn rounded_mean(values: &[i32]) -> i32 {
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    (sum as f64 / values.len() as f64).round() as i32
}

/// `None` when the user has no scored round on a course of that par.
#[must_use]
pub fn par_averages(rounds: &[RoundRecord], par: i32) -> Option<ParAverages> {
    let cards: Vec<HoleScores> = scored(rounds)
        .filter(|(r, _)| r.course.par == par)
        .map(|(_, h)| h)
        .collect();
    if cards.is_empty() {
        return None;
    }
    let totals: Vec<i32> = cards.iter().map(HoleScores::total).collect();
    let fronts: Vec<i32> = cards.iter().map(HoleScores::front_nine).collect();
    let backs: Vec<i32> = cards.iter().map(HoleScores::back_nine).collect();
    Some(ParAverages {
        par,
        rounds: cards.len(),
        full_round: rounded_mean(&totals),
        front_nine: rounded_mean(&fronts),
        back_nine: rounded_mean(&backs),
    })
}

/// Lowest score relative to par; ties go to the earliest round.
#[must_use]
pub fn best_round(rounds: &[RoundRecord]) -> Option<RoundSummary> {
    scored(rounds)
        .map(|(r, h)| summarize(r, h))
        .min_by_key(|s| (s.over_under, s.date_played, s.round_id))
}

/// Latest scored round; same-day rounds resolve to the later submission.
#[must_use]
pub fn recent_round(rounds: &[RoundRecord]) -> Option<RoundSummary> {
    scored(rounds)
        .map(|(r, h)| summarize(r, h))
        .min_by_key(|s| (Reverse(s.date_played), Reverse(s.round_id)))
}

/// Scored rounds, most recent first.
///
/// # Errors
///
/// Will return `Err` if a course has an unusable slope or rating
pub fn round_lines(rounds: &[RoundRecord]) -> Result<Vec<RoundLine>, HandicapError> {
    let mut lines = scored(rounds)
        .map(|(r, h)| {
            let shots = h.total();
            let differential = score_differential(shots, r.course.slope, r.course.rating)?;
            Ok(RoundLine {
                round_id: r.round_id,
                date_played: r.date_played,
                course_name: r.course.name.clone(),
                par: r.course.par,
                shots,
                over_under: shots - r.course.par,
                score_differential: differential.trunc() as i32,
                putts: r.total_putts(),
                fir: r.fairways_hit(),
                gir: r.greens_hit(),
            })
        })
        .collect::<Result<Vec<_>, HandicapError>>()?;
    lines.sort_by_key(|l| (Reverse(l.date_played), Reverse(l.round_id)));
    Ok(lines)
}
