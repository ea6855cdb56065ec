pub mod aggregators;
pub mod text;

pub use aggregators::*;
pub use text::*;

use serde::{Deserialize, Serialize};

use crate::handicap::{HandicapError, handicap_text, recorded_handicap_text};
use crate::model::{HandicapOutcome, HandicapRecord, RoundRecord};

/// Everything the dashboard shows for one user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardReport {
    pub user_id: i64,
    pub handicap: HandicapOutcome,
    /// Latest entry of the handicap ledger, if the user was ever refreshed.
    pub recorded_handicap: Option<HandicapRecord>,
    pub totals: PlayedTotals,
    pub par_averages: Option<ParAverages>,
    pub best_round: Option<RoundSummary>,
    pub recent_round: Option<RoundSummary>,
    pub rounds: Vec<RoundLine>,
}

impl DashboardReport {
    /// # Errors
    ///
    /// Will return `Err` if a round's course cannot produce a score differential
    pub fn build(
        user_id: i64,
        handicap: HandicapOutcome,
        recorded_handicap: Option<HandicapRecord>,
        rounds: &[RoundRecord],
    ) -> Result<Self, HandicapError> {
        Ok(Self {
            user_id,
            handicap,
            recorded_handicap,
            totals: played_totals(rounds),
            par_averages: par_averages(rounds, AVERAGES_PAR),
            best_round: best_round(rounds),
            recent_round: recent_round(rounds),
            rounds: round_lines(rounds)?,
        })
    }

    /// The dashboard paragraphs in display order; sections without data are left out.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![handicap_text(&self.handicap)];
        if let Some(record) = &self.recorded_handicap {
            messages.push(recorded_handicap_text(record));
        }
        messages.push(played_totals_text(&self.totals));
        if let Some(averages) = &self.par_averages {
            messages.push(par_averages_text(averages));
        }
        if let Some(best) = &self.best_round {
            messages.push(best_round_text(best));
        }
        if let Some(recent) = &self.recent_round {
            messages.push(recent_round_text(recent));
        }
        messages
    }
}
