use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::Course;

pub const HOLES_PER_ROUND: usize = 18;
pub const MAX_STROKES_PER_HOLE: i32 = 20;

/// Strokes per hole; `None` for holes the player did not record.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct HoleScores(pub [Option<i32>; HOLES_PER_ROUND]);

impl HoleScores {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.sum_holes(0..HOLES_PER_ROUND)
    }

    #[must_use]
    pub fn front_nine(&self) -> i32 {
        self.sum_holes(0..9)
    }

    #[must_use]
    pub fn back_nine(&self) -> i32 {
        self.sum_holes(9..HOLES_PER_ROUND)
    }

    #[must_use]
    pub fn holes_recorded(&self) -> usize {
        self.0.iter().filter(|h| h.is_some()).count()
    }

    fn sum_holes(&self, range: std::ops::Range<usize>) -> i32 {
        self.0[range].iter().map(|h| h.unwrap_or(0)).sum()
    }
}

impl From<[Option<i32>; HOLES_PER_ROUND]> for HoleScores {
    fn from(value: [Option<i32>; HOLES_PER_ROUND]) -> Self {
        Self(value)
    }
}

/// Per-hole hit or miss marks, used for fairways and greens.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct HoleFlags(pub [Option<bool>; HOLES_PER_ROUND]);

impl HoleFlags {
    #[must_use]
    pub fn hits(&self) -> i32 {
        self.0.iter().filter(|h| **h == Some(true)).count() as i32
    }

    #[must_use]
    pub fn holes_recorded(&self) -> usize {
        self.0.iter().filter(|h| h.is_some()).count()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewRound {
    pub user_id: i64,
    pub course_id: i64,
    pub date_played: NaiveDate,
    pub holes: HoleScores,
    #[serde(default)]
    pub putts: Option<HoleScores>,
    /// Fairways in regulation.
    #[serde(default)]
    pub fir: Option<HoleFlags>,
    /// Greens in regulation.
    #[serde(default)]
    pub gir: Option<HoleFlags>,
}

impl NewRound {
    /// A round with strokes only.
    #[must_use]
    pub fn new(user_id: i64, course_id: i64, date_played: NaiveDate, holes: HoleScores) -> Self {
        Self {
            user_id,
            course_id,
            date_played,
            holes,
            putts: None,
            fir: None,
            gir: None,
        }
    }

    /// `holes_18` is the flag of the course the round was played on.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no hole is recorded, a hole is out of range, a
    /// 9 hole course has scores past the 9th hole, or putts, fairways or greens
    /// are recorded on a hole without strokes
    pub fn validate(&self, holes_18: bool) -> Result<(), ValidationError> {
        if self.holes.holes_recorded() == 0 {
            return Err(ValidationError::EmptyScorecard);
        }
        for (idx, strokes) in self.holes.0.iter().enumerate() {
            let hole = idx + 1;
            let Some(strokes) = *strokes else { continue };
            if !(1..=MAX_STROKES_PER_HOLE).contains(&strokes) {
                return Err(ValidationError::HoleOutOfRange { hole, strokes });
            }
            if !holes_18 && hole > 9 {
                return Err(ValidationError::HoleNotOnCourse { hole });
            }
        }
        for (idx, strokes) in self.holes.0.iter().enumerate() {
            let hole = idx + 1;
            let putts = self.putts.and_then(|p| p.0[idx]);
            let fir = self.fir.and_then(|f| f.0[idx]);
            let gir = self.gir.and_then(|g| g.0[idx]);
            let Some(strokes) = *strokes else {
                if putts.is_some() || fir.is_some() || gir.is_some() {
                    return Err(ValidationError::StatWithoutStrokes { hole });
                }
                continue;
            };
            if let Some(putts) = putts {
                if !(0..=strokes).contains(&putts) {
                    return Err(ValidationError::PuttsOutOfRange { hole, putts, strokes });
                }
            }
        }
        Ok(())
    }
}

/// A stored round joined with its course; `holes` is `None` when no scorecard was submitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundRecord {
    pub round_id: i64,
    pub user_id: i64,
    pub date_played: NaiveDate,
    pub course: Course,
    pub holes: Option<HoleScores>,
    pub putts: Option<HoleScores>,
    pub fir: Option<HoleFlags>,
    pub gir: Option<HoleFlags>,
}

impl RoundRecord {
    #[must_use]
    pub fn total_strokes(&self) -> Option<i32> {
        self.holes.map(|h| h.total())
    }

    #[must_use]
    pub fn over_under_par(&self) -> Option<i32> {
        self.total_strokes().map(|s| s - self.course.par)
    }

    /// `None` when no putts card was submitted.
    #[must_use]
    pub fn total_putts(&self) -> Option<i32> {
        self.putts.map(|p| p.total())
    }

    #[must_use]
    pub fn fairways_hit(&self) -> Option<i32> {
        self.fir.map(|f| f.hits())
    }

    #[must_use]
    pub fn greens_hit(&self) -> Option<i32> {
        self.gir.map(|g| g.hits())
    }
}
