use ahash::AHashMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, ValidationError};
use crate::model::{HoleFlags, HoleScores, NewCourse, NewRound};
use crate::storage::Storage;

/// format we expect is this:
/// { "courses": [{"name": "..", "holes_18": true, "city": "..", "country": "..", "slope": <float>, "rating": <float>, "par": <int>
///               , "layout": {"par": [..18], "distance": [..18], "stroke_index": [..18]} (optional)}, ...]
/// , "rounds": [{"user_id": <int>, "course": "course name", "date_played": "YYYY-MM-DD", "holes": [<int or null> x 18]
///              , "putts": [<int or null> x 18], "fir": [<bool or null> x 18], "gir": [<bool or null> x 18] (each optional)}, ...]
/// }
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SeedData {
    #[serde(default)]
    pub courses: Vec<NewCourse>,
    #[serde(default)]
    pub rounds: Vec<SeedRound>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeedRound {
    pub user_id: i64,
    pub course: String,
    pub date_played: NaiveDate,
    pub holes: HoleScores,
    #[serde(default)]
    pub putts: Option<HoleScores>,
    #[serde(default)]
    pub fir: Option<HoleFlags>,
    #[serde(default)]
    pub gir: Option<HoleFlags>,
}

impl SeedRound {
    fn to_new_round(&self, course_id: i64) -> NewRound {
        NewRound {
            user_id: self.user_id,
            course_id,
            date_played: self.date_played,
            holes: self.holes,
            putts: self.putts,
            fir: self.fir,
            gir: self.gir,
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrefillSummary {
    pub courses_added: usize,
    pub courses_reused: usize,
    pub rounds_added: usize,
}

/// Loads courses and rounds. Courses already stored under the same name are reused.
/// Nothing is written unless every course and round in `seed` is valid.
///
/// # Errors
///
/// Will return `Err` if a course or round is invalid, a round names an unknown course,
/// or an insert fails
pub fn db_prefill<S: Storage + ?Sized>(seed: &SeedData, store: &S) -> Result<PrefillSummary, AppError> {
    // name -> (stored id, holes_18)
    let mut courses: AHashMap<&str, (Option<i64>, bool)> = AHashMap::new();
    for course in &seed.courses {
        course.validate()?;
        let existing = store.course_id_by_name(&course.name)?;
        courses.insert(course.name.as_str(), (existing, course.holes_18));
    }

    for round in &seed.rounds {
        let holes_18 = match courses.get(round.course.as_str()) {
            Some((_, holes_18)) => *holes_18,
            None => {
                let course_id = store
                    .course_id_by_name(&round.course)?
                    .ok_or_else(|| ValidationError::UnknownCourse(round.course.clone()))?;
                let course = store
                    .get_course(course_id)?
                    .ok_or_else(|| ValidationError::UnknownCourse(round.course.clone()))?;
                courses.insert(round.course.as_str(), (Some(course_id), course.holes_18));
                course.holes_18
            }
        };
        round.to_new_round(0).validate(holes_18)?;
    }

    let mut summary = PrefillSummary::default();
    let mut course_ids: AHashMap<&str, i64> = AHashMap::new();
    for course in &seed.courses {
        if course_ids.contains_key(course.name.as_str()) {
            continue;
        }
        let course_id = match courses.get(course.name.as_str()) {
            Some((Some(id), _)) => {
                summary.courses_reused += 1;
                *id
            }
            _ => {
                summary.courses_added += 1;
                store.insert_course(course)?
            }
        };
        course_ids.insert(course.name.as_str(), course_id);
    }
    for (name, (id, _)) in &courses {
        if let Some(id) = id {
            course_ids.entry(*name).or_insert(*id);
        }
    }

    for round in &seed.rounds {
        let course_id = *course_ids
            .get(round.course.as_str())
            .ok_or_else(|| ValidationError::UnknownCourse(round.course.clone()))?;
        store.insert_round(&round.to_new_round(course_id))?;
        summary.rounds_added += 1;
    }

    info!(
        courses_added = summary.courses_added,
        courses_reused = summary.courses_reused,
        rounds_added = summary.rounds_added,
        "database prefilled"
    );
    Ok(summary)
}
