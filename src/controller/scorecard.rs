use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, ValidationError};
use crate::model::{Course, CourseLayout, HOLES_PER_ROUND};
use crate::storage::Storage;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScorecardHole {
    pub hole: usize,
    pub distance: Option<i32>,
    pub par: Option<i32>,
    pub stroke_index: Option<i32>,
}

/// A blank round card for one course, filled with the course's per-hole card when known.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Scorecard {
    pub course: Course,
    pub holes: Vec<ScorecardHole>,
}

impl Scorecard {
    #[must_use]
    pub fn new(course: Course, layout: Option<&CourseLayout>) -> Self {
        let holes = if course.holes_18 { HOLES_PER_ROUND } else { 9 };
        let holes = (0..holes)
            .map(|idx| ScorecardHole {
                hole: idx + 1,
                distance: layout.and_then(|l| l.distance.0[idx]),
                par: layout.and_then(|l| l.par.0[idx]),
                stroke_index: layout.and_then(|l| l.stroke_index.0[idx]),
            })
            .collect();
        Self { course, holes }
    }
}

/// # Errors
///
/// Will return `Err` if no course has that name or a store read fails
pub fn scorecard_for_course<S: Storage + ?Sized>(
    store: &S,
    course_name: &str,
) -> Result<Scorecard, AppError> {
    let unknown = || ValidationError::UnknownCourse(course_name.to_string());
    let course_id = store.course_id_by_name(course_name)?.ok_or_else(unknown)?;
    let course = store.get_course(course_id)?.ok_or_else(unknown)?;
    let layout = store.get_course_layout(course_id)?;
    debug!(course_id, layout = layout.is_some(), "building scorecard");
    Ok(Scorecard::new(course, layout.as_ref()))
}
