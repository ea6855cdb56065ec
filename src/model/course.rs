use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{HOLES_PER_ROUND, HoleScores};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub course_id: i64,
    pub name: String,
    pub holes_18: bool,
    pub city: String,
    pub country: String,
    pub slope: f64,
    pub rating: f64,
    pub par: i32,
}

/// Per-hole card of a course: par, distance and stroke index.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CourseLayout {
    pub par: HoleScores,
    pub distance: HoleScores,
    pub stroke_index: HoleScores,
}

impl CourseLayout {
    /// # Errors
    ///
    /// Will return `Err` if a value is not positive, a 9 hole course has values past
    /// the 9th hole, a stroke index repeats or exceeds the hole count, or a complete
    /// par card does not add up to `course_par`
    pub fn validate(&self, holes_18: bool, course_par: i32) -> Result<(), ValidationError> {
        let holes = if holes_18 { HOLES_PER_ROUND } else { 9 };
        let mut seen_index = [false; HOLES_PER_ROUND];
        for idx in 0..HOLES_PER_ROUND {
            let hole = idx + 1;
            for (field, card) in [
                ("par", &self.par),
                ("distance", &self.distance),
                ("stroke index", &self.stroke_index),
            ] {
                match card.0[idx] {
                    Some(_) if hole > holes => {
                        return Err(ValidationError::InvalidLayout { field, hole });
                    }
                    Some(v) if v <= 0 => {
                        return Err(ValidationError::InvalidLayout { field, hole });
                    }
                    _ => {}
                }
            }
            if let Some(si) = self.stroke_index.0[idx] {
                let slot = usize::try_from(si - 1).ok().filter(|s| *s < holes);
                match slot {
                    Some(slot) if !seen_index[slot] => seen_index[slot] = true,
                    _ => {
                        return Err(ValidationError::InvalidLayout {
                            field: "stroke index",
                            hole,
                        });
                    }
                }
            }
        }
        if self.par.holes_recorded() == holes && self.par.total() != course_par {
            return Err(ValidationError::LayoutParMismatch {
                expected: course_par,
                actual: self.par.total(),
            });
        }
        Ok(())
    }
}

/// A course as submitted by a user, before it has an id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewCourse {
    pub name: String,
    #[serde(default = "default_holes_18")]
    pub holes_18: bool,
    pub city: String,
    pub country: String,
    pub slope: f64,
    pub rating: f64,
    pub par: i32,
    #[serde(default)]
    pub layout: Option<CourseLayout>,
}

fn default_holes_18() -> bool {
    true
}

impl NewCourse {
    /// # Errors
    ///
    /// Will return `Err` if a text field is blank, slope, rating or par is not positive,
    /// or the per-hole card is invalid
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Blank(field));
            }
        }
        if !self.slope.is_finite() || self.slope <= 0.0 {
            return Err(ValidationError::NotPositive("slope"));
        }
        if !self.rating.is_finite() || self.rating <= 0.0 {
            return Err(ValidationError::NotPositive("rating"));
        }
        if self.par <= 0 {
            return Err(ValidationError::NotPositive("par"));
        }
        match &self.layout {
            Some(layout) => layout.validate(self.holes_18, self.par),
            None => Ok(()),
        }
    }
}
