use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use tracing::debug;

use super::{RoundHistoryRepository, Storage, StorageError};
use crate::handicap::{LookupTable, score_differential};
use crate::model::{
    Course, CourseLayout, HOLES_PER_ROUND, HandicapIndex, HandicapLookupRow, HandicapRecord,
    HoleFlags, HoleScores, NewCourse, NewRound, RoundRecord,
};

const TABLE_DROP: &str = include_str!("../sql/schema/sqlite/00_table_drop.sql");
const SCHEMA: [&str; 11] = [
    include_str!("../sql/schema/sqlite/01_course.sql"),
    include_str!("../sql/schema/sqlite/02_round.sql"),
    include_str!("../sql/schema/sqlite/03_round_shots.sql"),
    include_str!("../sql/schema/sqlite/04_calculation_handicap_index.sql"),
    include_str!("../sql/schema/sqlite/05_dashboard_user_handicap.sql"),
    include_str!("../sql/schema/sqlite/06_round_putts.sql"),
    include_str!("../sql/schema/sqlite/07_round_gir.sql"),
    include_str!("../sql/schema/sqlite/08_round_fir.sql"),
    include_str!("../sql/schema/sqlite/09_course_par.sql"),
    include_str!("../sql/schema/sqlite/10_course_distance.sql"),
    include_str!("../sql/schema/sqlite/11_course_stroke_index.sql"),
];
const HANDICAP_TABLE_SEED: &str =
    include_str!("../sql/schema/sqlite/12_calculation_handicap_index_seed.sql");

const COURSE_COLUMNS: &str =
    "c.course_id, c.name, c.holes_18, c.city, c.country, c.slope, c.rating, c.par";

/// rusqlite backed store; one connection, used from one thread.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// # Errors
    ///
    /// Will return `Err` if the database file cannot be opened
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// # Errors
    ///
    /// Will return `Err` if sqlite cannot allocate the database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Creates missing tables and (re)writes the World Handicap System lookup rows.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any schema statement fails
    pub fn init_schema(&self) -> Result<(), StorageError> {
        self.execute_batch(&SCHEMA.join("\n"))?;
        self.execute_batch(HANDICAP_TABLE_SEED)
    }

    /// Drops every table, then runs [`Self::init_schema`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if any statement fails
    pub fn reset_schema(&self) -> Result<(), StorageError> {
        self.execute_batch(TABLE_DROP)?;
        self.init_schema()
    }

    /// Runs `sql` inside one transaction.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any statement fails; nothing is committed in that case
    pub fn execute_batch(&self, sql: &str) -> Result<(), StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.commit()?;
        Ok(())
    }
}

/// `hole1, ..., hole18` of the table aliased `alias`.
fn hole_columns(alias: &str) -> String {
    (1..=HOLES_PER_ROUND)
        .map(|i| format!("{alias}.hole{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Writes one per-hole row (`round_shots`, `course_par`, ...) keyed by `key_column`.
fn insert_hole_row(
    conn: &Connection,
    table: &str,
    key_column: &str,
    key: i64,
    holes: impl Iterator<Item = Option<i64>>,
) -> rusqlite::Result<()> {
    let columns = (1..=HOLES_PER_ROUND)
        .map(|i| format!("hole{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=HOLES_PER_ROUND + 1)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let query =
        format!("INSERT INTO {table} ({key_column}, {columns}) VALUES ({placeholders});");
    conn.execute(&query, params_from_iter(std::iter::once(Some(key)).chain(holes)))?;
    Ok(())
}

fn scores_to_sql(scores: &HoleScores) -> impl Iterator<Item = Option<i64>> + '_ {
    scores.0.iter().map(|h| h.map(i64::from))
}

fn flags_to_sql(flags: &HoleFlags) -> impl Iterator<Item = Option<i64>> + '_ {
    flags.0.iter().map(|h| h.map(i64::from))
}

fn hole_scores_from_row(row: &Row<'_>, first_col: usize) -> rusqlite::Result<HoleScores> {
    let mut holes = [None; HOLES_PER_ROUND];
    for (i, hole) in holes.iter_mut().enumerate() {
        *hole = row.get(first_col + i)?;
    }
    Ok(HoleScores(holes))
}

fn hole_flags_from_row(row: &Row<'_>, first_col: usize) -> rusqlite::Result<HoleFlags> {
    let mut holes = [None; HOLES_PER_ROUND];
    for (i, hole) in holes.iter_mut().enumerate() {
        *hole = row.get(first_col + i)?;
    }
    Ok(HoleFlags(holes))
}

/// Reads a per-hole card starting at `first_col` when the flag at `present_col` is set.
fn optional_card<T>(
    row: &Row<'_>,
    present_col: usize,
    first_col: usize,
    read: fn(&Row<'_>, usize) -> rusqlite::Result<T>,
) -> rusqlite::Result<Option<T>> {
    let present: bool = row.get(present_col)?;
    if present {
        read(row, first_col).map(Some)
    } else {
        Ok(None)
    }
}

fn course_from_row(row: &Row<'_>, first_col: usize) -> rusqlite::Result<Course> {
    Ok(Course {
        course_id: row.get(first_col)?,
        name: row.get(first_col + 1)?,
        holes_18: row.get(first_col + 2)?,
        city: row.get(first_col + 3)?,
        country: row.get(first_col + 4)?,
        slope: row.get(first_col + 5)?,
        rating: row.get(first_col + 6)?,
        par: row.get(first_col + 7)?,
    })
}

impl RoundHistoryRepository for SqliteStore {
    fn fetch_qualifying_rounds_played(&self, user_id: i64) -> Result<u32, StorageError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(rs.round_id)
             FROM round r
             JOIN round_shots rs ON r.round_id = rs.round_id
             WHERE r.user_id = ?1;",
            params![user_id],
            |row| row.get(0),
        )?;
        u32::try_from(count)
            .map_err(|_| StorageError::new(format!("round count {count} out of range")))
    }

    fn fetch_recent_score_differentials(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<Vec<f64>, StorageError> {
        let query = format!(
            "SELECT r.round_id, c.slope, c.rating, {}
             FROM round r
             JOIN course c ON r.course_id = c.course_id
             JOIN round_shots rs ON r.round_id = rs.round_id
             WHERE r.user_id = ?1
             ORDER BY r.date_played DESC, r.round_id DESC
             LIMIT ?2;",
            hole_columns("rs")
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt
            .query_map(params![user_id, limit], |row| {
                let round_id: i64 = row.get(0)?;
                let slope: f64 = row.get(1)?;
                let rating: f64 = row.get(2)?;
                let holes = hole_scores_from_row(row, 3)?;
                Ok((round_id, slope, rating, holes))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(round_id, slope, rating, holes)| {
                score_differential(holes.total(), slope, rating)
                    .map_err(|e| StorageError::new(format!("round {round_id}: {e}")))
            })
            .collect()
    }
}

impl Storage for SqliteStore {
    fn fetch_handicap_table(&self) -> Result<LookupTable, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT number_of_rounds, rounds_to_be_used, adjustment
             FROM calculation_handicap_index
             ORDER BY number_of_rounds;",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(HandicapLookupRow {
                    rounds_played: row.get(0)?,
                    rounds_to_be_used: row.get(1)?,
                    adjustment: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LookupTable::from_rows(rows))
    }

    fn record_handicap(
        &self,
        user_id: i64,
        index: &HandicapIndex,
        recorded_at: NaiveDateTime,
    ) -> Result<i64, StorageError> {
        self.conn.execute(
            "INSERT INTO dashboard_user_handicap
                (user_id, handicap_index, rounds_considered, rounds_to_be_used, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                user_id,
                index.value,
                index.rounds_considered,
                index.rounds_to_be_used,
                recorded_at
            ],
        )?;
        let handicap_id = self.conn.last_insert_rowid();
        debug!(user_id, handicap_id, value = index.value, "recorded handicap index");
        Ok(handicap_id)
    }

    fn latest_handicap(&self, user_id: i64) -> Result<Option<HandicapRecord>, StorageError> {
        let record = self
            .conn
            .query_row(
                "SELECT handicap_id, user_id, handicap_index, rounds_considered, rounds_to_be_used, recorded_at
                 FROM dashboard_user_handicap
                 WHERE user_id = ?1
                 ORDER BY handicap_id DESC
                 LIMIT 1;",
                params![user_id],
                |row| {
                    Ok(HandicapRecord {
                        handicap_id: row.get(0)?,
                        user_id: row.get(1)?,
                        handicap_index: row.get(2)?,
                        rounds_considered: row.get(3)?,
                        rounds_to_be_used: row.get(4)?,
                        recorded_at: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    fn insert_course(&self, course: &NewCourse) -> Result<i64, StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO course (name, holes_18, city, country, slope, rating, par)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                course.name,
                course.holes_18,
                course.city,
                course.country,
                course.slope,
                course.rating,
                course.par
            ],
        )?;
        let course_id = tx.last_insert_rowid();
        if let Some(layout) = &course.layout {
            insert_hole_row(&tx, "course_par", "course_id", course_id, scores_to_sql(&layout.par))?;
            insert_hole_row(
                &tx,
                "course_distance",
                "course_id",
                course_id,
                scores_to_sql(&layout.distance),
            )?;
            insert_hole_row(
                &tx,
                "course_stroke_index",
                "course_id",
                course_id,
                scores_to_sql(&layout.stroke_index),
            )?;
        }
        tx.commit()?;
        debug!(course_id, name = %course.name, layout = course.layout.is_some(), "inserted course");
        Ok(course_id)
    }

    fn get_course(&self, course_id: i64) -> Result<Option<Course>, StorageError> {
        let query = format!("SELECT {COURSE_COLUMNS} FROM course c WHERE c.course_id = ?1;");
        let course = self
            .conn
            .query_row(&query, params![course_id], |row| course_from_row(row, 0))
            .optional()?;
        Ok(course)
    }

    fn get_course_layout(&self, course_id: i64) -> Result<Option<CourseLayout>, StorageError> {
        let query = format!(
            "SELECT {}, {}, {}
             FROM course_par p
             JOIN course_distance d ON p.course_id = d.course_id
             JOIN course_stroke_index s ON p.course_id = s.course_id
             WHERE p.course_id = ?1;",
            hole_columns("p"),
            hole_columns("d"),
            hole_columns("s")
        );
        let layout = self
            .conn
            .query_row(&query, params![course_id], |row| {
                Ok(CourseLayout {
                    par: hole_scores_from_row(row, 0)?,
                    distance: hole_scores_from_row(row, HOLES_PER_ROUND)?,
                    stroke_index: hole_scores_from_row(row, 2 * HOLES_PER_ROUND)?,
                })
            })
            .optional()?;
        Ok(layout)
    }

    fn course_id_by_name(&self, name: &str) -> Result<Option<i64>, StorageError> {
        let course_id = self
            .conn
            .query_row(
                "SELECT course_id FROM course WHERE name = ?1;",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(course_id)
    }

    fn list_course_names(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT name FROM course ORDER BY name;")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    fn insert_round(&self, round: &NewRound) -> Result<i64, StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO round (user_id, course_id, date_played) VALUES (?1, ?2, ?3);",
            params![round.user_id, round.course_id, round.date_played],
        )?;
        let round_id = tx.last_insert_rowid();
        insert_hole_row(&tx, "round_shots", "round_id", round_id, scores_to_sql(&round.holes))?;
        if let Some(putts) = &round.putts {
            insert_hole_row(&tx, "round_putts", "round_id", round_id, scores_to_sql(putts))?;
        }
        if let Some(fir) = &round.fir {
            insert_hole_row(&tx, "round_fir", "round_id", round_id, flags_to_sql(fir))?;
        }
        if let Some(gir) = &round.gir {
            insert_hole_row(&tx, "round_gir", "round_id", round_id, flags_to_sql(gir))?;
        }
        tx.commit()?;

        debug!(round_id, user_id = round.user_id, course_id = round.course_id, "inserted round");
        Ok(round_id)
    }

    fn fetch_rounds(&self, user_id: i64) -> Result<Vec<RoundRecord>, StorageError> {
        // 0..=6 round and card flags, 7..=14 course, then four 18 column cards
        const COURSE_COL: usize = 7;
        const SHOTS_COL: usize = 15;
        const PUTTS_COL: usize = SHOTS_COL + HOLES_PER_ROUND;
        const FIR_COL: usize = PUTTS_COL + HOLES_PER_ROUND;
        const GIR_COL: usize = FIR_COL + HOLES_PER_ROUND;
        let query = format!(
            "SELECT r.round_id, r.user_id, r.date_played,
                    rs.round_id IS NOT NULL, rp.round_id IS NOT NULL,
                    rf.round_id IS NOT NULL, rg.round_id IS NOT NULL,
                    {COURSE_COLUMNS}, {}, {}, {}, {}
             FROM round r
             JOIN course c ON r.course_id = c.course_id
             LEFT JOIN round_shots rs ON r.round_id = rs.round_id
             LEFT JOIN round_putts rp ON r.round_id = rp.round_id
             LEFT JOIN round_fir rf ON r.round_id = rf.round_id
             LEFT JOIN round_gir rg ON r.round_id = rg.round_id
             WHERE r.user_id = ?1
             ORDER BY r.date_played DESC, r.round_id DESC;",
            hole_columns("rs"),
            hole_columns("rp"),
            hole_columns("rf"),
            hole_columns("rg")
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rounds = stmt
            .query_map(params![user_id], |row| {
                Ok(RoundRecord {
                    round_id: row.get(0)?,
                    user_id: row.get(1)?,
                    date_played: row.get(2)?,
                    course: course_from_row(row, COURSE_COL)?,
                    holes: optional_card(row, 3, SHOTS_COL, hole_scores_from_row)?,
                    putts: optional_card(row, 4, PUTTS_COL, hole_scores_from_row)?,
                    fir: optional_card(row, 5, FIR_COL, hole_flags_from_row)?,
                    gir: optional_card(row, 6, GIR_COL, hole_flags_from_row)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rounds)
    }
}
