use clap::{ArgAction, Parser};

use crate::controller::db_prefill::SeedData;
use crate::view::output::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The sqlite database filename, or :memory:
    #[arg(short = 'n', long, value_name = "DATABASE_NAME")]
    pub db_name: String,
    /// If specified, this sql is run on program startup. Separate several files with a semi-colon.
    #[arg(long, value_name = "DATABASE_STARTUP_SCRIPT", value_parser = crate::args::validation::check_readable_file)]
    pub db_startup_script: Option<String>,
    /// Create missing tables and write the World Handicap System lookup table.
    #[arg(long)]
    pub init_schema: bool,
    /// Courses and rounds to load on startup.
    #[arg(
        long,
        value_name = "SEED_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub db_populate_json: Option<SeedData>,
    /// The user to report on.
    #[arg(short = 'u', long, value_name = "USER_ID")]
    pub user_id: Option<i64>,
    /// Print the blank round card of this course.
    #[arg(long, value_name = "COURSE_NAME")]
    pub scorecard: Option<String>,
    /// Recompute the user's handicap index and append it to the ledger.
    #[arg(long)]
    pub refresh: bool,
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Raise the log level; repeat for more.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub db_startup_script: Option<String>,
    pub init_schema: bool,
    pub db_populate_json: Option<SeedData>,
    pub user_id: Option<i64>,
    pub scorecard: Option<String>,
    pub refresh: bool,
    pub format: OutputFormat,
    pub verbose: u8,
    pub combined_sql_script: String,
}
