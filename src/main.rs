use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rusty_handicap::args;
use rusty_handicap::controller::dashboard::get_data_for_dashboard;
use rusty_handicap::controller::db_prefill::db_prefill;
use rusty_handicap::controller::handicap::refresh_handicap;
use rusty_handicap::controller::scorecard::scorecard_for_course;
use rusty_handicap::storage::{SqliteStore, Storage};
use rusty_handicap::view::output::render_report;
use rusty_handicap::view::scorecard::render_scorecard;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = args::args_checks().map_err(anyhow::Error::msg)?;
    init_tracing(args.verbose);

    let store = SqliteStore::open(&args.db_name)
        .with_context(|| format!("failed to open database '{}'", args.db_name))?;
    info!(db_name = %args.db_name, "database opened");

    if args.init_schema {
        store.init_schema().context("failed to create schema")?;
    }
    if !args.combined_sql_script.is_empty() {
        store
            .execute_batch(&args.combined_sql_script)
            .context("startup script failed")?;
    }
    if let Some(seed) = &args.db_populate_json {
        db_prefill(seed, &store).context("failed to prefill database")?;
    }

    if let Some(course_name) = &args.scorecard {
        let card = scorecard_for_course(&store, course_name)?;
        println!("{}", render_scorecard(&card, args.format)?);
    }

    let Some(user_id) = args.user_id else {
        if args.scorecard.is_none() {
            warn!("no --user-id given, nothing to report");
        }
        return Ok(());
    };

    let table = store.fetch_handicap_table()?;
    table
        .validate_coverage()
        .context("the handicap lookup table is incomplete")?;

    if args.refresh {
        refresh_handicap(&store, &table, user_id, Utc::now().naive_utc())?;
    }
    let report = get_data_for_dashboard(&store, &table, user_id)?;
    println!("{}", render_report(&report, args.format)?);
    Ok(())
}
