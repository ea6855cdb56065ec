mod database;
mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use clap::Parser;

/// # Errors
///
/// Will return `Err` if the arguments fail validation or a startup script cannot be read
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    clean_args(args)
}

/// # Errors
///
/// Will return `Err` if the arguments fail validation or a startup script cannot be read
pub fn clean_args(args: Args) -> Result<CleanArgs, String> {
    args.validate()?;
    let combined_sql_script = match &args.db_startup_script {
        Some(files) => validation::combine_sql_scripts(files)?,
        None => String::new(),
    };
    Ok(CleanArgs {
        db_name: args.db_name,
        db_startup_script: args.db_startup_script,
        init_schema: args.init_schema,
        db_populate_json: args.db_populate_json,
        user_id: args.user_id,
        scorecard: args.scorecard,
        refresh: args.refresh,
        format: args.format,
        verbose: args.verbose,
        combined_sql_script,
    })
}
