use std::{fs, path::PathBuf};

use crate::controller::db_prefill::SeedData;

/// # Errors
///
/// Will return `Err` if any of the semi-colon separated files is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    for file in file.split(';') {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a valid seed document
pub fn check_readable_file_and_json(file: &str) -> Result<SeedData, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    parse_seed(&contents).map_err(|e| format!("The json file '{file}' is not in the correct format: {e}"))
}

/// # Errors
///
/// Will return `Err` if the json does not match the seed format
pub fn parse_seed(contents: &str) -> Result<SeedData, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Reads and joins the startup scripts in the order given.
///
/// # Errors
///
/// Will return `Err` if a file cannot be read
pub fn combine_sql_scripts(files: &str) -> Result<String, String> {
    files
        .split(';')
        .map(|file| {
            fs::read_to_string(file).map_err(|e| format!("Failed to read '{file}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|scripts| scripts.join("\n"))
}
