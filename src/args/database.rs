use super::types::Args;

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the database name or scorecard course is blank, the user id
    /// is not positive, or a refresh is requested without a user
    pub fn validate(&self) -> Result<(), String> {
        if self.db_name.trim().is_empty() {
            return Err("A database name is required".to_string());
        }
        if self.scorecard.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err("--scorecard needs a course name".to_string());
        }
        match self.user_id {
            Some(id) if id <= 0 => Err(format!("User id must be positive, got {id}")),
            None if self.refresh => Err("--refresh needs a --user-id".to_string()),
            _ => Ok(()),
        }
    }
}
