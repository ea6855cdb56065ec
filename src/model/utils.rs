use chrono::{Datelike, NaiveDate};

#[must_use]
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `March 3rd, 2022`
#[must_use]
pub fn format_date_played(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

#[must_use]
pub fn format_over_under(over_under: i32) -> String {
    if over_under >= 0 {
        format!("+{over_under}")
    } else {
        format!("{over_under}")
    }
}
