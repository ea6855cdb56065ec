use maud::{DOCTYPE, Markup, html};

use super::output::OutputFormat;
use crate::controller::scorecard::Scorecard;
use crate::error::AppError;

const CSV_HEADER: &str = "Hole,Distance,Par,Stroke Index,Strokes,Putts,FIR,GIR";

fn cell(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// One line per hole with empty columns left for the round.
#[must_use]
pub fn render_scorecard_csv(card: &Scorecard) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(card.holes.iter().map(|h| {
        format!(
            "{},{},{},{},,,,",
            h.hole,
            cell(h.distance),
            cell(h.par),
            cell(h.stroke_index)
        )
    }));
    lines.join("\n")
}

pub fn render_scorecard_table(card: &Scorecard) -> Markup {
    html! {
        h3 { (card.course.name) }
        table class="styled-table" {
            thead {
                tr {
                    @for heading in CSV_HEADER.split(',') {
                        th { (heading) }
                    }
                }
            }
            tbody {
                @for h in &card.holes {
                    tr {
                        td { (h.hole.to_string()) }
                        td { (cell(h.distance)) }
                        td { (cell(h.par)) }
                        td { (cell(h.stroke_index)) }
                        td {}
                        td {}
                        td {}
                        td {}
                    }
                }
            }
        }
    }
}

pub fn render_scorecard_page(card: &Scorecard) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Scorecard" }
            }
            body { (render_scorecard_table(card)) }
        }
    }
}

/// # Errors
///
/// Will return `Err` if the card cannot be serialized to json
pub fn render_scorecard(card: &Scorecard, format: OutputFormat) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => render_scorecard_csv(card),
        OutputFormat::Html => render_scorecard_page(card).into_string(),
        OutputFormat::Json => serde_json::to_string_pretty(card)?,
    })
}
