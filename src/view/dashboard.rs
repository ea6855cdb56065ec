use maud::{DOCTYPE, Markup, html};

use crate::model::{format_date_played, format_over_under};
use crate::stats::{DashboardReport, RoundLine};

fn optional_count(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn render_round_table(rounds: &[RoundLine]) -> Markup {
    html! {
        h3 { "Golf round data" }
        table class="styled-table" {
            thead {
                tr {
                    th { "Date" }
                    th { "Course" }
                    th { "Par" }
                    th { "Shots" }
                    th { "Over/Under" }
                    th { "Differential" }
                    th { "Putts" }
                    th { "FIR" }
                    th { "GIR" }
                }
            }
            tbody {
                @for line in rounds {
                    tr {
                        td { (format_date_played(line.date_played)) }
                        td { (line.course_name) }
                        td { (line.par.to_string()) }
                        td { (line.shots.to_string()) }
                        td { (format_over_under(line.over_under)) }
                        td { (line.score_differential.to_string()) }
                        td { (optional_count(line.putts)) }
                        td { (optional_count(line.fir)) }
                        td { (optional_count(line.gir)) }
                    }
                }
            }
        }
    }
}

pub fn render_dashboard(report: &DashboardReport) -> Markup {
    html! {
        div id="golfing-profile" {
            h2 { "Golfing profile" }
            @for message in report.messages() {
                p { (message) }
            }
        }
        @if !report.rounds.is_empty() {
            div id="round-data" {
                (render_round_table(&report.rounds))
            }
        }
    }
}

pub fn render_dashboard_page(title: &str, report: &DashboardReport) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                (render_dashboard(report))
            }
        }
    }
}
