mod common;

use common::{date, flat_card, recorded_at, setup_test_context};
use rusty_handicap::AppError;
use rusty_handicap::controller::dashboard::get_data_for_dashboard;
use rusty_handicap::controller::handicap::refresh_handicap;
use rusty_handicap::controller::scorecard::scorecard_for_course;
use rusty_handicap::controller::rounds::{add_course, submit_round};
use rusty_handicap::error::ValidationError;
use rusty_handicap::handicap::LookupTable;
use rusty_handicap::model::{HandicapOutcome, NewCourse, NewRound};
use rusty_handicap::stats::NineComparison;
use rusty_handicap::storage::{RoundHistoryRepository, Storage};
use rusty_handicap::view::output::{OutputFormat, render_report};
use rusty_handicap::view::scorecard::render_scorecard;

#[test]
fn test3_dashboard_report_for_fixture_user() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    let table = ctx.store.fetch_handicap_table()?;
    let report = get_data_for_dashboard(&ctx.store, &table, 21)?;

    assert_eq!(report.totals.rounds, 5);
    assert_eq!(report.totals.courses, 4);
    assert_eq!(report.totals.countries, 3);

    let averages = report.par_averages.expect("par 72 rounds exist");
    assert_eq!(averages.rounds, 2);
    assert_eq!(averages.full_round, 89);
    assert_eq!(averages.front_nine, 44);
    assert_eq!(averages.back_nine, 45);
    assert_eq!(averages.comparison(), NineComparison::FrontNine);

    let best = report.best_round.as_ref().expect("best round");
    assert_eq!(best.course_name, "Pebble Creek 9");
    assert_eq!(best.over_under, 0);
    let recent = report.recent_round.as_ref().expect("recent round");
    assert_eq!(recent.date_played, date(2022, 4, 1));

    // the unscored round is not listed
    assert_eq!(report.rounds.len(), 4);
    assert_eq!(report.rounds[0].round_id, 5);
    assert_eq!(report.rounds[3].score_differential, 18);

    let messages = report.messages();
    assert_eq!(
        messages,
        vec![
            "Your handicap index is 2.0. As defined by the World Handicap System, this has been calculated using the best 1 score from your 4 most recent rounds.".to_string(),
            "You've played 5 rounds across 4 golf courses in 3 different countries.".to_string(),
            "For par 72 courses, your average 18 hole score is 89. From these rounds, your average front 9 score is 44 and your back 9 score is 45. You get off to a hot start!".to_string(),
            "You played your best round at Pebble Creek 9 (Oslo, Norway) on April 1st, 2022. You shot a 36 (+0).".to_string(),
            "The last round you played was on April 1st, 2022 at Pebble Creek 9 (Oslo, Norway). You shot a 36 (+0).".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test3_dashboard_for_new_user() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    let table = LookupTable::world_handicap_system();
    let report = get_data_for_dashboard(&ctx.store, &table, 404)?;

    assert_eq!(report.handicap, HandicapOutcome::InsufficientRounds { rounds_played: 0 });
    assert!(report.par_averages.is_none());
    assert!(report.best_round.is_none());
    assert_eq!(report.messages().len(), 2);

    let html = render_report(&report, OutputFormat::Html)?;
    assert!(html.contains("You need a minimum of three rounds"));
    assert!(!html.contains("<table"));
    Ok(())
}

#[test]
fn test3_render_formats() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    let table = LookupTable::world_handicap_system();
    let report = get_data_for_dashboard(&ctx.store, &table, 22)?;

    let text = render_report(&report, OutputFormat::Text)?;
    assert!(text.starts_with("You need a minimum of three rounds"));
    assert!(text.contains("You've played 2 rounds across 2 golf courses in 1 different countries."));

    let html = render_report(&report, OutputFormat::Html)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<td>June 11th, 2022</td>"));

    let json: serde_json::Value = serde_json::from_str(&render_report(&report, OutputFormat::Json)?)?;
    assert_eq!(json["handicap"]["state"], "insufficient_rounds");
    assert_eq!(json["handicap"]["rounds_played"], 2);
    assert_eq!(json["rounds"][0]["shots"], 80);
    Ok(())
}

#[test]
fn test3_submit_round_recomputes_once() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    let table = LookupTable::world_handicap_system();

    let course_id = add_course(
        &ctx.store,
        &NewCourse {
            name: "Sunningdale".to_string(),
            holes_18: true,
            city: "Sunningdale".to_string(),
            country: "England".to_string(),
            slope: 113.0,
            rating: 70.0,
            par: 70,
            layout: None,
        },
    )?;

    let submitted = submit_round(
        &ctx.store,
        &table,
        &NewRound::new(22, course_id, date(2022, 7, 1), flat_card(5)),
        recorded_at(),
    )?;
    // three rounds now: 8.0, 18.25.., 20.0; lowest minus 2.0
    let index = submitted.outcome.index().expect("third round unlocks the index");
    assert!((index.value - 6.0).abs() < 1e-9, "got {}", index.value);

    let latest = ctx.store.latest_handicap(22)?.expect("ledger row");
    assert_eq!(latest.rounds_considered, 3);
    assert_eq!(ctx.store.fetch_qualifying_rounds_played(22)?, 3);
    Ok(())
}

#[test]
fn test3_invalid_rounds_are_rejected_before_insert() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    let table = LookupTable::world_handicap_system();

    let err = submit_round(
        &ctx.store,
        &table,
        &NewRound::new(21, 3, date(2022, 7, 1), flat_card(4)),
        recorded_at(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::HoleNotOnCourse { hole: 10 })
    ));

    let err = submit_round(
        &ctx.store,
        &table,
        &NewRound::new(21, 77, date(2022, 7, 1), flat_card(4)),
        recorded_at(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(ValidationError::UnknownCourse(_))));

    assert_eq!(ctx.store.fetch_qualifying_rounds_played(21)?, 4);
    Ok(())
}

#[test]
fn test3_dashboard_shows_recorded_handicap() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    let table = LookupTable::world_handicap_system();
    refresh_handicap(&ctx.store, &table, 21, recorded_at())?;

    // a new round moves the live index, the ledger keeps the refreshed value
    ctx.store
        .insert_round(&NewRound::new(21, 1, date(2022, 4, 10), flat_card(4)))?;
    let report = get_data_for_dashboard(&ctx.store, &table, 21)?;

    let recorded = report.recorded_handicap.as_ref().expect("ledger row");
    assert!((recorded.handicap_index - 2.0).abs() < 1e-9);
    let live = report.handicap.index().expect("live index");
    assert!(live.value.abs() < 1e-9, "got {}", live.value);

    let messages = report.messages();
    assert_eq!(
        messages[1],
        "Your last recorded handicap index is 2.0, saved on July 1st, 2022."
    );
    assert_eq!(messages.len(), 6);
    Ok(())
}

#[test]
fn test3_scorecard_for_nine_hole_course() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;

    let card = scorecard_for_course(&ctx.store, "Pebble Creek 9")?;
    assert_eq!(card.holes.len(), 9);
    assert!(card.holes.iter().all(|h| h.par.is_none()));

    let csv = render_scorecard(&card, OutputFormat::Text)?;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Hole,Distance,Par,Stroke Index,Strokes,Putts,FIR,GIR"));
    assert_eq!(lines.next(), Some("1,,,,,,,"));
    assert_eq!(csv.lines().count(), 10);

    let err = scorecard_for_course(&ctx.store, "Augusta National").unwrap_err();
    assert!(matches!(err, AppError::Validation(ValidationError::UnknownCourse(_))));
    Ok(())
}
