mod common;

use common::{close, date, flat_card, recorded_at, setup_test_context};
use rusty_handicap::controller::handicap::{compute_handicap_for_user, refresh_handicap};
use rusty_handicap::handicap::{HandicapLookupTable, LookupTable};
use rusty_handicap::model::{
    CourseLayout, HandicapOutcome, HoleFlags, HoleScores, NewCourse, NewRound,
};
use rusty_handicap::storage::{RoundHistoryRepository, Storage};

#[test]
fn test2_qualifying_count_skips_rounds_without_card() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;

    // user 21 has five rounds, one without a scorecard
    assert_eq!(ctx.store.fetch_qualifying_rounds_played(21)?, 4);
    assert_eq!(ctx.store.fetch_qualifying_rounds_played(22)?, 2);
    assert_eq!(ctx.store.fetch_qualifying_rounds_played(99)?, 0);
    Ok(())
}

#[test]
fn test2_differentials_are_most_recent_first() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;

    let diffs = ctx.store.fetch_recent_score_differentials(21, 20)?;
    assert_eq!(diffs.len(), 4);
    let expected = [3.0, 16.0, 14.0, 18.0];
    for (got, want) in diffs.iter().zip(expected) {
        assert!(close(*got, want), "got {diffs:?}");
    }

    let limited = ctx.store.fetch_recent_score_differentials(21, 2)?;
    assert_eq!(limited.len(), 2);
    assert!(close(limited[1], 16.0));

    let slope_130 = ctx.store.fetch_recent_score_differentials(22, 20)?;
    assert!(close(slope_130[1], (113.0 / 130.0) * 21.0));
    Ok(())
}

#[test]
fn test2_seeded_lookup_table_matches_built_in() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context("")?;
    let stored = ctx.store.fetch_handicap_table()?;
    stored.validate_coverage()?;
    assert_eq!(stored, LookupTable::world_handicap_system());

    let row = stored.lookup_handicap_table(6).unwrap();
    assert_eq!(row.rounds_to_be_used, 2);
    assert!(close(row.adjustment, 1.0));
    Ok(())
}

#[test]
fn test2_handicap_from_store() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    let table = ctx.store.fetch_handicap_table()?;

    // four rounds: lowest differential (3.0) minus 1.0
    let outcome = compute_handicap_for_user(&ctx.store, &table, 21)?;
    let index = outcome.index().expect("index computed");
    assert!(close(index.value, 2.0), "got {}", index.value);
    assert_eq!(index.rounds_considered, 4);

    let outcome = compute_handicap_for_user(&ctx.store, &table, 22)?;
    assert_eq!(outcome, HandicapOutcome::InsufficientRounds { rounds_played: 2 });
    Ok(())
}

#[test]
fn test2_ledger_is_append_only() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    let table = ctx.store.fetch_handicap_table()?;
    assert!(ctx.store.latest_handicap(21)?.is_none());

    refresh_handicap(&ctx.store, &table, 21, recorded_at())?;
    let first = ctx.store.latest_handicap(21)?.expect("recorded");
    assert!(close(first.handicap_index, 2.0));
    assert_eq!(first.rounds_to_be_used, 1);
    assert_eq!(first.recorded_at, recorded_at());

    // a better round lowers the index, the old row stays
    ctx.store
        .insert_round(&NewRound::new(21, 1, date(2022, 4, 10), flat_card(4)))?;
    refresh_handicap(&ctx.store, &table, 21, recorded_at())?;
    let second = ctx.store.latest_handicap(21)?.expect("recorded");
    assert!(second.handicap_id > first.handicap_id);
    // five rounds: differentials 0.0, 3.0, 16.0, 14.0, 18.0; best one, no adjustment
    assert!(close(second.handicap_index, 0.0), "got {}", second.handicap_index);

    // insufficient rounds never write to the ledger
    refresh_handicap(&ctx.store, &table, 22, recorded_at())?;
    assert!(ctx.store.latest_handicap(22)?.is_none());
    Ok(())
}

#[test]
fn test2_courses_by_name() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;
    assert_eq!(ctx.store.course_id_by_name("Kingsbarns")?, Some(2));
    assert_eq!(ctx.store.course_id_by_name("Augusta National")?, None);
    assert_eq!(
        ctx.store.list_course_names()?,
        vec!["Kingsbarns", "Pebble Creek 9", "Royal Dornoch", "Valderrama"]
    );
    let course = ctx.store.get_course(3)?.expect("course 3");
    assert!(!course.holes_18);
    assert_eq!(course.par, 36);
    Ok(())
}

#[test]
fn test2_stat_cards_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;

    let mut greens = HoleFlags::default();
    for hole in greens.0.iter_mut().take(9) {
        *hole = Some(true);
    }
    greens.0[3] = Some(false);
    let round = NewRound {
        putts: Some(HoleScores([Some(2); 18])),
        gir: Some(greens),
        ..NewRound::new(22, 1, date(2022, 8, 1), flat_card(4))
    };
    let round_id = ctx.store.insert_round(&round)?;

    let rounds = ctx.store.fetch_rounds(22)?;
    let stored = &rounds[0];
    assert_eq!(stored.round_id, round_id);
    assert_eq!(stored.total_putts(), Some(36));
    assert_eq!(stored.greens_hit(), Some(8));
    assert_eq!(stored.gir.unwrap().0[12], None);
    // no fairway card was sent
    assert_eq!(stored.fairways_hit(), None);

    // older rounds carry no stat cards at all
    assert!(rounds[1].putts.is_none() && rounds[1].gir.is_none());
    Ok(())
}

#[test]
fn test2_course_layout_is_stored_with_course() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(include_str!("test2.sql"))?;

    let mut layout = CourseLayout::default();
    for idx in 0..18 {
        layout.par.0[idx] = Some(match idx % 6 {
            2 => 3,
            5 => 5,
            _ => 4,
        });
        layout.distance.0[idx] = Some(350 + idx as i32);
        layout.stroke_index.0[idx] = Some(idx as i32 + 1);
    }
    let par = layout.par.total();
    let course_id = ctx.store.insert_course(&NewCourse {
        name: "Carnoustie".to_string(),
        holes_18: true,
        city: "Carnoustie".to_string(),
        country: "Scotland".to_string(),
        slope: 145.0,
        rating: 75.1,
        par,
        layout: Some(layout),
    })?;

    assert_eq!(ctx.store.get_course_layout(course_id)?, Some(layout));
    // fixture courses were stored without a card
    assert_eq!(ctx.store.get_course_layout(1)?, None);
    Ok(())
}
