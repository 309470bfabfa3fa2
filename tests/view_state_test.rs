use chrono::{DateTime, Local, NaiveDate, TimeZone};
use uuid::Uuid;

use repscount::exercise;
use repscount::ui::view_state::{compute_view_state, resolve_section_rows, EmptyState};

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(name: &str, category: &str, timestamp: Option<DateTime<Local>>, order_index: i32) -> exercise::Model {
    exercise::Model {
        uuid: Uuid::new_v4().to_string(),
        name: name.to_string(),
        category: category.to_string(),
        timestamp: timestamp.map(|dt| dt.to_rfc3339()),
        order_index,
    }
}

fn now() -> DateTime<Local> {
    local(2024, 1, 5, 12, 0)
}

#[test]
fn test_grouping_partitions_every_record_exactly_once() {
    let records = vec![
        record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 0)), 0),
        record("Squats", "Legs", Some(local(2024, 1, 2, 9, 0)), 1),
        record("Plank", "Core", Some(local(2024, 1, 1, 19, 30)), 2),
        record("Deadlift", "Back", None, 3),
    ];

    let view = compute_view_state(&records, None, now());

    let mut seen: Vec<Uuid> = view
        .sections
        .iter()
        .flat_map(|s| s.rows.iter().map(|r| r.uuid))
        .collect();
    seen.sort();
    let mut expected: Vec<Uuid> = records.iter().map(|r| Uuid::parse_str(&r.uuid).unwrap()).collect();
    expected.sort();

    assert_eq!(seen, expected);
    assert!(view.sections.iter().all(|s| !s.rows.is_empty()), "no empty buckets");
}

#[test]
fn test_sections_render_most_recent_day_first() {
    let records = vec![
        record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 0)), 0),
        record("Squats", "Legs", Some(local(2024, 1, 3, 9, 0)), 1),
        record("Plank", "Core", Some(local(2024, 1, 2, 10, 0)), 2),
    ];

    let view = compute_view_state(&records, None, now());

    let days: Vec<NaiveDate> = view.sections.iter().map(|s| s.day).collect();
    assert_eq!(days, vec![day(2024, 1, 3), day(2024, 1, 2), day(2024, 1, 1)]);
}

#[test]
fn test_two_sections_scenario() {
    // Two records on Jan 1, one on Jan 2: Jan 2 renders first with one row
    let records = vec![
        record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 0)), 0),
        record("Plank", "Core", Some(local(2024, 1, 1, 9, 0)), 1),
        record("Squats", "Legs", Some(local(2024, 1, 2, 10, 0)), 2),
    ];

    let view = compute_view_state(&records, None, now());

    assert_eq!(view.sections.len(), 2);
    assert_eq!(view.sections[0].day, day(2024, 1, 2));
    assert_eq!(view.sections[0].rows.len(), 1);
    assert_eq!(view.sections[1].day, day(2024, 1, 1));
    assert_eq!(view.sections[1].rows.len(), 2);
    assert!(view.empty.is_none());
}

#[test]
fn test_filter_shows_exactly_one_bucket() {
    let records = vec![
        record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 0)), 0),
        record("Squats", "Legs", Some(local(2024, 1, 2, 9, 0)), 1),
    ];

    let view = compute_view_state(&records, Some(day(2024, 1, 1)), now());

    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].day, day(2024, 1, 1));
    assert_eq!(view.sections[0].rows.len(), 1);
    assert_eq!(view.sections[0].rows[0].name, "Push-ups");
    assert!(view.empty.is_none());
}

#[test]
fn test_filter_on_empty_day_is_distinct_empty_state() {
    // Records exist, but none on Jan 3
    let records = vec![
        record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 0)), 0),
        record("Plank", "Core", Some(local(2024, 1, 1, 9, 0)), 1),
        record("Squats", "Legs", Some(local(2024, 1, 2, 10, 0)), 2),
    ];

    let view = compute_view_state(&records, Some(day(2024, 1, 3)), now());

    assert!(view.sections.is_empty());
    assert_eq!(view.empty, Some(EmptyState::NothingOnDate(day(2024, 1, 3))));
}

#[test]
fn test_empty_collection_is_no_exercises_yet() {
    let view = compute_view_state(&[], None, now());

    assert!(view.sections.is_empty());
    assert_eq!(view.empty, Some(EmptyState::NoExercisesYet));

    // A filter makes no difference when nothing has ever been logged
    let view = compute_view_state(&[], Some(day(2024, 1, 3)), now());
    assert_eq!(view.empty, Some(EmptyState::NoExercisesYet));
}

#[test]
fn test_missing_timestamp_groups_under_now() {
    let records = vec![record("Deadlift", "Back", None, 0)];

    let view = compute_view_state(&records, None, now());

    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].day, now().date_naive());
    assert_eq!(view.sections[0].rows[0].time, None);
}

#[test]
fn test_malformed_timestamp_degrades_like_missing() {
    let mut broken = record("Deadlift", "Back", None, 0);
    broken.timestamp = Some("not-a-timestamp".to_string());

    let view = compute_view_state(&[broken], None, now());

    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].day, now().date_naive());
    assert_eq!(view.sections[0].rows[0].time, None);
}

#[test]
fn test_rows_keep_time_of_day() {
    let records = vec![record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 15)), 0)];

    let view = compute_view_state(&records, None, now());

    let time = view.sections[0].rows[0].time.unwrap();
    assert_eq!(time.format("%H:%M").to_string(), "08:15");
}

#[test]
fn test_resolve_section_rows_maps_section_local_indices() {
    // Three records in the Jan 1 bucket, plus one earlier record so the
    // section's rows sit at a different position in the global list
    let records = vec![
        record("Warm-up", "Cardio", Some(local(2023, 12, 31, 7, 0)), 0),
        record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 0)), 1),
        record("Plank", "Core", Some(local(2024, 1, 1, 9, 0)), 2),
        record("Squats", "Legs", Some(local(2024, 1, 1, 10, 0)), 3),
    ];

    let view = compute_view_state(&records, None, now());
    let target = day(2024, 1, 1);

    let resolved = resolve_section_rows(&view, target, &[0, 2]);

    let section = view.sections.iter().find(|s| s.day == target).unwrap();
    assert_eq!(resolved, vec![section.rows[0].uuid, section.rows[2].uuid]);
    assert_eq!(section.rows[0].name, "Push-ups");
    assert_eq!(section.rows[2].name, "Squats");
}

#[test]
fn test_resolve_section_rows_ignores_out_of_range() {
    let records = vec![record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 0)), 0)];
    let view = compute_view_state(&records, None, now());

    let resolved = resolve_section_rows(&view, day(2024, 1, 1), &[0, 7]);
    assert_eq!(resolved.len(), 1);

    let resolved = resolve_section_rows(&view, day(2024, 1, 2), &[0]);
    assert!(resolved.is_empty());
}

#[test]
fn test_row_at_flat_indexing() {
    let records = vec![
        record("Push-ups", "Core", Some(local(2024, 1, 1, 8, 0)), 0),
        record("Plank", "Core", Some(local(2024, 1, 1, 9, 0)), 1),
        record("Squats", "Legs", Some(local(2024, 1, 2, 10, 0)), 2),
    ];

    let view = compute_view_state(&records, None, now());

    assert_eq!(view.row_count(), 3);
    // Flat index 0 is the first row of the most recent section
    assert_eq!(view.row(0).unwrap().name, "Squats");
    assert_eq!(view.row(1).unwrap().name, "Push-ups");
    assert_eq!(view.row(2).unwrap().name, "Plank");
    assert!(view.row(3).is_none());
}
