//! Pure view-state derivation for the exercise list screen.
//!
//! `compute_view_state` is a synchronous function of the record collection,
//! the optional date filter, and the current time; it is re-run in full on
//! every store notification and holds no state of its own. Keeping it pure
//! makes the grouping rules directly testable without a terminal.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::entities::exercise;
use crate::utils::datetime;

/// One renderable row of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRow {
    pub uuid: Uuid,
    pub name: String,
    pub category: String,
    /// Time of day, shown on the row; absent when the record has no
    /// (parseable) timestamp.
    pub time: Option<NaiveTime>,
}

/// One calendar-day section. Never empty by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySection {
    pub day: NaiveDate,
    pub rows: Vec<ExerciseRow>,
}

/// The two distinct nothing-to-show cases the user must be able to tell
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection has never had a record (or has none right now)
    NoExercisesYet,
    /// Records exist, but none on the filtered day
    NothingOnDate(NaiveDate),
}

/// Everything the list screen renders, derived in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Visible sections: all buckets most-recent-first, or exactly the
    /// filtered bucket.
    pub sections: Vec<DaySection>,
    pub empty: Option<EmptyState>,
}

impl ViewState {
    /// Total number of selectable rows across visible sections.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    /// Resolve a flat row index to its section and position within it.
    pub fn row_at(&self, index: usize) -> Option<(&DaySection, usize)> {
        let mut remaining = index;
        for section in &self.sections {
            if remaining < section.rows.len() {
                return Some((section, remaining));
            }
            remaining -= section.rows.len();
        }
        None
    }

    /// The row at a flat index, if any.
    pub fn row(&self, index: usize) -> Option<&ExerciseRow> {
        self.row_at(index).map(|(section, pos)| &section.rows[pos])
    }
}

/// Partition records into day buckets and apply the filter.
///
/// Bucket key is the record's timestamp truncated to the local calendar
/// day; records without a timestamp (or with one that does not parse) fall
/// under `now`'s day. `now` is a parameter so callers and tests agree on
/// what "today" means.
pub fn compute_view_state(
    records: &[exercise::Model],
    filter: Option<NaiveDate>,
    now: DateTime<Local>,
) -> ViewState {
    if records.is_empty() {
        return ViewState {
            sections: Vec::new(),
            empty: Some(EmptyState::NoExercisesYet),
        };
    }

    let mut buckets: BTreeMap<NaiveDate, Vec<ExerciseRow>> = BTreeMap::new();
    for record in records {
        let stamp = record.timestamp.as_deref().and_then(datetime::parse_timestamp);
        let day = stamp.map_or_else(|| now.date_naive(), datetime::day_of);
        buckets.entry(day).or_default().push(ExerciseRow {
            uuid: Uuid::parse_str(&record.uuid).unwrap_or(Uuid::nil()),
            name: record.name.clone(),
            category: record.category.clone(),
            time: stamp.map(|dt| dt.time()),
        });
    }

    let sections = match filter {
        None => buckets
            .into_iter()
            .rev()
            .map(|(day, rows)| DaySection { day, rows })
            .collect(),
        Some(day) => match buckets.remove(&day) {
            Some(rows) => vec![DaySection { day, rows }],
            None => {
                return ViewState {
                    sections: Vec::new(),
                    empty: Some(EmptyState::NothingOnDate(day)),
                }
            }
        },
    };

    ViewState { sections, empty: None }
}

/// Map row positions within one day's section to record identities.
///
/// Deletion works on section-local indices; a row's place in the unfiltered
/// global list is irrelevant. Positions out of range and days with no
/// visible section resolve to nothing.
pub fn resolve_section_rows(view: &ViewState, day: NaiveDate, rows: &[usize]) -> Vec<Uuid> {
    let Some(section) = view.sections.iter().find(|s| s.day == day) else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(|&pos| section.rows.get(pos))
        .map(|row| row.uuid)
        .collect()
}
