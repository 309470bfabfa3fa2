//! Constants used throughout the application
//!
//! This module centralizes UI text and other constant values to keep the
//! components consistent.

// Empty states. The two cases are deliberately distinct: one means the log
// has never been written to, the other that the active date filter matched
// nothing.
pub const EMPTY_TITLE_NO_EXERCISES: &str = "No exercises yet";
pub const EMPTY_BODY_NO_EXERCISES: &str = "Press 'a' to add your first exercise!";
pub const EMPTY_TITLE_NO_MATCH: &str = "No exercises";
pub const EMPTY_BODY_NO_MATCH: &str = "No exercises for this date!";

// Dialog titles
pub const DIALOG_TITLE_ADD_EXERCISE: &str = "Add Exercise";
pub const DIALOG_TITLE_DATE_FILTER: &str = "Filter by Date";
pub const DIALOG_TITLE_CONFIRM_DELETE: &str = "Confirm Delete";
pub const DIALOG_TITLE_LOGS: &str = "Session Logs - Press 'Esc' or 'q' to close";

// Validation messages
pub const ERROR_DATE_IN_FUTURE: &str = "Date cannot be in the future";
pub const ERROR_DATE_UNPARSEABLE: &str = "Enter a date as YYYY-MM-DD";
pub const ERROR_CATEGORY_REQUIRED: &str = "Choose a category";
pub const ERROR_NAME_REQUIRED: &str = "Enter an exercise name";

// FlowPicker labels used by the add sheet and the catalog editor
pub const PICKER_HEADER_CATEGORY: &str = "Category";
pub const PICKER_CAPTION_FILTER: &str = "Pick a category to narrow the list";
pub const PICKER_CAPTION_CATEGORY: &str = "Every exercise belongs to one category";

/// Categories the pickers offer. The catalog seeds stay within this set but
/// user templates may reference categories freely; the picker tolerates a
/// selection it has no chip for.
pub const CATEGORIES: &[&str] = &["Core", "Back", "Legs", "Arms", "Chest", "Shoulders", "Cardio"];

// UI Layout Constants
/// Minimum width kept for the exercise list
pub const LIST_MIN_WIDTH: u16 = 30;
/// Height of the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;
