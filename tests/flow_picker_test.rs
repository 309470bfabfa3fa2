use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use repscount::haptics::HapticFeedback;
use repscount::ui::components::FlowPicker;

/// Counts selection pulses so tests can assert on feedback.
#[derive(Default)]
struct CountingHaptics {
    pulses: AtomicUsize,
}

impl CountingHaptics {
    fn count(&self) -> usize {
        self.pulses.load(Ordering::SeqCst)
    }
}

impl HapticFeedback for CountingHaptics {
    fn trigger_selection(&self) {
        self.pulses.fetch_add(1, Ordering::SeqCst);
    }
}

fn items() -> Vec<String> {
    vec!["Core".to_string(), "Legs".to_string(), "Back".to_string()]
}

fn picker_with_counter() -> (FlowPicker<String>, Arc<CountingHaptics>) {
    let haptics = Arc::new(CountingHaptics::default());
    let picker = FlowPicker::new("Category", items(), haptics.clone());
    (picker, haptics)
}

#[test]
fn test_toggle_selects_cursor_item() {
    let (mut picker, haptics) = picker_with_counter();

    picker.toggle_cursor_item();
    assert_eq!(picker.selection(), Some(&"Core".to_string()));
    assert_eq!(haptics.count(), 1);
}

#[test]
fn test_toggle_active_item_clears_selection() {
    let (mut picker, haptics) = picker_with_counter();

    picker.toggle_cursor_item();
    picker.toggle_cursor_item();

    assert_eq!(picker.selection(), None);
    assert_eq!(haptics.count(), 2);
}

#[test]
fn test_toggle_other_item_replaces_selection() {
    let (mut picker, _) = picker_with_counter();

    picker.toggle_cursor_item();
    picker.cursor_right();
    picker.toggle_cursor_item();

    assert_eq!(picker.selection(), Some(&"Legs".to_string()));
}

#[test]
fn test_select_then_select_same_equals_single_clear() {
    let (mut picker, _) = picker_with_counter();
    picker.set_selection(None);
    let cleared = picker.selection().cloned();

    picker.toggle_cursor_item();
    picker.toggle_cursor_item();

    assert_eq!(picker.selection().cloned(), cleared);
}

#[test]
fn test_error_clears_on_keyboard_selection_change() {
    let (mut picker, _) = picker_with_counter();
    picker.set_error("Choose a category");
    assert_eq!(picker.error(), Some("Choose a category"));

    picker.toggle_cursor_item();

    assert_eq!(picker.error(), None);
}

#[test]
fn test_error_clears_on_programmatic_selection_change() {
    // The clear rule is reactive on the value, not tied to chip taps
    let (mut picker, _) = picker_with_counter();
    picker.set_error("Choose a category");

    picker.set_selection(Some("Back".to_string()));

    assert_eq!(picker.error(), None);
    assert_eq!(picker.selection(), Some(&"Back".to_string()));
}

#[test]
fn test_error_stays_when_selection_does_not_change() {
    let (mut picker, _) = picker_with_counter();
    picker.set_selection(Some("Core".to_string()));
    picker.set_error("Choose a category");

    picker.set_selection(Some("Core".to_string()));

    assert_eq!(picker.error(), Some("Choose a category"));
}

#[test]
fn test_empty_item_list_is_inert() {
    let haptics = Arc::new(CountingHaptics::default());
    let mut picker: FlowPicker<String> = FlowPicker::new("Category", Vec::new(), haptics.clone());

    picker.toggle_cursor_item();
    picker.cursor_right();
    picker.cursor_left();

    assert_eq!(picker.selection(), None);
    assert_eq!(haptics.count(), 0, "no pulse without a chip to toggle");
}

#[test]
fn test_selection_absent_from_items_is_tolerated() {
    let (mut picker, _) = picker_with_counter();

    picker.set_selection(Some("Mobility".to_string()));

    assert_eq!(picker.selection(), Some(&"Mobility".to_string()));
    // Toggling the cursor chip replaces the foreign value outright
    picker.toggle_cursor_item();
    assert_eq!(picker.selection(), Some(&"Core".to_string()));
}

#[test]
fn test_cursor_stays_in_bounds() {
    let (mut picker, _) = picker_with_counter();

    picker.cursor_left();
    picker.toggle_cursor_item();
    assert_eq!(picker.selection(), Some(&"Core".to_string()));

    for _ in 0..10 {
        picker.cursor_right();
    }
    picker.toggle_cursor_item();
    assert_eq!(picker.selection(), Some(&"Back".to_string()));
}
