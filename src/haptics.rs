//! Haptic feedback service.
//!
//! The chip picker pulses this service on every selection change. In a
//! terminal the closest analogue to a selection tap is the bell, so the
//! default implementation writes BEL; a silent implementation backs the
//! `haptics_enabled = false` config and the test suite.

use std::io::Write;
use std::sync::Arc;

/// Fire-and-forget selection feedback. No return value, no failure channel.
pub trait HapticFeedback: Send + Sync {
    fn trigger_selection(&self);
}

/// Rings the terminal bell.
pub struct TerminalHaptics;

impl HapticFeedback for TerminalHaptics {
    fn trigger_selection(&self) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

/// Swallows every pulse.
pub struct SilentHaptics;

impl HapticFeedback for SilentHaptics {
    fn trigger_selection(&self) {}
}

/// Build the service the config asks for.
pub fn from_config(haptics_enabled: bool) -> Arc<dyn HapticFeedback> {
    if haptics_enabled {
        Arc::new(TerminalHaptics)
    } else {
        Arc::new(SilentHaptics)
    }
}
