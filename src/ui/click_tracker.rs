//! Double-click recognition for presses reported one at a time

use crate::title::ElementId;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Default maximum delay between the two presses of a double click
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct ClickTracker {
    last_click: Cell<Option<(ElementId, Instant)>>,
    interval: Duration,
}

impl ClickTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            last_click: Cell::new(None),
            interval,
        }
    }

    /// Register a press and return the click count (1 or 2).
    ///
    /// A second press on the same element within the interval completes a
    /// double click; the next press starts counting again.
    pub fn click(&self, target: ElementId, now: Instant) -> u8 {
        if let Some((last_target, last_time)) = self.last_click.get() {
            if last_target == target && now.saturating_duration_since(last_time) < self.interval {
                self.last_click.set(None);
                return 2;
            }
        }
        self.last_click.set(Some((target, now)));
        1
    }

    pub fn reset(&self) {
        self.last_click.set(None);
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_INTERVAL)
    }
}
