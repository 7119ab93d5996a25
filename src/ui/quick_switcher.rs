//! Open state of the quick switcher overlay
//!
//! The overlay itself belongs to the host; the title only asks for it to open.

use std::cell::Cell;

use crate::title::QuickSwitcher;

#[derive(Debug, Default)]
pub struct QuickSwitcherState {
    is_open: Cell<bool>,
}

impl QuickSwitcherState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the quick switcher is currently open
    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }
}

impl QuickSwitcher for QuickSwitcherState {
    fn show(&self) {
        log::debug!("Opening quick switcher");
        self.is_open.set(true);
    }
}
