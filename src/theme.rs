//! Theme colors used by the editor title
//!
//! The controller asks for semantic color tokens; the theme resolves them
//! for the current light or dark palette.

use crate::config::ThemePreference;
use cosmic::iced_core::Color;
use std::cell::Cell;

/// Semantic color tokens the title asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    /// Title label foreground when its group has focus
    TabActiveForeground,
    /// Title label foreground when another group has focus
    TabUnfocusedActiveForeground,
}

/// Resolves semantic colors for the current theme
pub trait ThemeService {
    fn color(&self, id: ColorId) -> Option<Color>;
}

/// Palette for one theme variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitlePalette {
    pub active_foreground: Color,
    pub unfocused_foreground: Color,
}

impl TitlePalette {
    /// Light palette
    pub fn light() -> Self {
        Self {
            active_foreground: Color::from_rgb(0.2, 0.2, 0.2),
            unfocused_foreground: Color::from_rgba(0.2, 0.2, 0.2, 0.7),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            active_foreground: Color::from_rgb(0.95, 0.95, 0.95),
            unfocused_foreground: Color::from_rgba(0.95, 0.95, 0.95, 0.5),
        }
    }
}

/// Theme service following the configured preference
#[derive(Debug)]
pub struct WorkbenchTheme {
    preference: Cell<ThemePreference>,
    system_dark: Cell<bool>,
}

impl WorkbenchTheme {
    pub fn new(preference: ThemePreference) -> Self {
        Self {
            preference: Cell::new(preference),
            // COSMIC defaults to a dark theme until told otherwise
            system_dark: Cell::new(true),
        }
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        self.preference.set(preference);
    }

    /// Record the desktop's current theme, used when following the system
    pub fn set_system_dark(&self, dark: bool) {
        self.system_dark.set(dark);
    }

    pub fn is_dark(&self) -> bool {
        match self.preference.get() {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => self.system_dark.get(),
        }
    }

    pub fn palette(&self) -> TitlePalette {
        if self.is_dark() {
            TitlePalette::dark()
        } else {
            TitlePalette::light()
        }
    }
}

impl Default for WorkbenchTheme {
    fn default() -> Self {
        Self::new(ThemePreference::default())
    }
}

impl ThemeService for WorkbenchTheme {
    fn color(&self, id: ColorId) -> Option<Color> {
        let palette = self.palette();
        Some(match id {
            ColorId::TabActiveForeground => palette.active_foreground,
            ColorId::TabUnfocusedActiveForeground => palette.unfocused_foreground,
        })
    }
}
