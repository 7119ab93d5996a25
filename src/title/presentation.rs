//! Presentation of the active document in the title
//!
//! Everything here is a pure function of the document, the group flags and
//! the configured label format.

use super::services::{LabelContent, LabelOptions};
use crate::config::LabelFormat;
use crate::state::{EditorDocument, Verbosity};
use crate::theme::{ColorId, ThemeService};
use cosmic::iced_core::Color;
use std::path::PathBuf;

/// Container class present while the group has focus
pub const ACTIVE_CLASS: &str = "active";

/// Container class present while the active document has unsaved changes
pub const DIRTY_CLASS: &str = "dirty";

/// Extra style class carried by the title label
pub const TITLE_LABEL_CLASS: &str = "title-label";

/// Map a label format string to a verbosity. Unknown formats mean medium.
pub fn get_verbosity(format: &str) -> Verbosity {
    match format {
        "short" => Verbosity::Short,
        "long" => Verbosity::Long,
        _ => Verbosity::Medium,
    }
}

/// Description shown next to the name
///
/// With the `default` format an unfocused group shows no description.
pub fn label_description(
    format: &LabelFormat,
    is_active: bool,
    describe: impl FnOnce(Verbosity) -> String,
) -> String {
    if *format == LabelFormat::Default && !is_active {
        return String::new();
    }
    describe(get_verbosity(format.as_str()))
}

/// Tooltip title, empty when it would repeat the description
pub fn tooltip_title(title: String, description: &str) -> String {
    if title == description {
        String::new()
    } else {
        title
    }
}

/// Everything the title shows for the active document
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationState {
    pub name: String,
    pub description: String,
    pub tooltip_title: String,
    pub resource: Option<PathBuf>,
    pub is_pinned: bool,
    pub is_active: bool,
    pub is_dirty: bool,
    pub foreground: Option<Color>,
}

impl PresentationState {
    pub fn compute(
        document: &dyn EditorDocument,
        is_pinned: bool,
        is_active: bool,
        format: &LabelFormat,
        theme: &dyn ThemeService,
    ) -> Self {
        let description = label_description(format, is_active, |v| document.description(v));
        let tooltip_title = tooltip_title(document.title(Verbosity::Long), &description);
        let color = if is_active {
            ColorId::TabActiveForeground
        } else {
            ColorId::TabUnfocusedActiveForeground
        };

        Self {
            name: document.name(),
            description,
            tooltip_title,
            resource: document.resource(),
            is_pinned,
            is_active,
            is_dirty: document.is_dirty(),
            foreground: theme.color(color),
        }
    }

    pub fn label_content(&self) -> LabelContent {
        LabelContent {
            name: self.name.clone(),
            description: self.description.clone(),
            resource: self.resource.clone(),
        }
    }

    /// Preview (unpinned) documents are shown in italics
    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            title: self.tooltip_title.clone(),
            italic: !self.is_pinned,
            extra_classes: vec![TITLE_LABEL_CLASS.to_string()],
        }
    }
}
