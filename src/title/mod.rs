//! Editor title controllers
//!
//! When tab strips are disabled each editor group shows a single title for
//! its active document. The controller in this module keeps that title in
//! sync with the group and turns gestures on it into workbench actions:
//! - `presentation`: label text, tooltip and styling for the active document
//! - `dispatch`: which action a click, double click or context menu means
//! - `controller`: listener wiring and the refresh routine

mod controller;
mod dispatch;
mod input;
mod presentation;
mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::NoTabsTitleControl;
pub use dispatch::{
    resolve_click, resolve_context_menu, resolve_double_click, resolve_label_click,
    should_focus, DispatchContext, TitleAction,
};
pub use input::{ElementId, InputEvent, MouseButton, TitleEvent, TitleEventKind};
pub use presentation::{
    get_verbosity, label_description, tooltip_title, PresentationState, ACTIVE_CLASS,
    DIRTY_CLASS, TITLE_LABEL_CLASS,
};
pub use services::{
    ActionToolbar, CloseEditorAction, EditorTarget, GroupService, GroupStacks, LabelContent,
    LabelOptions, LabelWidget, QuickSwitcher, TitleChrome, TitleContainer, TitleServices,
};

use crate::state::{DocumentId, EditorGroup};
use std::rc::Rc;

/// Change in the bound group or its surroundings that may affect the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupChange {
    EditorOpened,
    EditorClosed,
    ActiveEditorChanged,
    EditorPinned(DocumentId),
    EditorDirtyChanged(DocumentId),
    EditorLabelChanged(DocumentId),
    GroupActivated,
    GroupDeactivated,
    OptionsChanged,
    ThemeChanged,
}

impl GroupChange {
    /// Document the change is about, for changes scoped to one document
    pub fn document(&self) -> Option<DocumentId> {
        match *self {
            GroupChange::EditorPinned(id)
            | GroupChange::EditorDirtyChanged(id)
            | GroupChange::EditorLabelChanged(id) => Some(id),
            _ => None,
        }
    }
}

/// Lifecycle shared by editor title variants
pub trait TitleControl {
    /// Wire input listeners on the title chrome
    fn create(&self);

    /// Bind the group whose active document the title shows
    fn set_context(&self, group: Option<Rc<dyn EditorGroup>>);

    /// Recompute and push the full presentation
    fn refresh(&self);

    fn on_group_change(&self, change: GroupChange);

    fn preferred_height(&self) -> u16;

    /// Release all listeners; safe to call more than once
    fn dispose(&self);
}
