//! Mapping of title gestures to workbench actions

use super::input::{ElementId, InputEvent};
use super::services::EditorTarget;
use crate::state::{DocumentId, GroupId};

/// Workbench-level action requested by a title gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleAction {
    FocusGroup(GroupId),
    PinEditor(EditorTarget),
    CloseEditor(EditorTarget),
    OpenQuickSwitcher,
    OpenContextMenu { anchor: ElementId, target: EditorTarget },
}

/// Snapshot of the bound group taken when an event is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchContext {
    pub group: GroupId,
    pub active_document: Option<DocumentId>,
    /// Number of groups in the workbench
    pub group_count: usize,
}

impl DispatchContext {
    fn active_target(&self) -> Option<EditorTarget> {
        self.active_document.map(|document| EditorTarget {
            group: self.group,
            document,
        })
    }
}

/// Whether a click should focus the group.
///
/// With several groups a mouse click must not steal focus, or dragging
/// editors between groups would fight with it. Touch has no drag and always
/// focuses. Clicks on toolbar buttons never focus.
pub fn should_focus(event: &InputEvent, group_count: usize, target_in_toolbar: bool) -> bool {
    (group_count == 1 || !event.is_mouse()) && !target_in_toolbar
}

/// Click or tap anywhere on the title container
pub fn resolve_click(
    event: &InputEvent,
    context: Option<&DispatchContext>,
    target_in_toolbar: bool,
) -> Option<TitleAction> {
    let context = context?;

    if event.is_middle_click() {
        return context.active_target().map(TitleAction::CloseEditor);
    }

    should_focus(event, context.group_count, target_in_toolbar)
        .then_some(TitleAction::FocusGroup(context.group))
}

/// Double click pins the active document. Touch has no double click.
pub fn resolve_double_click(
    event: &InputEvent,
    context: Option<&DispatchContext>,
) -> Option<TitleAction> {
    if !event.is_mouse() {
        return None;
    }
    context?.active_target().map(TitleAction::PinEditor)
}

/// Context menu anchored at the title container
pub fn resolve_context_menu(
    anchor: ElementId,
    context: Option<&DispatchContext>,
) -> Option<TitleAction> {
    context?
        .active_target()
        .map(|target| TitleAction::OpenContextMenu { anchor, target })
}

/// Click on the label opens the quick switcher unless a drag is in progress
pub fn resolve_label_click(dragging: bool) -> Option<TitleAction> {
    (!dragging).then_some(TitleAction::OpenQuickSwitcher)
}
