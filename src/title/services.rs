//! Collaborators the title controller calls into
//!
//! The controller owns none of these. They are injected through
//! [`TitleServices`] and the [`TitleChrome`] at construction.

use super::input::{ElementId, TitleEvent, TitleEventKind};
use crate::config::TabOptions;
use crate::error::ErrorSink;
use crate::scheduler::{LocalBoxFuture, Scheduler};
use crate::state::{DocumentId, GroupId};
use crate::theme::ThemeService;
use crate::utils::Disposable;
use cosmic::iced_core::Color;
use std::path::PathBuf;
use std::rc::Rc;

/// A document inside a specific group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorTarget {
    pub group: GroupId,
    pub document: DocumentId,
}

/// Workbench-level operations on groups
pub trait GroupService {
    fn pin_editor(&self, group: GroupId, document: DocumentId);

    fn focus_group(&self, group: GroupId);

    fn tab_options(&self) -> TabOptions;
}

/// Layout-level queries about all groups
pub trait GroupStacks {
    /// Whether `group` is the focused group of the workbench
    fn is_active(&self, group: GroupId) -> bool;

    fn group_count(&self) -> usize;
}

/// Asynchronous "close editor" action
pub trait CloseEditorAction {
    fn run(&self, target: EditorTarget) -> LocalBoxFuture<'static, anyhow::Result<()>>;
}

/// Overlay for fast document and command selection
pub trait QuickSwitcher {
    fn show(&self);
}

/// What the label shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelContent {
    pub name: String,
    pub description: String,
    pub resource: Option<PathBuf>,
}

/// How the label shows it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelOptions {
    /// Tooltip; empty means none
    pub title: String,
    pub italic: bool,
    pub extra_classes: Vec<String>,
}

/// Resource label rendering name, description and tooltip
pub trait LabelWidget {
    fn id(&self) -> ElementId;

    fn set_label(&self, content: LabelContent, options: LabelOptions);

    fn clear(&self);

    fn set_foreground(&self, color: Option<Color>);

    fn on_click(&self, listener: Box<dyn Fn(&TitleEvent)>) -> Disposable;
}

/// Contextual editor actions next to the label
pub trait ActionToolbar {
    /// Root element; every toolbar button descends from it
    fn root(&self) -> ElementId;

    /// Bind the document the actions apply to
    fn set_context(&self, context: EditorTarget);

    fn clear(&self);

    /// Recompute visible and enabled actions for the bound context
    fn update(&self);
}

/// Title container receiving raw input
pub trait TitleContainer {
    fn id(&self) -> ElementId;

    fn toggle_class(&self, class: &str, enabled: bool);

    fn has_class(&self, class: &str) -> bool;

    fn on_event(&self, kind: TitleEventKind, listener: Box<dyn Fn(&TitleEvent)>) -> Disposable;
}

/// Shared title lifecycle: container, label, toolbar and context menu
pub trait TitleChrome {
    fn container(&self) -> Rc<dyn TitleContainer>;

    fn label(&self) -> Rc<dyn LabelWidget>;

    fn toolbar(&self) -> Rc<dyn ActionToolbar>;

    /// Whether `node` is `ancestor` or lies below it
    fn is_descendant(&self, node: ElementId, ancestor: ElementId) -> bool;

    /// Whether a drag gesture is in progress on the title
    fn is_dragging(&self) -> bool;

    fn show_context_menu(&self, anchor: ElementId, target: EditorTarget);
}

/// Services injected into a title control
#[derive(Clone)]
pub struct TitleServices {
    pub groups: Rc<dyn GroupService>,
    pub stacks: Rc<dyn GroupStacks>,
    pub theme: Rc<dyn ThemeService>,
    pub close_action: Rc<dyn CloseEditorAction>,
    pub quick_switcher: Rc<dyn QuickSwitcher>,
    pub scheduler: Rc<dyn Scheduler>,
    pub errors: Rc<dyn ErrorSink>,
}
