//! Editor actions toolbar next to the title label

use cosmic::widget::{button, row, Row};
use cosmic::Element;
use std::cell::RefCell;
use std::collections::HashMap;

use super::element::ElementTree;
use crate::message::{Message, TitleMessage};
use crate::title::{ActionToolbar, EditorTarget, ElementId};

/// Actions offered for the active document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    /// Open the document in a new group
    SplitEditor,
    TogglePin,
    CloseEditor,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 3] = [
        ToolbarAction::SplitEditor,
        ToolbarAction::TogglePin,
        ToolbarAction::CloseEditor,
    ];

    /// Get display label for the action
    pub fn label(&self) -> &'static str {
        match self {
            Self::SplitEditor => "⫿",
            Self::TogglePin => "📌",
            Self::CloseEditor => "×",
        }
    }
}

/// Toolbar whose buttons act on the bound document
pub struct EditorActionsToolbar {
    root: ElementId,
    buttons: HashMap<ToolbarAction, ElementId>,
    context: RefCell<Option<EditorTarget>>,
    visible: RefCell<Vec<ToolbarAction>>,
}

impl EditorActionsToolbar {
    /// Create the toolbar and its button elements below `parent`
    pub fn new(tree: &ElementTree, parent: ElementId) -> Self {
        let root = tree.create_child(parent);
        let buttons = ToolbarAction::ALL
            .iter()
            .map(|action| (*action, tree.create_child(root)))
            .collect();

        Self {
            root,
            buttons,
            context: RefCell::new(None),
            visible: RefCell::new(Vec::new()),
        }
    }

    pub fn context(&self) -> Option<EditorTarget> {
        *self.context.borrow()
    }

    pub fn visible_actions(&self) -> Vec<ToolbarAction> {
        self.visible.borrow().clone()
    }

    /// Element of the button for `action`
    pub fn button(&self, action: ToolbarAction) -> ElementId {
        self.buttons.get(&action).copied().unwrap_or(self.root)
    }

    /// Create the toolbar view
    pub fn view(&self) -> Element<'static, Message> {
        let mut actions: Row<'static, Message> = row::with_capacity(ToolbarAction::ALL.len());

        for action in self.visible.borrow().iter().copied() {
            actions = actions.push(
                button::text(action.label())
                    .on_press(Message::Title(TitleMessage::ToolbarPressed(action)))
                    .padding([2, 6]),
            );
        }

        actions.spacing(2).into()
    }
}

impl ActionToolbar for EditorActionsToolbar {
    fn root(&self) -> ElementId {
        self.root
    }

    fn set_context(&self, context: EditorTarget) {
        *self.context.borrow_mut() = Some(context);
    }

    fn clear(&self) {
        *self.context.borrow_mut() = None;
        self.visible.borrow_mut().clear();
    }

    fn update(&self) {
        let visible = if self.context.borrow().is_some() {
            ToolbarAction::ALL.to_vec()
        } else {
            Vec::new()
        };
        *self.visible.borrow_mut() = visible;
    }
}
