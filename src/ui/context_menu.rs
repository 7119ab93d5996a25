//! Context menu of the editor title

use cosmic::iced::Length;
use cosmic::widget::{button, column, container, Column};
use cosmic::Element;
use std::cell::RefCell;

use crate::message::{Message, TitleMessage};
use crate::title::{EditorTarget, ElementId};

/// Title context menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleContextAction {
    /// Close this document
    Close,
    /// Close all other documents in the group
    CloseOthers,
    /// Close all documents in the group
    CloseAll,
    /// Pin or unpin the document
    TogglePin,
    /// Reveal in file browser
    RevealInSidebar,
    /// Copy file path
    CopyPath,
}

impl TitleContextAction {
    pub const ALL: [TitleContextAction; 6] = [
        TitleContextAction::Close,
        TitleContextAction::CloseOthers,
        TitleContextAction::CloseAll,
        TitleContextAction::TogglePin,
        TitleContextAction::RevealInSidebar,
        TitleContextAction::CopyPath,
    ];

    /// Get display label for the action
    pub fn label(&self) -> &'static str {
        match self {
            Self::Close => "Close",
            Self::CloseOthers => "Close Others",
            Self::CloseAll => "Close All",
            Self::TogglePin => "Pin / Unpin",
            Self::RevealInSidebar => "Reveal in Sidebar",
            Self::CopyPath => "Copy Path",
        }
    }
}

/// Open context menu request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenuRequest {
    pub anchor: ElementId,
    pub target: EditorTarget,
}

#[derive(Debug, Default)]
pub struct ContextMenuState {
    open: RefCell<Option<ContextMenuRequest>>,
}

impl ContextMenuState {
    pub fn open(&self, anchor: ElementId, target: EditorTarget) {
        *self.open.borrow_mut() = Some(ContextMenuRequest { anchor, target });
    }

    /// Close the menu, returning what it was open for
    pub fn close(&self) -> Option<ContextMenuRequest> {
        self.open.borrow_mut().take()
    }

    pub fn current(&self) -> Option<ContextMenuRequest> {
        *self.open.borrow()
    }

    pub fn is_open(&self) -> bool {
        self.open.borrow().is_some()
    }

    /// Menu entries, or nothing while closed
    pub fn view(&self) -> Option<Element<'static, Message>> {
        self.current()?;

        let mut entries: Column<'static, Message> = column::with_capacity(TitleContextAction::ALL.len());
        for action in TitleContextAction::ALL {
            entries = entries.push(
                button::text(action.label())
                    .on_press(Message::Title(TitleMessage::ContextAction(action)))
                    .width(Length::Fill),
            );
        }

        Some(container(entries).width(Length::Fixed(200.0)).padding(4).into())
    }
}
