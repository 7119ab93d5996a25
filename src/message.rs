//! Title message types
//!
//! Messages produced by the title widgets and consumed by
//! [`TitleBar::update`](crate::ui::TitleBar::update).

use crate::title::{ElementId, MouseButton};
use crate::ui::{TitleContextAction, ToolbarAction};

/// Main message enum for hosts embedding the title
#[derive(Debug, Clone)]
pub enum Message {
    /// Title interactions
    Title(TitleMessage),
}

/// Title-related messages
#[derive(Debug, Clone)]
pub enum TitleMessage {
    /// The resource label was pressed
    LabelPressed,

    /// The title container was pressed outside the label and toolbar
    ContainerPressed(MouseButton),

    /// Touch tap forwarded by the host's gesture recognizer, with the
    /// element the touch started on
    Tapped(ElementId),

    /// Touch long-press forwarded by the host's gesture recognizer
    TouchContextMenu,

    /// A toolbar button was pressed
    ToolbarPressed(ToolbarAction),

    /// An entry of the context menu was chosen
    ContextAction(TitleContextAction),

    /// Close the context menu without choosing
    DismissContextMenu,

    /// A drag gesture started on the title
    DragStarted,

    /// The drag gesture ended or was cancelled
    DragEnded,

    /// Run work the title deferred to a later turn
    RunPending,

    /// A pending title future was woken
    Woken,
}

impl From<TitleMessage> for Message {
    fn from(message: TitleMessage) -> Self {
        Message::Title(message)
    }
}
