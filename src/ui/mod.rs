//! UI module for the editor title
//!
//! Contains the widgets the title controller drives:
//! - Title bar with its container element
//! - Resource label
//! - Editor actions toolbar
//! - Context menu
//! - Quick switcher open state

mod click_tracker;
mod context_menu;
mod element;
mod quick_switcher;
mod resource_label;
mod title_bar;
mod toolbar;

pub use click_tracker::{ClickTracker, DOUBLE_CLICK_INTERVAL};
pub use context_menu::{ContextMenuRequest, ContextMenuState, TitleContextAction};
pub use element::ElementTree;
pub use quick_switcher::QuickSwitcherState;
pub use resource_label::ResourceLabel;
pub use title_bar::{TitleBar, TitleCommand, TitleContainerElement, TitleUpdate};
pub use toolbar::{EditorActionsToolbar, ToolbarAction};
