//! Raw input events arriving at the title container
//!
//! Mouse and touch input are told apart once, here, so handlers never
//! inspect device details themselves.

use std::cell::Cell;

/// Identity of an element inside the title region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mouse button that produced a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

/// Device-tagged input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Mouse { button: MouseButton, target: ElementId },
    Touch { initial_target: ElementId },
}

impl InputEvent {
    pub fn is_mouse(&self) -> bool {
        matches!(self, InputEvent::Mouse { .. })
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, InputEvent::Touch { .. })
    }

    /// Element the gesture originally hit
    pub fn target(&self) -> ElementId {
        match *self {
            InputEvent::Mouse { target, .. } => target,
            InputEvent::Touch { initial_target } => initial_target,
        }
    }

    pub fn button(&self) -> Option<MouseButton> {
        match *self {
            InputEvent::Mouse { button, .. } => Some(button),
            InputEvent::Touch { .. } => None,
        }
    }

    pub fn is_middle_click(&self) -> bool {
        self.button() == Some(MouseButton::Middle)
    }
}

/// Kinds of events the title container delivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleEventKind {
    /// Mouse click of any button, or touch tap
    Click,
    DoubleClick,
    /// Right click or touch long-press
    ContextMenu,
}

/// An input event in flight, with a flag handlers use to stop default handling
#[derive(Debug)]
pub struct TitleEvent {
    input: InputEvent,
    stopped: Cell<bool>,
}

impl TitleEvent {
    pub fn new(input: InputEvent) -> Self {
        Self {
            input,
            stopped: Cell::new(false),
        }
    }

    pub fn mouse(button: MouseButton, target: ElementId) -> Self {
        Self::new(InputEvent::Mouse { button, target })
    }

    pub fn touch(initial_target: ElementId) -> Self {
        Self::new(InputEvent::Touch { initial_target })
    }

    pub fn input(&self) -> &InputEvent {
        &self.input
    }

    pub fn target(&self) -> ElementId {
        self.input.target()
    }

    /// Stop default handling of the event
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}
