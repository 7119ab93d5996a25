//! Title bar UI component
//!
//! Displays the active document of an editor group as a single title with
//! its actions toolbar, and turns widget interactions into title events.

use cosmic::iced::{Alignment, Length, Task};
use cosmic::widget::{column, container, horizontal_space, mouse_area, row};
use cosmic::Element;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Instant;

use super::click_tracker::ClickTracker;
use super::context_menu::{ContextMenuState, TitleContextAction};
use super::element::ElementTree;
use super::resource_label::ResourceLabel;
use super::toolbar::{EditorActionsToolbar, ToolbarAction};
use crate::message::{Message, TitleMessage};
use crate::scheduler::QueueScheduler;
use crate::title::{
    ActionToolbar, EditorTarget, ElementId, LabelWidget, MouseButton, TitleChrome, TitleContainer,
    TitleEvent, TitleEventKind,
};
use crate::utils::{Disposable, Emitter};

/// Request the title hands back to the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleCommand {
    Toolbar {
        action: ToolbarAction,
        target: EditorTarget,
    },
    ContextMenu {
        action: TitleContextAction,
        target: EditorTarget,
    },
}

/// Container element of the title
pub struct TitleContainerElement {
    id: ElementId,
    classes: RefCell<BTreeSet<String>>,
    emitters: HashMap<TitleEventKind, Emitter<TitleEvent>>,
}

impl TitleContainerElement {
    fn new(id: ElementId) -> Self {
        let emitters = [
            TitleEventKind::Click,
            TitleEventKind::DoubleClick,
            TitleEventKind::ContextMenu,
        ]
        .into_iter()
        .map(|kind| (kind, Emitter::new()))
        .collect();

        Self {
            id,
            classes: RefCell::new(BTreeSet::new()),
            emitters,
        }
    }

    /// Deliver an event of `kind` to the container listeners
    pub fn emit(&self, kind: TitleEventKind, event: &TitleEvent) {
        if let Some(emitter) = self.emitters.get(&kind) {
            emitter.fire(event);
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn listener_count(&self) -> usize {
        self.emitters.values().map(Emitter::listener_count).sum()
    }
}

impl TitleContainer for TitleContainerElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn toggle_class(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn on_event(&self, kind: TitleEventKind, listener: Box<dyn Fn(&TitleEvent)>) -> Disposable {
        match self.emitters.get(&kind) {
            Some(emitter) => emitter.subscribe(listener),
            None => Disposable::none(),
        }
    }
}

/// Result of handling a title message
pub struct TitleUpdate {
    /// Request for the host, if the message produced one
    pub command: Option<TitleCommand>,

    /// Follow-up work for the host's runtime
    pub task: Task<Message>,
}

/// Title bar widget
pub struct TitleBar {
    tree: ElementTree,
    container: Rc<TitleContainerElement>,
    label: Rc<ResourceLabel>,
    toolbar: Rc<EditorActionsToolbar>,
    menu: ContextMenuState,
    clicks: ClickTracker,
    dragging: Cell<bool>,
    scheduler: Rc<QueueScheduler>,
    /// A task waiting for a wake has been handed to the runtime
    awaiting_wake: Cell<bool>,
}

impl TitleBar {
    pub fn new() -> Self {
        let tree = ElementTree::new();
        let container_id = tree.create_root();
        let label_id = tree.create_child(container_id);
        let toolbar = EditorActionsToolbar::new(&tree, container_id);

        Self {
            container: Rc::new(TitleContainerElement::new(container_id)),
            label: Rc::new(ResourceLabel::new(label_id)),
            toolbar: Rc::new(toolbar),
            menu: ContextMenuState::default(),
            clicks: ClickTracker::default(),
            dragging: Cell::new(false),
            scheduler: Rc::new(QueueScheduler::new()),
            awaiting_wake: Cell::new(false),
            tree,
        }
    }

    pub fn container_element(&self) -> &TitleContainerElement {
        &self.container
    }

    pub fn resource_label(&self) -> &ResourceLabel {
        &self.label
    }

    pub fn actions_toolbar(&self) -> &EditorActionsToolbar {
        &self.toolbar
    }

    pub fn context_menu(&self) -> &ContextMenuState {
        &self.menu
    }

    /// Scheduler to hand to the title controller; its work runs through
    /// the tasks returned by `update`
    pub fn scheduler(&self) -> Rc<QueueScheduler> {
        self.scheduler.clone()
    }

    /// Handle a title message at time `now`
    pub fn update(&self, message: TitleMessage, now: Instant) -> TitleUpdate {
        let command = self.handle(message, now);
        TitleUpdate {
            command,
            task: self.follow_up(),
        }
    }

    fn handle(&self, message: TitleMessage, now: Instant) -> Option<TitleCommand> {
        match message {
            TitleMessage::LabelPressed => {
                let event = TitleEvent::mouse(MouseButton::Left, self.label.id());
                self.label.emit_click(&event);
                self.mouse_press(event, now);
                None
            }
            TitleMessage::ContainerPressed(MouseButton::Right) => {
                let event = TitleEvent::mouse(MouseButton::Right, self.container.id());
                self.container.emit(TitleEventKind::ContextMenu, &event);
                None
            }
            TitleMessage::ContainerPressed(button) => {
                self.mouse_press(TitleEvent::mouse(button, self.container.id()), now);
                None
            }
            TitleMessage::Tapped(target) => {
                let event = TitleEvent::touch(target);
                self.container.emit(TitleEventKind::Click, &event);
                None
            }
            TitleMessage::TouchContextMenu => {
                let event = TitleEvent::touch(self.container.id());
                self.container.emit(TitleEventKind::ContextMenu, &event);
                None
            }
            TitleMessage::ToolbarPressed(action) => {
                let event = TitleEvent::mouse(MouseButton::Left, self.toolbar.button(action));
                self.container.emit(TitleEventKind::Click, &event);
                self.toolbar
                    .context()
                    .map(|target| TitleCommand::Toolbar { action, target })
            }
            TitleMessage::ContextAction(action) => self
                .menu
                .close()
                .map(|request| TitleCommand::ContextMenu {
                    action,
                    target: request.target,
                }),
            TitleMessage::DismissContextMenu => {
                self.menu.close();
                None
            }
            TitleMessage::DragStarted => {
                self.dragging.set(true);
                self.clicks.reset();
                None
            }
            TitleMessage::DragEnded => {
                self.dragging.set(false);
                None
            }
            TitleMessage::RunPending => {
                self.scheduler.run_pending();
                None
            }
            TitleMessage::Woken => {
                self.awaiting_wake.set(false);
                self.scheduler.run_pending();
                None
            }
        }
    }

    /// Task that brings queued work back through `update`
    fn follow_up(&self) -> Task<Message> {
        if self.scheduler.has_ready() {
            return Task::done(Message::Title(TitleMessage::RunPending));
        }
        if self.scheduler.has_waiting() && !self.awaiting_wake.replace(true) {
            return Task::perform(self.scheduler.woken(), |()| {
                Message::Title(TitleMessage::Woken)
            });
        }
        Task::none()
    }

    /// Bubble a press to the container and count it toward a double click
    fn mouse_press(&self, event: TitleEvent, now: Instant) {
        self.container.emit(TitleEventKind::Click, &event);

        let is_primary = event.input().button() == Some(MouseButton::Left);
        if is_primary && self.clicks.click(event.target(), now) == 2 {
            let double = TitleEvent::new(*event.input());
            self.container.emit(TitleEventKind::DoubleClick, &double);
        }
    }

    /// Create the title bar view
    pub fn view(&self) -> Element<'static, Message> {
        let content = row::with_capacity(3)
            .push(self.label.view())
            .push(horizontal_space())
            .push(self.toolbar.view())
            .spacing(4)
            .align_y(Alignment::Center);

        let title = mouse_area(container(content).width(Length::Fill).padding([4, 8]))
            .on_press(Message::Title(TitleMessage::ContainerPressed(MouseButton::Left)))
            .on_middle_press(Message::Title(TitleMessage::ContainerPressed(MouseButton::Middle)))
            .on_right_press(Message::Title(TitleMessage::ContainerPressed(MouseButton::Right)));

        match self.menu.view() {
            Some(menu) => column::with_capacity(2).push(title).push(menu).into(),
            None => title.into(),
        }
    }
}

impl Default for TitleBar {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleChrome for TitleBar {
    fn container(&self) -> Rc<dyn TitleContainer> {
        self.container.clone()
    }

    fn label(&self) -> Rc<dyn LabelWidget> {
        self.label.clone()
    }

    fn toolbar(&self) -> Rc<dyn ActionToolbar> {
        self.toolbar.clone()
    }

    fn is_descendant(&self, node: ElementId, ancestor: ElementId) -> bool {
        self.tree.is_descendant(node, ancestor)
    }

    fn is_dragging(&self) -> bool {
        self.dragging.get()
    }

    fn show_context_menu(&self, anchor: ElementId, target: EditorTarget) {
        log::debug!("Opening title context menu at {}", anchor);
        self.menu.open(anchor, target);
    }
}
