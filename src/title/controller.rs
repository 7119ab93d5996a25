//! Title controller for groups shown without tabs

use super::dispatch::{
    resolve_click, resolve_context_menu, resolve_double_click, resolve_label_click,
    DispatchContext, TitleAction,
};
use super::input::{TitleEvent, TitleEventKind};
use super::presentation::{PresentationState, ACTIVE_CLASS, DIRTY_CLASS};
use super::services::{EditorTarget, TitleChrome, TitleServices};
use super::{GroupChange, TitleControl};
use crate::error::TitleError;
use crate::state::EditorGroup;
use crate::utils::DisposableStore;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Single title showing the active document of one editor group
pub struct NoTabsTitleControl {
    weak_self: Weak<Self>,
    chrome: Rc<dyn TitleChrome>,
    services: TitleServices,
    /// Bound group. Handlers read it fresh on every event.
    context: RefCell<Option<Rc<dyn EditorGroup>>>,
    listeners: DisposableStore,
    created: Cell<bool>,
    preferred_height: u16,
}

impl NoTabsTitleControl {
    pub fn new(chrome: Rc<dyn TitleChrome>, services: TitleServices, preferred_height: u16) -> Rc<Self> {
        Rc::new_cyclic(|weak_self| Self {
            weak_self: weak_self.clone(),
            chrome,
            services,
            context: RefCell::new(None),
            listeners: DisposableStore::new(),
            created: Cell::new(false),
            preferred_height,
        })
    }

    /// Currently bound group
    pub fn context(&self) -> Option<Rc<dyn EditorGroup>> {
        self.context.borrow().clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.listeners.is_disposed()
    }

    /// Wrap a handler so the registration does not keep the controller alive
    fn handler(&self, handle: fn(&Self, &TitleEvent)) -> Box<dyn Fn(&TitleEvent)> {
        let weak = self.weak_self.clone();
        Box::new(move |event: &TitleEvent| {
            if let Some(this) = weak.upgrade() {
                handle(&this, event);
            }
        })
    }

    fn dispatch_context(&self) -> Option<DispatchContext> {
        let group = self.context()?;
        Some(DispatchContext {
            group: group.id(),
            active_document: group.active_editor().map(|d| d.id()),
            group_count: self.services.stacks.group_count(),
        })
    }

    fn on_label_click(&self, event: &TitleEvent) {
        event.stop();
        match resolve_label_click(self.chrome.is_dragging()) {
            Some(action) => self.perform(action),
            None => log::trace!("Label click ignored while dragging"),
        }
    }

    fn on_title_click(&self, event: &TitleEvent) {
        let toolbar_root = self.chrome.toolbar().root();
        let in_toolbar = self.chrome.is_descendant(event.target(), toolbar_root);

        if let Some(action) = resolve_click(event.input(), self.dispatch_context().as_ref(), in_toolbar) {
            self.perform(action);
        }
    }

    fn on_title_double_click(&self, event: &TitleEvent) {
        event.stop();
        if let Some(action) = resolve_double_click(event.input(), self.dispatch_context().as_ref()) {
            self.perform(action);
        }
    }

    fn on_context_menu(&self, event: &TitleEvent) {
        event.stop();
        let anchor = self.chrome.container().id();
        if let Some(action) = resolve_context_menu(anchor, self.dispatch_context().as_ref()) {
            self.perform(action);
        }
    }

    fn perform(&self, action: TitleAction) {
        log::debug!("Title action {:?}", action);
        match action {
            TitleAction::FocusGroup(group) => self.services.groups.focus_group(group),
            TitleAction::PinEditor(target) => {
                self.services.groups.pin_editor(target.group, target.document)
            }
            TitleAction::CloseEditor(target) => self.close_editor(target),
            TitleAction::OpenQuickSwitcher => self.open_quick_switcher_later(),
            TitleAction::OpenContextMenu { anchor, target } => {
                self.chrome.show_context_menu(anchor, target)
            }
        }
    }

    fn close_editor(&self, target: EditorTarget) {
        let close = self.services.close_action.run(target);
        let errors = self.services.errors.clone();

        self.services.scheduler.spawn(Box::pin(async move {
            if let Err(source) = close.await {
                errors.report(
                    &TitleError::CloseFailed {
                        group: target.group,
                        document: target.document,
                        source,
                    }
                    .into(),
                );
            }
        }));
    }

    /// Deferred so that a focus change from the same click settles before
    /// the quick switcher opens, otherwise it would close right away.
    fn open_quick_switcher_later(&self) {
        let weak = self.weak_self.clone();
        self.services.scheduler.defer(Box::new(move || {
            let Some(this) = weak.upgrade() else {
                return;
            };
            if this.is_disposed() {
                log::debug!("Title disposed before the quick switcher could open");
                return;
            }
            this.services.quick_switcher.show();
        }));
    }

    fn clear(&self) {
        self.chrome.label().clear();
        self.chrome.toolbar().clear();
    }
}

impl TitleControl for NoTabsTitleControl {
    fn create(&self) {
        if self.created.replace(true) {
            log::warn!("Title control created twice, keeping the first wiring");
            return;
        }

        let container = self.chrome.container();
        let label = self.chrome.label();

        self.listeners
            .add(label.on_click(self.handler(Self::on_label_click)));
        self.listeners.add(container.on_event(
            TitleEventKind::Click,
            self.handler(Self::on_title_click),
        ));
        self.listeners.add(container.on_event(
            TitleEventKind::DoubleClick,
            self.handler(Self::on_title_double_click),
        ));
        self.listeners.add(container.on_event(
            TitleEventKind::ContextMenu,
            self.handler(Self::on_context_menu),
        ));

        log::debug!("Title control created on container {}", container.id());
    }

    fn set_context(&self, group: Option<Rc<dyn EditorGroup>>) {
        log::debug!("Title bound to group {:?}", group.as_ref().map(|g| g.id()));
        *self.context.borrow_mut() = group;
    }

    fn refresh(&self) {
        let Some(group) = self.context() else {
            self.clear();
            return;
        };
        let Some(document) = group.active_editor() else {
            log::trace!("Group {} has no active document", group.id());
            self.clear();
            return;
        };

        let is_pinned = group.is_pinned(document.id());
        let is_active = self.services.stacks.is_active(group.id());

        let container = self.chrome.container();
        container.toggle_class(ACTIVE_CLASS, is_active);
        container.toggle_class(DIRTY_CLASS, document.is_dirty());

        let options = self.services.groups.tab_options();
        let state = PresentationState::compute(
            document.as_ref(),
            is_pinned,
            is_active,
            &options.label_format,
            self.services.theme.as_ref(),
        );

        let label = self.chrome.label();
        label.set_label(state.label_content(), state.label_options());
        label.set_foreground(state.foreground);

        let toolbar = self.chrome.toolbar();
        toolbar.set_context(EditorTarget {
            group: group.id(),
            document: document.id(),
        });
        toolbar.update();

        log::trace!(
            "Title refreshed: {} (active: {}, pinned: {}, dirty: {})",
            state.name,
            state.is_active,
            state.is_pinned,
            state.is_dirty
        );
    }

    fn on_group_change(&self, change: GroupChange) {
        if let Some(document) = change.document() {
            let concerns_active = self
                .context()
                .and_then(|group| group.active_editor())
                .is_some_and(|active| active.id() == document);
            if !concerns_active {
                return;
            }
        }
        self.refresh();
    }

    fn preferred_height(&self) -> u16 {
        self.preferred_height
    }

    fn dispose(&self) {
        if !self.listeners.is_disposed() {
            log::debug!("Disposing title control");
        }
        self.listeners.dispose();
    }
}
