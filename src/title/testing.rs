//! Recording fakes for title controller tests

use super::input::{ElementId, TitleEvent, TitleEventKind};
use super::services::{
    ActionToolbar, CloseEditorAction, EditorTarget, GroupService, GroupStacks, LabelContent,
    LabelOptions, LabelWidget, QuickSwitcher, TitleChrome, TitleContainer, TitleServices,
};
use crate::config::{LabelFormat, TabOptions};
use crate::error::{AppError, ErrorSink};
use crate::scheduler::{LocalBoxFuture, TokioScheduler};
use crate::state::{DocumentId, EditorDocument, EditorGroup, GroupId, Verbosity};
use crate::theme::{ColorId, ThemeService};
use crate::utils::{Disposable, Emitter};
use cosmic::iced_core::Color;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::rc::Rc;
use tokio::task::LocalSet;

/// Let deferred jobs and spawned futures on the local set run
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Pin(GroupId, DocumentId),
    Focus(GroupId),
    Close(GroupId, DocumentId),
    QuickSwitcher,
}

type Log = Rc<RefCell<Vec<Recorded>>>;

pub struct FakeDocument {
    id: DocumentId,
    name: String,
    description: String,
    title: String,
    dirty: bool,
}

impl FakeDocument {
    pub fn new(name: &str) -> Self {
        Self {
            id: DocumentId::new(),
            name: name.to_string(),
            description: String::new(),
            title: format!("/{}", name),
            dirty: false,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn dirty(mut self) -> Self {
        self.dirty = true;
        self
    }
}

impl EditorDocument for FakeDocument {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn description(&self, _verbosity: Verbosity) -> String {
        self.description.clone()
    }

    fn title(&self, _verbosity: Verbosity) -> String {
        self.title.clone()
    }

    fn resource(&self) -> Option<PathBuf> {
        Some(PathBuf::from(&self.title))
    }
}

pub struct FakeGroup {
    id: GroupId,
    active: Option<Rc<dyn EditorDocument>>,
    pinned: Cell<bool>,
}

impl FakeGroup {
    pub fn with_active(document: FakeDocument) -> Self {
        Self {
            id: GroupId::new(),
            active: Some(Rc::new(document)),
            pinned: Cell::new(false),
        }
    }

    pub fn empty() -> Self {
        Self {
            id: GroupId::new(),
            active: None,
            pinned: Cell::new(false),
        }
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active.as_ref().map(|d| d.id())
    }

    pub fn pin_active(&self) {
        self.pinned.set(true);
    }
}

impl EditorGroup for FakeGroup {
    fn id(&self) -> GroupId {
        self.id
    }

    fn active_editor(&self) -> Option<Rc<dyn EditorDocument>> {
        self.active.clone()
    }

    fn is_pinned(&self, document: DocumentId) -> bool {
        self.pinned.get() && self.active_id() == Some(document)
    }
}

#[derive(Default)]
pub struct FakeTheme;

impl FakeTheme {
    pub const ACTIVE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const UNFOCUSED: Color = Color {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };
}

impl ThemeService for FakeTheme {
    fn color(&self, id: ColorId) -> Option<Color> {
        Some(match id {
            ColorId::TabActiveForeground => Self::ACTIVE,
            ColorId::TabUnfocusedActiveForeground => Self::UNFOCUSED,
        })
    }
}

pub struct FakeContainer {
    id: ElementId,
    classes: RefCell<HashSet<String>>,
    emitters: HashMap<TitleEventKind, Emitter<TitleEvent>>,
}

impl FakeContainer {
    pub fn fire(&self, kind: TitleEventKind, event: &TitleEvent) {
        self.emitters[&kind].fire(event);
    }

    pub fn listener_count(&self) -> usize {
        self.emitters.values().map(Emitter::listener_count).sum()
    }
}

impl TitleContainer for FakeContainer {
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
        self.emitters[&kind].subscribe(listener)
    }
}

pub struct FakeLabel {
    id: ElementId,
    current: RefCell<Option<(LabelContent, LabelOptions)>>,
    foreground: Cell<Option<Color>>,
    clears: Cell<usize>,
    click: Emitter<TitleEvent>,
}

impl FakeLabel {
    pub fn current(&self) -> Option<(LabelContent, LabelOptions)> {
        self.current.borrow().clone()
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground.get()
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }

    pub fn fire(&self, event: &TitleEvent) {
        self.click.fire(event);
    }

    pub fn listener_count(&self) -> usize {
        self.click.listener_count()
    }
}

impl LabelWidget for FakeLabel {
    fn id(&self) -> ElementId {
        self.id
    }

    fn set_label(&self, content: LabelContent, options: LabelOptions) {
        *self.current.borrow_mut() = Some((content, options));
    }

    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
        *self.current.borrow_mut() = None;
    }

    fn set_foreground(&self, color: Option<Color>) {
        self.foreground.set(color);
    }

    fn on_click(&self, listener: Box<dyn Fn(&TitleEvent)>) -> Disposable {
        self.click.subscribe(listener)
    }
}

pub struct FakeToolbar {
    root: ElementId,
    context: RefCell<Option<EditorTarget>>,
    clears: Cell<usize>,
    updates: Cell<usize>,
}

impl FakeToolbar {
    pub fn root_id(&self) -> ElementId {
        self.root
    }

    pub fn context(&self) -> Option<EditorTarget> {
        *self.context.borrow()
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }

    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl ActionToolbar for FakeToolbar {
    fn root(&self) -> ElementId {
        self.root
    }

    fn set_context(&self, context: EditorTarget) {
        *self.context.borrow_mut() = Some(context);
    }

    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
        *self.context.borrow_mut() = None;
    }

    fn update(&self) {
        self.updates.set(self.updates.get() + 1);
    }
}

/// Title chrome with a fixed element tree:
/// container(1) > label(2), container(1) > toolbar(3) > button(4)
pub struct FakeChrome {
    pub container: Rc<FakeContainer>,
    pub label: Rc<FakeLabel>,
    pub toolbar: Rc<FakeToolbar>,
    parents: HashMap<ElementId, ElementId>,
    dragging: Cell<bool>,
    menus: RefCell<Vec<(ElementId, EditorTarget)>>,
}

impl FakeChrome {
    const CONTAINER: ElementId = ElementId(1);
    const LABEL: ElementId = ElementId(2);
    const TOOLBAR: ElementId = ElementId(3);
    const TOOLBAR_BUTTON: ElementId = ElementId(4);

    pub fn new() -> Self {
        let emitters = [
            TitleEventKind::Click,
            TitleEventKind::DoubleClick,
            TitleEventKind::ContextMenu,
        ]
        .into_iter()
        .map(|kind| (kind, Emitter::new()))
        .collect();

        let parents = HashMap::from([
            (Self::LABEL, Self::CONTAINER),
            (Self::TOOLBAR, Self::CONTAINER),
            (Self::TOOLBAR_BUTTON, Self::TOOLBAR),
        ]);

        Self {
            container: Rc::new(FakeContainer {
                id: Self::CONTAINER,
                classes: RefCell::new(HashSet::new()),
                emitters,
            }),
            label: Rc::new(FakeLabel {
                id: Self::LABEL,
                current: RefCell::new(None),
                foreground: Cell::new(None),
                clears: Cell::new(0),
                click: Emitter::new(),
            }),
            toolbar: Rc::new(FakeToolbar {
                root: Self::TOOLBAR,
                context: RefCell::new(None),
                clears: Cell::new(0),
                updates: Cell::new(0),
            }),
            parents,
            dragging: Cell::new(false),
            menus: RefCell::new(Vec::new()),
        }
    }

    pub fn toolbar_button(&self) -> ElementId {
        Self::TOOLBAR_BUTTON
    }

    pub fn set_dragging(&self, dragging: bool) {
        self.dragging.set(dragging);
    }

    pub fn menus(&self) -> Vec<(ElementId, EditorTarget)> {
        self.menus.borrow().clone()
    }
}

impl TitleChrome for FakeChrome {
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
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parents.get(&id).copied();
        }
        false
    }

    fn is_dragging(&self) -> bool {
        self.dragging.get()
    }

    fn show_context_menu(&self, anchor: ElementId, target: EditorTarget) {
        self.menus.borrow_mut().push((anchor, target));
    }
}

pub struct FakeGroupService {
    log: Log,
    label_format: RefCell<LabelFormat>,
}

impl FakeGroupService {
    pub fn set_label_format(&self, format: LabelFormat) {
        *self.label_format.borrow_mut() = format;
    }
}

impl GroupService for FakeGroupService {
    fn pin_editor(&self, group: GroupId, document: DocumentId) {
        self.log.borrow_mut().push(Recorded::Pin(group, document));
    }

    fn focus_group(&self, group: GroupId) {
        self.log.borrow_mut().push(Recorded::Focus(group));
    }

    fn tab_options(&self) -> TabOptions {
        TabOptions {
            show_tabs: false,
            label_format: self.label_format.borrow().clone(),
        }
    }
}

pub struct FakeStacks {
    active: Cell<Option<GroupId>>,
    count: Cell<usize>,
}

impl FakeStacks {
    pub fn set_active(&self, group: Option<GroupId>) {
        self.active.set(group);
    }

    pub fn set_count(&self, count: usize) {
        self.count.set(count);
    }
}

impl GroupStacks for FakeStacks {
    fn is_active(&self, group: GroupId) -> bool {
        self.active.get() == Some(group)
    }

    fn group_count(&self) -> usize {
        self.count.get()
    }
}

pub struct FakeClose {
    log: Log,
    failure: RefCell<Option<String>>,
}

impl FakeClose {
    pub fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }
}

impl CloseEditorAction for FakeClose {
    fn run(&self, target: EditorTarget) -> LocalBoxFuture<'static, anyhow::Result<()>> {
        self.log
            .borrow_mut()
            .push(Recorded::Close(target.group, target.document));
        let result = match self.failure.borrow().clone() {
            Some(message) => Err(anyhow::anyhow!(message)),
            None => Ok(()),
        };
        Box::pin(async move { result })
    }
}

pub struct FakeQuickSwitcher {
    log: Log,
}

impl QuickSwitcher for FakeQuickSwitcher {
    fn show(&self) {
        self.log.borrow_mut().push(Recorded::QuickSwitcher);
    }
}

#[derive(Default)]
pub struct RecordingErrorSink {
    reported: RefCell<Vec<String>>,
}

impl RecordingErrorSink {
    pub fn reported(&self) -> Vec<String> {
        self.reported.borrow().clone()
    }
}

impl ErrorSink for RecordingErrorSink {
    fn report(&self, error: &AppError) {
        self.reported.borrow_mut().push(error.to_string());
    }
}

pub struct FakeServices {
    log: Log,
    pub groups: Rc<FakeGroupService>,
    pub stacks: Rc<FakeStacks>,
    pub close: Rc<FakeClose>,
    pub quick_switcher: Rc<FakeQuickSwitcher>,
    pub errors: Rc<RecordingErrorSink>,
    pub theme: Rc<FakeTheme>,
    pub local: Rc<LocalSet>,
}

impl FakeServices {
    pub fn new() -> Self {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        Self {
            groups: Rc::new(FakeGroupService {
                log: log.clone(),
                label_format: RefCell::new(LabelFormat::Default),
            }),
            stacks: Rc::new(FakeStacks {
                active: Cell::new(None),
                count: Cell::new(1),
            }),
            close: Rc::new(FakeClose {
                log: log.clone(),
                failure: RefCell::new(None),
            }),
            quick_switcher: Rc::new(FakeQuickSwitcher { log: log.clone() }),
            errors: Rc::new(RecordingErrorSink::default()),
            theme: Rc::new(FakeTheme),
            local: Rc::new(LocalSet::new()),
            log,
        }
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.log.borrow().clone()
    }

    pub fn title_services(&self) -> TitleServices {
        TitleServices {
            groups: self.groups.clone(),
            stacks: self.stacks.clone(),
            theme: self.theme.clone(),
            close_action: self.close.clone(),
            quick_switcher: self.quick_switcher.clone(),
            scheduler: Rc::new(TokioScheduler::new(self.local.clone())),
            errors: self.errors.clone(),
        }
    }
}
