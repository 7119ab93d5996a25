//! In-memory workbench: ordered editor groups and the focused group

use super::{DocumentId, EditorGroup, EditorGroupModel, GroupId};
use crate::config::TabOptions;
use crate::error::{EditorError, EditorResult};
use crate::scheduler::LocalBoxFuture;
use crate::title::{CloseEditorAction, EditorTarget, GroupService, GroupStacks};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Root workbench state shared by all editor titles
pub struct Workbench {
    /// Groups in layout order
    groups: RefCell<Vec<Rc<EditorGroupModel>>>,

    /// Focused group
    active_group: Cell<Option<GroupId>>,

    options: RefCell<TabOptions>,
}

impl Workbench {
    /// Create a workbench with a single empty group
    pub fn new(options: TabOptions) -> Self {
        let first = Rc::new(EditorGroupModel::new());
        let active = first.id();
        Self {
            groups: RefCell::new(vec![first]),
            active_group: Cell::new(Some(active)),
            options: RefCell::new(options),
        }
    }

    /// Add a new empty group after the others
    pub fn add_group(&self) -> Rc<EditorGroupModel> {
        let group = Rc::new(EditorGroupModel::new());
        self.groups.borrow_mut().push(group.clone());
        log::debug!("Added editor group {}", group.id());
        group
    }

    /// Remove a group; focus moves to the first remaining group
    pub fn remove_group(&self, id: GroupId) -> EditorResult<()> {
        let mut groups = self.groups.borrow_mut();
        let index = groups
            .iter()
            .position(|g| g.id() == id)
            .ok_or(EditorError::GroupNotFound { id })?;
        groups.remove(index);

        if self.active_group.get() == Some(id) {
            self.active_group.set(groups.first().map(|g| g.id()));
        }
        Ok(())
    }

    pub fn group(&self, id: GroupId) -> Option<Rc<EditorGroupModel>> {
        self.groups.borrow().iter().find(|g| g.id() == id).cloned()
    }

    pub fn groups(&self) -> Vec<Rc<EditorGroupModel>> {
        self.groups.borrow().clone()
    }

    pub fn active_group(&self) -> Option<Rc<EditorGroupModel>> {
        self.active_group.get().and_then(|id| self.group(id))
    }

    pub fn set_options(&self, options: TabOptions) {
        *self.options.borrow_mut() = options;
    }
}

/// Close `target.document` in `group`, refusing documents with unsaved changes
fn close_in_group(group: &EditorGroupModel, target: EditorTarget) -> EditorResult<()> {
    let document = group
        .document(target.document)
        .ok_or(EditorError::DocumentNotFound {
            group: target.group,
            document: target.document,
        })?;

    if document.is_dirty() {
        return Err(EditorError::UnsavedChanges {
            name: document.name(),
        });
    }

    group.close(target.document);
    log::debug!("Closed {} in group {}", document.name(), target.group);
    Ok(())
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(TabOptions::default())
    }
}

impl GroupService for Workbench {
    fn pin_editor(&self, group: GroupId, document: DocumentId) {
        match self.group(group) {
            Some(model) => model.pin(document),
            None => log::warn!("Pin requested for unknown group {}", group),
        }
    }

    fn focus_group(&self, group: GroupId) {
        if self.group(group).is_some() {
            self.active_group.set(Some(group));
        } else {
            log::warn!("Focus requested for unknown group {}", group);
        }
    }

    fn tab_options(&self) -> TabOptions {
        self.options.borrow().clone()
    }
}

impl GroupStacks for Workbench {
    fn is_active(&self, group: GroupId) -> bool {
        self.active_group.get() == Some(group)
    }

    fn group_count(&self) -> usize {
        self.groups.borrow().len()
    }
}

impl CloseEditorAction for Workbench {
    fn run(&self, target: EditorTarget) -> LocalBoxFuture<'static, anyhow::Result<()>> {
        let group = self.group(target.group);

        Box::pin(async move {
            let group = group.ok_or(EditorError::GroupNotFound { id: target.group })?;
            close_in_group(&group, target)?;
            Ok(())
        })
    }
}

impl std::fmt::Debug for Workbench {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbench")
            .field("groups", &self.groups.borrow().len())
            .field("active_group", &self.active_group.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EditorDocument, FileDocument};

    fn workbench_with_doc() -> (Workbench, Rc<EditorGroupModel>, Rc<FileDocument>) {
        let workbench = Workbench::default();
        let group = workbench.groups()[0].clone();
        let doc = Rc::new(FileDocument::from_path("/notes/a.md", None));
        group.open(doc.clone());
        (workbench, group, doc)
    }

    #[test]
    fn test_new_workbench_has_one_active_group() {
        let workbench = Workbench::default();
        assert_eq!(workbench.group_count(), 1);
        let group = workbench.groups()[0].clone();
        assert!(workbench.is_active(group.id()));
    }

    #[test]
    fn test_focus_group() {
        let workbench = Workbench::default();
        let second = workbench.add_group();
        workbench.focus_group(second.id());
        assert!(workbench.is_active(second.id()));
        assert_eq!(workbench.group_count(), 2);

        workbench.focus_group(GroupId::new());
        assert!(workbench.is_active(second.id()));
    }

    #[test]
    fn test_remove_active_group_moves_focus() {
        let workbench = Workbench::default();
        let first = workbench.groups()[0].clone();
        let second = workbench.add_group();
        workbench.focus_group(second.id());

        workbench.remove_group(second.id()).unwrap();
        assert!(workbench.is_active(first.id()));
        assert!(matches!(
            workbench.remove_group(second.id()),
            Err(EditorError::GroupNotFound { .. })
        ));
    }

    #[test]
    fn test_pin_editor() {
        let (workbench, group, doc) = workbench_with_doc();
        workbench.pin_editor(group.id(), doc.id());
        assert!(group.is_pinned(doc.id()));
    }

    #[tokio::test]
    async fn test_close_clean_document() {
        let (workbench, group, doc) = workbench_with_doc();
        let target = EditorTarget {
            group: group.id(),
            document: doc.id(),
        };
        workbench.run(target).await.unwrap();
        assert!(group.is_empty());
    }

    #[tokio::test]
    async fn test_close_waits_until_polled() {
        let (workbench, group, doc) = workbench_with_doc();
        let target = EditorTarget {
            group: group.id(),
            document: doc.id(),
        };

        let close = workbench.run(target);
        assert!(group.contains(doc.id()));

        close.await.unwrap();
        assert!(!group.contains(doc.id()));
    }

    #[tokio::test]
    async fn test_close_dirty_document_fails() {
        let (workbench, group, doc) = workbench_with_doc();
        doc.mark_modified();
        let target = EditorTarget {
            group: group.id(),
            document: doc.id(),
        };

        let err = workbench.run(target).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EditorError>(),
            Some(EditorError::UnsavedChanges { .. })
        ));
        assert!(group.contains(doc.id()));
    }

    #[tokio::test]
    async fn test_close_unknown_document_fails() {
        let (workbench, group, _doc) = workbench_with_doc();
        let target = EditorTarget {
            group: group.id(),
            document: DocumentId::new(),
        };
        assert!(workbench.run(target).await.is_err());
    }
}
