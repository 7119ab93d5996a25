//! Editor group state
//!
//! A group holds an ordered list of open documents, one of which may be
//! active, plus the set of pinned documents.

use super::{DocumentId, EditorDocument};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

/// Unique identifier for editor groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(Uuid);

impl GroupId {
    /// Create a new unique group ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query surface of an editor group as the title controller sees it
pub trait EditorGroup {
    fn id(&self) -> GroupId;

    fn active_editor(&self) -> Option<Rc<dyn EditorDocument>>;

    fn is_pinned(&self, document: DocumentId) -> bool;
}

#[derive(Default)]
struct GroupState {
    /// Ordered list of open documents
    documents: Vec<Rc<dyn EditorDocument>>,

    /// Index of the currently active document
    active_index: Option<usize>,

    pinned: HashSet<DocumentId>,
}

/// In-memory editor group
pub struct EditorGroupModel {
    id: GroupId,
    state: RefCell<GroupState>,
}

impl EditorGroupModel {
    /// Create a new empty group
    pub fn new() -> Self {
        Self {
            id: GroupId::new(),
            state: RefCell::new(GroupState::default()),
        }
    }

    /// Open a document after the active one and make it active
    pub fn open(&self, document: Rc<dyn EditorDocument>) {
        let mut state = self.state.borrow_mut();

        if let Some(index) = state.documents.iter().position(|d| d.id() == document.id()) {
            state.active_index = Some(index);
            return;
        }

        let insert_index = state
            .active_index
            .map(|i| i + 1)
            .unwrap_or(state.documents.len());

        state.documents.insert(insert_index, document);
        state.active_index = Some(insert_index);
    }

    /// Close a document by ID, returning whether it was open
    pub fn close(&self, document: DocumentId) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(index) = state.documents.iter().position(|d| d.id() == document) else {
            return false;
        };

        state.documents.remove(index);
        state.pinned.remove(&document);

        if state.documents.is_empty() {
            state.active_index = None;
        } else if let Some(active) = state.active_index {
            if active == index {
                // Removed the active document, select previous or next
                state.active_index = Some(active.min(state.documents.len() - 1));
            } else if active > index {
                state.active_index = Some(active - 1);
            }
        }

        true
    }

    /// Close every document except the specified one
    pub fn close_others(&self, keep: DocumentId) {
        let mut state = self.state.borrow_mut();
        state.documents.retain(|d| d.id() == keep);
        state.pinned.retain(|id| *id == keep);
        state.active_index = if state.documents.is_empty() { None } else { Some(0) };
    }

    /// Set the active document by ID
    pub fn set_active(&self, document: DocumentId) {
        let mut state = self.state.borrow_mut();
        if let Some(index) = state.documents.iter().position(|d| d.id() == document) {
            state.active_index = Some(index);
        }
    }

    /// Pin a document; unknown documents are ignored
    pub fn pin(&self, document: DocumentId) {
        let mut state = self.state.borrow_mut();
        if state.documents.iter().any(|d| d.id() == document) {
            state.pinned.insert(document);
        }
    }

    pub fn unpin(&self, document: DocumentId) {
        self.state.borrow_mut().pinned.remove(&document);
    }

    pub fn contains(&self, document: DocumentId) -> bool {
        self.state.borrow().documents.iter().any(|d| d.id() == document)
    }

    pub fn document(&self, document: DocumentId) -> Option<Rc<dyn EditorDocument>> {
        self.state
            .borrow()
            .documents
            .iter()
            .find(|d| d.id() == document)
            .cloned()
    }

    /// Get document count
    pub fn count(&self) -> usize {
        self.state.borrow().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().documents.is_empty()
    }

    /// Get all document IDs in order
    pub fn document_ids(&self) -> Vec<DocumentId> {
        self.state.borrow().documents.iter().map(|d| d.id()).collect()
    }
}

impl Default for EditorGroupModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorGroup for EditorGroupModel {
    fn id(&self) -> GroupId {
        self.id
    }

    fn active_editor(&self) -> Option<Rc<dyn EditorDocument>> {
        let state = self.state.borrow();
        state
            .active_index
            .and_then(|i| state.documents.get(i))
            .cloned()
    }

    fn is_pinned(&self, document: DocumentId) -> bool {
        self.state.borrow().pinned.contains(&document)
    }
}

impl std::fmt::Debug for EditorGroupModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorGroupModel")
            .field("id", &self.id)
            .field("documents", &self.document_ids())
            .finish()
    }
}
