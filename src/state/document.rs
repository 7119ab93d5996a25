//! Document references shown in the editor title
//!
//! The title controller only ever queries documents. `EditorDocument` is the
//! query surface; `FileDocument` is the workbench's implementation for
//! files on disk and untitled buffers.

use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Unique identifier for documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Create a new unique document ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How much detail a description or title string carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verbosity {
    Short,
    Medium,
    Long,
}

/// Read-only view of a document as the title needs it
pub trait EditorDocument {
    fn id(&self) -> DocumentId;

    fn is_dirty(&self) -> bool;

    /// Short display name, usually the file name
    fn name(&self) -> String;

    fn description(&self, verbosity: Verbosity) -> String;

    fn title(&self, verbosity: Verbosity) -> String;

    /// Addressable resource backing the document, if any
    fn resource(&self) -> Option<PathBuf>;
}

/// A document backed by a file path, or an untitled buffer
#[derive(Debug)]
pub struct FileDocument {
    id: DocumentId,

    /// File path (None for untitled documents)
    path: Option<PathBuf>,

    /// Workspace root used for medium verbosity strings
    workspace_root: Option<PathBuf>,

    /// Display name for the document
    display_name: RefCell<String>,

    /// Whether the document has unsaved changes
    modified: Cell<bool>,
}

impl FileDocument {
    /// Create a new untitled document
    pub fn untitled(display_name: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            path: None,
            workspace_root: None,
            display_name: RefCell::new(display_name.into()),
            modified: Cell::new(false),
        }
    }

    /// Create a document for a file path
    pub fn from_path(path: impl Into<PathBuf>, workspace_root: Option<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path::display_name(&path);

        Self {
            id: DocumentId::new(),
            path: Some(path),
            workspace_root,
            display_name: RefCell::new(display_name),
            modified: Cell::new(false),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Mark the document as modified
    pub fn mark_modified(&self) {
        self.modified.set(true);
    }

    /// Mark the document as saved
    pub fn mark_saved(&self) {
        self.modified.set(false);
    }

    pub fn rename(&self, display_name: impl Into<String>) {
        *self.display_name.borrow_mut() = display_name.into();
    }

    /// Path relative to the workspace root, or the path itself outside it
    fn workspace_relative(&self, target: &Path) -> PathBuf {
        self.workspace_root
            .as_deref()
            .and_then(|root| path::relative_to(target, root))
            .filter(|rel| !rel.as_os_str().is_empty())
            .unwrap_or_else(|| target.to_path_buf())
    }
}

impl EditorDocument for FileDocument {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn is_dirty(&self) -> bool {
        self.modified.get()
    }

    fn name(&self) -> String {
        self.display_name.borrow().clone()
    }

    fn description(&self, verbosity: Verbosity) -> String {
        let Some(parent) = self.path.as_deref().and_then(Path::parent) else {
            return String::new();
        };

        match verbosity {
            Verbosity::Short => parent
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            Verbosity::Medium => match self.workspace_root.as_deref() {
                // Files at the workspace root have no folder to show
                Some(root) if parent == root => String::new(),
                _ => self.workspace_relative(parent).to_string_lossy().to_string(),
            },
            Verbosity::Long => parent.to_string_lossy().to_string(),
        }
    }

    fn title(&self, verbosity: Verbosity) -> String {
        let Some(file) = self.path.as_deref() else {
            return self.name();
        };

        match verbosity {
            Verbosity::Short => self.name(),
            Verbosity::Medium => self.workspace_relative(file).to_string_lossy().to_string(),
            Verbosity::Long => file.to_string_lossy().to_string(),
        }
    }

    fn resource(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
