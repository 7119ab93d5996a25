//! Utilities module for the Cosmic Notebook title
//!
//! Shared helper functions and utilities including:
//! - Disposable listener registrations
//! - Event emitters
//! - Path utilities

pub mod disposable;
pub mod event;

pub use disposable::{Disposable, DisposableStore};
pub use event::Emitter;

/// Path utilities
pub mod path {
    use std::path::{Path, PathBuf};

    /// Make a path relative to a base path
    pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
        path.strip_prefix(base).ok().map(|p| p.to_path_buf())
    }

    /// Get the last path component for display
    pub fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string())
    }
}
