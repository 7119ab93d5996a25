//! Editor model behind the title
//!
//! This module contains the workbench state the title reads:
//! - `document`: document references and their display strings
//! - `group`: editor groups with their active and pinned documents
//! - `workbench`: ordered groups, the focused group and tab options

mod document;
mod group;
mod workbench;

pub use document::*;
pub use group::*;
pub use workbench::*;
