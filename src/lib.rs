//! Cosmic Notebook Title - single-title editor chrome for COSMIC editors
//!
//! When tab strips are turned off every editor group shows one title for its
//! active document. This crate keeps that title in sync with the group and
//! turns gestures on it into workbench actions.

pub mod config;
pub mod error;
pub mod message;
pub mod scheduler;
pub mod state;
pub mod theme;
pub mod title;
pub mod ui;
pub mod utils;

pub use config::{Config, LabelFormat, TabOptions};
pub use error::{AppError, ErrorSink, LogErrorSink, TitleError};
pub use scheduler::{QueueScheduler, Scheduler, TokioScheduler};
pub use title::{GroupChange, NoTabsTitleControl, TitleControl, TitleServices};
pub use ui::{TitleBar, TitleCommand, TitleUpdate};

/// Default log filter when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info,cosmic_notebook_title=debug";

/// Initialize the logging system
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
