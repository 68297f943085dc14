//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod inspect;
pub mod models;
pub mod show;

// Re-export main command functions
pub use export::execute_export;
pub use inspect::{execute_history, execute_inspect};
pub use models::{ExportArgs, HistoryArgs, InspectArgs, SameKeyJump, ShowArgs};
pub use show::execute_show;
