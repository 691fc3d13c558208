//! CLI command handlers
//!
//! This module contains the implementation of CLI commands and the
//! interactive shell, bridging input parsing with the service layer.

pub mod config;
pub mod entry;
pub mod report;
pub mod session;
pub mod shell;

pub use config::handle_config_command;
pub use entry::{handle_entry_command, EntryCommands, EntryKind};
pub use report::{handle_list_command, handle_summary_command};
pub use session::Session;
pub use shell::{run_shell, Input, LineSource, TerminalInput};
