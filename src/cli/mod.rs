pub mod commands;
pub mod output;
pub mod shell;
pub mod shell_context;

pub use shell::run_cli;
pub use shell_context::{Session, ShellContext};

use crate::errors::BankError;

/// Fatal shell failures that abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

/// A recoverable failure inside one command invocation.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("log in first")]
    NotLoggedIn,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Input source for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    /// Reads newline-separated commands from stdin; used by tests.
    Script,
}
