use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::bank::Bank;
use crate::cli::{commands, output, CliError, CliMode, CommandError, LoopControl};
use crate::config::{Config, ConfigManager};
use crate::core::services::StatementOrder;
use crate::domain::account::Account;

/// A logged-in account plus its inactivity deadline.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub account_id: Uuid,
    pub deadline: Instant,
}

/// Mutable state threaded through every shell command.
///
/// The logged-in account and the shared loan pool were ambient globals in
/// the original; here both live in explicit state the commands receive.
pub struct ShellContext {
    pub bank: Bank,
    pub config: Config,
    pub session: Option<Session>,
    pub statement_order: StatementOrder,
    pub running: bool,
    mode: CliMode,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        Ok(Self {
            bank: Bank::demo(),
            config,
            session: None,
            statement_order: StatementOrder::default(),
            running: true,
            mode,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn prompt(&self) -> String {
        match self.active_account() {
            Some(account) => format!("bank:{}> ", account.username),
            None => "bank> ".into(),
        }
    }

    pub fn active_account(&self) -> Option<&Account> {
        let session = self.session.as_ref()?;
        self.bank.account(session.account_id)
    }

    pub fn require_session(&self) -> Result<Uuid, CommandError> {
        self.session
            .as_ref()
            .map(|session| session.account_id)
            .ok_or(CommandError::NotLoggedIn)
    }

    /// Opens a session for `account_id` with a fresh deadline.
    pub fn start_session(&mut self, account_id: Uuid) {
        self.session = Some(Session {
            account_id,
            deadline: Instant::now() + self.session_timeout(),
        });
        self.statement_order = StatementOrder::default();
    }

    pub fn end_session(&mut self) {
        self.session = None;
    }

    /// Drops the session once the inactivity deadline has passed.
    pub fn expire_stale_session(&mut self) {
        if let Some(session) = &self.session {
            if Instant::now() >= session.deadline {
                output::warning("Session expired, log in again.");
                self.session = None;
            }
        }
    }

    /// Pushes the inactivity deadline forward after a qualifying command.
    pub fn refresh_session(&mut self) {
        let timeout = self.session_timeout();
        if let Some(session) = self.session.as_mut() {
            session.deadline = Instant::now() + timeout;
        }
    }

    fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.config.session_timeout_secs)
    }

    /// Runs one command line against the context.
    ///
    /// Expiry is checked before the command and the deadline refreshed
    /// after it, matching the original's reset-on-activity timer.
    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        self.expire_stale_session();
        let control = commands::dispatch(self, command, args);
        self.refresh_session();
        control
    }

    pub fn report_error(&self, err: &CommandError) {
        output::error(err);
    }

    pub fn command_names(&self) -> Vec<String> {
        commands::COMMAND_NAMES
            .iter()
            .map(|name| name.to_string())
            .collect()
    }
}
