//! Everything a command handler needs besides its own arguments.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::identity::{CliIdentity, IdentityProvider};
use crate::store::{EntryStore, MemoryStore};

pub struct AppContext {
    pub cfg: Config,
    pub identity: CliIdentity,
    pub memory: bool,
    pub test: bool,
}

impl AppContext {
    pub fn new(cli: &Cli, cfg: Config) -> Self {
        let identity = CliIdentity::new(cli.user.clone(), cfg.user.clone());
        Self {
            cfg,
            identity,
            memory: cli.memory,
            test: cli.test,
        }
    }

    /// The configured entry store.
    pub fn store(&self) -> AppResult<Box<dyn EntryStore>> {
        if self.memory {
            return Ok(Box::new(MemoryStore::new()));
        }
        Ok(Box::new(SqliteStore::open(&self.cfg.database)?))
    }

    /// Current user id, or `Unauthenticated`.
    pub fn user(&self) -> AppResult<String> {
        self.identity.require_user()
    }
}
