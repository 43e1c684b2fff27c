//! Caller identity.
//!
//! The CLI has no login flow: the caller is whoever `--user`,
//! `BABYLOG_USER` or the `user` config key says it is, in that order.

use crate::errors::{AppError, AppResult};

pub const USER_ENV: &str = "BABYLOG_USER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    User(String),
    Unauthenticated,
}

pub trait IdentityProvider {
    fn current_user(&self) -> Caller;

    /// The current user id, or `AppError::Unauthenticated`.
    fn require_user(&self) -> AppResult<String> {
        match self.current_user() {
            Caller::User(id) => Ok(id),
            Caller::Unauthenticated => Err(AppError::Unauthenticated),
        }
    }
}

/// Resolution chain used by the command-line front end.
#[derive(Debug, Clone, Default)]
pub struct CliIdentity {
    pub flag: Option<String>,
    pub env: Option<String>,
    pub config: Option<String>,
}

impl CliIdentity {
    pub fn new(flag: Option<String>, config: Option<String>) -> Self {
        Self {
            flag,
            env: std::env::var(USER_ENV).ok(),
            config,
        }
    }
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl IdentityProvider for CliIdentity {
    fn current_user(&self) -> Caller {
        non_blank(&self.flag)
            .or_else(|| non_blank(&self.env))
            .or_else(|| non_blank(&self.config))
            .map(|id| Caller::User(id.to_string()))
            .unwrap_or(Caller::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(flag: Option<&str>, env: Option<&str>, config: Option<&str>) -> CliIdentity {
        CliIdentity {
            flag: flag.map(String::from),
            env: env.map(String::from),
            config: config.map(String::from),
        }
    }

    #[test]
    fn flag_wins_over_env_and_config() {
        let id = ident(Some("alice"), Some("bob"), Some("carol"));
        assert_eq!(id.current_user(), Caller::User("alice".into()));
    }

    #[test]
    fn falls_back_in_order() {
        assert_eq!(
            ident(None, Some("bob"), Some("carol")).current_user(),
            Caller::User("bob".into())
        );
        assert_eq!(
            ident(Some("  "), None, Some("carol")).current_user(),
            Caller::User("carol".into())
        );
    }

    #[test]
    fn nobody_is_unauthenticated() {
        let id = ident(None, Some(""), None);
        assert_eq!(id.current_user(), Caller::Unauthenticated);
        assert!(matches!(id.require_user(), Err(AppError::Unauthenticated)));
    }
}
