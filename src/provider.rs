//! Sources of the current user and their contact roster.
//!
//! The query façade depends only on the [`UserProvider`] contract; the
//! embedding application decides where the roster actually comes from. Two
//! implementations ship with the crate: an in-memory one and a JSON file
//! reader used by the command-line front end.

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::types::User;

/// Asynchronous source of the current user.
///
/// `Ok(None)` means the fetch worked but nobody is signed in; the caller
/// treats that as an empty contact list. An `Err` marks a failed fetch and
/// triggers the façade's last-known-good fallback.
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Fetch the current user and their contacts.
    async fn fetch_current_user(&self) -> Result<Option<User>>;
}

/// Provider serving a fixed in-memory user. Never fails.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    user: Option<User>,
}

impl StaticProvider {
    /// Serve the given user (or no user at all) on every fetch.
    #[must_use]
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }
}

#[async_trait]
impl UserProvider for StaticProvider {
    async fn fetch_current_user(&self) -> Result<Option<User>> {
        Ok(self.user.clone())
    }
}

/// Errors raised while loading a roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be read from disk.
    #[error("failed to read roster file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The roster file is not valid roster JSON.
    #[error("failed to parse roster file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Provider reading the current user from a JSON roster file on every fetch.
///
/// The file holds a single serialized [`User`]; re-reading on each fetch
/// means edits to the file show up on the next query, and a vanished or
/// corrupted file surfaces as a provider failure.
#[derive(Debug, Clone)]
pub struct JsonRosterProvider {
    path: PathBuf,
}

impl JsonRosterProvider {
    /// Create a provider backed by the roster file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<User, RosterError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RosterError::Read {
                path: self.path.clone(),
                source,
            })?;

        let user: User = serde_json::from_str(&raw).map_err(|source| RosterError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            contacts = user.contacts.len(),
            "roster loaded"
        );
        Ok(user)
    }

    /// Path of the backing roster file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserProvider for JsonRosterProvider {
    async fn fetch_current_user(&self) -> Result<Option<User>> {
        Ok(Some(self.load().await?))
    }
}
