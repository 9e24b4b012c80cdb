//! The public query façade over a [`UserProvider`].
//!
//! [`ContactQueries`] remembers the last user a provider served
//! successfully. When a later fetch fails, the query is answered from that
//! cached user instead of surfacing the failure, so the query entry point
//! itself has no error outcome.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::provider::UserProvider;
use crate::search::{MatchOptions, find_matches};
use crate::types::{QueryMatch, User};

/// Queries over the current user's contacts, with last-known-good fallback.
pub struct ContactQueries {
    provider: Arc<dyn UserProvider>,
    options: MatchOptions,
    last_user: Mutex<Option<User>>,
}

impl ContactQueries {
    /// Build a façade over `provider` with default match options.
    #[must_use]
    pub fn new(provider: Arc<dyn UserProvider>) -> Self {
        Self::with_options(provider, MatchOptions::default())
    }

    /// Build a façade over `provider` with the given match options.
    #[must_use]
    pub fn with_options(provider: Arc<dyn UserProvider>, options: MatchOptions) -> Self {
        Self {
            provider,
            options,
            last_user: Mutex::new(None),
        }
    }

    /// Find contacts whose name contains `phrase`, ranked as described in
    /// [`find_matches`](crate::search::find_matches).
    ///
    /// Always yields a result: a provider failure falls back to the last
    /// successfully fetched user, and with no such user the contact list is
    /// treated as empty.
    pub async fn query_by_name_matching(&self, phrase: &str) -> Vec<QueryMatch> {
        let user = self.current_user().await;
        let contacts = user.map(|user| user.contacts).unwrap_or_default();

        let matches = find_matches(phrase, &contacts, &self.options);
        debug!(phrase, matches = matches.len(), "name query evaluated");
        matches
    }

    /// Fetch the current user, updating the cache on success and falling
    /// back to it on failure.
    ///
    /// The lock is held across the fetch so concurrent queries observe
    /// fetches and cache updates in a single consistent order.
    async fn current_user(&self) -> Option<User> {
        let mut cached = self.last_user.lock().await;

        match self.provider.fetch_current_user().await {
            Ok(user) => {
                *cached = user.clone();
                user
            }
            Err(error) => {
                warn!(%error, "user fetch failed, answering from last known roster");
                cached.clone()
            }
        }
    }
}
