use std::collections::HashMap;
use std::sync::Arc;

use roster::search::MatchOptions;
use roster::{ContactQueries, JsonRosterProvider, QueryMatch, StaticProvider, UserProvider};
use tracing::warn;

use crate::settings::ResolvedConfig;

/// Coordinates one fetch-and-query round against a roster file.
pub(crate) struct QueryWorkflow {
    provider: JsonRosterProvider,
    options: MatchOptions,
}

/// Result of a query run, with the display names needed for rendering.
pub(crate) struct QueryOutcome {
    pub(crate) phrase: String,
    pub(crate) matches: Vec<QueryMatch>,
    pub(crate) names: HashMap<String, String>,
}

impl QueryWorkflow {
    pub(crate) fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            provider: JsonRosterProvider::new(config.roster_path.clone()),
            options: config.options,
        }
    }

    /// Fetch the roster once and run a single query against it.
    ///
    /// The fetched user serves both the query (through the façade) and the
    /// id-to-name mapping used by the printers. A failed fetch degrades to
    /// an empty result rather than an error.
    pub(crate) async fn run(&self, phrase: &str) -> QueryOutcome {
        let user = match self.provider.fetch_current_user().await {
            Ok(user) => user,
            Err(error) => {
                warn!(%error, "roster fetch failed, continuing with no contacts");
                None
            }
        };

        let names: HashMap<String, String> = user
            .iter()
            .flat_map(|user| &user.contacts)
            .filter_map(|contact| contact.name.clone().map(|name| (contact.id.clone(), name)))
            .collect();

        let queries =
            ContactQueries::with_options(Arc::new(StaticProvider::new(user)), self.options);
        let matches = queries.query_by_name_matching(phrase).await;

        QueryOutcome {
            phrase: phrase.to_string(),
            matches,
            names,
        }
    }
}
