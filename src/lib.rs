//! Core crate exports for searching a contact roster by name.
//!
//! The root module re-exports the data model, the matching core, and the
//! query façade so that embedders can run queries without digging through
//! the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod provider;
pub mod queries;
pub mod search;
pub mod tokenize;
pub mod types;

pub use provider::{JsonRosterProvider, RosterError, StaticProvider, UserProvider};
pub use queries::ContactQueries;
pub use search::{CaseSensitivity, MatchOptions, find_matches};
pub use tokenize::{Word, tokenize};
pub use types::{Contact, Position, QueryMatch, User};
