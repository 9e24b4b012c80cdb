//! Types shared across the matching core and the query façade.

mod contact;
mod query_match;

pub use contact::{Contact, User};
pub use query_match::{Position, QueryMatch};
