use serde::{Deserialize, Serialize};

/// A single entry in a user's contact list.
///
/// The display name is optional: contacts without one are never matched by a
/// name query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Contact {
    /// Create a contact with a display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Create a contact that has no display name.
    #[must_use]
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// The current user together with the contacts owned by that user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<String>,
    pub contacts: Vec<Contact>,
}

impl User {
    /// Create an empty [`User`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replace the contact list with a new collection.
    #[must_use]
    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }
}
