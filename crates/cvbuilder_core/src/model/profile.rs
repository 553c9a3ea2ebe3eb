//! Personal-info editor state model.
//!
//! # Responsibility
//! - Define the aggregate owned by one editor session: two free-text
//!   fields plus three independently toggleable named lists.
//! - Keep the list shape uniform so the controller can address any list
//!   through one enumerated key.
//!
//! # Invariants
//! - `pending_value` is empty immediately after a successful commit.
//! - `entries` holds only non-empty committed strings; duplicates allowed.
//! - Toggling or editing one list never touches another.

use serde::{Deserialize, Serialize};

/// Enumerated key addressing one of the fixed named lists.
///
/// Replaces stringly-typed field lookup: the set of lists is closed, so an
/// unknown key is unrepresentable rather than a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKey {
    Contacts,
    Skills,
    Hobbies,
}

impl ListKey {
    /// All list keys in display order.
    pub const ALL: [ListKey; 3] = [ListKey::Contacts, ListKey::Skills, ListKey::Hobbies];

    /// Section heading used by presentation layers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Contacts => "Contacts",
            Self::Skills => "Skills",
            Self::Hobbies => "Hobbies",
        }
    }
}

impl std::fmt::Display for ListKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Contacts => "contacts",
            Self::Skills => "skills",
            Self::Hobbies => "hobbies",
        })
    }
}

/// One named, independently toggleable add/remove text collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedList {
    /// Whether this list's entry form is currently open.
    pub visible: bool,
    /// Uncommitted input typed into the entry form, stored verbatim.
    pub pending_value: String,
    /// Committed entries in insertion order.
    pub entries: Vec<String>,
}

/// Editor-session aggregate: free-text identity fields plus the three
/// named lists. Created empty with all forms hidden; discarded with the
/// session. No persistence is attached to this state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub profession: String,
    pub contacts: NamedList,
    pub skills: NamedList,
    pub hobbies: NamedList,
}

impl PersonalInfo {
    /// Creates a fresh editor state: all lists empty, all forms hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the named list addressed by `key`.
    pub fn list(&self, key: ListKey) -> &NamedList {
        match key {
            ListKey::Contacts => &self.contacts,
            ListKey::Skills => &self.skills,
            ListKey::Hobbies => &self.hobbies,
        }
    }

    /// Mutably borrows the named list addressed by `key`.
    pub fn list_mut(&mut self, key: ListKey) -> &mut NamedList {
        match key {
            ListKey::Contacts => &mut self.contacts,
            ListKey::Skills => &mut self.skills,
            ListKey::Hobbies => &mut self.hobbies,
        }
    }
}
