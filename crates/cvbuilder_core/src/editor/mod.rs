//! Editor state-transition controller.
//!
//! # Responsibility
//! - Define the closed set of editor actions and apply them to a
//!   `PersonalInfo` aggregate.
//! - Keep every mutation on one synchronous entry point so transitions
//!   stay atomic within a single event-handling turn.
//!
//! # Invariants
//! - A successful `Commit` appends exactly one entry and clears that
//!   list's pending value; form visibility is untouched.
//! - Committing an empty pending value is rejected and leaves state
//!   unchanged.
//! - `Remove` deletes all entries equal to the given value; entry order
//!   of survivors is preserved. Removing an absent value is a no-op.
//! - No action on one list observes or alters another list.

use crate::model::profile::{ListKey, PersonalInfo};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One discrete user interaction, as seen by the controller.
///
/// Serializable so sessions can be replayed or scripted by outer layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum EditorAction {
    /// Open or close the entry form of one named list.
    ToggleForm { list: ListKey },
    /// Replace the pending input of one named list, verbatim.
    UpdateInput { list: ListKey, text: String },
    /// Append the pending input to the list's entries and clear it.
    Commit { list: ListKey },
    /// Delete every entry equal to `item` from the list.
    Remove { list: ListKey, item: String },
    /// Replace the free-text full-name field.
    SetFullName { text: String },
    /// Replace the free-text profession field.
    SetProfession { text: String },
}

/// Rejected editor transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// `Commit` was applied while the list's pending value was empty.
    EmptyPending(ListKey),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPending(key) => {
                write!(f, "cannot commit empty pending value to `{key}` list")
            }
        }
    }
}

impl Error for EditorError {}

impl PersonalInfo {
    /// Applies one action, mutating this aggregate in place.
    ///
    /// # Contract
    /// - Returns `Err` without side effects when the transition is
    ///   rejected; on `Ok` exactly the documented effect happened.
    /// - Never touches any list other than the addressed one.
    pub fn apply(&mut self, action: EditorAction) -> Result<(), EditorError> {
        match action {
            EditorAction::ToggleForm { list } => {
                let named = self.list_mut(list);
                named.visible = !named.visible;
                debug!(
                    "event=form_toggled module=editor list={list} visible={}",
                    named.visible
                );
                Ok(())
            }
            EditorAction::UpdateInput { list, text } => {
                self.list_mut(list).pending_value = text;
                Ok(())
            }
            EditorAction::Commit { list } => {
                let named = self.list_mut(list);
                if named.pending_value.is_empty() {
                    return Err(EditorError::EmptyPending(list));
                }
                let committed = std::mem::take(&mut named.pending_value);
                named.entries.push(committed);
                debug!(
                    "event=entry_committed module=editor list={list} entries={}",
                    named.entries.len()
                );
                Ok(())
            }
            EditorAction::Remove { list, item } => {
                let named = self.list_mut(list);
                let before = named.entries.len();
                named.entries.retain(|entry| entry != &item);
                debug!(
                    "event=entries_removed module=editor list={list} removed={}",
                    before - named.entries.len()
                );
                Ok(())
            }
            EditorAction::SetFullName { text } => {
                self.full_name = text;
                Ok(())
            }
            EditorAction::SetProfession { text } => {
                self.profession = text;
                Ok(())
            }
        }
    }
}
