//! Presentation-only rendering of editor state.
//!
//! # Responsibility
//! - Turn a `PersonalInfo` aggregate into display lines for outer layers.
//! - Keep transient presentation concerns (delete affordances, form rows)
//!   out of the data model entirely.
//!
//! # Invariants
//! - Rendering never mutates or validates state.
//! - Entry order in the output matches insertion order in the model.

use crate::model::profile::{ListKey, NamedList, PersonalInfo};

const DELETE_AFFORDANCE: &str = "[x]";

/// Renders one ordered entry collection, one line per entry.
///
/// Each entry carries an always-visible delete affordance; the original
/// hover-gated variant is equivalent presentation with no semantic change.
pub fn render_info_list(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format!("  - {entry} {DELETE_AFFORDANCE}"))
        .collect()
}

fn render_section(key: ListKey, list: &NamedList) -> Vec<String> {
    let toggle_label = if list.visible { "Close" } else { "Add" };
    let mut lines = vec![format!("{} [{toggle_label}]", key.label())];
    lines.extend(render_info_list(&list.entries));
    if list.visible {
        lines.push(format!("  > {}_", list.pending_value));
    }
    lines
}

/// Renders the whole editor state: identity header plus one section per
/// named list, in `ListKey::ALL` order.
pub fn render_profile(info: &PersonalInfo) -> String {
    let mut lines = Vec::new();
    lines.push(if info.full_name.is_empty() {
        "Full Name".to_string()
    } else {
        info.full_name.clone()
    });
    lines.push(if info.profession.is_empty() {
        "Profession".to_string()
    } else {
        info.profession.clone()
    });
    for key in ListKey::ALL {
        lines.push(String::new());
        lines.extend(render_section(key, info.list(key)));
    }
    lines.join("\n")
}
