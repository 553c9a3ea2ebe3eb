//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cvbuilder_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cvbuilder_core::{EditorAction, ListKey, PersonalInfo};

fn main() {
    let mut info = PersonalInfo::new();
    let scripted = [
        EditorAction::SetFullName {
            text: "Ada Lovelace".to_string(),
        },
        EditorAction::SetProfession {
            text: "Analyst".to_string(),
        },
        EditorAction::ToggleForm {
            list: ListKey::Skills,
        },
        EditorAction::UpdateInput {
            list: ListKey::Skills,
            text: "Rust".to_string(),
        },
        EditorAction::Commit {
            list: ListKey::Skills,
        },
    ];

    for action in scripted {
        if let Err(err) = info.apply(action) {
            eprintln!("editor rejected action: {err}");
            std::process::exit(1);
        }
    }

    println!("cvbuilder_core version={}", cvbuilder_core::core_version());
    println!("{}", cvbuilder_core::render_profile(&info));
}
