//! Core domain logic for the CV builder.
//! This crate is the single source of truth for editor-state invariants.

pub mod editor;
pub mod logging;
pub mod model;
pub mod view;

pub use editor::{EditorAction, EditorError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{CategoryId, Item, ItemId, ItemValidationError};
pub use model::profile::{ListKey, NamedList, PersonalInfo};
pub use view::{render_info_list, render_profile};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
