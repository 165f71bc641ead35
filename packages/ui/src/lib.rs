//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod sync;
pub use sync::{spawn_refresh, spawn_submit, use_backend, use_panel};

mod header;
pub use header::Header;

mod section_card;
pub use section_card::{Accent, DraftInput, SectionCard};

pub mod panels;
pub use panels::{FavoritesPanel, MoviesPanel, NotesPanel, PhotosPanel, PlansPanel, SongsPanel};

mod sections;
pub use sections::Sections;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
