use dioxus::prelude::*;

use crate::panels::{FavoritesPanel, MoviesPanel, NotesPanel, PhotosPanel, PlansPanel, SongsPanel};

/// The six panels, two per row on wide screens.
#[component]
pub fn Sections() -> Element {
    rsx! {
        div {
            class: "sections-grid",
            PhotosPanel {}
            FavoritesPanel {}
            SongsPanel {}
            MoviesPanel {}
            NotesPanel {}
            PlansPanel {}
        }
    }
}
