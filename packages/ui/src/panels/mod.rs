//! One component per section of the page.
//!
//! Every panel follows the same shape: `use_panel` loads the list on mount,
//! inputs write straight into the draft, and the action buttons hand the draft
//! to `spawn_submit`. Buttons are disabled while a submit is in flight.

mod favorites;
mod movies;
mod notes;
mod photos;
mod plans;
mod songs;

pub use favorites::FavoritesPanel;
pub use movies::MoviesPanel;
pub use notes::NotesPanel;
pub use photos::PhotosPanel;
pub use plans::PlansPanel;
pub use songs::SongsPanel;

use store::RecordId;

/// Clones `records` with a render key per row.
///
/// The server list is shown as is, duplicates included, so the key pairs the
/// position with the id instead of trusting the id to be unique.
pub(crate) fn keyed_rows<T: Clone>(
    records: &[T],
    id: impl Fn(&T) -> &RecordId,
) -> Vec<(String, T)> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| (format!("{index}-{}", id(record)), record.clone()))
        .collect()
}
