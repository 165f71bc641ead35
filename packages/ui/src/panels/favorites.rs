use dioxus::prelude::*;
use store::FavoritePhotos;

use crate::Icon;
use crate::icons::FaStar;
use crate::panels::keyed_rows;
use crate::section_card::{Accent, SectionCard};
use crate::sync::use_panel;

pub const EMPTY_MESSAGE: &str = "Henüz favori yok. Fotoğraf eklerken Favori butonunu kullanın.";

/// Photos the backend reports as favorites.
///
/// This list is loaded on its own; adding a favorite through the photos panel
/// shows up here after the next reload.
#[component]
pub fn FavoritesPanel() -> Element {
    let panel = use_panel::<FavoritePhotos>();
    let favorites = keyed_rows(panel.read().cache(), |p| &p.id);

    rsx! {
        SectionCard {
            title: "Favoriler",
            accent: Accent::Amber,
            icon: rsx! { Icon { icon: FaStar, width: 20, height: 20 } },
            if favorites.is_empty() {
                p { class: "section-empty", "{EMPTY_MESSAGE}" }
            } else {
                div {
                    class: "favorites-strip",
                    for (key, photo) in favorites {
                        img {
                            key: "{key}",
                            class: "favorite-thumb",
                            src: "{photo.file_url}",
                            alt: "{photo.alt_text()}",
                        }
                    }
                }
            }
        }
    }
}
