use dioxus::prelude::*;
use store::Photos;

use crate::Icon;
use crate::activity_log::use_activity_log;
use crate::icons::FaImage;
use crate::panels::keyed_rows;
use crate::section_card::{Accent, DraftInput, SectionCard};
use crate::sync::{spawn_submit, use_backend, use_panel};

#[component]
pub fn PhotosPanel() -> Element {
    let client = use_backend();
    let log = use_activity_log();
    let mut panel = use_panel::<Photos>();

    let state = panel.read();
    let busy = state.is_submitting();
    let photos = keyed_rows(state.cache(), |p| &p.id);
    let file_url = state.draft().get(Photos::FILE_URL).to_string();
    let caption = state.draft().get(Photos::CAPTION).to_string();
    drop(state);

    let add_client = client.clone();

    rsx! {
        SectionCard {
            title: "Fotoğraflar",
            accent: Accent::Rose,
            icon: rsx! { Icon { icon: FaImage, width: 20, height: 20 } },
            div {
                class: "section-form",
                DraftInput {
                    value: file_url,
                    placeholder: "Fotoğraf URL'si",
                    oninput: move |v: String| {
                        panel.write().set_field(Photos::FILE_URL, v);
                    },
                }
                DraftInput {
                    value: caption,
                    placeholder: "Açıklama",
                    oninput: move |v: String| {
                        panel.write().set_field(Photos::CAPTION, v);
                    },
                }
                button {
                    class: "section-button accent-rose",
                    disabled: busy,
                    onclick: move |_| spawn_submit(add_client.clone(), panel, log, false),
                    "Ekle"
                }
                button {
                    class: "section-button accent-pink",
                    disabled: busy,
                    onclick: move |_| spawn_submit(client.clone(), panel, log, true),
                    "Favori"
                }
            }
            div {
                class: "photo-grid",
                for (key, photo) in photos {
                    figure {
                        key: "{key}",
                        class: "photo-tile",
                        img { src: "{photo.file_url}", alt: "{photo.alt_text()}" }
                        if let Some(caption) = photo.caption_text() {
                            figcaption { "{caption}" }
                        }
                    }
                }
            }
        }
    }
}
