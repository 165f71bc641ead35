use dioxus::prelude::*;
use store::Songs;

use crate::Icon;
use crate::activity_log::use_activity_log;
use crate::icons::FaMusic;
use crate::panels::keyed_rows;
use crate::section_card::{Accent, DraftInput, SectionCard};
use crate::sync::{spawn_submit, use_backend, use_panel};

#[component]
pub fn SongsPanel() -> Element {
    let client = use_backend();
    let log = use_activity_log();
    let mut panel = use_panel::<Songs>();

    let state = panel.read();
    let busy = state.is_submitting();
    let songs = keyed_rows(state.cache(), |s| &s.id);
    let title = state.draft().get(Songs::TITLE).to_string();
    let artist = state.draft().get(Songs::ARTIST).to_string();
    let url = state.draft().get(Songs::URL).to_string();
    drop(state);

    rsx! {
        SectionCard {
            title: "Şarkılarımız",
            accent: Accent::Indigo,
            icon: rsx! { Icon { icon: FaMusic, width: 20, height: 20 } },
            div {
                class: "section-form",
                DraftInput {
                    value: title,
                    placeholder: "Şarkı adı",
                    oninput: move |v: String| {
                        panel.write().set_field(Songs::TITLE, v);
                    },
                }
                DraftInput {
                    value: artist,
                    placeholder: "Sanatçı",
                    oninput: move |v: String| {
                        panel.write().set_field(Songs::ARTIST, v);
                    },
                }
                DraftInput {
                    value: url,
                    placeholder: "Link (opsiyonel)",
                    oninput: move |v: String| {
                        panel.write().set_field(Songs::URL, v);
                    },
                }
                button {
                    class: "section-button accent-indigo",
                    disabled: busy,
                    onclick: move |_| spawn_submit(client.clone(), panel, log, ()),
                    "Ekle"
                }
            }
            ul {
                class: "section-list",
                for (key, song) in songs {
                    li {
                        key: "{key}",
                        class: "section-item split",
                        div {
                            p { class: "item-title", "{song.title}" }
                            p { class: "item-meta", "{song.artist_text()}" }
                        }
                        if let Some(link) = song.link() {
                            a { class: "item-link", href: "{link}", target: "_blank", "Dinle" }
                        }
                    }
                }
            }
        }
    }
}
