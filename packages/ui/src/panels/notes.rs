use dioxus::prelude::*;
use store::Notes;

use crate::Icon;
use crate::activity_log::use_activity_log;
use crate::icons::FaNoteSticky;
use crate::panels::keyed_rows;
use crate::section_card::{Accent, DraftInput, SectionCard};
use crate::sync::{spawn_submit, use_backend, use_panel};

#[component]
pub fn NotesPanel() -> Element {
    let client = use_backend();
    let log = use_activity_log();
    let mut panel = use_panel::<Notes>();

    let state = panel.read();
    let busy = state.is_submitting();
    let notes = keyed_rows(state.cache(), |n| &n.id);
    let author = state.draft().get(Notes::AUTHOR).to_string();
    let content = state.draft().get(Notes::CONTENT).to_string();
    drop(state);

    rsx! {
        SectionCard {
            title: "Notlar",
            accent: Accent::Amber,
            icon: rsx! { Icon { icon: FaNoteSticky, width: 20, height: 20 } },
            div {
                class: "section-form",
                DraftInput {
                    value: author,
                    placeholder: "Kimden",
                    class: "medium",
                    oninput: move |v: String| {
                        panel.write().set_field(Notes::AUTHOR, v);
                    },
                }
                DraftInput {
                    value: content,
                    placeholder: "Mesajını yaz",
                    oninput: move |v: String| {
                        panel.write().set_field(Notes::CONTENT, v);
                    },
                }
                button {
                    class: "section-button accent-amber",
                    disabled: busy,
                    onclick: move |_| spawn_submit(client.clone(), panel, log, ()),
                    "Gönder"
                }
            }
            ul {
                class: "section-list",
                for (key, note) in notes {
                    li {
                        key: "{key}",
                        class: "section-item",
                        p { class: "item-body", "{note.content}" }
                        p { class: "item-meta", "— {note.author}" }
                    }
                }
            }
        }
    }
}
