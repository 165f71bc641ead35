use dioxus::prelude::*;
use store::Plans;

use crate::Icon;
use crate::activity_log::use_activity_log;
use crate::icons::FaCalendarDays;
use crate::panels::keyed_rows;
use crate::section_card::{Accent, DraftInput, SectionCard};
use crate::sync::{spawn_submit, use_backend, use_panel};

#[component]
pub fn PlansPanel() -> Element {
    let client = use_backend();
    let log = use_activity_log();
    let mut panel = use_panel::<Plans>();

    let state = panel.read();
    let busy = state.is_submitting();
    let plans = keyed_rows(state.cache(), |p| &p.id);
    let title = state.draft().get(Plans::TITLE).to_string();
    let date = state.draft().get(Plans::DATE).to_string();
    let author = state.draft().get(Plans::AUTHOR).to_string();
    let details = state.draft().get(Plans::DETAILS).to_string();
    drop(state);

    rsx! {
        SectionCard {
            title: "Planlarımız",
            accent: Accent::Emerald,
            icon: rsx! { Icon { icon: FaCalendarDays, width: 20, height: 20 } },
            div {
                class: "section-form wrap",
                DraftInput {
                    value: title,
                    placeholder: "Başlık",
                    oninput: move |v: String| {
                        panel.write().set_field(Plans::TITLE, v);
                    },
                }
                DraftInput {
                    value: date,
                    placeholder: "Tarih (YYYY-AA-GG)",
                    class: "wide",
                    oninput: move |v: String| {
                        panel.write().set_field(Plans::DATE, v);
                    },
                }
                DraftInput {
                    value: author,
                    placeholder: "Kimden",
                    class: "medium",
                    oninput: move |v: String| {
                        panel.write().set_field(Plans::AUTHOR, v);
                    },
                }
                DraftInput {
                    value: details,
                    placeholder: "Detaylar",
                    oninput: move |v: String| {
                        panel.write().set_field(Plans::DETAILS, v);
                    },
                }
                button {
                    class: "section-button accent-emerald",
                    disabled: busy,
                    onclick: move |_| spawn_submit(client.clone(), panel, log, ()),
                    "Ekle"
                }
            }
            ul {
                class: "section-list",
                for (key, plan) in plans {
                    li {
                        key: "{key}",
                        class: "section-item",
                        p {
                            class: "item-title",
                            "{plan.title} "
                            if let Some(date) = plan.date_text() {
                                span { class: "item-muted small", "({date})" }
                            }
                        }
                        if let Some(details) = plan.details_text() {
                            p { class: "item-body", "{details}" }
                        }
                        if let Some(author) = plan.author_text() {
                            p { class: "item-meta", "— {author}" }
                        }
                    }
                }
            }
        }
    }
}
