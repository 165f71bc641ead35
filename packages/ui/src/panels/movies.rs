use dioxus::prelude::*;
use store::Movies;

use crate::Icon;
use crate::activity_log::use_activity_log;
use crate::icons::FaFilm;
use crate::panels::keyed_rows;
use crate::section_card::{Accent, DraftInput, SectionCard};
use crate::sync::{spawn_submit, use_backend, use_panel};

#[component]
pub fn MoviesPanel() -> Element {
    let client = use_backend();
    let log = use_activity_log();
    let mut panel = use_panel::<Movies>();

    let state = panel.read();
    let busy = state.is_submitting();
    let movies = keyed_rows(state.cache(), |m| &m.id);
    let title = state.draft().get(Movies::TITLE).to_string();
    let year = state.draft().get(Movies::YEAR).to_string();
    let link = state.draft().get(Movies::LINK).to_string();
    drop(state);

    rsx! {
        SectionCard {
            title: "Film Listemiz",
            accent: Accent::Sky,
            icon: rsx! { Icon { icon: FaFilm, width: 20, height: 20 } },
            div {
                class: "section-form",
                DraftInput {
                    value: title,
                    placeholder: "Film adı",
                    oninput: move |v: String| {
                        panel.write().set_field(Movies::TITLE, v);
                    },
                }
                DraftInput {
                    value: year,
                    placeholder: "Yıl",
                    class: "narrow",
                    oninput: move |v: String| {
                        panel.write().set_field(Movies::YEAR, v);
                    },
                }
                DraftInput {
                    value: link,
                    placeholder: "Link (opsiyonel)",
                    oninput: move |v: String| {
                        panel.write().set_field(Movies::LINK, v);
                    },
                }
                button {
                    class: "section-button accent-sky",
                    disabled: busy,
                    onclick: move |_| spawn_submit(client.clone(), panel, log, ()),
                    "Ekle"
                }
            }
            ul {
                class: "section-list",
                for (key, movie) in movies {
                    li {
                        key: "{key}",
                        class: "section-item split",
                        div {
                            p {
                                class: "item-title",
                                "{movie.title} "
                                if let Some(year) = movie.year {
                                    span { class: "item-muted", "({year})" }
                                }
                            }
                            if let Some(link) = movie.link() {
                                a { class: "item-link", href: "{link}", target: "_blank", "Bağlantı" }
                            }
                        }
                        span { class: "item-meta", "Planlayan: {movie.planner()}" }
                    }
                }
            }
        }
    }
}
