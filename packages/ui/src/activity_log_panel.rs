use dioxus::prelude::*;

use crate::activity_log::use_activity_log;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Collapsible list of recent activity, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Olaylar ({entries.len()})" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Temizle"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Kapat"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    p { class: "activity-log-empty", "Henüz bir şey olmadı." }
                }
                for entry in entries.iter().rev() {
                    div {
                        class: entry.level.css_class(),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Header button that shows/hides the log and turns red after a failure.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let state = log();
    let errors = state.error_count();
    let label = match (errors, state.entries.len()) {
        (0, 0) => "Günlük".to_string(),
        (0, n) => n.to_string(),
        (e, _) => format!("{e} hata"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: ACTIVITY_LOG_CSS }

        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Olay günlüğü",
            "{label}"
        }
    }
}
