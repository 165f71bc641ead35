use api::HttpClient;
use dioxus::prelude::*;
use ui::{ActivityLog, ActivityLogPanel, Header, Sections};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let client = HttpClient::from_env();
        tracing::info!(base_url = client.config().base_url(), "backend configured");
        client
    });
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "page",
            div {
                class: "page-content",
                Header {}
                Sections {}
            }
            ActivityLogPanel {}
        }
    }
}
