use dioxus::prelude::*;

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

/// Colour family of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Rose,
    Indigo,
    Amber,
    Emerald,
    Sky,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Rose => "section-card accent-rose",
            Accent::Indigo => "section-card accent-indigo",
            Accent::Amber => "section-card accent-amber",
            Accent::Emerald => "section-card accent-emerald",
            Accent::Sky => "section-card accent-sky",
        }
    }
}

#[component]
pub fn SectionCard(
    title: String,
    #[props(default)] accent: Accent,
    icon: Element,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }

        div {
            class: accent.css_class(),
            div {
                class: "section-card-header",
                span { class: "section-card-icon", {icon} }
                h3 { "{title}" }
            }
            {children}
        }
    }
}

/// Text input bound to one draft field.
#[component]
pub fn DraftInput(
    value: String,
    placeholder: String,
    #[props(default = "grow".to_string())] class: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            class: "section-input {class}",
            r#type: "text",
            value: "{value}",
            placeholder: "{placeholder}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}
