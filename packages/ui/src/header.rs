use dioxus::prelude::*;

use crate::Icon;
use crate::activity_log_panel::ActivityLogToggle;
use crate::icons::FaHeart;

pub const TITLE: &str = "Bizim Küçük Dünyamız";
pub const TAGLINE: &str =
    "Fotoğraflarımız, şarkılarımız, filmlerimiz ve günlük notlarımız için romantik ve eğlenceli bir alan.";

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "page-header",
            div {
                class: "page-header-title",
                span {
                    class: "page-header-icon",
                    Icon { icon: FaHeart, width: 32, height: 32 }
                }
                h1 { "{TITLE}" }
            }
            p { class: "page-header-tagline", "{TAGLINE}" }
            div {
                class: "page-header-actions",
                ActivityLogToggle {}
            }
        }
    }
}
