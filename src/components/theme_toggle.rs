use dioxus::prelude::*;
use crate::theme::{ use_theme, Theme };

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let current = theme.theme();
    let glyph = current.toggle_glyph();
    let label = match current {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };

    rsx! {
        button {
            class: if current.is_dark() {
                "theme-toggle p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
            } else {
                "theme-toggle p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
            },
            "aria-label": label,
            title: label,
            onclick: move |_| theme.toggle_theme(),
            "{glyph}"
        }
    }
}
