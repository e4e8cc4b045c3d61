use dioxus::prelude::*;
use crate::components::{ Icon, IconGlyph };
use crate::utils::{ class_names, Trend };

pub const DEFAULT_ICON_CLASS: &str = "bg-primary/10 text-primary";

/// Badge classes and text for a trend: `+2%` in success colours, or the raw
/// value in destructive colours.
pub fn trend_badge(trend: &Trend) -> (&'static str, String) {
    if trend.positive {
        ("bg-success/20 text-success", format!("+{}", trend.value))
    } else {
        ("bg-destructive/20 text-destructive", trend.value.clone())
    }
}

#[component]
pub fn StatCard(
    icon: Icon,
    label: String,
    value: String,
    #[props(!optional)] trend: Option<Trend>,
    #[props(default = DEFAULT_ICON_CLASS.to_string())] icon_class: String,
    #[props(default)] class: String,
    #[props(default)] value_class: String,
    #[props(!optional)] description: Option<String>,
) -> Element {
    let badge = trend.as_ref().map(trend_badge);

    rsx! {
        div {
            class: class_names(&[
                "stat-card glass-card rounded-2xl p-6 hover:scale-[1.02] transition-transform duration-300",
                &class,
            ]),
            div { class: "flex items-start justify-between",
                div {
                    class: class_names(&["w-12 h-12 rounded-xl flex items-center justify-center", &icon_class]),
                    IconGlyph { icon: icon, class: "w-6 h-6".to_string() }
                }
                if let Some((badge_class, text)) = badge {
                    span {
                        class: class_names(&["trend text-xs font-medium px-2 py-1 rounded-full", badge_class]),
                        "{text}"
                    }
                }
            }
            div { class: "mt-4",
                div {
                    class: class_names(&["text-2xl font-bold text-foreground", &value_class]),
                    "{value}"
                }
                div { class: "text-sm text-muted-foreground", "{label}" }
                if let Some(description) = description.as_ref() {
                    div { class: "text-xs text-muted-foreground/70 mt-1 italic", "{description}" }
                }
            }
        }
    }
}
