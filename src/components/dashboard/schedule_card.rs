use dioxus::prelude::*;
use crate::components::{ Icon, IconGlyph };
use crate::utils::class_names;

pub fn schedule_card_class(is_active: bool, is_next: bool) -> String {
    let border = if is_active {
        "border-l-4 border-l-primary glow-primary"
    } else if is_next {
        "border-l-4 border-l-warning"
    } else {
        "border-l-4 border-l-transparent"
    };
    class_names(&[
        "schedule-card glass-card rounded-2xl p-5 transition-all duration-300 relative overflow-hidden",
        border,
    ])
}

/// Corner badge: running now wins over up next.
pub fn schedule_badge(is_active: bool, is_next: bool) -> Option<(&'static str, &'static str)> {
    if is_active {
        Some((
            "Sedang Berlangsung",
            "px-2 py-1 rounded-full bg-primary/20 text-primary text-xs font-medium animate-pulse",
        ))
    } else if is_next {
        Some((
            "Selanjutnya",
            "px-2 py-1 rounded-full bg-warning/30 text-warning-foreground text-xs font-medium",
        ))
    } else {
        None
    }
}

#[component]
pub fn ScheduleCard(
    subject: String,
    time: String,
    room: String,
    lecturer: String,
    #[props(default)] is_active: bool,
    #[props(default)] is_next: bool,
) -> Element {
    let rows = [(Icon::Clock, time), (Icon::MapPin, room), (Icon::User, lecturer)];

    rsx! {
        div { class: schedule_card_class(is_active, is_next),
            if let Some((badge, badge_class)) = schedule_badge(is_active, is_next) {
                div { class: "absolute top-3 right-3",
                    span { class: badge_class, "{badge}" }
                }
            }
            h3 { class: "font-semibold text-foreground text-lg mb-3 pr-24", "{subject}" }
            div { class: "space-y-2 text-sm text-muted-foreground",
                for (icon, text) in rows {
                    div { class: "flex items-center gap-2",
                        IconGlyph { icon: icon, class: "w-4 h-4".to_string() }
                        span { "{text}" }
                    }
                }
            }
        }
    }
}
