use dioxus::prelude::*;
use crate::components::{ Icon, IconGlyph };
use crate::utils::{ class_names, Priority };

impl Priority {
    pub fn card_class(self) -> &'static str {
        match self {
            Priority::Normal => "bg-card",
            Priority::Important => "bg-warning/10 border-warning/30",
            Priority::Urgent => "bg-destructive/10 border-destructive/30",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Priority::Normal => "text-primary",
            Priority::Important => "text-warning-foreground",
            Priority::Urgent => "text-destructive",
        }
    }
}

#[component]
pub fn AnnouncementCard(
    title: String,
    date: String,
    excerpt: String,
    #[props(default)] is_new: bool,
    #[props(default)] priority: Priority,
) -> Element {
    rsx! {
        div {
            class: class_names(&[
                "announcement-card glass-card rounded-2xl p-5 hover:scale-[1.01] transition-transform duration-300 cursor-pointer group",
                priority.card_class(),
            ]),
            div { class: "flex items-start justify-between gap-4",
                div { class: "flex-1",
                    div { class: "flex items-center gap-2 mb-2",
                        IconGlyph {
                            icon: Icon::Megaphone,
                            class: class_names(&["w-4 h-4", priority.icon_class()]),
                        }
                        span { class: "text-xs text-muted-foreground", "{date}" }
                        if is_new {
                            span { class: "px-2 py-0.5 rounded-full bg-primary text-primary-foreground text-xs font-medium",
                                "New"
                            }
                        }
                    }
                    h3 { class: "font-semibold text-foreground mb-1", "{title}" }
                    p { class: "text-sm text-muted-foreground line-clamp-2", "{excerpt}" }
                }
                IconGlyph {
                    icon: Icon::ChevronRight,
                    class: "w-5 h-5 text-muted-foreground group-hover:text-primary group-hover:translate-x-1 transition-all".to_string(),
                }
            }
        }
    }
}
