use dioxus::prelude::*;
use crate::components::IconGlyph;
use crate::utils::{ class_names, Feature };

#[component]
pub fn FeaturesSection(features: Vec<Feature>) -> Element {
    let tiles: Vec<(&Feature, String)> = features
        .iter()
        .enumerate()
        .map(|(idx, feature)| (feature, format!("animation-delay: {:.1}s", (idx as f32) * 0.1)))
        .collect();

    rsx! {
        section { id: "features", class: "py-24 bg-transparent",
            div { class: "container mx-auto px-4",
                div { class: "text-center max-w-2xl mx-auto mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold text-foreground mb-4",
                        "Semua yang Kamu Butuhkan"
                    }
                    p { class: "text-muted-foreground text-lg",
                        "Fitur lengkap untuk mendukung perjalanan akademikmu di PTIK UNJ"
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                    for (feature, delay) in tiles {
                        div {
                            key: "{feature.title}",
                            class: "feature group glass-card rounded-2xl p-6 hover:scale-105 transition-all duration-300 animate-fade-in",
                            style: delay,
                            div {
                                class: class_names(&[
                                    "w-12 h-12 rounded-xl flex items-center justify-center mb-4",
                                    &feature.color,
                                ]),
                                IconGlyph { icon: feature.icon, class: "w-6 h-6".to_string() }
                            }
                            h3 { class: "text-lg font-semibold text-foreground mb-2", "{feature.title}" }
                            p { class: "text-muted-foreground text-sm leading-relaxed", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}
