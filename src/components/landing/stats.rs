use dioxus::prelude::*;
use crate::components::{ Icon, IconGlyph };
use crate::utils::{ format_percent, format_rupiah, LandingStats };

const BREAKDOWN_CLASSES: [&str; 3] = [
    "bg-primary/10 text-primary",
    "bg-success/10 text-success",
    "bg-warning/20 text-warning-foreground",
];

#[component]
pub fn StatsSection(#[props(!optional)] stats: Option<LandingStats>) -> Element {
    let Some(stats) = stats else {
        return rsx! {
            section { class: "py-16 hero-gradient",
                div { class: "container mx-auto px-4 text-center text-muted-foreground", "Statistik belum tersedia" }
            }
        };
    };
    let cash = format_rupiah(stats.total_cash_lifetime);
    let attendance = format_percent(stats.attendance_rate);
    let breakdown: Vec<(String, String)> = stats.class_breakdown
        .iter()
        .enumerate()
        .map(|(idx, class)| {
            (
                format!("px-3 py-1 rounded-full {}", BREAKDOWN_CLASSES[idx % BREAKDOWN_CLASSES.len()]),
                format!("{}: {}", class.name, class.count),
            )
        })
        .collect();
    let bar_width = stats.attendance_rate.clamp(0.0, 100.0);

    rsx! {
        section { id: "about", class: "py-16 hero-gradient",
            div { class: "container mx-auto px-4",
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    div { class: "glass-card rounded-3xl p-8 text-center hover:scale-105 transition-transform duration-300",
                        div { class: "w-16 h-16 rounded-2xl bg-success/20 flex items-center justify-center mx-auto mb-4",
                            IconGlyph { icon: Icon::Wallet, class: "w-8 h-8 text-success".to_string() }
                        }
                        div { class: "text-3xl md:text-4xl font-bold text-foreground mb-2",
                            "{cash}"
                        }
                        div { class: "text-muted-foreground", "Total Saldo Kas" }
                        div { class: "mt-4 inline-flex items-center gap-1 text-success text-sm font-medium",
                            IconGlyph { icon: Icon::TrendingUp, class: "w-4 h-4".to_string() }
                            "{stats.cash_growth}"
                        }
                    }

                    div { class: "glass-card rounded-3xl p-8 text-center hover:scale-105 transition-transform duration-300",
                        div { class: "w-16 h-16 rounded-2xl bg-primary/20 flex items-center justify-center mx-auto mb-4",
                            IconGlyph { icon: Icon::Users, class: "w-8 h-8 text-primary".to_string() }
                        }
                        div { class: "text-3xl md:text-4xl font-bold text-foreground mb-2",
                            "{stats.total_students}"
                        }
                        div { class: "text-muted-foreground", "Total Mahasiswa" }
                        div { class: "mt-4 flex justify-center gap-4 text-sm",
                            for (class, text) in breakdown {
                                span { key: "{text}", class: class, "{text}" }
                            }
                        }
                    }

                    div { class: "glass-card rounded-3xl p-8 text-center hover:scale-105 transition-transform duration-300",
                        div { class: "w-16 h-16 rounded-2xl bg-accent flex items-center justify-center mx-auto mb-4",
                            div { class: "text-2xl font-bold text-accent-foreground", "%" }
                        }
                        div { class: "text-3xl md:text-4xl font-bold text-foreground mb-2", "{attendance}" }
                        div { class: "text-muted-foreground", "Tingkat Kehadiran" }
                        div { class: "mt-4 w-full bg-muted rounded-full h-2.5",
                            div { class: "bg-primary h-2.5 rounded-full", style: "width: {bar_width}%" }
                        }
                    }
                }
            }
        }
    }
}
