use dioxus::prelude::*;
use crate::components::{ Icon, IconGlyph };
use crate::utils::LandingStats;

/// Label/value tiles under the hero heading, with placeholders until stats
/// are known.
pub fn hero_preview(stats: Option<&LandingStats>) -> [(&'static str, String); 4] {
    match stats {
        Some(stats) => [
            ("Mahasiswa", format!("{}+", stats.total_students)),
            ("Kelas", stats.total_classes.to_string()),
            ("Materi Semester 2", stats.total_subjects.to_string()),
            ("Semester", stats.semester.to_string()),
        ],
        None => [
            ("Mahasiswa", "120+".to_string()),
            ("Kelas", "3".to_string()),
            ("Materi Semester 2", "40+".to_string()),
            ("Semester", "2".to_string()),
        ],
    }
}

#[component]
pub fn HeroSection(#[props(!optional)] stats: Option<LandingStats>) -> Element {
    let tiles: Vec<(&str, String, String)> = hero_preview(stats.as_ref())
        .into_iter()
        .enumerate()
        .map(|(idx, (label, value))| {
            (label, value, format!("animation-delay: {:.1}s", 0.5 + (idx as f32) * 0.1))
        })
        .collect();

    rsx! {
        section {
            id: "hero",
            class: "relative min-h-screen flex items-center justify-center overflow-hidden bg-transparent pt-16",
            div { class: "absolute inset-0 overflow-hidden",
                div { class: "absolute top-20 left-10 w-72 h-72 bg-primary/10 rounded-full blur-3xl animate-float" }
                div {
                    class: "absolute bottom-20 right-10 w-96 h-96 bg-accent/20 rounded-full blur-3xl animate-float",
                    style: "animation-delay: 1s",
                }
            }
            div { class: "container mx-auto px-4 relative z-10",
                div { class: "max-w-4xl mx-auto text-center",
                    a {
                        class: "inline-flex items-center gap-2 px-4 py-2 rounded-full bg-primary/10 border border-primary/20 text-primary text-sm font-medium mb-8 animate-fade-in",
                        href: "#hero",
                        IconGlyph { icon: Icon::Sparkles, class: "w-4 h-4".to_string() }
                        span { "Portal Angkatan PTIK 2025" }
                    }
                    h1 {
                        class: "text-4xl md:text-6xl lg:text-7xl font-bold text-foreground mb-6 animate-fade-in",
                        "Satu Portal untuk "
                        span { class: "text-gradient bg-gradient-to-r from-primary via-success to-primary",
                            "Semua Kebutuhan"
                        }
                        " Mahasiswa"
                    }
                    p { class: "text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto mb-10 animate-fade-in",
                        "Kelola jadwal kuliah, absensi, kas angkatan, dan materi pembelajaran dalam satu platform yang terintegrasi dengan tampilan yang menenangkan."
                    }
                    div { class: "flex flex-col sm:flex-row items-center justify-center gap-4 animate-fade-in",
                        a { class: "button button-hero group", href: "#features",
                            "Mulai Sekarang "
                            IconGlyph { icon: Icon::ArrowRight, class: "w-5 h-5".to_string() }
                        }
                        a { class: "button button-glass", href: "#features", "Lihat Fitur" }
                    }
                    div { class: "hero-stats mt-16 grid grid-cols-2 md:grid-cols-4 gap-4 animate-fade-in",
                        for (label, value, delay) in tiles {
                            div {
                                key: "{label}",
                                class: "glass-card rounded-2xl p-4 hover:scale-105 transition-transform duration-300",
                                style: delay,
                                div { class: "text-2xl md:text-3xl font-bold text-gradient", "{value}" }
                                div { class: "text-sm text-muted-foreground", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
