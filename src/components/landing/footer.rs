use chrono::Datelike;
use dioxus::prelude::*;
use crate::components::{ Icon, IconGlyph };

const QUICK_LINKS: [(&str, &str); 4] = [
    ("Dashboard", "#features"),
    ("Jadwal Kuliah", "#features"),
    ("Repository Materi", "#features"),
    ("Kas Angkatan", "#about"),
];

const SOCIAL_LINKS: [(Icon, &str); 3] = [
    (Icon::Instagram, "Instagram"),
    (Icon::Github, "GitHub"),
    (Icon::Mail, "Email"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} PTIK UNJ. All rights reserved.", year)
}

#[component]
pub fn Footer() -> Element {
    let copyright = copyright_line(chrono::Local::now().year());

    rsx! {
        footer { class: "bg-card border-t border-border",
            div { class: "container mx-auto px-4 py-12",
                div { class: "grid grid-cols-1 md:grid-cols-4 gap-8",
                    div { class: "md:col-span-2",
                        a { class: "flex items-center gap-2 mb-4", href: "#hero",
                            div { class: "w-10 h-10 rounded-xl primary-gradient flex items-center justify-center",
                                IconGlyph { icon: Icon::GraduationCap, class: "w-6 h-6 text-primary-foreground".to_string() }
                            }
                            span { class: "font-bold text-xl text-foreground",
                                "PTIK "
                                span { class: "text-primary", "2025" }
                            }
                        }
                        p { class: "text-muted-foreground text-sm max-w-md",
                            "Portal resmi angkatan PTIK 2025 Universitas Negeri Jakarta. Memudahkan koordinasi akademik dan non-akademik dalam satu platform terintegrasi."
                        }
                    }

                    div {
                        h3 { class: "font-semibold text-foreground mb-4", "Menu Cepat" }
                        ul { class: "space-y-2",
                            for (label, href) in QUICK_LINKS {
                                li {
                                    a {
                                        class: "text-muted-foreground hover:text-primary transition-colors text-sm",
                                        href: href,
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h3 { class: "font-semibold text-foreground mb-4", "Ikuti Kami" }
                        div { class: "flex gap-3",
                            for (icon, label) in SOCIAL_LINKS {
                                a {
                                    class: "w-10 h-10 rounded-xl bg-muted flex items-center justify-center hover:bg-primary hover:text-primary-foreground transition-colors",
                                    href: "#",
                                    "aria-label": label,
                                    IconGlyph { icon: icon, class: "w-5 h-5".to_string() }
                                }
                            }
                        }
                    }
                }

                div { class: "border-t border-border mt-8 pt-8 flex flex-col md:flex-row items-center justify-between gap-4",
                    p { class: "text-muted-foreground text-sm flex items-center gap-1",
                        "Made with "
                        IconGlyph { icon: Icon::Code, class: "w-4 h-4 text-green-500 animate-pulse".to_string() }
                        " by PTIK 2025"
                    }
                    p { class: "text-muted-foreground text-sm", "{copyright}" }
                }
            }
        }
    }
}
