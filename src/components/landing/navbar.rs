use dioxus::prelude::*;
use crate::components::{ Icon, IconGlyph, ThemeToggle };

const LOGO_URL: &str = "https://ft.unj.ac.id/ptik/wp-content/uploads/2021/07/LOGO-BEMP-PTIK-150x150.png";

/// In-page anchors of the landing sections.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Beranda", "#hero"),
    ("Fitur", "#features"),
    ("Tentang", "#about"),
];

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        nav { class: "fixed top-0 left-0 right-0 z-50 glass-card border-b border-border/50",
            div { class: "container mx-auto px-4",
                div { class: "flex items-center justify-between h-16",
                    a { class: "flex items-center gap-2 group", href: "#hero",
                        div { class: "w-10 h-10 rounded-xl bg-white flex items-center justify-center shadow-soft p-0.5 border border-gray-100",
                            img {
                                class: "w-full h-full object-contain",
                                src: LOGO_URL,
                                alt: "Logo PTIK",
                            }
                        }
                        span { class: "font-bold text-xl text-foreground",
                            "PTIK "
                            span { class: "text-primary", "2025" }
                        }
                    }

                    div { class: "hidden md:flex items-center gap-8",
                        for (label, href) in NAV_LINKS {
                            a {
                                class: "text-muted-foreground hover:text-primary transition-colors font-medium",
                                href: href,
                                "{label}"
                            }
                        }
                    }

                    div { class: "flex items-center gap-3",
                        ThemeToggle {}
                        button {
                            class: "md:hidden p-2 rounded-lg",
                            "aria-label": "Toggle menu",
                            "aria-expanded": if open() { "true" } else { "false" },
                            onclick: move |_| open.set(!open()),
                            if open() {
                                IconGlyph { icon: Icon::Close, class: "h-5 w-5".to_string() }
                            } else {
                                IconGlyph { icon: Icon::Menu, class: "h-5 w-5".to_string() }
                            }
                        }
                    }
                }

                if open() {
                    div { class: "mobile-menu md:hidden py-4 animate-fade-in",
                        div { class: "flex flex-col gap-4",
                            for (label, href) in NAV_LINKS {
                                a {
                                    class: "text-muted-foreground hover:text-primary transition-colors font-medium py-2",
                                    href: href,
                                    onclick: move |_| open.set(false),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
