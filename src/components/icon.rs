use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };
use crate::utils::class_names;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    ArrowRight,
    BookOpen,
    Calculator,
    Calendar,
    CheckCircle,
    ChevronRight,
    Clock,
    Close,
    Code,
    FileText,
    Github,
    GraduationCap,
    Instagram,
    Mail,
    MapPin,
    Megaphone,
    Menu,
    QrCode,
    Sparkles,
    TrendingUp,
    Trophy,
    User,
    Users,
    Wallet,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ArrowRight => "→",
            Icon::BookOpen => "📖",
            Icon::Calculator => "🧮",
            Icon::Calendar => "📅",
            Icon::CheckCircle => "✅",
            Icon::ChevronRight => "›",
            Icon::Clock => "🕒",
            Icon::Close => "✕",
            Icon::Code => "💻",
            Icon::FileText => "📄",
            Icon::Github => "🐙",
            Icon::GraduationCap => "🎓",
            Icon::Instagram => "📷",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Megaphone => "📣",
            Icon::Menu => "☰",
            Icon::QrCode => "🔳",
            Icon::Sparkles => "✨",
            Icon::TrendingUp => "📈",
            Icon::Trophy => "🏆",
            Icon::User => "👤",
            Icon::Users => "👥",
            Icon::Wallet => "👛",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[props(default)] class: String) -> Element {
    let glyph = icon.glyph();

    rsx! {
        span {
            class: class_names(&["icon", &class]),
            "aria-hidden": "true",
            "{glyph}"
        }
    }
}
