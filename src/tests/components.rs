use chrono::NaiveTime;
use dioxus::prelude::*;
use super::common::render;
use crate::components::dashboard::{
    schedule_badge,
    schedule_card_class,
    trend_badge,
    AnnouncementCard,
    ScheduleCard,
    StatCard,
};
use crate::components::landing::{ copyright_line, hero_preview, HeroSection, Navbar };
use crate::components::Icon;
use crate::theme::ThemeProvider;
use crate::utils::{ PortalContent, Priority, ScheduleEntry, SlotStatus, Trend };
use crate::views::{ schedule_at, Dashboard, Landing };

#[test]
fn test_trend_badge() {
    let up = Trend { value: "2%".to_string(), positive: true };
    let down = Trend { value: "-3%".to_string(), positive: false };
    assert_eq!(trend_badge(&up), ("bg-success/20 text-success", "+2%".to_string()));
    assert_eq!(trend_badge(&down), ("bg-destructive/20 text-destructive", "-3%".to_string()));
}

#[test]
fn test_schedule_card_states() {
    assert!(schedule_card_class(true, true).contains("border-l-primary"));
    assert!(schedule_card_class(false, true).contains("border-l-warning"));
    assert!(schedule_card_class(false, false).contains("border-l-transparent"));

    assert_eq!(schedule_badge(true, true).map(|(label, _)| label), Some("Sedang Berlangsung"));
    assert_eq!(schedule_badge(false, true).map(|(label, _)| label), Some("Selanjutnya"));
    assert_eq!(schedule_badge(false, false), None);
}

#[test]
fn test_hero_preview_placeholders() {
    let values: Vec<String> = hero_preview(None).into_iter().map(|(_, v)| v).collect();
    assert_eq!(values, vec!["120+", "3", "40+", "2"]);

    let content = PortalContent::load();
    let preview = hero_preview(content.landing_stats.as_ref());
    assert_eq!(preview[0], ("Mahasiswa", "127+".to_string()));
}

#[test]
fn test_copyright_line() {
    assert_eq!(copyright_line(2025), "© 2025 PTIK UNJ. All rights reserved.");
}

#[test]
fn test_schedule_at() {
    let entry = |subject: &str, time: &str| ScheduleEntry {
        subject: subject.to_string(),
        time: time.to_string(),
        room: "R".to_string(),
        lecturer: "L".to_string(),
    };
    let entries = vec![entry("Web", "08:00 - 10:30"), entry("DB", "13:00 - 15:30")];
    let now = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

    let statuses: Vec<SlotStatus> = schedule_at(&entries, now).into_iter().map(|(_, s)| s).collect();
    assert_eq!(statuses, vec![SlotStatus::Active, SlotStatus::Next]);
}

fn stat_cards() -> Element {
    rsx! {
        StatCard {
            icon: Icon::Wallet,
            label: "Saldo Kas".to_string(),
            value: "Rp 12.500.000".to_string(),
            trend: Some(Trend { value: "15%".to_string(), positive: true }),
            description: Some("Per hari ini".to_string()),
        }
        StatCard {
            icon: Icon::Trophy,
            label: "Peringkat".to_string(),
            value: "#2".to_string(),
            trend: None,
            description: None,
        }
    }
}

#[test]
fn test_stat_card_render() {
    let html = render(stat_cards);
    assert!(html.contains("Saldo Kas"));
    assert!(html.contains("+15%"));
    assert!(html.contains("bg-success/20 text-success"));
    assert!(html.contains("Per hari ini"));
    assert!(html.contains("bg-primary/10 text-primary"));
    assert_eq!(html.matches("stat-card").count(), 2);
    assert_eq!(html.matches("trend ").count(), 1);
}

fn schedule_cards() -> Element {
    rsx! {
        ScheduleCard {
            subject: "Basis Data".to_string(),
            time: "13:00 - 15:30".to_string(),
            room: "Ruang 405".to_string(),
            lecturer: "Prof. Sri Wahyuni, M.Sc".to_string(),
            is_active: true,
            is_next: true,
        }
        ScheduleCard {
            subject: "Jaringan Komputer".to_string(),
            time: "15:45 - 17:15".to_string(),
            room: "Lab Jaringan".to_string(),
            lecturer: "Andi Pratama, M.T".to_string(),
        }
    }
}

#[test]
fn test_schedule_card_render() {
    let html = render(schedule_cards);
    assert!(html.contains("Sedang Berlangsung"));
    assert!(!html.contains("Selanjutnya"));
    assert!(html.contains("Ruang 405"));
    assert!(html.contains("border-l-transparent"));
}

fn urgent_announcement() -> Element {
    rsx! {
        AnnouncementCard {
            title: "Perubahan Ruang".to_string(),
            date: "Hari ini".to_string(),
            excerpt: "Pindah ke Ruang 405.".to_string(),
            is_new: true,
            priority: Priority::Urgent,
        }
    }
}

#[test]
fn test_announcement_card_render() {
    let html = render(urgent_announcement);
    assert!(html.contains("bg-destructive/10 border-destructive/30"));
    assert!(html.contains("text-destructive"));
    assert!(html.contains("New"));
    assert!(html.contains("Perubahan Ruang"));
}

fn hero_without_stats() -> Element {
    rsx! {
        HeroSection { stats: None }
    }
}

#[test]
fn test_hero_without_stats_shows_placeholders() {
    let html = render(hero_without_stats);
    assert!(html.contains("120+"));
    assert!(html.contains("40+"));
}

fn navbar() -> Element {
    rsx! {
        ThemeProvider {
            Navbar {}
        }
    }
}

#[test]
fn test_navbar_renders_toggle_and_links() {
    let html = render(navbar);
    assert!(html.contains("theme-toggle"));
    assert!(html.contains("🌙"));
    assert!(html.contains("#features"));
    assert!(!html.contains("mobile-menu"));
}

fn landing() -> Element {
    rsx! {
        ThemeProvider {
            Landing {}
        }
    }
}

#[test]
fn test_landing_page_composes_sections() {
    let html = render(landing);
    assert!(html.contains("Semua yang Kamu Butuhkan"));
    assert!(html.contains("Jadwal Pintar"));
    assert!(html.contains("Rp 12.500.000"));
    assert!(html.contains("94.5%"));
    assert!(html.contains("A: 42"));
    assert!(html.contains("127+"));
    assert!(html.contains("All rights reserved."));
    assert_eq!(html.matches("feature group").count(), 8);
}

fn dashboard() -> Element {
    rsx! {
        ThemeProvider {
            Dashboard {}
        }
    }
}

#[test]
fn test_dashboard_renders_cards() {
    let html = render(dashboard);
    assert!(html.contains("Saldo Kas"));
    assert!(html.contains("Jadwal Hari Ini"));
    assert!(html.contains("Pemrograman Web Lanjut"));
    assert!(html.contains("Perubahan Ruang Basis Data"));
    assert_eq!(html.matches("schedule-card").count(), 3);
}
