use chrono::NaiveTime;
use dioxus::prelude::*;
use crate::components::dashboard::{ AnnouncementCard, ScheduleCard, StatCard, DEFAULT_ICON_CLASS };
use crate::components::ThemeToggle;
use crate::utils::{ classify, PortalContent, ScheduleEntry, SlotStatus };

/// Pairs today's entries with their status at `now`.
pub fn schedule_at(entries: &[ScheduleEntry], now: NaiveTime) -> Vec<(ScheduleEntry, SlotStatus)> {
    let times: Vec<&str> = entries.iter().map(|entry| entry.time.as_str()).collect();
    entries.iter().cloned().zip(classify(&times, now)).collect()
}

#[component]
pub fn Dashboard() -> Element {
    let content = use_hook(PortalContent::load);
    let schedule = schedule_at(&content.schedule, chrono::Local::now().time());

    rsx! {
        div { class: "dashboard container mx-auto p-4 space-y-8",
            header { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-foreground", "Dashboard" }
                ThemeToggle {}
            }

            section { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                for stat in content.dashboard_stats.iter() {
                    StatCard {
                        key: "{stat.label}",
                        icon: stat.icon,
                        label: stat.label.clone(),
                        value: stat.value.clone(),
                        trend: stat.trend.clone(),
                        icon_class: stat.icon_class.clone().unwrap_or_else(|| DEFAULT_ICON_CLASS.to_string()),
                        description: stat.description.clone(),
                    }
                }
            }

            section {
                h2 { class: "text-xl font-semibold text-foreground mb-4", "Jadwal Hari Ini" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for (entry, status) in schedule {
                        ScheduleCard {
                            key: "{entry.subject}",
                            subject: entry.subject.clone(),
                            time: entry.time.clone(),
                            room: entry.room.clone(),
                            lecturer: entry.lecturer.clone(),
                            is_active: status.is_active(),
                            is_next: status.is_next(),
                        }
                    }
                }
            }

            section {
                h2 { class: "text-xl font-semibold text-foreground mb-4", "Pengumuman" }
                div { class: "space-y-4",
                    for announcement in content.announcements.iter() {
                        AnnouncementCard {
                            key: "{announcement.title}",
                            title: announcement.title.clone(),
                            date: announcement.date.clone(),
                            excerpt: announcement.excerpt.clone(),
                            is_new: announcement.is_new,
                            priority: announcement.priority,
                        }
                    }
                }
            }
        }
    }
}
