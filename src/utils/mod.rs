mod content;
mod format;
mod schedule;

pub use content::{
    Announcement,
    ClassCount,
    DashboardStat,
    Feature,
    LandingStats,
    PortalContent,
    Priority,
    ScheduleEntry,
    Trend,
};
pub use format::{ class_names, format_percent, format_rupiah };
pub use schedule::{ classify, SlotStatus, TimeRange };
