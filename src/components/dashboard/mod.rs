mod announcement_card;
mod schedule_card;
mod stat_card;

pub use announcement_card::AnnouncementCard;
pub use schedule_card::{ schedule_badge, schedule_card_class, ScheduleCard };
pub use stat_card::{ trend_badge, StatCard, DEFAULT_ICON_CLASS };
