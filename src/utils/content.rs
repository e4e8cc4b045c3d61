use serde::{ Deserialize, Serialize };
use crate::components::Icon;
use crate::error::PortalError;

const PORTAL_JSON: &str = include_str!("../../assets/data/portal.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassCount {
    pub name: String,
    pub count: u32,
}

/// Aggregate numbers shown on the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandingStats {
    pub total_students: u32,
    pub total_classes: u32,
    pub total_subjects: u32,
    pub total_cash_lifetime: u64,
    pub cash_growth: String,
    pub attendance_rate: f32,
    pub semester: u32,
    pub class_breakdown: Vec<ClassCount>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub value: String,
    pub positive: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub subject: String,
    pub time: String,
    pub room: String,
    pub lecturer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Important,
    Urgent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub priority: Priority,
}

/// Static copy rendered by the landing page and the dashboard.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PortalContent {
    #[serde(default)]
    pub landing_stats: Option<LandingStats>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub dashboard_stats: Vec<DashboardStat>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

impl PortalContent {
    pub fn parse(json: &str) -> Result<Self, PortalError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Bundled content; falls back to empty sections if it does not parse.
    pub fn load() -> Self {
        match Self::parse(PORTAL_JSON) {
            Ok(content) => content,
            Err(err) => {
                log::error!("Failed to load bundled portal content: {}", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let content = PortalContent::parse(PORTAL_JSON).unwrap();
        assert_eq!(content.features.len(), 8);
        assert!(content.landing_stats.is_some());
        assert!(!content.schedule.is_empty());
        assert!(!content.dashboard_stats.is_empty());
        assert_eq!(PortalContent::load(), content);
    }

    #[test]
    fn test_missing_sections_default() {
        let content = PortalContent::parse("{}").unwrap();
        assert_eq!(content, PortalContent::default());
    }

    #[test]
    fn test_announcement_priority_defaults_to_normal() {
        let json = r#"{ "announcements": [ { "title": "t", "date": "d", "excerpt": "e" } ] }"#;
        let content = PortalContent::parse(json).unwrap();
        assert_eq!(content.announcements[0].priority, Priority::Normal);
        assert!(!content.announcements[0].is_new);
    }

    #[test]
    fn test_invalid_json_is_content_error() {
        assert!(matches!(PortalContent::parse("{"), Err(PortalError::Content(_))));
    }
}
