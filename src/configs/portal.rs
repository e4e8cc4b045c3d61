use std::str::FromStr;
use crate::error::PortalError;
use crate::theme::Theme;

pub const THEME_KEY_VAR: &str = "PTIK_THEME_KEY";
pub const DEFAULT_THEME_VAR: &str = "PTIK_DEFAULT_THEME";
pub const VIEW_TRANSITIONS_VAR: &str = "PTIK_VIEW_TRANSITIONS";
pub const LOG_LEVEL_VAR: &str = "PTIK_LOG_LEVEL";
pub const START_PAGE_VAR: &str = "PTIK_START_PAGE";

const DEFAULT_THEME_KEY: &str = "ptik-theme";

/// Page mounted under the theme provider at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PortalPage {
    #[default]
    Landing,
    Dashboard,
}

impl FromStr for PortalPage {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landing" => Ok(PortalPage::Landing),
            "dashboard" => Ok(PortalPage::Dashboard),
            other => Err(PortalError::Config(format!("unknown start page '{}'", other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortalConfig {
    /// localStorage key of the persisted theme.
    pub theme_key: String,
    /// Used when neither storage nor the platform preference decide.
    pub fallback_theme: Theme,
    pub view_transitions: bool,
    pub log_level: log::Level,
    pub start_page: PortalPage,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            fallback_theme: Theme::Light,
            view_transitions: true,
            log_level: log::Level::Info,
            start_page: PortalPage::Landing,
        }
    }
}

impl PortalConfig {
    /// Builds the config from a variable lookup. Invalid values are logged
    /// and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        let mut config = Self::default();

        if let Some(key) = lookup(THEME_KEY_VAR) {
            let key = key.trim();
            if key.is_empty() {
                log::warn!("{} is empty, keeping '{}'", THEME_KEY_VAR, config.theme_key);
            } else {
                config.theme_key = key.to_string();
            }
        }
        if let Some(value) = lookup(DEFAULT_THEME_VAR) {
            apply(&mut config.fallback_theme, DEFAULT_THEME_VAR, value.parse());
        }
        if let Some(value) = lookup(VIEW_TRANSITIONS_VAR) {
            apply(&mut config.view_transitions, VIEW_TRANSITIONS_VAR, parse_flag(&value));
        }
        if let Some(value) = lookup(LOG_LEVEL_VAR) {
            let level = value
                .trim()
                .parse::<log::Level>()
                .map_err(|e| PortalError::Config(e.to_string()));
            apply(&mut config.log_level, LOG_LEVEL_VAR, level);
        }
        if let Some(value) = lookup(START_PAGE_VAR) {
            apply(&mut config.start_page, START_PAGE_VAR, value.parse());
        }

        config
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Browsers have no process environment; values are baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                THEME_KEY_VAR => option_env!("PTIK_THEME_KEY"),
                DEFAULT_THEME_VAR => option_env!("PTIK_DEFAULT_THEME"),
                VIEW_TRANSITIONS_VAR => option_env!("PTIK_VIEW_TRANSITIONS"),
                LOG_LEVEL_VAR => option_env!("PTIK_LOG_LEVEL"),
                START_PAGE_VAR => option_env!("PTIK_START_PAGE"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

fn apply<T: std::fmt::Debug>(field: &mut T, name: &str, parsed: Result<T, PortalError>) {
    match parsed {
        Ok(value) => *field = value,
        Err(err) => log::warn!("{}: {}, keeping {:?}", name, err, field),
    }
}

pub fn parse_flag(value: &str) -> Result<bool, PortalError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(PortalError::Config(format!("'{}' is not a boolean flag", other))),
    }
}
