use dioxus::prelude::*;
use super::{ BrowserEnvironment, BrowserStorage, Theme, ThemeController };
use crate::configs::PortalConfig;
use crate::error::PortalError;

pub type BrowserThemeController = ThemeController<BrowserStorage, BrowserEnvironment>;

/// Handle consumers receive from [`use_theme`].
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    controller: Signal<BrowserThemeController>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.controller.read().theme()
    }

    pub fn toggle_theme(&self) {
        let mut controller = self.controller;
        controller.write().toggle();
    }
}

/// Owns the theme controller for everything rendered below it.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let config = try_use_context::<PortalConfig>().unwrap_or_default();
    let controller = use_signal(move || {
        ThemeController::new(
            BrowserStorage::new(config.theme_key.clone()),
            BrowserEnvironment,
            &config,
        )
    });
    use_context_provider(|| ThemeContext { controller });

    rsx! {
        {children}
    }
}

pub fn try_use_theme() -> Result<ThemeContext, PortalError> {
    try_use_context::<ThemeContext>().ok_or(PortalError::MissingProvider)
}

/// Theme state of the nearest [`ThemeProvider`].
///
/// # Panics
///
/// When no provider encloses the calling component.
pub fn use_theme() -> ThemeContext {
    match try_use_theme() {
        Ok(context) => context,
        Err(err) => panic!("{}", err),
    }
}
