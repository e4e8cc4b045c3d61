use super::{ Theme, ThemeEnvironment, ThemeStorage, Transition };
use crate::configs::PortalConfig;

/// Single owner of the active theme.
///
/// Every change is written through to storage and to the environment marker
/// before [`ThemeController::toggle`] returns; only the on-screen cross-fade
/// may finish later.
#[derive(Debug)]
pub struct ThemeController<S, E> {
    current: Theme,
    storage: S,
    environment: E,
    view_transitions: bool,
}

impl<S: ThemeStorage, E: ThemeEnvironment> ThemeController<S, E> {
    /// Resolves the initial theme: persisted choice, then platform
    /// preference, then the configured fallback.
    pub fn new(storage: S, environment: E, config: &PortalConfig) -> Self {
        let current = Self::persisted(&storage)
            .or_else(|| environment.prefers_dark().map(Theme::from_preference))
            .unwrap_or(config.fallback_theme);

        log::info!("Theme initialised to '{}'", current);

        let controller = Self {
            current,
            storage,
            environment,
            view_transitions: config.view_transitions,
        };
        controller.environment.apply_marker(controller.current);
        controller.storage.store(controller.current.as_str());
        controller
    }

    fn persisted(storage: &S) -> Option<Theme> {
        let raw = storage.load()?;
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::debug!("Ignoring persisted theme: {}", err);
                None
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&mut self) -> Theme {
        let transition = Transition::select(&self.environment, self.view_transitions);
        self.toggle_with(transition)
    }

    /// Same as [`ThemeController::toggle`] with an explicit strategy.
    pub fn toggle_with(&mut self, transition: Transition) -> Theme {
        self.current = self.current.toggled();
        self.storage.store(self.current.as_str());
        log::debug!("Theme toggled to '{}' ({:?})", self.current, transition);
        transition.run(&self.environment, self.current);
        self.current
    }
}
