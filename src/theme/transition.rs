use super::{ Theme, ThemeEnvironment };

/// How a committed theme change reaches the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Marker applied inside the platform's view transition (cross-fade).
    Animated,
    /// Marker applied right away.
    Immediate,
}

impl Transition {
    pub fn select<E: ThemeEnvironment>(environment: &E, enabled: bool) -> Self {
        if !enabled {
            return Transition::Immediate;
        }
        if environment.supports_transitions() {
            Transition::Animated
        } else {
            log::debug!("View transitions unsupported, switching theme without animation");
            Transition::Immediate
        }
    }

    pub fn run<E: ThemeEnvironment>(self, environment: &E, theme: Theme) {
        match self {
            Transition::Immediate => environment.apply_marker(theme),
            Transition::Animated => {
                let target = environment.clone();
                let update = Box::new(move || target.apply_marker(theme));
                if let Err(err) = environment.start_transition(update) {
                    log::warn!("{}, applying '{}' without animation", err, theme);
                    environment.apply_marker(theme);
                }
            }
        }
    }
}
