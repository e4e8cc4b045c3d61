mod controller;
mod environment;
mod provider;
mod state;
mod storage;
mod transition;

pub use controller::ThemeController;
pub use environment::{ BrowserEnvironment, ThemeEnvironment };
pub use provider::{ try_use_theme, use_theme, BrowserThemeController, ThemeContext, ThemeProvider };
pub use state::Theme;
pub use storage::{ BrowserStorage, ThemeStorage };
pub use transition::Transition;
