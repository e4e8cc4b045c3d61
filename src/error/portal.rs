use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum PortalError {
    UnknownTheme(String),
    MissingProvider,
    Config(String),
    Content(String),
    Transition(String),
}

impl Display for PortalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PortalError::UnknownTheme(value) =>
                write!(f, "Unknown theme '{}', expected 'light' or 'dark'", value),
            PortalError::MissingProvider =>
                write!(f, "use_theme must be used within a ThemeProvider"),
            PortalError::Config(msg) => write!(f, "Configuration Error: {}", msg),
            PortalError::Content(msg) => write!(f, "Content Error: {}", msg),
            PortalError::Transition(msg) => write!(f, "View transition failed: {}", msg),
        }
    }
}

impl std::error::Error for PortalError {}

impl From<serde_json::Error> for PortalError {
    fn from(error: serde_json::Error) -> Self {
        PortalError::Content(error.to_string())
    }
}

impl From<chrono::ParseError> for PortalError {
    fn from(error: chrono::ParseError) -> Self {
        PortalError::Content(error.to_string())
    }
}
