mod icon;
mod theme_toggle;
pub mod dashboard;
pub mod landing;

pub use icon::{ Icon, IconGlyph };
pub use theme_toggle::ThemeToggle;
