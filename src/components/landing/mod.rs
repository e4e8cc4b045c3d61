mod features;
mod footer;
mod hero;
mod navbar;
mod stats;

pub use features::FeaturesSection;
pub use footer::{ copyright_line, Footer };
pub use hero::{ hero_preview, HeroSection };
pub use navbar::{ Navbar, NAV_LINKS };
pub use stats::StatsSection;
