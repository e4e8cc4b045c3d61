mod views;
mod components;
mod utils;
mod configs;
mod error;
pub mod theme;
#[cfg(test)]
mod tests;

pub use crate::views::*;
pub use crate::components::*;
pub use crate::utils::*;
pub use crate::configs::{ PortalConfig, PortalPage };
pub use crate::error::PortalError;
