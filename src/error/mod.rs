mod portal;

pub use portal::PortalError;
