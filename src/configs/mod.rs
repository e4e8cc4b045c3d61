mod portal;

pub use portal::{ parse_flag, PortalConfig, PortalPage };
