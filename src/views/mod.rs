mod dashboard;
mod landing;

pub use dashboard::{ schedule_at, Dashboard };
pub use landing::Landing;
