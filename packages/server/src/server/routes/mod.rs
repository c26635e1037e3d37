// HTTP routes
pub mod health;
pub mod job_listings;
pub mod revalidate;

pub use health::*;
pub use job_listings::*;
pub use revalidate::*;
