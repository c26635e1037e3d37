// Organization domain - entities that post opportunities on the portal

pub mod models;

pub use models::*;
