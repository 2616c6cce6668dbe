pub mod analysis;
pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod playtime;
pub mod roles;
pub mod store;
pub mod tracker;
