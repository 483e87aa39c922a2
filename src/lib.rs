pub mod config;
pub mod inspector;
