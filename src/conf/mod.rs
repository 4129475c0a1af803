pub mod config;
pub mod vars;
