pub mod cache;
pub mod logging;
