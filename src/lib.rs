pub mod conf;
pub mod db;
pub mod error;
pub mod helpers;

pub use db::Store;
pub use error::{StoreError, StoreResult};
pub use helpers::cache::Cache;
