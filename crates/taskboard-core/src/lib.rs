pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::TaskboardError;
pub use result::TaskboardResult;
pub use traits::SnapshotSlot;
