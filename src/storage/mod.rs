use crate::errors::AppError;

pub mod favorites;
pub mod file;
pub mod memory;
pub mod session;

pub use favorites::FavoriteStore;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use session::{Credentials, SessionStore};

/// Persisted string values addressed by key, the same contract a browser's
/// local storage gives: reads never fail, they just come back empty.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
