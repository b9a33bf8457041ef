pub mod app_config;
pub mod session;
pub mod storage;

pub use app_config::Config;
pub use session::SessionStore;
pub use storage::LocalStorage;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
