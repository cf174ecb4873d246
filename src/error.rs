use thiserror::Error;

/// plantg統一エラー型
#[derive(Debug, Error)]
pub enum PlantgError {
    /// データソースが見つからない（読めないエラーとは区別する）
    #[error("Plant dataset not found at: {0}")]
    DataUnavailable(String),

    /// データソースは存在するが読めない
    #[error("Failed to load plant dataset: {0}")]
    DataLoad(String),

    #[error("Plant not found: {0}")]
    PlantNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment error: {0}")]
    Env(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("Cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, PlantgError>;
