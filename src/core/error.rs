use thiserror::Error;

#[derive(Debug, Error)]
pub enum BinningError {
    #[error("insufficient data: {0}")]
    InsufficientData(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("block size overflow: cannot double {block_size} without exceeding {limit}")]
    Overflow { block_size: usize, limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
