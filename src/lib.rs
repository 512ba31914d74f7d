pub mod export_cmd;
pub mod item;
pub mod report;
pub mod source;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
