use crate::types::TabsumErrorType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabsumError {
    #[error("Table error: {0}")]
    Table(TabsumErrorType),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Column \"{0}\" not found")]
    Column(String),
}

impl TabsumError {
    pub fn error_type(&self) -> TabsumErrorType {
        match self {
            TabsumError::Table(t) => *t,
            TabsumError::Io(_) => TabsumErrorType::Source,
            TabsumError::Source(_) => TabsumErrorType::Source,
            TabsumError::Encoding(_) => TabsumErrorType::Source,
            TabsumError::Config(_) => TabsumErrorType::Config,
            TabsumError::Column(_) => TabsumErrorType::ColumnMissing,
        }
    }
}

pub type Result<T> = std::result::Result<T, TabsumError>;
