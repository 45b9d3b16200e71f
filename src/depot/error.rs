use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepotError {
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Folder already exists: {0}")]
    FolderExists(String),

    #[error("No files matching '{0}'")]
    FileNotFound(String),

    /// Several files partially match the query. The resolver never picks one;
    /// the caller is expected to show the candidates and ask again.
    #[error("Ambiguous query '{query}' ({} candidates)", .candidates.len())]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },

    #[error("Invalid folder name: {0}")]
    InvalidName(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("File too large: {size} bytes (max {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, DepotError>;
