use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanlistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error in {path}: {message}")]
    Config { path: String, message: String },
}
