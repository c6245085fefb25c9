use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudygenError {
    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed front-matter in {}: {reason}", path.display())]
    FrontMatter { path: PathBuf, reason: String },

    #[error("Failed to read manifest {}: {reason}", path.display())]
    Manifest { path: PathBuf, reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, StudygenError>;
