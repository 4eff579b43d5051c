use crate::models::IndexEntry;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid index file {path}: {source}")]
    Index {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize hub data: {0}")]
    HubData(serde_json::Error),
}

/// Name of the index file inside the data directory.
pub const INDEX_FILE: &str = "index.json";

/// Name of the source document inside each entry's directory.
pub const SOURCE_FILE: &str = "vision.md";

/// Read and parse `index.json`
pub fn read_index(path: &Path) -> Result<Vec<IndexEntry>, IoError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| IoError::Index {
        path: path.to_path_buf(),
        source,
    })
}

/// Location of an entry's source document under the data directory
pub fn source_path(data_dir: &Path, entry: &IndexEntry) -> PathBuf {
    data_dir
        .join(&entry.subject_category)
        .join(&entry.filename)
        .join(SOURCE_FILE)
}

/// Location of an entry's rendered page under the output directory
pub fn page_path(output_dir: &Path, entry: &IndexEntry) -> PathBuf {
    output_dir
        .join(&entry.subject_category)
        .join(format!("{}.html", entry.uid))
}

/// Read a text file, distinguishing a missing file from other failures
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}
