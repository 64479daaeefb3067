use crate::models::Homepage;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key of the homepage document within the content directory.
pub const HOMEPAGE_KEY: &str = "homepage.mdx";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a markdown document and return its content
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Location of the homepage document under `content_root`
pub fn homepage_path(content_root: &Path) -> PathBuf {
    content_root.join(HOMEPAGE_KEY)
}

/// Read the homepage document from a content directory
pub fn read_homepage(content_root: &Path) -> Result<String, IoError> {
    validate_content_dir(content_root)?;
    let path = homepage_path(content_root);
    log::debug!("reading homepage from {}", path.display());
    read_document(&path)
}

/// Read and parse the homepage at `path`.
///
/// A directory is a content root and must hold `homepage.mdx`; anything else
/// is read as the document itself.
pub fn load_homepage(path: &Path) -> Result<Homepage, IoError> {
    let markdown = if path.is_dir() {
        read_homepage(path)?
    } else {
        read_document(path)?
    };
    let homepage = Homepage::parse(&markdown);
    log::info!(
        "loaded {} sections from {}",
        homepage.sections().len(),
        path.display()
    );
    Ok(homepage)
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
