// ABOUTME: Error types for the kidase-slides application
// ABOUTME: Separates fatal configuration errors from I/O and format failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KidaseError {
    #[error("Language '{0}' not found in the data")]
    MissingLanguage(String),

    #[error("Only 1 to 4 languages are supported, got {0}")]
    UnsupportedLanguageCount(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Spreadsheet error: {0}")]
    TableError(String),

    #[error("XML parsing error: {0}")]
    XmlError(String),

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),
}

impl KidaseError {
    /// True for errors caused by a bad language list or settings.
    /// These are raised before any slide exists.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            KidaseError::MissingLanguage(_)
                | KidaseError::UnsupportedLanguageCount(_)
                | KidaseError::ConfigError(_)
        )
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for KidaseError {
    fn from(err: zip::result::ZipError) -> Self {
        KidaseError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

impl From<quick_xml::Error> for KidaseError {
    fn from(err: quick_xml::Error) -> Self {
        KidaseError::XmlError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KidaseError>;
