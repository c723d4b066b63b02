use crate::validate::README_PATTERN_HELP;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required directories: {}", .0.join(", "))]
    MissingDirectories(Vec<String>),

    #[error("Missing or incorrectly named readme file.\nExpected pattern: {README_PATTERN_HELP}")]
    ReadmeNotFound,

    #[error("Invalid exclusion pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}
