use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Distinguished failure kinds of the tag codec.
///
/// The plain `read_*`/`write_*` functions log these and collapse them into
/// empty values or `false`; the `try_*` variants hand them to the caller.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file, its tag layer, or the requested picture/lyrics is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// The container could not be decoded or re-encoded.
    #[error("cannot decode {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: lofty::error::FileParseError,
    },

    /// The file could not be opened.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the modified tag back to the file failed.
    #[error("cannot save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: lofty::error::FileEncodingError,
    },

    /// A field value was rejected before anything was written.
    #[error("invalid {field}: {value:?}")]
    Validation { field: &'static str, value: String },

    /// The file format does not offer the requested capability.
    #[error("{operation} is not supported for {}", path.display())]
    Unsupported {
        operation: &'static str,
        path: PathBuf,
    },
}

impl CodecError {
    pub(crate) fn parse(path: &Path, source: lofty::error::FileParseError) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn save(path: &Path, source: lofty::error::FileEncodingError) -> Self {
        Self::Save {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.display().to_string())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn unsupported(operation: &'static str, path: &Path) -> Self {
        Self::Unsupported {
            operation,
            path: path.to_path_buf(),
        }
    }

    /// Absence is routine during scans and only logged at debug level.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
