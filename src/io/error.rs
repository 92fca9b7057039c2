//! Error types for configuration loading and image generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Data file could not be parsed or fails a structural requirement
    Configuration {
        /// Description of what's wrong with the data file
        reason: String,
    },

    /// Two radical definitions share the same lookup name
    DuplicateRadicalName {
        /// The colliding name
        name: String,
    },

    /// A radical declares a stroke multiplier of exactly zero
    ///
    /// A zero multiplier would erase the stroke entirely, which is
    /// never intended and treated as a configuration mistake.
    ZeroStrokeMultiplier {
        /// Name or glyph identifying the offending radical
        radical: String,
    },

    /// A radical's slot index is outside {0, 1}
    InvalidSlot {
        /// The out-of-range value from the data file
        value: i64,
    },

    /// A fragment document is not a well-formed SVG image
    MalformedDocument {
        /// Path to the fragment file
        path: PathBuf,
        /// Description of the structural violation
        reason: String,
    },

    /// A radical filter named an unknown radical
    UnknownRadical {
        /// The requested name
        name: String,
    },

    /// A character filter named an unknown glyph or file
    UnknownCharacter {
        /// The requested glyph or filename
        id: String,
    },

    /// A selection pool ended up with no candidates
    EmptyPool {
        /// Which pool was empty
        pool: &'static str,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => {
                write!(f, "Invalid data file: {reason}")
            }
            Self::DuplicateRadicalName { name } => {
                write!(f, "Radical name '{name}' is not unique")
            }
            Self::ZeroStrokeMultiplier { radical } => {
                write!(
                    f,
                    "Radical '{radical}' has a stroke multiplier of 0 (would erase the stroke)"
                )
            }
            Self::InvalidSlot { value } => {
                write!(f, "Slot index {value} is out of range (must be 0 or 1)")
            }
            Self::MalformedDocument { path, reason } => {
                write!(f, "Malformed document '{}': {reason}", path.display())
            }
            Self::UnknownRadical { name } => {
                write!(f, "No radical named '{name}'")
            }
            Self::UnknownCharacter { id } => {
                write!(f, "No character found with ID '{id}'")
            }
            Self::EmptyPool { pool } => {
                write!(f, "No {pool} available to choose from")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create a configuration error with the given reason
pub fn configuration_error(reason: impl Into<String>) -> GenerationError {
    GenerationError::Configuration {
        reason: reason.into(),
    }
}

/// Create a file system error carrying path and operation context
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
