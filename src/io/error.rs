//! Error types for map loading, queue operations and search orchestration

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all pathfinding operations
#[derive(Debug)]
pub enum SearchError {
    /// Failed to read a terrain map from the filesystem
    MapLoad {
        /// Path to the map file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Map contents cannot be turned into a usable grid
    InvalidMap {
        /// Description of what's wrong with the map
        reason: String,
    },

    /// Start or goal coordinates fall outside the grid interior
    CoordinatesOutOfRange {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Padded grid width
        width: usize,
        /// Padded grid height
        height: usize,
    },

    /// Priority queue is at capacity and cannot accept another entry
    QueueFull {
        /// Fixed capacity of the queue
        capacity: usize,
    },

    /// Priority below zero was offered to the queue
    InvalidPriority {
        /// Rejected priority value
        value: String,
    },

    /// Predecessor chain does not lead back to the start cell
    ///
    /// Occurs when reconstruction is attempted on a grid whose search
    /// never reached the goal, or whose links were edited by hand.
    BrokenPath {
        /// Cell index where the chain broke
        cell: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// Terminal could not be driven for animated output
    Terminal {
        /// Underlying I/O error from the terminal backend
        source: std::io::Error,
    },

    /// Failed to encode or write the search animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MapLoad { path, source } => {
                write!(f, "Cannot open map file '{}': {source}", path.display())
            }
            Self::InvalidMap { reason } => write!(f, "Invalid map: {reason}"),
            Self::CoordinatesOutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinates ({x}, {y}) are not in range (interior is 1..{} x 1..{})",
                    width.saturating_sub(1),
                    height.saturating_sub(1)
                )
            }
            Self::QueueFull { capacity } => {
                write!(f, "Priority queue is full (capacity {capacity})")
            }
            Self::InvalidPriority { value } => {
                write!(f, "Priority {value} is negative")
            }
            Self::BrokenPath { cell } => {
                write!(f, "Predecessor chain is broken at cell {cell}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Terminal { source } => write!(f, "Terminal error: {source}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MapLoad { source, .. }
            | Self::FileSystem { source, .. }
            | Self::Terminal { source } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pathfinding results
pub type Result<T> = std::result::Result<T, SearchError>;

/// Attaches the real path and operation to I/O failures
pub trait WithPath<T> {
    /// Replace the placeholder path of a converted I/O error
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<SearchError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            SearchError::FileSystem { source, .. } => SearchError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            SearchError::ImageExport { source, .. } => SearchError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl From<image::ImageError> for SearchError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SearchError {
    SearchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid map error
pub fn invalid_map(reason: &impl ToString) -> SearchError {
    SearchError::InvalidMap {
        reason: reason.to_string(),
    }
}

/// Map a terminal backend failure
pub const fn terminal_error(source: std::io::Error) -> SearchError {
    SearchError::Terminal { source }
}
