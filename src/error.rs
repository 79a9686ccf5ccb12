//! Errors produced by grid edits and maze document parsing.

use thiserror::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MazeError>;

/// Everything that can go wrong while editing, importing or exporting a maze.
///
/// Every failing operation reports its error before touching the [`Grid`](crate::grid::Grid),
/// so a returned error always means the grid is unchanged.
#[derive(Error, Debug)]
pub enum MazeError {
    /// A grid must have at least one row and one column
    #[error("Invalid grid dimension {rows}x{columns}: rows and columns must be at least 1")]
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        columns: usize,
    },

    /// An edit addressed a cell outside the grid
    #[error("Cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Current row count
        rows: usize,
        /// Current column count
        columns: usize,
    },

    /// Imported text is not a well-formed maze or feature document
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// An imported feature coordinate does not name a cell of the current grid
    #[error("Feature coordinate ({row}, {column}) is outside the {rows}x{columns} grid")]
    UnknownFeatureCoordinate {
        /// Row as written in the document
        row: i64,
        /// Column as written in the document
        column: i64,
        /// Current row count
        rows: usize,
        /// Current column count
        columns: usize,
    },

    /// Reading or writing a maze file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    /// Shorthand for [`MazeError::MalformedDocument`]
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument(reason.into())
    }
}
