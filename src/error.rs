//! Typed failures shared by the map pipeline.
//!
//! Every error here means the map asset itself is invalid; callers are
//! expected to treat a failure as fatal to the level load, not retry.

use thiserror::Error;

/// Errors produced by the map codec, border reconstruction, and graph layers.
#[derive(Error, Debug)]
pub enum MapError {
    /// Malformed grid or row data (unreadable file, empty map, bad
    /// level descriptor).
    #[error("invalid map input: {0}")]
    InvalidInput(String),

    /// A run-length-encoded row did not parse cleanly.
    #[error("malformed run-length encoding on line {line}: {detail}")]
    MalformedEncoding {
        /// Zero-based index of the offending row.
        line: usize,
        /// What went wrong while parsing the row.
        detail: String,
    },

    /// A wall cell's neighbor pattern matched no reconstruction table.
    ///
    /// The position and pattern are reported so the malformed maze shape
    /// can be diagnosed at authoring time.
    #[error("unclassifiable border cell at ({row}, {col}) with neighbor pattern {pattern:?}")]
    UnclassifiableBorder {
        /// Row of the unclassifiable wall cell.
        row: usize,
        /// Column of the unclassifiable wall cell.
        col: usize,
        /// The neighbor pattern that matched no table.
        pattern: String,
    },

    /// The flood-fill start coordinate is a wall or out of bounds.
    #[error("flood fill start ({x}, {y}) is not a walkable cell")]
    InvalidStart {
        /// Column of the requested start.
        x: i32,
        /// Row of the requested start.
        y: i32,
    },

    /// No path exists between the requested nodes.
    #[error("no path exists between node {from} and node {to}")]
    Unreachable {
        /// Index of the source node.
        from: usize,
        /// Index of the destination node.
        to: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MapError>;
