#![warn(missing_docs)]
//! Map analysis core for a terminal maze-chase game.
//!
//! The pipeline runs from text to navigation: a raw map is [simplified and
//! run-length encoded](codec), decoded and its borders [reconstructed into
//! box-drawing glyphs](border), wrapped in a [`Grid`], flood-filled into a
//! [`CellGraph`], reduced to an intersection [`NodeGraph`], and finally
//! queried with [`find_shortest_path`].

pub mod border;
pub mod codec;
pub mod error;
pub mod graph;
pub mod grid;
pub mod level;
pub mod pathing;
pub mod standard_maps;
pub mod symbols;

pub use error::{MapError, Result};
pub use graph::{CellGraph, NodeGraph};
pub use grid::{load_level_map, Direction, Grid};
pub use level::Level;
pub use pathing::find_shortest_path;
