#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! A 3x3x3 cube modelled as six faces of facelets.
//!
//! Turning a face spins its own grid and cycles the four edge strips it shares
//! with its neighbors. The neighbors are found through a fixed adjacency table
//! (see [`adjacency`]), and the faces playing each logical [`Role`] are
//! found through the cube's [`Layout`], which is all a whole-cube
//! reorientation touches.

pub mod adjacency;
pub mod color;
pub mod cube;
pub mod face;
pub mod moves;

pub use adjacency::{Binding, FaceId};
pub use color::Color;
pub use cube::{Cube, DEFAULT_SCRAMBLE_LENGTH, Layout};
pub use face::{Edge, Face, Grid, Strip};
pub use moves::{Direction, Move, Reorientation, Role, invert_sequence};

use thiserror::Error;

/// An out-of-domain token or index handed to one of the lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid role `{0}`, expected one of up, down, left, right, front, back")]
    InvalidRole(String),
    #[error("Invalid edge `{0}`, expected one of top, bottom, left, right")]
    InvalidEdge(String),
    #[error("Invalid face index, expected a value between 0 and 5 but got {0}")]
    InvalidFaceIndex(usize),
    #[error("Facelet position ({row}, {col}) is out of range, expected values between 0 and 2")]
    PositionOutOfRange { row: usize, col: usize },
}
