//! The fixed gluing of the six faces.
//!
//! Unfolded, with every face seen from outside:
//!
//! ```text
//!       ┌───┐
//!       │ G │
//!   ┌───┼───┼───┐
//!   │ O │ Y │ R │
//!   └───┼───┼───┘
//!       │ B │
//!       ├───┤
//!       │ W │
//!       └───┘
//! ```
//!
//! Orange's top edge folds onto Green's left edge, its left edge onto White's
//! left edge and so on around the back. The table never changes: turning the
//! cube over only relabels which face plays which [`Role`](crate::Role).

use crate::{CubeError, color::Color, face::Edge};

/// The identity a face was built with, also its index into the cube's faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceId {
    Orange,
    Red,
    Green,
    Blue,
    White,
    Yellow,
}

impl FaceId {
    pub const ALL: [Self; 6] = {
        use FaceId::*;
        let v = [Orange, Red, Green, Blue, White, Yellow];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn base_color(self) -> Color {
        match self {
            FaceId::Orange => Color::Orange,
            FaceId::Red => Color::Red,
            FaceId::Green => Color::Green,
            FaceId::Blue => Color::Blue,
            FaceId::White => Color::White,
            FaceId::Yellow => Color::Yellow,
        }
    }

    /// The face on the other side of the cube, the only one not adjacent.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            FaceId::Orange => FaceId::Red,
            FaceId::Red => FaceId::Orange,
            FaceId::Green => FaceId::Blue,
            FaceId::Blue => FaceId::Green,
            FaceId::White => FaceId::Yellow,
            FaceId::Yellow => FaceId::White,
        }
    }
}

impl TryFrom<usize> for FaceId {
    type Error = CubeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or(CubeError::InvalidFaceIndex(value))
    }
}

/// The edge of another face that one edge of a face is glued to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub neighbor: FaceId,
    pub edge: Edge,
}

const fn glued(neighbor: FaceId, edge: Edge) -> Binding {
    Binding { neighbor, edge }
}

/// `ADJACENCY[face][edge]`, edges in [`Edge::ALL`] order.
pub const ADJACENCY: [[Binding; 4]; 6] = {
    use Edge::{Bottom, Left, Right, Top};
    use FaceId::*;

    [
        // Orange
        [
            glued(Green, Left),
            glued(Yellow, Left),
            glued(Blue, Left),
            glued(White, Left),
        ],
        // Red
        [
            glued(Green, Right),
            glued(White, Right),
            glued(Blue, Right),
            glued(Yellow, Right),
        ],
        // Green
        [
            glued(White, Bottom),
            glued(Red, Top),
            glued(Yellow, Top),
            glued(Orange, Top),
        ],
        // Blue
        [
            glued(Yellow, Bottom),
            glued(Red, Bottom),
            glued(White, Top),
            glued(Orange, Bottom),
        ],
        // White
        [
            glued(Blue, Bottom),
            glued(Red, Right),
            glued(Green, Top),
            glued(Orange, Left),
        ],
        // Yellow
        [
            glued(Green, Bottom),
            glued(Red, Left),
            glued(Blue, Top),
            glued(Orange, Right),
        ],
    ]
};

pub fn binding(face: FaceId, edge: Edge) -> Binding {
    ADJACENCY[face.index()][edge.index()]
}
