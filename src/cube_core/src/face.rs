use std::str::FromStr;

use crate::{CubeError, color::Color, moves::Direction};

/// A face's facelets as `grid[row][col]`, row 0 on top and column 0 on the
/// left, looking at the face from outside the cube.
pub type Grid = [[Color; 3]; 3];

/// The three facelets along one edge of a face, in canonical order.
pub type Strip = [Color; 3];

/// One of the four sides of a face, listed clockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Self; 4] = {
        use Edge::*;
        let v = [Top, Right, Bottom, Left];

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

    /// The next edge going clockwise around the face.
    #[must_use]
    pub fn clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    #[must_use]
    pub fn counter_clockwise(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Where the contents of this edge end up after a quarter turn of the face.
    #[must_use]
    pub fn turned(self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => self.clockwise(),
            Direction::CounterClockwise => self.counter_clockwise(),
        }
    }

    /// The `(row, col)` cells of this edge in canonical order.
    ///
    /// Every edge is walked clockwise around the face: top left to right,
    /// right top to bottom, bottom right to left, left bottom to top. Two glued
    /// edges always run against each other, so a strip moves between any two
    /// edges by a positional copy.
    pub fn cells(self) -> [(usize, usize); 3] {
        match self {
            Edge::Top => [(0, 0), (0, 1), (0, 2)],
            Edge::Right => [(0, 2), (1, 2), (2, 2)],
            Edge::Bottom => [(2, 2), (2, 1), (2, 0)],
            Edge::Left => [(2, 0), (1, 0), (0, 0)],
        }
    }
}

impl FromStr for Edge {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "right" => Ok(Edge::Right),
            "bottom" => Ok(Edge::Bottom),
            "left" => Ok(Edge::Left),
            _ => Err(CubeError::InvalidEdge(s.to_owned())),
        }
    }
}

/// One side of the cube.
///
/// A face only owns its own grid. The strips it exchanges with its neighbors
/// during a turn are looked up by the owning [`Cube`](crate::Cube) through the
/// [adjacency table](crate::adjacency::ADJACENCY).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    base: Color,
    grid: Grid,
}

impl Face {
    /// A face filled with its own base color.
    pub fn new(base: Color) -> Self {
        Self {
            base,
            grid: [[base; 3]; 3],
        }
    }

    /// The color this face had when the cube was built. The center facelet
    /// never moves, so this is also always the center's color.
    pub fn base(&self) -> Color {
        self.base
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// # Errors
    ///
    /// If `row` or `col` is not in `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Result<Color, CubeError> {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(CubeError::PositionOutOfRange { row, col })
    }

    pub fn is_uniform(&self) -> bool {
        self.grid.iter().flatten().all(|&color| color == self.base)
    }

    /// Read the strip along `edge` in canonical order.
    pub fn read_edge(&self, edge: Edge) -> Strip {
        edge.cells().map(|(row, col)| self.grid[row][col])
    }

    /// Overwrite the strip along `edge`. `strip` is in canonical order.
    pub fn write_edge(&mut self, edge: Edge, strip: Strip) {
        for ((row, col), color) in edge.cells().into_iter().zip(strip) {
            self.grid[row][col] = color;
        }
    }

    /// Rotate this face's own grid by a quarter turn. Neighbors are untouched.
    pub fn rotate_grid(&mut self, direction: Direction) {
        let old = self.grid;
        for (row, cells) in self.grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = match direction {
                    Direction::Clockwise => old[2 - col][row],
                    Direction::CounterClockwise => old[col][2 - row],
                };
            }
        }
    }
}
