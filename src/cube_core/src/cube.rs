use std::fmt::Display;

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    CubeError,
    adjacency::{Binding, FaceId, binding},
    color::Color,
    face::{Edge, Face, Grid},
    moves::{Direction, Move, Reorientation, Role},
};

/// How many random quarter turns [`Cube::scramble`] callers use when they have
/// no preference.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 12;

/// Which face currently plays each [`Role`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layout([FaceId; 6]);

impl Layout {
    /// The layout a freshly built cube is held in.
    pub const SOLVED: Self = {
        let mut v = [FaceId::Yellow; 6];
        v[Role::Up as usize] = FaceId::Yellow;
        v[Role::Down as usize] = FaceId::White;
        v[Role::Left as usize] = FaceId::Orange;
        v[Role::Right as usize] = FaceId::Red;
        v[Role::Front as usize] = FaceId::Blue;
        v[Role::Back as usize] = FaceId::Green;
        Layout(v)
    };

    pub fn face(&self, role: Role) -> FaceId {
        self.0[role.index()]
    }

    /// The role `id` currently plays.
    pub fn role_of(&self, id: FaceId) -> Role {
        for role in Role::ALL {
            if self.face(role) == id {
                return role;
            }
        }
        // Reorientations only permute the roles, so every face has one.
        unreachable!()
    }

    /// Relabel the four side roles. Up and down are unaffected.
    pub fn reorient(&mut self, reorientation: Reorientation) {
        let roles = &mut self.0;
        let front = roles[Role::Front.index()];
        match reorientation {
            Reorientation::Y => {
                roles[Role::Front.index()] = roles[Role::Right.index()];
                roles[Role::Right.index()] = roles[Role::Back.index()];
                roles[Role::Back.index()] = roles[Role::Left.index()];
                roles[Role::Left.index()] = front;
            }
            Reorientation::YPrime => {
                roles[Role::Front.index()] = roles[Role::Left.index()];
                roles[Role::Left.index()] = roles[Role::Back.index()];
                roles[Role::Back.index()] = roles[Role::Right.index()];
                roles[Role::Right.index()] = front;
            }
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::SOLVED
    }
}

/// A 3x3x3 cube: six faces glued by the fixed
/// [adjacency table](crate::adjacency::ADJACENCY), plus the current [`Layout`].
///
/// Every operation is total and leaves the cube physically valid. Turns only
/// touch face data and reorientations only touch the layout. The cube is a
/// plain owned value; a host sharing it between threads has to lock the whole
/// cube around each mutating call since every turn writes to five faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    faces: [Face; 6],
    layout: Layout,
}

impl Cube {
    /// A solved cube in the [solved layout](Layout::SOLVED).
    pub fn new() -> Self {
        Self {
            faces: FaceId::ALL.map(|id| Face::new(id.base_color())),
            layout: Layout::SOLVED,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn face(&self, role: Role) -> &Face {
        self.face_by_id(self.layout.face(role))
    }

    pub fn face_by_id(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    pub fn grid(&self, role: Role) -> &Grid {
        self.face(role).grid()
    }

    /// The grid of every role, in [`Role::ALL`] order.
    pub fn grids(&self) -> impl Iterator<Item = (Role, &Grid)> {
        Role::ALL.into_iter().map(|role| (role, self.grid(role)))
    }

    /// # Errors
    ///
    /// If `row` or `col` is not in `0..3`.
    pub fn facelet(&self, role: Role, row: usize, col: usize) -> Result<Color, CubeError> {
        self.face(role).get(row, col)
    }

    /// Turn a face by its identity rather than its current role.
    pub fn turn_face(&mut self, id: FaceId, direction: Direction) {
        // Every neighbor strip has to be read before any of them is written.
        let strips = Edge::ALL.map(|edge| {
            let Binding { neighbor, edge } = binding(id, edge);
            self.faces[neighbor.index()].read_edge(edge)
        });

        for (edge, strip) in Edge::ALL.into_iter().zip(strips) {
            let Binding { neighbor, edge } = binding(id, edge.turned(direction));
            self.faces[neighbor.index()].write_edge(edge, strip);
        }

        self.faces[id.index()].rotate_grid(direction);
    }

    pub fn turn(&mut self, role: Role, direction: Direction) {
        let id = self.layout.face(role);
        trace!("Turning {role} ({id:?}) {direction:?}");
        self.turn_face(id, direction);
    }

    pub fn apply(&mut self, move_: Move) {
        self.turn(move_.role, move_.direction);
    }

    pub fn apply_all(&mut self, moves: &[Move]) {
        for &move_ in moves {
            self.apply(move_);
        }
    }

    pub fn reorient(&mut self, reorientation: Reorientation) {
        self.layout.reorient(reorientation);
        debug!("Reoriented by {reorientation}, front is now {:?}", self.layout.face(Role::Front));
    }

    /// Apply `length` quarter turns drawn uniformly from [`Move::ALL`] and
    /// return them in the order they were applied.
    pub fn scramble(&mut self, length: usize, rng: &mut fastrand::Rng) -> Vec<Move> {
        let moves = (0..length)
            .filter_map(|_| rng.choice(Move::ALL))
            .collect_vec();
        self.apply_all(&moves);
        debug!("Scrambled with {}", moves.iter().join(" "));
        moves
    }

    /// Whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_uniform)
    }

    /// How many facelets of each color there are, indexed like [`Color::ALL`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &color in self.faces.iter().flat_map(|face| face.grid().iter().flatten()) {
            counts[color.index()] += 1;
        }
        counts
    }

    /// The cube unfolded into a 12x9 grid, back on top, then left, up and
    /// right, then front and down below:
    ///
    /// ```text
    ///    B
    ///  L U R
    ///    F
    ///    D
    /// ```
    ///
    /// Each face is drawn in its own frame exactly as stored; cells outside the
    /// net are `None`.
    pub fn net(&self) -> [[Option<Color>; 9]; 12] {
        let mut net = [[None; 9]; 12];
        let placements = [
            (Role::Back, 0, 3),
            (Role::Left, 3, 0),
            (Role::Up, 3, 3),
            (Role::Right, 3, 6),
            (Role::Front, 6, 3),
            (Role::Down, 9, 3),
        ];

        for (role, top, left) in placements {
            for (row, cells) in self.grid(role).iter().enumerate() {
                for (col, &color) in cells.iter().enumerate() {
                    net[top + row][left + col] = Some(color);
                }
            }
        }

        net
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.net() {
            let line = row
                .iter()
                .map(|cell| cell.map_or(' ', Color::letter))
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn strip_of(cube: &Cube, id: FaceId, edge: Edge) -> [Color; 3] {
        cube.face_by_id(id).read_edge(edge)
    }

    #[test]
    fn new_cube_is_solved() {
        let cube = Cube::new();
        assert!(cube.is_solved());
        assert_eq!(cube.color_counts(), [9; 6]);
        assert_eq!(cube.layout(), &Layout::SOLVED);
        assert_eq!(cube.grid(Role::Up), &[[Yellow; 3]; 3]);
        assert_eq!(cube.grid(Role::Front), &[[Blue; 3]; 3]);
        assert_eq!(cube, Cube::default());
    }

    #[test]
    fn up_clockwise_moves_front_to_left() {
        let mut cube = Cube::new();
        cube.apply(Move::U);

        assert_eq!(strip_of(&cube, FaceId::Orange, Edge::Right), [Blue; 3]);
        assert_eq!(strip_of(&cube, FaceId::Green, Edge::Bottom), [Orange; 3]);
        assert_eq!(strip_of(&cube, FaceId::Red, Edge::Left), [Green; 3]);
        assert_eq!(strip_of(&cube, FaceId::Blue, Edge::Top), [Red; 3]);
        assert!(cube.face(Role::Up).is_uniform());
        assert!(cube.face(Role::Down).is_uniform());
        assert_eq!(
            cube.grid(Role::Right),
            &[
                [Green, Red, Red],
                [Green, Red, Red],
                [Green, Red, Red],
            ]
        );
    }

    #[test]
    fn right_clockwise_moves_up_to_back() {
        let mut cube = Cube::new();
        cube.apply(Move::R);

        assert_eq!(strip_of(&cube, FaceId::Green, Edge::Right), [Yellow; 3]);
        assert_eq!(strip_of(&cube, FaceId::White, Edge::Right), [Green; 3]);
        assert_eq!(strip_of(&cube, FaceId::Blue, Edge::Right), [White; 3]);
        assert_eq!(strip_of(&cube, FaceId::Yellow, Edge::Right), [Blue; 3]);
        assert!(cube.face(Role::Left).is_uniform());
    }

    #[test]
    fn turn_face_matches_role_turn() {
        let mut by_role = Cube::new();
        let mut by_id = Cube::new();
        by_role.turn(Role::Front, Direction::CounterClockwise);
        by_id.turn_face(FaceId::Blue, Direction::CounterClockwise);
        assert_eq!(by_role, by_id);
    }

    #[test]
    fn reorientation_relabels_sides() {
        let mut layout = Layout::SOLVED;
        layout.reorient(Reorientation::Y);
        assert_eq!(layout.face(Role::Front), FaceId::Red);
        assert_eq!(layout.face(Role::Left), FaceId::Blue);
        assert_eq!(layout.face(Role::Back), FaceId::Orange);
        assert_eq!(layout.face(Role::Right), FaceId::Green);
        assert_eq!(layout.face(Role::Up), FaceId::Yellow);
        assert_eq!(layout.face(Role::Down), FaceId::White);

        assert_eq!(layout.role_of(FaceId::Red), Role::Front);
        assert_eq!(layout.role_of(FaceId::Orange), Role::Back);
        assert_eq!(layout.role_of(FaceId::Yellow), Role::Up);

        layout.reorient(Reorientation::YPrime);
        assert_eq!(layout, Layout::SOLVED);

        layout.reorient(Reorientation::YPrime);
        assert_eq!(layout.role_of(FaceId::Orange), Role::Front);
        assert_eq!(layout.role_of(FaceId::Blue), Role::Right);
        assert_eq!(layout.role_of(FaceId::White), Role::Down);
        for role in Role::ALL {
            assert_eq!(layout.role_of(layout.face(role)), role);
        }
        layout.reorient(Reorientation::Y);

        for _ in 0..4 {
            layout.reorient(Reorientation::YPrime);
        }
        assert_eq!(layout, Layout::SOLVED);
    }

    #[test]
    fn moves_follow_the_layout() {
        let mut reoriented = Cube::new();
        reoriented.reorient(Reorientation::Y);
        reoriented.apply(Move::F);

        let mut plain = Cube::new();
        plain.apply(Move::R);

        assert_eq!(reoriented.face_by_id(FaceId::Red), plain.face_by_id(FaceId::Red));
        reoriented.reorient(Reorientation::YPrime);
        assert_eq!(reoriented, plain);
    }

    #[test]
    fn facelet_lookup() {
        let mut cube = Cube::new();
        cube.apply(Move::U);
        assert_eq!(cube.facelet(Role::Front, 0, 2), Ok(Red));
        assert_eq!(cube.facelet(Role::Front, 2, 2), Ok(Blue));
        assert_eq!(
            cube.facelet(Role::Front, 0, 3),
            Err(CubeError::PositionOutOfRange { row: 0, col: 3 })
        );
        assert_eq!(cube.grids().count(), 6);
        assert!(cube.grids().all(|(role, grid)| cube.grid(role) == grid));
    }

    #[test]
    fn solved_net() {
        let cube = Cube::new();
        let expected = concat!(
            "      G G G\n",
            "      G G G\n",
            "      G G G\n",
            "O O O Y Y Y R R R\n",
            "O O O Y Y Y R R R\n",
            "O O O Y Y Y R R R\n",
            "      B B B\n",
            "      B B B\n",
            "      B B B\n",
            "      W W W\n",
            "      W W W\n",
            "      W W W\n",
        );
        assert_eq!(cube.to_string(), expected);
        assert_eq!(cube.net()[0][0], None);
        assert_eq!(cube.net()[4][7], Some(Red));
    }

    #[test]
    fn seeded_scramble_is_deterministic() {
        let mut a = Cube::new();
        let mut b = Cube::new();
        let moves_a = a.scramble(30, &mut fastrand::Rng::with_seed(7));
        let moves_b = b.scramble(30, &mut fastrand::Rng::with_seed(7));
        assert_eq!(moves_a, moves_b);
        assert_eq!(moves_a.len(), 30);
        assert_eq!(a, b);

        let mut empty = Cube::new();
        assert!(empty.scramble(0, &mut fastrand::Rng::with_seed(7)).is_empty());
        assert!(empty.is_solved());
    }
}
