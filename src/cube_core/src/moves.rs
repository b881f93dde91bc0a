use std::{fmt::Display, str::FromStr};

use crate::CubeError;

/// Which way a face turns, as seen looking at the face from outside the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A logical position on the cube. Which face plays a role is decided by the
/// cube's [`Layout`](crate::Layout).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Role {
    pub const ALL: [Self; 6] = {
        use Role::*;
        let v = [Up, Down, Left, Right, Front, Back];

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

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Role::Up => Role::Down,
            Role::Down => Role::Up,
            Role::Left => Role::Right,
            Role::Right => Role::Left,
            Role::Front => Role::Back,
            Role::Back => Role::Front,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Role::Up => 'U',
            Role::Down => 'D',
            Role::Left => 'L',
            Role::Right => 'R',
            Role::Front => 'F',
            Role::Back => 'B',
        }
    }
}

impl FromStr for Role {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" | "U" => Ok(Role::Up),
            "down" | "D" => Ok(Role::Down),
            "left" | "L" => Ok(Role::Left),
            "right" | "R" => Ok(Role::Right),
            "front" | "F" => Ok(Role::Front),
            "back" | "B" => Ok(Role::Back),
            _ => Err(CubeError::InvalidRole(s.to_owned())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Up => "up",
            Role::Down => "down",
            Role::Left => "left",
            Role::Right => "right",
            Role::Front => "front",
            Role::Back => "back",
        };
        f.write_str(name)
    }
}

/// A quarter turn of the face currently playing `role`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub role: Role,
    pub direction: Direction,
}

impl Move {
    pub const U: Self = Self::new(Role::Up, Direction::Clockwise);
    pub const U_PRIME: Self = Self::new(Role::Up, Direction::CounterClockwise);
    pub const D: Self = Self::new(Role::Down, Direction::Clockwise);
    pub const D_PRIME: Self = Self::new(Role::Down, Direction::CounterClockwise);
    pub const L: Self = Self::new(Role::Left, Direction::Clockwise);
    pub const L_PRIME: Self = Self::new(Role::Left, Direction::CounterClockwise);
    pub const R: Self = Self::new(Role::Right, Direction::Clockwise);
    pub const R_PRIME: Self = Self::new(Role::Right, Direction::CounterClockwise);
    pub const F: Self = Self::new(Role::Front, Direction::Clockwise);
    pub const F_PRIME: Self = Self::new(Role::Front, Direction::CounterClockwise);
    pub const B: Self = Self::new(Role::Back, Direction::Clockwise);
    pub const B_PRIME: Self = Self::new(Role::Back, Direction::CounterClockwise);

    /// Every quarter turn, in the order scrambles draw from.
    pub const ALL: [Self; 12] = [
        Self::U,
        Self::U_PRIME,
        Self::D,
        Self::D_PRIME,
        Self::F,
        Self::F_PRIME,
        Self::B,
        Self::B_PRIME,
        Self::L,
        Self::L_PRIME,
        Self::R,
        Self::R_PRIME,
    ];

    pub const fn new(role: Role, direction: Direction) -> Self {
        Self { role, direction }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.role, self.direction.inverse())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.role.letter()),
            Direction::CounterClockwise => write!(f, "{}'", self.role.letter()),
        }
    }
}

/// The sequence that undoes `moves`: each move inverted, in reverse order.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}

/// A whole-cube rotation about the vertical (up/down) axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Reorientation {
    /// +90°, clockwise seen from above: the front face moves to the left.
    Y,
    /// -90°, counter-clockwise seen from above: the front face moves to the
    /// right.
    YPrime,
}

impl Reorientation {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Reorientation::Y => Reorientation::YPrime,
            Reorientation::YPrime => Reorientation::Y,
        }
    }
}

impl Display for Reorientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reorientation::Y => f.write_str("y"),
            Reorientation::YPrime => f.write_str("y'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn all_moves_are_distinct_and_paired() {
        assert!(Move::ALL.iter().all_unique());
        for move_ in Move::ALL {
            assert!(Move::ALL.contains(&move_.inverse()));
            assert_ne!(move_, move_.inverse());
            assert_eq!(move_.inverse().inverse(), move_);
        }
    }

    #[test]
    fn move_names() {
        assert_eq!(Move::ALL.iter().join(" "), "U U' D D' F F' B B' L L' R R'");
    }

    #[test]
    fn inverted_sequence() {
        let moves = [Move::U, Move::R, Move::F_PRIME];
        assert_eq!(
            invert_sequence(&moves),
            vec![Move::F, Move::R_PRIME, Move::U_PRIME]
        );
        assert!(invert_sequence(&[]).is_empty());
    }

    #[test]
    fn parse_roles() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
            assert_eq!(role.letter().to_string().parse::<Role>(), Ok(role));
            assert_eq!(role.opposite().opposite(), role);
            assert_ne!(role.opposite(), role);
        }

        assert_eq!(
            "sideways".parse::<Role>(),
            Err(CubeError::InvalidRole("sideways".to_owned()))
        );
        assert!("Up".parse::<Role>().is_err());
    }
}
