use std::fmt::Display;

/// The color of a single facelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Orange,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [Red, Green, Blue, Yellow, White, Orange];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// Position of this color in [`Color::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Orange => 'O',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn letters_are_distinct() {
        assert!(Color::ALL.iter().map(|c| c.letter()).all_unique());
        assert_eq!(Color::ALL.iter().join(""), "RGBYWO");
    }
}
