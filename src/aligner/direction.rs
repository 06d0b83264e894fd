use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

/// A predecessor cell in the score matrix
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Cell (i-1, j-1): both symbols aligned to each other
    Diagonal,

    /// Cell (i-1, j): symbol of the second sequence aligned to a gap
    Up,

    /// Cell (i, j-1): symbol of the first sequence aligned to a gap
    Left,
}

impl Direction {
    /// All directions, in display and traceback priority order
    pub const ALL: [Direction; 3] = [Direction::Diagonal, Direction::Up, Direction::Left];

    #[inline(always)]
    const fn bit(self) -> u8 {
        match self {
            Self::Diagonal => 0b001,
            Self::Up => 0b010,
            Self::Left => 0b100,
        }
    }

    /// The direction pointing the other way when the two sequences swap places.
    pub fn transposed(self) -> Self {
        match self {
            Self::Diagonal => Self::Diagonal,
            Self::Up => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Cell reached by stepping from `(i, j)` in this direction, if it stays inside the grid.
    #[inline]
    pub fn step(self, i: usize, j: usize) -> Option<(usize, usize)> {
        match self {
            Self::Diagonal => Some((i.checked_sub(1)?, j.checked_sub(1)?)),
            Self::Up => Some((i.checked_sub(1)?, j)),
            Self::Left => Some((i, j.checked_sub(1)?)),
        }
    }
}

/// The set of optimal predecessor directions of a single cell
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    const ALL_BITS: u8 = 0b111;

    pub fn single(direction: Direction) -> Self {
        Self(direction.bit())
    }

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[inline]
    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// False if bits other than those of the three directions are set, e.g., in data
    /// read from a file.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 & !Self::ALL_BITS == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Directions in this set, always ordered diagonal, up, left.
    pub fn iter(&self) -> impl Iterator<Item=Direction> + '_ {
        Direction::ALL.into_iter()
            .filter(move |d| self.contains(*d))
    }

    /// The highest priority direction in this set
    pub fn first(&self) -> Option<Direction> {
        self.iter().next()
    }

    pub fn transposed(&self) -> Self {
        self.iter()
            .map(Direction::transposed)
            .collect()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item=Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for direction in iter {
            set.insert(direction);
        }

        set
    }
}

impl Debug for DirectionSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.iter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, DirectionSet};

    #[test]
    fn test_iteration_order() {
        let set = DirectionSet::from_iter([Direction::Left, Direction::Diagonal, Direction::Up]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::Diagonal, Direction::Up, Direction::Left]);
        assert_eq!(set.len(), 3);

        let set = DirectionSet::from_iter([Direction::Left, Direction::Up]);
        assert_eq!(set.first(), Some(Direction::Up));
        assert!(!set.contains(Direction::Diagonal));
    }

    #[test]
    fn test_empty_set() {
        let set = DirectionSet::default();
        assert!(set.is_empty());
        assert_eq!(set, DirectionSet::EMPTY);
        assert_eq!(set.first(), None);
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_validity() {
        assert!(DirectionSet::EMPTY.is_valid());
        assert!(DirectionSet::from_iter(Direction::ALL).is_valid());

        let set = DirectionSet(0b1001);
        assert!(!set.is_valid());
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::Diagonal]);
    }

    #[test]
    fn test_transposed() {
        let set = DirectionSet::from_iter([Direction::Diagonal, Direction::Up]);
        assert_eq!(set.transposed(), DirectionSet::from_iter([Direction::Diagonal, Direction::Left]));
        assert_eq!(DirectionSet::single(Direction::Left).transposed(), DirectionSet::single(Direction::Up));
    }

    #[test]
    fn test_step() {
        assert_eq!(Direction::Diagonal.step(2, 3), Some((1, 2)));
        assert_eq!(Direction::Up.step(2, 3), Some((1, 3)));
        assert_eq!(Direction::Left.step(2, 3), Some((2, 2)));
        assert_eq!(Direction::Up.step(0, 3), None);
        assert_eq!(Direction::Diagonal.step(1, 0), None);
    }
}
