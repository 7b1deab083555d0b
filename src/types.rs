//! Logical board model: tiles, compass directions and the two board phases.
//!
//! Everything here is plain data. Layout lives in [`crate::render`], drop
//! legality in [`crate::drop`].

use std::fmt;
use std::ops::{Index, IndexMut};

/// Highest pip count on a face of a double-six set.
pub const MAX_FACE: u8 = 6;

/// A single domino tile.
///
/// `head` and `tail` are stored asymmetrically so a tile keeps its drawing
/// orientation, but tile identity ([`Domino::same_tile`]) ignores the order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domino {
    pub head: u8,
    pub tail: u8,
}

impl Domino {
    /// Create a domino without validating the faces.
    pub const fn new(head: u8, tail: u8) -> Self {
        Domino { head, tail }
    }

    /// Create a domino, rejecting faces above [`MAX_FACE`].
    pub fn try_new(head: u8, tail: u8) -> Option<Self> {
        (head <= MAX_FACE && tail <= MAX_FACE).then_some(Domino { head, tail })
    }

    #[inline]
    pub fn is_double(self) -> bool {
        self.head == self.tail
    }

    #[inline]
    pub fn has_face(self, face: u8) -> bool {
        self.head == face || self.tail == face
    }

    /// Unordered equality: `[6|3]` and `[3|6]` are the same tile.
    pub fn same_tile(self, other: Domino) -> bool {
        (self.head == other.head && self.tail == other.tail)
            || (self.head == other.tail && self.tail == other.head)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.head, self.tail)
    }
}

/// Compass direction.
///
/// On a placed tile this is the axis its two halves are drawn along; on a
/// drop it is the side of the board the new tile goes to. `None` is used for
/// the very first tile, which has no side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    North,
    East,
    South,
    West,
    #[default]
    None,
}

impl Direction {
    pub fn rotate_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::None => Direction::None,
        }
    }

    pub fn rotate_counter_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
            Direction::None => Direction::None,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// The spinner arm this direction names, if any.
    pub fn arm(self) -> Option<Arm> {
        match self {
            Direction::North => Some(Arm::North),
            Direction::East => Some(Arm::East),
            Direction::South => Some(Arm::South),
            Direction::West => Some(Arm::West),
            Direction::None => None,
        }
    }
}

/// One of the four arms growing out of the spinner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arm {
    North,
    East,
    South,
    West,
}

impl Arm {
    /// All arms in flattening order.
    pub const ALL: [Arm; 4] = [Arm::North, Arm::East, Arm::South, Arm::West];

    pub fn direction(self) -> Direction {
        match self {
            Arm::North => Direction::North,
            Arm::East => Direction::East,
            Arm::South => Direction::South,
            Arm::West => Direction::West,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Arm::North | Arm::South)
    }
}

/// One value per spinner arm.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Arms<T> {
    pub north: T,
    pub east: T,
    pub south: T,
    pub west: T,
}

impl<T> Arms<T> {
    /// Iterate `(arm, value)` pairs in [`Arm::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Arm, &T)> {
        Arm::ALL.into_iter().map(move |arm| (arm, &self[arm]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Arm, &T) -> U) -> Arms<U> {
        Arms {
            north: f(Arm::North, &self.north),
            east: f(Arm::East, &self.east),
            south: f(Arm::South, &self.south),
            west: f(Arm::West, &self.west),
        }
    }
}

impl<T> Index<Arm> for Arms<T> {
    type Output = T;

    fn index(&self, arm: Arm) -> &T {
        match arm {
            Arm::North => &self.north,
            Arm::East => &self.east,
            Arm::South => &self.south,
            Arm::West => &self.west,
        }
    }
}

impl<T> IndexMut<Arm> for Arms<T> {
    fn index_mut(&mut self, arm: Arm) -> &mut T {
        match arm {
            Arm::North => &mut self.north,
            Arm::East => &mut self.east,
            Arm::South => &mut self.south,
            Arm::West => &mut self.west,
        }
    }
}

/// The abstract chain of placed tiles.
///
/// A board is either still an open row (no double has been played yet) or
/// has been spun around its first double. Arm tiles are ordered outward from
/// the spinner and stored with their head facing it, so the tail of the last
/// tile is the exposed face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Board {
    Open {
        /// Tiles from west to east.
        row: Vec<Domino>,
    },
    Spun {
        spinner: Domino,
        arms: Arms<Vec<Domino>>,
    },
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// A board with no tiles on it.
    pub fn empty() -> Self {
        Board::Open { row: Vec::new() }
    }

    pub fn open(row: impl Into<Vec<Domino>>) -> Self {
        Board::Open { row: row.into() }
    }

    /// A spun board with empty arms.
    pub fn spun(spinner: Domino) -> Self {
        Board::Spun {
            spinner,
            arms: Arms::default(),
        }
    }

    /// Replace one arm's tiles. Has no effect on an open board.
    pub fn with_arm(mut self, arm: Arm, tiles: impl Into<Vec<Domino>>) -> Self {
        if let Board::Spun { arms, .. } = &mut self {
            arms[arm] = tiles.into();
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Board::Open { row } if row.is_empty())
    }

    pub fn spinner(&self) -> Option<Domino> {
        match self {
            Board::Open { .. } => None,
            Board::Spun { spinner, .. } => Some(*spinner),
        }
    }

    /// Tiles of one arm; always empty on an open board.
    pub fn arm(&self, arm: Arm) -> &[Domino] {
        match self {
            Board::Open { .. } => &[],
            Board::Spun { arms, .. } => &arms[arm],
        }
    }

    pub fn tile_count(&self) -> usize {
        match self {
            Board::Open { row } => row.len(),
            Board::Spun { arms, .. } => {
                1 + arms.iter().map(|(_, tiles)| tiles.len()).sum::<usize>()
            }
        }
    }

    /// North and south arms may only be started once both horizontal arms exist.
    pub fn can_play_vertically(&self) -> bool {
        match self {
            Board::Open { .. } => false,
            Board::Spun { arms, .. } => !arms.east.is_empty() && !arms.west.is_empty(),
        }
    }
}

/// Pixel size of the area the board is drawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }

    pub fn min_dimension(self) -> u32 {
        self.width.min(self.height)
    }

    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}px", self.width, self.height)
    }
}
