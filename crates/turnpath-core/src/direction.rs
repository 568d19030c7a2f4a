//! Headings and heading sets.
//!
//! [`Direction`] lists the eight compass headings in clockwise order.
//! [`DirectionSet`] selects which of them a search may use and defines the
//! angular distance between two headings of the set.

use std::fmt;

use crate::geom::Point;

/// A compass heading, clockwise from north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight headings in clockwise order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four cardinal headings in clockwise order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position in clockwise order, counted in eighth turns from north.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit offset of one step in this heading.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(-1, 0),
            Direction::NorthEast => Point::new(-1, 1),
            Direction::East => Point::new(0, 1),
            Direction::SouthEast => Point::new(1, 1),
            Direction::South => Point::new(1, 0),
            Direction::SouthWest => Point::new(1, -1),
            Direction::West => Point::new(0, -1),
            Direction::NorthWest => Point::new(-1, -1),
        }
    }

    /// Whether this heading is one of north, east, south or west.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Rotate clockwise by `eighths` eighth turns.
    #[inline]
    pub const fn rotate(self, eighths: usize) -> Self {
        Self::ALL[(self.index() + eighths) % 8]
    }

    /// Quarter turn clockwise.
    #[inline]
    pub const fn turn_right(self) -> Self {
        self.rotate(2)
    }

    /// The opposite heading.
    #[inline]
    pub const fn reverse(self) -> Self {
        self.rotate(4)
    }

    /// Parse an arrow glyph (`^`, `>`, `v`, `<`).
    pub fn from_arrow(ch: char) -> Option<Self> {
        match ch {
            '^' => Some(Direction::North),
            '>' => Some(Direction::East),
            'v' => Some(Direction::South),
            '<' => Some(Direction::West),
            _ => None,
        }
    }

    /// Glyph used when drawing a heading onto a grid. Cardinal headings use
    /// the arrows accepted by [`Direction::from_arrow`].
    pub const fn arrow(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
            Direction::NorthEast | Direction::SouthWest => '/',
            Direction::SouthEast | Direction::NorthWest => '\\',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        f.write_str(name)
    }
}

/// The headings a search may move in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionSet {
    /// North, east, south and west. One step is a quarter turn.
    #[default]
    Cardinal,
    /// Cardinal plus diagonal headings. One step is an eighth turn.
    Octile,
}

impl DirectionSet {
    /// Select a set by its size (4 or 8).
    pub fn from_count(n: usize) -> Option<Self> {
        match n {
            4 => Some(DirectionSet::Cardinal),
            8 => Some(DirectionSet::Octile),
            _ => None,
        }
    }

    /// Headings of the set in clockwise order.
    #[inline]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            DirectionSet::Cardinal => &Direction::CARDINAL,
            DirectionSet::Octile => &Direction::ALL,
        }
    }

    /// Number of headings in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.directions().len()
    }

    /// Always false; a set holds at least four headings.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `d` belongs to the set.
    #[inline]
    pub fn contains(self, d: Direction) -> bool {
        match self {
            DirectionSet::Cardinal => d.is_cardinal(),
            DirectionSet::Octile => true,
        }
    }

    /// Minimum number of rotation steps of this set needed to turn from `a`
    /// to `b`: 0 for the same heading, `len() / 2` for a reversal.
    ///
    /// A heading outside the set rounds up to the next whole step.
    #[inline]
    pub fn angular_distance(self, a: Direction, b: Direction) -> u32 {
        let diff = a.index().abs_diff(b.index());
        let eighths = diff.min(8 - diff);
        let per_step = 8 / self.len();
        eighths.div_ceil(per_step) as u32
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-way", self.len())
    }
}
