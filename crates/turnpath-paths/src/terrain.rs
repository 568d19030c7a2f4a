//! Obstacle models consulted by the graph builder and the patrol walker.

use std::collections::HashSet;

use turnpath_core::{Grid, Point, Range};

use crate::error::{PathError, Result};

/// Bounds plus an obstacle predicate.
///
/// Implementations must keep every blocked point inside `bounds()` and answer
/// both queries in constant time.
pub trait Terrain {
    /// The rectangle a walker may occupy.
    fn bounds(&self) -> Range;

    /// Whether `p` is impassable. Only meaningful for in-bounds points.
    fn is_blocked(&self, p: Point) -> bool;

    /// In bounds and not blocked.
    #[inline]
    fn is_open(&self, p: Point) -> bool {
        self.bounds().contains(p) && !self.is_blocked(p)
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        (**self).is_blocked(p)
    }
}

// ---------------------------------------------------------------------------
// Walls
// ---------------------------------------------------------------------------

/// A character grid whose wall symbol marks obstacles.
#[derive(Debug, Clone, Copy)]
pub struct Walls<'a> {
    grid: &'a Grid,
    wall: char,
}

impl<'a> Walls<'a> {
    /// Treat `#` cells of `grid` as obstacles.
    pub fn new(grid: &'a Grid) -> Self {
        Self::with_symbol(grid, '#')
    }

    /// Treat `wall` cells of `grid` as obstacles.
    pub fn with_symbol(grid: &'a Grid, wall: char) -> Self {
        Self { grid, wall }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }
}

impl Terrain for Walls<'_> {
    #[inline]
    fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.grid.get(p) == Some(self.wall)
    }
}

// ---------------------------------------------------------------------------
// ObstacleSet
// ---------------------------------------------------------------------------

/// Explicit bounds with a set of blocked points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    bounds: Range,
    points: HashSet<Point>,
}

impl ObstacleSet {
    /// An empty obstacle set over `bounds`.
    pub fn new(bounds: Range) -> Self {
        Self {
            bounds,
            points: HashSet::new(),
        }
    }

    /// Build from a list of points. Fails on the first point outside `bounds`.
    pub fn from_points(bounds: Range, points: impl IntoIterator<Item = Point>) -> Result<Self> {
        let mut set = Self::new(bounds);
        for p in points {
            set.insert(p)?;
        }
        Ok(set)
    }

    /// Block `p`. Returns whether it was newly blocked.
    pub fn insert(&mut self, p: Point) -> Result<bool> {
        if !self.bounds.contains(p) {
            return Err(PathError::OutOfBounds(p));
        }
        Ok(self.points.insert(p))
    }

    /// Whether `p` is blocked.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Number of blocked points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Terrain for ObstacleSet {
    #[inline]
    fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.points.contains(&p)
    }
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// Caller-owned extra obstacles layered over a base terrain.
///
/// Used for "what if this cell were blocked" probes: the base is only
/// borrowed, so repeated probes cannot leak edits into each other.
#[derive(Debug)]
pub struct Overlay<'a, T: ?Sized> {
    base: &'a T,
    extra: HashSet<Point>,
}

impl<'a, T: Terrain + ?Sized> Overlay<'a, T> {
    /// An overlay with no extra obstacles.
    pub fn new(base: &'a T) -> Self {
        Self {
            base,
            extra: HashSet::new(),
        }
    }

    /// Block `p` on top of the base. Returns whether it was newly added.
    pub fn block(&mut self, p: Point) -> bool {
        self.extra.insert(p)
    }

    /// Remove an overlay obstacle. Base obstacles are unaffected.
    pub fn unblock(&mut self, p: Point) -> bool {
        self.extra.remove(&p)
    }
}

impl<T: Terrain + ?Sized> Terrain for Overlay<'_, T> {
    #[inline]
    fn bounds(&self) -> Range {
        self.base.bounds()
    }

    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.extra.contains(&p) || self.base.is_blocked(p)
    }
}
