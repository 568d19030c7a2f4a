//! The [`Grid`] type: an immutable 2D field of characters.
//!
//! Clones share the same backing buffer. Edits go through
//! [`with_cell`](Grid::with_cell), which copies the buffer on write, so a
//! grid handed to a search is never changed underneath it.

use std::fmt;
use std::rc::Rc;

use crate::direction::DirectionSet;
use crate::error::{GridError, Result};
use crate::geom::{Point, Range, RangeIter};

/// A rectangular character grid with copy-on-write storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Rc<Vec<char>>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of `height` rows and `width` columns filled with `symbol`.
    pub fn filled(width: i32, height: i32, symbol: char) -> Self {
        let bounds = Range::with_size(height, width);
        Self {
            cells: Rc::new(vec![symbol; bounds.len()]),
            bounds,
        }
    }

    /// Parse a grid from text, one row per line.
    ///
    /// Trailing blank lines are ignored. Every row must have the same width.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.trim_end_matches(['\n', '\r']).lines().collect();
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.chars());
        }

        Ok(Self {
            bounds: Range::with_size(rows.len() as i32, width as i32),
            cells: Rc::new(cells),
        })
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width() as usize + p.col as usize)
    }

    /// The symbol at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The symbol at `p`. Fails with [`GridError::OutOfBounds`] outside the grid.
    #[inline]
    pub fn cell(&self, p: Point) -> Result<char> {
        self.get(p).ok_or(GridError::OutOfBounds(p))
    }

    /// In-bounds neighbours of `p` for the given heading set, in the set's
    /// clockwise order.
    pub fn neighbors(&self, p: Point, set: DirectionSet) -> Vec<Point> {
        set.directions()
            .iter()
            .map(|d| p + d.offset())
            .filter(|&n| self.in_bounds(n))
            .collect()
    }

    /// Replace the symbol at `p`, returning the edited grid.
    ///
    /// Other clones sharing the buffer are left untouched; the buffer is
    /// copied only while it is shared.
    pub fn with_cell(mut self, p: Point, symbol: char) -> Result<Self> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        Rc::make_mut(&mut self.cells)[i] = symbol;
        Ok(self)
    }

    /// First position holding `symbol`, in row-major order.
    pub fn find(&self, symbol: char) -> Option<Point> {
        self.positions(symbol).next()
    }

    /// All positions holding `symbol`, in row-major order.
    pub fn positions(&self, symbol: char) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(move |&(_, c)| c == symbol).map(|(p, _)| p)
    }

    /// Row-major iterator over `(Point, char)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width().max(1) as usize;
        for (i, row) in self.cells.chunks(width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, char)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, char);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = self.grid.index(p)?;
        Some((p, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
