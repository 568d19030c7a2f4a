//! Decoding of puzzle text into grids, start states and obstacle lists.

use std::fs;
use std::path::Path;

use turnpath_core::{Direction, Grid, Point};
use turnpath_paths::State;

use crate::error::{CliError, Result};

/// Read a whole input file.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// A labyrinth: `#` walls, `S` start, `E` end.
#[derive(Debug)]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
}

pub fn parse_maze(text: &str) -> Result<Maze> {
    let grid = Grid::parse(text)?;
    let start = grid.find('S').ok_or(CliError::MissingSymbol('S'))?;
    let end = grid.find('E').ok_or(CliError::MissingSymbol('E'))?;
    Ok(Maze { grid, start, end })
}

/// One `x,y` pair per line (column first). Blank lines are skipped.
pub fn parse_drops(text: &str) -> Result<Vec<Point>> {
    let mut drops = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parse_err = |message: String| CliError::Parse {
            line: i + 1,
            message,
        };
        let (x, y) = line
            .split_once(',')
            .ok_or_else(|| parse_err(format!("expected `x,y`, got {line:?}")))?;
        let x: i32 = x
            .trim()
            .parse()
            .map_err(|e| parse_err(format!("bad x {x:?}: {e}")))?;
        let y: i32 = y
            .trim()
            .parse()
            .map_err(|e| parse_err(format!("bad y {y:?}: {e}")))?;
        drops.push(Point::new(y, x));
    }
    Ok(drops)
}

/// A patrol map: `#` obstacles and one arrow (`^`, `>`, `v`, `<`) marking
/// the walker.
#[derive(Debug)]
pub struct PatrolMap {
    pub grid: Grid,
    pub start: State,
}

pub fn parse_patrol(text: &str) -> Result<PatrolMap> {
    let grid = Grid::parse(text)?;
    let start = grid
        .iter()
        .find_map(|(p, ch)| Direction::from_arrow(ch).map(|d| State::new(p, d)))
        .ok_or(CliError::MissingSymbol('^'))?;
    Ok(PatrolMap { grid, start })
}
