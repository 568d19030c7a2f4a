//! Drawing paths onto character grids for inspection.

use turnpath_core::Grid;

use crate::error::Result;
use crate::state::State;

/// Draw `path` onto a copy of `grid`.
///
/// Every state after the first is marked with the arrow of its heading; the
/// start cell keeps its symbol. Fails with [`PathError::Grid`] if a state
/// lies outside the grid.
///
/// [`PathError::Grid`]: crate::PathError::Grid
pub fn render_path(grid: &Grid, path: &[State]) -> Result<Grid> {
    let mut canvas = grid.clone();
    for state in path.iter().skip(1) {
        canvas = canvas.with_cell(state.pos, state.dir.arrow())?;
    }
    Ok(canvas)
}
