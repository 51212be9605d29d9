use std::error;
use std::fmt;

use rand::Rng;

use crate::cells::{CoordinateSmallVec, Direction, GridCoordinate, DIRECTIONS};
use crate::grid::Grid;
use crate::renderers::CellRenderer;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CarveError {
    EmptyGrid,
    InvalidStartCoordinate(GridCoordinate),
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CarveError::EmptyGrid => write!(f, "cannot carve a maze on an empty grid"),
            CarveError::InvalidStartCoordinate(coord) => {
                write!(f,
                       "carve start coordinate ({}, {}) is outside the grid",
                       coord.row,
                       coord.col)
            }
        }
    }
}

impl error::Error for CarveError {}

/// Carve a perfect maze into the grid with the randomized recursive
/// backtracker algorithm.
///
/// Every cell ends up reachable from every other cell through exactly one
/// sequence of open walls: the open walls form a spanning tree of the grid's
/// adjacency graph. The entrance (top wall of the top left cell) and exit
/// (bottom wall of the bottom right cell) are opened before the walk begins.
///
/// From the current cell the walk collects the in-bounds unvisited
/// neighbours in the fixed order Left, Right, Up, Down, then picks one
/// uniformly at random from whatever is in the list. A cell with no
/// candidates left is a settled dead end: it is reported to the renderer and
/// the walk backtracks. The depth-first walk runs on an explicit stack so a
/// large grid cannot exhaust the call stack.
///
/// The random source is injected so that carving is reproducible - seed the
/// rng and the same wall configuration falls out every run, no matter what
/// the renderer does. The renderer hears about each cell once up front, once
/// for the entrance and exit cells, and once per cell as it dead-ends;
/// `NullRenderer` works fine when nothing is watching.
///
/// All visited flags are false again by the time this returns, so a later
/// consumer of the grid can reuse them.
pub fn recursive_backtracker<R, C>(grid: &mut Grid,
                                   start: GridCoordinate,
                                   rng: &mut R,
                                   renderer: &mut C)
                                   -> Result<(), CarveError>
    where R: Rng,
          C: CellRenderer
{
    if grid.size() == 0 {
        // Grid::new refuses zero dimensions, so this guards callers that
        // build a Grid by other means in the future.
        return Err(CarveError::EmptyGrid);
    }
    if !grid.is_valid_coordinate(start) {
        return Err(CarveError::InvalidStartCoordinate(start));
    }

    for coord in grid.iter() {
        report_cell(grid, renderer, coord);
    }

    carve_entrance_and_exit(grid, renderer);

    let mut stack: Vec<GridCoordinate> = Vec::with_capacity(grid.size());
    grid.set_visited(start, true).expect("start coordinate was bounds checked");
    stack.push(start);

    while let Some(&current) = stack.last() {
        let candidates = unvisited_neighbours(grid, current);

        if candidates.is_empty() {
            // this branch is fully dead ended, backtrack
            report_cell(grid, renderer, current);
            stack.pop();
            continue;
        }

        let next = candidates[rng.gen::<usize>() % candidates.len()];
        grid.remove_wall_between(current, next)
            .expect("candidate neighbours are always adjacent and in bounds");
        grid.set_visited(next, true)
            .expect("candidate neighbours are always in bounds");
        stack.push(next);
    }

    grid.reset_visited();
    Ok(())
}

/// Open the top wall of the top left cell and the bottom wall of the bottom
/// right cell. On a 1 x 1 grid both open on the same cell.
fn carve_entrance_and_exit<C: CellRenderer>(grid: &mut Grid, renderer: &mut C) {
    let entrance = GridCoordinate::new(0, 0);
    let exit = GridCoordinate::new(grid.rows() as u32 - 1, grid.columns() as u32 - 1);

    grid.open_wall(entrance, Direction::Up)
        .expect("the top left cell always exists");
    grid.open_wall(exit, Direction::Down)
        .expect("the bottom right cell always exists");

    report_cell(grid, renderer, entrance);
    report_cell(grid, renderer, exit);
}

/// In-bounds, not yet visited neighbours of a cell in the fixed candidate
/// order Left, Right, Up, Down. The order only shapes the candidate list,
/// selection from it is uniform.
fn unvisited_neighbours(grid: &Grid, coord: GridCoordinate) -> CoordinateSmallVec {
    DIRECTIONS.iter()
        .filter_map(|&direction| grid.neighbour_at_direction(coord, direction))
        .filter(|&neighbour| {
            !grid.cell(neighbour)
                .expect("neighbour_at_direction only returns in-bounds coordinates")
                .is_visited()
        })
        .collect()
}

fn report_cell<C: CellRenderer>(grid: &Grid, renderer: &mut C, coord: GridCoordinate) {
    let cell = grid.cell(coord).expect("generator coordinates are always in bounds");
    renderer.cell_changed(cell);
}
