//! Structural queries over a grid's open-wall graph: which cells connect to
//! which, and whether the whole thing forms a perfect maze (a spanning tree
//! of the grid's adjacency graph).

use std::collections::{HashSet, VecDeque};
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;
use itertools::Itertools;
use petgraph::unionfind::UnionFind;

use crate::cells::{Direction, GridCoordinate, DIRECTIONS};
use crate::grid::Grid;

/// Hash set keyed with the fnv hasher, much faster than the default on small
/// keys like grid coordinates.
pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;

/// Every open interior wall as a pair of adjacent coordinates, each
/// adjacency reported once. Opened boundary walls (entrance/exit) connect
/// nothing and are not passages.
pub fn passages(grid: &Grid) -> Vec<(GridCoordinate, GridCoordinate)> {
    let mut open = Vec::new();
    for (row, column) in (0..grid.rows() as u32).cartesian_product(0..grid.columns() as u32) {
        let coord = GridCoordinate::new(row, column);
        let cell = grid.cell(coord).expect("iteration stays in bounds");

        // look right and down only, so each shared wall is examined from one side
        if !cell.has_right_wall() {
            if let Some(neighbour) = grid.neighbour_at_direction(coord, Direction::Right) {
                open.push((coord, neighbour));
            }
        }
        if !cell.has_bottom_wall() {
            if let Some(neighbour) = grid.neighbour_at_direction(coord, Direction::Down) {
                open.push((coord, neighbour));
            }
        }
    }
    open
}

/// All cells reachable from `start` by walking through open walls, `start`
/// included. Empty when `start` is outside the grid. The grid's visited
/// flags are left untouched - the working set lives here.
pub fn reachable_cells(grid: &Grid, start: GridCoordinate) -> FnvHashSet<GridCoordinate> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    let mut seen = HashSet::with_capacity_and_hasher(grid.size(), fnv);
    if !grid.is_valid_coordinate(start) {
        return seen;
    }

    let mut frontier = VecDeque::new();
    seen.insert(start);
    frontier.push_back(start);

    while let Some(coord) = frontier.pop_front() {
        let cell = grid.cell(coord).expect("search stays in bounds");
        for &direction in DIRECTIONS.iter() {
            if cell.has_wall(direction) {
                continue;
            }
            if let Some(neighbour) = grid.neighbour_at_direction(coord, direction) {
                if seen.insert(neighbour) {
                    frontier.push_back(neighbour);
                }
            }
        }
    }

    seen
}

/// Does the grid's open-wall graph form a spanning tree - connected, acyclic,
/// exactly one simple path between any two cells?
///
/// A tree on n nodes has exactly n - 1 edges, and an edge set of that size is
/// a tree iff no edge closes a cycle, which union-find detects as it merges.
pub fn is_perfect_maze(grid: &Grid) -> bool {
    let open = passages(grid);
    if open.len() != grid.size() - 1 {
        return false;
    }

    let mut components = UnionFind::<usize>::new(grid.size());
    for &(a, b) in &open {
        let a_index = grid.coordinate_to_index(a).expect("passages are in bounds");
        let b_index = grid.coordinate_to_index(b).expect("passages are in bounds");
        if !components.union(a_index, b_index) {
            return false;
        }
    }

    reachable_cells(grid, GridCoordinate::new(0, 0)).len() == grid.size()
}

#[cfg(test)]
mod tests {

    use crate::units::{ColumnsCount, RowsCount};
    use super::*;

    fn small_grid(rows: usize, columns: usize) -> Grid {
        Grid::new(RowsCount(rows), ColumnsCount(columns), 10.0, 0.0, 0.0)
            .expect("grid dimensions should be valid")
    }

    #[test]
    fn fresh_grid_has_no_passages() {
        let g = small_grid(4, 4);
        assert!(passages(&g).is_empty());
        assert!(!is_perfect_maze(&g));
    }

    #[test]
    fn boundary_openings_are_not_passages() {
        let mut g = small_grid(2, 2);
        g.open_wall(GridCoordinate::new(0, 0), Direction::Up).unwrap();
        g.open_wall(GridCoordinate::new(1, 1), Direction::Down).unwrap();
        assert!(passages(&g).is_empty());
    }

    #[test]
    fn passages_report_each_adjacency_once() {
        let mut g = small_grid(2, 2);
        g.remove_wall_between(GridCoordinate::new(0, 0), GridCoordinate::new(0, 1)).unwrap();
        g.remove_wall_between(GridCoordinate::new(0, 0), GridCoordinate::new(1, 0)).unwrap();
        let open = passages(&g);
        assert_eq!(open,
                   vec![(GridCoordinate::new(0, 0), GridCoordinate::new(0, 1)),
                        (GridCoordinate::new(0, 0), GridCoordinate::new(1, 0))]);
    }

    #[test]
    fn reachability_walks_open_walls_only() {
        let mut g = small_grid(1, 3);
        g.remove_wall_between(GridCoordinate::new(0, 0), GridCoordinate::new(0, 1)).unwrap();

        let reached = reachable_cells(&g, GridCoordinate::new(0, 0));
        assert_eq!(reached.len(), 2);
        assert!(reached.contains(&GridCoordinate::new(0, 0)));
        assert!(reached.contains(&GridCoordinate::new(0, 1)));
        assert!(!reached.contains(&GridCoordinate::new(0, 2)));
    }

    #[test]
    fn reachability_from_an_invalid_start_is_empty() {
        let g = small_grid(2, 2);
        assert!(reachable_cells(&g, GridCoordinate::new(5, 5)).is_empty());
    }

    #[test]
    fn a_single_cell_is_trivially_perfect() {
        let g = small_grid(1, 1);
        assert!(is_perfect_maze(&g));
    }

    #[test]
    fn a_corridor_is_a_perfect_maze() {
        let mut g = small_grid(1, 4);
        for col in 0..3 {
            g.remove_wall_between(GridCoordinate::new(0, col), GridCoordinate::new(0, col + 1))
                .unwrap();
        }
        assert!(is_perfect_maze(&g));
    }

    #[test]
    fn a_cycle_is_not_a_perfect_maze() {
        // all four interior walls of a 2x2 grid open: connected but cyclic
        let mut g = small_grid(2, 2);
        g.remove_wall_between(GridCoordinate::new(0, 0), GridCoordinate::new(0, 1)).unwrap();
        g.remove_wall_between(GridCoordinate::new(0, 1), GridCoordinate::new(1, 1)).unwrap();
        g.remove_wall_between(GridCoordinate::new(1, 1), GridCoordinate::new(1, 0)).unwrap();
        g.remove_wall_between(GridCoordinate::new(1, 0), GridCoordinate::new(0, 0)).unwrap();
        assert!(!is_perfect_maze(&g));
    }

    #[test]
    fn too_few_passages_are_not_a_perfect_maze() {
        // two edges on four cells cannot connect them all
        let mut g = small_grid(2, 2);
        g.remove_wall_between(GridCoordinate::new(0, 0), GridCoordinate::new(0, 1)).unwrap();
        g.remove_wall_between(GridCoordinate::new(1, 0), GridCoordinate::new(1, 1)).unwrap();
        assert!(!is_perfect_maze(&g));
    }

    #[test]
    fn cycle_plus_isolated_corridor_is_not_a_perfect_maze() {
        // five edges on a 2x3 grid is the right count for a spanning tree,
        // but four of them form a cycle in the left block
        let mut g = small_grid(2, 3);
        g.remove_wall_between(GridCoordinate::new(0, 0), GridCoordinate::new(0, 1)).unwrap();
        g.remove_wall_between(GridCoordinate::new(0, 1), GridCoordinate::new(1, 1)).unwrap();
        g.remove_wall_between(GridCoordinate::new(1, 1), GridCoordinate::new(1, 0)).unwrap();
        g.remove_wall_between(GridCoordinate::new(1, 0), GridCoordinate::new(0, 0)).unwrap();
        g.remove_wall_between(GridCoordinate::new(0, 2), GridCoordinate::new(1, 2)).unwrap();
        assert!(!is_perfect_maze(&g));
    }
}
