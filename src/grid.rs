use std::error;
use std::fmt;

use crate::cells::{direction_between, offset_coordinate, Cell, CellBounds, CoordinateSmallVec,
                   Direction, GridCoordinate, DIRECTIONS};
use crate::units::{ColumnsCount, RowsCount};

/// Contract violations at the grid boundary. These are programmer errors
/// surfaced immediately, not conditions that occur during normal carving -
/// the generator only ever produces valid indices.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridError {
    InvalidDimension,
    OutOfBounds(GridCoordinate),
    NotAdjacent(GridCoordinate, GridCoordinate),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridError::InvalidDimension => {
                write!(f, "grid dimensions must be at least 1 x 1")
            }
            GridError::OutOfBounds(coord) => {
                write!(f, "coordinate ({}, {}) is outside the grid", coord.row, coord.col)
            }
            GridError::NotAdjacent(a, b) => {
                write!(f,
                       "cells ({}, {}) and ({}, {}) are not adjacent",
                       a.row,
                       a.col,
                       b.row,
                       b.col)
            }
        }
    }
}

impl error::Error for GridError {}

/// A fixed size rows x columns grid of wall flag cells, stored row-major.
/// Owns every cell exclusively; cells are populated eagerly at construction
/// and the grid is never resized.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a rows x columns grid with every wall present and no cell
    /// visited. Cell geometry is derived from the origin and cell side
    /// length, in whatever world units the renderer works in.
    pub fn new(rows: RowsCount,
               columns: ColumnsCount,
               cell_size: f32,
               origin_x: f32,
               origin_y: f32)
               -> Result<Grid, GridError> {

        let RowsCount(row_count) = rows;
        let ColumnsCount(column_count) = columns;
        if row_count == 0 || column_count == 0 {
            return Err(GridError::InvalidDimension);
        }

        let mut cells = Vec::with_capacity(row_count * column_count);
        for row in 0..row_count {
            let y1 = origin_y + cell_size * row as f32;
            for column in 0..column_count {
                let x1 = origin_x + cell_size * column as f32;
                let coord = GridCoordinate::new(row as u32, column as u32);
                let bounds = CellBounds::new(x1, y1, x1 + cell_size, y1 + cell_size);
                cells.push(Cell::new(coord, bounds));
            }
        }

        Ok(Grid {
            rows: row_count,
            columns: column_count,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    pub fn cell(&self, coord: GridCoordinate) -> Result<&Cell, GridError> {
        self.coordinate_to_index(coord)
            .map(|index| &self.cells[index])
            .ok_or(GridError::OutOfBounds(coord))
    }

    pub fn cell_at(&self, row: u32, col: u32) -> Result<&Cell, GridError> {
        self.cell(GridCoordinate::new(row, col))
    }

    /// Convert a grid coordinate to a one dimensional index in the range
    /// 0..grid.size(). Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row as usize * self.columns + coord.col as usize)
        } else {
            None
        }
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions.
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.row as usize) < self.rows && (coord.col as usize) < self.columns
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: Direction)
                                  -> Option<GridCoordinate> {
        offset_coordinate(coord, direction).and_then(|neighbour_coord| {
            if self.is_valid_coordinate(neighbour_coord) {
                Some(neighbour_coord)
            } else {
                None
            }
        })
    }

    /// In-bounds cells adjacent to a particular cell, whether or not a wall
    /// stands between them, in the fixed order Left, Right, Up, Down.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        DIRECTIONS.iter()
            .filter_map(|&direction| self.neighbour_at_direction(coord, direction))
            .collect()
    }

    /// Clear the matching wall flag on both sides of two adjacent cells.
    /// The two flags change in this one call, so no intermediate state with
    /// only one side cleared is ever observable.
    pub fn remove_wall_between(&mut self,
                               a: GridCoordinate,
                               b: GridCoordinate)
                               -> Result<(), GridError> {
        if !self.is_valid_coordinate(a) {
            return Err(GridError::OutOfBounds(a));
        }
        if !self.is_valid_coordinate(b) {
            return Err(GridError::OutOfBounds(b));
        }
        let direction = direction_between(a, b).ok_or(GridError::NotAdjacent(a, b))?;
        self.open_wall(a, direction)
    }

    /// Clear one side's wall flag and, when an in-bounds neighbour exists on
    /// that side, the neighbour's facing flag as well. At the grid boundary
    /// only the outer wall opens - this is how the entrance and exit are
    /// carved.
    pub fn open_wall(&mut self,
                     coord: GridCoordinate,
                     direction: Direction)
                     -> Result<(), GridError> {
        let neighbour = self.neighbour_at_direction(coord, direction);
        self.cell_mut(coord)?.set_wall(direction, false);
        if let Some(neighbour_coord) = neighbour {
            self.cell_mut(neighbour_coord)
                .expect("neighbour_at_direction only returns in-bounds coordinates")
                .set_wall(direction.opposite(), false);
        }
        Ok(())
    }

    pub fn set_visited(&mut self, coord: GridCoordinate, visited: bool) -> Result<(), GridError> {
        self.cell_mut(coord).map(|cell| cell.set_visited(visited))
    }

    /// Set every cell's visited flag back to false, so a later consumer of
    /// the grid can reuse the flags. Idempotent.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(false);
        }
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_length: self.columns,
            cells_count: self.size(),
        }
    }

    pub fn iter_row(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Row,
            current_index: 0,
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn iter_column(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Column,
            current_index: 0,
            rows: self.rows,
            columns: self.columns,
        }
    }

    fn cell_mut(&mut self, coord: GridCoordinate) -> Result<&mut Cell, GridError> {
        match self.coordinate_to_index(coord) {
            Some(index) => Ok(&mut self.cells[index]),
            None => Err(GridError::OutOfBounds(coord)),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_length: usize,
    cells_count: usize,
}

impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             self.row_length);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        (lower_bound, Some(lower_bound))
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Copy, Clone)]
enum BatchIterType {
    Row,
    Column,
}

#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    rows: usize,
    columns: usize,
}

impl Iterator for BatchIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let (batches, batch_length) = if let BatchIterType::Row = self.iter_type {
            (self.rows, self.columns)
        } else {
            (self.columns, self.rows)
        };
        if self.current_index < batches {
            let coords = (0..batch_length)
                .map(|i| {
                    if let BatchIterType::Row = self.iter_type {
                        GridCoordinate::new(self.current_index as u32, i as u32)
                    } else {
                        GridCoordinate::new(i as u32, self.current_index as u32)
                    }
                })
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }
}
