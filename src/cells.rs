use smallvec::SmallVec;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: u32,
    pub col: u32,
}

impl GridCoordinate {
    pub fn new(row: u32, col: u32) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    pub fn from_row_major_index(index: usize, row_length: usize) -> GridCoordinate {
        let row = index / row_length;
        let col = index - (row * row_length);
        GridCoordinate {
            row: row as u32,
            col: col as u32,
        }
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// A side of a cell, which doubles as a direction of movement on the grid.
/// `DIRECTIONS` fixes the candidate ordering used whenever all four sides
/// are examined.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

pub const DIRECTIONS: [Direction; 4] =
    [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Creates a new `GridCoordinate` offset 1 cell away in the given direction.
/// Returns None if the Coordinate is not representable (trying to move up
/// from row 0 or left from column 0).
pub fn offset_coordinate(coord: GridCoordinate, dir: Direction) -> Option<GridCoordinate> {
    let GridCoordinate { row, col } = coord;
    match dir {
        Direction::Left => {
            if col > 0 {
                Some(GridCoordinate { col: col - 1, ..coord })
            } else {
                None
            }
        }
        Direction::Right => Some(GridCoordinate { col: col + 1, ..coord }),
        Direction::Up => {
            if row > 0 {
                Some(GridCoordinate { row: row - 1, ..coord })
            } else {
                None
            }
        }
        Direction::Down => Some(GridCoordinate { row: row + 1, ..coord }),
    }
}

/// The direction from `a` to `b` when the two coordinates differ by exactly
/// one unit on exactly one axis, otherwise None.
pub fn direction_between(a: GridCoordinate, b: GridCoordinate) -> Option<Direction> {
    if a.row == b.row {
        if b.col + 1 == a.col {
            Some(Direction::Left)
        } else if a.col + 1 == b.col {
            Some(Direction::Right)
        } else {
            None
        }
    } else if a.col == b.col {
        if b.row + 1 == a.row {
            Some(Direction::Up)
        } else if a.row + 1 == b.row {
            Some(Direction::Down)
        } else {
            None
        }
    } else {
        None
    }
}

/// Axis aligned rectangle covered by one cell, in the world units handed to
/// `Grid::new`. (x1, y1) is the top left corner, (x2, y2) the bottom right.
/// Only renderers care about these.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct CellBounds {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CellBounds {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> CellBounds {
        CellBounds { x1, y1, x2, y2 }
    }
}

/// One cell of the grid: four wall flags, a visited marker and immutable
/// geometry. All walls start present and `visited` starts false.
///
/// The wall flags are private on purpose. Clearing a wall must also clear the
/// facing flag of the adjacent cell, so mutation only happens through
/// `Grid::remove_wall_between` / `Grid::open_wall`, never directly.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    coord: GridCoordinate,
    bounds: CellBounds,
    left_wall: bool,
    right_wall: bool,
    top_wall: bool,
    bottom_wall: bool,
    visited: bool,
}

impl Cell {
    pub(crate) fn new(coord: GridCoordinate, bounds: CellBounds) -> Cell {
        Cell {
            coord,
            bounds,
            left_wall: true,
            right_wall: true,
            top_wall: true,
            bottom_wall: true,
            visited: false,
        }
    }

    pub fn coordinate(&self) -> GridCoordinate {
        self.coord
    }

    pub fn bounds(&self) -> &CellBounds {
        &self.bounds
    }

    pub fn has_left_wall(&self) -> bool {
        self.left_wall
    }

    pub fn has_right_wall(&self) -> bool {
        self.right_wall
    }

    pub fn has_top_wall(&self) -> bool {
        self.top_wall
    }

    pub fn has_bottom_wall(&self) -> bool {
        self.bottom_wall
    }

    pub fn has_wall(&self, side: Direction) -> bool {
        match side {
            Direction::Left => self.left_wall,
            Direction::Right => self.right_wall,
            Direction::Up => self.top_wall,
            Direction::Down => self.bottom_wall,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_wall(&mut self, side: Direction, present: bool) {
        match side {
            Direction::Left => self.left_wall = present,
            Direction::Right => self.right_wall = present,
            Direction::Up => self.top_wall = present,
            Direction::Down => self.bottom_wall = present,
        }
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}
