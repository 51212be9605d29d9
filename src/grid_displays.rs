//! Textual rendering of a grid's wall state.
//!
//! Each cell is three characters wide: `+---+` rows for the horizontal walls
//! and `|   |` rows for the vertical ones, all driven by the per-cell wall
//! flags so opened boundary walls (the entrance and exit) show as gaps in
//! the outer border.

use std::fmt;

use crate::grid::Grid;

const CORNER: &str = "+";
const WALL_HORIZONTAL: &str = "---";
const OPEN_HORIZONTAL: &str = "   ";
const WALL_VERTICAL: &str = "|";
const OPEN_VERTICAL: &str = " ";
const CELL_BODY: &str = "   ";

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = String::new();

        for row_coords in self.iter_row() {
            let mut top_section = String::new();
            let mut middle_section = String::new();

            for coord in &row_coords {
                let cell = self.cell(*coord).expect("row iteration stays in bounds");

                top_section.push_str(CORNER);
                top_section.push_str(if cell.has_top_wall() {
                    WALL_HORIZONTAL
                } else {
                    OPEN_HORIZONTAL
                });

                middle_section.push_str(if cell.has_left_wall() {
                    WALL_VERTICAL
                } else {
                    OPEN_VERTICAL
                });
                middle_section.push_str(CELL_BODY);
            }

            let last_in_row = self.cell(row_coords[row_coords.len() - 1])
                .expect("row iteration stays in bounds");
            top_section.push_str(CORNER);
            middle_section.push_str(if last_in_row.has_right_wall() {
                WALL_VERTICAL
            } else {
                OPEN_VERTICAL
            });

            output.push_str(&top_section);
            output.push('\n');
            output.push_str(&middle_section);
            output.push('\n');
        }

        // the final row renders its own bottom walls
        let last_row_index = self.rows() as u32 - 1;
        for column in 0..self.columns() as u32 {
            let cell = self.cell_at(last_row_index, column)
                .expect("column iteration stays in bounds");
            output.push_str(CORNER);
            output.push_str(if cell.has_bottom_wall() {
                WALL_HORIZONTAL
            } else {
                OPEN_HORIZONTAL
            });
        }
        output.push_str(CORNER);
        output.push('\n');

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {

    use crate::cells::{Direction, GridCoordinate};
    use crate::generators::recursive_backtracker;
    use crate::grid::Grid;
    use crate::renderers::NullRenderer;
    use crate::units::{ColumnsCount, RowsCount};

    struct ZeroRng;
    impl ::rand::Rng for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
    }

    #[test]
    fn fresh_grid_renders_all_walls() {
        let g = Grid::new(RowsCount(2), ColumnsCount(2), 10.0, 0.0, 0.0).unwrap();
        let expected = "+---+---+\n\
                        |   |   |\n\
                        +---+---+\n\
                        |   |   |\n\
                        +---+---+\n";
        assert_eq!(format!("{}", g), expected);
    }

    #[test]
    fn entrance_and_exit_show_as_boundary_gaps() {
        let mut g = Grid::new(RowsCount(1), ColumnsCount(1), 10.0, 0.0, 0.0).unwrap();
        g.open_wall(GridCoordinate::new(0, 0), Direction::Up).unwrap();
        g.open_wall(GridCoordinate::new(0, 0), Direction::Down).unwrap();
        let expected = "+   +\n\
                        |   |\n\
                        +   +\n";
        assert_eq!(format!("{}", g), expected);
    }

    #[test]
    fn carved_two_by_two_renders_its_passages() {
        let mut g = Grid::new(RowsCount(2), ColumnsCount(2), 10.0, 0.0, 0.0).unwrap();
        recursive_backtracker(&mut g, GridCoordinate::new(0, 0), &mut ZeroRng, &mut NullRenderer)
            .unwrap();
        // the ZeroRng walk: (0,0) -> (0,1) -> (1,1) -> (1,0)
        let expected = "+   +---+\n\
                        |       |\n\
                        +---+   +\n\
                        |       |\n\
                        +---+   +\n";
        assert_eq!(format!("{}", g), expected);
    }
}
