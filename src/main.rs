use docopt::Docopt;
use serde_derive::Deserialize;
use rand::{SeedableRng, XorShiftRng};
use mazegen::{
    cells::GridCoordinate,
    generators,
    grid::Grid,
    renderers::{self, NullRenderer, RenderOptionsBuilder},
    topology,
    units::{ColumnsCount, RowsCount},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
    path::Path,
};

const USAGE: &str = "Mazegen

Usage:
    mazegen_driver -h | --help
    mazegen_driver carve [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--check] [text [--text-out=<path>]] [image [--image-out=<path>] [--cell-pixels=<n>]]

Options:
    -h --help            Show this screen.
    --grid-size=<n>      The grid size is n * n.
    --grid-width=<w>     The grid width in a w*h grid [default: 20].
    --grid-height=<h>    The grid height in a w*h grid [default: 20].
    --seed=<s>           Seed for the random source, for reproducible mazes.
    --check              Verify that the carved maze is a perfect maze.
    --text-out=<path>    Output file path for a textual rendering of the maze.
    --image-out=<path>   Output file path for an image rendering of the maze. Always PNG format [default: maze.png].
    --cell-pixels=<n>    Pixel count to render one cell wall in the maze [default: 10] max 255.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u32>,
    flag_check: bool,
    cmd_carve: bool,
    cmd_text: bool,
    flag_text_out: String,
    cmd_image: bool,
    flag_image_out: String,
    flag_cell_pixels: u8,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            GridFailure(::mazegen::grid::GridError);
            CarveFailure(::mazegen::generators::CarveError);
        }
    }
}
use crate::errors::*;

// World-space size of a cell side handed to the grid; only cell geometry
// reported to renderer callbacks depends on it.
const CELL_SIDE_WORLD_UNITS: f32 = 10.0;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let mut maze_grid = Grid::new(RowsCount(height),
                                  ColumnsCount(width),
                                  CELL_SIDE_WORLD_UNITS,
                                  0.0,
                                  0.0)?;

    let mut rng = match args.flag_seed {
        Some(seed) => XorShiftRng::from_seed(seed_to_rng_state(seed)),
        None => rand::weak_rng(),
    };
    generators::recursive_backtracker(&mut maze_grid,
                                      GridCoordinate::new(0, 0),
                                      &mut rng,
                                      &mut NullRenderer)?;

    if args.flag_check && !topology::is_perfect_maze(&maze_grid) {
        return Err("carved maze failed the perfect maze check".into());
    }

    let do_text_render = args.cmd_text || !args.cmd_image;
    let do_image_render = args.cmd_image;

    if do_text_render {
        if args.flag_text_out.is_empty() {
            println!("{}", maze_grid);
        } else {
            write_text_to_file(&format!("{}", maze_grid), &args.flag_text_out)
                .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        }
    }

    if do_image_render {
        let render_options = RenderOptionsBuilder::new()
            .cell_side_pixels_length(args.flag_cell_pixels)
            .build();
        let image = renderers::render_image(&maze_grid, &render_options);
        image.save(&Path::new(&args.flag_image_out))
            .chain_err(|| format!("Failed to write maze to image file {}", args.flag_image_out))?;
    }

    Ok(())
}

/// Spread one seed word over the four words of xorshift state. The words
/// xor different constants so a seed of zero still leaves the state nonzero,
/// which `from_seed` requires.
fn seed_to_rng_state(seed: u32) -> [u32; 4] {
    [seed ^ 0x193a_6754, seed ^ 0xa8a7_d469, seed ^ 0x9783_0e05, seed ^ 0x113b_a7bb]
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
