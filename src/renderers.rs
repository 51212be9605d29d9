use image::{ImageBuffer, Rgb, RgbImage};

use crate::cells::Cell;
use crate::grid::Grid;

/// The generator's only view of the outside world. Implementations get told
/// whenever a cell's wall or visited state has settled and can draw, record
/// or ignore it; the carved maze is identical either way. A renderer may
/// sleep or pump a UI event loop inside the callback, the core never relies
/// on timing.
pub trait CellRenderer {
    fn cell_changed(&mut self, cell: &Cell);
}

/// Ignores every callback, for headless generation.
pub struct NullRenderer;

impl CellRenderer for NullRenderer {
    fn cell_changed(&mut self, _: &Cell) {}
}

const WALL_COLOUR: [u8; 3] = [0x00, 0x00, 0x00];
const BACKGROUND_COLOUR: [u8; 3] = [0xff, 0xff, 0xff];

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RenderOptions {
    cell_side_pixels_length: u8,
}

impl RenderOptions {
    pub fn cell_side_pixels_length(&self) -> u8 {
        self.cell_side_pixels_length
    }
}

#[derive(Debug)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder { options: RenderOptions { cell_side_pixels_length: 10 } }
    }

    pub fn cell_side_pixels_length(mut self, pixels: u8) -> RenderOptionsBuilder {
        self.options.cell_side_pixels_length = pixels;
        self
    }

    pub fn build(self) -> RenderOptions {
        self.options
    }
}

/// Draw the grid's walls into an RGB image, white background and black wall
/// lines. Every cell draws the sides its wall flags say are present; the
/// pairing invariant means shared walls are simply drawn from both sides.
pub fn render_image(grid: &Grid, options: &RenderOptions) -> RgbImage {
    let cell_size = u32::from(options.cell_side_pixels_length());
    // one extra pixel so the right and bottom wall lines land inside the image
    let image_width = cell_size * grid.columns() as u32 + 1;
    let image_height = cell_size * grid.rows() as u32 + 1;
    let mut image =
        ImageBuffer::from_pixel(image_width, image_height, Rgb { data: BACKGROUND_COLOUR });

    for coord in grid.iter() {
        let cell = grid.cell(coord).expect("iteration stays in bounds");

        let x1 = coord.col * cell_size;
        let y1 = coord.row * cell_size;
        let x2 = x1 + cell_size;
        let y2 = y1 + cell_size;

        if cell.has_top_wall() {
            horizontal_line(&mut image, x1, x2, y1);
        }
        if cell.has_bottom_wall() {
            horizontal_line(&mut image, x1, x2, y2);
        }
        if cell.has_left_wall() {
            vertical_line(&mut image, y1, y2, x1);
        }
        if cell.has_right_wall() {
            vertical_line(&mut image, y1, y2, x2);
        }
    }

    image
}

fn horizontal_line(image: &mut RgbImage, x1: u32, x2: u32, y: u32) {
    for x in x1..(x2 + 1) {
        image.put_pixel(x, y, Rgb { data: WALL_COLOUR });
    }
}

fn vertical_line(image: &mut RgbImage, y1: u32, y2: u32, x: u32) {
    for y in y1..(y2 + 1) {
        image.put_pixel(x, y, Rgb { data: WALL_COLOUR });
    }
}
