use crate::*;

/// One block of a [`Grid`], flattened to the color of its top-left pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    color: [u8; 4],
}

impl Block {
    /// `img` must have the grid's dimensions.
    pub(crate) fn sample(grid: &Grid, img: &RgbaImage, bx: u32, by: u32) -> Self {
        debug_assert_eq!((grid.width(), grid.height()), img.dimensions());

        let (x0, y0) = (grid.block_x0(bx), grid.block_y0(by));
        let offset = pixel_offset(grid.width(), x0, y0);

        let mut color = [0; 4];
        color.copy_from_slice(&img.as_raw()[offset..offset + 4]);

        Self {
            x0,
            y0,
            x1: grid.block_x1(bx),
            y1: grid.block_y1(by),
            color,
        }
    }

    pub fn color(&self) -> [u8; 4] {
        self.color
    }

    pub fn origin(&self) -> (u32, u32) {
        (self.x0, self.y0)
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// `out` must have the dimensions of the grid this block was sampled from.
    pub(crate) fn fill(&self, out: &mut RgbaImage) {
        let width = out.width();
        let buf: &mut [u8] = &mut *out;

        for y in self.y0..self.y1 {
            let row = pixel_offset(width, self.x0, y)..pixel_offset(width, self.x1, y);

            for pixel in buf[row].chunks_exact_mut(4) {
                pixel.copy_from_slice(&self.color);
            }
        }
    }
}

fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    ((y as usize) * (width as usize) + (x as usize)) * 4
}
