use crate::*;

/// Partition of an image into square blocks anchored at (0, 0); the last
/// column and row of blocks are clipped to the image's edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    block_size: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32, block_size: u32) -> Result<Self, PixelateError> {
        if width == 0 || height == 0 {
            return Err(PixelateError::invalid(format!(
                "image must not be empty (got {}x{})",
                width, height
            )));
        }

        if block_size == 0 {
            return Err(PixelateError::invalid("block size must be at least 1"));
        }

        Ok(Self {
            width,
            height,
            block_size,
        })
    }

    pub fn for_image(img: &RgbaImage, block_size: u32) -> Result<Self, PixelateError> {
        Self::new(img.width(), img.height(), block_size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn xblocks(&self) -> u32 {
        self.width.div_ceil(self.block_size)
    }

    pub fn yblocks(&self) -> u32 {
        self.height.div_ceil(self.block_size)
    }

    pub fn len(&self) -> usize {
        (self.xblocks() as usize) * (self.yblocks() as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn block_x0(&self, bx: u32) -> u32 {
        bx * self.block_size
    }

    pub fn block_x1(&self, bx: u32) -> u32 {
        self.block_x0(bx)
            .saturating_add(self.block_size)
            .min(self.width)
    }

    pub fn block_y0(&self, by: u32) -> u32 {
        by * self.block_size
    }

    pub fn block_y1(&self, by: u32) -> u32 {
        self.block_y0(by)
            .saturating_add(self.block_size)
            .min(self.height)
    }

    /// Coordinates `(bx, by)` of all blocks, row by row.
    pub fn blocks(&self) -> impl Iterator<Item = (u32, u32)> {
        let (xblocks, yblocks) = (self.xblocks(), self.yblocks());

        (0..yblocks).flat_map(move |by| (0..xblocks).map(move |bx| (bx, by)))
    }
}
