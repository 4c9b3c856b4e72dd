use crate::*;

/// How large the blocks of a pixelated image should be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockSize {
    /// Every image uses the same edge length, in pixels.
    Fixed(u32),

    /// Edge length is derived from the image's width, so that roughly
    /// `columns` blocks span the image horizontally.
    Auto { columns: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub(crate) block_size: BlockSize,
}

impl Params {
    pub const DEFAULT_COLUMNS: u32 = 64;

    pub fn new(block_size: BlockSize) -> Result<Self, PixelateError> {
        match block_size {
            BlockSize::Fixed(0) => {
                return Err(PixelateError::invalid("block size must be at least 1"));
            }

            BlockSize::Auto { columns: 0 } => {
                return Err(PixelateError::invalid("column count must be at least 1"));
            }

            _ => (),
        }

        Ok(Self { block_size })
    }

    pub fn fixed(block_size: u32) -> Result<Self, PixelateError> {
        Self::new(BlockSize::Fixed(block_size))
    }

    pub fn auto() -> Self {
        Self {
            block_size: BlockSize::Auto {
                columns: Self::DEFAULT_COLUMNS,
            },
        }
    }

    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    /// Resolves the block edge length for an image of given width; never
    /// returns zero.
    pub fn block_size_for(&self, width: u32) -> u32 {
        match self.block_size {
            BlockSize::Fixed(size) => size,
            BlockSize::Auto { columns } => width.div_ceil(columns).max(1),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::auto()
    }
}
