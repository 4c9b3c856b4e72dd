use crate::*;

/// Image reduced to one color per block of its grid, for callers that need
/// to inspect the blocks themselves; [`pixelate`] renders without it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mosaic {
    grid: Grid,
    blocks: Vec<Block>,
}

impl Mosaic {
    pub fn new(img: &RgbaImage, block_size: u32) -> Result<Self, PixelateError> {
        let grid = Grid::for_image(img, block_size)?;

        let blocks = grid
            .blocks()
            .map(|(bx, by)| Block::sample(&grid, img, bx, by))
            .collect();

        Ok(Self { grid, blocks })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn block(&self, bx: u32, by: u32) -> Option<&Block> {
        if bx >= self.grid.xblocks() || by >= self.grid.yblocks() {
            return None;
        }

        self.blocks
            .get((by as usize) * (self.grid.xblocks() as usize) + (bx as usize))
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter()
    }

    pub fn render(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.grid.width(), self.grid.height());

        for block in &self.blocks {
            block.fill(&mut out);
        }

        out
    }
}
