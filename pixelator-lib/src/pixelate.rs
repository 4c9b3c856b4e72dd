use crate::*;

/// Pixelates `source` by splitting it into `block_size`×`block_size` blocks
/// and painting each block with the exact color of its top-left pixel.
///
/// Colors are sampled, not averaged: alpha included, every output pixel is
/// a copy of some source pixel. Blocks along the right and bottom edges are
/// clipped to the image.
///
/// Fails with [`PixelateError::InvalidInput`] when `source` has no pixels or
/// `block_size` is zero.
pub fn pixelate(source: &RgbaImage, block_size: u32) -> Result<RgbaImage, PixelateError> {
    let grid = Grid::for_image(source, block_size)?;
    let mut out = RgbaImage::new(grid.width(), grid.height());

    for (bx, by) in grid.blocks() {
        Block::sample(&grid, source, bx, by).fill(&mut out);
    }

    Ok(out)
}

/// Same as [`pixelate`], with the block size resolved from `params` against
/// the source's width.
pub fn pixelate_with(source: &RgbaImage, params: &Params) -> Result<RgbaImage, PixelateError> {
    pixelate(source, params.block_size_for(source.width()))
}
