//! Pixelation of RGBA raster images: every square block of pixels is flattened
//! to the color of its top-left pixel.

mod block;
mod codec;
mod error;
mod grid;
mod mosaic;
mod params;
mod pixelate;
mod source;
mod stats;

pub use ::image::{Rgba, RgbaImage};
use anyhow::{ensure, Context, Result};
use log::{debug, trace};

pub use self::{
    block::*, codec::*, error::*, grid::*, mosaic::*, params::*, pixelate::*, source::*, stats::*,
};

/// Pixelates a series of images with the same parameters, keeping track of
/// what it has processed.
#[derive(Debug)]
pub struct Pixelator<'a> {
    params: &'a Params,
    stats: Stats,
}

impl<'a> Pixelator<'a> {
    pub fn new(params: &'a Params) -> Self {
        Self {
            params,
            stats: Default::default(),
        }
    }

    pub fn add(&mut self, img: &RgbaImage) -> Result<RgbaImage, PixelateError> {
        let block_size = self.params.block_size_for(img.width());
        let grid = Grid::for_image(img, block_size)?;

        debug!(
            "Pixelating {}x{} image with {}px blocks ({}x{} grid)",
            img.width(),
            img.height(),
            block_size,
            grid.xblocks(),
            grid.yblocks(),
        );

        let out = pixelate(img, block_size)?;

        self.stats.images += 1;
        self.stats.blocks += grid.len();
        self.stats.pixels += (img.width() as usize) * (img.height() as usize);
        *self.stats.block_sizes.entry(block_size).or_default() += 1;

        Ok(out)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn finish(self) -> Stats {
        self.stats
    }
}
