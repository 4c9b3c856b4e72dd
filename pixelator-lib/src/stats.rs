use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub images: usize,
    pub blocks: usize,
    pub pixels: usize,

    /// Number of images processed per block size.
    pub block_sizes: BTreeMap<u32, usize>,
}

impl Stats {
    pub fn merge(mut self, other: Stats) -> Self {
        self.images += other.images;
        self.blocks += other.blocks;
        self.pixels += other.pixels;

        for (block_size, images) in other.block_sizes {
            *self.block_sizes.entry(block_size).or_default() += images;
        }

        self
    }
}
