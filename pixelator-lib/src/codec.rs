use crate::*;
use image::ImageOutputFormat;
use std::io::Cursor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Bmp,
    Tiff,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
        }
    }

    fn image_format(self) -> ImageOutputFormat {
        match self {
            OutputFormat::Png => ImageOutputFormat::Png,
            OutputFormat::Bmp => ImageOutputFormat::Bmp,
            OutputFormat::Tiff => ImageOutputFormat::Tiff,
        }
    }
}

/// Decodes an image in any format `image` understands into RGBA8.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)
        .context("Couldn't decode image")?
        .to_rgba8();

    ensure!(
        img.width() > 0 && img.height() > 0,
        "Image has no pixels ({}x{})",
        img.width(),
        img.height()
    );

    trace!("Decoded {}x{} image", img.width(), img.height());

    Ok(img)
}

pub fn encode(img: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());

    img.write_to(&mut buffer, format.image_format())
        .with_context(|| format!("Couldn't encode image as {}", format.extension()))?;

    Ok(buffer.into_inner())
}
