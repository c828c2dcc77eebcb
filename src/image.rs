use crate::layout::fit_within;
use crate::WallpaperError;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::Path;

/// A decoded raster image, ready to be scaled and pasted onto a [crate::Canvas]
#[derive(Debug, Clone)]
pub struct Image {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
}

impl Image {
    /// Read and decode an image from disk. The format is sniffed from the file contents
    /// rather than trusted from the extension, since NASA serves JPEGs under all sorts of
    /// names.
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, WallpaperError> {
        let data = std::fs::read(path.as_ref())?;
        Self::new_from_memory(&data)
    }

    /// Decode an image from encoded bytes (JPEG, PNG, ...)
    pub fn new_from_memory(data: &[u8]) -> Result<Image, WallpaperError> {
        let format = image::guess_format(data)?;
        let image = image::load_from_memory_with_format(data, format)?;
        Ok(Self::new_raster(image))
    }

    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width();
        let height = image.height();
        Image {
            image,
            width,
            height,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Shrink the image so that it fits inside `bounds`, keeping its aspect ratio. Images
    /// that already fit are returned unchanged; images are never enlarged.
    pub fn thumbnail(self, bounds: (u32, u32)) -> Image {
        let (width, height) = fit_within(self.size(), bounds);
        if (width, height) == self.size() {
            return self;
        }

        log::debug!(
            "resizing image from {}x{} to {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        Self::new_raster(self.image.resize_exact(width, height, FilterType::Lanczos3))
    }
}
