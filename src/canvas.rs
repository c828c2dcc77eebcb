use crate::colour::Colour;
use crate::font::SizedFont;
use crate::image::Image;
use crate::layout::TextSurface;
use crate::{Px, WallpaperError};
use image::{DynamicImage, RgbaImage};
use owned_ttf_parser::OutlineBuilder;
use std::path::Path;
use tiny_skia::{
    ColorU8, FillRule, IntSize, Paint, Pixmap, PixmapPaint, PremultipliedColorU8, Transform,
};

/// The surface the wallpaper is drawn onto. Images are pasted and text is rasterized into
/// an in-memory RGBA buffer which is only encoded when the canvas is saved.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a canvas of the given size, filled with `background`
    pub fn new(width: u32, height: u32, background: Colour) -> Result<Canvas, WallpaperError> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            WallpaperError::Canvas(format!("{width}x{height} is not a drawable size"))
        })?;
        pixmap.fill(background.into());
        Ok(Canvas { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The raw, premultiplied RGBA bytes of the canvas
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// The colour of a single pixel, or `None` if it lies outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        // tiny-skia only checks the flat index, so x past the row end would wrap around
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Colour::new_rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Paste an image with its top-left corner at (x, y). Whatever falls outside the canvas
    /// is clipped; transparent parts of the image are blended over what's already there.
    pub fn paste(&mut self, image: &Image, x: i32, y: i32) -> Result<(), WallpaperError> {
        let rgba = image.image.to_rgba8();
        let mut data: Vec<u8> = Vec::with_capacity(rgba.as_raw().len());
        for p in rgba.pixels() {
            let c: PremultipliedColorU8 = ColorU8::from_rgba(p[0], p[1], p[2], p[3]).premultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        let size = IntSize::from_wh(image.width, image.height).ok_or_else(|| {
            WallpaperError::Canvas(format!("can't paste an empty {}x{} image", image.width, image.height))
        })?;
        let source = Pixmap::from_vec(data, size)
            .ok_or_else(|| WallpaperError::Canvas("image buffer has the wrong length".into()))?;

        self.pixmap.draw_pixmap(
            x,
            y,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(())
    }

    /// Convert the canvas into a straight-alpha image
    pub fn to_image(&self) -> Result<RgbaImage, WallpaperError> {
        let mut data: Vec<u8> = Vec::with_capacity(self.pixmap.data().len());
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(self.width(), self.height(), data)
            .ok_or_else(|| WallpaperError::Canvas("canvas buffer has the wrong length".into()))
    }

    /// Encode the canvas to disk. The format is picked from the file extension; the alpha
    /// channel is dropped, since wallpapers are opaque.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WallpaperError> {
        let rgb = DynamicImage::ImageRgba8(self.to_image()?).to_rgb8();
        rgb.save(path.as_ref())?;
        Ok(())
    }
}

impl TextSurface<SizedFont<'_>> for Canvas {
    fn draw_text(
        &mut self,
        position: (Px, Px),
        text: &str,
        font: &SizedFont<'_>,
        colour: Colour,
    ) -> Result<(), WallpaperError> {
        let glyphs = font.font.positioned_glyphs(text, font.size)?;
        let baseline = position.1 + font.ascent();

        let mut path = GlyphPath::new(font.font.scaling(font.size));
        for glyph in glyphs {
            path.origin = ((position.0 + glyph.x).0, baseline.0);
            font.font.outline_glyph(glyph.id, &mut path);
        }

        // nothing but whitespace
        let Some(path) = path.builder.finish() else {
            return Ok(());
        };

        let mut paint = Paint::default();
        paint.set_color(colour.into());
        paint.anti_alias = true;

        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

/// Converts glyph outlines in font units into a canvas path, flipping the y axis so that
/// glyphs stand upright on their baseline
struct GlyphPath {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    /// Pen position on the canvas, on the baseline
    origin: (f32, f32),
}

impl GlyphPath {
    fn new(scale: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            origin: (0.0, 0.0),
        }
    }

    fn x(&self, x: f32) -> f32 {
        self.origin.0 + x * self.scale
    }

    fn y(&self, y: f32) -> f32 {
        self.origin.1 - y * self.scale
    }
}

impl OutlineBuilder for GlyphPath {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x(x), self.y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x(x), self.y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.x(x1), self.y(y1), self.x(x), self.y(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x(x1),
            self.y(y1),
            self.x(x2),
            self.y(y2),
            self.x(x),
            self.y(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
