use crate::{Px, WallpaperError};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OutlineBuilder, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts, and are kept in memory in their
/// entirety for as long as the font lives.
///
/// A font has no size of its own; pair it with a size using [Font::sized] to get a
/// handle that can measure text for the layout functions in [crate::layout].
pub struct Font {
    pub face: OwnedFace,
}

/// The rendered extent of a run of text, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Total advance width of the run
    pub width: Px,
    /// Distance from the highest ink to the lowest ink in the run
    pub height: Px,
}

/// Something that can tell how large a run of text will be once rendered
pub trait TextMeasure {
    /// Measure the rendered bounding box of `text`. Measurement is deterministic and has no
    /// side effects; it only fails when the text contains something that cannot be rendered.
    fn measure(&self, text: &str) -> Result<TextMetrics, WallpaperError>;
}

/// A single glyph of a laid out run, positioned relative to the start of the run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    pub id: GlyphId,
    /// Offset of the glyph's origin from the start of the run, along the baseline
    pub x: Px,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, WallpaperError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, WallpaperError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Pair the font with a pixel size
    pub fn sized(&self, size: Px) -> SizedFont<'_> {
        SizedFont { font: self, size }
    }

    pub(crate) fn scaling(&self, size: Px) -> f32 {
        size.0 / self.face().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.face().ascender() as f32)
    }

    /// Feed the outline of a glyph, in font units, to `builder`. Returns false for glyphs
    /// without an outline, such as spaces.
    pub fn outline_glyph(&self, id: GlyphId, builder: &mut dyn OutlineBuilder) -> bool {
        self.face().outline_glyph(id, builder).is_some()
    }

    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.face().glyph_index(ch)
    }

    /// Look up the glyph for a character, falling back to the replacement character and
    /// then to a question mark when the font does not cover it
    fn glyph_or_replacement(&self, ch: char) -> Result<GlyphId, WallpaperError> {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .ok_or(WallpaperError::MissingGlyph(ch))
    }

    /// Lay a run of text out along a single baseline, without any wrapping
    pub fn positioned_glyphs(
        &self,
        text: &str,
        size: Px,
    ) -> Result<Vec<PositionedGlyph>, WallpaperError> {
        let scaling = self.scaling(size);
        let mut x = Px::ZERO;
        let mut glyphs = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let id = self.glyph_or_replacement(ch)?;
            glyphs.push(PositionedGlyph { id, x });
            x += Px(scaling * self.face().glyph_hor_advance(id).unwrap_or_default() as f32);
        }
        Ok(glyphs)
    }

    fn run_width(&self, glyphs: &[PositionedGlyph], size: Px) -> Px {
        glyphs
            .last()
            .map(|last| {
                let advance = self.face().glyph_hor_advance(last.id).unwrap_or_default();
                last.x + Px(self.scaling(size) * advance as f32)
            })
            .unwrap_or_default()
    }

    /// Measure the advance width and the ink height of a run of text
    pub fn measure(&self, text: &str, size: Px) -> Result<TextMetrics, WallpaperError> {
        let glyphs = self.positioned_glyphs(text, size)?;

        // glyphs without outlines (spaces) have no bounding box and don't contribute
        let (top, bottom) = glyphs
            .iter()
            .filter_map(|glyph| self.face().glyph_bounding_box(glyph.id))
            .fold(None, |acc: Option<(i16, i16)>, bbox| match acc {
                None => Some((bbox.y_max, bbox.y_min)),
                Some((top, bottom)) => Some((top.max(bbox.y_max), bottom.min(bbox.y_min))),
            })
            .unwrap_or((0, 0));

        Ok(TextMetrics {
            width: self.run_width(&glyphs, size),
            height: Px(self.scaling(size) * (top as f32 - bottom as f32)),
        })
    }
}

/// A font paired with the pixel size it is rendered at
#[derive(Clone, Copy)]
pub struct SizedFont<'f> {
    pub font: &'f Font,
    pub size: Px,
}

impl SizedFont<'_> {
    pub fn ascent(&self) -> Px {
        self.font.ascent(self.size)
    }
}

impl TextMeasure for SizedFont<'_> {
    fn measure(&self, text: &str) -> Result<TextMetrics, WallpaperError> {
        self.font.measure(text, self.size)
    }
}

impl std::fmt::Debug for SizedFont<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizedFont")
            .field("font", &self.font.name())
            .field("size", &self.size)
            .finish()
    }
}

/// Finds a font installed on the machine running the tests, if there is one
#[cfg(test)]
pub(crate) fn system_font_path() -> Option<&'static Path> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    CANDIDATES
        .iter()
        .map(Path::new)
        .find(|path| Font::load_from_disk(path).is_ok())
}

#[cfg(test)]
pub(crate) fn system_font() -> Option<Font> {
    system_font_path().and_then(|path| Font::load_from_disk(path).ok())
}
