//! Fixed-geometry composition of the wallpaper.
//!
//! The left half holds the picture of the day, centred at the top, with its explanation
//! wrapped into the space underneath. The right half holds the rover photos (one large
//! photo, or a grid) with two caption lines under them.

use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::font::Font;
use crate::image::Image;
use crate::layout::{centre_offset, grid_shape, wrap_and_render, TextBoxStyle};
use crate::rect::Rect;
use crate::rover::RoverLayout;
use crate::units::Px;
use crate::WallpaperError;

/// The already-downloaded material that goes onto the wallpaper
#[derive(Debug, Clone)]
pub struct WallpaperContent {
    pub apod: Image,
    pub explanation: String,
    pub rover_photos: Vec<Image>,
    pub captions: [String; 2],
}

impl LayoutConfig {
    fn width(&self) -> u32 {
        self.wallpaper_size.0
    }

    fn height(&self) -> u32 {
        self.wallpaper_size.1
    }

    fn left_width(&self) -> u32 {
        self.width() / 2
    }

    fn right_width(&self) -> u32 {
        self.width() - self.left_width()
    }

    /// The largest size the picture of the day may be shown at
    pub fn apod_bounds(&self) -> (u32, u32) {
        (
            self.left_width().saturating_sub(2 * self.padding),
            self.height()
                .saturating_sub(2 * self.padding + self.apod_text_reserve),
        )
    }

    /// Top-left corner of the picture of the day, given its final size
    pub fn apod_position(&self, size: (u32, u32)) -> (i32, i32) {
        (centre_offset(self.left_width(), size.0), self.padding as i32)
    }

    /// The box the explanation is wrapped into, under a picture of the day `apod_height` tall
    pub fn explanation_box(&self, apod_height: u32) -> Rect {
        let padding = self.padding;
        Rect::new(
            padding + self.explanation_indent,
            padding + apod_height + self.apod_text_gap,
            self.left_width().saturating_sub(padding),
            self.height().saturating_sub(padding),
        )
    }

    /// The largest size a single rover photo may be shown at
    pub fn rover_bounds(&self) -> (u32, u32) {
        (
            self.right_width().saturating_sub(3 * self.padding),
            self.height().saturating_sub(3 * self.padding),
        )
    }

    /// Top-left corner of a single rover photo, given its final size
    pub fn rover_position(&self, size: (u32, u32)) -> (i32, i32) {
        (
            self.left_width() as i32 + centre_offset(self.right_width(), size.0) - self.rover_nudge,
            centre_offset(self.height(), size.1),
        )
    }

    /// Bottom edge of the space the rover photos may take up, above the caption reserve
    pub fn photo_area_bottom(&self) -> i32 {
        let (area_height, outer) = self.photo_area_height();
        centre_offset(outer, area_height) + area_height as i32
    }

    /// Height of the photo area and of the span it is centred in
    fn photo_area_height(&self) -> (u32, u32) {
        (
            self.height()
                .saturating_sub(3 * self.padding + self.caption_reserve),
            self.height().saturating_sub(self.caption_reserve),
        )
    }

    /// Cells of a grid of `count` photos, `columns` wide, left to right then top to bottom
    pub fn grid_cells(&self, count: usize, columns: usize) -> Vec<Rect> {
        let (columns, rows) = grid_shape(count, columns);
        if rows == 0 {
            return Vec::new();
        }

        let area_width = self.right_width().saturating_sub(3 * self.padding);
        let (area_height, outer) = self.photo_area_height();
        let gap = self.grid_gap;
        let cell_width = area_width.saturating_sub(gap * (columns as u32 - 1)) / columns as u32;
        let cell_height = area_height.saturating_sub(gap * (rows as u32 - 1)) / rows as u32;

        let x0 = self.left_width() as i32 + centre_offset(self.right_width(), area_width)
            - self.rover_nudge;
        let y0 = centre_offset(outer, area_height);

        (0..count)
            .map(|i| {
                let (column, row) = ((i % columns) as u32, (i / columns) as u32);
                let x = x0 + (column * (cell_width + gap)) as i32;
                let y = y0 + (row * (cell_height + gap)) as i32;
                Rect::new(x, y, x + cell_width as i32, y + cell_height as i32)
            })
            .collect()
    }

    /// The boxes the two caption lines go in, given where the rover photos end
    pub fn caption_boxes(&self, photos_bottom: i32) -> [Rect; 2] {
        let x0 = self.left_width() + self.padding;
        let x1 = self.width().saturating_sub(self.padding);
        let y1 = self.height().saturating_sub(self.padding);
        let (first, second) = self.caption_offsets;
        [
            Rect::new(x0, photos_bottom + first as i32, x1, y1),
            Rect::new(x0, photos_bottom + second as i32, x1, y1),
        ]
    }
}

/// Lay the content out on a fresh canvas
pub fn compose_wallpaper(
    layout: &LayoutConfig,
    font: &Font,
    content: WallpaperContent,
    arrangement: RoverLayout,
) -> Result<Canvas, WallpaperError> {
    let (width, height) = layout.wallpaper_size;
    let mut canvas = Canvas::new(width, height, layout.background)?;
    let style = TextBoxStyle {
        padding: Px::from(layout.padding),
        line_spacing: layout.line_spacing,
        colour: layout.text_colour,
    };

    // left: picture of the day and its explanation
    let apod = content.apod.thumbnail(layout.apod_bounds());
    let (apod_x, apod_y) = layout.apod_position(apod.size());
    canvas.paste(&apod, apod_x, apod_y)?;

    let small = font.sized(layout.font_sizes.small);
    let explanation_box = layout.explanation_box(apod.height);
    let lines = wrap_and_render(&mut canvas, &content.explanation, &small, explanation_box, &style)?;
    log::debug!("explanation drawn in {lines} lines");

    // right: rover photos and captions
    let photos_bottom = match arrangement {
        RoverLayout::Single => {
            let photo = content
                .rover_photos
                .into_iter()
                .next()
                .map(|photo| photo.thumbnail(layout.rover_bounds()));
            match photo {
                Some(photo) => {
                    let (x, y) = layout.rover_position(photo.size());
                    canvas.paste(&photo, x, y)?;
                    y + photo.height as i32
                }
                None => layout.photo_area_bottom(),
            }
        }
        RoverLayout::Grid {
            columns,
            max_photos,
        } => {
            let photos: Vec<Image> = content.rover_photos.into_iter().take(max_photos).collect();
            let cells = layout.grid_cells(photos.len(), columns);
            let bottom = cells
                .iter()
                .map(|cell| cell.y1.round())
                .max()
                .unwrap_or_else(|| layout.photo_area_bottom());
            for (photo, cell) in photos.into_iter().zip(cells) {
                let (cell_width, cell_height) = (cell.width().round() as u32, cell.height().round() as u32);
                let photo = photo.thumbnail((cell_width, cell_height));
                let x = cell.x0.round() + centre_offset(cell_width, photo.width);
                let y = cell.y0.round() + centre_offset(cell_height, photo.height);
                canvas.paste(&photo, x, y)?;
            }
            bottom
        }
    };

    let medium = font.sized(layout.font_sizes.medium);
    for (caption, bbox) in content.captions.iter().zip(layout.caption_boxes(photos_bottom)) {
        wrap_and_render(&mut canvas, caption, &medium, bbox, &style)?;
    }

    Ok(canvas)
}
