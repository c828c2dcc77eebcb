//! Layout utilities for positioning text and images on the wallpaper.
//!
//! Text is wrapped word by word into a box of fixed width and then stacked from the top
//! of the box down. Text that runs out of vertical room is dropped rather than spilling
//! out of the box. Images are shrunk to fit their slot while keeping their aspect ratio.
//!
//! # Layout Functions
//!
//! - [`wrap_lines`](crate::layout::wrap_lines) - greedy word wrapping to a width
//! - [`layout_text_box`](crate::layout::layout_text_box) - wrapping plus vertical placement, without drawing
//! - [`wrap_and_render`](crate::layout::wrap_and_render) - lays out and draws onto a [`TextSurface`](crate::layout::TextSurface)
//! - [`fit_within`](crate::layout::fit_within) - thumbnail sizing for images
//!
//! # Example
//!
//! ```
//! use nasa_wallpaper::{Px, Rect, TextMeasure, TextMetrics, WallpaperError};
//! use nasa_wallpaper::layout::{layout_text_box, TextBoxStyle};
//!
//! // a monospaced stand-in for a real font
//! struct Mono;
//! impl TextMeasure for Mono {
//!     fn measure(&self, text: &str) -> Result<TextMetrics, WallpaperError> {
//!         Ok(TextMetrics {
//!             width: Px(text.chars().count() as f32 * 10.0),
//!             height: Px(20.0),
//!         })
//!     }
//! }
//!
//! let bbox = Rect::new(0, 0, 120, 60);
//! let style = TextBoxStyle { padding: Px(10.0), ..Default::default() };
//! let layout = layout_text_box("Hello, red planet and friends", &Mono, bbox, &style)
//!     .expect("mono never fails");
//!
//! assert_eq!(layout.lines[0].text, "Hello, red");
//! assert_eq!(layout.lines.len(), 2);
//! assert!(layout.truncated);
//! ```

mod fit;
mod text;

pub use fit::*;
pub use text::*;
