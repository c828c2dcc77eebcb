use crate::colour::{colours, Colour};
use crate::nasa::DEFAULT_API_BASE;
use crate::rover::RoverVariant;
use crate::units::Px;
use std::path::PathBuf;

/// Pixel sizes of the fonts used on the wallpaper
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// The APOD explanation
    pub small: Px,
    /// The rover captions
    pub medium: Px,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            small: Px(20.0),
            medium: Px(25.0),
        }
    }
}

/// Geometry and colours of the wallpaper. All distances are in pixels.
///
/// The wallpaper is split into two halves: the picture of the day with its explanation on
/// the left, and the rover photos with their captions on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub wallpaper_size: (u32, u32),
    /// Margin kept around images and inside text boxes
    pub padding: u32,
    pub background: Colour,
    pub text_colour: Colour,
    pub line_spacing: Px,
    /// Height kept free under the picture of the day for its explanation
    pub apod_text_reserve: u32,
    /// Gap between the picture of the day and its explanation
    pub apod_text_gap: u32,
    /// Extra left indent of the explanation box
    pub explanation_indent: u32,
    /// How far the rover photo is shifted left of centre
    pub rover_nudge: i32,
    /// Offsets below the rover photos of the first and second caption lines
    pub caption_offsets: (u32, u32),
    /// Height kept free under a photo grid for the captions
    pub caption_reserve: u32,
    /// Gap between photos in a grid
    pub grid_gap: u32,
    pub font_sizes: FontSizes,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            wallpaper_size: (1920, 1080),
            padding: 30,
            background: colours::BLACK,
            text_colour: colours::WHITE,
            line_spacing: Px(4.0),
            apod_text_reserve: 350,
            apod_text_gap: 20,
            explanation_indent: 50,
            rover_nudge: 80,
            caption_offsets: (10, 50),
            caption_reserve: 100,
            grid_gap: 15,
            font_sizes: FontSizes::default(),
        }
    }
}

/// Everything one run needs to know, gathered in one place
#[derive(Debug, Clone)]
pub struct WallpaperConfig {
    pub api_key: String,
    pub api_base: String,
    pub rover: RoverVariant,
    /// TrueType or OpenType font used for all text
    pub font_path: PathBuf,
    pub layout: LayoutConfig,
    /// Working directory for downloaded images
    pub images_dir: PathBuf,
    /// Where the finished wallpaper is written
    pub output: PathBuf,
    /// Whether to set the finished image as the desktop background
    pub apply: bool,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        WallpaperConfig {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            rover: RoverVariant::default(),
            font_path: PathBuf::from("arial.ttf"),
            layout: LayoutConfig::default(),
            images_dir: PathBuf::from("images"),
            output: PathBuf::from("final_wallpaper.jpg"),
            apply: true,
        }
    }
}
