use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode, resize, or encode an image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// [reqwest] failed to perform a request
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    /// A response body was not the JSON we expected
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// A date in a response could not be parsed
    Date(#[from] chrono::ParseError),

    #[error("failed to fetch {what}: HTTP {status}")]
    /// The NASA API answered with a non-success status
    Status { what: String, status: u16 },

    #[error("font has no glyph for {0:?} and no replacement glyph")]
    /// Text could not be measured because the font lacks a glyph for it
    MissingGlyph(char),

    #[error("no {camera} images available for {rover} on any sol")]
    /// The rover never returned photos for the configured camera
    NoRoverPhotos { rover: String, camera: String },

    #[error("the picture of the day for {date} ({media_type}) has no still image")]
    /// The APOD entry has nothing that can be drawn, e.g. a video without a thumbnail
    NoApodImage {
        date: chrono::NaiveDate,
        media_type: crate::nasa::MediaType,
    },

    #[error("no downloaded images found in {0}")]
    /// The working directory has no usable images
    NoImages(std::path::PathBuf),

    #[error("no NASA API key given; pass --api-key or set NASA_API_KEY")]
    /// No API key was configured
    MissingApiKey,

    #[error("invalid canvas: {0}")]
    /// A drawing surface could not be created with the requested dimensions
    Canvas(String),

    #[error("setting the desktop wallpaper is not supported on this platform")]
    /// Only Windows can have its wallpaper set
    UnsupportedPlatform,

    #[error("the system refused to set the desktop wallpaper: {0}")]
    /// The platform call to set the wallpaper failed
    SetWallpaper(String),
}
