use chrono::NaiveDate;
use serde::Deserialize;

/// What kind of media an APOD entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
            MediaType::Other => write!(f, "other media"),
        }
    }
}

/// One Astronomy Picture of the Day entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Apod {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub url: Option<String>,
    /// Full resolution version of `url`, only present for images
    #[serde(default)]
    pub hdurl: Option<String>,
    /// Still frame for video entries, when thumbnails were requested
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl Apod {
    /// The best still image for this entry: the HD image if there is one, then the regular
    /// image, then a video's thumbnail
    pub fn image_url(&self) -> Option<&str> {
        match self.media_type {
            MediaType::Image => self.hdurl.as_deref().or(self.url.as_deref()),
            _ => self.thumbnail_url.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ManifestResponse {
    pub photo_manifest: PhotoManifest,
}

/// Summary of everything a rover has photographed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotoManifest {
    pub name: String,
    pub landing_date: NaiveDate,
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,
    pub status: String,
    /// The most recent sol with photos
    pub max_sol: u32,
    pub max_date: NaiveDate,
    pub total_photos: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PhotosResponse {
    #[serde(default)]
    pub photos: Vec<RoverPhoto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoverPhoto {
    pub id: u64,
    pub sol: u32,
    pub img_src: String,
    pub earth_date: NaiveDate,
    pub camera: Camera,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Camera {
    /// Short camera code, e.g. `MCZ_LEFT`
    pub name: String,
    #[serde(default)]
    pub full_name: String,
}
