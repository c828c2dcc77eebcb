//! One complete run: fetch, download, compose, save, and apply.

use crate::compose::{compose_wallpaper, WallpaperContent};
use crate::config::WallpaperConfig;
use crate::desktop::set_desktop_wallpaper;
use crate::font::Font;
use crate::image::Image;
use crate::nasa::{MediaType, NasaClient};
use crate::rover::{MissionClock, RoverLayout};
use crate::store::ImageStore;
use crate::WallpaperError;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Build today's wallpaper and, if configured to, set it as the desktop background.
/// Returns where the wallpaper was saved.
pub fn run(config: &WallpaperConfig) -> Result<PathBuf, WallpaperError> {
    if config.api_key.trim().is_empty() {
        return Err(WallpaperError::MissingApiKey);
    }

    let client = NasaClient::new(config.api_key.trim())?.with_base(&config.api_base);
    let now = chrono::Local::now().naive_local();
    let output = build_wallpaper(config, &client, now)?;

    if config.apply {
        set_desktop_wallpaper(&output)?;
        log::info!("wallpaper applied");
    }
    Ok(output)
}

/// Everything but applying the result, against any client and at any moment
pub fn build_wallpaper(
    config: &WallpaperConfig,
    client: &NasaClient,
    now: NaiveDateTime,
) -> Result<PathBuf, WallpaperError> {
    let font = Font::load_from_disk(&config.font_path)?;
    let variant = &config.rover;
    let rover = variant.rover;

    let store = ImageStore::new(&config.images_dir);
    store.reset()?;

    let manifest = client.manifest(rover)?;
    log::info!(
        "{} landed {}, latest sol {} ({} photos in total)",
        rover,
        manifest.landing_date,
        manifest.max_sol,
        manifest.total_photos
    );

    let apod = client.apod()?;
    log::info!("picture of the day: {} ({})", apod.title, apod.date);
    if apod.media_type != MediaType::Image {
        log::warn!(
            "the picture of the day is {}, using its thumbnail instead",
            apod.media_type
        );
    }
    let apod_url = apod
        .image_url()
        .ok_or(WallpaperError::NoApodImage {
            date: apod.date,
            media_type: apod.media_type,
        })?
        .to_string();

    let (sol, photos) = client.latest_photos(rover, manifest.max_sol, &variant.camera)?;
    if sol != manifest.max_sol {
        log::info!(
            "no {} photos on sol {}, using sol {sol}",
            variant.camera,
            manifest.max_sol
        );
    }

    let wanted = match variant.layout {
        RoverLayout::Single => photos.len(),
        RoverLayout::Grid { max_photos, .. } => max_photos,
    };
    for (index, photo) in photos.iter().take(wanted).enumerate() {
        match client.download(&photo.img_src) {
            Ok(bytes) => {
                store.save_rover_photo(manifest.max_sol, &variant.camera, index + 1, &bytes)?;
            }
            Err(e) => log::warn!("skipping rover photo {}: {e}", photo.id),
        }
    }

    let apod_path = store.save_apod(apod.date, &client.download(&apod_url)?)?;

    let rover_photos = match variant.layout {
        RoverLayout::Single => vec![Image::new_from_disk(store.largest_rover_photo()?)?],
        RoverLayout::Grid { max_photos, .. } => {
            let paths = store.rover_photos()?;
            if paths.is_empty() {
                return Err(WallpaperError::NoImages(store.rover_dir()));
            }
            paths
                .iter()
                .take(max_photos)
                .map(Image::new_from_disk)
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let clock = MissionClock::new(manifest.landing_date);
    let content = WallpaperContent {
        apod: Image::new_from_disk(&apod_path)?,
        explanation: apod.explanation,
        rover_photos,
        captions: variant.captions(manifest.max_sol, &clock, now),
    };

    let canvas = compose_wallpaper(&config.layout, &font, content, variant.layout)?;
    canvas.save(&config.output)?;
    log::info!("wallpaper saved to {}", config.output.display());

    Ok(config.output.clone())
}
