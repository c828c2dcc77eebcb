//! `nasa-wallpaper`: combine NASA's picture of the day with the latest Mars rover photos into
//! a desktop wallpaper.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use nasa_wallpaper::{Rover, RoverVariant, WallpaperConfig};

#[derive(Parser)]
#[command(version, about = "Build a desktop wallpaper from NASA's picture of the day and Mars rover photos")]
struct Cli {
    /// NASA API key (falls back to the API_KEY environment variable)
    #[arg(long, env = "NASA_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Rover to show photos from: "perseverance" or "curiosity"
    #[arg(long, default_value = "perseverance", value_parser = parse_rover)]
    rover: Rover,

    /// Camera code to filter rover photos by, instead of the rover's default
    #[arg(long, value_name = "CODE")]
    camera: Option<String>,

    /// TrueType or OpenType font for all text
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Wallpaper width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Wallpaper height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Where to write the finished wallpaper
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Working directory for downloaded images (cleared on every run)
    #[arg(long, value_name = "DIR")]
    images_dir: Option<PathBuf>,

    /// Base URL of the NASA API
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Only save the wallpaper, don't set it as the desktop background
    #[arg(long)]
    no_apply: bool,
}

fn parse_rover(s: &str) -> Result<Rover, String> {
    s.parse()
}

impl Cli {
    /// `fallback_api_key` is used when no key was given on the command line or in
    /// `NASA_API_KEY`
    fn into_config(self, fallback_api_key: Option<String>) -> WallpaperConfig {
        let mut config = WallpaperConfig::default();

        config.api_key = self.api_key.or(fallback_api_key).unwrap_or_default();
        config.rover = RoverVariant::for_rover(self.rover);
        if let Some(camera) = self.camera {
            config.rover.camera = camera;
        }
        if let Some(font) = self.font {
            config.font_path = font;
        }
        if let Some(width) = self.width {
            config.layout.wallpaper_size.0 = width;
        }
        if let Some(height) = self.height {
            config.layout.wallpaper_size.1 = height;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(images_dir) = self.images_dir {
            config.images_dir = images_dir;
        }
        if let Some(api_base) = self.api_base {
            config.api_base = api_base;
        }
        config.apply = !self.no_apply;

        config
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config(std::env::var("API_KEY").ok());
    log::info!(
        "building a {}x{} wallpaper with {} {} photos",
        config.layout.wallpaper_size.0,
        config.layout.wallpaper_size.1,
        config.rover.rover,
        config.rover.camera
    );

    match nasa_wallpaper::run(&config) {
        Ok(path) => log::info!("done: {}", path.display()),
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}
