mod colour;
pub use colour::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Utility functions and structures to lay out text and images on the wallpaper
pub mod layout;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

mod canvas;
pub use canvas::*;

/// Clients and response types for the NASA open APIs
pub mod nasa;

mod rover;
pub use rover::*;

mod store;
pub use store::*;

mod config;
pub use config::*;

mod compose;
pub use compose::*;

mod desktop;
pub use desktop::*;

mod app;
pub use app::*;
