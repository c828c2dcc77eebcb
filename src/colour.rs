/// A colour in the sRGB space, with straight (not premultiplied) alpha
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new, fully opaque colour. r, g, and b range from 0 to 255
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour with transparency. All components range from 0 to 255
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }
}

impl From<Colour> for tiny_skia::Color {
    fn from(c: Colour) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::new_rgb(255, 255, 255);
    pub const RED: Colour = Colour::new_rgb(255, 0, 0);
    pub const GREEN: Colour = Colour::new_rgb(0, 255, 0);
    pub const BLUE: Colour = Colour::new_rgb(0, 0, 255);
}
