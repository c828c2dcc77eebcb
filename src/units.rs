use derive_more::{Add, AddAssign, Sub, SubAssign};

/// A length in device pixels on the wallpaper canvas. Fractional values are
/// allowed so that font metrics keep their precision until they are drawn.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
)]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Round to the nearest whole pixel, for placing things on the pixel grid
    pub fn round(self) -> i32 {
        self.0.round() as i32
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value as f32)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value as f32)
    }
}

impl std::ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Self::Output {
        Px(self.0 * rhs)
    }
}
