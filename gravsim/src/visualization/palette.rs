//! Speed classifier shared by every variant's renderer, plus the radial
//! star tints the galaxy paints with instead.

use rand::Rng;

/// Color bucket a particle falls into by speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    HotWhite,    // speed > 220
    YellowWhite, // speed > 150
    Orange,      // speed > 100
    DeepRed,     // everything slower
}

pub const HOT_WHITE_ABOVE: f64 = 220.0;
pub const YELLOW_WHITE_ABOVE: f64 = 150.0;
pub const ORANGE_ABOVE: f64 = 100.0;

/// Alpha of primary and secondary (lensed) images
pub const PRIMARY_ALPHA: u8 = 255;
pub const SECONDARY_ALPHA: u8 = 100;

impl ColorBucket {
    pub fn classify(speed: f64) -> Self {
        if speed > HOT_WHITE_ABOVE {
            ColorBucket::HotWhite
        } else if speed > YELLOW_WHITE_ABOVE {
            ColorBucket::YellowWhite
        } else if speed > ORANGE_ABOVE {
            ColorBucket::Orange
        } else {
            ColorBucket::DeepRed
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ColorBucket::HotWhite => [220, 240, 255],
            ColorBucket::YellowWhite => [255, 230, 180],
            ColorBucket::Orange => [255, 150, 50],
            ColorBucket::DeepRed => [180, 60, 30],
        }
    }

    /// RGBA, dimmed for secondary images
    pub fn rgba(&self, is_secondary: bool) -> [u8; 4] {
        let [r, g, b] = self.rgb();
        let a = if is_secondary { SECONDARY_ALPHA } else { PRIMARY_ALPHA };
        [r, g, b, a]
    }
}

/// Radial color class of a galaxy star, fixed when the star is spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarClass {
    BlueWhite, // core, r / r_max < 0.2
    Yellowish, // < 0.5
    RedOrange, // < 0.8
    Purple,    // outer rim
}

impl StarClass {
    /// Class for a star at `ratio = r / r_max`
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 0.2 {
            StarClass::BlueWhite
        } else if ratio < 0.5 {
            StarClass::Yellowish
        } else if ratio < 0.8 {
            StarClass::RedOrange
        } else {
            StarClass::Purple
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            StarClass::BlueWhite => [200, 220, 255],
            StarClass::Yellowish => [255, 200, 100],
            StarClass::RedOrange => [255, 100, 50],
            StarClass::Purple => [150, 50, 150],
        }
    }
}

/// Exclusive upper bound of the random brightness drop
pub const MAX_BRIGHTNESS_DROP: u8 = 50;

/// A galaxy star's color: its radial class dimmed by a per-star drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarTint {
    pub class: StarClass,
    pub brightness_drop: u8, // in [0, MAX_BRIGHTNESS_DROP)
}

impl StarTint {
    pub fn sample<R: Rng + ?Sized>(ratio: f64, rng: &mut R) -> Self {
        Self {
            class: StarClass::from_ratio(ratio),
            brightness_drop: rng.gen_range(0..MAX_BRIGHTNESS_DROP),
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.class.rgb().map(|c| c.saturating_sub(self.brightness_drop))
    }
}
