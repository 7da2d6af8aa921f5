//! Colour values of the diffuse map

use serde::{Deserialize, Serialize};

/// Upper end of the hue band, in degrees; heights map onto `0..=HUE_BAND_DEGREES`
pub const HUE_BAND_DEGREES: f64 = 230.0;

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an HSB triple to RGB.
    ///
    /// `hue` is a fraction of the full colour wheel (its integer part is ignored),
    /// `saturation` and `brightness` lie in `[0, 1]`.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        let channel = |v: f64| (v * 255.0 + 0.5) as u8;

        if saturation == 0.0 {
            let v = channel(brightness);
            return Self::new(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as u8 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::new(channel(r), channel(g), channel(b))
    }

    /// RGBA bytes with full opacity
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// RGBA bytes written for texels no triangle contributes to
pub const TRANSPARENT: [u8; 4] = [255, 255, 255, 0];

/// Hue fraction for a height inside a cube of edge `cube_size`.
///
/// Height 0 maps to red (0 degrees), height `cube_size` to `HUE_BAND_DEGREES`.
/// Heights outside the cube, such as interpolation round-off just below the floor,
/// are clamped onto the band ends.
pub fn height_to_hue(height: f64, cube_size: f64) -> f64 {
    (height / cube_size).clamp(0.0, 1.0) * (HUE_BAND_DEGREES / 360.0)
}

/// Fully saturated, fully bright colour for a height
pub fn height_color(height: f64, cube_size: f64) -> Rgb {
    Rgb::from_hsb(height_to_hue(height, cube_size), 1.0, 1.0)
}
