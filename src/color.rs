//! Color types and color model conversions.
//!
//! The rasterizer treats [`Rgba`] as an opaque four-byte value that is only
//! copied into buffer cells. This module builds such values from unit-range
//! RGB, HSV and HSL inputs and formats them as CSS color strings.
//!
//! Unit-range channels are converted to bytes the way a clamped byte array
//! stores them: multiplied by 255, clamped to `[0, 255]`, rounded half to
//! even, with NaN mapping to 0.
//!
//! # References
//!
//! - W3C (2022). *CSS Color Module Level 4*, §7 "HSL Colors".
//! - Smith, A. R. (1978). "Color Gamut Transform Pairs." SIGGRAPH '78.

use std::fmt;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color from unit-range channels (`0.0..=1.0`).
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b), channel(a))
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Format as a CSS `rgba(r,g,b,a)` string with alpha in `[0, 1]`.
    ///
    /// ```
    /// use trueno_raster::color::Rgba;
    ///
    /// assert_eq!(Rgba::RED.to_css_color(), "rgba(255,0,0,1)");
    /// assert_eq!(Rgba::TRANSPARENT.to_css_color(), "rgba(0,0,0,0)");
    /// ```
    #[must_use]
    pub fn to_css_color(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = f64::from(self.a) / 255.0;
        write!(f, "rgba({},{},{},{alpha})", self.r, self.g, self.b)
    }
}

/// Convert a unit-range value to a byte channel.
fn channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v * 255.0).clamp(0.0, 255.0).round_ties_even() as u8
}

/// HSVA color with unit-range components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsva {
    /// Hue (0.0-1.0, one full turn).
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Value (0.0-1.0).
    pub v: f64,
    /// Alpha (0.0-1.0).
    pub a: f64,
}

impl Hsva {
    /// Create a new HSVA color.
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// Create an opaque HSV color (alpha = 1.0).
    #[must_use]
    pub const fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self::new(h, s, v, 1.0)
    }

    /// Convert to RGBA.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let (mut r, mut g, mut b) = (self.v, self.v, self.v);
        let s = self.s;
        if s > 0.0 {
            let h = self.h * 6.0;
            let sector = h.floor();
            let f = h - sector;
            match sector as i64 {
                1 => {
                    r *= 1.0 - s * f;
                    b *= 1.0 - s;
                }
                2 => {
                    r *= 1.0 - s;
                    b *= 1.0 - s * (1.0 - f);
                }
                3 => {
                    r *= 1.0 - s;
                    g *= 1.0 - s * f;
                }
                4 => {
                    r *= 1.0 - s * (1.0 - f);
                    g *= 1.0 - s;
                }
                5 => {
                    g *= 1.0 - s;
                    b *= 1.0 - s * f;
                }
                // Sector 0, plus anything outside 0..6 such as h = 1.0.
                _ => {
                    g *= 1.0 - s * (1.0 - f);
                    b *= 1.0 - s;
                }
            }
        }
        Rgba::from_unit(r, g, b, self.a)
    }
}

impl From<Hsva> for Rgba {
    fn from(hsva: Hsva) -> Self {
        hsva.to_rgba()
    }
}

/// HSLA color with unit-range components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    /// Hue (0.0-1.0, one full turn).
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Lightness (0.0-1.0).
    pub l: f64,
    /// Alpha (0.0-1.0).
    pub a: f64,
}

impl Hsla {
    /// Create a new HSLA color.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Create an opaque HSL color (alpha = 1.0).
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Convert to RGBA.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let (s, l) = (self.s, self.l);
        let t2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let t1 = l * 2.0 - t2;
        let hue = self.h * 6.0;

        Rgba::from_unit(
            hue_to_channel(t1, t2, hue + 2.0),
            hue_to_channel(t1, t2, hue),
            hue_to_channel(t1, t2, hue - 2.0),
            self.a,
        )
    }
}

/// Hue is measured in sixths of a turn here.
fn hue_to_channel(t1: f64, t2: f64, mut hue: f64) -> f64 {
    if hue < 0.0 {
        hue += 6.0;
    }
    if hue >= 6.0 {
        hue -= 6.0;
    }

    if hue < 1.0 {
        (t2 - t1) * hue + t1
    } else if hue < 3.0 {
        t2
    } else if hue < 4.0 {
        (t2 - t1) * (4.0 - hue) + t1
    } else {
        t1
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

/// Build a color from unit-range red, green, blue and alpha.
#[must_use]
pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Rgba {
    Rgba::from_unit(r, g, b, a)
}

/// Build an opaque color from unit-range red, green and blue.
#[must_use]
pub fn rgb(r: f64, g: f64, b: f64) -> Rgba {
    rgba(r, g, b, 1.0)
}

/// Build a color from unit-range hue, saturation, value and alpha.
#[must_use]
pub fn hsva(h: f64, s: f64, v: f64, a: f64) -> Rgba {
    Hsva::new(h, s, v, a).to_rgba()
}

/// Build an opaque color from unit-range hue, saturation and value.
#[must_use]
pub fn hsv(h: f64, s: f64, v: f64) -> Rgba {
    hsva(h, s, v, 1.0)
}

/// Build a color from unit-range hue, saturation, lightness and alpha.
#[must_use]
pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Rgba {
    Hsla::new(h, s, l, a).to_rgba()
}

/// Build an opaque color from unit-range hue, saturation and lightness.
#[must_use]
pub fn hsl(h: f64, s: f64, l: f64) -> Rgba {
    hsla(h, s, l, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_unit_channels() {
        assert_eq!(rgba(1.0, 0.0, 0.0, 1.0), Rgba::RED);
        assert_eq!(rgb(0.0, 0.0, 1.0), Rgba::BLUE);
        // 127.5 rounds to the even neighbour
        assert_eq!(rgb(0.5, 0.5, 0.5), Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_unit_channels_saturate() {
        assert_eq!(rgba(1.5, -0.2, f64::NAN, 2.0), Rgba::new(255, 0, 0, 255));
        assert_eq!(rgba(0.0, 0.0, 0.0, 0.0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_hsv_primary_sectors() {
        assert_eq!(hsv(0.0, 1.0, 1.0), Rgba::RED);
        // h = 0.5 lands on sector 3 with no fraction
        assert_eq!(hsv(0.5, 1.0, 1.0), Rgba::rgb(0, 255, 255));
        // h = 1.0 wraps into the sector-0 branch
        assert_eq!(hsv(1.0, 1.0, 1.0), Rgba::RED);
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        assert_eq!(hsv(0.7, 0.0, 0.5), Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_hsva_alpha() {
        assert_eq!(hsva(0.0, 1.0, 1.0, 0.0).a, 0);
        assert_eq!(hsva(0.0, 1.0, 1.0, 1.0).a, 255);
    }

    #[test]
    fn test_hsl_red() {
        assert_eq!(hsl(0.0, 1.0, 0.5), Rgba::RED);
    }

    #[test]
    fn test_hsl_matches_opaque_hsla() {
        let a = hsl(0.0, 0.5, 0.5);
        let b = hsla(0.0, 0.5, 0.5, 1.0);
        assert_eq!(a, b);
        assert_eq!(a, Rgba::rgb(191, 64, 64));
    }

    #[test]
    fn test_hsl_high_lightness() {
        // l > 0.5 takes the l + s - l*s branch
        assert_eq!(hsl(0.0, 1.0, 1.0), Rgba::WHITE);
        assert_eq!(hsl(0.0, 0.0, 0.0), Rgba::BLACK);
    }

    #[test]
    fn test_from_traits() {
        let from_hsla: Rgba = Hsla::hsl(0.0, 1.0, 0.5).into();
        let from_hsva: Rgba = Hsva::hsv(0.0, 1.0, 1.0).into();
        assert_eq!(from_hsla, Rgba::RED);
        assert_eq!(from_hsva, Rgba::RED);
    }

    #[test]
    fn test_css_color() {
        assert_eq!(Rgba::BLUE.to_css_color(), "rgba(0,0,255,1)");
        assert_eq!(
            Rgba::new(1, 2, 3, 128).to_css_color(),
            "rgba(1,2,3,0.5019607843137255)"
        );
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(arr), color);
    }

    #[test]
    fn test_rgba_default() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }
}
