//! Logo tone classification from average opaque-pixel brightness.

use std::fmt;

use image::RgbaImage;

/// Pixels must have alpha strictly above this to count toward the average.
const MIN_ALPHA: u8 = 50;

/// Average brightness at or above this classifies as light. Sits slightly
/// above the channel midpoint, biasing mid-tones toward dark.
const LIGHT_THRESHOLD: f64 = 140.0;

/// Binary brightness classification of a logo's opaque pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The logo reads as dark; pair it with light chrome.
    Dark,
    /// The logo reads as light; pair it with dark chrome.
    Light,
}

impl Default for Tone {
    fn default() -> Self {
        Self::Dark
    }
}

impl Tone {
    /// Lowercase name, matching the values callers key their themes on.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an image as dark or light from the unweighted mean brightness of
/// its meaningfully opaque pixels.
///
/// Per-pixel brightness is the plain average of the red, green, and blue
/// channels. Returns `None` when no pixel is opaque enough to include (a
/// fully transparent image), so the caller can keep its default tone instead
/// of dividing by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn classify_tone(img: &RgbaImage) -> Option<Tone> {
    let mut sum: u64 = 0;
    let mut count: u64 = 0;

    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;

        if a <= MIN_ALPHA {
            continue;
        }

        sum += u64::from(r) + u64::from(g) + u64::from(b);
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let average = sum as f64 / (count * 3) as f64;

    if average < LIGHT_THRESHOLD {
        Some(Tone::Dark)
    } else {
        Some(Tone::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(rgba: [u8; 4]) -> RgbaImage {
        let mut img = RgbaImage::new(8, 8);
        for pixel in img.pixels_mut() {
            *pixel = Rgba(rgba);
        }
        img
    }

    #[test]
    fn test_dark_logo() {
        assert_eq!(classify_tone(&solid([20, 20, 20, 255])), Some(Tone::Dark));
    }

    #[test]
    fn test_light_logo() {
        assert_eq!(classify_tone(&solid([240, 240, 240, 255])), Some(Tone::Light));
    }

    #[test]
    fn test_fully_transparent_yields_none() {
        assert_eq!(classify_tone(&solid([200, 200, 200, 0])), None);
    }

    #[test]
    fn test_threshold_brightness_is_light() {
        // Exactly 140 is not below the threshold.
        assert_eq!(classify_tone(&solid([140, 140, 140, 255])), Some(Tone::Light));
        assert_eq!(classify_tone(&solid([139, 139, 139, 255])), Some(Tone::Dark));
    }

    #[test]
    fn test_alpha_threshold_is_exclusive_above_50() {
        assert_eq!(classify_tone(&solid([200, 200, 200, 50])), None);
        assert_eq!(classify_tone(&solid([200, 200, 200, 51])), Some(Tone::Light));
    }

    #[test]
    fn test_transparent_pixels_do_not_drag_average() {
        // Half bright opaque pixels, half dark transparent pixels: only the
        // opaque half counts, so the logo reads as light.
        let mut img = RgbaImage::new(4, 4);
        for (i, pixel) in img.pixels_mut().enumerate() {
            *pixel = if i % 2 == 0 {
                Rgba([220, 220, 220, 255])
            } else {
                Rgba([10, 10, 10, 0])
            };
        }
        assert_eq!(classify_tone(&img), Some(Tone::Light));
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Tone::default(), Tone::Dark);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tone::Dark.to_string(), "dark");
        assert_eq!(Tone::Light.to_string(), "light");
    }
}
