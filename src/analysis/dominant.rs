//! Dominant color estimation by quantized frequency counting.

use image::RgbaImage;

/// Fallback glow color used before analysis completes or when no pixel
/// qualifies: translucent white, so the surrounding UI keeps its neutral look.
pub const DEFAULT_GLOW: &str = "rgba(255,255,255,0.35)";

/// Pixels with alpha below this are not visually present and are skipped.
const MIN_ALPHA: u8 = 80;

/// All three channels below this counts as near-black background.
const NEAR_BLACK: u8 = 30;

/// All three channels above this counts as near-white foreground.
const NEAR_WHITE: u8 = 230;

/// Channel quantization step. Each channel rounds to the nearest multiple,
/// giving 9 buckets per channel (0, 32, ..., 256) and 729 buckets total.
const BUCKET_STEP: u32 = 32;

/// Buckets per channel.
const BUCKETS: usize = 9;

/// Estimate the most visually dominant non-extreme color in an image.
///
/// Every pixel is visited once. Near-transparent pixels and extreme
/// near-black/near-white pixels are excluded; the remaining pixels are
/// quantized to a coarse color bucket and the most occupied bucket wins.
///
/// Returns the winning bucket as an `rgba(R,G,B,0.45)` string suitable for
/// an ambient glow, or `None` if no pixel qualifies (fully transparent or
/// entirely extreme-colored images). Callers should fall back to
/// [`DEFAULT_GLOW`] in that case.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn dominant_color(img: &RgbaImage) -> Option<String> {
    let mut counts = [0u32; BUCKETS * BUCKETS * BUCKETS];

    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;

        if a < MIN_ALPHA {
            continue;
        }
        if r < NEAR_BLACK && g < NEAR_BLACK && b < NEAR_BLACK {
            continue;
        }
        if r > NEAR_WHITE && g > NEAR_WHITE && b > NEAR_WHITE {
            continue;
        }

        let index = (bucket(r) * BUCKETS + bucket(g)) * BUCKETS + bucket(b);
        counts[index] += 1;
    }

    let (winner, &occupancy) = counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, &count)| count)?;

    if occupancy == 0 {
        return None;
    }

    let r = (winner / (BUCKETS * BUCKETS)) as u32 * BUCKET_STEP;
    let g = (winner / BUCKETS % BUCKETS) as u32 * BUCKET_STEP;
    let b = (winner % BUCKETS) as u32 * BUCKET_STEP;

    Some(format!("rgba({r},{g},{b},0.45)"))
}

/// Round a channel to the nearest multiple of [`BUCKET_STEP`] and return the
/// bucket index (0..=8). 255 rounds up to the top bucket, 256.
#[inline]
fn bucket(channel: u8) -> usize {
    ((u32::from(channel) + BUCKET_STEP / 2) / BUCKET_STEP) as usize
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
    fn test_solid_color_quantizes_to_nearest_step() {
        // 64 -> 64, 100 -> 96, 200 -> 192
        let img = solid([64, 100, 200, 255]);
        assert_eq!(dominant_color(&img), Some("rgba(64,96,192,0.45)".to_string()));
    }

    #[test]
    fn test_majority_bucket_wins() {
        let mut img = RgbaImage::new(4, 4);
        for (i, pixel) in img.pixels_mut().enumerate() {
            *pixel = if i < 12 {
                Rgba([40, 80, 200, 255])
            } else {
                Rgba([200, 40, 40, 255])
            };
        }
        assert_eq!(dominant_color(&img), Some("rgba(32,96,192,0.45)".to_string()));
    }

    #[test]
    fn test_fully_transparent_yields_none() {
        let img = solid([120, 120, 120, 0]);
        assert_eq!(dominant_color(&img), None);
    }

    #[test]
    fn test_near_black_excluded() {
        let img = solid([10, 20, 29, 255]);
        assert_eq!(dominant_color(&img), None);
    }

    #[test]
    fn test_near_white_excluded() {
        let img = solid([240, 245, 250, 255]);
        assert_eq!(dominant_color(&img), None);
    }

    #[test]
    fn test_saturated_channel_reaches_top_bucket() {
        // Pure red is not near-white (g and b are low), and 255 rounds to 256.
        let img = solid([255, 0, 0, 255]);
        assert_eq!(dominant_color(&img), Some("rgba(256,0,0,0.45)".to_string()));
    }

    #[test]
    fn test_alpha_threshold_is_exclusive_below_80() {
        assert_eq!(dominant_color(&solid([100, 100, 100, 79])), None);
        assert_eq!(
            dominant_color(&solid([100, 100, 100, 80])),
            Some("rgba(96,96,96,0.45)".to_string())
        );
    }

    #[test]
    fn test_idempotent() {
        let img = solid([64, 100, 200, 255]);
        assert_eq!(dominant_color(&img), dominant_color(&img));
    }
}
