//! Pixel-sampling analysis passes.

mod dominant;
mod tone;

pub use dominant::{dominant_color, DEFAULT_GLOW};
pub use tone::{classify_tone, Tone};
