//! # inktone
//!
//! A library for deriving ambient theming hints from brand imagery.
//!
//! Given an image source (a local path or an HTTP(S) URL), inktone estimates
//! the image's dominant non-extreme color for use as a glow/background tint,
//! and classifies a logo's average opaque-pixel brightness as `dark` or
//! `light` so a caller can pick contrasting chrome.
//!
//! Both analyses are best-effort: a source that fails to load or contains no
//! qualifying pixels leaves the default value in effect, never an error.
//!
//! ## Example
//!
//! ```no_run
//! use inktone::DominantColorWatch;
//!
//! let glow = DominantColorWatch::new();
//! let task = glow.set_source("assets/hero.png");
//! let _ = task.join();
//!
//! println!("{}", glow.color());
//! ```

pub mod analysis;
pub mod error;
pub mod image;
pub mod watch;

pub use analysis::{classify_tone, dominant_color, Tone, DEFAULT_GLOW};
pub use error::{Error, Result};
pub use watch::{DominantColorWatch, LogoToneWatch};
