//! Image loading utilities.

mod load;

pub use load::load_rgba;
