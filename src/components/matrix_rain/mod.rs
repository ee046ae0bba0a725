//! Falling-glyph ("matrix rain") background.
//!
//! Each column drops one glyph per frame over a translucent fade, leaving
//! trails. Columns that fall past the bottom edge restart at the top at random.

mod component;
mod rain;

pub use component::MatrixRainCanvas;
pub use rain::MatrixRain;
