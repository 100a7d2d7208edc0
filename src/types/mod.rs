//! Core domain types for tinct.
//!
//! - `Colour` - an sRGB colour value with cached brightness and luminance
//! - `ColourInput` / `ColourRecord` - the inputs `Colour::parse` accepts
//! - `named` - the CSS keyword table

pub(crate) mod colour;
mod input;
pub mod named;

pub use colour::{Colour, Format, DEFAULT_MIN_RATIO};
pub use input::{ColourInput, ColourRecord};
