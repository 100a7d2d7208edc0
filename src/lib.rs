//! tinct - sRGB colour values with WCAG contrast helpers
//!
//! Parses CSS-style colour strings and channel records into an immutable
//! [`Colour`], and computes brightness, relative luminance, contrast ratios,
//! shades, and colours that reach a target contrast against a base.
//!
//! ```
//! use tinct::Colour;
//!
//! let base = Colour::parse("#333").unwrap();
//! let text = base.contrasting_colour(Some(&Colour::parse("#444").unwrap()));
//! assert_eq!(text.to_string(), "rgb(162,162,162)");
//! assert!(base.contrast_ratio(&text) >= 4.5);
//! ```

pub mod cli;
pub mod config;
pub mod contrast;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use config::Config;
pub use contrast::{Readability, WcagLevel};
pub use error::{Result, TinctError};
pub use types::{Colour, ColourInput, ColourRecord, Format, DEFAULT_MIN_RATIO};
