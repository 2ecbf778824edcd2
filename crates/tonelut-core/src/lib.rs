//! # tonelut-core
//!
//! Core types shared by the tonelut crates.
//!
//! - [`Error`], [`Result`] - Error handling for table and buffer operations
//! - [`pixel`] - Packed `0xAARRGGBB` word helpers
//! - [`Region`], [`ClippedRegion`] - Signed rectangles and buffer clipping
//!
//! ## Crate Structure
//!
//! ```text
//! tonelut-core (this crate)
//!    ^
//!    |
//!    +-- tonelut-lut (256-entry tone table)
//!    +-- tonelut-ops (pixel application, ImageAdjuster)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod region;

pub use error::{Error, Result};
pub use pixel::{pack_argb, remap_rgb, unpack_argb, ALPHA_MASK};
pub use region::{ClippedRegion, Region};

/// Number of entries in a tone table (one per 8-bit intensity).
pub const LUT_SIZE: usize = 256;

/// Largest channel intensity.
pub const MAX_INTENSITY: f32 = 255.0;
