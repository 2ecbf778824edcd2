//! # tonelut-lut
//!
//! The tone lookup table used by every tonelut operation.
//!
//! A [`ToneLut`] maps each 8-bit channel intensity to a new intensity. It
//! keeps the mapping twice: as 256 `f32` values that adjustments compose
//! on, and as 256 `u8` values derived from them for the pixel loop.
//!
//! # Usage
//!
//! ```rust
//! use tonelut_lut::{remap, ToneLut};
//!
//! let mut lut = ToneLut::identity();
//! lut.contrast(1.5);
//! lut.brightness(0.1);
//! lut.map(&remap::negate()).unwrap();
//!
//! let mut values = [0.0f32; 256];
//! lut.get(&mut values).unwrap();
//! assert_eq!(lut.lookup(0), 255);
//! ```
//!
//! # Dependencies
//!
//! - [`tonelut-core`] - Error type and table constants
//!
//! # Used By
//!
//! - `tonelut-ops` - Pixel application and `ImageAdjuster`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adjust;
mod table;
pub mod remap;

pub use adjust::{Adjustment, GAMMA_EPSILON};
pub use table::{clamp_to_byte_range, ToneLut};
pub use tonelut_core::{Error, Result, LUT_SIZE};
