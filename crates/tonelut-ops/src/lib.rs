//! # tonelut-ops
//!
//! Applies tone lookup tables to packed `0xAARRGGBB` pixel buffers.
//!
//! # Modules
//!
//! - [`apply`] - Whole-buffer and region application of a [`ToneLut`]
//! - [`adjuster`] - [`ImageAdjuster`], brightness/contrast/gamma for surfaces
//! - [`surface`] - [`PixelSurface`] and the provided buffer types
//!
//! # Example
//!
//! ```rust
//! use tonelut_ops::{ImageAdjuster, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(1, 1, 0xFF80_4020);
//! let mut adjust = ImageAdjuster::new();
//!
//! adjust.brightness_image(&mut image, 0.0).unwrap();
//! assert_eq!(image.get(0, 0), Some(0xFF80_4020));
//!
//! adjust.contrast_image(&mut image, 0.0).unwrap();
//! assert_eq!(image.get(0, 0), Some(0xFF7F_7F7F));
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - Large buffers are processed with rayon
//! - `serde` - Serialization for [`AdjusterConfig`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjuster;
pub mod apply;
mod config;
pub mod surface;

pub use adjuster::ImageAdjuster;
pub use config::AdjusterConfig;
pub use surface::{PixelBuffer, PixelSlice, PixelSurface};
pub use tonelut_core::{Error, Region, Result};
pub use tonelut_lut::{remap, Adjustment, ToneLut};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
