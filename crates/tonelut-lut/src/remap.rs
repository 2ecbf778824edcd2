//! Ready-made remap arrays for [`ToneLut::map`] and [`ToneLut::set`].
//!
//! Effects such as negation, thresholding and posterization are not
//! separate adjustments; they are expressed as a 256-entry remap and
//! composed with [`ToneLut::map`] so they accumulate with the rest of the
//! table and are applied to pixels in the same single pass.
//!
//! ```rust
//! use tonelut_lut::{remap, ToneLut};
//!
//! let mut lut = ToneLut::identity();
//! lut.contrast(1.5);
//! lut.map(&remap::negate()).unwrap(); // contrast + negate in one table
//! assert_eq!(lut.lookup(255), 0);
//! ```
//!
//! [`ToneLut::map`]: crate::ToneLut::map
//! [`ToneLut::set`]: crate::ToneLut::set

use tonelut_core::{Error, Result, LUT_SIZE};

/// `i -> i`.
pub fn identity() -> [f32; LUT_SIZE] {
    std::array::from_fn(|i| i as f32)
}

/// `i -> 255 - i`.
pub fn negate() -> [f32; LUT_SIZE] {
    std::array::from_fn(|i| (255 - i) as f32)
}

/// Intensities below `level` go to 0, the rest to 255.
///
/// As a `map` argument this sends each entry to the table's own output
/// for 0 or 255.
pub fn threshold(level: u8) -> [f32; LUT_SIZE] {
    std::array::from_fn(|i| if i < level as usize { 0.0 } else { 255.0 })
}

/// Quantizes intensities to `levels` evenly spaced steps over `[0, 255]`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `levels < 2`.
///
/// ```rust
/// use tonelut_lut::remap;
///
/// let two = remap::posterize(2).unwrap();
/// assert_eq!(two[0], 0.0);
/// assert_eq!(two[127], 0.0);
/// assert_eq!(two[128], 255.0);
/// ```
pub fn posterize(levels: u8) -> Result<[f32; LUT_SIZE]> {
    if levels < 2 {
        return Err(Error::invalid_argument(
            "posterize",
            format!("at least 2 levels required, got {levels}"),
        ));
    }
    let levels = levels as usize;
    let step = 255.0 / (levels - 1) as f32;
    Ok(std::array::from_fn(|i| {
        let band = (i * levels / LUT_SIZE).min(levels - 1);
        (band as f32 * step).round()
    }))
}
