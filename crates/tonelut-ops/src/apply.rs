//! Applying a [`ToneLut`] to packed pixel buffers.
//!
//! Buffers are row-major `u32` words with no padding between rows, laid out
//! as `0xAARRGGBB`. Each of the three color bytes is replaced through the
//! table's integer mapping; the top byte is never touched.
//!
//! # Example
//!
//! ```rust
//! use tonelut_core::Region;
//! use tonelut_lut::ToneLut;
//! use tonelut_ops::apply::{apply_all, apply_region};
//!
//! let mut lut = ToneLut::identity();
//! lut.contrast(0.0);
//!
//! let mut pixels = vec![0xFF80_4020u32; 4 * 4];
//! apply_region(&lut, &mut pixels, 4, 4, Region::new(-1, -1, 2, 2)).unwrap();
//! assert_eq!(pixels[0], 0xFF7F_7F7F);
//! assert_eq!(pixels[1], 0xFF80_4020);
//!
//! apply_all(&lut, &mut pixels, 4, 4).unwrap();
//! assert!(pixels.iter().all(|&c| c == 0xFF7F_7F7F));
//! ```

use tonelut_core::{pixel::remap_rgb, ClippedRegion, Error, Region, Result};
use tonelut_lut::ToneLut;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pixel count at which the rayon path takes over by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Words handed to each rayon task when processing a whole buffer.
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 1 << 14;

/// Applies `lut` to every pixel of a `width x height` buffer.
///
/// Only the first `width * height` words are touched; a longer buffer is
/// allowed. A zero-area image is a no-op.
///
/// # Errors
///
/// [`Error::InvalidImage`] if the buffer is absent (empty) or shorter than
/// `width * height` words. The buffer is untouched on error.
pub fn apply_all(lut: &ToneLut, pixels: &mut [u32], width: u32, height: u32) -> Result<()> {
    apply_all_with_threshold(lut, pixels, width, height, DEFAULT_PARALLEL_THRESHOLD)
}

/// Applies `lut` to the part of `region` that falls inside the buffer.
///
/// The region is clipped as described in [`Region::clip`]. A region that
/// clips away entirely is a no-op, not an error.
///
/// # Errors
///
/// [`Error::InvalidImage`] under the same conditions as [`apply_all`],
/// checked before clipping.
pub fn apply_region(
    lut: &ToneLut,
    pixels: &mut [u32],
    width: u32,
    height: u32,
    region: Region,
) -> Result<()> {
    apply_region_with_threshold(lut, pixels, width, height, region, DEFAULT_PARALLEL_THRESHOLD)
}

/// Checks that `pixels` can hold a `width x height` image.
///
/// Returns the image area in words.
pub fn validate_buffer(pixels: &[u32], width: u32, height: u32) -> Result<usize> {
    let area = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_image(format!("{width}x{height} overflows the address space")))?;
    if area == 0 {
        return Ok(0);
    }
    if pixels.is_empty() {
        return Err(Error::invalid_image("pixel buffer is absent"));
    }
    if pixels.len() < area {
        return Err(Error::invalid_image(format!(
            "buffer holds {} words, {width}x{height} needs {area}",
            pixels.len()
        )));
    }
    Ok(area)
}

#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub(crate) fn apply_all_with_threshold(
    lut: &ToneLut,
    pixels: &mut [u32],
    width: u32,
    height: u32,
    parallel_threshold: usize,
) -> Result<()> {
    trace!(width, height, "apply_all");
    let area = validate_buffer(pixels, width, height)?;
    let pixels = &mut pixels[..area];
    let table = lut.int_table();

    #[cfg(feature = "parallel")]
    {
        if area >= parallel_threshold {
            debug!(area, parallel_threshold, "Applying tone table in parallel");
            pixels.par_chunks_mut(PARALLEL_CHUNK).for_each(|chunk| remap_span(chunk, table));
            return Ok(());
        }
    }
    remap_span(pixels, table);
    Ok(())
}

#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub(crate) fn apply_region_with_threshold(
    lut: &ToneLut,
    pixels: &mut [u32],
    width: u32,
    height: u32,
    region: Region,
    parallel_threshold: usize,
) -> Result<()> {
    trace!(width, height, %region, "apply_region");
    let area = validate_buffer(pixels, width, height)?;
    let Some(clip) = region.clip(width, height) else {
        debug!(%region, width, height, "Region lies outside the image, nothing to do");
        return Ok(());
    };
    let rows = &mut pixels[..area];
    let table = lut.int_table();

    #[cfg(feature = "parallel")]
    {
        if clip.area() >= parallel_threshold {
            debug!(pixels = clip.area(), parallel_threshold, "Applying tone table to region in parallel");
            rows.par_chunks_mut(width as usize)
                .skip(clip.y)
                .take(clip.height)
                .for_each(|row| remap_row(row, &clip, table));
            return Ok(());
        }
    }
    for row in rows.chunks_mut(width as usize).skip(clip.y).take(clip.height) {
        remap_row(row, &clip, table);
    }
    Ok(())
}

#[inline]
fn remap_row(row: &mut [u32], clip: &ClippedRegion, table: &[u8; 256]) {
    remap_span(&mut row[clip.x..clip.right()], table);
}

#[inline]
fn remap_span(span: &mut [u32], table: &[u8; 256]) {
    for c in span.iter_mut() {
        *c = remap_rgb(*c, table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonelut_lut::remap;

    fn negate() -> ToneLut {
        ToneLut::from_values(&remap::negate()).unwrap()
    }

    fn gradient(width: u32, height: u32) -> Vec<u32> {
        (0..width * height)
            .map(|i| 0x8000_0000 | (i % 256) << 16 | (i * 7 % 256) << 8 | (i * 13 % 256))
            .collect()
    }

    #[test]
    fn test_identity_leaves_buffer() {
        let lut = ToneLut::identity();
        let mut pixels = gradient(16, 16);
        let before = pixels.clone();
        apply_all(&lut, &mut pixels, 16, 16).unwrap();
        assert_eq!(pixels, before);
    }

    #[test]
    fn test_negate_all_keeps_alpha() {
        let lut = negate();
        let mut pixels = vec![0x1200_FF80u32, 0xFF10_2030];
        apply_all(&lut, &mut pixels, 2, 1).unwrap();
        assert_eq!(pixels, vec![0x12FF_007F, 0xFFEF_DFCF]);
    }

    #[test]
    fn test_only_area_is_touched() {
        let lut = negate();
        let mut pixels = vec![0u32; 5];
        apply_all(&lut, &mut pixels, 2, 2).unwrap();
        assert_eq!(&pixels[..4], &[0x00FF_FFFF; 4]);
        assert_eq!(pixels[4], 0);
    }

    #[test]
    fn test_invalid_buffers() {
        let lut = negate();
        let err = apply_all(&lut, &mut [], 2, 2).unwrap_err();
        assert!(err.is_image_error());
        assert!(err.to_string().contains("absent"));

        let mut short = vec![0x00AB_CDEFu32; 3];
        assert!(apply_all(&lut, &mut short, 2, 2).is_err());
        assert!(apply_region(&lut, &mut short, 2, 2, Region::new(0, 0, 1, 1)).is_err());
        assert_eq!(short, vec![0x00AB_CDEF; 3]);
    }

    #[test]
    fn test_zero_area_is_noop() {
        let lut = negate();
        assert!(apply_all(&lut, &mut [], 0, 5).is_ok());
        assert!(apply_region(&lut, &mut [], 5, 0, Region::new(0, 0, 5, 5)).is_ok());
    }

    #[test]
    fn test_region_clipping() {
        let lut = negate();
        let mut pixels = vec![0u32; 100];
        apply_region(&lut, &mut pixels, 10, 10, Region::new(-2, -2, 5, 5)).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let expected = if x < 3 && y < 3 { 0x00FF_FFFF } else { 0 };
                assert_eq!(pixels[y * 10 + x], expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_region_far_edges() {
        let lut = negate();
        let mut pixels = vec![0u32; 6 * 4];
        apply_region(&lut, &mut pixels, 6, 4, Region::new(4, 2, 10, 10)).unwrap();
        let touched: Vec<usize> = (0..pixels.len()).filter(|&i| pixels[i] != 0).collect();
        assert_eq!(touched, vec![16, 17, 22, 23]);
    }

    #[test]
    fn test_region_outside_is_noop() {
        let lut = negate();
        let mut pixels = vec![0u32; 100];
        apply_region(&lut, &mut pixels, 10, 10, Region::new(10, 0, 3, 3)).unwrap();
        apply_region(&lut, &mut pixels, 10, 10, Region::new(-3, 0, 3, 3)).unwrap();
        apply_region(&lut, &mut pixels, 10, 10, Region::new(0, 0, 3, -1)).unwrap();
        assert!(pixels.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_full_region_matches_apply_all() {
        let mut lut = ToneLut::identity();
        lut.gamma(1.8);
        lut.contrast(1.2);
        let mut a = gradient(33, 17);
        let mut b = a.clone();
        apply_all(&lut, &mut a, 33, 17).unwrap();
        apply_region(&lut, &mut b, 33, 17, Region::full(33, 17)).unwrap();
        assert_eq!(a, b);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let mut lut = ToneLut::identity();
        lut.brightness(0.1);
        lut.gamma(0.8);
        let (w, h) = (129u32, 71u32);
        let src = gradient(w, h);

        let mut serial = src.clone();
        let mut parallel = src.clone();
        apply_all_with_threshold(&lut, &mut serial, w, h, usize::MAX).unwrap();
        apply_all_with_threshold(&lut, &mut parallel, w, h, 0).unwrap();
        assert_eq!(serial, parallel);

        let region = Region::new(-7, 5, 90, 200);
        let mut serial = src.clone();
        let mut parallel = src;
        apply_region_with_threshold(&lut, &mut serial, w, h, region, usize::MAX).unwrap();
        apply_region_with_threshold(&lut, &mut parallel, w, h, region, 0).unwrap();
        assert_eq!(serial, parallel);
    }
}
