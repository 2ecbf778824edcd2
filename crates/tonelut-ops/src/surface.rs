//! Pixel surfaces: where [`ImageAdjuster`](crate::ImageAdjuster) reads and
//! writes pixels.
//!
//! A surface exposes its dimensions and, when available, a mutable view of
//! its packed `0xAARRGGBB` words. Surfaces whose pixels live elsewhere
//! (a GPU texture, a staging area) can override [`PixelSurface::load_pixels`]
//! and [`PixelSurface::store_pixels`] to move data in before an apply and
//! out after it. Both hooks default to no-ops, which is right for plain
//! memory.
//!
//! The adjuster calls the hooks only when
//! [`AdjusterConfig::auto_maintain_pixels`](crate::AdjusterConfig) is set.
//! Callers that batch several applies can turn it off and drive the hooks
//! themselves.

use tonelut_core::{Error, Result};

/// A 2D grid of packed pixels that tone operations can modify in place.
pub trait PixelSurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Row-major pixels, `width * height` words without row padding.
    ///
    /// `None` means the surface has no pixel data right now; applying to
    /// it fails with `InvalidImage`.
    fn pixels_mut(&mut self) -> Option<&mut [u32]>;

    /// Makes `pixels_mut` reflect the surface's current content.
    fn load_pixels(&mut self) {}

    /// Publishes changes made through `pixels_mut`.
    fn store_pixels(&mut self) {}
}

/// An owned pixel buffer.
///
/// ```rust
/// use tonelut_ops::PixelBuffer;
///
/// let mut buf = PixelBuffer::new(4, 2, 0xFF00_0000);
/// buf.set(1, 1, 0xFF12_3456);
/// assert_eq!(buf.get(1, 1), Some(0xFF12_3456));
/// assert_eq!(buf.get(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Creates a `width x height` buffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Wraps existing pixel data.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidImage`] unless `pixels.len() == width * height`.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_image(format!(
                "{width}x{height} needs {expected} words, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pixel at (x, y), or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Sets the pixel at (x, y). Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, value: u32) {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = value;
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Consumes the buffer, returning its pixels.
    pub fn into_vec(self) -> Vec<u32> {
        self.pixels
    }
}

impl PixelSurface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels_mut(&mut self) -> Option<&mut [u32]> {
        Some(self.pixels.as_mut_slice())
    }
}

/// A borrowed pixel slice with dimensions.
///
/// Lets callers that own their pixels in some other container use the
/// adjuster without copying.
#[derive(Debug)]
pub struct PixelSlice<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> PixelSlice<'a> {
    /// Borrows `pixels` as a `width x height` surface.
    ///
    /// The length is checked when an operation runs, not here.
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }
}

impl PixelSurface for PixelSlice<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels_mut(&mut self) -> Option<&mut [u32]> {
        Some(&mut *self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_from_vec() {
        let buf = PixelBuffer::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(buf.get(1, 1), Some(4));
        assert_eq!(buf.into_vec(), vec![1, 2, 3, 4]);

        let err = PixelBuffer::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
        assert!(err.is_image_error());
    }

    #[test]
    fn test_buffer_set_out_of_range_ignored() {
        let mut buf = PixelBuffer::new(2, 2, 0);
        buf.set(2, 0, 9);
        buf.set(0, 5, 9);
        assert!(buf.pixels().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_slice_surface() {
        let mut data = vec![7u32; 6];
        let mut surface = PixelSlice::new(&mut data, 3, 2);
        assert_eq!((surface.width(), surface.height()), (3, 2));
        surface.pixels_mut().unwrap()[5] = 1;
        assert_eq!(data[5], 1);
    }
}
