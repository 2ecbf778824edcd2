//! Rectangular regions and clipping against a pixel buffer.
//!
//! Coordinates follow the usual image convention: origin (0, 0) at the
//! top-left, X to the right, Y downward.
//!
//! A [`Region`] is what the caller asks for. It is signed, so it may start
//! left of or above the buffer and may be larger than the buffer.
//! [`Region::clip`] turns it into a [`ClippedRegion`] that lies fully
//! inside a `width x height` buffer, or `None` when nothing is left.
//!
//! # Clip order
//!
//! Clipping is done one edge at a time, in this order:
//!
//! 1. `x < 0`: `w += x`, then `x = 0`
//! 2. `y < 0`: `h += y`, then `y = 0`
//! 3. `x + w > width`: `w = width - x`
//! 4. `y + h > height`: `h = height - y`
//!
//! A region that ends with a non-positive `w` or `h` covers no pixels.
//!
//! ```rust
//! use tonelut_core::Region;
//!
//! let clipped = Region::new(-2, -2, 5, 5).clip(10, 10).unwrap();
//! assert_eq!((clipped.x, clipped.y, clipped.width, clipped.height), (0, 0, 3, 3));
//!
//! assert!(Region::new(12, 0, 4, 4).clip(10, 10).is_none());
//! ```

/// A requested rectangle, possibly extending outside the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left edge (inclusive), may be negative
    pub x: i32,
    /// Top edge (inclusive), may be negative
    pub y: i32,
    /// Width in pixels, may be zero or negative
    pub w: i32,
    /// Height in pixels, may be zero or negative
    pub h: i32,
}

/// A region that lies entirely inside its buffer and covers at least one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClippedRegion {
    /// Left edge (inclusive)
    pub x: usize,
    /// Top edge (inclusive)
    pub y: usize,
    /// Width in pixels, > 0
    pub width: usize,
    /// Height in pixels, > 0
    pub height: usize,
}

impl Region {
    /// Creates a region with the given origin and size.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Region covering a whole `width x height` buffer.
    #[inline]
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(
            0,
            0,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }

    /// Clips this region against a `width x height` buffer.
    ///
    /// Returns `None` when the clipped region is empty.
    pub fn clip(&self, width: u32, height: u32) -> Option<ClippedRegion> {
        // i64 keeps every intermediate sum exact for any i32/u32 input.
        let (mut x, mut y) = (self.x as i64, self.y as i64);
        let (mut w, mut h) = (self.w as i64, self.h as i64);
        let (bw, bh) = (width as i64, height as i64);

        if x < 0 {
            w += x;
            x = 0;
        }
        if y < 0 {
            h += y;
            y = 0;
        }
        if x + w > bw {
            w = bw - x;
        }
        if y + h > bh {
            h = bh - y;
        }

        if w <= 0 || h <= 0 {
            return None;
        }
        Some(ClippedRegion {
            x: x as usize,
            y: y as usize,
            width: w as usize,
            height: h as usize,
        })
    }
}

impl ClippedRegion {
    /// Number of pixels covered.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Returns `true` if (px, py) is inside this region.
    #[inline]
    pub const fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region({}, {}, {}x{})", self.x, self.y, self.w, self.h)
    }
}
