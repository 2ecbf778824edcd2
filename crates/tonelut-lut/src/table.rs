//! Storage and composition for the 256-entry tone table.

use tonelut_core::{Error, Result, LUT_SIZE, MAX_INTENSITY};

/// Clamps `value` into `[0, 255]`.
///
/// NaN clamps to 0 so the table never holds a non-finite entry.
///
/// ```rust
/// use tonelut_lut::clamp_to_byte_range;
///
/// assert_eq!(clamp_to_byte_range(-50.0), 0.0);
/// assert_eq!(clamp_to_byte_range(300.0), 255.0);
/// assert_eq!(clamp_to_byte_range(12.5), 12.5);
/// ```
#[inline]
pub fn clamp_to_byte_range(value: f32) -> f32 {
    if value > MAX_INTENSITY {
        MAX_INTENSITY
    } else if value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// A 256-entry intensity mapping applied identically to R, G and B.
///
/// # Structure
///
/// - `real`: the mapping as `f32`, always within `[0, 255]`
/// - `int`: `real` truncated toward zero, rebuilt after every change
///
/// Adjustments compose on `real`, so chained operations lose no precision
/// between steps. Only the pixel loop reads `int`; it can be inspected
/// through [`ToneLut::int_table`] but never written directly.
///
/// # Example
///
/// ```rust
/// use tonelut_lut::ToneLut;
///
/// let mut lut = ToneLut::identity();
/// assert!(lut.is_identity());
///
/// lut.brightness(1.0);
/// assert!(lut.as_slice().iter().all(|&v| v == 255.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToneLut {
    real: [f32; LUT_SIZE],
    int: [u8; LUT_SIZE],
}

impl Default for ToneLut {
    fn default() -> Self {
        Self::identity()
    }
}

impl ToneLut {
    /// Creates an identity table: every intensity maps to itself.
    pub fn identity() -> Self {
        let mut lut = Self {
            real: [0.0; LUT_SIZE],
            int: [0; LUT_SIZE],
        };
        lut.reset();
        lut
    }

    /// Creates a table from 256 values, clamped as in [`ToneLut::set`].
    pub fn from_values(values: &[f32]) -> Result<Self> {
        let mut lut = Self::identity();
        lut.set(values)?;
        Ok(lut)
    }

    /// Resets to identity, `real[i] == i`.
    pub fn reset(&mut self) {
        for (i, v) in self.real.iter_mut().enumerate() {
            *v = i as f32;
        }
        self.rebuild_int_table();
    }

    /// Copies the current mapping into `out`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless `out` holds exactly 256 values.
    pub fn get(&self, out: &mut [f32]) -> Result<()> {
        check_len("get", out.len())?;
        out.copy_from_slice(&self.real);
        Ok(())
    }

    /// Replaces the mapping with `values`, clamping each into `[0, 255]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless `values` holds exactly 256 values.
    /// The table is left unchanged on error.
    pub fn set(&mut self, values: &[f32]) -> Result<()> {
        check_len("set", values.len())?;
        for (dst, &src) in self.real.iter_mut().zip(values) {
            *dst = clamp_to_byte_range(src);
        }
        self.rebuild_int_table();
        Ok(())
    }

    /// Composes a remapping on top of the current mapping.
    ///
    /// `indices[i]` is clamped, truncated, and used to look up the current
    /// table; that value becomes the new entry `i`. For example, if
    /// `indices[0] == 255.0` the current output for intensity 255 is moved
    /// to intensity 0. The lookups all read a snapshot taken before any
    /// entry is written, so remaps that refer back to the table are
    /// order-independent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless `indices` holds exactly 256 values.
    /// The table is left unchanged on error.
    pub fn map(&mut self, indices: &[f32]) -> Result<()> {
        check_len("map", indices.len())?;
        let snapshot = self.real;
        for (dst, &idx) in self.real.iter_mut().zip(indices) {
            *dst = snapshot[clamp_to_byte_range(idx) as usize];
        }
        self.rebuild_int_table();
        Ok(())
    }

    /// Applies `f` to every real entry, clamps the result, and rebuilds.
    ///
    /// `f` receives the current value of the entry.
    pub(crate) fn update(&mut self, f: impl Fn(f32) -> f32) {
        for v in self.real.iter_mut() {
            *v = clamp_to_byte_range(f(*v));
        }
        self.rebuild_int_table();
    }

    /// The current mapping as `f32`.
    #[inline]
    pub fn as_slice(&self) -> &[f32; LUT_SIZE] {
        &self.real
    }

    /// A copy of the current mapping as `f32`.
    #[inline]
    pub fn to_array(&self) -> [f32; LUT_SIZE] {
        self.real
    }

    /// The derived integer mapping used for pixel application.
    #[inline]
    pub fn int_table(&self) -> &[u8; LUT_SIZE] {
        &self.int
    }

    /// Output intensity for `value` according to the integer mapping.
    #[inline]
    pub fn lookup(&self, value: u8) -> u8 {
        self.int[value as usize]
    }

    /// Returns `true` if every real entry equals its index.
    pub fn is_identity(&self) -> bool {
        self.real.iter().enumerate().all(|(i, &v)| v == i as f32)
    }

    fn rebuild_int_table(&mut self) {
        for (dst, &src) in self.int.iter_mut().zip(self.real.iter()) {
            // Entries are already in [0, 255]; `as` truncates toward zero.
            *dst = src as u8;
        }
    }
}

fn check_len(op: &'static str, len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::invalid_argument(op, "lookup table value array is absent"));
    }
    if len != LUT_SIZE {
        return Err(Error::invalid_argument(
            op,
            format!("lookup table value array must hold exactly {LUT_SIZE} values, got {len}"),
        ));
    }
    Ok(())
}

/// Checks that every byte entry is the floor of its real entry.
#[cfg(test)]
pub(crate) fn assert_int_matches_real(lut: &ToneLut) {
    for i in 0..LUT_SIZE {
        assert_eq!(lut.int_table()[i], lut.as_slice()[i].floor() as u8, "entry {i}");
    }
}
