//! Brightness, contrast and gamma on a [`ToneLut`].
//!
//! Each adjustment reads the table's current contents, so calling several
//! in a row composes them. Call [`ToneLut::reset`] first to start from
//! identity.
//!
//! | Adjustment | Typical range | Neutral | Per entry |
//! |------------|---------------|---------|-----------|
//! | brightness | -1.0 ..= 1.0  | 0.0     | `v + amount * 255` |
//! | contrast   | 0.0 ..= 2.0   | 1.0     | `(v - 127.5) * amount + 127.5` |
//! | gamma      | 0.0 ..= 3.0   | 1.0     | `255 * (v / 255)^(1 / amount)` |
//!
//! Results are always clamped into `[0, 255]`.

use crate::ToneLut;

/// Stand-in for a gamma of exactly zero.
pub const GAMMA_EPSILON: f32 = 1e-6;

/// Contrast pivot, halfway between 0 and 255.
const MID_GRAY: f32 = 127.5;

/// One named adjustment and its amount.
///
/// Lets callers pick an adjustment at runtime and hand it to
/// [`ToneLut::adjust`] or to the high-level image calls in `tonelut-ops`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// See [`ToneLut::brightness`].
    Brightness(f32),
    /// See [`ToneLut::contrast`].
    Contrast(f32),
    /// See [`ToneLut::gamma`].
    Gamma(f32),
}

impl Adjustment {
    /// Returns `true` if the amount leaves an identity table unchanged.
    pub fn is_neutral(&self) -> bool {
        match *self {
            Self::Brightness(a) => a == 0.0,
            Self::Contrast(a) | Self::Gamma(a) => a == 1.0,
        }
    }
}

impl ToneLut {
    /// Applies `adjustment` on top of the current contents.
    pub fn adjust(&mut self, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Brightness(a) => self.brightness(a),
            Adjustment::Contrast(a) => self.contrast(a),
            Adjustment::Gamma(a) => self.gamma(a),
        }
    }

    /// Shifts every entry by `amount * 255`.
    ///
    /// -1.0 gives solid black, 1.0 solid white. Values beyond that range
    /// have no further effect.
    pub fn brightness(&mut self, amount: f32) {
        let offset = amount * 255.0;
        self.update(|v| v + offset);
    }

    /// Scales every entry's distance from mid-gray by `amount`.
    ///
    /// 0.0 flattens to gray (127), 1.0 leaves the table unchanged, 2.0
    /// doubles the deviation.
    pub fn contrast(&mut self, amount: f32) {
        self.update(|v| (v - MID_GRAY) * amount + MID_GRAY);
    }

    /// Raises every normalized entry to `1 / amount`.
    ///
    /// Values below 1.0 darken, above 1.0 brighten. A zero amount is
    /// replaced by [`GAMMA_EPSILON`], which crushes everything but full
    /// intensity to black.
    pub fn gamma(&mut self, amount: f32) {
        let amount = if amount == 0.0 { GAMMA_EPSILON } else { amount };
        let inv = 1.0 / amount as f64;
        self.update(|v| ((v as f64 / 255.0).powf(inv) * 255.0) as f32);
    }
}
