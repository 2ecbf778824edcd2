//! High-level brightness, contrast and gamma for pixel surfaces.
//!
//! [`ImageAdjuster`] owns one [`ToneLut`] and offers two styles of use:
//!
//! - **Table calls** take only an amount ([`ImageAdjuster::brightness`],
//!   [`ImageAdjuster::contrast`], [`ImageAdjuster::gamma`], and the
//!   `*_lut` transfer calls). They change the table and touch no pixels.
//!   Several of them in a row accumulate, and one [`ImageAdjuster::apply`]
//!   then applies the combined effect. Build a table once and apply it to
//!   every video frame.
//! - **Image calls** take a surface (`brightness_image`,
//!   `contrast_region`, ...). Each one resets the table to identity, applies
//!   exactly one adjustment and then the table to the surface.
//!
//! # Image calls do not accumulate
//!
//! Because every image call starts from identity, `brightness_image` then
//! `contrast_image` does NOT produce a brightened, contrasted table: the
//! second call discards the first call's table. The pixels do see both
//! edits in turn, but any table built with table calls beforehand is lost.
//! To combine adjustments in one pass, use the table calls and
//! [`ImageAdjuster::apply`].
//!
//! # Example
//!
//! ```rust
//! use tonelut_ops::{ImageAdjuster, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(8, 8, 0xFF80_4020);
//! let mut adjust = ImageAdjuster::new();
//!
//! // Accumulate, then apply once.
//! adjust.contrast(1.25);
//! adjust.brightness(0.1);
//! adjust.apply(&mut image).unwrap();
//!
//! // One-shot call: the table above is discarded first.
//! adjust.gamma_region(&mut image, 0, 0, 4, 4, 1.8).unwrap();
//! ```

use crate::apply::{apply_all_with_threshold, apply_region_with_threshold, validate_buffer};
use crate::{AdjusterConfig, PixelSurface};
use tonelut_core::{Error, Region, Result};
use tonelut_lut::{Adjustment, ToneLut};
use tracing::{debug, trace};

/// Brightness, contrast and gamma adjustments for pixel surfaces.
///
/// See the [module docs](self) for the difference between table calls and
/// image calls.
#[derive(Debug, Clone, Default)]
pub struct ImageAdjuster {
    lut: ToneLut,
    config: AdjusterConfig,
}

impl ImageAdjuster {
    /// Creates an adjuster with an identity table and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adjuster with an identity table and `config`.
    pub fn with_config(config: AdjusterConfig) -> Self {
        Self {
            lut: ToneLut::identity(),
            config,
        }
    }

    /// Current settings.
    pub fn config(&self) -> &AdjusterConfig {
        &self.config
    }

    /// Replaces the settings. The table is kept.
    pub fn set_config(&mut self, config: AdjusterConfig) {
        self.config = config;
    }

    /// The current table.
    pub fn lut(&self) -> &ToneLut {
        &self.lut
    }

    // -------------------------------------------------------------------
    // Table calls
    // -------------------------------------------------------------------

    /// Resets the table to identity.
    pub fn reset(&mut self) {
        self.lut.reset();
    }

    /// Copies the table into `out`, which must hold exactly 256 values.
    ///
    /// Together with [`set_lut`](Self::set_lut) this saves and restores a
    /// table around image calls, which would otherwise discard it.
    ///
    /// ```rust
    /// use tonelut_ops::{ImageAdjuster, PixelBuffer};
    ///
    /// let mut adjust = ImageAdjuster::new();
    /// adjust.contrast(1.5);
    /// let mut saved = [0.0f32; 256];
    /// adjust.get_lut(&mut saved).unwrap();
    ///
    /// let mut image = PixelBuffer::new(2, 2, 0xFF10_2030);
    /// adjust.brightness_image(&mut image, 0.25).unwrap();
    ///
    /// adjust.set_lut(&saved).unwrap();
    /// assert_eq!(adjust.lut().as_slice(), &saved);
    /// ```
    pub fn get_lut(&self, out: &mut [f32]) -> Result<()> {
        self.lut.get(out)
    }

    /// Replaces the table with `values`, clamped into `[0, 255]`.
    pub fn set_lut(&mut self, values: &[f32]) -> Result<()> {
        self.lut.set(values)
    }

    /// Composes a remap on top of the table; see [`ToneLut::map`].
    pub fn map_lut(&mut self, indices: &[f32]) -> Result<()> {
        self.lut.map(indices)
    }

    /// Adds a brightness change to the table.
    pub fn brightness(&mut self, amount: f32) {
        self.lut.brightness(amount);
    }

    /// Adds a contrast change to the table.
    pub fn contrast(&mut self, amount: f32) {
        self.lut.contrast(amount);
    }

    /// Adds a gamma change to the table.
    pub fn gamma(&mut self, amount: f32) {
        self.lut.gamma(amount);
    }

    /// Adds `adjustment` to the table.
    pub fn adjust(&mut self, adjustment: Adjustment) {
        self.lut.adjust(adjustment);
    }

    // -------------------------------------------------------------------
    // Applying the table
    // -------------------------------------------------------------------

    /// Applies the current table to the whole surface.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidImage`] if the surface has no pixels or too few.
    pub fn apply<S>(&self, surface: &mut S) -> Result<()>
    where
        S: PixelSurface + ?Sized,
    {
        let threshold = self.config.parallel_threshold;
        with_surface(&self.config, surface, |pixels, width, height| {
            apply_all_with_threshold(&self.lut, pixels, width, height, threshold)
        })
    }

    /// Applies the current table to a region of the surface.
    ///
    /// The region is clipped to the surface as described in
    /// [`Region::clip`]; a region entirely outside is a no-op.
    pub fn apply_region<S>(&self, surface: &mut S, x: i32, y: i32, w: i32, h: i32) -> Result<()>
    where
        S: PixelSurface + ?Sized,
    {
        let threshold = self.config.parallel_threshold;
        let region = Region::new(x, y, w, h);
        with_surface(&self.config, surface, |pixels, width, height| {
            apply_region_with_threshold(&self.lut, pixels, width, height, region, threshold)
        })
    }

    // -------------------------------------------------------------------
    // Image calls: reset, adjust once, apply
    // -------------------------------------------------------------------

    /// Resets the table, adds `adjustment`, and applies it to the whole
    /// surface.
    ///
    /// **Discards the current table**, even on a neutral adjustment. The
    /// table is left holding `adjustment` alone afterwards. On error the
    /// table is not reset.
    pub fn adjust_image<S>(&mut self, surface: &mut S, adjustment: Adjustment) -> Result<()>
    where
        S: PixelSurface + ?Sized,
    {
        trace!(?adjustment, "adjust_image");
        let threshold = self.config.parallel_threshold;
        let lut = &mut self.lut;
        with_surface(&self.config, surface, |pixels, width, height| {
            validate_buffer(pixels, width, height)?;
            reset_and_adjust(lut, adjustment);
            apply_all_with_threshold(lut, pixels, width, height, threshold)
        })
    }

    /// Resets the table, adds `adjustment`, and applies it to a region of
    /// the surface.
    ///
    /// **Discards the current table**, like [`adjust_image`](Self::adjust_image).
    pub fn adjust_region<S>(
        &mut self,
        surface: &mut S,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        adjustment: Adjustment,
    ) -> Result<()>
    where
        S: PixelSurface + ?Sized,
    {
        trace!(?adjustment, x, y, w, h, "adjust_region");
        let threshold = self.config.parallel_threshold;
        let region = Region::new(x, y, w, h);
        let lut = &mut self.lut;
        with_surface(&self.config, surface, |pixels, width, height| {
            validate_buffer(pixels, width, height)?;
            reset_and_adjust(lut, adjustment);
            apply_region_with_threshold(lut, pixels, width, height, region, threshold)
        })
    }

    /// Brightens (or darkens) the whole surface. **Discards the current table.**
    pub fn brightness_image<S: PixelSurface + ?Sized>(&mut self, surface: &mut S, amount: f32) -> Result<()> {
        self.adjust_image(surface, Adjustment::Brightness(amount))
    }

    /// Brightens (or darkens) a region. **Discards the current table.**
    pub fn brightness_region<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        amount: f32,
    ) -> Result<()> {
        self.adjust_region(surface, x, y, w, h, Adjustment::Brightness(amount))
    }

    /// Changes contrast of the whole surface. **Discards the current table.**
    pub fn contrast_image<S: PixelSurface + ?Sized>(&mut self, surface: &mut S, amount: f32) -> Result<()> {
        self.adjust_image(surface, Adjustment::Contrast(amount))
    }

    /// Changes contrast of a region. **Discards the current table.**
    pub fn contrast_region<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        amount: f32,
    ) -> Result<()> {
        self.adjust_region(surface, x, y, w, h, Adjustment::Contrast(amount))
    }

    /// Changes gamma of the whole surface. **Discards the current table.**
    pub fn gamma_image<S: PixelSurface + ?Sized>(&mut self, surface: &mut S, amount: f32) -> Result<()> {
        self.adjust_image(surface, Adjustment::Gamma(amount))
    }

    /// Changes gamma of a region. **Discards the current table.**
    pub fn gamma_region<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        amount: f32,
    ) -> Result<()> {
        self.adjust_region(surface, x, y, w, h, Adjustment::Gamma(amount))
    }
}

fn reset_and_adjust(lut: &mut ToneLut, adjustment: Adjustment) {
    if !lut.is_identity() {
        debug!(?adjustment, "Discarding accumulated tone table for one-shot adjustment");
    }
    lut.reset();
    lut.adjust(adjustment);
}

/// Runs `f` on the surface's pixels, calling the load/store hooks around it
/// when `config` asks for them. `store_pixels` runs on the error path too.
fn with_surface<S, F>(config: &AdjusterConfig, surface: &mut S, f: F) -> Result<()>
where
    S: PixelSurface + ?Sized,
    F: FnOnce(&mut [u32], u32, u32) -> Result<()>,
{
    if config.auto_maintain_pixels {
        surface.load_pixels();
    }
    let (width, height) = (surface.width(), surface.height());
    let result = match surface.pixels_mut() {
        Some(pixels) => f(pixels, width, height),
        None => Err(Error::invalid_image("pixel buffer is absent")),
    };
    // A load is always paired with a store, even when the apply failed.
    if config.auto_maintain_pixels {
        surface.store_pixels();
    }
    result
}
