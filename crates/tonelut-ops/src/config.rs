//! Adjuster configuration.

use crate::apply::DEFAULT_PARALLEL_THRESHOLD;

/// Settings for an [`ImageAdjuster`](crate::ImageAdjuster).
///
/// With the `serde` feature enabled the struct (de)serializes, and missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdjusterConfig {
    /// Call the surface's load/store hooks around every apply.
    pub auto_maintain_pixels: bool,
    /// Touched-pixel count from which rows are processed with rayon.
    /// Ignored without the `parallel` feature.
    pub parallel_threshold: usize,
}

impl Default for AdjusterConfig {
    fn default() -> Self {
        Self {
            auto_maintain_pixels: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl AdjusterConfig {
    /// Sets [`auto_maintain_pixels`](Self::auto_maintain_pixels).
    pub fn with_auto_maintain_pixels(mut self, enabled: bool) -> Self {
        self.auto_maintain_pixels = enabled;
        self
    }

    /// Sets [`parallel_threshold`](Self::parallel_threshold).
    pub fn with_parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = pixels;
        self
    }

    /// Never use the parallel path.
    pub fn serial(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }
}
