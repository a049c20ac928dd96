//! Pipeline configuration.

use mesh_extrude::CornerRule;
use mesh_repair::SealParams;

/// Parameters for building a solid from a track or heightfield.
///
/// Defaults mirror the interactive tool this pipeline grew out of:
/// raster resolution 800, vertical scale 100, mask threshold 0.05 (just
/// below the rasterizer's fill epsilon) and a paper-thin base.
///
/// # Example
///
/// ```
/// use mesh_from_tracks::TrackSolidParams;
///
/// let params = TrackSolidParams::default()
///     .with_resolution(400)
///     .with_thickness(0.5)
///     .with_base_fraction(0.1);
/// assert_eq!(params.resolution, 400);
/// ```
#[derive(Debug, Clone)]
pub struct TrackSolidParams {
    /// Multiplier on the derived ribbon thickness.
    ///
    /// When no explicit thickness is set, the ribbon is as wide as the
    /// smallest nonzero x-step between consecutive unique samples, times
    /// this multiplier.
    pub thickness_multiplier: f64,

    /// Explicit ribbon thickness, overriding the derived value.
    pub thickness_override: Option<f64>,

    /// Maximum grid dimension in cells for rasterization.
    pub resolution: usize,

    /// Vertical exaggeration applied during extrusion.
    pub z_scale: f64,

    /// Mask threshold separating filled from empty cells.
    pub mask_threshold: f64,

    /// Minimum base thickness as a fraction of the height range.
    pub base_fraction: f64,

    /// Corner-inclusion policy for the top surface.
    pub corner_rule: CornerRule,

    /// Sealing parameters for the repair stage.
    pub seal: SealParams,
}

impl Default for TrackSolidParams {
    fn default() -> Self {
        Self {
            thickness_multiplier: 1.0,
            thickness_override: None,
            resolution: 800,
            z_scale: 100.0,
            mask_threshold: 0.05,
            base_fraction: 0.0,
            corner_rule: CornerRule::default(),
            seal: SealParams::default(),
        }
    }
}

impl TrackSolidParams {
    /// Set the thickness multiplier.
    #[must_use]
    pub const fn with_thickness_multiplier(mut self, multiplier: f64) -> Self {
        self.thickness_multiplier = multiplier;
        self
    }

    /// Set an explicit ribbon thickness.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness_override = Some(thickness);
        self
    }

    /// Set the raster resolution.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the vertical scale.
    #[must_use]
    pub const fn with_z_scale(mut self, z_scale: f64) -> Self {
        self.z_scale = z_scale;
        self
    }

    /// Set the mask threshold.
    #[must_use]
    pub const fn with_mask_threshold(mut self, threshold: f64) -> Self {
        self.mask_threshold = threshold;
        self
    }

    /// Set the base thickness fraction.
    #[must_use]
    pub const fn with_base_fraction(mut self, fraction: f64) -> Self {
        self.base_fraction = fraction;
        self
    }

    /// Set the corner-inclusion policy.
    #[must_use]
    pub const fn with_corner_rule(mut self, rule: CornerRule) -> Self {
        self.corner_rule = rule;
        self
    }

    /// Set the sealing parameters.
    #[must_use]
    pub const fn with_seal(mut self, seal: SealParams) -> Self {
        self.seal = seal;
        self
    }
}
