//! Target size computation
//!
//! A request names its target size either in raw pixels or in logical
//! (density-independent) units, which are converted with
//! [`LOGICAL_UNIT_PIXEL_FACTOR`]. The result is then mapped from the
//! design resolution the size was authored against to the resolution
//! being rendered for.

use crate::error::{ScaleError, ScaleResult};

/// Pixels per logical unit for requests not given in raw pixels.
pub const LOGICAL_UNIT_PIXEL_FACTOR: f64 = 4.0;

/// Design-to-target resolution mapping
///
/// Only the ratios `target / design` matter; each axis is mapped
/// independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionMapping {
    /// Width of the design canvas
    pub design_width: f64,
    /// Height of the design canvas
    pub design_height: f64,
    /// Width of the rendering target
    pub target_width: f64,
    /// Height of the rendering target
    pub target_height: f64,
}

impl ResolutionMapping {
    /// 1440x2560 design rendered at 1080x1920.
    pub const QHD_TO_FHD_PORTRAIT: Self = Self::new(1440.0, 2560.0, 1080.0, 1920.0);

    /// Design and target are the same resolution.
    pub const IDENTITY: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a mapping.
    pub const fn new(
        design_width: f64,
        design_height: f64,
        target_width: f64,
        target_height: f64,
    ) -> Self {
        Self {
            design_width,
            design_height,
            target_width,
            target_height,
        }
    }

    /// Horizontal scale factor `target_width / design_width`.
    pub fn scale_x(&self) -> f64 {
        self.target_width / self.design_width
    }

    /// Vertical scale factor `target_height / design_height`.
    pub fn scale_y(&self) -> f64 {
        self.target_height / self.design_height
    }

    /// Check that all four values are finite and positive.
    pub fn validate(&self) -> ScaleResult<()> {
        for (name, v) in [
            ("design width", self.design_width),
            ("design height", self.design_height),
            ("target width", self.target_width),
            ("target height", self.target_height),
        ] {
            check_positive(name, v)?;
        }
        Ok(())
    }
}

/// Size and resolution parameters of one scale operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingRequest {
    /// Requested width, in logical units unless `raw_pixel_units`
    pub width: f64,
    /// Requested height, in logical units unless `raw_pixel_units`
    pub height: f64,
    /// Whether `width`/`height` are already pixels
    pub raw_pixel_units: bool,
    /// Design-to-target mapping applied after unit conversion
    pub resolution: ResolutionMapping,
}

impl ScalingRequest {
    /// A request in logical units.
    pub fn new(width: f64, height: f64, resolution: ResolutionMapping) -> Self {
        Self {
            width,
            height,
            raw_pixel_units: false,
            resolution,
        }
    }

    /// A request for exactly `width` x `height` output pixels.
    pub fn pixels(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            raw_pixel_units: true,
            resolution: ResolutionMapping::IDENTITY,
        }
    }

    /// Set whether the size is given in raw pixels.
    pub fn with_raw_pixel_units(mut self, raw: bool) -> Self {
        self.raw_pixel_units = raw;
        self
    }

    /// Compute the output size in pixels.
    ///
    /// Logical sizes are multiplied by [`LOGICAL_UNIT_PIXEL_FACTOR`], both
    /// axes are scaled by the resolution mapping and rounded half-up.
    ///
    /// # Errors
    ///
    /// - [`ScaleError::InvalidParameters`] for a non-finite or non-positive
    ///   input, or a size too large for a `u32`
    /// - [`ScaleError::EmptyTarget`] if an axis rounds to 0 pixels
    ///
    /// # Examples
    ///
    /// ```
    /// use ninepatch_scale::{ResolutionMapping, ScalingRequest};
    ///
    /// let req = ScalingRequest::new(100.0, 50.0, ResolutionMapping::QHD_TO_FHD_PORTRAIT);
    /// assert_eq!(req.target_dimensions().unwrap(), (300, 150));
    /// ```
    pub fn target_dimensions(&self) -> ScaleResult<(u32, u32)> {
        check_positive("requested width", self.width)?;
        check_positive("requested height", self.height)?;
        self.resolution.validate()?;

        let (mut w, mut h) = (self.width, self.height);
        if !self.raw_pixel_units {
            w *= LOGICAL_UNIT_PIXEL_FACTOR;
            h *= LOGICAL_UNIT_PIXEL_FACTOR;
        }
        let scaled_w = w * self.resolution.scale_x();
        let scaled_h = h * self.resolution.scale_y();

        let out_w = round_half_up(scaled_w);
        let out_h = round_half_up(scaled_h);
        if out_w < 1.0 || out_h < 1.0 {
            return Err(ScaleError::EmptyTarget {
                width: scaled_w,
                height: scaled_h,
            });
        }
        if out_w > u32::MAX as f64 || out_h > u32::MAX as f64 {
            return Err(ScaleError::InvalidParameters(format!(
                "target size {}x{} is too large",
                out_w, out_h
            )));
        }
        Ok((out_w as u32, out_h as u32))
    }
}

fn check_positive(name: &str, v: f64) -> ScaleResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ScaleError::InvalidParameters(format!(
            "{} must be finite and positive, got {}",
            name, v
        )))
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
