//! Parameter types configuring the grating synthesizer.
//!
//! The top-level [`GratingParams`] carries the four knobs every fixture needs
//! (size, pitch, noise, center defect) plus the generation policy: ring
//! profile, center-defect shape, blob-defect ranges, coordinate sampling and
//! quantization. Defaults reproduce the classic AFM fixture look.

use super::error::SynthError;
use serde::{Deserialize, Serialize};

/// Synthesizer-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GratingParams {
    /// Side length of the square image in pixels.
    pub size: usize,
    /// Distance between successive rings in pixels.
    pub pitch_px: f64,
    /// Standard deviation of the additive Gaussian noise (intensity units).
    pub noise_level: f64,
    /// Adds the smooth central "mountain" when set.
    pub center_defect: bool,
    pub profile: GratingProfile,
    pub center: CenterDefectParams,
    pub blobs: BlobDefectParams,
    pub sampling: SamplingGrid,
    pub quantization: Quantization,
}

impl Default for GratingParams {
    fn default() -> Self {
        Self {
            size: 512,
            pitch_px: 68.0,
            noise_level: 10.0,
            center_defect: true,
            profile: GratingProfile::default(),
            center: CenterDefectParams::default(),
            blobs: BlobDefectParams::default(),
            sampling: SamplingGrid::default(),
            quantization: Quantization::default(),
        }
    }
}

impl GratingParams {
    /// Noise-free rings without any defects. Output depends only on `size`
    /// and `pitch_px`.
    pub fn rings_only(size: usize, pitch_px: f64) -> Self {
        Self {
            size,
            pitch_px,
            noise_level: 0.0,
            center_defect: false,
            blobs: BlobDefectParams::disabled(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SynthError> {
        if self.size == 0 {
            return Err(SynthError::EmptyImage);
        }
        if !(self.pitch_px.is_finite() && self.pitch_px > 0.0) {
            return Err(SynthError::InvalidPitch(self.pitch_px));
        }
        if !(self.noise_level.is_finite() && self.noise_level >= 0.0) {
            return Err(SynthError::InvalidNoiseLevel(self.noise_level));
        }
        check_finite("profile.mean", self.profile.mean)?;
        check_finite("profile.amplitude", self.profile.amplitude)?;
        if self.center_defect {
            check_finite("center.amplitude", self.center.amplitude)?;
            if !(self.center.width_px.is_finite() && self.center.width_px > 0.0) {
                return Err(SynthError::InvalidCenterWidth(self.center.width_px));
            }
        }
        self.blobs.validate(self.size)
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), SynthError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SynthError::NonFinite { name, value })
    }
}

/// Sinusoidal ring profile `mean + amplitude * sin(2πR / pitch)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GratingProfile {
    pub mean: f64,
    pub amplitude: f64,
}

impl Default for GratingProfile {
    fn default() -> Self {
        Self {
            mean: 128.0,
            amplitude: 50.0,
        }
    }
}

/// Gaussian bump `amplitude * exp(-R² / width²)` at the image center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterDefectParams {
    pub amplitude: f64,
    pub width_px: f64,
}

impl Default for CenterDefectParams {
    fn default() -> Self {
        Self {
            amplitude: 40.0,
            width_px: 30.0,
        }
    }
}

/// Random Gaussian blob defects.
///
/// - `count`: number of blobs stamped per image.
/// - `radius_min_px..radius_max_px`: half-open integer range for the falloff
///   radius.
/// - `amplitude_min..amplitude_max`: half-open integer range for the signed
///   peak amplitude.
///
/// Blob centers are drawn from the central half of the image,
/// `[size/4, 3*size/4)` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobDefectParams {
    pub count: usize,
    pub radius_min_px: u32,
    pub radius_max_px: u32,
    pub amplitude_min: i32,
    pub amplitude_max: i32,
}

impl Default for BlobDefectParams {
    fn default() -> Self {
        Self {
            count: 5,
            radius_min_px: 10,
            radius_max_px: 30,
            amplitude_min: -30,
            amplitude_max: 30,
        }
    }
}

impl BlobDefectParams {
    pub fn disabled() -> Self {
        Self {
            count: 0,
            ..Default::default()
        }
    }

    /// Half-open pixel window blob centers are drawn from.
    pub fn placement_window(size: usize) -> (usize, usize) {
        (size / 4, 3 * size / 4)
    }

    fn validate(&self, size: usize) -> Result<(), SynthError> {
        if self.count == 0 {
            return Ok(());
        }
        if self.radius_min_px == 0 || self.radius_min_px >= self.radius_max_px {
            return Err(SynthError::InvalidBlobRadius {
                min: self.radius_min_px,
                max: self.radius_max_px,
            });
        }
        if self.amplitude_min >= self.amplitude_max {
            return Err(SynthError::InvalidBlobAmplitude {
                min: self.amplitude_min,
                max: self.amplitude_max,
            });
        }
        let (lo, hi) = Self::placement_window(size);
        if lo >= hi {
            return Err(SynthError::EmptyPlacementWindow { size });
        }
        Ok(())
    }
}

/// Mapping from pixel index to field coordinate along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingGrid {
    /// Unit spacing, `k - size/2` with integer `size/2`. The ring period is
    /// exactly `pitch_px` pixels and pixel `(size/2, size/2)` sits at R = 0.
    #[default]
    PixelCentered,
    /// `size` samples spread evenly over the closed interval
    /// `[-size/2, size/2]`. Spacing is `size / (size - 1)`, so rings come out
    /// marginally tighter than `pitch_px` on screen.
    Linspace,
}

impl SamplingGrid {
    /// Field coordinate of pixel `k` on an axis of `size` pixels.
    pub fn coord(self, k: usize, size: usize) -> f64 {
        match self {
            SamplingGrid::PixelCentered => k as f64 - (size / 2) as f64,
            SamplingGrid::Linspace => {
                let half = size as f64 / 2.0;
                if size < 2 {
                    return -half;
                }
                -half + k as f64 * (size as f64 / (size - 1) as f64)
            }
        }
    }

    /// All coordinates of one axis.
    pub fn axis(self, size: usize) -> Vec<f64> {
        (0..size).map(|k| self.coord(k, size)).collect()
    }

    /// Field coordinate of a blob whose center was drawn at pixel `k`.
    ///
    /// `Linspace` re-centers by the fractional half size without rescaling,
    /// which is how those fixtures have always been produced.
    pub fn blob_coord(self, k: usize, size: usize) -> f64 {
        match self {
            SamplingGrid::PixelCentered => self.coord(k, size),
            SamplingGrid::Linspace => k as f64 - size as f64 / 2.0,
        }
    }
}

/// Conversion of clipped intensities to 8-bit samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantization {
    /// Nearest integer.
    #[default]
    Round,
    /// Drop the fractional part.
    Truncate,
}

impl Quantization {
    /// Clip `v` to `[0, 255]` and convert. NaN maps to 0.
    #[inline]
    pub fn apply(self, v: f32) -> u8 {
        let clipped = v.clamp(0.0, 255.0);
        match self {
            Quantization::Round => clipped.round() as u8,
            Quantization::Truncate => clipped as u8,
        }
    }
}
