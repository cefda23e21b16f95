//! Localized Gaussian intensity perturbations.
//!
//! A [`Defect`] lives only while the field is being built: it is sampled,
//! stamped onto every pixel, and dropped.
use super::field::CoordinateField;
use super::params::{BlobDefectParams, CenterDefectParams};
use crate::image::ImageF32;
use nalgebra::Point2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Defect {
    pub center: Point2<f64>,
    pub radius: f64,
    pub amplitude: f64,
}

impl Defect {
    /// Central "mountain" at the field origin.
    pub fn central(params: &CenterDefectParams) -> Self {
        Self {
            center: Point2::origin(),
            radius: params.width_px,
            amplitude: params.amplitude,
        }
    }

    /// Draw one blob. Draw order: center column, center row, radius,
    /// amplitude.
    pub fn sample_blob<R: Rng + ?Sized>(
        rng: &mut R,
        coords: &CoordinateField,
        params: &BlobDefectParams,
    ) -> Self {
        let (lo, hi) = BlobDefectParams::placement_window(coords.size());
        let cx = rng.random_range(lo..hi);
        let cy = rng.random_range(lo..hi);
        let radius = rng.random_range(params.radius_min_px..params.radius_max_px);
        let amplitude = rng.random_range(params.amplitude_min..params.amplitude_max);
        Self {
            center: coords.blob_center(cx, cy),
            radius: f64::from(radius),
            amplitude: f64::from(amplitude),
        }
    }

    /// `amplitude * exp(-d² / radius²)` at field point `p`.
    #[inline]
    pub fn contribution(&self, p: &Point2<f64>) -> f64 {
        let d2 = (*p - self.center).norm_squared();
        self.amplitude * (-d2 / (self.radius * self.radius)).exp()
    }

    /// Add this defect's contribution to every sample of `field`.
    pub fn stamp(&self, field: &mut ImageF32, coords: &CoordinateField) {
        for y in 0..field.h {
            for x in 0..field.w {
                let v = self.contribution(&coords.point(x, y));
                field.add(x, y, v as f32);
            }
        }
    }
}
