//! Coordinate field and the base ring pattern.
use super::params::{GratingProfile, SamplingGrid};
use crate::image::{ImageF32, ImageViewMut};
use nalgebra::Point2;
use std::f64::consts::TAU;

/// Field coordinates of a square image, shared by both axes.
#[derive(Clone, Debug)]
pub struct CoordinateField {
    size: usize,
    sampling: SamplingGrid,
    axis: Vec<f64>,
}

impl CoordinateField {
    pub fn new(size: usize, sampling: SamplingGrid) -> Self {
        Self {
            size,
            sampling,
            axis: sampling.axis(size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Field coordinate of pixel (column `x`, row `y`).
    #[inline]
    pub fn point(&self, x: usize, y: usize) -> Point2<f64> {
        Point2::new(self.axis[x], self.axis[y])
    }

    /// Squared distance of pixel (x, y) from the field origin.
    #[inline]
    pub fn radius_sq(&self, x: usize, y: usize) -> f64 {
        let (px, py) = (self.axis[x], self.axis[y]);
        px * px + py * py
    }

    /// Field coordinate of a blob center drawn at pixel (x, y).
    pub fn blob_center(&self, x: usize, y: usize) -> Point2<f64> {
        Point2::new(
            self.sampling.blob_coord(x, self.size),
            self.sampling.blob_coord(y, self.size),
        )
    }
}

/// Ring intensity at radius `r`.
#[inline]
pub fn ring_intensity(r: f64, pitch_px: f64, profile: &GratingProfile) -> f64 {
    profile.mean + profile.amplitude * (TAU * r / pitch_px).sin()
}

/// Overwrite `field` with the concentric ring pattern.
pub fn render_rings(
    field: &mut ImageF32,
    coords: &CoordinateField,
    pitch_px: f64,
    profile: &GratingProfile,
) {
    for y in 0..coords.size() {
        let row = field.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            let r = coords.radius_sq(x, y).sqrt();
            *px = ring_intensity(r, pitch_px, profile) as f32;
        }
    }
}
