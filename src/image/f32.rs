//! Owned single-channel f32 field in row-major layout (stride == width).
//!
//! The synthesizer accumulates intensities here before clipping, so values
//! are free to leave `[0, 255]`.
#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }
    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Add `v` to the value at (x, y).
    pub fn add(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] += v;
    }

    /// Smallest and largest stored values, `None` for an empty field.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageView, ImageViewMut};

    #[test]
    fn rows_follow_row_major_layout() {
        let mut img = ImageF32::new(3, 2);
        img.row_mut(1).copy_from_slice(&[1.0, 2.0, 3.0]);
        img.add(0, 0, -4.5);

        let rows: Vec<&[f32]> = img.rows().collect();
        assert_eq!(rows, vec![&[-4.5, 0.0, 0.0][..], &[1.0, 2.0, 3.0][..]]);
        assert_eq!(img.get(2, 1), 3.0);
        assert_eq!(img.min_max(), Some((-4.5, 3.0)));
        assert_eq!(ImageF32::new(0, 0).min_max(), None);
    }
}
