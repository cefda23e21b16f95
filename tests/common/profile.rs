use grating_synth::image::GrayImageU8;

/// Intensities along the row through the image center, starting at the
/// center pixel and walking right.
pub fn center_ray(grid: &GrayImageU8) -> Vec<u8> {
    assert!(grid.width() > 0, "grid must not be empty");
    let c = grid.width() / 2;
    (c..grid.width()).map(|x| grid.get(x, c)).collect()
}

/// Number of positions where `ray[r] != ray[r + period]`.
pub fn period_mismatches(ray: &[u8], period: usize) -> usize {
    assert!(period > 0, "period must be positive");
    ray.iter()
        .zip(ray.iter().skip(period))
        .filter(|(a, b)| a != b)
        .count()
}
