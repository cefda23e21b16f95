use super::error::SynthError;
use crate::image::{ImageF32, ImageViewMut};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Zero-mean Gaussian noise source for a given deviation.
///
/// `None` for a zero deviation: such fields get no noise and the generator
/// is left untouched.
pub fn noise_distribution(std_dev: f64) -> Result<Option<Normal<f64>>, SynthError> {
    if std_dev == 0.0 {
        return Ok(None);
    }
    Normal::new(0.0, std_dev)
        .map(Some)
        .map_err(|_| SynthError::InvalidNoiseLevel(std_dev))
}

/// Add one draw of `noise` to every sample, row-major. Returns the number of
/// draws taken from `rng`.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    field: &mut ImageF32,
    noise: &Normal<f64>,
    rng: &mut R,
) -> usize {
    let mut drawn = 0usize;
    for y in 0..field.h {
        for px in field.row_mut(y) {
            *px += noise.sample(rng) as f32;
            drawn += 1;
        }
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_deviation_has_no_distribution() {
        assert!(matches!(noise_distribution(0.0), Ok(None)));
    }

    #[test]
    fn invalid_deviation_is_an_error() {
        assert_eq!(
            noise_distribution(-1.0).unwrap_err(),
            SynthError::InvalidNoiseLevel(-1.0)
        );
        assert!(noise_distribution(f64::NAN).is_err());
    }

    #[test]
    fn noise_statistics_follow_deviation() {
        let noise = noise_distribution(8.0)
            .expect("valid deviation")
            .expect("non-zero deviation");
        let mut field = ImageF32::new(128, 128);
        let mut rng = StdRng::seed_from_u64(42);
        let drawn = add_gaussian_noise(&mut field, &noise, &mut rng);
        assert_eq!(drawn, 128 * 128);

        let n = field.data.len() as f64;
        let mean = field.data.iter().map(|&v| v as f64).sum::<f64>() / n;
        let var = field
            .data
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        assert!(mean.abs() < 0.5, "mean={mean}");
        assert!((var.sqrt() - 8.0).abs() < 0.5, "std={}", var.sqrt());
    }
}
