//! Fixed catalogue of fixture gratings.
//!
//! Pitches are quoted in nanometres and rendered at [`NM_PER_PIXEL`], so an
//! analysis tool told to use that scale should report the nominal pitch.
use crate::synth::GratingParams;

/// Scale the fixtures are drawn at.
pub const NM_PER_PIXEL: f64 = 10.0;

pub const SAMPLE_SIZE_PX: usize = 512;
pub const SAMPLE_NOISE_LEVEL: f64 = 8.0;

/// One fixture image of the catalogue.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSpec {
    pub file_name: String,
    pub pitch_nm: u32,
    pub pitch_px: f64,
    pub description: String,
    pub center_defect: bool,
}

impl SampleSpec {
    pub fn from_pitch_nm(pitch_nm: u32, description: impl Into<String>) -> Self {
        Self {
            file_name: format!("circular-grating-{pitch_nm}nm.png"),
            pitch_nm,
            pitch_px: pitch_px_for_nm(f64::from(pitch_nm)),
            description: description.into(),
            center_defect: true,
        }
    }

    /// Synthesizer parameters for this sample.
    pub fn params(&self) -> GratingParams {
        GratingParams {
            size: SAMPLE_SIZE_PX,
            pitch_px: self.pitch_px,
            noise_level: SAMPLE_NOISE_LEVEL,
            center_defect: self.center_defect,
            ..Default::default()
        }
    }
}

/// Whole-pixel pitch closest to `pitch_nm` at [`NM_PER_PIXEL`].
pub fn pitch_px_for_nm(pitch_nm: f64) -> f64 {
    (pitch_nm / NM_PER_PIXEL).round()
}

/// The three gratings shipped as fixtures.
pub fn default_samples() -> Vec<SampleSpec> {
    vec![
        SampleSpec::from_pitch_nm(623, "623nm pitch grating"),
        SampleSpec::from_pitch_nm(668, "668nm pitch grating (with center defect)"),
        SampleSpec::from_pitch_nm(717, "717nm pitch grating"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_pitches_round_to_whole_pixels() {
        let samples = default_samples();
        let pitches: Vec<f64> = samples.iter().map(|s| s.pitch_px).collect();
        assert_eq!(pitches, vec![62.0, 67.0, 72.0]);
        let names: Vec<&str> = samples.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "circular-grating-623nm.png",
                "circular-grating-668nm.png",
                "circular-grating-717nm.png"
            ]
        );
    }

    #[test]
    fn sample_params_are_valid_and_noisy() {
        for sample in default_samples() {
            let p = sample.params();
            assert_eq!(p.size, 512);
            assert_eq!(p.noise_level, 8.0);
            assert!(p.center_defect);
            assert_eq!(p.blobs.count, 5);
            assert!(p.validate().is_ok(), "{} should validate", sample.file_name);
        }
    }
}
