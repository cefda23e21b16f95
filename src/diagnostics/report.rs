use super::TimingBreakdown;
use crate::image::{GrayImageU8, ImageView};
use crate::synth::{GratingParams, Quantization, SamplingGrid};
use serde::Serialize;

/// Result of [`GratingSynthesizer::synthesize_with_diagnostics`](crate::GratingSynthesizer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisReport {
    #[serde(skip)]
    pub image: GrayImageU8,
    pub trace: SynthesisTrace,
}

/// What the synthesizer did to produce one grid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub noise_samples: usize,
    pub blobs_placed: usize,
    /// Range of the field before clipping, `[min, max]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_range: Option<[f32; 2]>,
    pub clipped_low: usize,
    pub clipped_high: usize,
    pub stats: IntensityStats,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub size: usize,
    pub pitch_px: f64,
    pub noise_level: f64,
    pub center_defect: bool,
    pub blob_count: usize,
    pub sampling: SamplingGrid,
    pub quantization: Quantization,
}

impl From<&GratingParams> for InputDescriptor {
    fn from(p: &GratingParams) -> Self {
        Self {
            size: p.size,
            pitch_px: p.pitch_px,
            noise_level: p.noise_level,
            center_defect: p.center_defect,
            blob_count: p.blobs.count,
            sampling: p.sampling,
            quantization: p.quantization,
        }
    }
}

/// Summary statistics of a quantized grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

impl IntensityStats {
    pub fn from_grid(grid: &GrayImageU8) -> Self {
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        let mut sum = 0u64;
        let mut count = 0u64;
        for row in grid.rows() {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
                sum += u64::from(v);
                count += 1;
            }
        }
        if count == 0 {
            return Self::default();
        }
        Self {
            min,
            max,
            mean: sum as f64 / count as f64,
        }
    }
}

impl SynthesisTrace {
    /// Multi-line human readable summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Synthesis summary\n  size: {0}x{0}\n  pitch_px: {1:.2}\n  noise_level: {2:.2}\n  center_defect: {3}\n  blobs: {4}\n",
            self.input.size,
            self.input.pitch_px,
            self.input.noise_level,
            self.input.center_defect,
            self.blobs_placed
        ));
        if let Some([lo, hi]) = self.field_range {
            out.push_str(&format!("  field range: [{lo:.2}, {hi:.2}]\n"));
        }
        out.push_str(&format!(
            "  clipped: low={} high={}\n  intensity: min={} max={} mean={:.2}\n",
            self.clipped_low, self.clipped_high, self.stats.min, self.stats.max, self.stats.mean
        ));
        out.push_str(&format!("  timings (ms): total={:.3}", self.timings.total_ms));
        for stage in &self.timings.stages {
            out.push_str(&format!(" {}={:.3}", stage.label, stage.elapsed_ms));
        }
        out
    }
}
