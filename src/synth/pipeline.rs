//! Synthesizer pipeline driving the grating generation end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use grating_synth::{GratingParams, GratingSynthesizer};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # fn example() -> Result<(), grating_synth::SynthError> {
//! let synth = GratingSynthesizer::new(GratingParams::default())?;
//! let mut rng = StdRng::seed_from_u64(3);
//! let report = synth.synthesize_with_diagnostics(&mut rng);
//! println!("{}", report.trace.summary());
//! # Ok(())
//! # }
//! ```
use super::defects::Defect;
use super::error::SynthError;
use super::field::{render_rings, CoordinateField};
use super::noise::{add_gaussian_noise, noise_distribution};
use super::params::{BlobDefectParams, GratingParams, Quantization};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    InputDescriptor, IntensityStats, SynthesisReport, SynthesisTrace, TimingBreakdown,
};
use crate::image::{GrayImageU8, ImageF32, ImageView};
use log::debug;
use rand::Rng;
use rand_distr::Normal;
use std::time::Instant;

/// Generator of circular grating images for a fixed parameter set.
///
/// Parameters are validated once in [`GratingSynthesizer::new`]; every
/// `synthesize*` call afterwards is total. Randomness comes only from the
/// generator passed in, so a seeded generator reproduces the grid exactly.
#[derive(Clone, Debug)]
pub struct GratingSynthesizer {
    params: GratingParams,
    coords: CoordinateField,
    noise: Option<Normal<f64>>,
}

struct RenderedField {
    field: ImageF32,
    noise_samples: usize,
    blobs_placed: usize,
}

impl GratingSynthesizer {
    /// Create a synthesizer, rejecting degenerate parameters.
    pub fn new(params: GratingParams) -> Result<Self, SynthError> {
        params.validate()?;
        let noise = noise_distribution(params.noise_level)?;
        let coords = CoordinateField::new(params.size, params.sampling);
        Ok(Self {
            params,
            coords,
            noise,
        })
    }

    pub fn params(&self) -> &GratingParams {
        &self.params
    }

    /// Produce the clipped 8-bit grid.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> GrayImageU8 {
        let rendered = self.render(rng, None);
        quantize(&rendered.field, self.params.quantization).0
    }

    /// Produce the intensity field before clipping and quantization.
    pub fn synthesize_field<R: Rng + ?Sized>(&self, rng: &mut R) -> ImageF32 {
        self.render(rng, None).field
    }

    /// Produce the grid together with a trace of every stage.
    pub fn synthesize_with_diagnostics<R: Rng + ?Sized>(&self, rng: &mut R) -> SynthesisReport {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let rendered = self.render(rng, Some(&mut timings));

        let field_range = rendered.field.min_max().map(|(lo, hi)| [lo, hi]);

        let quant_start = Instant::now();
        let (image, clip) = quantize(&rendered.field, self.params.quantization);
        timings.push("quantize", elapsed_ms(quant_start));

        let stats = IntensityStats::from_grid(&image);
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "GratingSynthesizer::synthesize done clipped_low={} clipped_high={} mean={:.2} total_ms={:.3}",
            clip.low, clip.high, stats.mean, timings.total_ms
        );

        SynthesisReport {
            image,
            trace: SynthesisTrace {
                input: InputDescriptor::from(&self.params),
                timings,
                noise_samples: rendered.noise_samples,
                blobs_placed: rendered.blobs_placed,
                field_range,
                clipped_low: clip.low,
                clipped_high: clip.high,
                stats,
            },
        }
    }

    fn render<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mut timings: Option<&mut TimingBreakdown>,
    ) -> RenderedField {
        let p = &self.params;
        debug!(
            "GratingSynthesizer::synthesize start size={} pitch_px={:.3} noise={:.3} center_defect={} blobs={}",
            p.size, p.pitch_px, p.noise_level, p.center_defect, p.blobs.count
        );
        let mut field = ImageF32::new(p.size, p.size);

        timed(&mut timings, "rings", || {
            render_rings(&mut field, &self.coords, p.pitch_px, &p.profile)
        });

        let noise_samples = timed(&mut timings, "noise", || match &self.noise {
            Some(noise) => add_gaussian_noise(&mut field, noise, &mut *rng),
            None => 0,
        });

        if p.center_defect {
            timed(&mut timings, "center_defect", || {
                Defect::central(&p.center).stamp(&mut field, &self.coords)
            });
        }

        let blobs_placed = timed(&mut timings, "blobs", || {
            self.stamp_blobs(&mut field, &p.blobs, &mut *rng)
        });

        RenderedField {
            field,
            noise_samples,
            blobs_placed,
        }
    }

    fn stamp_blobs<R: Rng + ?Sized>(
        &self,
        field: &mut ImageF32,
        blobs: &BlobDefectParams,
        rng: &mut R,
    ) -> usize {
        for idx in 0..blobs.count {
            let blob = Defect::sample_blob(rng, &self.coords, blobs);
            debug!(
                "blob {idx}: center=({:.1}, {:.1}) radius={} amplitude={}",
                blob.center.x, blob.center.y, blob.radius, blob.amplitude
            );
            blob.stamp(field, &self.coords);
        }
        blobs.count
    }
}

/// Run `stage`, recording its duration under `label` when timings are kept.
fn timed<T>(
    timings: &mut Option<&mut TimingBreakdown>,
    label: &str,
    stage: impl FnOnce() -> T,
) -> T {
    match timings.as_deref_mut() {
        Some(timings) => {
            let start = Instant::now();
            let out = stage();
            timings.push(label, elapsed_ms(start));
            out
        }
        None => stage(),
    }
}

#[derive(Default)]
struct ClipCounts {
    low: usize,
    high: usize,
}

fn quantize(field: &ImageF32, quantization: Quantization) -> (GrayImageU8, ClipCounts) {
    let mut clip = ClipCounts::default();
    let mut data = Vec::with_capacity(field.w * field.h);
    for row in field.rows() {
        for &v in row {
            if v < 0.0 {
                clip.low += 1;
            } else if v > 255.0 {
                clip.high += 1;
            }
            data.push(quantization.apply(v));
        }
    }
    (GrayImageU8::new(field.w, field.h, data), clip)
}

/// Generate one grid with the default defect policy.
///
/// Shorthand for building [`GratingParams`] from the four classic knobs and
/// calling [`GratingSynthesizer::synthesize`].
pub fn synthesize<R: Rng + ?Sized>(
    size: usize,
    pitch_px: f64,
    noise_level: f64,
    center_defect: bool,
    rng: &mut R,
) -> Result<GrayImageU8, SynthError> {
    let params = GratingParams {
        size,
        pitch_px,
        noise_level,
        center_defect,
        ..Default::default()
    };
    Ok(GratingSynthesizer::new(params)?.synthesize(rng))
}
