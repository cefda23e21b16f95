#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod image;
pub mod synth;

// --- High-level re-exports -------------------------------------------------

pub use crate::synth::{synthesize, GratingParams, GratingSynthesizer, SynthError};

pub use crate::diagnostics::{SynthesisReport, SynthesisTrace};

pub use crate::image::io::{save_grayscale_u8, write_json_file};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageView};
    pub use crate::synth::{BlobDefectParams, GratingParams, GratingSynthesizer, SynthError};
}
