//! Configuration: the fixture catalogue and the demo tool's JSON schema.

pub mod demo;
pub mod samples;

pub use samples::{default_samples, pitch_px_for_nm, SampleSpec, NM_PER_PIXEL};
