//! Diagnostics produced alongside a synthesized grid.
//!
//! `SynthesisReport` is returned by the synthesizer's diagnostic entry point
//! and bundles the grid with a serializable `SynthesisTrace`.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, IntensityStats, SynthesisReport, SynthesisTrace};
pub use timing::{StageTiming, TimingBreakdown};
