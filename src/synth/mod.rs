//! Procedural synthesis of AFM-like circular grating images.
//!
//! Overview
//! - Lays a coordinate field over the square image with its origin at the
//!   center (unit pixel spacing by default).
//! - Renders concentric rings `mean + amplitude * sin(2πR / pitch)`.
//! - Adds zero-mean Gaussian noise per pixel (scanner noise).
//! - Optionally adds a Gaussian "mountain" at the origin.
//! - Stamps a fixed number of random Gaussian blobs drawn from the central
//!   half of the image.
//! - Clips to `[0, 255]` and quantizes to 8 bits.
//!
//! Modules
//! - [`params`] – configuration types with the classic fixture defaults.
//! - `pipeline` – the [`GratingSynthesizer`] implementation.
//! - [`field`] – coordinate field and ring rendering.
//! - [`defects`] – the ephemeral [`Defect`](defects::Defect) type.
//! - `noise` – additive Gaussian noise.

pub mod defects;
mod error;
pub mod field;
mod noise;
pub mod params;
mod pipeline;

pub use error::SynthError;
pub use params::{
    BlobDefectParams, CenterDefectParams, GratingParams, GratingProfile, Quantization,
    SamplingGrid,
};
pub use pipeline::{synthesize, GratingSynthesizer};
