#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items
)]
#![doc = include_str!("../README.md")]

pub mod cloud;
pub mod config;
pub mod dataset;
pub mod embedding;
pub mod error;
pub mod line;
pub mod points;
pub mod rotation;
pub mod translation;
pub mod utils;

pub use config::{CloudNoise, EmbedParams, EulerAngles, Spacing, TubeConfig};
pub use dataset::TubeCloud;
pub use error::GenError;
pub use points::{Points3, PointsHd};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
