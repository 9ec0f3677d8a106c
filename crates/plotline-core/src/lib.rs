//! Plotline Core
//!
//! This crate contains the shared foundation for plotline: the vector
//! algebra used by tessellation, plus logging, profiling and configuration.

pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::Config;
pub use math::Vector3;
