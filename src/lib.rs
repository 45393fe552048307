//! Offline VRAM capacity planning for LLM inference
//!
//! Estimates the GPU memory a large language model needs to serve inference,
//! from a declarative description of its architecture, quantization, and
//! workload. The estimate is a static point figure for capacity planning,
//! not a live measurement.
//!
//! ## Main Components
//!
//! - `estimator`: The memory formulas (weights, KV cache, activations)
//! - `config`: Input configuration, defaults, and built-in model presets
//! - `hardware`: Reference GPU table and fit assessment
//! - `report`: JSON rendering and saveable plan reports

pub mod config;
pub mod estimator;
pub mod hardware;
pub mod report;

pub use config::EstimateConfig;
pub use estimator::{estimate, EstimateError, VramProfile};

/// Library errors
pub use anyhow::{Error, Result};
