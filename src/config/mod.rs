pub mod parameters;
pub mod presets;
pub mod quantization;

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub use parameters::ModelParameters;
pub use presets::{ModelPreset, MODEL_PRESETS};
pub use quantization::Quantization;

/// Declarative description of one model deployment: architecture,
/// quantization, and serving workload.
///
/// Mirrors the JSON input shape: two nested groups plus flat workload
/// fields. Omitted optional fields (the whole `quantization` group, or any
/// workload field) fall back to the documented defaults; the required
/// architecture fields never do. The estimator reads the configuration and
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateConfig {
    #[serde(default)]
    pub parameters: ModelParameters,

    #[serde(default)]
    pub quantization: Quantization,

    /// Sequences evaluated together per forward pass.
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,

    /// Context window length in tokens.
    #[serde(default = "default_context_length")]
    pub context_length: u64,

    /// Simultaneous independent requests sharing the instance, each with
    /// its own KV cache and activations.
    #[serde(default = "default_concurrent_users")]
    pub concurrent_users: u64,
}

fn default_batch_size() -> u64 {
    1
}

fn default_context_length() -> u64 {
    2048
}

fn default_concurrent_users() -> u64 {
    1
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            parameters: ModelParameters::default(),
            quantization: Quantization::default(),
            batch_size: default_batch_size(),
            context_length: default_context_length(),
            concurrent_users: default_concurrent_users(),
        }
    }
}

impl EstimateConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("Invalid configuration JSON: {}", e))
    }

    /// Read and parse a configuration from anything readable (stdin, pipes).
    pub fn from_reader<R: Read>(mut reader: R) -> anyhow::Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json_str(&buf)
    }

    /// Read and parse a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            anyhow::anyhow!("Failed to read {}: {}", path.as_ref().display(), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Build a configuration for a built-in model preset, with workload and
    /// quantization left at their defaults.
    pub fn for_preset(preset: &str) -> anyhow::Result<Self> {
        let preset = presets::lookup(preset)?;
        Ok(Self {
            parameters: preset.parameters(),
            ..Default::default()
        })
    }
}
