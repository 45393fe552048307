use serde::{Deserialize, Serialize};

/// Storage widths for weights and activations (the `quantization` group).
///
/// Widths may be fractional: k-quant schemes average out at non-integer
/// bits per element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantization {
    /// Bits per stored weight. 16 is half precision; 4 is aggressive
    /// post-training quantization.
    #[serde(default = "default_weight_bits")]
    pub bits_per_weight: f64,

    /// Bits per activation/KV-cache element.
    #[serde(default = "default_activation_bits")]
    pub bits_per_activation: f64,
}

fn default_weight_bits() -> f64 {
    16.0
}

fn default_activation_bits() -> f64 {
    16.0
}

impl Default for Quantization {
    fn default() -> Self {
        Self {
            bits_per_weight: default_weight_bits(),
            bits_per_activation: default_activation_bits(),
        }
    }
}
