//! VRAM estimation for LLM inference serving
//!
//! The entire calculator lives in this module: three independently computed
//! memory components (model weights, KV cache, activations) plus a fixed
//! framework overhead, aggregated into a [`VramProfile`]. Everything is
//! closed-form arithmetic over an immutable [`EstimateConfig`], with no I/O
//! and no hidden state, so estimates are deterministic and safe to compute
//! concurrently.

use crate::config::EstimateConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary gigabyte (1024³ bytes); every profile field is reported in these.
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Fixed framework/runtime reservation (allocator pools, device context,
/// runtime buffers) not attributable to any specific tensor. Empirical
/// calibration figure, reported in the profile at full precision.
pub const FRAMEWORK_OVERHEAD_GB: f64 = 1.35;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("`parameters.num_attention_heads` must be positive to derive a per-head dimension")]
    ZeroAttentionHeads,

    #[error("`{field}` must be positive, got {value}")]
    InvalidBits { field: &'static str, value: f64 },
}

/// Estimated VRAM footprint of one model deployment.
///
/// A value object: created once per [`estimate`] call, never mutated. The
/// three variable components and the total are rounded to 2 decimal places
/// for presentation; the overhead is the literal constant. Serialized field
/// order matches the declaration order below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VramProfile {
    pub base_model_weights_gb: f64,
    pub activations_gb: f64,
    pub kv_cache_gb: f64,
    pub framework_overhead_gb: f64,
    pub total_vram_required_gb: f64,
}

/// Bytes needed to store the model weights.
///
/// `bytes = floor(total_parameters * bits_per_weight / 8)`; sub-byte
/// remainders are truncated, not rounded.
pub fn weight_bytes(config: &EstimateConfig) -> Result<u64, EstimateError> {
    let params = require("parameters.total_parameters", config.parameters.total_parameters)?;
    let bits = positive_bits(
        "quantization.bits_per_weight",
        config.quantization.bits_per_weight,
    )?;
    Ok(quantized_bytes(params as u128, bits))
}

/// Bytes needed for the attention key/value cache across every concurrent
/// user, batch element, context position, and layer.
///
/// The per-head dimension is `D = floor(hidden_size / num_attention_heads)`,
/// taken by integer division. An uneven split truncates rather than rounds.
///
/// `bytes = floor(U * B * S * L * 2 * D * bits_per_activation / 8)`, where
/// the factor 2 is the separately stored key and value tensor per layer per
/// token. A head count larger than the hidden size truncates D to 0, which
/// degenerates to a zero-byte cache rather than an error.
pub fn kv_cache_bytes(config: &EstimateConfig) -> Result<u64, EstimateError> {
    let layers = require("parameters.num_layers", config.parameters.num_layers)?;
    let hidden = require("parameters.hidden_size", config.parameters.hidden_size)?;
    let heads = require(
        "parameters.num_attention_heads",
        config.parameters.num_attention_heads,
    )?;
    if heads == 0 {
        return Err(EstimateError::ZeroAttentionHeads);
    }
    let bits = positive_bits(
        "quantization.bits_per_activation",
        config.quantization.bits_per_activation,
    )?;

    let head_dim = hidden / heads;
    let cells = config.concurrent_users as u128
        * config.batch_size as u128
        * config.context_length as u128
        * layers as u128
        * 2
        * head_dim as u128;
    Ok(quantized_bytes(cells, bits))
}

/// Bytes of transient working memory for intermediate tensors during a
/// forward pass.
///
/// `bytes = floor(U * B * S * hidden_size * num_layers * bits_per_activation / 8)`.
pub fn activation_bytes(config: &EstimateConfig) -> Result<u64, EstimateError> {
    let layers = require("parameters.num_layers", config.parameters.num_layers)?;
    let hidden = require("parameters.hidden_size", config.parameters.hidden_size)?;
    let bits = positive_bits(
        "quantization.bits_per_activation",
        config.quantization.bits_per_activation,
    )?;

    let cells = config.concurrent_users as u128
        * config.batch_size as u128
        * config.context_length as u128
        * hidden as u128
        * layers as u128;
    Ok(quantized_bytes(cells, bits))
}

/// Estimate the VRAM required to serve one model deployment.
///
/// Computes the three memory components independently, converts each to
/// binary gigabytes, and adds [`FRAMEWORK_OVERHEAD_GB`]:
///
/// ```text
/// total_gb = weights_gb + kv_cache_gb + activations_gb + 1.35
/// ```
///
/// # Parameters
///
/// * `config` - Model architecture, quantization, and serving workload.
///   Required architecture fields must be present; workload and quantization
///   fields carry documented defaults.
///
/// # Returns
///
/// A [`VramProfile`] with the variable components and the total rounded to
/// 2 decimal places. Fails with [`EstimateError`] if a required field is
/// absent or a supplied number is unusable; no partial profile is produced.
///
/// # Errors
///
/// * [`EstimateError::MissingField`] - a required `parameters.*` field is
///   absent.
/// * [`EstimateError::ZeroAttentionHeads`] - the per-head dimension divisor
///   is zero.
/// * [`EstimateError::InvalidBits`] - a bit width is zero or negative.
pub fn estimate(config: &EstimateConfig) -> Result<VramProfile, EstimateError> {
    let weights_gb = bytes_to_gb(weight_bytes(config)?);
    let kv_gb = bytes_to_gb(kv_cache_bytes(config)?);
    let act_gb = bytes_to_gb(activation_bytes(config)?);

    let total_gb = weights_gb + kv_gb + act_gb + FRAMEWORK_OVERHEAD_GB;

    Ok(VramProfile {
        base_model_weights_gb: round2(weights_gb),
        activations_gb: round2(act_gb),
        kv_cache_gb: round2(kv_gb),
        framework_overhead_gb: FRAMEWORK_OVERHEAD_GB,
        total_vram_required_gb: round2(total_gb),
    })
}

/// Convert a byte count to binary gigabytes. 1024³ bytes is exactly 1.0.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

fn require(field: &'static str, value: Option<u64>) -> Result<u64, EstimateError> {
    value.ok_or(EstimateError::MissingField(field))
}

fn positive_bits(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::InvalidBits { field, value })
    }
}

// Element counts are multiplied in u128 so the integer product never
// overflows; the bit width may be fractional, so scaling happens in f64 and
// the sub-byte remainder is discarded.
fn quantized_bytes(elements: u128, bits: f64) -> u64 {
    (elements as f64 * bits / 8.0).floor() as u64
}

fn round2(gb: f64) -> f64 {
    (gb * 100.0).round() / 100.0
}
