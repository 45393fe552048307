use serde::{Deserialize, Serialize};

/// Transformer architecture description (the `parameters` group).
///
/// All four fields are required for an estimate. They are modeled as
/// `Option` so that a missing one surfaces from the estimator as a named
/// error carrying the dotted field path, rather than as a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Total weight count of the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_parameters: Option<u64>,

    /// Number of transformer layers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_layers: Option<u64>,

    /// Model (embedding) dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_size: Option<u64>,

    /// Attention head count; divides `hidden_size` into per-head dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_attention_heads: Option<u64>,
}
