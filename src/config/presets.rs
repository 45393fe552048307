use crate::config::ModelParameters;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Architecture preset for a well-known open-weight model.
#[derive(Debug, Clone)]
pub struct ModelPreset {
    pub label: &'static str,
    pub total_parameters: u64,
    pub num_layers: u64,
    pub hidden_size: u64,
    pub num_attention_heads: u64,
}

impl ModelPreset {
    /// The preset as a fully populated `parameters` group.
    pub fn parameters(&self) -> ModelParameters {
        ModelParameters {
            total_parameters: Some(self.total_parameters),
            num_layers: Some(self.num_layers),
            hidden_size: Some(self.hidden_size),
            num_attention_heads: Some(self.num_attention_heads),
        }
    }
}

/// Built-in architecture presets, keyed by short name
pub static MODEL_PRESETS: Lazy<HashMap<String, ModelPreset>> = Lazy::new(|| {
    let mut models = HashMap::new();

    models.insert(
        "deepseek-r1-3b".to_string(),
        ModelPreset {
            label: "DeepSeek-R1 3B",
            total_parameters: 3_000_000_000,
            num_layers: 28,
            hidden_size: 2560,
            num_attention_heads: 20,
        },
    );

    models.insert(
        "deepseek-r1-7b".to_string(),
        ModelPreset {
            label: "DeepSeek-R1 7B",
            total_parameters: 7_000_000_000,
            num_layers: 32,
            hidden_size: 4096,
            num_attention_heads: 32,
        },
    );

    models.insert(
        "llama-2-7b".to_string(),
        ModelPreset {
            label: "LLaMA 2 7B",
            total_parameters: 7_000_000_000,
            num_layers: 32,
            hidden_size: 4096,
            num_attention_heads: 32,
        },
    );

    models.insert(
        "llama-2-13b".to_string(),
        ModelPreset {
            label: "LLaMA 2 13B",
            total_parameters: 13_000_000_000,
            num_layers: 40,
            hidden_size: 5120,
            num_attention_heads: 40,
        },
    );

    models.insert(
        "llama-2-70b".to_string(),
        ModelPreset {
            label: "LLaMA 2 70B",
            total_parameters: 70_000_000_000,
            num_layers: 80,
            hidden_size: 8192,
            num_attention_heads: 64,
        },
    );

    models.insert(
        "mistral-7b".to_string(),
        ModelPreset {
            label: "Mistral 7B",
            total_parameters: 7_200_000_000,
            num_layers: 32,
            hidden_size: 4096,
            num_attention_heads: 32,
        },
    );

    models
});

/// Look up a preset by short name, failing with the list of known names.
pub fn lookup(name: &str) -> anyhow::Result<&'static ModelPreset> {
    MODEL_PRESETS.get(name).ok_or_else(|| {
        let mut known: Vec<&str> = MODEL_PRESETS.keys().map(String::as_str).collect();
        known.sort_unstable();
        anyhow::anyhow!("Unknown preset: {}. Available: {:?}", name, known)
    })
}

/// Human-readable parameter count, e.g. `7B`, `7.2B`, `500M`.
pub fn format_param_count(total: u64) -> String {
    let billions = total as f64 / 1_000_000_000.0;
    if billions >= 1.0 {
        if billions.fract() == 0.0 {
            format!("{}B", billions as u64)
        } else {
            format!("{:.1}B", billions)
        }
    } else {
        format!("{}M", total / 1_000_000)
    }
}
