//! Reference GPU specifications for capacity planning

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Specification of one GPU model used for fit checks.
#[derive(Debug, Clone, Serialize)]
pub struct GpuSpec {
    pub label: &'static str,
    pub vram_gb: f64,
    pub bandwidth_gb_s: f64,
    pub architecture: &'static str,
}

/// Common inference GPUs indexed by short name.
pub static GPU_SPECS: Lazy<HashMap<String, GpuSpec>> = Lazy::new(|| {
    let mut specs = HashMap::new();

    specs.insert(
        "rtx-3060-12gb".to_string(),
        GpuSpec {
            label: "NVIDIA RTX 3060 12GB",
            vram_gb: 12.0,
            bandwidth_gb_s: 360.0,
            architecture: "Ampere",
        },
    );

    specs.insert(
        "rtx-3070".to_string(),
        GpuSpec {
            label: "NVIDIA RTX 3070",
            vram_gb: 8.0,
            bandwidth_gb_s: 448.0,
            architecture: "Ampere",
        },
    );

    specs.insert(
        "rtx-3090".to_string(),
        GpuSpec {
            label: "NVIDIA RTX 3090",
            vram_gb: 24.0,
            bandwidth_gb_s: 936.0,
            architecture: "Ampere",
        },
    );

    specs.insert(
        "rtx-4070".to_string(),
        GpuSpec {
            label: "NVIDIA RTX 4070",
            vram_gb: 12.0,
            bandwidth_gb_s: 504.0,
            architecture: "Ada Lovelace",
        },
    );

    specs.insert(
        "rtx-4080".to_string(),
        GpuSpec {
            label: "NVIDIA RTX 4080",
            vram_gb: 16.0,
            bandwidth_gb_s: 717.0,
            architecture: "Ada Lovelace",
        },
    );

    specs.insert(
        "rtx-4090".to_string(),
        GpuSpec {
            label: "NVIDIA RTX 4090",
            vram_gb: 24.0,
            bandwidth_gb_s: 1008.0,
            architecture: "Ada Lovelace",
        },
    );

    specs.insert(
        "a100-40gb".to_string(),
        GpuSpec {
            label: "NVIDIA A100 40GB",
            vram_gb: 40.0,
            bandwidth_gb_s: 1555.0,
            architecture: "Ampere",
        },
    );

    specs.insert(
        "a100-80gb".to_string(),
        GpuSpec {
            label: "NVIDIA A100 80GB",
            vram_gb: 80.0,
            bandwidth_gb_s: 1935.0,
            architecture: "Ampere",
        },
    );

    specs.insert(
        "h100".to_string(),
        GpuSpec {
            label: "NVIDIA H100 80GB",
            vram_gb: 80.0,
            bandwidth_gb_s: 3350.0,
            architecture: "Hopper",
        },
    );

    specs
});

/// Look up a GPU by short name.
pub fn lookup(name: &str) -> anyhow::Result<&'static GpuSpec> {
    GPU_SPECS.get(name).ok_or_else(|| {
        let mut known: Vec<&str> = GPU_SPECS.keys().map(|k| k.as_str()).collect();
        known.sort_unstable();
        anyhow::anyhow!("Unknown GPU: {}. Available: {:?}", name, known)
    })
}
