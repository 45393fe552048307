//! CLI command implementations

use anyhow::Result;
use std::path::PathBuf;
use vramcast::config::presets::format_param_count;
use vramcast::config::{EstimateConfig, MODEL_PRESETS};
use vramcast::estimator;
use vramcast::hardware::{self, GPU_SPECS};
use vramcast::report::{render_profile_json, PlanReport};

/// Resolve the input configuration, in precedence order: preset, existing
/// file path, standard input. A path that does not exist falls through to
/// stdin so the tool keeps working at the end of a pipe.
fn resolve_config(config: Option<PathBuf>, preset: Option<String>) -> Result<EstimateConfig> {
    if let Some(name) = preset {
        return EstimateConfig::for_preset(&name);
    }

    match config {
        Some(path) if path.exists() => EstimateConfig::from_path(path),
        Some(path) => {
            tracing::debug!("No config file at {}, reading stdin", path.display());
            EstimateConfig::from_reader(std::io::stdin().lock())
        }
        None => EstimateConfig::from_reader(std::io::stdin().lock()),
    }
}

fn apply_overrides(
    config: &mut EstimateConfig,
    batch_size: Option<u64>,
    context_length: Option<u64>,
    concurrent_users: Option<u64>,
    bits_per_weight: Option<f64>,
    bits_per_activation: Option<f64>,
) {
    if let Some(bs) = batch_size {
        config.batch_size = bs;
    }
    if let Some(ctx) = context_length {
        config.context_length = ctx;
    }
    if let Some(users) = concurrent_users {
        config.concurrent_users = users;
    }
    if let Some(bits) = bits_per_weight {
        config.quantization.bits_per_weight = bits;
    }
    if let Some(bits) = bits_per_activation {
        config.quantization.bits_per_activation = bits;
    }
}

pub fn estimate(
    config: Option<PathBuf>,
    preset: Option<String>,
    batch_size: Option<u64>,
    context_length: Option<u64>,
    concurrent_users: Option<u64>,
    bits_per_weight: Option<f64>,
    bits_per_activation: Option<f64>,
) -> Result<()> {
    let mut config = resolve_config(config, preset)?;
    apply_overrides(
        &mut config,
        batch_size,
        context_length,
        concurrent_users,
        bits_per_weight,
        bits_per_activation,
    );

    let profile = estimator::estimate(&config)?;
    println!("{}", render_profile_json(&profile)?);

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn plan(
    config: Option<PathBuf>,
    preset: Option<String>,
    gpu: Option<String>,
    output: Option<String>,
    batch_size: Option<u64>,
    context_length: Option<u64>,
    concurrent_users: Option<u64>,
    bits_per_weight: Option<f64>,
    bits_per_activation: Option<f64>,
) -> Result<()> {
    let mut config = resolve_config(config, preset)?;
    apply_overrides(
        &mut config,
        batch_size,
        context_length,
        concurrent_users,
        bits_per_weight,
        bits_per_activation,
    );

    let profile = estimator::estimate(&config)?;
    let required_gb = profile.total_vram_required_gb;

    let assessments = match &gpu {
        Some(name) => {
            let spec = hardware::gpus::lookup(name)?;
            vec![hardware::assess_fit(name, spec, required_gb)]
        }
        None => hardware::assess_all(required_gb),
    };

    let report = PlanReport::new(config, profile, assessments);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("VRAM Capacity Plan");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  Workload:           batch {} | context {} | {} user(s)",
        report.config.batch_size, report.config.context_length, report.config.concurrent_users
    );
    println!(
        "  Quantization:       {}-bit weights, {}-bit activations",
        report.config.quantization.bits_per_weight, report.config.quantization.bits_per_activation
    );
    println!();
    for (label, pct) in report.breakdown_pct() {
        println!("  {:18} {:5.1}%", label, pct);
    }
    println!("  Total required:     {:.2} GB", required_gb);
    println!();

    println!("  GPU fit:");
    for a in &report.assessments {
        let status = if a.fits {
            format!("✓ fits ({:.2} GB headroom)", a.headroom_gb)
        } else {
            "✗ too small".to_string()
        };
        println!(
            "    {:14} {:5.0} GB  {:5.1}% used  {}",
            a.gpu, a.vram_gb, a.utilization_pct, status
        );
    }
    println!();

    match &report.recommended_gpu {
        Some(name) => println!("  Recommended: {} (smallest card that fits)", name),
        None => println!("  Recommended: none of the checked GPUs can hold this deployment"),
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if let Some(output_path) = output {
        report.save(&output_path)?;
        println!("\nReport saved to: {}", output_path);
    }

    Ok(())
}

pub fn models() -> Result<()> {
    let mut list: Vec<_> = MODEL_PRESETS.iter().collect();
    list.sort_by(|a, b| {
        a.1.total_parameters
            .cmp(&b.1.total_parameters)
            .then_with(|| a.0.cmp(b.0))
    });

    println!("Available model presets:");
    println!();
    for (name, preset) in list {
        println!(
            "  {:16} {:>5}  {} layers | hidden {} | {} heads",
            name,
            format_param_count(preset.total_parameters),
            preset.num_layers,
            preset.hidden_size,
            preset.num_attention_heads
        );
    }
    println!();
    println!("Use with: vramcast estimate --preset <name>");

    Ok(())
}

pub fn gpus() -> Result<()> {
    let mut list: Vec<_> = GPU_SPECS.iter().collect();
    list.sort_by(|a, b| {
        a.1.vram_gb
            .partial_cmp(&b.1.vram_gb)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    println!("Known GPUs:");
    println!();
    for (name, spec) in list {
        println!(
            "  {:14} {:5.0} GB  {:6.0} GB/s  {:12}  {}",
            name, spec.vram_gb, spec.bandwidth_gb_s, spec.architecture, spec.label
        );
    }
    println!();
    println!("Check a deployment against one with: vramcast plan --gpu <name>");

    Ok(())
}
