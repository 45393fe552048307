//! Profile rendering and plan reports
//!
//! Renders the estimate as stable-key JSON for machine consumption and
//! wraps it, together with the fit assessments, into a saveable plan report.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::EstimateConfig;
use crate::estimator::VramProfile;
use crate::hardware::FitAssessment;

#[derive(Serialize)]
struct ProfileEnvelope<'a> {
    vram_profile: &'a VramProfile,
}

/// Render a profile as pretty-printed JSON under the `vram_profile` key.
///
/// Key names and their order are stable; downstream tooling parses this
/// output, so the envelope is serialized from typed structs rather than a
/// value tree.
pub fn render_profile_json(profile: &VramProfile) -> Result<String> {
    let envelope = ProfileEnvelope {
        vram_profile: profile,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// A capacity plan: the input, the estimate, and how it maps onto hardware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub config: EstimateConfig,
    pub profile: VramProfile,
    pub assessments: Vec<FitAssessment>,
    pub recommended_gpu: Option<String>,
    pub created_at: String,
}

impl PlanReport {
    /// Build a report from an estimate and its fit assessments.
    pub fn new(
        config: EstimateConfig,
        profile: VramProfile,
        assessments: Vec<FitAssessment>,
    ) -> Self {
        let recommended_gpu = assessments
            .iter()
            .find(|a| a.fits)
            .map(|a| a.gpu.clone());

        Self {
            config,
            profile,
            assessments,
            recommended_gpu,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Save the report to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load a previously saved report from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let report: Self = serde_json::from_str(&json)?;
        Ok(report)
    }

    /// Share of the total each component occupies, in percent.
    pub fn breakdown_pct(&self) -> Vec<(&'static str, f64)> {
        let total = self.profile.total_vram_required_gb;
        if total <= 0.0 {
            return Vec::new();
        }
        vec![
            (
                "Model weights",
                self.profile.base_model_weights_gb / total * 100.0,
            ),
            ("KV cache", self.profile.kv_cache_gb / total * 100.0),
            ("Activations", self.profile.activations_gb / total * 100.0),
            (
                "Framework overhead",
                self.profile.framework_overhead_gb / total * 100.0,
            ),
        ]
    }

    /// Print a summary of this report
    pub fn print_summary(&self) {
        println!("Capacity Plan Summary:");
        println!(
            "  Model weights:      {:.2} GB",
            self.profile.base_model_weights_gb
        );
        println!("  KV cache:           {:.2} GB", self.profile.kv_cache_gb);
        println!("  Activations:        {:.2} GB", self.profile.activations_gb);
        println!(
            "  Framework overhead: {:.2} GB",
            self.profile.framework_overhead_gb
        );
        println!(
            "  Total required:     {:.2} GB",
            self.profile.total_vram_required_gb
        );
        match &self.recommended_gpu {
            Some(gpu) => println!("  Recommended GPU:    {}", gpu),
            None => println!("  Recommended GPU:    none (exceeds every known card)"),
        }
        println!("  Created:            {}", self.created_at);
    }
}
