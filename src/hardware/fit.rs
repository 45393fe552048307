//! Fit checks: does an estimated profile fit on a given GPU

use serde::{Deserialize, Serialize};

use super::gpus::{GpuSpec, GPU_SPECS};

/// Outcome of checking one requirement against one GPU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitAssessment {
    pub gpu: String,
    pub vram_gb: f64,
    pub fits: bool,
    /// Share of the card's VRAM the deployment would occupy, capped at 100.
    pub utilization_pct: f64,
    /// VRAM left over after the deployment, floored at zero.
    pub headroom_gb: f64,
}

/// Assess whether `required_gb` of VRAM fits on the given GPU.
pub fn assess_fit(name: &str, spec: &GpuSpec, required_gb: f64) -> FitAssessment {
    let fits = required_gb <= spec.vram_gb;
    let utilization_pct = (required_gb / spec.vram_gb * 100.0).min(100.0);
    let headroom_gb = (spec.vram_gb - required_gb).max(0.0);

    FitAssessment {
        gpu: name.to_string(),
        vram_gb: spec.vram_gb,
        fits,
        utilization_pct,
        headroom_gb,
    }
}

/// Assess the requirement against every known GPU, smallest VRAM first.
pub fn assess_all(required_gb: f64) -> Vec<FitAssessment> {
    let mut assessments: Vec<FitAssessment> = GPU_SPECS
        .iter()
        .map(|(name, spec)| assess_fit(name, spec, required_gb))
        .collect();
    assessments.sort_by(|a, b| {
        a.vram_gb
            .partial_cmp(&b.vram_gb)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.gpu.cmp(&b.gpu))
    });
    assessments
}

/// The cheapest (smallest VRAM) GPU that fits, if any does.
pub fn smallest_fit(required_gb: f64) -> Option<FitAssessment> {
    assess_all(required_gb).into_iter().find(|a| a.fits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_on_large_card() {
        let spec = GPU_SPECS.get("rtx-4090").unwrap();
        let assessment = assess_fit("rtx-4090", spec, 14.92);
        assert!(assessment.fits);
        assert!(assessment.utilization_pct > 62.0 && assessment.utilization_pct < 63.0);
        assert!((assessment.headroom_gb - 9.08).abs() < 1e-9);
    }

    #[test]
    fn test_does_not_fit_small_card() {
        let spec = GPU_SPECS.get("rtx-3070").unwrap();
        let assessment = assess_fit("rtx-3070", spec, 14.92);
        assert!(!assessment.fits);
        assert_eq!(assessment.utilization_pct, 100.0);
        assert_eq!(assessment.headroom_gb, 0.0);
    }

    #[test]
    fn test_exact_fit_counts_as_fitting() {
        let spec = GPU_SPECS.get("rtx-4080").unwrap();
        let assessment = assess_fit("rtx-4080", spec, 16.0);
        assert!(assessment.fits);
        assert_eq!(assessment.utilization_pct, 100.0);
        assert_eq!(assessment.headroom_gb, 0.0);
    }

    #[test]
    fn test_assess_all_sorted_by_vram() {
        let assessments = assess_all(14.92);
        let vrams: Vec<f64> = assessments.iter().map(|a| a.vram_gb).collect();
        let mut sorted = vrams.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(vrams, sorted);
    }

    #[test]
    fn test_smallest_fit_prefers_least_vram() {
        // 14.92 GB fits on 16 GB cards but not 12 GB ones
        let best = smallest_fit(14.92).unwrap();
        assert_eq!(best.gpu, "rtx-4080");

        // Nothing in the table holds 200 GB
        assert!(smallest_fit(200.0).is_none());
    }
}
