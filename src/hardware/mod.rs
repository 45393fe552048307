pub mod fit;
pub mod gpus;

pub use fit::{assess_all, assess_fit, smallest_fit, FitAssessment};
pub use gpus::{GpuSpec, GPU_SPECS};
