use serde::{Deserialize, Serialize};

use crate::control::{DEFAULT_GPU_DVFS, DEFAULT_GPU_FREQUENCY, DEFAULT_GPU_VOLTAGE, GPU_RAIL_COUNT};

/// Plain copy of the GPU tunables, used for boot-time profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuTuning {
    pub gpu_frequency: i32,
    pub gpu_voltage: [i32; GPU_RAIL_COUNT],
    pub gpu_dvfs: bool,
}

impl Default for GpuTuning {
    fn default() -> Self {
        Self {
            gpu_frequency: DEFAULT_GPU_FREQUENCY,
            gpu_voltage: [DEFAULT_GPU_VOLTAGE; GPU_RAIL_COUNT],
            gpu_dvfs: DEFAULT_GPU_DVFS,
        }
    }
}

#[cfg(feature = "yaml")]
pub struct ConfigLoader;

#[cfg(feature = "yaml")]
impl ConfigLoader {
    pub fn load_from_yaml(yaml_content: &str) -> Result<GpuTuning, std::string::String> {
        serde_yaml::from_str(yaml_content).map_err(|e| {
            std::format!("Failed to parse YAML: {}", e)
        })
    }
}
