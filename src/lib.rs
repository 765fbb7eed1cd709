#![no_std]

//! PROTON GPU control for MT6589.
//!
//! Holds the user-chosen GPU frequency, per-rail voltage and DVFS switch, and
//! translates them into the codes the gpufreq/sysfreq drivers expect.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod control;
pub mod error;
pub mod module;
pub mod params;
pub mod tables;

pub use config::GpuTuning;
#[cfg(feature = "yaml")]
pub use config::ConfigLoader;
pub use control::{
    proton_gpu_frequency_get, proton_gpu_tbltype_get, proton_gpu_voltage_get, ProtonControl,
    GPU_RAIL_COUNT, PROTON,
};
pub use error::{ControlError, Result};
pub use module::{register, InitLevel, ModuleInfo, MODULE_INFO};
pub use params::{get_param, parse_cmdline, set_param, KernelParam, ParamKind, PARAMS};
pub use tables::TableType;
