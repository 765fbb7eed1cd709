use core::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::config::GpuTuning;
use crate::error::{ControlError, Result};
use crate::tables::{self, TableType};

pub const GPU_RAIL_COUNT: usize = 3;

pub const DEFAULT_GPU_FREQUENCY: i32 = 286;
pub const DEFAULT_GPU_VOLTAGE: i32 = 1050;
pub const DEFAULT_GPU_DVFS: bool = false;

/// GPU tunables shared with the power-management code.
///
/// Cells are independent: a reader racing a writer may see a new frequency
/// alongside old voltages. Values are never validated on write; unknown
/// selectors only show up as a fallback at lookup time.
#[derive(Debug)]
pub struct ProtonControl {
    frequency: AtomicI32,
    voltage: [AtomicI32; GPU_RAIL_COUNT],
    dvfs: AtomicBool,
}

impl Default for ProtonControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtonControl {
    pub const fn new() -> Self {
        Self {
            frequency: AtomicI32::new(DEFAULT_GPU_FREQUENCY),
            voltage: [
                AtomicI32::new(DEFAULT_GPU_VOLTAGE),
                AtomicI32::new(DEFAULT_GPU_VOLTAGE),
                AtomicI32::new(DEFAULT_GPU_VOLTAGE),
            ],
            dvfs: AtomicBool::new(DEFAULT_GPU_DVFS),
        }
    }

    pub fn reset(&self) {
        self.apply(&GpuTuning::default());
    }

    pub fn gpu_frequency(&self) -> i32 {
        self.frequency.load(Ordering::Relaxed)
    }

    pub fn set_gpu_frequency(&self, mhz: i32) {
        self.frequency.store(mhz, Ordering::Relaxed);
    }

    fn rail(&self, index: usize) -> Result<&AtomicI32> {
        self.voltage
            .get(index)
            .ok_or(ControlError::RailOutOfRange { index })
    }

    pub fn gpu_voltage(&self, rail: usize) -> Result<i32> {
        Ok(self.rail(rail)?.load(Ordering::Relaxed))
    }

    pub fn set_gpu_voltage(&self, rail: usize, mv: i32) -> Result<()> {
        self.rail(rail)?.store(mv, Ordering::Relaxed);
        Ok(())
    }

    pub fn gpu_voltages(&self) -> [i32; GPU_RAIL_COUNT] {
        [
            self.voltage[0].load(Ordering::Relaxed),
            self.voltage[1].load(Ordering::Relaxed),
            self.voltage[2].load(Ordering::Relaxed),
        ]
    }

    pub fn set_gpu_voltages(&self, mv: [i32; GPU_RAIL_COUNT]) {
        for (cell, value) in self.voltage.iter().zip(mv) {
            cell.store(value, Ordering::Relaxed);
        }
    }

    pub fn gpu_dvfs(&self) -> bool {
        self.dvfs.load(Ordering::Relaxed)
    }

    pub fn set_gpu_dvfs(&self, enabled: bool) {
        self.dvfs.store(enabled, Ordering::Relaxed);
    }

    /// Frequency constant in KHz; unknown selectors resolve to 286 MHz.
    pub fn frequency_code(&self) -> u32 {
        tables::frequency_code(self.gpu_frequency())
    }

    pub fn table_type(&self) -> TableType {
        tables::table_type(self.gpu_frequency())
    }

    /// Unknown selectors resolve to `TBLTYPE0`, not to the 286 MHz row.
    pub fn table_type_code(&self) -> u32 {
        self.table_type().code()
    }

    /// VRF18 step for `rail`; unknown selectors resolve to 1.05V.
    pub fn voltage_code(&self, rail: usize) -> Result<u32> {
        self.gpu_voltage(rail).map(tables::voltage_code)
    }

    pub fn snapshot(&self) -> GpuTuning {
        GpuTuning {
            gpu_frequency: self.gpu_frequency(),
            gpu_voltage: self.gpu_voltages(),
            gpu_dvfs: self.gpu_dvfs(),
        }
    }

    pub fn apply(&self, tuning: &GpuTuning) {
        self.set_gpu_frequency(tuning.gpu_frequency);
        self.set_gpu_voltages(tuning.gpu_voltage);
        self.set_gpu_dvfs(tuning.gpu_dvfs);
    }
}

/// Instance backing the exported `proton_gpu_*` entry points.
pub static PROTON: ProtonControl = ProtonControl::new();

pub fn proton_gpu_frequency_get() -> u32 {
    PROTON.frequency_code()
}

pub fn proton_gpu_tbltype_get() -> u32 {
    PROTON.table_type_code()
}

pub fn proton_gpu_voltage_get(num: usize) -> Result<u32> {
    PROTON.voltage_code(num)
}
