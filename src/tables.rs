//! Selector to hardware-code tables.
//!
//! Frequencies come from `mt_gpufreq.h`, table types from `mtk_sysfreq.h`.
//! Every table carries its own fallback; they are not shared.

use log::debug;

pub const GPU_DVFS_F1: u32 = 476_666; // KHz
pub const GPU_DVFS_F2: u32 = 403_000; // KHz
pub const GPU_DVFS_F3: u32 = 357_500; // KHz
pub const GPU_DVFS_F4: u32 = 312_000; // KHz
pub const GPU_DVFS_F5: u32 = 286_000; // KHz
pub const GPU_DVFS_F6: u32 = 268_666; // KHz
pub const GPU_DVFS_F7: u32 = 238_333; // KHz
pub const GPU_DVFS_F8: u32 = 156_000; // KHz

pub const GPU_POWER_VCORE_1_05V: u32 = 64;
pub const GPU_POWER_VRF18_1_05V: u32 = 0;
pub const GPU_POWER_VRF18_1_075V: u32 = 1;
pub const GPU_POWER_VRF18_1_10V: u32 = 2;
pub const GPU_POWER_VRF18_1_125V: u32 = 3;
pub const GPU_POWER_VRF18_1_15V: u32 = 4;
pub const GPU_POWER_VRF18_1_175V: u32 = 5;
pub const GPU_POWER_VRF18_1_20V: u32 = 6;

/// Power table variant handed to the sysfreq table selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TableType {
    Type0 = 0x0,
    Type1 = 0x1,
    Type2 = 0x2,
    Type3 = 0x3,
    Type0_0 = 0x4,
    Type0_1 = 0x5,
    Type0_2 = 0x6,
    Type0_3 = 0x7,
}

pub const TBLTYPE0: u32 = TableType::Type0 as u32;
pub const TBLTYPE1: u32 = TableType::Type1 as u32;
pub const TBLTYPE2: u32 = TableType::Type2 as u32;
pub const TBLTYPE3: u32 = TableType::Type3 as u32;
pub const TBLTYPE0_0: u32 = TableType::Type0_0 as u32;
pub const TBLTYPE0_1: u32 = TableType::Type0_1 as u32;
pub const TBLTYPE0_2: u32 = TableType::Type0_2 as u32;
pub const TBLTYPE0_3: u32 = TableType::Type0_3 as u32;

impl TableType {
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Selectors in MHz, truncated. 286 is the boot default.
pub const FREQUENCY_TABLE: &[(i32, u32)] = &[
    (476, GPU_DVFS_F1),
    (403, GPU_DVFS_F2),
    (357, GPU_DVFS_F3),
    (312, GPU_DVFS_F4),
    (286, GPU_DVFS_F5),
    (268, GPU_DVFS_F6),
    (238, GPU_DVFS_F7),
    (156, GPU_DVFS_F8),
];
pub const FREQUENCY_DEFAULT: u32 = GPU_DVFS_F5;

// 156 MHz has no row here and lands on the base type.
pub const TABLE_TYPE_TABLE: &[(i32, TableType)] = &[
    (476, TableType::Type3),
    (403, TableType::Type2),
    (357, TableType::Type1),
    (312, TableType::Type0_3),
    (286, TableType::Type0_2),
    (268, TableType::Type0_1),
    (238, TableType::Type0_0),
];
pub const TABLE_TYPE_DEFAULT: TableType = TableType::Type0;

/// Selectors in mV.
pub const VOLTAGE_TABLE: &[(i32, u32)] = &[
    (1200, GPU_POWER_VRF18_1_20V),
    (1175, GPU_POWER_VRF18_1_175V),
    (1150, GPU_POWER_VRF18_1_15V),
    (1125, GPU_POWER_VRF18_1_125V),
    (1100, GPU_POWER_VRF18_1_10V),
    (1075, GPU_POWER_VRF18_1_075V),
    (1050, GPU_POWER_VRF18_1_05V),
];
pub const VOLTAGE_DEFAULT: u32 = GPU_POWER_VRF18_1_05V;

fn find<T: Copy>(table: &[(i32, T)], selector: i32) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == selector)
        .map(|(_, code)| *code)
}

pub fn frequency_code(mhz: i32) -> u32 {
    find(FREQUENCY_TABLE, mhz).unwrap_or_else(|| {
        debug!("proton: unknown gpu frequency {} MHz, using {} KHz", mhz, FREQUENCY_DEFAULT);
        FREQUENCY_DEFAULT
    })
}

pub fn table_type(mhz: i32) -> TableType {
    find(TABLE_TYPE_TABLE, mhz).unwrap_or(TABLE_TYPE_DEFAULT)
}

pub fn table_type_code(mhz: i32) -> u32 {
    table_type(mhz).code()
}

pub fn voltage_code(mv: i32) -> u32 {
    find(VOLTAGE_TABLE, mv).unwrap_or_else(|| {
        debug!("proton: unknown gpu voltage {} mV, using step {}", mv, VOLTAGE_DEFAULT);
        VOLTAGE_DEFAULT
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_default_matches_286() {
        assert_eq!(frequency_code(286), frequency_code(999));
        assert_eq!(frequency_code(-1), GPU_DVFS_F5);
    }

    #[test]
    fn test_table_type_default_is_base() {
        assert_eq!(table_type(999), TableType::Type0);
        assert_eq!(table_type(156), TableType::Type0);
        assert_ne!(table_type(286), table_type(999));
    }

    #[test]
    fn test_voltage_default_is_1_05v() {
        assert_eq!(voltage_code(999), GPU_POWER_VRF18_1_05V);
        assert_eq!(voltage_code(1050), voltage_code(0));
    }

    #[test]
    fn test_tables_have_unique_selectors() {
        for table in [FREQUENCY_TABLE, VOLTAGE_TABLE] {
            for (i, (a, _)) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|(b, _)| a != b));
            }
        }
    }

    #[test]
    fn test_table_type_codes_distinct() {
        let codes: [u32; 8] = [
            TBLTYPE0, TBLTYPE1, TBLTYPE2, TBLTYPE3,
            TBLTYPE0_0, TBLTYPE0_1, TBLTYPE0_2, TBLTYPE0_3,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_eq!(*a, i as u32);
        }
    }
}
