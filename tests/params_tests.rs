use proton_control::params::{PARAM_GPU_DVFS, PARAM_GPU_FREQUENCY, PARAM_GPU_VOLTAGE};
use proton_control::{get_param, parse_cmdline, set_param, ControlError, ProtonControl, PARAMS};

#[test]
fn test_param_descriptors() {
    let names: Vec<_> = PARAMS.iter().map(|p| p.name).collect();
    assert_eq!(names, [PARAM_GPU_FREQUENCY, PARAM_GPU_VOLTAGE, PARAM_GPU_DVFS]);
    assert_eq!(PARAMS[0].description, "Sets the GPU frequency");
    assert_eq!(PARAMS[1].description, "Sets the GPU voltage");
}

#[test]
fn test_default_values_read_back() {
    let ctl = ProtonControl::new();
    assert_eq!(get_param(&ctl, "proton_gpu_frequency").unwrap(), "286");
    assert_eq!(get_param(&ctl, "proton_gpu_voltage").unwrap(), "1050,1050,1050");
    assert_eq!(get_param(&ctl, "proton_gpu_dvfs").unwrap(), "N");
}

#[test]
fn test_sysfs_style_writes() {
    let ctl = ProtonControl::new();
    set_param(&ctl, "proton_gpu_frequency", "403\n").unwrap();
    set_param(&ctl, "proton_gpu_dvfs", "Y\n").unwrap();
    assert_eq!(ctl.frequency_code(), 403_000);
    assert_eq!(get_param(&ctl, "proton_gpu_dvfs").unwrap(), "Y");
}

#[test]
fn test_out_of_enumeration_is_accepted() {
    let ctl = ProtonControl::new();
    set_param(&ctl, "proton_gpu_frequency", "999").unwrap();
    assert_eq!(get_param(&ctl, "proton_gpu_frequency").unwrap(), "999");
    assert_eq!(ctl.frequency_code(), 286_000);
}

#[test]
fn test_short_array_keeps_tail() {
    let ctl = ProtonControl::new();
    set_param(&ctl, "proton_gpu_voltage", "1200,1175").unwrap();
    assert_eq!(ctl.gpu_voltages(), [1200, 1175, 1050]);
}

#[test]
fn test_array_errors_leave_storage_untouched() {
    let ctl = ProtonControl::new();
    assert_eq!(
        set_param(&ctl, "proton_gpu_voltage", "1100,1100,1100,1100"),
        Err(ControlError::TooManyElements { name: "proton_gpu_voltage", max: 3 })
    );
    assert_eq!(
        set_param(&ctl, "proton_gpu_voltage", "1100,abc"),
        Err(ControlError::InvalidValue { name: "proton_gpu_voltage" })
    );
    assert_eq!(ctl.gpu_voltages(), [1050; 3]);
}

#[test]
fn test_invalid_values() {
    let ctl = ProtonControl::new();
    assert_eq!(set_param(&ctl, "proton_gpu_frequency", "fast"), Err(ControlError::InvalidValue { name: "proton_gpu_frequency" }));
    assert_eq!(set_param(&ctl, "proton_gpu_dvfs", "maybe"), Err(ControlError::InvalidValue { name: "proton_gpu_dvfs" }));
    assert_eq!(set_param(&ctl, "proton_gpu_volts", "1"), Err(ControlError::UnknownParam));
    assert_eq!(get_param(&ctl, "nope"), Err(ControlError::UnknownParam));
    assert_eq!(ctl.gpu_frequency(), 286);
}

#[test]
fn test_cmdline() {
    let ctl = ProtonControl::new();
    let line = "console=ttyMT0 proton_control.proton_gpu_frequency=0x1dc \
                proton_gpu_voltage=1150,1125,1100 proton_control.proton_gpu_dvfs quiet";
    assert_eq!(parse_cmdline(&ctl, line), Ok(3));
    assert_eq!(ctl.gpu_frequency(), 476);
    assert_eq!(ctl.gpu_voltages(), [1150, 1125, 1100]);
    assert!(ctl.gpu_dvfs());
}

#[test]
fn test_cmdline_reports_first_error_after_applying_rest() {
    let ctl = ProtonControl::new();
    let line = "proton_gpu_frequency=x proton_gpu_dvfs=q proton_gpu_voltage=1200";
    assert_eq!(
        parse_cmdline(&ctl, line),
        Err(ControlError::InvalidValue { name: "proton_gpu_frequency" })
    );
    assert_eq!(ctl.gpu_frequency(), 286);
    assert!(!ctl.gpu_dvfs());
    assert_eq!(ctl.gpu_voltages(), [1200, 1050, 1050]);
}
