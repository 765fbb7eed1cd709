//! Module parameters.
//!
//! Mirrors `module_param`/`module_param_array` semantics: values are parsed
//! like `kstrtoint`/`kstrtobool`, arrays are comma-separated and may be
//! shorter than the backing storage. Parsing checks syntax only, selectors
//! outside the documented tables are stored untouched.

use alloc::string::String;
use core::fmt::Write;

use log::{debug, warn};

use crate::control::{ProtonControl, GPU_RAIL_COUNT};
use crate::error::{ControlError, Result};

pub const MODULE_NAME: &str = "proton_control";

/// S_IRUGO | S_IWUSR | S_IWGRP
pub const PARAM_PERM: u16 = 0o664;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    IntArray { max: usize },
    Bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KernelParam {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub perm: u16,
}

pub const PARAM_GPU_FREQUENCY: &str = "proton_gpu_frequency";
pub const PARAM_GPU_VOLTAGE: &str = "proton_gpu_voltage";
pub const PARAM_GPU_DVFS: &str = "proton_gpu_dvfs";

pub static PARAMS: [KernelParam; 3] = [
    KernelParam {
        name: PARAM_GPU_FREQUENCY,
        description: "Sets the GPU frequency",
        kind: ParamKind::Int,
        perm: PARAM_PERM,
    },
    KernelParam {
        name: PARAM_GPU_VOLTAGE,
        description: "Sets the GPU voltage",
        kind: ParamKind::IntArray { max: GPU_RAIL_COUNT },
        perm: PARAM_PERM,
    },
    KernelParam {
        name: PARAM_GPU_DVFS,
        description: "Enables or disabled GPU DVFS (Dynamic voltage and frequency)",
        kind: ParamKind::Bool,
        perm: PARAM_PERM,
    },
];

pub fn find_param(name: &str) -> Option<&'static KernelParam> {
    let name = name.strip_prefix(MODULE_NAME).and_then(|n| n.strip_prefix('.')).unwrap_or(name);
    PARAMS.iter().find(|p| p.name == name)
}

/// Integer in the `kstrtoint(s, 0, ..)` format: optional sign, `0x` hex,
/// leading-zero octal, decimal otherwise.
pub fn parse_int(s: &str) -> Option<i32> {
    let (negative, body) = match *s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (16, hex)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    if digits.is_empty() || !digits.bytes().all(|b| (b as char).is_digit(radix)) {
        return None;
    }

    let magnitude = i64::try_from(u64::from_str_radix(digits, radix).ok()?).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Boolean in the `kstrtobool` format.
pub fn parse_bool(s: &str) -> Option<bool> {
    let bytes = s.as_bytes();
    match *bytes.first()? {
        b'y' | b'Y' | b'1' => Some(true),
        b'n' | b'N' | b'0' => Some(false),
        b'o' | b'O' => match *bytes.get(1)? {
            b'n' | b'N' => Some(true),
            b'f' | b'F' => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn parse_array(name: &'static str, s: &str, max: usize) -> Result<([i32; GPU_RAIL_COUNT], usize)> {
    let mut values = [0; GPU_RAIL_COUNT];
    let mut count = 0;

    for element in s.split(',') {
        if count == max {
            return Err(ControlError::TooManyElements { name, max });
        }
        values[count] = parse_int(element.trim()).ok_or(ControlError::InvalidValue { name })?;
        count += 1;
    }

    Ok((values, count))
}

/// Store `value` into the named parameter of `ctl`.
///
/// On error nothing is written.
pub fn set_param(ctl: &ProtonControl, name: &str, value: &str) -> Result<()> {
    let param = find_param(name).ok_or(ControlError::UnknownParam)?;
    let value = value.trim();

    let res = match param.kind {
        ParamKind::Int => parse_int(value)
            .map(|mhz| ctl.set_gpu_frequency(mhz))
            .ok_or(ControlError::InvalidValue { name: param.name }),
        ParamKind::IntArray { max } => parse_array(param.name, value, max).map(|(values, count)| {
            for (rail, mv) in values.iter().take(count).enumerate() {
                let _ = ctl.set_gpu_voltage(rail, *mv);
            }
        }),
        ParamKind::Bool => parse_bool(value)
            .map(|on| ctl.set_gpu_dvfs(on))
            .ok_or(ControlError::InvalidValue { name: param.name }),
    };

    match res {
        Ok(()) => debug!("proton: {}={}", param.name, value),
        Err(e) => warn!("proton: rejected {}={}: {}", param.name, value, e),
    }
    res
}

pub fn get_param(ctl: &ProtonControl, name: &str) -> Result<String> {
    let param = find_param(name).ok_or(ControlError::UnknownParam)?;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = match param.kind {
        ParamKind::Int => write!(out, "{}", ctl.gpu_frequency()),
        ParamKind::IntArray { .. } => {
            let [a, b, c] = ctl.gpu_voltages();
            write!(out, "{},{},{}", a, b, c)
        }
        ParamKind::Bool => out.write_char(if ctl.gpu_dvfs() { 'Y' } else { 'N' }),
    };

    Ok(out)
}

/// Apply `name=value` tokens from a kernel command line.
///
/// Names may carry the `proton_control.` prefix; unrelated names are
/// skipped. A bare name sets a bool to true. Every valid token is applied
/// even when another one is malformed; the first error is returned in
/// that case, otherwise the number of applied tokens.
pub fn parse_cmdline(ctl: &ProtonControl, line: &str) -> Result<usize> {
    let mut applied = 0;
    let mut first_err = None;

    for token in line.split_whitespace() {
        let (name, value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };

        let Some(param) = find_param(name) else {
            continue;
        };

        let value = match (value, param.kind) {
            (Some(value), _) => value,
            (None, ParamKind::Bool) => "1",
            (None, _) => "",
        };

        match set_param(ctl, param.name, value) {
            Ok(()) => applied += 1,
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(applied),
    }
}
