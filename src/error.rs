use thiserror::Error;

use crate::control::GPU_RAIL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("voltage rail {index} out of range (max {max})", max = GPU_RAIL_COUNT - 1)]
    RailOutOfRange { index: usize },

    #[error("unknown parameter")]
    UnknownParam,

    #[error("invalid value for {name}")]
    InvalidValue { name: &'static str },

    #[error("too many elements for {name} (max {max})")]
    TooManyElements { name: &'static str, max: usize },
}

pub type Result<T> = core::result::Result<T, ControlError>;
