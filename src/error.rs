// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::Side;

/// Errors raised while building, spacing or validating a pad ring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PadRingError {
    #[error(
        "dimension {width}x{height} is invalid: width and height must be finite and non-negative"
    )]
    InvalidDimension { width: f64, height: f64 },

    #[error("{margin} has no entry for the {side} side")]
    IncompleteMargin { margin: &'static str, side: Side },

    #[error("{margin} for the {side} side is {value}; margins must be finite and non-negative")]
    InvalidMargin {
        margin: &'static str,
        side: Side,
        value: f64,
    },

    #[error("pin '{0}' is declared more than once")]
    DuplicatePin(String),

    #[error("pin '{0}' is mapped to a pad but missing from the pin list")]
    UnknownPin(String),

    #[error("floorplan dimensions are required to space the {0} side")]
    MissingFloorplan(Side),

    #[error("the first pad on the {side} side ('{pad}') has no bond pad")]
    MissingFirstBondpad { side: Side, pad: String },

    #[error("'bits' attribute must be a string of the form 'msb:lsb', got {0}")]
    MalformedBits(String),

    #[error("'bits' attribute has msb {msb} below lsb {lsb}")]
    BitsOutOfOrder { msb: u32, lsb: u32 },

    #[error("'bits' attribute is set but 'resval' is missing")]
    MissingResetValue,

    #[error("'resval' attribute must be a non-negative integer, got {0}")]
    MalformedResetValue(String),

    #[error("'resval' value {value} does not fit in {width} bits")]
    ResetValueTooWide { value: String, width: u64 },

    #[error("IO cells of pads '{first}' and '{second}' overlap on the {side} side")]
    OverlappingPads {
        side: Side,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, PadRingError>;
