// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::fmt;

use crate::{PadRingError, Result};

/// Width and height of a cell or of the die, in microns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    width: f64,
    height: f64,
}

impl Dimension {
    /// Creates a new dimension; both values must be finite and non-negative.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(PadRingError::InvalidDimension { width, height });
        }
        Ok(Dimension { width, height })
    }

    /// For built-in templates whose values are known to be valid.
    pub(crate) const fn new_unchecked(width: f64, height: f64) -> Self {
        Dimension { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}um", self.width, self.height)
    }
}
