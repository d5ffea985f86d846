// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::{Dimension, PadRingError, Result};

/// Physical side of the pad ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Bottom,
    Right,
    Top,
}

/// Order in which sides are visited when numbering pads. Global indices and
/// per-side indices follow this order, never the order of a mapping.
pub const SIDE_ORDER: [Side; 4] = [Side::Left, Side::Bottom, Side::Right, Side::Top];

impl Side {
    /// Position of this side in [`SIDE_ORDER`].
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Bottom => 1,
            Side::Right => 2,
            Side::Top => 3,
        }
    }

    /// Orientation given to pads (corners included) on this side unless they
    /// set one themselves.
    pub fn default_orientation(self) -> Orientation {
        match self {
            Side::Top => Orientation::R0,
            Side::Right => Orientation::R270,
            Side::Bottom => Orientation::R180,
            Side::Left => Orientation::R90,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Bottom => "bottom",
            Side::Right => "right",
            Side::Top => "top",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotation or mirroring of a pad cell in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    R0,
    R90,
    R180,
    R270,
    MX,
    MY,
    MX90,
    MY90,
}

/// DEF component orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefOrientation {
    N,
    S,
    E,
    W,
    FN,
    FS,
    FE,
    FW,
}

impl DefOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefOrientation::N => "N",
            DefOrientation::S => "S",
            DefOrientation::E => "E",
            DefOrientation::W => "W",
            DefOrientation::FN => "FN",
            DefOrientation::FS => "FS",
            DefOrientation::FE => "FE",
            DefOrientation::FW => "FW",
        }
    }
}

impl Orientation {
    pub fn to_def(self) -> DefOrientation {
        match self {
            Orientation::R0 => DefOrientation::N,
            Orientation::R180 => DefOrientation::S,
            Orientation::R90 => DefOrientation::W,
            Orientation::R270 => DefOrientation::E,
            Orientation::MY => DefOrientation::FN,
            Orientation::MX => DefOrientation::FS,
            Orientation::MX90 => DefOrientation::FW,
            Orientation::MY90 => DefOrientation::FE,
        }
    }
}

/// A margin value for each of the four sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SideMargins([f64; 4]);

impl SideMargins {
    /// The same margin on every side.
    pub fn uniform(value: f64) -> Result<Self> {
        Self::validate("margin", [value; 4])
    }

    /// Builds margins from a per-side map, which must name all four sides.
    pub fn from_map(margin: &'static str, map: &IndexMap<Side, f64>) -> Result<Self> {
        let mut values = [0.0; 4];
        for side in SIDE_ORDER {
            values[side.index()] = *map
                .get(&side)
                .ok_or(PadRingError::IncompleteMargin { margin, side })?;
        }
        Self::validate(margin, values)
    }

    fn validate(margin: &'static str, values: [f64; 4]) -> Result<Self> {
        for side in SIDE_ORDER {
            let value = values[side.index()];
            if !value.is_finite() || value < 0.0 {
                return Err(PadRingError::InvalidMargin {
                    margin,
                    side,
                    value,
                });
            }
        }
        Ok(SideMargins(values))
    }

    pub fn get(&self, side: Side) -> f64 {
        self.0[side.index()]
    }
}

/// Die size and the margins of the rings drawn inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorplanDimensions {
    die: Dimension,
    bondpad_margin: SideMargins,
    iocell_margin: SideMargins,
    core_margin: SideMargins,
}

impl FloorplanDimensions {
    /// - `bondpad_margin`: from the die edge to the bond pad ring
    /// - `iocell_margin`: from the bond pad ring to the IO cell ring
    /// - `core_margin`: from the IO cell ring to the core area
    pub fn new(
        die: Dimension,
        bondpad_margin: SideMargins,
        iocell_margin: SideMargins,
        core_margin: SideMargins,
    ) -> Self {
        FloorplanDimensions {
            die,
            bondpad_margin,
            iocell_margin,
            core_margin,
        }
    }

    /// Same as [`FloorplanDimensions::new`], taking each margin as a per-side
    /// map. Every map must cover all four sides with non-negative values.
    pub fn from_maps(
        die: Dimension,
        bondpad_margin: &IndexMap<Side, f64>,
        iocell_margin: &IndexMap<Side, f64>,
        core_margin: &IndexMap<Side, f64>,
    ) -> Result<Self> {
        Ok(FloorplanDimensions {
            die,
            bondpad_margin: SideMargins::from_map("bondpad_margin", bondpad_margin)?,
            iocell_margin: SideMargins::from_map("iocell_margin", iocell_margin)?,
            core_margin: SideMargins::from_map("core_margin", core_margin)?,
        })
    }

    pub fn die(&self) -> Dimension {
        self.die
    }

    pub fn bondpad_margin(&self, side: Side) -> f64 {
        self.bondpad_margin.get(side)
    }

    pub fn iocell_margin(&self, side: Side) -> f64 {
        self.iocell_margin.get(side)
    }

    pub fn core_margin(&self, side: Side) -> f64 {
        self.core_margin.get(side)
    }
}
