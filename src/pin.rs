// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::{AttributeValue, Attributes, Cell, CellLibrary};

/// Module a pin is attached to unless it names another one.
pub const DEFAULT_MODULE: &str = "core_v_mini_mcu";

/// Electrical kind of a pin. Digital pins share the digital bond pad and pick
/// an IO cell wrapper by direction; analog pins use the analog cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
    Inout,
    Analog,
}

impl Direction {
    pub fn is_digital(self) -> bool {
        !matches!(self, Direction::Analog)
    }
}

/// A named signal that may be connected to a pad.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pin {
    name: String,
    direction: Direction,
    active_low: bool,
    priority: Option<i64>,
    module: String,
    attributes: Attributes,
    iocell: Cell,
    bondpad: Cell,
}

impl Pin {
    /// Creates a pin using the default cell templates.
    pub fn new(name: impl AsRef<str>, direction: Direction) -> Pin {
        Pin::with_library(name, direction, &CellLibrary::default())
    }

    /// Creates a pin that copies its cells from `library`.
    pub fn with_library(name: impl AsRef<str>, direction: Direction, library: &CellLibrary) -> Pin {
        let (iocell, bondpad) = library.cells_for(direction);
        Pin {
            name: name.as_ref().to_string(),
            direction,
            active_low: false,
            priority: None,
            module: DEFAULT_MODULE.to_string(),
            attributes: Attributes::new(),
            iocell,
            bondpad,
        }
    }

    pub fn input(name: impl AsRef<str>) -> Pin {
        Pin::new(name, Direction::Input)
    }

    pub fn output(name: impl AsRef<str>) -> Pin {
        Pin::new(name, Direction::Output)
    }

    pub fn inout(name: impl AsRef<str>) -> Pin {
        Pin::new(name, Direction::Inout)
    }

    pub fn analog(name: impl AsRef<str>) -> Pin {
        Pin::new(name, Direction::Analog)
    }

    /// Marks the pin as active low.
    pub fn active_low(mut self) -> Self {
        self.active_low = true;
        self
    }

    /// Sets the mux priority. When several pins share a pad, the one with the
    /// highest priority becomes the pad's default function.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the module the signal comes from.
    pub fn with_module(mut self, module: impl AsRef<str>) -> Self {
        self.module = module.as_ref().to_string();
        self
    }

    pub fn with_attribute(
        mut self,
        key: impl AsRef<str>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.as_ref().to_string(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_active_low(&self) -> bool {
        self.active_low
    }

    pub fn priority(&self) -> Option<i64> {
        self.priority
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn iocell(&self) -> &Cell {
        &self.iocell
    }

    pub fn bondpad(&self) -> &Cell {
        &self.bondpad
    }

    /// Mutable access to this pin's own IO cell, for per-pin overrides.
    pub fn iocell_mut(&mut self) -> &mut Cell {
        &mut self.iocell
    }

    /// Mutable access to this pin's own bond pad, for per-pin overrides.
    pub fn bondpad_mut(&mut self) -> &mut Cell {
        &mut self.bondpad
    }

    /// Signal name as used in RTL: `<name>_n` when active low, `<name>_`
    /// otherwise.
    pub fn rtl_name(&self) -> String {
        if self.active_low {
            format!("{}_n", self.name)
        } else {
            format!("{}_", self.name)
        }
    }
}
