// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::fmt;

use crate::{Cell, PadRing, Pin};

/// One line of the pin summary: a pad and the pins it carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub index: Option<usize>,
    pub name: String,
    pub iocell: Option<String>,
    pub bondpad: Option<String>,
    pub pins: Vec<String>,
}

/// Pads with their pins, plus the declared pins left unconnected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinSummary {
    pub rows: Vec<SummaryRow>,
    pub unconnected: Vec<String>,
}

impl PadRing {
    pub fn summary(&self) -> PinSummary {
        let rows = self
            .pad_list
            .iter()
            .map(|pad| SummaryRow {
                index: pad.global_index,
                name: pad.name.clone(),
                iocell: pad.iocell.as_ref().map(|c| c.name().to_string()),
                bondpad: pad.bondpad.as_ref().map(Cell::name).map(str::to_string),
                pins: pad.pins.iter().map(|p| p.name().to_string()).collect(),
            })
            .collect();
        let unconnected = self
            .unconnected_pins()
            .into_iter()
            .map(Pin::name)
            .map(str::to_string)
            .collect();
        PinSummary { rows, unconnected }
    }

    /// Logs the pin summary at info level and warns about each pin that is
    /// not connected to any pad.
    pub fn log_summary(&self) {
        let summary = self.summary();
        for line in summary.to_string().lines() {
            log::info!("{line}");
        }
        for pin in &summary.unconnected {
            log::warn!("Pin {pin} is not connected to any pad");
        }
    }
}

impl fmt::Display for PinSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<3} | {:<29}| {:<19}| {:<19}| {:<7}| Pins",
            "Idx", "Name", "IO cell", "Bondpad", "# pins"
        )?;
        for row in &self.rows {
            let index = row.index.map(|i| i.to_string()).unwrap_or_default();
            writeln!(
                f,
                "{:<3} | {:<29}| {:<19}| {:<19}| {:<7}| {}",
                index,
                row.name,
                row.iocell.as_deref().unwrap_or(""),
                row.bondpad.as_deref().unwrap_or(""),
                row.pins.len(),
                row.pins.join(", ")
            )?;
        }
        if !self.unconnected.is_empty() {
            writeln!(f)?;
            writeln!(f, "UNCONNECTED PINS")?;
            for pin in &self.unconnected {
                writeln!(f, " - {pin}")?;
            }
        }
        Ok(())
    }
}
