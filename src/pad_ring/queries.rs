// SPDX-License-Identifier: Apache-2.0

use itertools::Itertools;
use std::collections::HashSet;

use crate::{Pad, PadRing, Pin, Side};

impl PadRing {
    /// Pins connected to any pad, every alternative of a muxed pad included.
    /// Each pin appears once, in the order it is first met in the pad list.
    pub fn connected_pins(&self) -> Vec<&Pin> {
        self.pad_list
            .iter()
            .flat_map(|pad| pad.pins.iter())
            .unique_by(|pin| pin.name().to_string())
            .collect()
    }

    /// The main (highest priority) pin of each pad.
    pub fn connected_main_pins(&self) -> Vec<&Pin> {
        self.pad_list
            .iter()
            .filter_map(Pad::main_pin)
            .unique_by(|pin| pin.name().to_string())
            .collect()
    }

    /// Declared pins that no pad carries, in pin list order.
    pub fn unconnected_pins(&self) -> Vec<&Pin> {
        let connected: HashSet<&str> = self.connected_pins().into_iter().map(Pin::name).collect();
        self.pin_list
            .iter()
            .filter(|pin| !connected.contains(pin.name()))
            .collect()
    }

    pub fn num_muxed_pads(&self) -> usize {
        self.pad_list.iter().filter(|pad| pad.is_muxed()).count()
    }

    /// Number of select bits needed by the widest muxed pad, 0 when no pad is
    /// muxed.
    pub fn muxed_pad_select_width(&self) -> u32 {
        self.pad_list
            .iter()
            .filter(|pad| pad.is_muxed())
            .map(Pad::select_width)
            .max()
            .unwrap_or(0)
    }

    /// Pads on `side`, corners included, sorted by side index.
    pub fn pads_on_side(&self, side: Side) -> Vec<&Pad> {
        self.pad_list
            .iter()
            .filter(|pad| pad.side == Some(side))
            .sorted_by(|a, b| {
                let a = a.side_index.unwrap_or_default();
                let b = b.side_index.unwrap_or_default();
                a.total_cmp(&b)
            })
            .collect()
    }

    /// Looks up a pad by its final (deduplicated) name.
    pub fn pad(&self, name: impl AsRef<str>) -> Option<&Pad> {
        self.pad_list.iter().find(|pad| pad.name == name.as_ref())
    }

    /// Looks up a declared pin by name.
    pub fn pin(&self, name: impl AsRef<str>) -> Option<&Pin> {
        self.pin_list.iter().find(|pin| pin.name() == name.as_ref())
    }
}
