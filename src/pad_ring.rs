// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    AttributeValue, Attributes, FloorplanDimensions, Pad, PadKind, PadRingError, Pin, Result,
    SIDE_ORDER, Side,
};

mod naming;
mod queries;
mod spacing;
mod summary;
mod validate;
pub use spacing::SpacingOptions;
pub use summary::{PinSummary, SummaryRow};

/// One entry of a side's placement list.
#[derive(Debug, Clone)]
pub enum PlacementItem {
    /// A ready-made pad: physical, corner, or a logical pad with preset
    /// placement.
    Pad(Pad),
    /// Names of pins from the ring's pin list that share a new pad. More than
    /// one name makes it a muxed pad.
    Pins(Vec<String>),
}

impl PlacementItem {
    pub fn pins<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PlacementItem::Pins(names.into_iter().map(|n| n.as_ref().to_string()).collect())
    }
}

impl From<Pad> for PlacementItem {
    fn from(pad: Pad) -> Self {
        PlacementItem::Pad(pad)
    }
}

/// Pads of each side, in placement order.
pub type PadMapping = IndexMap<Side, Vec<PlacementItem>>;

/// The complete pad ring: every declared pin and the pads they map to.
#[derive(Debug, Clone, Serialize)]
pub struct PadRing {
    floorplan_dimensions: Option<FloorplanDimensions>,
    pin_list: Vec<Pin>,
    pad_list: Vec<Pad>,
    attributes: Attributes,
}

impl PadRing {
    /// Builds the pad ring from `mapping`. Sides are visited in
    /// [`SIDE_ORDER`] whatever the order of the map. Each pin group and each
    /// logical pad without an index takes the next global index; physical
    /// and corner pads are not numbered. Pads get their side, a per-side
    /// index and the side's default orientation unless they preset them.
    /// All pads are then built and duplicate names are made unique.
    ///
    /// `attributes` are not checked here; see [`PadRing::validate`].
    pub fn new(
        floorplan_dimensions: Option<FloorplanDimensions>,
        mut mapping: PadMapping,
        pin_list: Vec<Pin>,
        attributes: Attributes,
    ) -> Result<PadRing> {
        let mut pins_by_name: IndexMap<&str, &Pin> = IndexMap::new();
        for pin in &pin_list {
            if pins_by_name.insert(pin.name(), pin).is_some() {
                return Err(PadRingError::DuplicatePin(pin.name().to_string()));
            }
        }

        let mut pad_list = Vec::new();
        let mut global_index = 0;

        for side in SIDE_ORDER {
            let Some(items) = mapping.swap_remove(&side) else {
                continue;
            };
            let mut side_index = 0;
            let mut side_pads = Vec::with_capacity(items.len());
            for item in items {
                let mut pad = match item {
                    PlacementItem::Pad(mut pad) => {
                        if pad.kind == PadKind::Logical && pad.global_index.is_none() {
                            pad.global_index = Some(global_index);
                            global_index += 1;
                        }
                        pad
                    }
                    PlacementItem::Pins(names) => {
                        let pins = names
                            .iter()
                            .map(|name| {
                                pins_by_name
                                    .get(name.as_str())
                                    .map(|pin| (*pin).clone())
                                    .ok_or_else(|| PadRingError::UnknownPin(name.clone()))
                            })
                            .collect::<Result<Vec<_>>>()?;
                        let pad = Pad::logical(pins).with_global_index(global_index);
                        global_index += 1;
                        pad
                    }
                };

                pad.side = Some(side);
                if pad.side_index.is_none() {
                    pad.side_index = Some(side_index as f64);
                    side_index += 1;
                }
                if pad.orientation.is_none() {
                    pad.orientation = Some(side.default_orientation());
                }
                side_pads.push(pad);
            }
            // preset fractional indices slot in between their neighbors
            side_pads.sort_by(|a, b| {
                let a = a.side_index.unwrap_or_default();
                let b = b.side_index.unwrap_or_default();
                a.total_cmp(&b)
            });
            pad_list.extend(side_pads);
        }

        for pad in pad_list.iter_mut() {
            pad.build();
        }

        let mut pad_ring = PadRing {
            floorplan_dimensions,
            pin_list,
            pad_list,
            attributes,
        };
        pad_ring.rename_duplicate_pads();
        Ok(pad_ring)
    }

    pub fn floorplan_dimensions(&self) -> Option<&FloorplanDimensions> {
        self.floorplan_dimensions.as_ref()
    }

    /// Sets or replaces the floorplan used by the spacing pass.
    pub fn set_floorplan_dimensions(&mut self, floorplan_dimensions: FloorplanDimensions) {
        self.floorplan_dimensions = Some(floorplan_dimensions);
    }

    /// All declared pins, connected or not.
    pub fn pin_list(&self) -> &[Pin] {
        &self.pin_list
    }

    /// All pads, grouped by side in [`SIDE_ORDER`] and sorted by side index.
    /// Global indices are handed out in mapping order before the sort, so a
    /// pad with a preset side index can sit before pads with lower global
    /// indices.
    pub fn pad_list(&self) -> &[Pad] {
        &self.pad_list
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn set_attribute(&mut self, key: impl AsRef<str>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key.as_ref().to_string(), value.into());
    }
}
