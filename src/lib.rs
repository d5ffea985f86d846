// SPDX-License-Identifier: Apache-2.0

//! Builds the pad ring of a chip: maps named signals to boundary pads on the
//! four sides, resolves multiplexed pads, numbers and names the pads, and
//! spaces the IO cell and bond pad rings by pitch. The resulting model is
//! read by templating code that emits the pad ring RTL and floorplan.

mod attributes;
mod cell;
mod dimension;
mod error;
mod floorplan;
mod pad;
mod pad_ring;
mod pin;
mod register_field;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use cell::{Cell, CellField, CellLibrary};
pub use dimension::Dimension;
pub use error::{PadRingError, Result};
pub use floorplan::{
    DefOrientation, FloorplanDimensions, Orientation, SIDE_ORDER, Side, SideMargins,
};
pub use pad::{Pad, PadKind};
pub use pad_ring::{PadMapping, PadRing, PinSummary, PlacementItem, SpacingOptions, SummaryRow};
pub use pin::{DEFAULT_MODULE, Direction, Pin};
pub use register_field::RegisterField;
