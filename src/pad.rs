// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::{AttributeValue, Attributes, Cell, Orientation, Pin, Side};

/// What a pad slot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PadKind {
    /// Carries one or more pins and is numbered.
    Logical,
    /// A fixed cell without pins, such as a supply cut. Never numbered.
    Physical,
    /// A physical cell anchored at a ring corner, placed apart from the pitch
    /// spacing.
    Corner,
}

/// A slot of the pad ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pad {
    pub(crate) kind: PadKind,
    pub(crate) global_index: Option<usize>,
    pub(crate) pins: Vec<Pin>,
    pub(crate) side: Option<Side>,
    pub(crate) side_index: Option<f64>,
    pub(crate) orientation: Option<Orientation>,
    pub(crate) fixed_iocell_center: Option<f64>,
    pub(crate) space: Option<f64>,
    pub(crate) offset: Option<f64>,
    pub(crate) iocell_center_to_ring_edge: Option<f64>,
    pub(crate) bondpad_center_to_ring_edge: Option<f64>,
    pub(crate) bondpad_space: Option<f64>,
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) iocell: Option<Cell>,
    pub(crate) bondpad: Option<Cell>,
}

impl Pad {
    fn with_kind(kind: PadKind) -> Pad {
        Pad {
            kind,
            global_index: None,
            pins: Vec::new(),
            side: None,
            side_index: None,
            orientation: None,
            fixed_iocell_center: None,
            space: None,
            offset: None,
            iocell_center_to_ring_edge: None,
            bondpad_center_to_ring_edge: None,
            bondpad_space: None,
            name: String::new(),
            attributes: Attributes::new(),
            iocell: None,
            bondpad: None,
        }
    }

    /// A pad carrying `pins`. More than one pin makes it a muxed pad.
    pub fn logical(pins: Vec<Pin>) -> Pad {
        Pad {
            pins,
            ..Pad::with_kind(PadKind::Logical)
        }
    }

    /// A pad with fixed cells and no pins. `bondpad` may be `None` for cells
    /// such as ring cuts that have nothing to bond.
    pub fn physical(name: impl AsRef<str>, iocell: Cell, bondpad: Option<Cell>) -> Pad {
        Pad {
            name: name.as_ref().to_string(),
            iocell: Some(iocell),
            bondpad,
            ..Pad::with_kind(PadKind::Physical)
        }
    }

    /// A corner cell.
    pub fn corner(name: impl AsRef<str>, iocell: Cell) -> Pad {
        Pad {
            name: name.as_ref().to_string(),
            iocell: Some(iocell),
            ..Pad::with_kind(PadKind::Corner)
        }
    }

    /// Pins the pad to a global index instead of taking the next free one.
    /// Ignored for physical and corner pads.
    pub fn with_global_index(mut self, index: usize) -> Self {
        if self.kind == PadKind::Logical {
            self.global_index = Some(index);
        }
        self
    }

    /// Places the pad at `side_index` on its side. Fractional values put it
    /// between two slots, e.g. 7.5 between the 7th and 8th.
    pub fn with_side_index(mut self, side_index: f64) -> Self {
        self.side_index = Some(side_index);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Fixes the distance from the ring edge to the IO cell center. Spacing
    /// keeps this position and derives the gap to the previous pad from it.
    pub fn with_iocell_center(mut self, center_to_ring_edge: f64) -> Self {
        self.fixed_iocell_center = Some(center_to_ring_edge);
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

    /// Orders the pins by priority and takes the pad's identity from the
    /// first one. Pins with a priority come first, highest first; pins
    /// without one follow; ties keep their declaration order.
    pub fn build(&mut self) {
        if self.pins.is_empty() {
            return;
        }
        // stable sort; None < Some(_) so reversing puts unprioritized pins last
        self.pins.sort_by(|a, b| b.priority().cmp(&a.priority()));

        let main_pin = &self.pins[0];
        self.name = main_pin.name().to_string();
        self.attributes = main_pin.attributes().clone();
        self.iocell = Some(main_pin.iocell().clone());
        self.bondpad = Some(main_pin.bondpad().clone());
    }

    pub fn is_muxed(&self) -> bool {
        self.pins.len() > 1
    }

    /// Number of select bits needed to choose between this pad's pins.
    pub fn select_width(&self) -> u32 {
        match self.pins.len() {
            0 => 0,
            n => usize::BITS - (n - 1).leading_zeros(),
        }
    }

    /// The pin that defines this pad, once built.
    pub fn main_pin(&self) -> Option<&Pin> {
        self.pins.first()
    }

    pub fn kind(&self) -> PadKind {
        self.kind
    }

    pub fn is_corner(&self) -> bool {
        self.kind == PadKind::Corner
    }

    pub fn is_physical(&self) -> bool {
        self.kind != PadKind::Logical
    }

    pub fn global_index(&self) -> Option<usize> {
        self.global_index
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn side_index(&self) -> Option<f64> {
        self.side_index
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Gap from the previous IO cell on the same side (from the corner cell
    /// for the first pad).
    pub fn space(&self) -> Option<f64> {
        self.space
    }

    /// Offset of the first bond pad from the start of its ring.
    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    pub fn iocell_center_to_ring_edge(&self) -> Option<f64> {
        self.iocell_center_to_ring_edge
    }

    pub fn bondpad_center_to_ring_edge(&self) -> Option<f64> {
        self.bondpad_center_to_ring_edge
    }

    /// Gap from the previous bond pad on the same side.
    pub fn bondpad_space(&self) -> Option<f64> {
        self.bondpad_space
    }

    pub fn fixed_iocell_center(&self) -> Option<f64> {
        self.fixed_iocell_center
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn iocell(&self) -> Option<&Cell> {
        self.iocell.as_ref()
    }

    pub fn bondpad(&self) -> Option<&Cell> {
        self.bondpad.as_ref()
    }

    pub(crate) fn iocell_width(&self) -> f64 {
        self.iocell.as_ref().map_or(0.0, Cell::width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_wins_without_priority() {
        let mut pad = Pad::logical(vec![Pin::input("spi_slave_sck"), Pin::inout("gpio_14")]);
        pad.build();
        assert_eq!(pad.name(), "spi_slave_sck");
        assert!(pad.is_muxed());
        assert_eq!(pad.pins().len(), 2);
        assert_eq!(pad.iocell().unwrap().wrapper(), "u_pad_cell_input");
    }

    #[test]
    fn priority_beats_declaration_order() {
        let mut pad = Pad::logical(vec![
            Pin::inout("a"),
            Pin::inout("b").with_priority(0),
            Pin::inout("c").with_priority(2),
            Pin::inout("d"),
            Pin::inout("e").with_priority(2),
        ]);
        pad.build();
        let names: Vec<_> = pad.pins().iter().map(Pin::name).collect();
        assert_eq!(names, ["c", "e", "b", "a", "d"]);
        assert_eq!(pad.name(), "c");
        assert_eq!(pad.main_pin().unwrap().name(), "c");
    }

    #[test]
    fn inherits_main_pin_attributes() {
        let mut pad = Pad::logical(vec![Pin::output("tx").with_attribute("drive", 8_i64)]);
        pad.build();
        assert!(!pad.is_muxed());
        assert_eq!(pad.attributes()["drive"], AttributeValue::Int(8));
    }

    #[test]
    fn empty_pad_stays_unnamed() {
        let mut pad = Pad::logical(Vec::new());
        pad.build();
        assert_eq!(pad.name(), "");
        assert!(pad.iocell().is_none());
        assert_eq!(pad.select_width(), 0);
    }

    #[test]
    fn select_width_is_bit_length() {
        let pad = |n: usize| Pad::logical((0..n).map(|i| Pin::inout(format!("p{i}"))).collect());
        assert_eq!(pad(1).select_width(), 0);
        assert_eq!(pad(2).select_width(), 1);
        assert_eq!(pad(3).select_width(), 2);
        assert_eq!(pad(4).select_width(), 2);
        assert_eq!(pad(5).select_width(), 3);
    }

    #[test]
    fn physical_pads_never_take_an_index() {
        let cell = Cell::new("PRCUT", 5.0, 32.0).unwrap();
        let pad = Pad::physical("cut", cell, None).with_global_index(3);
        assert_eq!(pad.global_index(), None);
        assert!(pad.is_physical());
        assert!(!pad.is_corner());
    }
}
