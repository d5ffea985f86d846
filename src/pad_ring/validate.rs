// SPDX-License-Identifier: Apache-2.0

use itertools::Itertools;

use crate::{PadRing, PadRingError, RegisterField, Result, SIDE_ORDER};

/// Overlaps below this are rounding noise.
const OVERLAP_TOLERANCE: f64 = 1e-9;

impl PadRing {
    /// Checks the ring attributes. If `bits` is set it must read `msb:lsb`
    /// with `msb >= lsb`, and `resval` must be set and fit in
    /// `msb - lsb + 1` bits.
    pub fn validate(&self) -> Result<()> {
        self.register_field().map(|_| ())
    }

    /// The typed form of the `bits` and `resval` attributes.
    pub fn register_field(&self) -> Result<Option<RegisterField>> {
        RegisterField::from_attributes(&self.attributes)
    }

    /// Checks that no two placed IO cells on the same side overlap along the
    /// side. Cells that only touch are fine. Pads that have not been spaced
    /// yet are ignored. A corner occupies the span it was anchored to, from
    /// the ring start to twice its center.
    pub fn check_overlaps(&self) -> Result<()> {
        for side in SIDE_ORDER {
            let spans = self
                .pad_list
                .iter()
                .filter(|pad| pad.side == Some(side) && pad.iocell.is_some())
                .filter_map(|pad| {
                    let center = pad.iocell_center_to_ring_edge?;
                    // corners are anchored flush at the ring start and span
                    // the adjoining IO cell height, not their own width
                    let half = if pad.is_corner() {
                        center
                    } else {
                        pad.iocell_width() / 2.0
                    };
                    Some((center - half, center + half, pad))
                })
                .sorted_by(|a, b| a.0.total_cmp(&b.0));

            for ((_, first_end, first), (second_start, _, second)) in spans.tuple_windows() {
                if first_end - second_start > OVERLAP_TOLERANCE {
                    return Err(PadRingError::OverlappingPads {
                        side,
                        first: first.name.clone(),
                        second: second.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
