// SPDX-License-Identifier: Apache-2.0

use crate::{Cell, PadRing, PadRingError, Result, SIDE_ORDER, Side};

/// Pitch spacing parameters applied to every side by
/// [`PadRing::space_ring_by_pitch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingOptions {
    /// Gap between the corner cell and the first IO cell of a side.
    pub space_from_corner_cell: f64,
    /// Target center-to-center distance between adjacent bond pads.
    pub pitch: f64,
}

impl SpacingOptions {
    pub fn new(space_from_corner_cell: f64, pitch: f64) -> Self {
        SpacingOptions {
            space_from_corner_cell,
            pitch,
        }
    }
}

impl PadRing {
    /// Spaces every side in [`SIDE_ORDER`] with the same options.
    pub fn space_ring_by_pitch(&mut self, options: &SpacingOptions) -> Result<()> {
        for side in SIDE_ORDER {
            self.space_side_by_pitch(side, options.space_from_corner_cell, options.pitch)?;
        }
        Ok(())
    }

    /// Computes the gaps and center positions of the IO cells and bond pads
    /// on `side` so that bond pads sit `pitch` apart.
    ///
    /// The first pad is placed `space_from_corner_cell` after the corner
    /// cell, which is assumed to be as wide as that pad's IO cell is high.
    /// Pads with a fixed IO cell center keep it, and the gap before them is
    /// derived from it. Pads without a bond pad are packed against the
    /// previous IO cell and the next bond pad keeps the pitch to the last
    /// one before them. Corner pads are anchored at the start of the side.
    ///
    /// Fails if no floorplan is set or if the first non-corner pad has no
    /// bond pad. A side without pads is skipped with a warning.
    pub fn space_side_by_pitch(
        &mut self,
        side: Side,
        space_from_corner_cell: f64,
        pitch: f64,
    ) -> Result<()> {
        let floorplan = self
            .floorplan_dimensions
            .as_ref()
            .ok_or(PadRingError::MissingFloorplan(side))?;
        let margin_diff = floorplan.iocell_margin(side) - floorplan.bondpad_margin(side);

        let mut order: Vec<usize> = (0..self.pad_list.len())
            .filter(|&i| self.pad_list[i].side == Some(side))
            .collect();
        order.sort_by(|&a, &b| {
            let a = self.pad_list[a].side_index.unwrap_or_default();
            let b = self.pad_list[b].side_index.unwrap_or_default();
            a.total_cmp(&b)
        });
        let (corners, order): (Vec<usize>, Vec<usize>) =
            order.into_iter().partition(|&i| self.pad_list[i].is_corner());

        if order.is_empty() {
            log::warn!("No pads found for {side} side. Will skip spacing by pitch.");
            for &i in &corners {
                let own_width = self.pad_list[i].iocell_width();
                self.anchor_corner(i, own_width);
            }
            return Ok(());
        }

        let first = &self.pad_list[order[0]];
        let Some(first_bondpad) = first.bondpad.as_ref().map(Cell::width) else {
            return Err(PadRingError::MissingFirstBondpad {
                side,
                pad: first.name.clone(),
            });
        };
        let corner_width = first.iocell.as_ref().map_or(0.0, Cell::height);

        let width: Vec<f64> = order.iter().map(|&i| self.pad_list[i].iocell_width()).collect();
        let bondpad: Vec<Option<f64>> = order
            .iter()
            .map(|&i| self.pad_list[i].bondpad.as_ref().map(Cell::width))
            .collect();
        let fixed: Vec<Option<f64>> = order
            .iter()
            .map(|&i| self.pad_list[i].fixed_iocell_center)
            .collect();
        let n = order.len();

        // IO cell ring
        let mut space = vec![0.0; n];
        let mut center = vec![0.0; n];
        match fixed[0] {
            Some(c) => {
                center[0] = c;
                space[0] = c - corner_width - width[0] / 2.0;
            }
            None => {
                space[0] = space_from_corner_cell;
                center[0] = corner_width + space_from_corner_cell + width[0] / 2.0;
            }
        }
        for k in 1..n {
            let half_widths = width[k - 1] / 2.0 + width[k] / 2.0;
            if let Some(c) = fixed[k] {
                space[k] = c - center[k - 1] - half_widths;
                center[k] = c;
                continue;
            }
            space[k] = if bondpad[k].is_none() {
                0.0
            } else if bondpad[k - 1].is_none() {
                // k >= 2 since the first pad has a bond pad
                let gap = width[k - 2] / 2.0 + width[k - 1] + width[k] / 2.0;
                (pitch - gap).max(0.0)
            } else {
                pitch - half_widths
            };
            center[k] = center[k - 1] + space[k] + half_widths;
        }

        // bond pad ring
        let offset = margin_diff + corner_width + space[0] + (width[0] - first_bondpad) / 2.0;
        let mut bondpad_center = vec![0.0; n];
        let mut bondpad_space = vec![None; n];
        bondpad_center[0] = offset + first_bondpad / 2.0;
        bondpad_space[0] = Some(0.0);
        let mut last_bondpad = 0;
        for k in 1..n {
            bondpad_center[k] = center[k] + margin_diff;
            if let Some(bondpad_width) = bondpad[k] {
                let previous_width = bondpad[last_bondpad].unwrap_or_default();
                bondpad_space[k] = Some(
                    bondpad_center[k]
                        - bondpad_center[last_bondpad]
                        - previous_width / 2.0
                        - bondpad_width / 2.0,
                );
                last_bondpad = k;
            }
        }

        for (k, &i) in order.iter().enumerate() {
            let pad = &mut self.pad_list[i];
            pad.space = Some(space[k]);
            pad.offset = (k == 0).then_some(offset);
            pad.iocell_center_to_ring_edge = Some(center[k]);
            pad.bondpad_center_to_ring_edge = Some(bondpad_center[k]);
            pad.bondpad_space = bondpad_space[k];
            log::debug!(
                "{side} pad {}: space {}, IO cell center {}, bond pad center {}",
                pad.name,
                space[k],
                center[k],
                bondpad_center[k]
            );
        }

        for &i in &corners {
            self.anchor_corner(i, corner_width);
        }

        Ok(())
    }

    /// Places a corner cell flush with the start of its side.
    fn anchor_corner(&mut self, index: usize, corner_width: f64) {
        let pad = &mut self.pad_list[index];
        pad.space = Some(0.0);
        pad.offset = Some(0.0);
        pad.iocell_center_to_ring_edge = Some(corner_width / 2.0);
        pad.bondpad_center_to_ring_edge = None;
        pad.bondpad_space = None;
    }
}
