// SPDX-License-Identifier: Apache-2.0

use itertools::Itertools;
use std::collections::{HashMap, HashSet};

use crate::PadRing;

impl PadRing {
    /// Names pads that have none as `NC_<global_index>`, then gives every
    /// name used by more than one pad a `_1`, `_2`, ... suffix in pad list
    /// order. A suffix already taken by another pad is skipped, so names are
    /// unique across the ring afterwards.
    pub(crate) fn rename_duplicate_pads(&mut self) {
        for pad in self.pad_list.iter_mut() {
            if pad.name.is_empty() {
                pad.name = match pad.global_index {
                    Some(index) => format!("NC_{index}"),
                    None => "NC".to_string(),
                };
            }
        }

        let counts = self.pad_list.iter().map(|pad| pad.name.clone()).counts();
        let mut taken: HashSet<String> = counts
            .iter()
            .filter(|(_, count)| **count == 1)
            .map(|(name, _)| name.clone())
            .collect();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for pad in self.pad_list.iter_mut() {
            if counts[&pad.name] < 2 {
                continue;
            }
            let suffix = seen.entry(pad.name.clone()).or_insert(0);
            let renamed = loop {
                *suffix += 1;
                let candidate = format!("{}_{}", pad.name, suffix);
                if !taken.contains(&candidate) {
                    break candidate;
                }
            };
            log::debug!("Renaming duplicate pad {} to {}", pad.name, renamed);
            taken.insert(renamed.clone());
            pad.name = renamed;
        }
    }
}
