//! Benchmark profiles for the Aliquot liquid-tracking workspace.
//!
//! - [`reference_deck`]: a 96-well plate, a 384-well plate and a
//!   12-trough reservoir
//! - [`transfer_timeline`]: a deterministic protocol that moves reagent
//!   from the reservoir into plate wells, one transfer per step
//! - [`pick_wells`]: deterministic well selection via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use aliquot_contents::{RobotState, SelectedWells, Timeline};
use aliquot_core::WellName;
use aliquot_labware::{LabwareDefinition, LabwareEntities};
use aliquot_test_utils::fixtures::{plate_384, plate_96, reservoir_12};

/// Labware ids placed by [`reference_deck`], in slot order.
pub const DECK: [(&str, &str); 3] = [("plate", "1"), ("plate_384", "2"), ("trough", "3")];

/// Definitions for every labware in [`DECK`].
pub fn reference_deck() -> LabwareEntities {
    let defs: [Arc<LabwareDefinition>; 3] = [
        Arc::new(plate_96()),
        Arc::new(plate_384()),
        Arc::new(reservoir_12()),
    ];
    DECK.iter().map(|&(id, _)| id).zip(defs).collect()
}

/// A protocol of `step_count` transfers.
///
/// Step `i` draws 10 µL of `reagent-{i % 12}` from trough well
/// `A{i % 12 + 1}` and dispenses it into a plate well chosen from `seed`.
/// Every snapshot carries the full accumulated liquid state, as a
/// simulator would commit it.
pub fn transfer_timeline(step_count: usize, seed: u64) -> Timeline {
    let mut state = DECK
        .iter()
        .fold(RobotState::new(), |s, &(id, slot)| s.with_labware(id, slot));
    for col in 1..=12 {
        let group = format!("reagent-{}", col - 1);
        state = state.with_liquid("trough", format!("A{col}"), group, 20_000.0);
    }

    let plate = plate_96();
    let targets: Vec<&WellName> = plate.all_well_names().collect();
    let mut timeline = Timeline::new(state.clone());

    for i in 0..step_count {
        let lane = i % 12;
        let group = format!("reagent-{lane}");
        let source = format!("A{}", lane + 1);
        let target = targets[hash_index(seed, i as u64, targets.len())].clone();

        let remaining = volume_of(&state, "trough", &source, &group) - 10.0;
        let filled = volume_of(&state, "plate", target.as_str(), &group) + 10.0;
        state = state
            .with_liquid("trough", source, group.clone(), remaining)
            .with_liquid("plate", target, group, filled);
        timeline.push(state.clone());
    }
    timeline
}

/// `n` distinct wells of `def`, chosen deterministically from `seed`.
pub fn pick_wells(def: &LabwareDefinition, n: usize, seed: u64) -> SelectedWells {
    let names: Vec<&WellName> = def.all_well_names().collect();
    let n = n.min(names.len());
    let mut picked = SelectedWells::with_capacity(n);
    for i in 0..n {
        let mut pos = hash_index(seed, i as u64, names.len());
        // Linear probe to avoid collisions
        while picked.contains(names[pos]) {
            pos = (pos + 1) % names.len();
        }
        picked.insert(names[pos].clone());
    }
    picked
}

fn volume_of(state: &RobotState, labware: &str, well: &str, group: &str) -> f64 {
    state
        .liquid_state
        .get(labware)
        .and_then(|l| l.get(well))
        .and_then(|w| w.get(group))
        .map_or(0.0, |v| v.volume)
}

fn hash_index(seed: u64, i: u64, len: usize) -> usize {
    (seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407))
        >> 16) as usize
        % len
}
