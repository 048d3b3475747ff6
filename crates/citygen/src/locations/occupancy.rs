use std::collections::{BTreeMap, BTreeSet};

use crate::buildings::Building;
use crate::ids::BuildingId;

/// Claimed `(floor, unit)` slots per building.
///
/// Owned by the generation context and passed by `&mut` through placement;
/// a slot is never handed out twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingOccupancy {
    occupied: BTreeMap<BuildingId, BTreeSet<(u32, u32)>>,
}

impl BuildingOccupancy {
    pub fn is_free(&self, building: BuildingId, floor: u32, unit: u32) -> bool {
        self.occupied
            .get(&building)
            .map_or(true, |slots| !slots.contains(&(floor, unit)))
    }

    /// Mark a slot as taken. Returns false if it already was.
    pub fn claim(&mut self, building: BuildingId, floor: u32, unit: u32) -> bool {
        let slots = self.occupied.entry(building).or_default();
        slots.insert((floor, unit))
    }

    /// First free slot scanning floors, then units within a floor.
    pub fn first_free(&self, building: &Building) -> Option<(u32, u32)> {
        let taken = self.occupied.get(&building.id);
        if taken.map_or(0, |s| s.len() as u32) >= building.capacity() {
            return None;
        }
        for floor in 0..building.floors {
            for unit in 0..building.units_per_floor {
                if taken.map_or(true, |s| !s.contains(&(floor, unit))) {
                    return Some((floor, unit));
                }
            }
        }
        None
    }

    pub fn occupied_count(&self, building: BuildingId) -> usize {
        self.occupied.get(&building).map_or(0, |s| s.len())
    }

    pub fn total_occupied(&self) -> usize {
        self.occupied.values().map(|s| s.len()).sum()
    }
}
