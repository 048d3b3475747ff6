use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Why a location instance was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotPlacedReason {
    /// The template's `max_per_city` was already reached.
    CityCapReached,
    /// No building unit was free and the fallback search ran out of attempts.
    NoSlotAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedLocation {
    pub template_id: String,
    pub reason: NotPlacedReason,
}

/// What happened during a run besides the entities themselves: skipped steps
/// and dropped placements. Generation never fails; this is where its
/// degradations surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub warnings: Vec<String>,
    pub placed_in_building: u32,
    pub placed_at_grid_point: u32,
    pub dropped_locations: Vec<DroppedLocation>,
    /// Cells assigned by the gap-fill phase rather than by growth.
    pub gap_filled_cells: u32,
}

impl GenerationReport {
    /// Log a warning and keep it for callers.
    pub fn warn(&mut self, message: String) {
        warn!("citygen: {}", message);
        self.warnings.push(message);
    }

    pub fn dropped_count(&self, template_id: &str) -> usize {
        self.dropped_locations
            .iter()
            .filter(|d| d.template_id == template_id)
            .count()
    }
}
