use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grid::ZoneType;
use crate::ids::{AgentId, BuildingId, LocationId, OrgId};
use crate::report::NotPlacedReason;

// ---------------------------------------------------------------------------
// Placement result
// ---------------------------------------------------------------------------

/// Outcome of placing one location instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Claimed a free unit inside a building whose tags matched.
    InBuilding {
        building: BuildingId,
        floor: u32,
        unit: u32,
    },
    /// No building accepted it; placed on a cell satisfying the spawn
    /// constraints instead.
    AtGridPoint { x: usize, y: usize, floor: u32 },
    NotPlaced(NotPlacedReason),
}

impl Placement {
    pub fn is_placed(&self) -> bool {
        !matches!(self, Placement::NotPlaced(_))
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerRef {
    Organization(OrgId),
    Agent(AgentId),
    /// Public spaces and standalone locations.
    None,
}

/// A placed location instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub template_id: String,
    pub name: String,
    pub tags: Vec<String>,
    /// Always `InBuilding` or `AtGridPoint`.
    pub placement: Placement,
    pub x: usize,
    pub y: usize,
    pub zone: ZoneType,
    pub owner: OwnerRef,
    pub inventory: BTreeMap<String, u32>,
    pub employee_slots: u32,
}

impl Location {
    pub fn building(&self) -> Option<BuildingId> {
        match self.placement {
            Placement::InBuilding { building, .. } => Some(building),
            _ => None,
        }
    }

    pub fn floor(&self) -> u32 {
        match self.placement {
            Placement::InBuilding { floor, .. } | Placement::AtGridPoint { floor, .. } => floor,
            Placement::NotPlaced(_) => 0,
        }
    }

    pub fn unit(&self) -> Option<u32> {
        match self.placement {
            Placement::InBuilding { unit, .. } => Some(unit),
            _ => None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
