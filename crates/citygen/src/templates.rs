//! Declarative archetypes consumed by the generator.
//!
//! These are produced by the config loader (out of scope here) and arrive
//! fully materialized. Optional fields default through serde so template files
//! only have to state what differs from the defaults.

use std::collections::BTreeMap;

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::ZoneType;

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn exactly(value: u32) -> Self {
        Self::new(value, value)
    }

    /// Uniform draw from `[min, max]`. An inverted range yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inclusive credit range; credits may be negative (debt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRange {
    pub min: i64,
    pub max: i64,
}

impl CreditRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Half-open float range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnCount {
    pub count: IntRange,
}

// ---------------------------------------------------------------------------
// Zones and buildings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Building height range in floors.
    pub height_range: IntRange,
    /// Target cell count for the growth phase.
    pub size_range: IntRange,
    /// Building template ids this zone may spawn.
    #[serde(default)]
    pub building_templates: Vec<String>,
    /// Buildings spawned per cell.
    #[serde(default = "default_buildings_per_block")]
    pub buildings_per_block: IntRange,
    /// Loader-side biases, carried through unchanged. Growth shape comes from
    /// the phase rules and the noise field.
    #[serde(default)]
    pub center_bias: f32,
    #[serde(default)]
    pub edge_bias: f32,
    /// Zones a grown cell may not border, on top of the fixed adjacency laws.
    #[serde(default)]
    pub avoid_zones: Vec<ZoneType>,
}

fn default_buildings_per_block() -> IntRange {
    IntRange::new(1, 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub floors: IntRange,
    pub units_per_floor: IntRange,
    #[serde(default)]
    pub allowed_location_tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Geometric rules for the fallback placer. Building placement relies on tag
/// matching instead; only `max_per_city` applies to both tiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConstraints {
    pub allowed_zones: Vec<ZoneType>,
    pub floor_range: Option<IntRange>,
    pub prefer_ground_floor: bool,
    pub prefer_high_floor: bool,
    pub min_distance_from_center: Option<f32>,
    pub max_per_city: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationGeneration {
    /// Instances created at generation time (businesses).
    pub spawn_at_start: Option<SpawnCount>,
    /// Instances per allowed zone (public spaces).
    pub count_per_zone: Option<IntRange>,
    /// Each instance gets its own organization built from this template.
    pub owner_org_template: Option<String>,
    /// Overrides the owner organization's starting credits.
    pub owner_credits: Option<CreditRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub employee_slots: u32,
    /// Starting stock per item id.
    #[serde(default)]
    pub inventory: BTreeMap<String, IntRange>,
    #[serde(default)]
    pub spawn_constraints: SpawnConstraints,
    #[serde(default)]
    pub generation: LocationGeneration,
}

impl LocationTemplate {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// ---------------------------------------------------------------------------
// Organizations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgGeneration {
    pub spawn_at_start: Option<SpawnCount>,
    pub owner_credits: Option<CreditRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Default starting credits.
    #[serde(default)]
    pub credits: Option<CreditRange>,
    /// Location template ids placed for every instance.
    #[serde(default)]
    pub owns_locations: Vec<String>,
    #[serde(default = "default_true")]
    pub leader_is_employee: bool,
    #[serde(default)]
    pub generation: OrgGeneration,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Agents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatRanges {
    pub strength: IntRange,
    pub agility: IntRange,
    pub endurance: IntRange,
    pub intelligence: IntRange,
    pub charisma: IntRange,
    pub perception: IntRange,
}

impl Default for StatRanges {
    fn default() -> Self {
        let r = IntRange::new(1, 10);
        Self {
            strength: r,
            agility: r,
            endurance: r,
            intelligence: r,
            charisma: r,
            perception: r,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedRanges {
    pub hunger: FloatRange,
    pub energy: FloatRange,
    pub social: FloatRange,
}

impl Default for NeedRanges {
    fn default() -> Self {
        Self {
            hunger: FloatRange {
                min: 0.0,
                max: 30.0,
            },
            energy: FloatRange {
                min: 60.0,
                max: 100.0,
            },
            social: FloatRange {
                min: 40.0,
                max: 80.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentGeneration {
    pub spawn_at_start: Option<SpawnCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTemplate {
    pub id: String,
    #[serde(default)]
    pub stats: StatRanges,
    #[serde(default)]
    pub needs: NeedRanges,
    #[serde(default = "default_agent_credits")]
    pub credits: CreditRange,
    #[serde(default)]
    pub inventory: BTreeMap<String, IntRange>,
    #[serde(default)]
    pub first_names: Vec<String>,
    #[serde(default)]
    pub last_names: Vec<String>,
    /// Location template placed once per agent as a home it owns.
    #[serde(default)]
    pub home_template: Option<String>,
    #[serde(default)]
    pub generation: AgentGeneration,
}

fn default_agent_credits() -> CreditRange {
    CreditRange { min: 50, max: 500 }
}

// ---------------------------------------------------------------------------
// Template set
// ---------------------------------------------------------------------------

/// Everything the generator reads besides the seed and tuning parameters.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityTemplates {
    #[serde(default)]
    pub zones: BTreeMap<ZoneType, ZoneConfig>,
    #[serde(default)]
    pub buildings: Vec<BuildingTemplate>,
    #[serde(default)]
    pub locations: Vec<LocationTemplate>,
    #[serde(default)]
    pub organizations: Vec<OrgTemplate>,
    #[serde(default)]
    pub agents: Vec<AgentTemplate>,
}

impl Default for CityTemplates {
    fn default() -> Self {
        crate::presets::standard_city()
    }
}

impl CityTemplates {
    /// A template set with nothing in it.
    pub fn empty() -> Self {
        Self {
            zones: BTreeMap::new(),
            buildings: Vec::new(),
            locations: Vec::new(),
            organizations: Vec::new(),
            agents: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid city templates: {}", e))
    }

    pub fn zone(&self, zone: ZoneType) -> Option<&ZoneConfig> {
        self.zones.get(&zone)
    }

    pub fn building(&self, id: &str) -> Option<&BuildingTemplate> {
        self.buildings.iter().find(|t| t.id == id)
    }

    pub fn location(&self, id: &str) -> Option<&LocationTemplate> {
        self.locations.iter().find(|t| t.id == id)
    }

    pub fn organization(&self, id: &str) -> Option<&OrgTemplate> {
        self.organizations.iter().find(|t| t.id == id)
    }

    pub fn location_mut(&mut self, id: &str) -> Option<&mut LocationTemplate> {
        self.locations.iter_mut().find(|t| t.id == id)
    }

    pub fn organization_mut(&mut self, id: &str) -> Option<&mut OrgTemplate> {
        self.organizations.iter_mut().find(|t| t.id == id)
    }
}
