use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{AgentId, LocationId, OrgId};

// ---------------------------------------------------------------------------
// Agents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    pub strength: u32,
    pub agility: u32,
    pub endurance: u32,
    pub intelligence: u32,
    pub charisma: u32,
    pub perception: u32,
}

/// Needs on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Needs {
    pub hunger: f32,
    pub energy: f32,
    pub social: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Unemployed,
    Employed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub template_id: String,
    pub name: String,
    pub stats: AgentStats,
    pub needs: Needs,
    pub inventory: BTreeMap<String, u32>,
    pub wallet: i64,
    pub status: AgentStatus,
    pub employer: Option<OrgId>,
    pub home: Option<LocationId>,
    /// Where the agent starts the simulation.
    pub current_location: Option<LocationId>,
}

impl Agent {
    pub fn is_employed(&self) -> bool {
        self.status == AgentStatus::Employed
    }

    pub(crate) fn employ(&mut self, org: OrgId) {
        self.status = AgentStatus::Employed;
        self.employer = Some(org);
    }
}

// ---------------------------------------------------------------------------
// Organizations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrgId,
    pub template_id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub leader: AgentId,
    pub employees: Vec<AgentId>,
    /// Owned locations in placement order; the first is the workplace.
    pub locations: Vec<LocationId>,
    pub wallet: i64,
}

impl Organization {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
