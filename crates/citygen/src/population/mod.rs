mod agents;
mod assignment;
mod homes;
mod organizations;
mod public_spaces;
mod types;

use std::collections::BTreeSet;

use bevy::prelude::*;

use crate::buildings::Building;
use crate::context::GenContext;
use crate::grid::CityGrid;
use crate::ids::{AgentId, LocationId};
use crate::locations::Location;
use crate::templates::CityTemplates;

pub use agents::{spawn_agent, spawn_agents};
pub use assignment::assign_starting_locations;
pub use homes::spawn_homes;
pub use organizations::{spawn_business_locations, spawn_org_archetypes, starting_credits};
pub use public_spaces::spawn_public_spaces;
pub use types::{Agent, AgentStats, AgentStatus, Needs, Organization};

/// Entities created by the population passes.
#[derive(Debug, Clone, Default)]
pub struct Population {
    pub agents: Vec<Agent>,
    pub organizations: Vec<Organization>,
    pub locations: Vec<Location>,
    /// Ids of locations spawned by the public-space pass.
    pub public_spaces: Vec<LocationId>,
    /// Agents already leading an organization, employed or not.
    leaders: BTreeSet<AgentId>,
}

impl Population {
    /// Index of the first agent with no employer that leads nothing yet.
    pub fn next_owner(&self) -> Option<usize> {
        self.agents
            .iter()
            .position(|a| a.employer.is_none() && !self.leaders.contains(&a.id))
    }
}

/// Populate a zoned, built city. Agents come first so organizations can claim
/// them as leaders.
pub fn seed_population(
    ctx: &mut GenContext,
    grid: &CityGrid,
    buildings: &[Building],
    templates: &CityTemplates,
) -> Population {
    let mut population = Population {
        agents: spawn_agents(ctx, templates),
        ..Default::default()
    };

    spawn_org_archetypes(ctx, grid, buildings, templates, &mut population);
    spawn_business_locations(ctx, grid, buildings, templates, &mut population);
    spawn_public_spaces(ctx, grid, buildings, templates, &mut population);
    spawn_homes(ctx, grid, buildings, templates, &mut population);
    assign_starting_locations(ctx, &mut population);

    debug!(
        "citygen: seeded {} agents, {} organizations, {} locations ({} public)",
        population.agents.len(),
        population.organizations.len(),
        population.locations.len(),
        population.public_spaces.len(),
    );

    population
}
