// =============================================================================
// Organizations: archetypes spawned at start with their owned locations, and
// businesses founded around a single location.
// =============================================================================

use crate::buildings::Building;
use crate::context::GenContext;
use crate::grid::CityGrid;
use crate::locations::{spawn_location, OwnerRef};
use crate::templates::{CityTemplates, CreditRange, LocationTemplate, OrgTemplate};

use super::types::Organization;
use super::Population;

/// Starting credits: the owner-specific range, else the organization
/// template's range, else the configured fallback.
pub fn starting_credits(
    ctx: &mut GenContext,
    owner_credits: Option<CreditRange>,
    template_credits: Option<CreditRange>,
) -> i64 {
    let range = owner_credits
        .or(template_credits)
        .unwrap_or(ctx.params.placement.fallback_org_credits);
    range.sample(&mut ctx.rng)
}

/// Create an organization led by the agent at `leader`. Returns its index in
/// `population.organizations`.
fn found_org(
    ctx: &mut GenContext,
    population: &mut Population,
    template: &OrgTemplate,
    leader: usize,
    wallet: i64,
) -> usize {
    let id = ctx.ids.next_org();
    let leader_id = population.agents[leader].id;
    let mut employees = Vec::new();
    if template.leader_is_employee {
        population.agents[leader].employ(id);
        employees.push(leader_id);
    }
    population.leaders.insert(leader_id);

    let name = if template.name.is_empty() {
        template.id.clone()
    } else {
        template.name.clone()
    };
    population.organizations.push(Organization {
        id,
        template_id: template.id.clone(),
        name,
        tags: template.tags.clone(),
        leader: leader_id,
        employees,
        locations: Vec::new(),
        wallet,
    });
    population.organizations.len() - 1
}

fn warn_depleted(ctx: &mut GenContext, template_id: &str, created: u32, requested: u32) {
    ctx.report.warn(format!(
        "no unassigned agent left to lead '{}'; created {} of {}",
        template_id, created, requested
    ));
}

/// Organization templates with `spawn_at_start`, in declaration order.
pub fn spawn_org_archetypes(
    ctx: &mut GenContext,
    grid: &CityGrid,
    buildings: &[Building],
    templates: &CityTemplates,
    population: &mut Population,
) {
    for template in &templates.organizations {
        let Some(spawn) = template.generation.spawn_at_start else {
            continue;
        };

        let mut owned: Vec<&LocationTemplate> = Vec::new();
        for location_id in &template.owns_locations {
            match templates.location(location_id) {
                Some(location) => owned.push(location),
                None => ctx.report.warn(format!(
                    "organization '{}' owns unknown location template '{}'",
                    template.id, location_id
                )),
            }
        }

        let count = spawn.count.sample(&mut ctx.rng);
        for created in 0..count {
            let Some(leader) = population.next_owner() else {
                warn_depleted(ctx, &template.id, created, count);
                break;
            };
            let wallet = starting_credits(ctx, template.generation.owner_credits, template.credits);
            let org = found_org(ctx, population, template, leader, wallet);
            let org_id = population.organizations[org].id;

            for location in &owned {
                let owner = OwnerRef::Organization(org_id);
                if let Some(placed) = spawn_location(ctx, grid, buildings, location, None, owner) {
                    population.organizations[org].locations.push(placed.id);
                    population.locations.push(placed);
                }
            }
        }
    }
}

/// Location templates with `spawn_at_start`. With an `owner_org_template`
/// each placed instance founds its own organization; without one the
/// instances are unowned.
pub fn spawn_business_locations(
    ctx: &mut GenContext,
    grid: &CityGrid,
    buildings: &[Building],
    templates: &CityTemplates,
    population: &mut Population,
) {
    for template in &templates.locations {
        let Some(spawn) = template.generation.spawn_at_start else {
            continue;
        };

        let owner_template = match &template.generation.owner_org_template {
            Some(org_id) => match templates.organization(org_id) {
                Some(org) => Some(org),
                None => {
                    ctx.report.warn(format!(
                        "location '{}' names unknown owner organization '{}'",
                        template.id, org_id
                    ));
                    continue;
                }
            },
            None => None,
        };

        let count = spawn.count.sample(&mut ctx.rng);
        let Some(owner_template) = owner_template else {
            for _ in 0..count {
                if let Some(placed) =
                    spawn_location(ctx, grid, buildings, template, None, OwnerRef::None)
                {
                    population.locations.push(placed);
                }
            }
            continue;
        };

        for created in 0..count {
            let Some(leader) = population.next_owner() else {
                warn_depleted(ctx, &owner_template.id, created, count);
                break;
            };
            let Some(mut placed) =
                spawn_location(ctx, grid, buildings, template, None, OwnerRef::None)
            else {
                continue;
            };
            let owner_credits = template.generation.owner_credits;
            let wallet = starting_credits(ctx, owner_credits, owner_template.credits);
            let org = found_org(ctx, population, owner_template, leader, wallet);
            let org = &mut population.organizations[org];
            placed.owner = OwnerRef::Organization(org.id);
            org.locations.push(placed.id);
            population.locations.push(placed);
        }
    }
}
