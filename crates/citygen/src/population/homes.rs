use crate::buildings::Building;
use crate::context::GenContext;
use crate::grid::CityGrid;
use crate::locations::{spawn_location, OwnerRef};
use crate::templates::CityTemplates;

use super::Population;

/// One home per agent whose template names a `home_template`, owned by the
/// agent. Agents whose home cannot be placed stay homeless.
pub fn spawn_homes(
    ctx: &mut GenContext,
    grid: &CityGrid,
    buildings: &[Building],
    templates: &CityTemplates,
    population: &mut Population,
) {
    for template in &templates.agents {
        let Some(home_id) = &template.home_template else {
            continue;
        };
        let Some(home) = templates.location(home_id) else {
            ctx.report.warn(format!(
                "agent template '{}' names unknown home template '{}'",
                template.id, home_id
            ));
            continue;
        };

        for agent in population
            .agents
            .iter_mut()
            .filter(|a| a.template_id == template.id)
        {
            let owner = OwnerRef::Agent(agent.id);
            if let Some(placed) = spawn_location(ctx, grid, buildings, home, None, owner) {
                agent.home = Some(placed.id);
                population.locations.push(placed);
            }
        }
    }
}
