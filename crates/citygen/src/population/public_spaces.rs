use crate::buildings::Building;
use crate::context::GenContext;
use crate::grid::{CityGrid, ZoneType};
use crate::locations::{spawn_location, OwnerRef};
use crate::templates::CityTemplates;

use super::Population;

/// Unowned locations with a `count_per_zone`: a fresh count per allowed zone,
/// each instance placed inside that zone. A template without allowed zones
/// gets a single untargeted batch.
pub fn spawn_public_spaces(
    ctx: &mut GenContext,
    grid: &CityGrid,
    buildings: &[Building],
    templates: &CityTemplates,
    population: &mut Population,
) {
    for template in &templates.locations {
        let Some(per_zone) = template.generation.count_per_zone else {
            continue;
        };
        let allowed = &template.spawn_constraints.allowed_zones;
        let targets: Vec<Option<ZoneType>> = if allowed.is_empty() {
            vec![None]
        } else {
            allowed.iter().map(|&zone| Some(zone)).collect()
        };

        for target in targets {
            let count = per_zone.sample(&mut ctx.rng);
            for _ in 0..count {
                if let Some(placed) =
                    spawn_location(ctx, grid, buildings, template, target, OwnerRef::None)
                {
                    population.public_spaces.push(placed.id);
                    population.locations.push(placed);
                }
            }
        }
    }
}
