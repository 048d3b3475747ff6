// =============================================================================
// Two-tier location placement: a free unit in a tag-matching building, else a
// constrained random grid cell, else the instance is dropped.
// =============================================================================

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::buildings::Building;
use crate::context::GenContext;
use crate::grid::{CityGrid, ZoneType};
use crate::report::{DroppedLocation, NotPlacedReason};
use crate::templates::{IntRange, LocationTemplate, SpawnConstraints};

use super::types::{Location, OwnerRef, Placement};

/// Place one instance of `template`.
///
/// `target_zone` restricts both tiers to cells of that zone. Successful
/// placements count toward the template's `max_per_city`; failures are
/// recorded in the report.
pub fn place_location(
    ctx: &mut GenContext,
    grid: &CityGrid,
    buildings: &[Building],
    template: &LocationTemplate,
    target_zone: Option<ZoneType>,
) -> Placement {
    if let Some(cap) = template.spawn_constraints.max_per_city {
        if ctx.placed_count(&template.id) >= cap {
            return drop_instance(ctx, template, NotPlacedReason::CityCapReached);
        }
    }

    if let Some(placement) = place_in_building(ctx, buildings, template, target_zone) {
        ctx.record_placement(&template.id);
        ctx.report.placed_in_building += 1;
        return placement;
    }

    let constraints = &template.spawn_constraints;
    if let Some(placement) = place_at_grid_point(ctx, grid, constraints, target_zone) {
        ctx.record_placement(&template.id);
        ctx.report.placed_at_grid_point += 1;
        return placement;
    }

    drop_instance(ctx, template, NotPlacedReason::NoSlotAvailable)
}

/// Place an instance and materialize it as a [`Location`] with a fresh id,
/// sampled inventory and the given owner. `None` when it could not be placed.
pub fn spawn_location(
    ctx: &mut GenContext,
    grid: &CityGrid,
    buildings: &[Building],
    template: &LocationTemplate,
    target_zone: Option<ZoneType>,
    owner: OwnerRef,
) -> Option<Location> {
    let placement = place_location(ctx, grid, buildings, template, target_zone);
    let (x, y, zone) = match placement {
        Placement::InBuilding { building, .. } => {
            let b = buildings.iter().find(|b| b.id == building)?;
            (b.x, b.y, b.zone)
        }
        Placement::AtGridPoint { x, y, .. } => (x, y, grid.zone_at(x, y)),
        Placement::NotPlaced(_) => return None,
    };

    let inventory = template
        .inventory
        .iter()
        .map(|(item, range)| (item.clone(), range.sample(&mut ctx.rng)))
        .collect();

    let name = if template.name.is_empty() {
        template.id.clone()
    } else {
        template.name.clone()
    };

    Some(Location {
        id: ctx.ids.next_location(),
        template_id: template.id.clone(),
        name,
        tags: template.tags.clone(),
        placement,
        x,
        y,
        zone,
        owner,
        inventory,
        employee_slots: template.employee_slots,
    })
}

fn drop_instance(
    ctx: &mut GenContext,
    template: &LocationTemplate,
    reason: NotPlacedReason,
) -> Placement {
    debug!("citygen: dropped location '{}' ({:?})", template.id, reason);
    ctx.report.dropped_locations.push(DroppedLocation {
        template_id: template.id.clone(),
        reason,
    });
    Placement::NotPlaced(reason)
}

// -----------------------------------------------------------------------------
// Tier 1: buildings
// -----------------------------------------------------------------------------

fn place_in_building(
    ctx: &mut GenContext,
    buildings: &[Building],
    template: &LocationTemplate,
    target_zone: Option<ZoneType>,
) -> Option<Placement> {
    let mut candidates: Vec<&Building> = buildings
        .iter()
        .filter(|b| b.accepts_any(&template.tags))
        .filter(|b| target_zone.map_or(true, |zone| b.zone == zone))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    candidates.shuffle(&mut ctx.rng);

    for building in candidates {
        if let Some((floor, unit)) = ctx.occupancy.first_free(building) {
            ctx.occupancy.claim(building.id, floor, unit);
            return Some(Placement::InBuilding {
                building: building.id,
                floor,
                unit,
            });
        }
    }
    None
}

// -----------------------------------------------------------------------------
// Tier 2: grid fallback
// -----------------------------------------------------------------------------

/// Floor range for a cell: the constraint's range with its top capped by the
/// cell's height.
fn allowed_floors(constraints: &SpawnConstraints, max_height: u32) -> IntRange {
    let whole_cell = IntRange::new(0, max_height);
    let range = constraints.floor_range.unwrap_or(whole_cell);
    IntRange::new(range.min, range.max.min(max_height))
}

fn choose_floor(ctx: &mut GenContext, constraints: &SpawnConstraints, floors: IntRange) -> u32 {
    if constraints.prefer_ground_floor {
        floors.min
    } else if constraints.prefer_high_floor {
        floors.max
    } else {
        floors.sample(&mut ctx.rng)
    }
}

fn place_at_grid_point(
    ctx: &mut GenContext,
    grid: &CityGrid,
    constraints: &SpawnConstraints,
    target_zone: Option<ZoneType>,
) -> Option<Placement> {
    if grid.cells.is_empty() {
        return None;
    }
    for _ in 0..ctx.params.placement.fallback_attempts {
        let x = ctx.rng.gen_range(0..grid.width);
        let y = ctx.rng.gen_range(0..grid.height);
        let cell = grid.get(x, y);

        if !constraints.allowed_zones.is_empty() && !constraints.allowed_zones.contains(&cell.zone)
        {
            continue;
        }
        if target_zone.is_some_and(|zone| cell.zone != zone) {
            continue;
        }
        if let Some(min_distance) = constraints.min_distance_from_center {
            if grid.distance_from_center(x, y) < min_distance {
                continue;
            }
        }

        let floors = allowed_floors(constraints, cell.max_height_floors);
        let floor = choose_floor(ctx, constraints, floors);
        // An empty range (floor_range.min above the cell height) rejects here.
        if floor >= floors.min && floor <= floors.max {
            return Some(Placement::AtGridPoint { x, y, floor });
        }
    }
    None
}
