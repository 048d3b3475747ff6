// =============================================================================
// Zone growth phases: downtown, government, commercial, industrial, slums,
// residential, then gap-fill. Every phase shares the run's RNG and noise.
// =============================================================================

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::context::GenContext;
use crate::grid::{CityGrid, ZoneType};
use crate::templates::CityTemplates;

use super::grower::grow_zone;

/// Sample points used to derive the downtown jitter from the noise field.
const JITTER_SAMPLE_X: (f32, f32) = (0.5, 0.5);
const JITTER_SAMPLE_Y: (f32, f32) = (101.5, 57.5);

type Coord = (usize, usize);

/// One growth phase: the zone, its drawn target and the cells it may not enter.
struct PhasePlan {
    zone: ZoneType,
    target: usize,
    /// Zones a grown cell may not border. Starts from the zone config's
    /// `avoid_zones`; phases add their fixed adjacency laws.
    avoid: Vec<ZoneType>,
    min_center_distance: f32,
}

/// Draw the target size for `zone`, or warn and return `None` when the zone
/// has no configuration.
fn plan_phase(
    ctx: &mut GenContext,
    templates: &CityTemplates,
    zone: ZoneType,
) -> Option<PhasePlan> {
    let Some(config) = templates.zone(zone) else {
        let message = format!("no config for zone '{zone}'; skipping its growth phase");
        ctx.report.warn(message);
        return None;
    };
    Some(PhasePlan {
        zone,
        target: config.size_range.sample(&mut ctx.rng) as usize,
        avoid: config.avoid_zones.clone(),
        min_center_distance: 0.0,
    })
}

/// Shuffle `cells` and keep at most `limit` of them.
fn pick(ctx: &mut GenContext, mut cells: Vec<Coord>, limit: usize) -> Vec<Coord> {
    cells.shuffle(&mut ctx.rng);
    cells.truncate(limit);
    cells
}

fn noise_jitter(value: f32, jitter: i32) -> i32 {
    let span = (2 * jitter + 1) as f32;
    ((value * span).floor() as i32 - jitter).clamp(-jitter, jitter)
}

/// Coordinates one cell inside the border, or the whole axis when it is too
/// short to have an interior.
fn interior(len: usize) -> (i32, i32) {
    if len >= 3 {
        (1, len as i32 - 2)
    } else {
        (0, len.saturating_sub(1) as i32)
    }
}

/// Downtown seed center: grid center shifted by noise-derived jitter, kept one
/// cell inside the border so all four neighbors exist.
pub fn downtown_center(ctx: &GenContext, grid: &CityGrid) -> Coord {
    let (cx, cy) = grid.center();
    let jitter = ctx.params.zoning.downtown_jitter.max(0);
    let (ax, ay) = JITTER_SAMPLE_X;
    let (bx, by) = JITTER_SAMPLE_Y;
    let jx = noise_jitter(ctx.noise.sample(ax, ay), jitter);
    let jy = noise_jitter(ctx.noise.sample(bx, by), jitter);
    let (min_x, max_x) = interior(grid.width);
    let (min_y, max_y) = interior(grid.height);
    let x = (cx as i32 + jx).clamp(min_x, max_x) as usize;
    let y = (cy as i32 + jy).clamp(min_y, max_y) as usize;
    (x, y)
}

fn grow(ctx: &mut GenContext, grid: &mut CityGrid, plan: &PhasePlan, seeds: &[Coord]) -> usize {
    let avoid = &plan.avoid;
    let min_distance = plan.min_center_distance;
    let can_grow_into = |g: &CityGrid, x: usize, y: usize| {
        g.distance_from_center(x, y) >= min_distance
            && !avoid.iter().any(|&other| g.is_adjacent_to(x, y, other))
    };
    let grown = grow_zone(
        grid,
        plan.zone,
        seeds,
        plan.target,
        &ctx.noise,
        &mut ctx.rng,
        &ctx.params.growth,
        can_grow_into,
    );
    debug!(
        "citygen: {} grew {} of {} cells from {} seeds",
        plan.zone,
        grown,
        plan.target,
        seeds.len()
    );
    grown
}

// -----------------------------------------------------------------------------
// Phases
// -----------------------------------------------------------------------------

/// Phase 1: downtown around the jittered center.
pub fn grow_downtown(
    ctx: &mut GenContext,
    grid: &mut CityGrid,
    templates: &CityTemplates,
    center: Coord,
) {
    let Some(plan) = plan_phase(ctx, templates, ZoneType::Downtown) else {
        return;
    };
    let (x, y) = center;
    let mut seeds = vec![(x, y)];
    let (n4, n4c) = grid.neighbors4(x, y);
    seeds.extend_from_slice(&n4[..n4c]);
    grow(ctx, grid, &plan, &seeds);
}

/// Phase 2: government from downtown's edge.
pub fn grow_government(ctx: &mut GenContext, grid: &mut CityGrid, templates: &CityTemplates) {
    let Some(plan) = plan_phase(ctx, templates, ZoneType::Government) else {
        return;
    };
    let edges = grid.edge_cells(&[ZoneType::Downtown]);
    let limit = ctx.params.zoning.government_seed_count;
    let seeds = pick(ctx, edges, limit);
    grow(ctx, grid, &plan, &seeds);
}

/// Phase 3: commercial from the combined edges of downtown and government.
pub fn grow_commercial(ctx: &mut GenContext, grid: &mut CityGrid, templates: &CityTemplates) {
    let Some(plan) = plan_phase(ctx, templates, ZoneType::Commercial) else {
        return;
    };
    let edges = grid.edge_cells(&[ZoneType::Downtown, ZoneType::Government]);
    let limit = ctx.params.zoning.commercial_seed_count;
    let seeds = pick(ctx, edges, limit);
    grow(ctx, grid, &plan, &seeds);
}

/// Phase 4: industrial from one or two grid corners, kept out of the core.
pub fn grow_industrial(ctx: &mut GenContext, grid: &mut CityGrid, templates: &CityTemplates) {
    let Some(mut plan) = plan_phase(ctx, templates, ZoneType::Industrial) else {
        return;
    };
    plan.min_center_distance = ctx.params.zoning.industrial_core_radius;

    let right = grid.width.saturating_sub(1);
    let bottom = grid.height.saturating_sub(1);
    let mut corners = [(0, 0), (right, 0), (0, bottom), (right, bottom)];
    let corner_count = ctx.rng.gen_range(1..=2usize);
    corners.shuffle(&mut ctx.rng);

    let r = ctx.params.zoning.industrial_corner_radius;
    let mut seeds = Vec::new();
    for &(cx, cy) in &corners[..corner_count] {
        for dy in -r..=r {
            for dx in -r..=r {
                let x = cx as i32 + dx;
                let y = cy as i32 + dy;
                if x < 0 || y < 0 {
                    continue;
                }
                let (x, y) = (x as usize, y as usize);
                if grid.in_bounds(x, y) && !grid.zone_at(x, y).is_labeled() {
                    seeds.push((x, y));
                }
            }
        }
    }
    grow(ctx, grid, &plan, &seeds);
}

/// Phase 5: slums from the outer border, away from industrial, never touching
/// downtown or government.
pub fn grow_slums(ctx: &mut GenContext, grid: &mut CityGrid, templates: &CityTemplates) {
    let Some(mut plan) = plan_phase(ctx, templates, ZoneType::Slums) else {
        return;
    };
    plan.avoid.push(ZoneType::Downtown);
    plan.avoid.push(ZoneType::Government);

    let border = ctx.params.zoning.slum_border_width;
    let (w, h) = (grid.width, grid.height);
    let mut candidates = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let on_border = x < border || y < border || x + border >= w || y + border >= h;
            if on_border
                && !grid.zone_at(x, y).is_labeled()
                && !grid.is_adjacent_to(x, y, ZoneType::Industrial)
            {
                candidates.push((x, y));
            }
        }
    }
    let limit = ctx.params.zoning.slum_seed_limit;
    let seeds = pick(ctx, candidates, limit);
    grow(ctx, grid, &plan, &seeds);
}

/// Phase 6: residential, only ever from commercial's edge, never touching
/// industrial.
pub fn grow_residential(ctx: &mut GenContext, grid: &mut CityGrid, templates: &CityTemplates) {
    let Some(mut plan) = plan_phase(ctx, templates, ZoneType::Residential) else {
        return;
    };
    plan.avoid.push(ZoneType::Industrial);

    let edges = grid.edge_cells(&[ZoneType::Commercial]);
    let limit = ctx.params.zoning.residential_seed_count;
    let seeds = pick(ctx, edges, limit);
    grow(ctx, grid, &plan, &seeds);
}

/// Phase 7: every cell still unlabeled becomes slums. Cells bordering downtown
/// or government become commercial instead, which keeps slums off the core.
/// Returns the number of cells filled.
pub fn fill_gaps(grid: &mut CityGrid) -> usize {
    let mut filled = 0;
    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.zone_at(x, y).is_labeled() {
                continue;
            }
            let touches_core = grid.is_adjacent_to(x, y, ZoneType::Downtown)
                || grid.is_adjacent_to(x, y, ZoneType::Government);
            grid.get_mut(x, y).zone = if touches_core {
                ZoneType::Commercial
            } else {
                ZoneType::Slums
            };
            filled += 1;
        }
    }
    filled
}
