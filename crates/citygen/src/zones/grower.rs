use rand::seq::SliceRandom;
use rand::Rng;

use crate::city_rng::CityRng;
use crate::grid::{CityGrid, ZoneType};
use crate::params::GrowthParams;
use crate::value_noise::ValueNoise;

/// Grow `zone` outward from `seeds` until `target` cells carry the label or the
/// frontier runs dry. Returns the number of cells labeled.
///
/// Seeds count toward the target and are labeled in order while they are
/// unlabeled and pass `can_grow_into`. Each step shuffles the frontier, pops a
/// cell, shuffles its orthogonal neighbors and accepts every eligible neighbor
/// with probability `growth.acceptance(noise)`. A rejected neighbor stays
/// unlabeled and can still be reached from another frontier cell later.
#[allow(clippy::too_many_arguments)]
pub fn grow_zone<F>(
    grid: &mut CityGrid,
    zone: ZoneType,
    seeds: &[(usize, usize)],
    target: usize,
    noise: &ValueNoise,
    rng: &mut CityRng,
    growth: &GrowthParams,
    can_grow_into: F,
) -> usize
where
    F: Fn(&CityGrid, usize, usize) -> bool,
{
    let mut grown = 0;
    let mut frontier: Vec<(usize, usize)> = Vec::with_capacity(seeds.len());

    for &(x, y) in seeds {
        if grown >= target {
            break;
        }
        if !grid.in_bounds(x, y) || grid.zone_at(x, y).is_labeled() {
            continue;
        }
        if !can_grow_into(grid, x, y) {
            continue;
        }
        grid.get_mut(x, y).zone = zone;
        grown += 1;
        frontier.push((x, y));
    }

    while grown < target {
        frontier.shuffle(rng);
        let Some((x, y)) = frontier.pop() else {
            break;
        };

        let (n4, n4c) = grid.neighbors4(x, y);
        let mut neighbors = n4;
        neighbors[..n4c].shuffle(rng);

        for &(nx, ny) in &neighbors[..n4c] {
            if grown >= target {
                break;
            }
            if grid.zone_at(nx, ny).is_labeled() || !can_grow_into(grid, nx, ny) {
                continue;
            }
            let bias = noise.sample(
                nx as f32 * growth.noise_scale,
                ny as f32 * growth.noise_scale,
            );
            if rng.gen::<f32>() < growth.acceptance(bias) {
                grid.get_mut(nx, ny).zone = zone;
                grown += 1;
                frontier.push((nx, ny));
            }
        }
    }

    grown
}
