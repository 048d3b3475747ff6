use crate::grid::{CityGrid, ZoneType};
use crate::params::ZoningParams;
use crate::templates::{CityTemplates, IntRange};
use crate::value_noise::ValueNoise;

/// Height range for a zone without configuration.
const FALLBACK_HEIGHT_RANGE: IntRange = IntRange::new(1, 3);

/// Extra floors for a downtown cell at `distance` from the downtown center.
pub fn downtown_boost(distance: f32, params: &ZoningParams) -> u32 {
    if distance >= params.downtown_boost_radius || params.downtown_boost_radius <= 0.0 {
        return 0;
    }
    (params.downtown_boost_floors * (1.0 - distance / params.downtown_boost_radius))
        .round()
        .max(0.0) as u32
}

/// Set `max_height_floors` on every cell: the zone's height range interpolated
/// by fBm noise, plus the downtown center boost.
pub fn assign_heights(
    grid: &mut CityGrid,
    templates: &CityTemplates,
    noise: &ValueNoise,
    downtown_center: (usize, usize),
    params: &ZoningParams,
) {
    let (dcx, dcy) = downtown_center;
    for cell in &mut grid.cells {
        let range = templates
            .zone(cell.zone)
            .map(|config| config.height_range)
            .unwrap_or(FALLBACK_HEIGHT_RANGE);
        let t = noise.fbm(
            cell.x as f32 * params.height_noise_scale,
            cell.y as f32 * params.height_noise_scale,
        );
        let min = range.min as f32;
        let max = range.max.max(range.min) as f32;
        let base = (min + (max - min) * t).round() as u32;

        let boost = if cell.zone == ZoneType::Downtown {
            let dx = cell.x as f32 - dcx as f32;
            let dy = cell.y as f32 - dcy as f32;
            downtown_boost((dx * dx + dy * dy).sqrt(), params)
        } else {
            0
        };

        cell.max_height_floors = base + boost;
    }
}
