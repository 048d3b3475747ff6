use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::context::GenContext;
use crate::grid::{CityGrid, ZoneType};
use crate::ids::BuildingId;
use crate::templates::{BuildingTemplate, CityTemplates};

/// A multi-floor, multi-unit structure occupying exactly one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub template_id: String,
    pub x: usize,
    pub y: usize,
    pub zone: ZoneType,
    pub floors: u32,
    pub units_per_floor: u32,
    pub allowed_location_tags: Vec<String>,
}

impl Building {
    /// Addressable `(floor, unit)` slots.
    pub fn capacity(&self) -> u32 {
        self.floors * self.units_per_floor
    }

    pub fn accepts_any(&self, tags: &[String]) -> bool {
        self.allowed_location_tags
            .iter()
            .any(|allowed| tags.iter().any(|t| t == allowed))
    }
}

fn build_from_template(
    ctx: &mut GenContext,
    template: &BuildingTemplate,
    x: usize,
    y: usize,
    zone: ZoneType,
) -> Building {
    let floors = template.floors.sample(&mut ctx.rng);
    let units_per_floor = template.units_per_floor.sample(&mut ctx.rng);
    Building {
        id: ctx.ids.next_building(),
        template_id: template.id.clone(),
        x,
        y,
        zone,
        floors,
        units_per_floor,
        allowed_location_tags: template.allowed_location_tags.clone(),
    }
}

/// Spawn buildings on every cell from its zone's template pool.
///
/// Cells are visited in row-major order. Per cell: draw a count from the
/// zone's `buildings_per_block`, then per building pick a template uniformly
/// from the pool and draw floors and units per floor from its ranges.
pub fn spawn_buildings(
    ctx: &mut GenContext,
    grid: &CityGrid,
    templates: &CityTemplates,
) -> Vec<Building> {
    let mut buildings = Vec::new();

    for cell in &grid.cells {
        let Some(zone_config) = templates.zone(cell.zone) else {
            continue;
        };
        if zone_config.building_templates.is_empty() {
            continue;
        }

        let count = zone_config.buildings_per_block.sample(&mut ctx.rng);
        for _ in 0..count {
            let Some(template_id) = zone_config.building_templates.choose(&mut ctx.rng) else {
                break;
            };
            match templates.building(template_id) {
                Some(template) => {
                    let building = build_from_template(ctx, template, cell.x, cell.y, cell.zone);
                    buildings.push(building);
                }
                None => ctx.report.warn(format!(
                    "zone '{}' names unknown building template '{}'",
                    cell.zone, template_id
                )),
            }
        }
    }

    buildings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GenerationParams;
    use crate::templates::{IntRange, ZoneConfig};

    fn single_zone_grid(size: usize, zone: ZoneType) -> CityGrid {
        let mut grid = CityGrid::new(size);
        for cell in &mut grid.cells {
            cell.zone = zone;
            cell.max_height_floors = 10;
        }
        grid
    }

    fn tower() -> BuildingTemplate {
        BuildingTemplate {
            id: "tower".into(),
            name: "Tower".into(),
            floors: IntRange::new(5, 9),
            units_per_floor: IntRange::new(2, 4),
            allowed_location_tags: vec!["office".into()],
        }
    }

    fn templates_with(zone_config: ZoneConfig) -> CityTemplates {
        let mut templates = CityTemplates::empty();
        templates.buildings.push(tower());
        templates.zones.insert(ZoneType::Commercial, zone_config);
        templates
    }

    fn zone_config(pool: Vec<String>, per_block: IntRange) -> ZoneConfig {
        ZoneConfig {
            height_range: IntRange::new(1, 10),
            size_range: IntRange::new(10, 20),
            building_templates: pool,
            buildings_per_block: per_block,
            center_bias: 0.0,
            edge_bias: 0.0,
            avoid_zones: Vec::new(),
        }
    }

    #[test]
    fn test_buildings_respect_template_ranges() {
        let templates = templates_with(zone_config(vec!["tower".into()], IntRange::new(1, 3)));
        let params = GenerationParams::default();
        let mut ctx = GenContext::new(1, &params);
        let grid = single_zone_grid(8, ZoneType::Commercial);
        let buildings = spawn_buildings(&mut ctx, &grid, &templates);

        assert!(buildings.len() >= 64 && buildings.len() <= 192);
        for b in &buildings {
            assert!(IntRange::new(5, 9).contains(b.floors));
            assert!(IntRange::new(2, 4).contains(b.units_per_floor));
            assert_eq!(b.zone, ZoneType::Commercial);
            assert_eq!(grid.zone_at(b.x, b.y), ZoneType::Commercial);
        }
    }

    #[test]
    fn test_building_ids_unique() {
        let templates = templates_with(zone_config(vec!["tower".into()], IntRange::new(2, 2)));
        let params = GenerationParams::default();
        let mut ctx = GenContext::new(2, &params);
        let grid = single_zone_grid(4, ZoneType::Commercial);
        let buildings = spawn_buildings(&mut ctx, &grid, &templates);
        let mut ids: Vec<_> = buildings.iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn test_empty_pool_spawns_nothing() {
        let templates = templates_with(zone_config(Vec::new(), IntRange::new(3, 3)));
        let params = GenerationParams::default();
        let mut ctx = GenContext::new(3, &params);
        let grid = single_zone_grid(4, ZoneType::Commercial);
        assert!(spawn_buildings(&mut ctx, &grid, &templates).is_empty());
    }

    #[test]
    fn test_unconfigured_zone_spawns_nothing() {
        let templates = templates_with(zone_config(vec!["tower".into()], IntRange::new(1, 1)));
        let params = GenerationParams::default();
        let mut ctx = GenContext::new(3, &params);
        let grid = single_zone_grid(4, ZoneType::Slums);
        assert!(spawn_buildings(&mut ctx, &grid, &templates).is_empty());
    }

    #[test]
    fn test_unknown_template_warns_and_skips() {
        let templates = templates_with(zone_config(vec!["ghost".into()], IntRange::new(1, 1)));
        let params = GenerationParams::default();
        let mut ctx = GenContext::new(4, &params);
        let grid = single_zone_grid(2, ZoneType::Commercial);
        let buildings = spawn_buildings(&mut ctx, &grid, &templates);
        assert!(buildings.is_empty());
        assert_eq!(ctx.report.warnings.len(), 4);
        assert!(ctx.report.warnings[0].contains("ghost"));
    }

    #[test]
    fn test_accepts_any_matches_tags() {
        let b = Building {
            id: BuildingId(1),
            template_id: "tower".into(),
            x: 0,
            y: 0,
            zone: ZoneType::Commercial,
            floors: 3,
            units_per_floor: 2,
            allowed_location_tags: vec!["office".into(), "shop".into()],
        };
        assert_eq!(b.capacity(), 6);
        assert!(b.accepts_any(&["shop".to_string()]));
        assert!(!b.accepts_any(&["factory".to_string()]));
        assert!(!b.accepts_any(&[]));
    }
}
