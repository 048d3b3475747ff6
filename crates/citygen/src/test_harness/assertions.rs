//! Invariant checks for `TestOutcome`. Each panics with the first violation.

use std::collections::BTreeSet;

use crate::grid::ZoneType;
use crate::locations::Placement;
use crate::templates::IntRange;

use super::TestOutcome;

impl TestOutcome {
    /// Every cell carries a zone label.
    pub fn assert_full_coverage(&self) {
        for cell in &self.city.grid.cells {
            assert!(
                cell.zone.is_labeled(),
                "cell ({}, {}) left unlabeled",
                cell.x,
                cell.y
            );
        }
    }

    /// Residential never touches industrial; slums never touch downtown or
    /// government.
    pub fn assert_adjacency_laws(&self) {
        let grid = &self.city.grid;
        for cell in &grid.cells {
            let (x, y) = (cell.x, cell.y);
            match cell.zone {
                ZoneType::Residential => assert!(
                    !grid.is_adjacent_to(x, y, ZoneType::Industrial),
                    "residential ({x}, {y}) borders industrial"
                ),
                ZoneType::Slums => {
                    assert!(
                        !grid.is_adjacent_to(x, y, ZoneType::Downtown),
                        "slums ({x}, {y}) border downtown"
                    );
                    assert!(
                        !grid.is_adjacent_to(x, y, ZoneType::Government),
                        "slums ({x}, {y}) border government"
                    );
                }
                _ => {}
            }
        }
    }

    /// No two locations share a building slot, and every slot exists.
    pub fn assert_no_double_occupancy(&self) {
        let mut seen = BTreeSet::new();
        for location in &self.city.locations {
            if let Placement::InBuilding {
                building,
                floor,
                unit,
            } = location.placement
            {
                assert!(
                    seen.insert((building, floor, unit)),
                    "{} floor {} unit {} claimed twice",
                    building,
                    floor,
                    unit
                );
                let b = self
                    .city
                    .building(building)
                    .unwrap_or_else(|| panic!("{} references missing {}", location.id, building));
                assert!(floor < b.floors && unit < b.units_per_floor);
            }
        }
    }

    /// Building floors and units lie in their template's ranges.
    pub fn assert_building_template_bounds(&self) {
        for building in &self.city.buildings {
            let template = self
                .templates
                .building(&building.template_id)
                .unwrap_or_else(|| panic!("unknown template {}", building.template_id));
            assert!(
                template.floors.contains(building.floors),
                "{} has {} floors, template allows {:?}",
                building.id,
                building.floors,
                template.floors
            );
            assert!(
                template.units_per_floor.contains(building.units_per_floor),
                "{} has {} units per floor, template allows {:?}",
                building.id,
                building.units_per_floor,
                template.units_per_floor
            );
            assert_eq!(self.city.grid.zone_at(building.x, building.y), building.zone);
        }
    }

    /// Locations inside buildings share at least one tag with the building.
    pub fn assert_building_placements_match_tags(&self) {
        for location in &self.city.locations {
            let Some(id) = location.building() else {
                continue;
            };
            let building = self
                .city
                .building(id)
                .unwrap_or_else(|| panic!("{} references missing {}", location.id, id));
            assert!(
                building.accepts_any(&location.tags),
                "{} ({:?}) placed in {} accepting {:?}",
                location.id,
                location.tags,
                building.id,
                building.allowed_location_tags
            );
        }
    }

    /// Grid-point placements satisfy their template's spawn constraints.
    pub fn assert_fallback_constraints(&self) {
        let grid = &self.city.grid;
        for location in &self.city.locations {
            let Placement::AtGridPoint { x, y, floor } = location.placement else {
                continue;
            };
            let template = self
                .templates
                .location(&location.template_id)
                .unwrap_or_else(|| panic!("unknown template {}", location.template_id));
            let constraints = &template.spawn_constraints;
            let cell = grid.get(x, y);

            if !constraints.allowed_zones.is_empty() {
                assert!(
                    constraints.allowed_zones.contains(&cell.zone),
                    "{} placed in {} outside {:?}",
                    location.id,
                    cell.zone,
                    constraints.allowed_zones
                );
            }
            let any_floor = IntRange::new(0, u32::MAX);
            let IntRange { min, max } = constraints.floor_range.unwrap_or(any_floor);
            assert!(
                floor >= min && floor <= max.min(cell.max_height_floors),
                "{} on floor {} outside [{}, min({}, {})]",
                location.id,
                floor,
                min,
                max,
                cell.max_height_floors
            );
            if let Some(min_distance) = constraints.min_distance_from_center {
                assert!(grid.distance_from_center(x, y) >= min_distance);
            }
        }
    }

    /// `max_per_city` holds for every template that sets it.
    pub fn assert_city_caps(&self) {
        for template in &self.templates.locations {
            if let Some(cap) = template.spawn_constraints.max_per_city {
                let count = self.locations_of(&template.id).len();
                assert!(
                    count <= cap as usize,
                    "{} has {} instances, cap {}",
                    template.id,
                    count,
                    cap
                );
            }
        }
    }

    pub fn assert_all_invariants(&self) {
        self.assert_full_coverage();
        self.assert_adjacency_laws();
        self.assert_no_double_occupancy();
        self.assert_building_template_bounds();
        self.assert_building_placements_match_tags();
        self.assert_fallback_constraints();
        self.assert_city_caps();
    }
}
