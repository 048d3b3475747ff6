use std::collections::BTreeMap;

use super::*;
use crate::buildings::Building;
use crate::context::GenContext;
use crate::grid::{CityGrid, ZoneType};
use crate::ids::BuildingId;
use crate::params::GenerationParams;
use crate::report::NotPlacedReason;
use crate::templates::{IntRange, LocationTemplate, SpawnConstraints};

fn zoned_grid(size: usize, zone: ZoneType, height: u32) -> CityGrid {
    let mut grid = CityGrid::new(size);
    for cell in &mut grid.cells {
        cell.zone = zone;
        cell.max_height_floors = height;
    }
    grid
}

fn building(id: u32, zone: ZoneType, floors: u32, units: u32, tags: &[&str]) -> Building {
    Building {
        id: BuildingId(id),
        template_id: "block".into(),
        x: id as usize % 4,
        y: 0,
        zone,
        floors,
        units_per_floor: units,
        allowed_location_tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn location(id: &str, tags: &[&str], constraints: SpawnConstraints) -> LocationTemplate {
    LocationTemplate {
        id: id.into(),
        name: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        employee_slots: 4,
        inventory: BTreeMap::new(),
        spawn_constraints: constraints,
        generation: Default::default(),
    }
}

// ---------------------------------------------------------------------------
// Occupancy
// ---------------------------------------------------------------------------

#[test]
fn test_occupancy_scans_floors_then_units() {
    let b = building(1, ZoneType::Commercial, 2, 2, &["shop"]);
    let mut occupancy = BuildingOccupancy::default();
    let mut order = Vec::new();
    while let Some((floor, unit)) = occupancy.first_free(&b) {
        assert!(occupancy.claim(b.id, floor, unit));
        order.push((floor, unit));
    }
    assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(occupancy.occupied_count(b.id), 4);
    assert!(!occupancy.claim(b.id, 0, 0));
}

#[test]
fn test_occupancy_is_per_building() {
    let mut occupancy = BuildingOccupancy::default();
    occupancy.claim(BuildingId(1), 0, 0);
    assert!(!occupancy.is_free(BuildingId(1), 0, 0));
    assert!(occupancy.is_free(BuildingId(2), 0, 0));
    assert_eq!(occupancy.total_occupied(), 1);
}

// ---------------------------------------------------------------------------
// Building tier
// ---------------------------------------------------------------------------

#[test]
fn test_building_tier_requires_tag_match() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(1, &params);
    let grid = zoned_grid(8, ZoneType::Commercial, 5);
    let buildings = vec![
        building(1, ZoneType::Commercial, 3, 3, &["office"]),
        building(2, ZoneType::Commercial, 3, 3, &["shop", "restaurant"]),
    ];
    let shop = location("shop", &["shop"], SpawnConstraints::default());
    for _ in 0..5 {
        match place_location(&mut ctx, &grid, &buildings, &shop, None) {
            Placement::InBuilding { building, .. } => assert_eq!(building, BuildingId(2)),
            other => panic!("expected building placement, got {:?}", other),
        }
    }
    assert_eq!(ctx.report.placed_in_building, 5);
}

#[test]
fn test_full_buildings_fall_back_to_grid() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(2, &params);
    let grid = zoned_grid(8, ZoneType::Commercial, 5);
    let buildings = vec![building(1, ZoneType::Commercial, 1, 2, &["shop"])];
    let shop = location("shop", &["shop"], SpawnConstraints::default());

    let placements: Vec<_> = (0..4)
        .map(|_| place_location(&mut ctx, &grid, &buildings, &shop, None))
        .collect();
    assert!(matches!(placements[0], Placement::InBuilding { .. }));
    assert!(matches!(placements[1], Placement::InBuilding { .. }));
    assert!(matches!(placements[2], Placement::AtGridPoint { .. }));
    assert!(matches!(placements[3], Placement::AtGridPoint { .. }));
    assert_eq!(ctx.report.placed_in_building, 2);
    assert_eq!(ctx.report.placed_at_grid_point, 2);
}

#[test]
fn test_target_zone_filters_buildings() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(3, &params);
    let grid = zoned_grid(8, ZoneType::Residential, 5);
    let buildings = vec![
        building(1, ZoneType::Commercial, 4, 4, &["public"]),
        building(2, ZoneType::Residential, 4, 4, &["public"]),
    ];
    let park = location("park", &["public"], SpawnConstraints::default());
    let target = Some(ZoneType::Residential);
    for _ in 0..6 {
        match place_location(&mut ctx, &grid, &buildings, &park, target) {
            Placement::InBuilding { building, .. } => assert_eq!(building, BuildingId(2)),
            other => panic!("unexpected {:?}", other),
        }
    }
}

// ---------------------------------------------------------------------------
// Fallback tier
// ---------------------------------------------------------------------------

#[test]
fn test_fallback_respects_allowed_zones_and_floors() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(4, &params);
    let mut grid = zoned_grid(8, ZoneType::Commercial, 6);
    for x in 0..8 {
        grid.get_mut(x, 0).zone = ZoneType::Industrial;
    }
    let constraints = SpawnConstraints {
        allowed_zones: vec![ZoneType::Industrial],
        floor_range: Some(IntRange::new(1, 4)),
        ..Default::default()
    };
    let depot = location("depot", &["storage"], constraints);
    for _ in 0..20 {
        match place_location(&mut ctx, &grid, &[], &depot, None) {
            Placement::AtGridPoint { x, y, floor } => {
                assert_eq!(grid.zone_at(x, y), ZoneType::Industrial);
                assert!((1..=4).contains(&floor));
            }
            Placement::NotPlaced(reason) => assert_eq!(reason, NotPlacedReason::NoSlotAvailable),
            other => panic!("unexpected {:?}", other),
        }
    }
    assert!(ctx.report.placed_at_grid_point > 0);
}

#[test]
fn test_fallback_floor_preferences() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(5, &params);
    let grid = zoned_grid(4, ZoneType::Downtown, 12);

    let ground = location(
        "lobby",
        &[],
        SpawnConstraints {
            floor_range: Some(IntRange::new(0, 20)),
            prefer_ground_floor: true,
            ..Default::default()
        },
    );
    let high = location(
        "penthouse",
        &[],
        SpawnConstraints {
            floor_range: Some(IntRange::new(0, 20)),
            prefer_high_floor: true,
            ..Default::default()
        },
    );
    assert!(matches!(
        place_location(&mut ctx, &grid, &[], &ground, None),
        Placement::AtGridPoint { floor: 0, .. }
    ));
    // Capped by the cell height, not the constraint range.
    assert!(matches!(
        place_location(&mut ctx, &grid, &[], &high, None),
        Placement::AtGridPoint { floor: 12, .. }
    ));
}

#[test]
fn test_fallback_min_distance_from_center() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(6, &params);
    let grid = zoned_grid(16, ZoneType::Industrial, 3);
    let constraints = SpawnConstraints {
        min_distance_from_center: Some(6.0),
        ..Default::default()
    };
    let dump = location("dump", &[], constraints);
    for _ in 0..30 {
        if let Placement::AtGridPoint { x, y, .. } =
            place_location(&mut ctx, &grid, &[], &dump, None)
        {
            assert!(grid.distance_from_center(x, y) >= 6.0);
        }
    }
}

#[test]
fn test_impossible_constraints_drop_instance() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(7, &params);
    let grid = zoned_grid(8, ZoneType::Slums, 2);
    let constraints = SpawnConstraints {
        allowed_zones: vec![ZoneType::Government],
        ..Default::default()
    };
    let embassy = location("embassy", &["diplomatic"], constraints);
    assert_eq!(
        place_location(&mut ctx, &grid, &[], &embassy, None),
        Placement::NotPlaced(NotPlacedReason::NoSlotAvailable)
    );
    assert_eq!(ctx.report.dropped_count("embassy"), 1);
    assert_eq!(ctx.placed_count("embassy"), 0);
}

#[test]
fn test_floor_range_above_cell_height_is_rejected() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(8, &params);
    let grid = zoned_grid(4, ZoneType::Residential, 2);
    let constraints = SpawnConstraints {
        floor_range: Some(IntRange::new(5, 9)),
        ..Default::default()
    };
    let loft = location("loft", &[], constraints);
    assert!(!place_location(&mut ctx, &grid, &[], &loft, None).is_placed());
}

// ---------------------------------------------------------------------------
// City cap
// ---------------------------------------------------------------------------

#[test]
fn test_max_per_city_caps_both_tiers() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(9, &params);
    let grid = zoned_grid(8, ZoneType::Government, 5);
    let buildings = vec![building(1, ZoneType::Government, 1, 1, &["civic"])];
    let constraints = SpawnConstraints {
        max_per_city: Some(2),
        ..Default::default()
    };
    let hall = location("city_hall", &["civic"], constraints);

    let results: Vec<_> = (0..5)
        .map(|_| place_location(&mut ctx, &grid, &buildings, &hall, None))
        .collect();
    assert!(matches!(results[0], Placement::InBuilding { .. }));
    assert!(matches!(results[1], Placement::AtGridPoint { .. }));
    for r in &results[2..] {
        assert_eq!(*r, Placement::NotPlaced(NotPlacedReason::CityCapReached));
    }
    assert_eq!(ctx.placed_count("city_hall"), 2);
    assert_eq!(ctx.report.dropped_count("city_hall"), 3);
}

// ---------------------------------------------------------------------------
// Materialized locations
// ---------------------------------------------------------------------------

#[test]
fn test_spawn_location_copies_building_position() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(10, &params);
    let grid = zoned_grid(8, ZoneType::Commercial, 5);
    let buildings = vec![building(3, ZoneType::Commercial, 2, 2, &["shop"])];
    let mut shop = location("shop", &["shop"], SpawnConstraints::default());
    shop.inventory.insert("food".into(), IntRange::new(10, 20));

    let loc = spawn_location(&mut ctx, &grid, &buildings, &shop, None, OwnerRef::None)
        .expect("a free unit exists");
    assert_eq!(loc.building(), Some(BuildingId(3)));
    assert_eq!((loc.x, loc.y), (buildings[0].x, buildings[0].y));
    assert_eq!(loc.zone, ZoneType::Commercial);
    assert_eq!(loc.floor(), 0);
    assert_eq!(loc.unit(), Some(0));
    assert_eq!(loc.name, "shop");
    let food = loc.inventory.get("food").copied().unwrap_or(0);
    assert!((10..=20).contains(&food));
}

#[test]
fn test_spawn_location_none_when_dropped() {
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(11, &params);
    let grid = zoned_grid(4, ZoneType::Slums, 2);
    let constraints = SpawnConstraints {
        allowed_zones: vec![ZoneType::Downtown],
        ..Default::default()
    };
    let bank = location("bank", &["finance"], constraints);
    assert!(spawn_location(&mut ctx, &grid, &[], &bank, None, OwnerRef::None).is_none());
}
