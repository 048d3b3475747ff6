//! Built-in template set.
//!
//! `standard_city()` is what `CityTemplates::default()` returns, so the plugin
//! produces a populated city even when no template loader is attached. It also
//! serves as the fixture for most tests.

use std::collections::BTreeMap;

use crate::grid::ZoneType;
use crate::templates::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn stock(items: &[(&str, u32, u32)]) -> BTreeMap<String, IntRange> {
    items
        .iter()
        .map(|&(item, min, max)| (item.to_string(), IntRange::new(min, max)))
        .collect()
}

fn spawn(min: u32, max: u32) -> Option<SpawnCount> {
    Some(SpawnCount {
        count: IntRange::new(min, max),
    })
}

fn credits(min: i64, max: i64) -> Option<CreditRange> {
    Some(CreditRange { min, max })
}

// ---------------------------------------------------------------------------
// Zones
// ---------------------------------------------------------------------------

fn zone(
    height: (u32, u32),
    size: (u32, u32),
    buildings: &[&str],
    per_block: (u32, u32),
) -> ZoneConfig {
    ZoneConfig {
        height_range: IntRange::new(height.0, height.1),
        size_range: IntRange::new(size.0, size.1),
        building_templates: strings(buildings),
        buildings_per_block: IntRange::new(per_block.0, per_block.1),
        center_bias: 0.0,
        edge_bias: 0.0,
        avoid_zones: Vec::new(),
    }
}

fn standard_zones() -> BTreeMap<ZoneType, ZoneConfig> {
    let mut zones = BTreeMap::new();
    zones.insert(
        ZoneType::Downtown,
        zone((8, 20), (40, 60), &["office_tower", "mixed_use"], (1, 2)),
    );
    zones.insert(
        ZoneType::Government,
        zone((3, 8), (20, 30), &["civic_center"], (1, 1)),
    );
    zones.insert(
        ZoneType::Commercial,
        zone((2, 6), (130, 170), &["shopfront", "mixed_use"], (1, 2)),
    );
    zones.insert(
        ZoneType::Industrial,
        ZoneConfig {
            avoid_zones: vec![ZoneType::Downtown, ZoneType::Government],
            ..zone((1, 3), (100, 140), &["warehouse", "plant"], (1, 1))
        },
    );
    zones.insert(
        ZoneType::Slums,
        zone((1, 4), (110, 150), &["tenement"], (1, 2)),
    );
    zones.insert(
        ZoneType::Residential,
        zone((2, 5), (230, 290), &["apartment_block"], (1, 2)),
    );
    zones
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

fn building(
    id: &str,
    name: &str,
    floors: (u32, u32),
    units: (u32, u32),
    tags: &[&str],
) -> BuildingTemplate {
    BuildingTemplate {
        id: id.to_string(),
        name: name.to_string(),
        floors: IntRange::new(floors.0, floors.1),
        units_per_floor: IntRange::new(units.0, units.1),
        allowed_location_tags: strings(tags),
    }
}

fn standard_buildings() -> Vec<BuildingTemplate> {
    vec![
        building(
            "office_tower",
            "Office Tower",
            (10, 30),
            (2, 4),
            &["office", "corporate"],
        ),
        building(
            "mixed_use",
            "Mixed-Use Block",
            (3, 8),
            (2, 4),
            &["shop", "restaurant", "residential"],
        ),
        building(
            "civic_center",
            "Civic Center",
            (2, 5),
            (2, 3),
            &["civic", "clinic"],
        ),
        building(
            "shopfront",
            "Shopfront",
            (1, 3),
            (1, 3),
            &["shop", "restaurant", "bar"],
        ),
        building(
            "warehouse",
            "Warehouse",
            (1, 2),
            (1, 2),
            &["factory", "storage"],
        ),
        building("plant", "Plant", (1, 3), (1, 2), &["factory"]),
        building(
            "tenement",
            "Tenement",
            (2, 5),
            (2, 4),
            &["residential", "bar", "clinic"],
        ),
        building(
            "apartment_block",
            "Apartment Block",
            (3, 6),
            (2, 4),
            &["residential"],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

fn location(id: &str, name: &str, tags: &[&str], employee_slots: u32) -> LocationTemplate {
    LocationTemplate {
        id: id.to_string(),
        name: name.to_string(),
        tags: strings(tags),
        employee_slots,
        inventory: BTreeMap::new(),
        spawn_constraints: SpawnConstraints::default(),
        generation: LocationGeneration::default(),
    }
}

fn standard_locations() -> Vec<LocationTemplate> {
    vec![
        LocationTemplate {
            inventory: stock(&[("raw_materials", 50, 150), ("parts", 0, 40)]),
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![ZoneType::Industrial],
                floor_range: Some(IntRange::new(0, 1)),
                prefer_ground_floor: true,
                min_distance_from_center: Some(8.0),
                ..Default::default()
            },
            ..location("factory", "Factory", &["factory", "industrial"], 20)
        },
        LocationTemplate {
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![ZoneType::Downtown, ZoneType::Commercial],
                prefer_high_floor: true,
                ..Default::default()
            },
            ..location(
                "corporate_office",
                "Corporate Office",
                &["office", "corporate"],
                12,
            )
        },
        LocationTemplate {
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![ZoneType::Government],
                max_per_city: Some(1),
                ..Default::default()
            },
            ..location("city_hall", "City Hall", &["civic"], 15)
        },
        LocationTemplate {
            inventory: stock(&[("food", 20, 60), ("goods", 10, 40)]),
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![
                    ZoneType::Commercial,
                    ZoneType::Downtown,
                    ZoneType::Residential,
                ],
                prefer_ground_floor: true,
                ..Default::default()
            },
            generation: LocationGeneration {
                spawn_at_start: spawn(6, 10),
                owner_org_template: Some("small_business".to_string()),
                owner_credits: credits(1_000, 5_000),
                ..Default::default()
            },
            ..location("shop", "Corner Shop", &["shop", "retail"], 3)
        },
        LocationTemplate {
            inventory: stock(&[("food", 40, 100)]),
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![ZoneType::Commercial, ZoneType::Downtown],
                prefer_ground_floor: true,
                ..Default::default()
            },
            generation: LocationGeneration {
                spawn_at_start: spawn(3, 6),
                owner_org_template: Some("small_business".to_string()),
                ..Default::default()
            },
            ..location("restaurant", "Restaurant", &["restaurant", "food"], 5)
        },
        LocationTemplate {
            inventory: stock(&[("medicine", 10, 30)]),
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![ZoneType::Government, ZoneType::Slums],
                max_per_city: Some(2),
                ..Default::default()
            },
            generation: LocationGeneration {
                spawn_at_start: spawn(1, 3),
                ..Default::default()
            },
            ..location("clinic", "Clinic", &["clinic", "medical"], 6)
        },
        LocationTemplate {
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![
                    ZoneType::Downtown,
                    ZoneType::Commercial,
                    ZoneType::Residential,
                ],
                floor_range: Some(IntRange::exactly(0)),
                ..Default::default()
            },
            generation: LocationGeneration {
                count_per_zone: Some(IntRange::new(1, 2)),
                ..Default::default()
            },
            ..location("park", "Park", &["public", "park"], 0)
        },
        LocationTemplate {
            inventory: stock(&[("drinks", 20, 80)]),
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![ZoneType::Slums, ZoneType::Commercial],
                prefer_ground_floor: true,
                ..Default::default()
            },
            generation: LocationGeneration {
                count_per_zone: Some(IntRange::new(1, 2)),
                ..Default::default()
            },
            ..location("bar", "Bar", &["bar", "public", "food"], 2)
        },
        LocationTemplate {
            spawn_constraints: SpawnConstraints {
                allowed_zones: vec![ZoneType::Residential, ZoneType::Slums],
                ..Default::default()
            },
            ..location("apartment", "Apartment", &["residential", "home"], 0)
        },
    ]
}

// ---------------------------------------------------------------------------
// Organizations and agents
// ---------------------------------------------------------------------------

fn standard_organizations() -> Vec<OrgTemplate> {
    vec![
        OrgTemplate {
            id: "corporation".to_string(),
            name: "Corporation".to_string(),
            tags: strings(&["corporation"]),
            credits: credits(50_000, 200_000),
            owns_locations: strings(&["corporate_office", "factory"]),
            leader_is_employee: true,
            generation: OrgGeneration {
                spawn_at_start: spawn(2, 3),
                owner_credits: None,
            },
        },
        OrgTemplate {
            id: "city_council".to_string(),
            name: "City Council".to_string(),
            tags: strings(&["government"]),
            credits: credits(100_000, 100_000),
            owns_locations: strings(&["city_hall"]),
            leader_is_employee: true,
            generation: OrgGeneration {
                spawn_at_start: spawn(1, 1),
                owner_credits: None,
            },
        },
        OrgTemplate {
            id: "small_business".to_string(),
            name: "Small Business".to_string(),
            tags: strings(&["small_business"]),
            credits: credits(2_000, 8_000),
            owns_locations: Vec::new(),
            leader_is_employee: true,
            generation: OrgGeneration::default(),
        },
    ]
}

fn standard_agents() -> Vec<AgentTemplate> {
    vec![AgentTemplate {
        id: "citizen".to_string(),
        stats: StatRanges::default(),
        needs: NeedRanges::default(),
        credits: CreditRange { min: 50, max: 500 },
        inventory: stock(&[("food", 0, 5)]),
        first_names: strings(&[
            "Ada", "Bram", "Cleo", "Dario", "Esme", "Farid", "Greta", "Hiro", "Ines", "Jonas",
            "Kaya", "Lior", "Mara", "Nico", "Oona", "Pavel",
        ]),
        last_names: strings(&[
            "Adler", "Brandt", "Castillo", "Dahl", "Eriksen", "Fontaine", "Gallo", "Haas",
            "Ivanova", "Janssen", "Kowalski", "Lund",
        ]),
        home_template: Some("apartment".to_string()),
        generation: AgentGeneration {
            spawn_at_start: spawn(120, 160),
        },
    }]
}

/// A mid-sized city: every zone configured, corporations with factories,
/// a city council, small businesses, public spaces and housed citizens.
pub fn standard_city() -> CityTemplates {
    CityTemplates {
        zones: standard_zones(),
        buildings: standard_buildings(),
        locations: standard_locations(),
        organizations: standard_organizations(),
        agents: standard_agents(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_zone_configured() {
        let city = standard_city();
        for zone in ZoneType::ALL {
            assert!(city.zone(zone).is_some(), "{} missing", zone);
        }
    }

    #[test]
    fn test_references_resolve() {
        let city = standard_city();
        for config in city.zones.values() {
            for id in &config.building_templates {
                assert!(city.building(id).is_some(), "unknown building {}", id);
            }
        }
        for org in &city.organizations {
            for id in &org.owns_locations {
                assert!(city.location(id).is_some(), "unknown location {}", id);
            }
        }
        for location in &city.locations {
            if let Some(owner) = &location.generation.owner_org_template {
                assert!(city.organization(owner).is_some(), "unknown org {}", owner);
            }
        }
        for agent in &city.agents {
            if let Some(home) = &agent.home_template {
                assert!(city.location(home).is_some(), "unknown home {}", home);
            }
        }
    }

    #[test]
    fn test_survives_json_round_trip() {
        let city = standard_city();
        let json = serde_json::to_string(&city).expect("serialize preset");
        let parsed = CityTemplates::from_json(&json).expect("parse preset");
        assert_eq!(parsed, city);
    }
}
