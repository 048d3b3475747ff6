//! Procedural city generation.
//!
//! A seeded, single-pass generator that zones a square grid, spawns buildings
//! on it and seeds the initial population (agents, organizations and the
//! locations they own or visit). Output is a [`GeneratedCity`] ready to hand
//! to a tick simulation.

pub mod buildings;
pub mod city_rng;
pub mod config;
pub mod context;
pub mod generator;
pub mod grid;
pub mod ids;
pub mod locations;
pub mod params;
pub mod plugin;
pub mod population;
pub mod presets;
pub mod report;
pub mod templates;
pub mod value_noise;
pub mod zones;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use generator::{generate_city, generate_city_with_optional_seed, GeneratedCity};
pub use grid::{CityGrid, ZoneType};
pub use params::GenerationParams;
pub use plugin::{CityGenConfig, CityGenPlugin, SkipCityGeneration};
pub use templates::CityTemplates;
