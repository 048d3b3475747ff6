use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::city_rng::random_seed;
use crate::generator::generate_city;
use crate::params::GenerationParams;
use crate::templates::CityTemplates;

/// Seed used by the startup generation system.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CityGenConfig {
    pub seed: u64,
}

impl Default for CityGenConfig {
    fn default() -> Self {
        Self {
            seed: random_seed(),
        }
    }
}

/// Marker resource that, when present, causes `generate_city_on_startup` to do
/// nothing. Insert it before adding the plugin to start without a city.
#[derive(Resource)]
pub struct SkipCityGeneration;

pub fn generate_city_on_startup(
    mut commands: Commands,
    config: Res<CityGenConfig>,
    templates: Res<CityTemplates>,
    params: Res<GenerationParams>,
    skip: Option<Res<SkipCityGeneration>>,
) {
    if skip.is_some() {
        return;
    }
    let city = generate_city(config.seed, &templates, &params);
    commands.insert_resource(city);
}

/// Generates the initial city once at startup and exposes it as the
/// `GeneratedCity` resource. Resources already inserted by the app (config,
/// templates, params) are left as they are.
pub struct CityGenPlugin;

impl Plugin for CityGenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityGenConfig>()
            .init_resource::<CityTemplates>()
            .init_resource::<GenerationParams>()
            .add_systems(Startup, generate_city_on_startup);
    }
}
