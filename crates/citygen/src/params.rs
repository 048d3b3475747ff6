//! Tunable generation parameters.
//!
//! Defaults reproduce the reference tuning from `config.rs`; every field can be
//! overridden through serde (missing fields fall back to the default).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::*;
use crate::templates::CreditRange;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Side length of the square grid.
    pub grid_size: usize,
    pub growth: GrowthParams,
    pub noise: NoiseParams,
    pub zoning: ZoningParams,
    pub placement: PlacementParams,
}

impl GenerationParams {
    /// `grid_size`, never below one cell.
    pub fn effective_grid_size(&self) -> usize {
        self.grid_size.max(1)
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            growth: GrowthParams::default(),
            noise: NoiseParams::default(),
            zoning: ZoningParams::default(),
            placement: PlacementParams::default(),
        }
    }
}

/// Acceptance of a frontier neighbor is `base_acceptance + noise * noise_acceptance`,
/// with noise sampled at `(x * noise_scale, y * noise_scale)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthParams {
    pub base_acceptance: f32,
    pub noise_acceptance: f32,
    pub noise_scale: f32,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            base_acceptance: GROWTH_BASE_ACCEPTANCE,
            noise_acceptance: GROWTH_NOISE_ACCEPTANCE,
            noise_scale: GROWTH_NOISE_SCALE,
        }
    }
}

impl GrowthParams {
    pub fn acceptance(&self, noise_value: f32) -> f32 {
        self.base_acceptance + noise_value * self.noise_acceptance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    pub octaves: i32,
    pub persistence: f32,
    pub lacunarity: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: NOISE_OCTAVES,
            persistence: NOISE_PERSISTENCE,
            lacunarity: NOISE_LACUNARITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoningParams {
    pub downtown_jitter: i32,
    pub government_seed_count: usize,
    pub commercial_seed_count: usize,
    pub residential_seed_count: usize,
    pub slum_seed_limit: usize,
    pub slum_border_width: usize,
    pub industrial_core_radius: f32,
    pub industrial_corner_radius: i32,
    pub height_noise_scale: f32,
    pub downtown_boost_floors: f32,
    pub downtown_boost_radius: f32,
}

impl Default for ZoningParams {
    fn default() -> Self {
        Self {
            downtown_jitter: DOWNTOWN_JITTER,
            government_seed_count: GOVERNMENT_SEED_COUNT,
            commercial_seed_count: COMMERCIAL_SEED_COUNT,
            residential_seed_count: RESIDENTIAL_SEED_COUNT,
            slum_seed_limit: SLUM_SEED_LIMIT,
            slum_border_width: SLUM_BORDER_WIDTH,
            industrial_core_radius: INDUSTRIAL_CORE_RADIUS,
            industrial_corner_radius: INDUSTRIAL_CORNER_RADIUS,
            height_noise_scale: HEIGHT_NOISE_SCALE,
            downtown_boost_floors: DOWNTOWN_BOOST_FLOORS,
            downtown_boost_radius: DOWNTOWN_BOOST_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    pub fallback_attempts: u32,
    /// Used when neither the owner template nor the organization template
    /// names a credit range.
    pub fallback_org_credits: CreditRange,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            fallback_attempts: FALLBACK_PLACEMENT_ATTEMPTS,
            fallback_org_credits: CreditRange {
                min: FALLBACK_ORG_CREDITS_MIN,
                max: FALLBACK_ORG_CREDITS_MAX,
            },
        }
    }
}
