use std::collections::BTreeMap;

use crate::city_rng::CityRng;
use crate::ids::IdAllocator;
use crate::locations::BuildingOccupancy;
use crate::params::GenerationParams;
use crate::report::GenerationReport;
use crate::value_noise::ValueNoise;

/// Mutable state of one generation run.
///
/// Owns the RNG, the noise field derived from it, the id counters and the
/// building occupancy map. Nothing here is shared between runs, so separate
/// runs can execute in parallel.
pub struct GenContext<'a> {
    pub params: &'a GenerationParams,
    pub rng: CityRng,
    pub noise: ValueNoise,
    pub ids: IdAllocator,
    pub occupancy: BuildingOccupancy,
    /// Placed instances per location template id, for `max_per_city`.
    pub placed_per_template: BTreeMap<String, u32>,
    pub report: GenerationReport,
}

impl<'a> GenContext<'a> {
    /// Seed the RNG and draw the noise field from it. The noise seed is the
    /// first value taken from the stream.
    pub fn new(seed: u64, params: &'a GenerationParams) -> Self {
        let mut rng = CityRng::new(seed);
        let noise = ValueNoise::from_rng(&mut rng, &params.noise);
        Self {
            params,
            rng,
            noise,
            ids: IdAllocator::default(),
            occupancy: BuildingOccupancy::default(),
            placed_per_template: BTreeMap::new(),
            report: GenerationReport::default(),
        }
    }

    pub fn placed_count(&self, template_id: &str) -> u32 {
        *self.placed_per_template.get(template_id).unwrap_or(&0)
    }

    pub fn record_placement(&mut self, template_id: &str) {
        *self
            .placed_per_template
            .entry(template_id.to_string())
            .or_insert(0) += 1;
    }
}
