//! # TestGen: fluent harness for generation tests
//!
//! Wraps a seed, a template set and tuning parameters, then runs
//! `generate_city` and hands back a [`TestOutcome`] with query and invariant
//! helpers.

mod assertions;
mod queries;

use crate::generator::{generate_city, GeneratedCity};
use crate::grid::ZoneType;
use crate::params::GenerationParams;
use crate::templates::{CityTemplates, IntRange, LocationTemplate, OrgTemplate, SpawnCount};

/// Builder for one generation run.
#[derive(Debug, Clone)]
pub struct TestGen {
    seed: u64,
    templates: CityTemplates,
    params: GenerationParams,
}

/// A generated city together with the templates that produced it.
pub struct TestOutcome {
    pub city: GeneratedCity,
    pub templates: CityTemplates,
}

impl Default for TestGen {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGen {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Standard templates, seed 42.
    pub fn new() -> Self {
        Self {
            seed: 42,
            templates: CityTemplates::default(),
            params: GenerationParams::default(),
        }
    }

    /// No templates at all: every cell ends up gap-filled and nothing spawns.
    pub fn empty() -> Self {
        Self {
            templates: CityTemplates::empty(),
            ..Self::new()
        }
    }

    // -----------------------------------------------------------------------
    // Builder methods
    // -----------------------------------------------------------------------

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.params.grid_size = size;
        self
    }

    pub fn with_params(mut self, edit: impl FnOnce(&mut GenerationParams)) -> Self {
        edit(&mut self.params);
        self
    }

    pub fn with_templates(mut self, edit: impl FnOnce(&mut CityTemplates)) -> Self {
        edit(&mut self.templates);
        self
    }

    /// Override a configured zone's target size.
    pub fn with_zone_size(mut self, zone: ZoneType, min: u32, max: u32) -> Self {
        if let Some(config) = self.templates.zones.get_mut(&zone) {
            config.size_range = IntRange::new(min, max);
        }
        self
    }

    pub fn without_zone(mut self, zone: ZoneType) -> Self {
        self.templates.zones.remove(&zone);
        self
    }

    /// Every agent template spawns exactly `count` agents.
    pub fn with_agents(mut self, count: u32) -> Self {
        for agent in &mut self.templates.agents {
            agent.generation.spawn_at_start = Some(SpawnCount {
                count: IntRange::exactly(count),
            });
        }
        self
    }

    /// Add a location template, replacing one with the same id.
    pub fn with_location(mut self, template: LocationTemplate) -> Self {
        match self.templates.location_mut(&template.id) {
            Some(existing) => *existing = template,
            None => self.templates.locations.push(template),
        }
        self
    }

    /// Add an organization template, replacing one with the same id.
    pub fn with_org(mut self, template: OrgTemplate) -> Self {
        match self.templates.organization_mut(&template.id) {
            Some(existing) => *existing = template,
            None => self.templates.organizations.push(template),
        }
        self
    }

    /// Keep templates but spawn no organizations and no business locations,
    /// so a test can add exactly the ones it cares about.
    pub fn without_starting_businesses(mut self) -> Self {
        for org in &mut self.templates.organizations {
            org.generation.spawn_at_start = None;
        }
        for location in &mut self.templates.locations {
            location.generation.spawn_at_start = None;
        }
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn templates(&self) -> &CityTemplates {
        &self.templates
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    // -----------------------------------------------------------------------
    // Run
    // -----------------------------------------------------------------------

    pub fn generate(&self) -> TestOutcome {
        TestOutcome {
            city: generate_city(self.seed, &self.templates, &self.params),
            templates: self.templates.clone(),
        }
    }
}
