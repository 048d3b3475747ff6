//! Query helpers for `TestOutcome`.

use crate::grid::ZoneType;
use crate::locations::{Location, OwnerRef};
use crate::population::{Agent, Organization};

use super::TestOutcome;

impl TestOutcome {
    pub fn zone_count(&self, zone: ZoneType) -> usize {
        self.city.grid.count_zone(zone)
    }

    pub fn organizations_tagged(&self, tag: &str) -> Vec<&Organization> {
        self.city
            .organizations
            .iter()
            .filter(|o| o.has_tag(tag))
            .collect()
    }

    pub fn locations_of(&self, template_id: &str) -> Vec<&Location> {
        self.city
            .locations
            .iter()
            .filter(|l| l.template_id == template_id)
            .collect()
    }

    /// Locations owned by an organization, in the organization's order.
    pub fn owned_locations(&self, org: &Organization) -> Vec<&Location> {
        org.locations
            .iter()
            .filter_map(|id| self.city.location(*id))
            .collect()
    }

    pub fn unemployed(&self) -> Vec<&Agent> {
        let agents = &self.city.agents;
        agents.iter().filter(|a| !a.is_employed()).collect()
    }

    pub fn public_locations(&self) -> Vec<&Location> {
        self.city
            .locations
            .iter()
            .filter(|l| l.owner == OwnerRef::None)
            .collect()
    }
}
