//! Entity identifiers and the per-run allocator that hands them out.
//!
//! Ids are dense, start at 1 and are only meaningful within the
//! `GeneratedCity` that produced them. The allocator lives inside the
//! generation context, so two runs never share counters.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(BuildingId, "bldg");
entity_id!(LocationId, "loc");
entity_id!(OrgId, "org");
entity_id!(AgentId, "agent");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    buildings: u32,
    locations: u32,
    organizations: u32,
    agents: u32,
}

impl IdAllocator {
    pub fn next_building(&mut self) -> BuildingId {
        self.buildings += 1;
        BuildingId(self.buildings)
    }

    pub fn next_location(&mut self) -> LocationId {
        self.locations += 1;
        LocationId(self.locations)
    }

    pub fn next_org(&mut self) -> OrgId {
        self.organizations += 1;
        OrgId(self.organizations)
    }

    pub fn next_agent(&mut self) -> AgentId {
        self.agents += 1;
        AgentId(self.agents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next_building(), BuildingId(1));
        assert_eq!(ids.next_building(), BuildingId(2));
        assert_eq!(ids.next_agent(), AgentId(1));
        assert_eq!(ids.next_location(), LocationId(1));
        assert_eq!(ids.next_org(), OrgId(1));
    }

    #[test]
    fn test_fresh_allocator_restarts() {
        let mut a = IdAllocator::default();
        a.next_agent();
        a.next_agent();
        let mut b = IdAllocator::default();
        assert_eq!(b.next_agent(), AgentId(1));
    }

    #[test]
    fn test_display_prefix() {
        assert_eq!(BuildingId(7).to_string(), "bldg_7");
        assert_eq!(AgentId(3).to_string(), "agent_3");
    }
}
