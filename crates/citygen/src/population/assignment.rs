use rand::seq::SliceRandom;

use crate::context::GenContext;

use super::Population;

/// Starting positions: employed agents at their employer's first location,
/// everyone else (and employees of location-less organizations) at a random
/// public space. Without public spaces they stay unplaced.
pub fn assign_starting_locations(ctx: &mut GenContext, population: &mut Population) {
    let Population {
        agents,
        organizations,
        public_spaces,
        ..
    } = population;

    for agent in agents.iter_mut() {
        let workplace = agent
            .employer
            .and_then(|org_id| organizations.iter().find(|o| o.id == org_id))
            .and_then(|org| org.locations.first().copied());
        agent.current_location =
            workplace.or_else(|| public_spaces.choose(&mut ctx.rng).copied());
    }
}
