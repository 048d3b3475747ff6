use rand::seq::SliceRandom;

use crate::context::GenContext;
use crate::templates::{AgentTemplate, CityTemplates};

use super::types::{Agent, AgentStats, AgentStatus, Needs};

fn agent_name(ctx: &mut GenContext, template: &AgentTemplate, ordinal: u32) -> String {
    let first = template.first_names.choose(&mut ctx.rng);
    let last = template.last_names.choose(&mut ctx.rng);
    match (first, last) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        (Some(name), None) | (None, Some(name)) => name.clone(),
        (None, None) => format!("Citizen {}", ordinal),
    }
}

/// Sample one unemployed, homeless, unplaced agent from `template`.
pub fn spawn_agent(ctx: &mut GenContext, template: &AgentTemplate) -> Agent {
    let id = ctx.ids.next_agent();
    let stats = AgentStats {
        strength: template.stats.strength.sample(&mut ctx.rng),
        agility: template.stats.agility.sample(&mut ctx.rng),
        endurance: template.stats.endurance.sample(&mut ctx.rng),
        intelligence: template.stats.intelligence.sample(&mut ctx.rng),
        charisma: template.stats.charisma.sample(&mut ctx.rng),
        perception: template.stats.perception.sample(&mut ctx.rng),
    };
    let needs = Needs {
        hunger: template.needs.hunger.sample(&mut ctx.rng),
        energy: template.needs.energy.sample(&mut ctx.rng),
        social: template.needs.social.sample(&mut ctx.rng),
    };
    let inventory = template
        .inventory
        .iter()
        .map(|(item, range)| (item.clone(), range.sample(&mut ctx.rng)))
        .collect();
    let wallet = template.credits.sample(&mut ctx.rng);
    let name = agent_name(ctx, template, id.0);

    Agent {
        id,
        template_id: template.id.clone(),
        name,
        stats,
        needs,
        inventory,
        wallet,
        status: AgentStatus::Unemployed,
        employer: None,
        home: None,
        current_location: None,
    }
}

/// Agents first: every agent template with a spawn count, in declaration order.
pub fn spawn_agents(ctx: &mut GenContext, templates: &CityTemplates) -> Vec<Agent> {
    let mut agents = Vec::new();
    for template in &templates.agents {
        let Some(spawn) = template.generation.spawn_at_start else {
            continue;
        };
        let count = spawn.count.sample(&mut ctx.rng);
        for _ in 0..count {
            agents.push(spawn_agent(ctx, template));
        }
    }
    agents
}
