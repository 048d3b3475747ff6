mod grower;
mod heights;
mod phases;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::context::GenContext;
use crate::grid::{CityGrid, ZoneType};
use crate::templates::CityTemplates;

pub use grower::grow_zone;
pub use heights::{assign_heights, downtown_boost};
pub use phases::{
    downtown_center, fill_gaps, grow_commercial, grow_downtown, grow_government, grow_industrial,
    grow_residential, grow_slums,
};

/// Facts about the zoning pass that later stages and callers need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoningSummary {
    pub downtown_center: (usize, usize),
    pub gap_filled: usize,
}

/// Run the seven zoning phases in order, then compute building heights.
///
/// The returned grid has no unlabeled cell.
pub fn generate_zones(
    ctx: &mut GenContext,
    templates: &CityTemplates,
) -> (CityGrid, ZoningSummary) {
    let mut grid = CityGrid::new(ctx.params.effective_grid_size());
    let center = downtown_center(ctx, &grid);

    grow_downtown(ctx, &mut grid, templates, center);
    grow_government(ctx, &mut grid, templates);
    grow_commercial(ctx, &mut grid, templates);
    grow_industrial(ctx, &mut grid, templates);
    grow_slums(ctx, &mut grid, templates);
    grow_residential(ctx, &mut grid, templates);
    let gap_filled = fill_gaps(&mut grid);
    ctx.report.gap_filled_cells = gap_filled as u32;

    assign_heights(&mut grid, templates, &ctx.noise, center, &ctx.params.zoning);

    for zone in ZoneType::ALL {
        debug!("citygen: {} covers {} cells", zone, grid.count_zone(zone));
    }
    debug!("citygen: zoning gap-filled {} cells", gap_filled);

    (
        grid,
        ZoningSummary {
            downtown_center: center,
            gap_filled,
        },
    )
}
