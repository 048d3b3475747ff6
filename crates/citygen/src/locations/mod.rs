mod occupancy;
mod placer;
#[cfg(test)]
mod tests;
mod types;

pub use occupancy::BuildingOccupancy;
pub use placer::{place_location, spawn_location};
pub use types::{Location, OwnerRef, Placement};
