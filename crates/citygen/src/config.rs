pub const GRID_SIZE: usize = 32;

/// Attempts the fallback placer makes before a location is dropped.
pub const FALLBACK_PLACEMENT_ATTEMPTS: u32 = 100;

/// Organization starting credits when neither the owner template nor the
/// organization template names a credit range.
pub const FALLBACK_ORG_CREDITS_MIN: i64 = 5_000;
pub const FALLBACK_ORG_CREDITS_MAX: i64 = 20_000;

pub const GROWTH_BASE_ACCEPTANCE: f32 = 0.3;
pub const GROWTH_NOISE_ACCEPTANCE: f32 = 0.4;
pub const GROWTH_NOISE_SCALE: f32 = 0.3;

pub const NOISE_OCTAVES: i32 = 2;
pub const NOISE_PERSISTENCE: f32 = 0.5;
pub const NOISE_LACUNARITY: f32 = 2.0;

pub const HEIGHT_NOISE_SCALE: f32 = 2.0;

/// Extra floors granted at the downtown seed center, falling off linearly to
/// zero at `DOWNTOWN_BOOST_RADIUS`.
pub const DOWNTOWN_BOOST_FLOORS: f32 = 30.0;
pub const DOWNTOWN_BOOST_RADIUS: f32 = 8.0;
pub const DOWNTOWN_JITTER: i32 = 3;

pub const GOVERNMENT_SEED_COUNT: usize = 3;
pub const COMMERCIAL_SEED_COUNT: usize = 8;
pub const RESIDENTIAL_SEED_COUNT: usize = 10;
pub const SLUM_SEED_LIMIT: usize = 12;
pub const SLUM_BORDER_WIDTH: usize = 3;

/// Industrial growth never enters this radius around the grid center.
pub const INDUSTRIAL_CORE_RADIUS: f32 = 8.0;
/// Half-width of the square seed neighborhood around an industrial corner (5x5).
pub const INDUSTRIAL_CORNER_RADIUS: i32 = 2;
