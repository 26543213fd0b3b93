// Shared simulation/visual tuning constants used by both web and native frontends.

// Region qualification
pub const MIN_REGION_EXTENT: f32 = 10.0; // width and height must both exceed this

// Proximity
pub const PROXIMITY_THRESHOLD: f32 = 80.0; // pointer-to-edge distance that captures the light
pub const GRID_CELL_SIZE: f32 = 128.0; // spatial grid cell edge
pub const GRID_MIN_REGIONS: usize = 64; // below this a full scan is cheaper than the grid
pub const GRID_MAX_CELLS_PER_REGION: i64 = 64; // larger regions skip the cells and are always candidates

// Light
pub const LIGHT_LERP: f32 = 0.08; // fraction of the remaining gap closed each tick
pub const LIGHT_START: [f32; 2] = [400.0, 300.0];

// Particles
pub const DEFAULT_PARTICLE_COUNT: usize = 150;
pub const MAX_PARTICLE_COUNT: usize = 10_000;
pub const PARTICLE_ATTRACTION: f32 = 0.02; // impulse per tick toward the light
pub const PARTICLE_DAMPING: f32 = 0.98;
pub const PARTICLE_ESCAPE_RADIUS: f32 = 200.0;
pub const RESPAWN_RING_MIN: f32 = 100.0;
pub const RESPAWN_RING_SPAN: f32 = 50.0;
pub const RESPAWN_SPEED_MAX: f32 = 1.0; // per-axis bound of a respawned velocity
pub const SPAWN_SPEED_MIN: f32 = 1.0;
pub const SPAWN_SPEED_SPAN: f32 = 2.0;
pub const LIFE_MIN: u32 = 30;
pub const LIFE_SPAN: u32 = 60;
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_SPAN: f32 = 3.0;

// Commentary
pub const COMMENT_COOLDOWN_MS: u64 = 2500;
pub const COMMENT_LIFE: u32 = 150;
pub const COMMENT_OFFSET_Y: f32 = 60.0; // caption sits this far above the region's top edge
pub const COMMENT_TEXT_PREFIX: usize = 50; // leading characters of text inspected by the rules
pub const MESSAGE_OPACITY: f32 = 0.7;
pub const WELCOME_DELAY_MS: u64 = 500;
pub const WELCOME_LIFE: u32 = 300;
pub const WELCOME_OFFSET_Y: f32 = 100.0;
pub const WELCOME_TEXT: &str = "Hello. I am Alfred. Welcome to Vattles, Vattler!";

// Config defaults
pub const DEFAULT_LIGHT_INTENSITY: f32 = 1.0;
pub const DEFAULT_FOG_DENSITY: f32 = 0.8;

// Rendering: fog
pub const FOG_BASE_RADIUS: f32 = 120.0; // scaled by fog density
pub const FOG_STOPS: [(f32, f32); 4] = [(0.0, 0.4), (0.3, 0.2), (0.6, 0.08), (1.0, 0.0)];

// Rendering: particles
pub const PARTICLE_FADE_DISTANCE: f32 = 100.0; // particles beyond this from the light are invisible
pub const PARTICLE_ALPHA_SCALE: f32 = 0.9;
pub const PARTICLE_BLUR: f32 = 12.0;

// Rendering: light core
pub const CORE_GRADIENT_RADIUS: f32 = 15.0;
pub const CORE_RADIUS: f32 = 10.0;
pub const CORE_STOPS: [(f32, f32); 3] = [(0.0, 1.0), (0.5, 0.8), (1.0, 0.0)];
pub const CORE_BLUR: f32 = 25.0;
