// Shared visual tuning constants for the portfolio background and page
// interactions. Config structs in `config.rs` are built from these defaults.

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const MAX_PARTICLES: usize = 100_000; // upper bound for data-particle-count
pub const PARTICLE_EXTENT: f32 = 20.0; // edge length of the cube particles are scattered in
pub const PARTICLE_BASE_COLOR: [f32; 3] = [0.24, 0.86, 0.52]; // android green
pub const PARTICLE_COLOR_JITTER: [f32; 3] = [0.2, 0.1, 0.1]; // added per channel times a random shade
pub const PARTICLE_DRIFT_PER_FRAME: f32 = 0.0005; // radians around Y added every frame
pub const PARTICLE_SIZE: f32 = 0.05;
pub const PARTICLE_OPACITY: f32 = 0.8;

// Decorative meshes
pub const MESH_COUNT: usize = 6;
pub const MAX_MESHES: usize = 8; // fixed size of the per-mesh uniform array
pub const MESH_SPREAD_XY: f32 = 10.0; // positions land in +-SPREAD/2
pub const MESH_SPREAD_Z: f32 = 5.0;
pub const MESH_SPIN_PERIOD_MIN: f32 = 20.0; // seconds per full turn
pub const MESH_SPIN_PERIOD_JITTER: f32 = 10.0;
pub const MESH_BOB_PERIOD_MIN: f32 = 8.0; // seconds per half cycle (yoyo leg)
pub const MESH_BOB_PERIOD_JITTER: f32 = 4.0;
pub const MESH_BOB_RANGE: f32 = 3.0;
pub const MESH_COLOR: [f32; 3] = [0.239, 0.863, 0.518]; // #3ddc84
pub const MESH_EMISSIVE: [f32; 3] = [0.224, 1.0, 0.078]; // #39ff14
pub const MESH_EMISSIVE_INTENSITY: f32 = 0.2;
pub const MESH_BASE_OPACITY: f32 = 0.3;

// Group parallax on the mesh set
pub const GROUP_PARALLAX_GAIN: f32 = 0.1; // pointer -> group rotation (radians)
pub const GROUP_PARALLAX_TAU_SEC: f32 = 0.33; // ~5% per frame at 60 Hz
pub const GROUP_SPIN_PER_FRAME: f32 = 0.001;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_BASE_Z: f32 = 5.0;
pub const CAMERA_SCROLL_RANGE: f32 = 3.0; // extra depth at full scroll
pub const CAMERA_POINTER_OFFSET: f32 = 0.5; // pointer -> camera x/y
pub const CAMERA_POINTER_TILT: f32 = 0.05; // pointer -> camera rotation
pub const CAMERA_FOLLOW_TAU_SEC: f32 = 0.5;

// Scroll mapping
pub const SCROLL_SCRUB_SEC: f32 = 1.0;
pub const MESH_SCROLL_DEPTH: f32 = 2.0;
pub const MESH_OPACITY_BASE: f32 = 0.2;
pub const MESH_OPACITY_SWING: f32 = 0.2;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const LIGHT_A_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const LIGHT_A_BASE: f32 = 1.0;
pub const LIGHT_B_POSITION: [f32; 3] = [-5.0, -5.0, 5.0];
pub const LIGHT_B_BASE: f32 = 0.8;
pub const LIGHT_SWING: f32 = 0.3;
pub const LIGHT_B_RATE: f32 = 1.5;
pub const LIGHT_RANGE: f32 = 100.0;

// Rendering surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MIN_PIXEL_RATIO: f64 = 0.25;

// Card tilt
pub const TILT_DIVISOR: f32 = 25.0; // px of offset per degree of tilt
pub const TILT_MAX_DEG: f32 = 15.0;
pub const TILT_CONTENT_DIVISOR: f32 = 40.0;
pub const TILT_LIFT_Z: f32 = 20.0;
pub const TILT_LIFT_SCALE: f32 = 1.02;
pub const TILT_MOVE_SEC: f32 = 0.4;
pub const TILT_GLOW_SEC: f32 = 0.1;
pub const TILT_BORDER_SEC: f32 = 0.3;
pub const TILT_RELEASE_SEC: f32 = 0.6;

// Magnetic buttons
pub const MAGNET_STRENGTH: f32 = 0.3;
pub const MAGNET_MOVE_SEC: f32 = 0.3;
pub const MAGNET_RELEASE_SEC: f32 = 0.6;

// Elastic release curve
pub const ELASTIC_AMPLITUDE: f32 = 1.0;
pub const ELASTIC_PERIOD: f32 = 0.3;
pub const BACK_OVERSHOOT: f32 = 1.7;

// Section parallax and card reveal
pub const PARALLAX_PERCENT: f32 = -50.0;
pub const PARALLAX_SCRUB_SEC: f32 = 1.5;
pub const REVEAL_START: f32 = 0.95; // card top at 95% of viewport height
pub const REVEAL_END: f32 = 0.40;
pub const REVEAL_SCRUB_SEC: f32 = 1.2;

// Entrance animations. Start lines are fractions of the viewport height the
// trigger element's top has to rise above.
pub const HERO_STEP_SEC: [f32; 3] = [1.4, 1.0, 0.9]; // headline, subtitle, call to action
pub const HERO_OVERLAPS_SEC: [f32; 3] = [0.0, -0.8, -0.5];
pub const CARD_ENTRANCE_SEC: f32 = 1.2;
pub const CARD_ENTRANCE_START: f32 = 0.75;
pub const BADGE_ENTRANCE_SEC: f32 = 0.8;
pub const BADGE_STAGGER_SEC: f32 = 0.06;
pub const BADGE_ENTRANCE_START: f32 = 0.85;
pub const SOCIAL_ENTRANCE_SEC: f32 = 1.0;
pub const SOCIAL_STAGGER_SEC: f32 = 0.15;
pub const SOCIAL_ENTRANCE_START: f32 = 0.80;
pub const TITLE_ENTRANCE_SEC: f32 = 1.5;
pub const TITLE_ENTRANCE_START: f32 = 0.80;
pub const FADE_UP_SEC: f32 = 0.8;
pub const FADE_UP_STAGGER_SEC: f32 = 0.15;
pub const FADE_UP_START: f32 = 0.80;

// Floating decorations
pub const FLOAT_SEC: f32 = 4.0; // one yoyo leg
pub const FLOAT_DELAY_STEP_SEC: f32 = 0.5;
pub const FLOAT_RANGE_X: f32 = 10.0;
pub const FLOAT_RANGE_Y: f32 = 20.0;

// Loading gates
pub const LOAD_DELAY_SEC: f32 = 0.1;
pub const LOAD_FADE_SEC: f32 = 0.5;
pub const PAGE_BAR_SEC: f32 = 2.0;
pub const PAGE_GAP_SEC: f32 = 0.3;
pub const PAGE_SLIDE_SEC: f32 = 0.8;
