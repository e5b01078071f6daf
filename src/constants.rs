/// DOM contract between `index.html` and the front-end.
///
/// Every id, attribute and inline style the page relies on lives here so the
/// markup and the wiring cannot drift apart silently.
// Scene container and canvas
pub const SCENE_ROOT_ID: &str = "scene-root";
pub const SCENE_CANVAS_ID: &str = "scene-canvas";
pub const SCENE_CANVAS_STYLE: &str =
    "position:fixed;top:0;left:0;width:100vw;height:100vh;pointer-events:none;z-index:0;";

// Scene overrides read from the container's data attributes
pub const ATTR_PARTICLE_COUNT: &str = "data-particle-count";
pub const ATTR_MESH_COUNT: &str = "data-mesh-count";
pub const ATTR_SEED: &str = "data-seed";

// Hover/tilt cards
pub const CARD_SELECTOR: &str = "[data-tilt-card]";
pub const CARD_CONTENT_SELECTOR: &str = "[data-tilt-content]";
pub const CARD_GLOW_SELECTOR: &str = "[data-tilt-glow]";
pub const CARD_BORDER_SELECTOR: &str = "[data-tilt-border]";
pub const CARD_INTERACTIVE_SELECTOR: &str = "a, button"; // pointer over these leaves the tilt alone
pub const CARD_PERSPECTIVE_PX: f32 = 1000.0;

// Magnetic buttons and scroll effects
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const ATTR_PARALLAX: &str = "data-parallax";
pub const DEFAULT_PARALLAX_SPEED: f32 = 0.5;

// Entrance animations and floating decorations
pub const ENTRANCE_SELECTOR: &str = "[data-entrance]";
pub const ATTR_ENTRANCE: &str = "data-entrance"; // hero, card, badge, social, title, fade-up
pub const ATTR_STAGGER: &str = "data-stagger"; // children animate; optional seconds between them
pub const FLOAT_SELECTOR: &str = "[data-float]";
pub const CHILD_SELECTOR: &str = ":scope > *";

// Loading covers
pub const LOADING_GATE_ID: &str = "loading-gate";
pub const PAGE_LOADER_ID: &str = "page-loader";
pub const PAGE_LOADER_BAR_ID: &str = "page-loader-bar";

// Renderer
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0]; // transparent, page background shows through
pub const PARTICLE_VERTICES: u32 = 6; // two triangles per billboard
