pub mod camera;
pub mod config;
pub mod constants;
pub mod ease;
pub mod entrance;
pub mod error;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod loader;
pub mod magnetic;
pub mod meshes;
pub mod particles;
pub mod pointer;
pub mod scene;
pub mod scroll;
pub mod tilt;
pub mod trigger;
pub mod tween;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use config::*;
pub use ease::{Direction, Easing};
pub use entrance::*;
pub use error::CoreError;
pub use input::*;
pub use lifecycle::*;
pub use loader::*;
pub use magnetic::*;
pub use meshes::*;
pub use particles::*;
pub use pointer::*;
pub use scene::*;
pub use scroll::*;
pub use tilt::*;
pub use trigger::*;
pub use tween::*;
