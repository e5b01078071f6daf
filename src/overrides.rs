// Scene knobs read from `data-*` attributes on the scene container.
//
// Pure string handling; the DOM lookup is passed in as a closure.

use crate::constants::{ATTR_MESH_COUNT, ATTR_PARTICLE_COUNT, ATTR_SEED};
use folio_core::constants::{MAX_MESHES, MAX_PARTICLES};
use folio_core::SceneConfig;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneOverrides {
    pub particle_count: Option<usize>,
    pub mesh_count: Option<usize>,
    pub seed: Option<u64>,
}

/// Parse one attribute value; unparsable values are logged and ignored.
pub fn parse_attr<T: FromStr>(name: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[scene] ignoring {}=\"{}\": not a number", name, raw);
            None
        }
    }
}

impl SceneOverrides {
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Self {
        let particle_count = parse_attr::<usize>(ATTR_PARTICLE_COUNT, get(ATTR_PARTICLE_COUNT))
            .filter(|&n| {
                let ok = (1..=MAX_PARTICLES).contains(&n);
                if !ok {
                    log::warn!(
                        "[scene] ignoring {}={}: expected 1..={}",
                        ATTR_PARTICLE_COUNT,
                        n,
                        MAX_PARTICLES
                    );
                }
                ok
            });
        let mesh_count = parse_attr::<usize>(ATTR_MESH_COUNT, get(ATTR_MESH_COUNT)).filter(|&n| {
            let ok = (1..=MAX_MESHES).contains(&n);
            if !ok {
                log::warn!(
                    "[scene] ignoring {}={}: expected 1..={}",
                    ATTR_MESH_COUNT,
                    n,
                    MAX_MESHES
                );
            }
            ok
        });
        Self {
            particle_count,
            mesh_count,
            seed: parse_attr(ATTR_SEED, get(ATTR_SEED)),
        }
    }

    pub fn apply(&self, config: &mut SceneConfig) {
        if let Some(n) = self.particle_count {
            config.particles.count = n;
        }
        if let Some(n) = self.mesh_count {
            config.meshes.count = n;
        }
    }
}
