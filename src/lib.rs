#![cfg(target_arch = "wasm32")]
use folio_core::{
    LoaderConfig, MagneticConfig, PageLoaderConfig, SceneConfig, SceneLifecycle, TiltConfig,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod overlay;
mod overrides;
mod render;
mod styles;

use constants::SCENE_ROOT_ID;
use host::WebHost;
use overrides::SceneOverrides;
use render::GpuSurface;

/// Everything mounted on the page. Dropping it tears the page effects down.
struct Page {
    _scene: Option<SceneLifecycle<WebHost>>,
    _cards: events::cards::Cards,
    _magnetic: events::magnetic::MagneticButtons,
    _parallax: events::parallax::Parallax,
    _entrances: events::entrance::Entrances,
    _gate: Option<overlay::LoadingGateHandle>,
    _page_loader: Option<overlay::PageLoaderHandle>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear down the scene and every page effect. Safe to call more than once.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(page) = PAGE.with(|p| p.borrow_mut().take()) {
        drop(page);
        log::info!("folio-web unmounted");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Covers and interactions first: they work without a graphics context
    let gate = overlay::mount_loading_gate(&window, &document, LoaderConfig::default());
    let page_loader = overlay::mount_page_loader(&document, PageLoaderConfig::default());
    let cards = events::cards::wire_cards(&document, TiltConfig::default());
    let magnetic = events::magnetic::wire_magnetic(&document, MagneticConfig::default());
    let parallax = events::parallax::wire_parallax(&document);
    let entrances = events::entrance::wire_entrances(&document);
    log::info!(
        "[cards] wired {} cards, {} magnetic buttons, {} parallax sections",
        cards.len(),
        magnetic.len(),
        parallax.len()
    );
    log::info!(
        "[entrance] wired {} groups, {} floating decorations",
        entrances.len(),
        entrances.floater_count()
    );
    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            _scene: None,
            _cards: cards,
            _magnetic: magnetic,
            _parallax: parallax,
            _entrances: entrances,
            _gate: gate,
            _page_loader: page_loader,
        })
    });

    match mount_scene(&window, &document).await {
        Ok(scene) => PAGE.with(|p| {
            if let Some(page) = p.borrow_mut().as_mut() {
                page._scene = Some(scene);
            }
        }),
        // the background is decorative; the page stays usable without it
        Err(e) => log::warn!("[scene] background disabled: {:?}", e),
    }
    Ok(())
}

async fn mount_scene(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<SceneLifecycle<WebHost>> {
    let root = document
        .get_element_by_id(SCENE_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SCENE_ROOT_ID))?;

    let overrides = SceneOverrides::from_attrs(|name| root.get_attribute(name));
    let mut config = SceneConfig::default();
    overrides.apply(&mut config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("scene config: {}", e))?;

    let canvas = dom::create_scene_canvas(document, &root)?;
    dom::sync_canvas_backing_size(&canvas, &dom::viewport(window), config.render.max_pixel_ratio);
    let gpu_started = Instant::now();
    let surface = match GpuSurface::new(canvas.clone()).await {
        Ok(s) => s,
        Err(e) => {
            canvas.remove();
            anyhow::bail!("WebGPU unavailable: {:?}", e);
        }
    };
    log::info!("[gpu] init took {:?}", gpu_started.elapsed());

    // logged so a layout worth keeping can be pinned with data-seed
    let seed = overrides
        .seed
        .unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);
    log::info!("[scene] seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let host = WebHost::new(window.clone(), document.clone());
    let scene = SceneLifecycle::mount(&host, config, &mut rng, Some(surface))
        .map_err(|e| anyhow::anyhow!("mount: {}", e))?;
    log::info!(
        "[scene] running (rendering: {}, {} listeners)",
        scene.is_rendering(),
        scene.listener_count()
    );
    Ok(scene)
}
