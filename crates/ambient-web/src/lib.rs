#![cfg(target_arch = "wasm32")]
use ambient_core::{AmbientConfig, AmbientScene, RegionRegistry};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<AmbientLight>> = const { RefCell::new(None) };
}

struct Mounted {
    window: web::Window,
    scene: Rc<RefCell<AmbientScene>>,
    canvas: web::HtmlCanvasElement,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    listeners: events::Listeners,
    loop_handle: frame::LoopHandle,
}

/// An ambient light mounted into a container element.
///
/// Dropping the handle leaves the light running; call `unmount` to tear it
/// down.
#[wasm_bindgen]
pub struct AmbientLight {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl AmbientLight {
    /// Mount into the element with `container_id`, reading config overrides
    /// from its `data-*` attributes.
    pub fn mount(container_id: &str) -> Result<AmbientLight, JsValue> {
        mount_into(container_id, None).map_err(to_js)
    }

    /// Mount with explicit configuration.
    pub fn mount_with(
        container_id: &str,
        light_intensity: f32,
        fog_density: f32,
        particle_count: usize,
    ) -> Result<AmbientLight, JsValue> {
        let config = AmbientConfig::default()
            .with_light_intensity(light_intensity)
            .with_fog_density(fog_density)
            .with_particle_count(particle_count);
        mount_into(container_id, Some(config)).map_err(to_js)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Stop the loop, remove listeners, and take the canvas and captions out
    /// of the document. Safe to call more than once.
    pub fn unmount(&mut self) {
        let Some(m) = self.mounted.take() else {
            return;
        };
        m.loop_handle.cancel(&m.window);
        m.listeners.remove();
        m.frame_ctx.borrow_mut().captions.remove();
        m.canvas.remove();
        m.scene.borrow_mut().detach();
        log::info!("[teardown] ambient light unmounted");
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn mount_into(container_id: &str, config: Option<AmbientConfig>) -> anyhow::Result<AmbientLight> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{container_id}"))?;

    let config = config.unwrap_or_else(|| dom::config_from_attributes(&container));
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    // indexed once more than GRID_MIN_REGIONS elements are in reach
    let scene = AmbientScene::new(config, seed)?.with_registry(RegionRegistry::with_spatial_index());
    log::info!(
        "[mount] #{} intensity={} fog={} particles={}",
        container_id,
        scene.config().light_intensity,
        scene.config().fog_density,
        scene.config().particle_count
    );
    let scene = Rc::new(RefCell::new(scene));

    let canvas = dom::create_child(&document, &container, "canvas", constants::CANVAS_CLASS, constants::CANVAS_STYLE)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let captions = overlay::CaptionLayer::new(&document, &container)?;

    events::resize::apply_surface(&canvas, &container, &scene);
    let listeners = events::wire_listeners(&window, &canvas, &container, &scene);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        ctx,
        captions,
        ids: dom::ElementIds::new(),
        mounted_at: Instant::now(),
        regions: Vec::new(),
        sprites: Vec::new(),
    }));
    let loop_handle = frame::start_loop(&window, frame_ctx.clone());

    Ok(AmbientLight {
        mounted: Some(Mounted {
            window,
            scene,
            canvas,
            frame_ctx,
            listeners,
            loop_handle,
        }),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    let has_root = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::AUTO_MOUNT_ID))
        .is_some();
    if has_root {
        match mount_into(constants::AUTO_MOUNT_ID, None) {
            Ok(light) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(light)),
            Err(e) => log::error!("init error: {:?}", e),
        }
    }
    Ok(())
}

/// Tear down the light mounted automatically on `#ambient-root`, if any.
#[wasm_bindgen]
pub fn unmount_auto() {
    AUTO_MOUNTED.with(|slot| {
        if let Some(mut light) = slot.borrow_mut().take() {
            light.unmount();
        }
    });
}
