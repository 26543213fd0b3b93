use crate::dom;
use crate::overlay::CaptionLayer;
use ambient_core::{build_sprites, AmbientScene, GlowSprite, Region, Surface};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<AmbientScene>>,
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub captions: CaptionLayer,
    pub ids: dom::ElementIds,
    pub mounted_at: Instant,
    pub regions: Vec<Region>,
    pub sprites: Vec<GlowSprite>,
}

impl FrameContext {
    /// One tick: rescan regions near the pointer, advance the scene, redraw,
    /// and mirror the captions.
    pub fn frame(&mut self) {
        if !self.canvas.is_connected() {
            return;
        }
        let now = self.mounted_at.elapsed();

        let mut scene = self.scene.borrow_mut();
        // the surface may have scrolled since the last resize
        let rect = self.canvas.get_bounding_client_rect();
        let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        scene.set_surface(Surface {
            origin: Vec2::new(rect.left() as f32, rect.top() as f32),
            size,
        });

        let pointer = scene.pointer().as_vec2();
        dom::scan_regions(&self.window, &self.document, pointer, &mut self.ids, &mut self.regions);
        scene.registry_mut().replace_all(self.regions.drain(..));

        scene.tick(now);

        build_sprites(&scene, &mut self.sprites);
        let intensity = scene.config().light_intensity;
        if let Err(e) = crate::render::draw(
            &self.ctx,
            size.x as f64,
            size.y as f64,
            &self.sprites,
            intensity,
        ) {
            log::error!("render error: {:?}", e);
        }
        self.captions.sync(scene.commentary().messages());
    }
}

/// Handle to a running animation loop.
pub struct LoopHandle {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    /// Cancel the pending frame and release the loop closure.
    pub fn cancel(self, window: &web::Window) {
        if let Some(id) = self.raf_id.take() {
            _ = window.cancel_animation_frame(id);
        }
        // drops the self-referencing closure and, with it, the frame context
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            if let Ok(id) = window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_clone.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
    LoopHandle { tick, raf_id }
}
