use crate::dom;
use ambient_core::{AmbientScene, Surface};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize the canvas backing store to the container and hand the new surface
/// to the scene, which reseeds its particles when the size changed.
pub fn apply_surface(
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
    scene: &RefCell<AmbientScene>,
) {
    let rect = dom::sync_canvas_backing_size(canvas, container);
    scene.borrow_mut().set_surface(Surface {
        origin: Vec2::new(rect.x, rect.y),
        size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
    });
}

pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    container: web::Element,
    scene: Rc<RefCell<AmbientScene>>,
) -> Closure<dyn FnMut()> {
    let closure = Closure::wrap(Box::new(move || {
        apply_surface(&canvas, &container, &scene);
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure
}
