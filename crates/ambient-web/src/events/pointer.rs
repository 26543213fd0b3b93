use ambient_core::AmbientScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record raw viewport coordinates of every pointer move into the scene.
pub fn wire_pointermove(
    window: &web::Window,
    scene: Rc<RefCell<AmbientScene>>,
) -> Closure<dyn FnMut(web::PointerEvent)> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        scene
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure
}
