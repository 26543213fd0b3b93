pub mod pointer;
pub mod resize;

use ambient_core::AmbientScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window listeners owned by one mounted light; removed on teardown.
pub struct Listeners {
    window: web::Window,
    pointermove: Closure<dyn FnMut(web::PointerEvent)>,
    resize: Closure<dyn FnMut()>,
}

pub fn wire_listeners(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
    scene: &Rc<RefCell<AmbientScene>>,
) -> Listeners {
    Listeners {
        window: window.clone(),
        pointermove: pointer::wire_pointermove(window, scene.clone()),
        resize: resize::wire_resize(window, canvas.clone(), container.clone(), scene.clone()),
    }
}

impl Listeners {
    pub fn remove(self) {
        _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.pointermove.as_ref().unchecked_ref(),
        );
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}
