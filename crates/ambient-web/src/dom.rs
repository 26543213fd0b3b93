use crate::constants::*;
use ambient_core::{
    AmbientConfig, ElementTraits, Rect, Region, RegionId, Visibility, COMMENT_TEXT_PREFIX,
    PROXIMITY_THRESHOLD,
};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// Match the canvas backing store to its container's CSS box. Returns the
/// container rectangle in viewport space.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, container: &web::Element) -> Rect {
    let rect = rect_of(container);
    canvas.set_width((rect.width as u32).max(1));
    canvas.set_height((rect.height as u32).max(1));
    rect
}

pub fn create_child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    style: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document.create_element(tag).map_err(js_err)?;
    el.set_class_name(class);
    el.set_attribute("style", style).map_err(js_err)?;
    parent.append_child(&el).map_err(js_err)?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("created <{tag}> is not an HtmlElement: {e:?}"))
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Config overrides read from the container's `data-*` attributes.
/// Unparseable values are logged and ignored.
pub fn config_from_attributes(container: &web::Element) -> AmbientConfig {
    let mut config = AmbientConfig::default();
    if let Some(v) = parse_attr::<f32>(container, ATTR_LIGHT_INTENSITY) {
        config = config.with_light_intensity(v);
    }
    if let Some(v) = parse_attr::<f32>(container, ATTR_FOG_DENSITY) {
        config = config.with_fog_density(v);
    }
    if let Some(v) = parse_attr::<usize>(container, ATTR_PARTICLE_COUNT) {
        config = config.with_particle_count(v);
    }
    config
}

fn parse_attr<T: std::str::FromStr>(el: &web::Element, name: &str) -> Option<T> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[mount] ignoring {}={:?}", name, raw);
            None
        }
    }
}

/// Stable region ids keyed by element reference identity.
pub struct ElementIds {
    map: js_sys::WeakMap,
    next: u64,
}

impl ElementIds {
    pub fn new() -> Self {
        Self {
            map: js_sys::WeakMap::new(),
            next: 1,
        }
    }

    pub fn id_for(&mut self, el: &web::Element) -> RegionId {
        if let Some(id) = self.map.get(el).as_f64() {
            return RegionId(id as u64);
        }
        let id = self.next;
        self.next += 1;
        self.map.set(el, &JsValue::from_f64(id as f64));
        RegionId(id)
    }
}

/// Walk every element under `<body>` in document order and describe the ones
/// within reach of `pointer` as regions.
///
/// Elements whose box does not come within the proximity threshold of the
/// pointer can never be hovered, so their computed style and text are not
/// read. Qualification itself is left to the resolver.
pub fn scan_regions(
    window: &web::Window,
    document: &web::Document,
    pointer: Vec2,
    ids: &mut ElementIds,
    out: &mut Vec<Region>,
) {
    out.clear();
    let Ok(nodes) = document.query_selector_all(REGION_SELECTOR) else {
        return;
    };
    let reach = Rect::new(
        pointer.x - PROXIMITY_THRESHOLD,
        pointer.y - PROXIMITY_THRESHOLD,
        PROXIMITY_THRESHOLD * 2.0,
        PROXIMITY_THRESHOLD * 2.0,
    );
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        let rect = rect_of(&el);
        if !rect.intersects(&reach) {
            continue;
        }
        let visibility = visibility_of(window, &el);
        let traits = ElementTraits {
            tag: el.tag_name(),
            class_name: el.class_name(),
            text: leading_text(&el),
        };
        out.push(Region {
            id: ids.id_for(&el),
            rect,
            visibility,
            traits,
        });
    }
}

fn visibility_of(window: &web::Window, el: &web::HtmlElement) -> Visibility {
    let rendered = el.offset_parent().is_some();
    let Ok(Some(style)) = window.get_computed_style(el) else {
        return Visibility {
            rendered,
            ..Visibility::default()
        };
    };
    let prop = |name: &str| style.get_property_value(name).unwrap_or_default();
    Visibility {
        rendered,
        pointer_events: prop("pointer-events") != "none",
        opacity: prop("opacity").trim().parse::<f32>().unwrap_or(1.0),
        hidden: prop("visibility") == "hidden",
    }
}

fn leading_text(el: &web::HtmlElement) -> String {
    el.text_content()
        .map(|t| t.trim().chars().take(COMMENT_TEXT_PREFIX).collect())
        .unwrap_or_default()
}
