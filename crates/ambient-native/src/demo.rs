//! Built-in layout standing in for a page: a welcome card with a heading and
//! button, a stats card, a sign-up button, an about link and an email field.
//! Positions are fractions of the window so the layout follows resizes.

use ambient_core::{ElementTraits, Rect, Region, RegionId};

struct Placement {
    id: u64,
    // anchor as window fractions, then pixel offset and size
    fx: f32,
    fy: f32,
    dx: f32,
    dy: f32,
    w: f32,
    h: f32,
    tag: &'static str,
    class: &'static str,
    text: &'static str,
}

const LAYOUT: &[Placement] = &[
    Placement {
        id: 1,
        fx: 0.25,
        fy: 0.25,
        dx: 0.0,
        dy: 0.0,
        w: 256.0,
        h: 160.0,
        tag: "div",
        class: "card",
        text: "Welcome Card This is a sample card.",
    },
    Placement {
        id: 2,
        fx: 0.25,
        fy: 0.25,
        dx: 24.0,
        dy: 24.0,
        w: 208.0,
        h: 28.0,
        tag: "h2",
        class: "",
        text: "Welcome Card",
    },
    Placement {
        id: 3,
        fx: 0.25,
        fy: 0.25,
        dx: 24.0,
        dy: 100.0,
        w: 112.0,
        h: 40.0,
        tag: "button",
        class: "",
        text: "Learn More",
    },
    Placement {
        id: 4,
        fx: 0.75,
        fy: 0.5,
        dx: -224.0,
        dy: 0.0,
        w: 224.0,
        h: 128.0,
        tag: "div",
        class: "panel",
        text: "Stats Overview Users: 1.2M Revenue: $500K",
    },
    Placement {
        id: 5,
        fx: 0.5,
        fy: 0.75,
        dx: -80.0,
        dy: -48.0,
        w: 160.0,
        h: 48.0,
        tag: "button",
        class: "",
        text: "Sign Up Now!",
    },
    Placement {
        id: 6,
        fx: 0.5,
        fy: 0.5,
        dx: -48.0,
        dy: -14.0,
        w: 96.0,
        h: 28.0,
        tag: "a",
        class: "",
        text: "About Us",
    },
    Placement {
        id: 7,
        fx: 0.25,
        fy: 2.0 / 3.0,
        dx: 0.0,
        dy: -40.0,
        w: 220.0,
        h: 40.0,
        tag: "input",
        class: "",
        text: "",
    },
];

/// Demo regions laid out for a `width` x `height` window, in document order.
pub fn layout(width: f32, height: f32) -> Vec<Region> {
    LAYOUT
        .iter()
        .map(|p| {
            let rect = Rect::new(p.fx * width + p.dx, p.fy * height + p.dy, p.w, p.h);
            let traits = ElementTraits::new(p.tag).with_class(p.class).with_text(p.text);
            Region::new(RegionId(p.id), rect, traits)
        })
        .collect()
}
