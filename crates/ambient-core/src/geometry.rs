//! Rectangle and segment helpers used by the proximity resolver.
//!
//! Everything here works in a single 2D coordinate space; callers translate
//! between viewport and surface space before asking distance questions.

use glam::Vec2;

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Same rectangle expressed relative to `origin`.
    #[inline]
    pub fn translated(&self, origin: Vec2) -> Rect {
        Rect::new(self.x - origin.x, self.y - origin.y, self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Boundary polygon in order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.left(), self.bottom()),
        ]
    }
}

/// Projection of `p` onto the segment `a..b`, with the parameter clamped to
/// the segment. A zero-length segment projects onto `a`.
#[inline]
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = (p - a).dot(ab) / len_sq;
    if t < 0.0 {
        a
    } else if t > 1.0 {
        b
    } else {
        a + ab * t
    }
}

#[inline]
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    p.distance(closest_point_on_segment(p, a, b))
}

/// Closest point on a closed polygon's boundary and its distance from `p`.
///
/// Edges are visited in polygon order; the first edge reaching the minimum
/// wins. An empty polygon yields `p` itself at infinite distance.
pub fn closest_point_on_polygon(p: Vec2, polygon: &[Vec2]) -> (Vec2, f32) {
    let mut best = (p, f32::INFINITY);
    let n = polygon.len();
    for i in 0..n {
        let q = closest_point_on_segment(p, polygon[i], polygon[(i + 1) % n]);
        let d = p.distance(q);
        if d < best.1 {
            best = (q, d);
        }
    }
    best
}

/// Distance from `p` to the nearest edge of `rect`, measured along the
/// boundary (so points inside the rectangle have a positive distance).
#[inline]
pub fn distance_to_rect_edge(p: Vec2, rect: &Rect) -> f32 {
    closest_point_on_polygon(p, &rect.corners()).1
}
