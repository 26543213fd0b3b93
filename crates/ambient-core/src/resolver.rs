//! Pointer → target point and hovered region, once per tick.

use crate::constants::PROXIMITY_THRESHOLD;
use crate::geometry::{closest_point_on_polygon, Rect};
use crate::region::{RegionId, RegionRegistry};
use glam::Vec2;

/// Region the light is currently clinging to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoveredRegion {
    pub id: RegionId,
    /// Position in the registry at resolution time.
    pub index: usize,
    /// Pointer-to-edge distance, always below the proximity threshold.
    pub distance: f32,
    /// Surface-space rectangle.
    pub rect: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// Surface-space point the light eases toward.
    pub target: Vec2,
    pub hovered: Option<HoveredRegion>,
}

/// Resolve the viewport-space `pointer` against `registry`.
///
/// Every qualifying region is measured by the distance from the pointer to
/// its boundary; the strictly closest one wins, so ties go to the region seen
/// first in registry order. Only a winner closer than the proximity threshold
/// captures the target; otherwise the target is the pointer itself.
pub fn resolve(pointer: Vec2, surface_origin: Vec2, registry: &RegionRegistry) -> Resolution {
    let local = pointer - surface_origin;
    let reach = Rect::new(
        pointer.x - PROXIMITY_THRESHOLD,
        pointer.y - PROXIMITY_THRESHOLD,
        PROXIMITY_THRESHOLD * 2.0,
        PROXIMITY_THRESHOLD * 2.0,
    );

    let regions = registry.regions();
    let mut best: Option<(HoveredRegion, Vec2)> = None;
    for i in registry.candidates(&reach) {
        let region = &regions[i];
        if !region.qualifies() {
            continue;
        }
        let rect = region.rect.translated(surface_origin);
        let (edge_point, distance) = closest_point_on_polygon(local, &rect.corners());
        let closer = match &best {
            Some((b, _)) => distance < b.distance,
            None => distance < f32::INFINITY,
        };
        if closer {
            best = Some((
                HoveredRegion {
                    id: region.id,
                    index: i,
                    distance,
                    rect,
                },
                edge_point,
            ));
        }
    }

    match best {
        Some((hovered, edge_point)) if hovered.distance < PROXIMITY_THRESHOLD => Resolution {
            target: edge_point,
            hovered: Some(hovered),
        },
        _ => Resolution {
            target: local,
            hovered: None,
        },
    }
}
