//! Interactive-region registry fed by the hosting UI layer.
//!
//! The host (DOM scan on the web, a fixed demo layout natively) describes each
//! candidate element as a [`Region`]: an identity, a viewport-space rectangle,
//! the visibility facts the resolver filters on, and the descriptive traits the
//! commentary rules read. Registry order is document order.

use crate::constants::{GRID_CELL_SIZE, GRID_MAX_CELLS_PER_REGION, GRID_MIN_REGIONS, MIN_REGION_EXTENT};
use crate::geometry::Rect;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Stable identity of a region across registry updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

/// Rendering facts that decide whether a region can capture the light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    /// Element takes part in layout (has an offset parent).
    pub rendered: bool,
    /// `pointer-events` is not `none`.
    pub pointer_events: bool,
    pub opacity: f32,
    /// `visibility: hidden`.
    pub hidden: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            rendered: true,
            pointer_events: true,
            opacity: 1.0,
            hidden: false,
        }
    }
}

/// What the commentary rules know about an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementTraits {
    pub tag: String,
    pub class_name: String,
    pub text: String,
}

impl ElementTraits {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub id: RegionId,
    /// Viewport-space bounding rectangle.
    pub rect: Rect,
    pub visibility: Visibility,
    pub traits: ElementTraits,
}

impl Region {
    pub fn new(id: RegionId, rect: Rect, traits: ElementTraits) -> Self {
        Self {
            id,
            rect,
            visibility: Visibility::default(),
            traits,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Large enough, laid out, hit-testable and actually visible.
    pub fn qualifies(&self) -> bool {
        let v = &self.visibility;
        self.rect.width > MIN_REGION_EXTENT
            && self.rect.height > MIN_REGION_EXTENT
            && v.rendered
            && v.pointer_events
            && v.opacity != 0.0
            && !v.hidden
    }
}

/// Ordered set of regions with an optional uniform-grid index.
///
/// The grid is rebuilt on every layout mutation, never per query, so hosts
/// that only change layout occasionally pay for it once.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: Vec<Region>,
    version: u64,
    grid: Option<SpatialGrid>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that maintains a spatial grid for large layouts.
    pub fn with_spatial_index() -> Self {
        Self {
            grid: Some(SpatialGrid::new(GRID_CELL_SIZE)),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Bumped on every layout change.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Replace the whole layout, keeping the given order.
    pub fn replace_all(&mut self, regions: impl IntoIterator<Item = Region>) {
        self.regions.clear();
        self.regions.extend(regions);
        self.layout_changed();
    }

    /// Update a region in place, or append it if the id is new.
    pub fn upsert(&mut self, region: Region) {
        match self.regions.iter_mut().find(|r| r.id == region.id) {
            Some(slot) => *slot = region,
            None => self.regions.push(region),
        }
        self.layout_changed();
    }

    pub fn remove(&mut self, id: RegionId) -> Option<Region> {
        let idx = self.regions.iter().position(|r| r.id == id)?;
        let removed = self.regions.remove(idx);
        self.layout_changed();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.regions.clear();
        self.layout_changed();
    }

    /// Indices (in registry order) of regions whose rectangle may intersect
    /// `query`. Falls back to every index when no grid is kept or the layout
    /// is small.
    pub fn candidates(&self, query: &Rect) -> Vec<usize> {
        match &self.grid {
            Some(grid) if self.regions.len() > GRID_MIN_REGIONS => {
                let mut hits = grid.query(query);
                hits.sort_unstable();
                hits.dedup();
                hits.retain(|&i| self.regions[i].rect.intersects(query));
                hits
            }
            _ => (0..self.regions.len()).collect(),
        }
    }

    fn layout_changed(&mut self) {
        self.version = self.version.wrapping_add(1);
        if let Some(grid) = &mut self.grid {
            grid.rebuild(&self.regions);
        }
    }
}

/// Uniform grid over viewport space mapping cells to region indices.
///
/// A region spanning more than [`GRID_MAX_CELLS_PER_REGION`] cells is kept in
/// a separate list returned by every query, so one page-sized backdrop costs
/// one entry instead of thousands.
#[derive(Debug)]
pub struct SpatialGrid {
    cell: f32,
    cells: FnvHashMap<(i32, i32), SmallVec<[usize; 8]>>,
    oversized: Vec<usize>,
}

#[derive(Clone, Copy, Debug)]
struct CellSpan {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl CellSpan {
    fn cell_count(&self) -> i64 {
        (self.x1 as i64 - self.x0 as i64 + 1) * (self.y1 as i64 - self.y0 as i64 + 1)
    }
}

impl SpatialGrid {
    pub fn new(cell: f32) -> Self {
        Self {
            cell,
            cells: FnvHashMap::default(),
            oversized: Vec::new(),
        }
    }

    pub fn rebuild(&mut self, regions: &[Region]) {
        self.cells.clear();
        self.oversized.clear();
        for (i, region) in regions.iter().enumerate() {
            let Some(span) = self.cell_span(&region.rect) else {
                continue;
            };
            if span.cell_count() > GRID_MAX_CELLS_PER_REGION {
                self.oversized.push(i);
                continue;
            }
            for cy in span.y0..=span.y1 {
                for cx in span.x0..=span.x1 {
                    self.cells.entry((cx, cy)).or_default().push(i);
                }
            }
        }
        log::trace!(
            "[grid] rebuilt: {} regions in {} cells, {} oversized",
            regions.len(),
            self.cells.len(),
            self.oversized.len()
        );
    }

    /// Regions too large to bucket, in registry order.
    pub fn oversized(&self) -> &[usize] {
        &self.oversized
    }

    /// Indices stored in any cell overlapping `query`, plus every oversized
    /// region; may contain duplicates.
    pub fn query(&self, query: &Rect) -> Vec<usize> {
        let mut out = Vec::new();
        let Some(span) = self.cell_span(query) else {
            return out;
        };
        out.extend_from_slice(&self.oversized);
        if span.cell_count() > self.cells.len() as i64 {
            // cheaper to walk the occupied cells than the query's span
            for (&(cx, cy), ids) in &self.cells {
                if (span.x0..=span.x1).contains(&cx) && (span.y0..=span.y1).contains(&cy) {
                    out.extend_from_slice(ids);
                }
            }
            return out;
        }
        for cy in span.y0..=span.y1 {
            for cx in span.x0..=span.x1 {
                if let Some(ids) = self.cells.get(&(cx, cy)) {
                    out.extend_from_slice(ids);
                }
            }
        }
        out
    }

    fn cell_span(&self, rect: &Rect) -> Option<CellSpan> {
        let coords = [rect.left(), rect.top(), rect.right(), rect.bottom()];
        if coords.iter().any(|c| !c.is_finite()) {
            return None;
        }
        // float-to-int casts saturate, so huge coordinates stay in range
        let to_cell = |v: f32| (v / self.cell).floor() as i32;
        Some(CellSpan {
            x0: to_cell(rect.left()),
            y0: to_cell(rect.top()),
            x1: to_cell(rect.right()),
            y1: to_cell(rect.bottom()),
        })
    }
}
