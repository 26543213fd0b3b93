// Host-side tests for the proximity resolver and region registry.

use ambient_core::*;
use glam::Vec2;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn button(id: u64, rect: Rect) -> Region {
    Region::new(RegionId(id), rect, ElementTraits::new("button").with_text("Go"))
}

fn registry_with(regions: Vec<Region>) -> RegionRegistry {
    let mut reg = RegionRegistry::new();
    reg.replace_all(regions);
    reg
}

#[test]
fn pointer_right_of_button_snaps_to_right_edge_midpoint() {
    let reg = registry_with(vec![button(1, Rect::new(100.0, 100.0, 100.0, 50.0))]);
    let res = resolve(Vec2::new(250.0, 125.0), Vec2::ZERO, &reg);
    let hovered = res.hovered.expect("button should be hovered");
    assert_eq!(hovered.id, RegionId(1));
    assert!(close(hovered.distance, 50.0));
    assert!(close(res.target.x, 200.0) && close(res.target.y, 125.0));
}

#[test]
fn resolution_is_expressed_relative_to_the_surface() {
    let origin = Vec2::new(10.0, 20.0);
    let reg = registry_with(vec![button(1, Rect::new(110.0, 120.0, 100.0, 50.0))]);
    let res = resolve(Vec2::new(260.0, 145.0), origin, &reg);
    let hovered = res.hovered.expect("hovered");
    assert_eq!(hovered.rect, Rect::new(100.0, 100.0, 100.0, 50.0));
    assert!(close(res.target.x, 200.0) && close(res.target.y, 125.0));

    // nothing nearby: target is the surface-relative pointer
    let far = resolve(Vec2::new(700.0, 500.0), origin, &reg);
    assert!(far.hovered.is_none());
    assert_eq!(far.target, Vec2::new(690.0, 480.0));
}

#[test]
fn tiny_or_invisible_regions_are_never_hovered() {
    let near = Vec2::new(105.0, 105.0);
    let tiny = button(1, Rect::new(100.0, 100.0, 10.0, 40.0));
    let flat = button(2, Rect::new(100.0, 100.0, 40.0, 10.0));
    let transparent = button(3, Rect::new(100.0, 100.0, 40.0, 40.0)).with_visibility(Visibility {
        opacity: 0.0,
        ..Visibility::default()
    });
    let hidden = button(4, Rect::new(100.0, 100.0, 40.0, 40.0)).with_visibility(Visibility {
        hidden: true,
        ..Visibility::default()
    });
    let inert = button(5, Rect::new(100.0, 100.0, 40.0, 40.0)).with_visibility(Visibility {
        pointer_events: false,
        ..Visibility::default()
    });
    let detached = button(6, Rect::new(100.0, 100.0, 40.0, 40.0)).with_visibility(Visibility {
        rendered: false,
        ..Visibility::default()
    });
    let reg = registry_with(vec![tiny, flat, transparent, hidden, inert, detached]);
    for p in [near, Vec2::new(100.0, 100.0), Vec2::new(120.0, 120.0), Vec2::new(160.0, 90.0)] {
        let res = resolve(p, Vec2::ZERO, &reg);
        assert!(res.hovered.is_none(), "nothing should qualify at {p:?}");
        assert_eq!(res.target, p);
    }
}

#[test]
fn pointer_inside_region_is_eligible_when_near_an_edge() {
    let reg = registry_with(vec![button(1, Rect::new(0.0, 0.0, 100.0, 50.0))]);
    let res = resolve(Vec2::new(50.0, 25.0), Vec2::ZERO, &reg);
    let hovered = res.hovered.expect("inside and within threshold");
    assert!(hovered.distance > 0.0);
    assert!(close(hovered.distance, 25.0));
}

#[test]
fn pointer_deep_inside_a_large_region_is_not_captured() {
    let reg = registry_with(vec![button(1, Rect::new(0.0, 0.0, 400.0, 400.0))]);
    let res = resolve(Vec2::new(200.0, 200.0), Vec2::ZERO, &reg);
    assert!(res.hovered.is_none());
    assert_eq!(res.target, Vec2::new(200.0, 200.0));
}

#[test]
fn threshold_is_exclusive() {
    let reg = registry_with(vec![button(1, Rect::new(0.0, 0.0, 100.0, 50.0))]);
    assert!(resolve(Vec2::new(180.0, 25.0), Vec2::ZERO, &reg).hovered.is_none());
    assert!(resolve(Vec2::new(179.5, 25.0), Vec2::ZERO, &reg).hovered.is_some());
}

#[test]
fn closest_region_wins_and_ties_go_to_registry_order() {
    let a = button(1, Rect::new(0.0, 0.0, 50.0, 50.0));
    let b = button(2, Rect::new(100.0, 0.0, 50.0, 50.0));
    let reg = registry_with(vec![a.clone(), b.clone()]);

    // 10 from b, 40 from a
    let res = resolve(Vec2::new(90.0, 25.0), Vec2::ZERO, &reg);
    assert_eq!(res.hovered.map(|h| h.id), Some(RegionId(2)));

    // exactly between them
    let res = resolve(Vec2::new(75.0, 25.0), Vec2::ZERO, &reg);
    assert_eq!(res.hovered.map(|h| h.id), Some(RegionId(1)));

    let swapped = registry_with(vec![b, a]);
    let res = resolve(Vec2::new(75.0, 25.0), Vec2::ZERO, &swapped);
    assert_eq!(res.hovered.map(|h| h.id), Some(RegionId(2)));
}

#[test]
fn registry_upsert_keeps_order_and_bumps_version() {
    let mut reg = RegionRegistry::new();
    let v0 = reg.version();
    reg.upsert(button(1, Rect::new(0.0, 0.0, 20.0, 20.0)));
    reg.upsert(button(2, Rect::new(50.0, 0.0, 20.0, 20.0)));
    reg.upsert(button(1, Rect::new(5.0, 5.0, 20.0, 20.0)));
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.regions()[0].id, RegionId(1));
    assert_eq!(reg.regions()[0].rect.x, 5.0);
    assert!(reg.version() > v0);

    assert!(reg.remove(RegionId(1)).is_some());
    assert!(reg.remove(RegionId(1)).is_none());
    assert_eq!(reg.len(), 1);
    assert!(reg.get(RegionId(2)).is_some());
    reg.clear();
    assert!(reg.is_empty());
}

fn lattice() -> Vec<Region> {
    let mut regions = Vec::new();
    let mut id = 0;
    for row in 0..12 {
        for col in 0..12 {
            let rect = Rect::new(col as f32 * 70.0, row as f32 * 55.0, 40.0 + (col % 3) as f32 * 5.0, 30.0);
            regions.push(Region::new(RegionId(id), rect, ElementTraits::new("div")));
            id += 1;
        }
    }
    // one large backdrop spanning many cells
    regions.push(Region::new(
        RegionId(id),
        Rect::new(-20.0, -20.0, 900.0, 700.0),
        ElementTraits::new("section"),
    ));
    regions
}

#[test]
fn spatial_index_matches_full_scan() {
    let plain = registry_with(lattice());
    let mut indexed = RegionRegistry::with_spatial_index();
    indexed.replace_all(lattice());
    assert!(indexed.len() > GRID_MIN_REGIONS);

    let origin = Vec2::new(3.0, 7.0);
    let mut y = -100.0;
    while y < 800.0 {
        let mut x = -100.0;
        while x < 950.0 {
            let p = Vec2::new(x, y);
            let a = resolve(p, origin, &plain);
            let b = resolve(p, origin, &indexed);
            assert_eq!(a.hovered.map(|h| h.id), b.hovered.map(|h| h.id), "at {p:?}");
            assert_eq!(a.target, b.target, "at {p:?}");
            x += 17.0;
        }
        y += 13.0;
    }
}

#[test]
fn spatial_grid_query_finds_overlapping_cells() {
    let regions = lattice();
    let mut grid = SpatialGrid::new(GRID_CELL_SIZE);
    grid.rebuild(&regions);
    let hits = grid.query(&Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(hits.contains(&0));
    assert!(hits.contains(&(regions.len() - 1)));
    assert!(!hits.contains(&143));
}

#[test]
fn page_sized_region_does_not_blow_up_the_grid() {
    let mut regions = Vec::new();
    for row in 0..7 {
        for col in 0..10 {
            let id = row * 10 + col;
            regions.push(button(id, Rect::new(col as f32 * 60.0, row as f32 * 50.0, 30.0, 20.0)));
        }
    }
    let backdrop_id = regions.len() as u64;
    regions.push(Region::new(
        RegionId(backdrop_id),
        Rect::new(-5.0e6, 1000.0, 1.0e7, 1.0e5),
        ElementTraits::new("section"),
    ));

    let mut indexed = RegionRegistry::with_spatial_index();
    indexed.replace_all(regions.clone());
    assert!(indexed.len() > GRID_MIN_REGIONS);

    let mut grid = SpatialGrid::new(GRID_CELL_SIZE);
    grid.rebuild(&regions);
    assert_eq!(grid.oversized(), &[regions.len() - 1]);
    assert!(grid.query(&Rect::new(0.0, 0.0, 10.0, 10.0)).contains(&(regions.len() - 1)));

    let plain = registry_with(regions);
    for p in [Vec2::new(50.0, 960.0), Vec2::new(10.0, 5.0), Vec2::new(4.0e6, 1050.0)] {
        let a = resolve(p, Vec2::ZERO, &plain);
        let b = resolve(p, Vec2::ZERO, &indexed);
        assert_eq!(a.hovered.map(|h| h.id), b.hovered.map(|h| h.id), "at {p:?}");
        assert_eq!(a.target, b.target, "at {p:?}");
    }
    let hit = resolve(Vec2::new(50.0, 960.0), Vec2::ZERO, &indexed);
    assert_eq!(hit.hovered.map(|h| h.id), Some(RegionId(backdrop_id)));
    assert!(close(hit.target.y, 1000.0));
}

#[test]
fn huge_query_walks_occupied_cells_only() {
    let regions = lattice();
    let mut grid = SpatialGrid::new(GRID_CELL_SIZE);
    grid.rebuild(&regions);
    let mut hits = grid.query(&Rect::new(-1.0e9, -1.0e9, 2.0e9, 2.0e9));
    hits.sort_unstable();
    hits.dedup();
    assert_eq!(hits.len(), regions.len());
}
