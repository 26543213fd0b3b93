// Host-side end-to-end tests driving the scene tick the way a frontend does.

use ambient_core::*;
use glam::Vec2;
use std::time::Duration;

const FRAME_MS: u64 = 16;

fn mounted_scene(config: AmbientConfig) -> AmbientScene {
    let mut scene = AmbientScene::new(config, 42).expect("valid config");
    scene.set_surface(Surface {
        origin: Vec2::ZERO,
        size: Vec2::new(800.0, 600.0),
    });
    scene
}

fn signup_button() -> Region {
    Region::new(
        RegionId(7),
        Rect::new(100.0, 100.0, 100.0, 50.0),
        ElementTraits::new("button").with_text("About our sign up"),
    )
}

#[test]
fn tick_without_surface_is_a_no_op() {
    let mut scene = AmbientScene::new(AmbientConfig::default(), 1).unwrap();
    scene.registry_mut().replace_all([signup_button()]);
    scene.set_pointer(250.0, 125.0);
    let before = *scene.light();
    let report = scene.tick(Duration::from_secs(5));
    assert_eq!(report, TickReport::default());
    assert_eq!(*scene.light(), before);
    assert!(scene.hovered().is_none());
    assert!(scene.commentary().messages().is_empty());
}

#[test]
fn pointer_beside_button_pulls_light_to_its_edge_and_comments() {
    let mut scene = mounted_scene(AmbientConfig::default());
    scene.registry_mut().replace_all([signup_button()]);
    scene.set_pointer(250.0, 125.0);

    let start = scene.light().position;
    let report = scene.tick(Duration::ZERO);
    let target = Vec2::new(200.0, 125.0);

    assert_eq!(scene.hovered(), Some(RegionId(7)));
    assert_eq!(scene.last_target(), Some(target));
    assert_eq!(report.emitted.len(), 1);
    let light = scene.light().position;
    assert!(light.distance(start + (target - start) * LIGHT_LERP) < 1e-3);

    let msgs = scene.commentary().messages();
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].text, "Ah, a button! Shall we give it a press, sir?");
    assert_eq!(msgs[0].anchor, Vec2::new(150.0, 40.0));

    // light keeps closing in on the edge midpoint (ticks stay before the welcome)
    for i in 1..=60u64 {
        let report = scene.tick(Duration::from_millis(i * 5));
        assert!(report.emitted.is_empty());
    }
    let expected = eased_after(start, target, 61);
    assert!(scene.light().position.distance(expected) < 1e-2);
    assert!(scene.light().position.distance(target) < start.distance(target));
}

#[test]
fn particle_count_survives_ticks_and_resizes() {
    let mut scene = mounted_scene(AmbientConfig::default().with_particle_count(150));
    assert_eq!(scene.particles().len(), 150);
    for i in 0..200u64 {
        scene.set_pointer((i * 3) as f32, (i * 2) as f32);
        scene.tick(Duration::from_millis(i * FRAME_MS));
        if i % 50 == 0 {
            scene.set_surface(Surface {
                origin: Vec2::ZERO,
                size: Vec2::new(400.0 + i as f32, 300.0),
            });
        }
    }
    assert_eq!(scene.particles().len(), 150);
}

#[test]
fn resize_reseeds_particles_over_new_surface() {
    let mut scene = mounted_scene(AmbientConfig::default());
    for i in 0..30u64 {
        scene.tick(Duration::from_millis(i * FRAME_MS));
    }
    let size = Vec2::new(64.0, 48.0);
    scene.set_surface(Surface {
        origin: Vec2::new(5.0, 5.0),
        size,
    });
    for p in scene.particles().particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= size.x);
        assert!(p.position.y >= 0.0 && p.position.y <= size.y);
    }
}

#[test]
fn welcome_shows_then_expires_without_replacement() {
    let mut scene = mounted_scene(AmbientConfig::default());
    let mut t = 0u64;
    while t < WELCOME_DELAY_MS {
        scene.tick(Duration::from_millis(t));
        assert!(scene.commentary().messages().is_empty());
        t += FRAME_MS;
    }

    let report = scene.tick(Duration::from_millis(t));
    assert_eq!(report.emitted.len(), 1);
    let msgs = scene.commentary().messages();
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].text, WELCOME_TEXT);
    assert_eq!(msgs[0].anchor.x, 400.0);
    assert_eq!(msgs[0].life, WELCOME_LIFE - 1);

    for _ in 0..(WELCOME_LIFE - 2) {
        t += FRAME_MS;
        scene.tick(Duration::from_millis(t));
    }
    assert_eq!(scene.commentary().messages().len(), 1);
    t += FRAME_MS;
    scene.tick(Duration::from_millis(t));
    assert!(scene.commentary().messages().is_empty());

    for _ in 0..1000 {
        t += FRAME_MS;
        let report = scene.tick(Duration::from_millis(t));
        assert!(report.emitted.is_empty());
    }
    assert!(scene.commentary().messages().is_empty());
}

#[test]
fn hover_clears_when_pointer_moves_away() {
    let mut scene = mounted_scene(AmbientConfig::default());
    scene.registry_mut().replace_all([signup_button()]);
    scene.set_pointer(250.0, 125.0);
    scene.tick(Duration::ZERO);
    assert_eq!(scene.hovered(), Some(RegionId(7)));

    scene.set_pointer(700.0, 500.0);
    scene.tick(Duration::from_millis(FRAME_MS));
    assert!(scene.hovered().is_none());
    assert_eq!(scene.last_target(), Some(Vec2::new(700.0, 500.0)));
}

#[test]
fn detach_stops_the_tick() {
    let mut scene = mounted_scene(AmbientConfig::default());
    scene.tick(Duration::from_millis(600));
    assert_eq!(scene.commentary().messages().len(), 1);
    scene.detach();
    assert!(scene.surface().is_none());
    assert!(scene.commentary().messages().is_empty());
    let light = *scene.light();
    scene.tick(Duration::from_secs(10));
    assert_eq!(*scene.light(), light);
}

#[test]
fn spatial_registry_can_be_swapped_in() {
    let mut scene = mounted_scene(AmbientConfig::default()).with_registry(RegionRegistry::with_spatial_index());
    scene.registry_mut().replace_all([signup_button()]);
    scene.set_pointer(250.0, 125.0);
    scene.tick(Duration::ZERO);
    assert_eq!(scene.hovered(), Some(RegionId(7)));
}

#[test]
fn sprites_layer_fog_particles_core() {
    let mut scene = mounted_scene(AmbientConfig::default().with_light_intensity(0.5));
    for i in 0..40u64 {
        scene.tick(Duration::from_millis(i * FRAME_MS));
    }
    let mut sprites = Vec::new();
    build_sprites(&scene, &mut sprites);
    assert!(sprites.len() >= 2 && sprites.len() <= scene.particles().len() + 2);

    let fog = sprites.first().unwrap();
    assert_eq!(fog.sprite_kind(), SpriteKind::Fog);
    assert!((fog.radius - FOG_BASE_RADIUS * DEFAULT_FOG_DENSITY).abs() < 1e-4);
    assert!((fog.alpha - 0.2).abs() < 1e-6);

    let core = sprites.last().unwrap();
    assert_eq!(core.sprite_kind(), SpriteKind::Core);
    assert_eq!(core.center, scene.light().position.to_array());

    for s in &sprites[1..sprites.len() - 1] {
        assert_eq!(s.sprite_kind(), SpriteKind::Particle);
        assert!(s.alpha > 0.0 && s.alpha <= 0.5 * PARTICLE_ALPHA_SCALE);
    }
}

#[test]
fn particle_alpha_fades_with_distance_and_age() {
    assert_eq!(particle_alpha(1.0, 0.0, 1.0), PARTICLE_ALPHA_SCALE);
    assert_eq!(particle_alpha(1.0, PARTICLE_FADE_DISTANCE, 1.0), 0.0);
    assert_eq!(particle_alpha(1.0, 500.0, 1.0), 0.0);
    assert!((particle_alpha(0.5, 50.0, 1.0) - 0.5 * 0.5 * PARTICLE_ALPHA_SCALE).abs() < 1e-6);
}

#[test]
fn indexed_registry_drives_the_scene_like_a_plain_one() {
    let layout = || -> Vec<Region> {
        let mut regions: Vec<Region> = (0..100u64)
            .map(|i| {
                let rect = Rect::new((i % 10) as f32 * 75.0, (i / 10) as f32 * 55.0, 40.0, 30.0);
                Region::new(RegionId(i), rect, ElementTraits::new("div"))
            })
            .collect();
        regions.push(Region::new(RegionId(100), Rect::new(-10.0, -10.0, 5.0e5, 5.0e5), ElementTraits::new("main")));
        regions
    };
    let mut plain = mounted_scene(AmbientConfig::default());
    let mut indexed = mounted_scene(AmbientConfig::default()).with_registry(RegionRegistry::with_spatial_index());

    for i in 0..40u64 {
        let (x, y) = (20.0 + i as f32 * 17.0, 10.0 + i as f32 * 13.0);
        for scene in [&mut plain, &mut indexed] {
            scene.registry_mut().replace_all(layout());
            scene.set_pointer(x, y);
            scene.tick(Duration::from_millis(i * FRAME_MS));
        }
        assert_eq!(plain.hovered(), indexed.hovered(), "tick {i}");
        assert_eq!(plain.last_target(), indexed.last_target(), "tick {i}");
    }
}
