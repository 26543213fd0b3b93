use ambient_core::{build_sprites, AmbientConfig, AmbientScene, GlowSprite, Surface};
use glam::Vec2;
use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

mod demo;
mod gpu;

use gpu::GpuState;

const WINDOW_TITLE: &str = "Ambient Light (native)";

/// Config from `AMBIENT_PARTICLES`, `AMBIENT_INTENSITY` and `AMBIENT_FOG`.
/// Unparseable values are logged and ignored.
fn config_from_env() -> AmbientConfig {
    fn read<T: std::str::FromStr>(key: &str) -> Option<T> {
        let raw = std::env::var(key).ok()?;
        match raw.trim().parse() {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("ignoring {key}={raw:?}");
                None
            }
        }
    }

    let mut config = AmbientConfig::default();
    if let Some(n) = read::<usize>("AMBIENT_PARTICLES") {
        config = config.with_particle_count(n);
    }
    if let Some(v) = read::<f32>("AMBIENT_INTENSITY") {
        config = config.with_light_intensity(v);
    }
    if let Some(v) = read::<f32>("AMBIENT_FOG") {
        config = config.with_fog_density(v);
    }
    config
}

fn relayout(scene: &mut AmbientScene, size: winit::dpi::PhysicalSize<u32>) {
    let (w, h) = (size.width as f32, size.height as f32);
    scene.set_surface(Surface {
        origin: Vec2::ZERO,
        size: Vec2::new(w, h),
    });
    scene.registry_mut().replace_all(demo::layout(w, h));
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut scene = AmbientScene::new(config_from_env(), rand::random())?;
    log::info!(
        "[mount] native intensity={} fog={} particles={}",
        scene.config().light_intensity,
        scene.config().fog_density,
        scene.config().particle_count
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    // fog + particles + core
    let max_sprites = scene.config().particle_count + 2;
    let mut state = pollster::block_on(GpuState::new(&window, max_sprites))?;
    relayout(&mut scene, window.inner_size());

    let start = Instant::now();
    let mut sprites: Vec<GlowSprite> = Vec::with_capacity(max_sprites);
    let mut captioned = false;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            if size.width > 0 && size.height > 0 {
                relayout(&mut scene, size);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => scene.set_pointer(position.x as f32, position.y as f32),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            scene.detach();
            log::info!("[teardown] window closed");
            elwt.exit();
        }
        Event::AboutToWait => {
            let report = scene.tick(start.elapsed());
            let messages = scene.commentary().messages();
            // the title bar doubles as the caption surface
            for id in &report.emitted {
                if let Some(msg) = messages.iter().find(|m| m.id == *id) {
                    log::info!("[caption] {}", msg.text);
                    state.window.set_title(msg.text);
                    captioned = true;
                }
            }
            if captioned && messages.is_empty() {
                state.window.set_title(WINDOW_TITLE);
                captioned = false;
            }

            build_sprites(&scene, &mut sprites);
            match state.render(&sprites) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
