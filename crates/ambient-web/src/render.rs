//! Canvas 2D rendering of the frame's glow sprites.

use ambient_core::{GlowSprite, SpriteKind, CORE_GRADIENT_RADIUS, CORE_STOPS, FOG_STOPS};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
fn white(alpha: f32) -> String {
    format!("rgba(255, 255, 255, {alpha})")
}

/// Clear the surface and draw every sprite in order.
pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    sprites: &[GlowSprite],
    intensity: f32,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    for s in sprites {
        match s.sprite_kind() {
            SpriteKind::Fog => draw_fog(ctx, s, width, height, intensity)?,
            SpriteKind::Particle => draw_particle(ctx, s)?,
            SpriteKind::Core => draw_core(ctx, s, intensity)?,
        }
    }
    Ok(())
}

fn radial(
    ctx: &web::CanvasRenderingContext2d,
    s: &GlowSprite,
    radius: f32,
    stops: &[(f32, f32)],
    intensity: f32,
) -> Result<web::CanvasGradient, JsValue> {
    let [x, y] = s.center;
    let g = ctx.create_radial_gradient(x as f64, y as f64, 0.0, x as f64, y as f64, radius as f64)?;
    for (offset, alpha) in stops {
        g.add_color_stop(*offset, &white(alpha * intensity))?;
    }
    Ok(g)
}

fn draw_fog(
    ctx: &web::CanvasRenderingContext2d,
    s: &GlowSprite,
    width: f64,
    height: f64,
    intensity: f32,
) -> Result<(), JsValue> {
    if s.radius <= 0.0 {
        return Ok(());
    }
    let g = radial(ctx, s, s.radius, &FOG_STOPS, intensity)?;
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.fill_rect(0.0, 0.0, width, height);
    Ok(())
}

fn draw_particle(ctx: &web::CanvasRenderingContext2d, s: &GlowSprite) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_global_alpha(s.alpha as f64);
    ctx.set_fill_style_str("white");
    ctx.set_shadow_blur(s.blur as f64);
    ctx.set_shadow_color("white");
    ctx.begin_path();
    let result = ctx.arc(s.center[0] as f64, s.center[1] as f64, s.radius as f64, 0.0, TAU);
    ctx.fill();
    ctx.restore();
    result
}

fn draw_core(ctx: &web::CanvasRenderingContext2d, s: &GlowSprite, intensity: f32) -> Result<(), JsValue> {
    let g = radial(ctx, s, CORE_GRADIENT_RADIUS, &CORE_STOPS, intensity)?;
    ctx.save();
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.set_shadow_blur(s.blur as f64);
    ctx.set_shadow_color("white");
    ctx.begin_path();
    let result = ctx.arc(s.center[0] as f64, s.center[1] as f64, s.radius as f64, 0.0, TAU);
    ctx.fill();
    ctx.restore();
    result
}
