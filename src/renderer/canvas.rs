//! Canvas 2D draw pass
//!
//! Draws a `Scene` onto the game canvas. Sprites are used once their images
//! have loaded; until then (or forever, if they fail) everything falls back
//! to vector shapes.

use std::f64::consts::{FRAC_PI_2, TAU};

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::scene::{BurstView, PopupView, ProjectileView, Scene, TargetView, TurretView};
use crate::consts::*;
use crate::platform::InitError;

/// Sprite image URLs, relative to the page
pub const TURRET_SPRITE: &str = "assets/shooter.png";
pub const PROJECTILE_SPRITE: &str = "assets/bullet.png";
pub const BURST_SPRITE: &str = "assets/explosion.png";

const TURRET_COLOR: &str = "#0000FF";
const PROJECTILE_COLOR: &str = "#FF0000";
const BURST_COLOR: &str = "#FF8C00";

/// An image that may or may not have finished loading
pub struct Sprite {
    image: Option<HtmlImageElement>,
}

impl Sprite {
    pub fn load(url: &str) -> Self {
        let image = HtmlImageElement::new().ok();
        match &image {
            Some(img) => img.set_src(url),
            None => log::warn!("Could not create image element for {}", url),
        }
        Self { image }
    }

    /// A sprite that is never drawn
    pub fn disabled() -> Self {
        Self { image: None }
    }

    /// Loaded and decodable. A failed load is `complete` with zero width.
    pub fn ready(&self) -> Option<&HtmlImageElement> {
        self.image
            .as_ref()
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

/// Canvas 2D renderer
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    turret: Sprite,
    projectile: Sprite,
    burst: Sprite,
}

impl CanvasRenderer {
    /// Size the canvas to the arena and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, sprites: bool) -> Result<Self, InitError> {
        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(InitError::NoContext)?;

        let load = |url: &str| {
            if sprites {
                Sprite::load(url)
            } else {
                Sprite::disabled()
            }
        };

        Ok(Self {
            ctx,
            turret: load(TURRET_SPRITE),
            projectile: load(PROJECTILE_SPRITE),
            burst: load(BURST_SPRITE),
        })
    }

    /// Draw a full frame
    pub fn draw(&self, scene: &Scene) {
        self.ctx
            .clear_rect(0.0, 0.0, ARENA_WIDTH as f64, ARENA_HEIGHT as f64);

        self.draw_turret(&scene.turret);
        for target in &scene.targets {
            self.draw_target(target);
        }
        for projectile in &scene.projectiles {
            self.draw_projectile(projectile);
        }
        for burst in &scene.bursts {
            self.draw_burst(burst);
        }
        for popup in &scene.popups {
            self.draw_popup(popup);
        }
    }

    fn draw_turret(&self, turret: &TurretView) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(turret.pos.x as f64, turret.pos.y as f64).ok();
        // Sprite art points up; aim -π/2 is up
        ctx.rotate(turret.aim as f64 + FRAC_PI_2).ok();

        if let Some(img) = self.turret.ready() {
            let r = TURRET_RADIUS as f64;
            ctx.draw_image_with_html_image_element_and_dw_and_dh(img, -r, -r, r * 2.0, r * 2.0)
                .ok();
        } else {
            ctx.begin_path();
            ctx.arc(0.0, 0.0, TURRET_RADIUS as f64, 0.0, TAU).ok();
            ctx.set_fill_style_str(TURRET_COLOR);
            ctx.fill();

            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            ctx.line_to(0.0, -(TURRET_BARREL as f64));
            ctx.set_stroke_style_str(TURRET_COLOR);
            ctx.set_line_width(5.0);
            ctx.stroke();
        }
        ctx.restore();
    }

    fn draw_target(&self, target: &TargetView) {
        let ctx = &self.ctx;
        let size = target.size as f64;
        ctx.set_fill_style_str(target.color);
        ctx.fill_rect(target.pos.x as f64, target.pos.y as f64, size, size);

        let center = target.center();
        ctx.set_fill_style_str("white");
        ctx.set_font(&format!("bold {}px Arial", target.font_px()));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&target.label, center.x as f64, center.y as f64)
            .ok();
    }

    fn draw_projectile(&self, projectile: &ProjectileView) {
        let ctx = &self.ctx;
        let r = projectile.radius as f64;

        if let Some(img) = self.projectile.ready() {
            ctx.save();
            ctx.translate(projectile.pos.x as f64, projectile.pos.y as f64)
                .ok();
            ctx.rotate(projectile.heading as f64 + FRAC_PI_2).ok();
            ctx.draw_image_with_html_image_element_and_dw_and_dh(img, -r, -r, r * 2.0, r * 2.0)
                .ok();
            ctx.restore();
        } else {
            ctx.begin_path();
            ctx.arc(projectile.pos.x as f64, projectile.pos.y as f64, r, 0.0, TAU)
                .ok();
            ctx.set_fill_style_str(PROJECTILE_COLOR);
            ctx.fill();
        }
    }

    fn draw_burst(&self, burst: &BurstView) {
        let ctx = &self.ctx;
        let half = BURST_SIZE as f64 / 2.0;

        ctx.save();
        ctx.set_global_alpha(burst.opacity as f64);
        ctx.translate(burst.pos.x as f64, burst.pos.y as f64).ok();
        ctx.scale(burst.scale as f64, burst.scale as f64).ok();

        if let Some(img) = self.burst.ready() {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                -half,
                -half,
                half * 2.0,
                half * 2.0,
            )
            .ok();
        } else {
            ctx.begin_path();
            ctx.arc(0.0, 0.0, half, 0.0, TAU).ok();
            ctx.set_stroke_style_str(BURST_COLOR);
            ctx.set_line_width(4.0);
            ctx.stroke();
        }
        ctx.restore();
    }

    fn draw_popup(&self, popup: &PopupView) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {})", popup.opacity));
        ctx.set_font("bold 20px Arial");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&popup.text, popup.pos.x as f64, popup.pos.y as f64)
            .ok();
    }
}
