use crate::core::{for_each_connection, HueClock, CONNECTION_LINE_WIDTH};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Canvas 2D renderer =====================

pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn resize(&mut self, size: Vec2) {
        self.width = size.x as f64;
        self.height = size.y as f64;
    }

    /// Clear, then draw dots and the proximity lines between them.
    pub fn draw(&self, points: &[(Vec2, f32)], connection_distance: f32, hue: &HueClock) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        ctx.set_fill_style_str(&hue.css());
        for (pos, size) in points {
            ctx.begin_path();
            _ = ctx.arc(pos.x as f64, pos.y as f64, *size as f64, 0.0, TAU);
            ctx.fill();
        }

        ctx.set_line_width(CONNECTION_LINE_WIDTH);
        for_each_connection(points, connection_distance, |a, b, alpha| {
            ctx.begin_path();
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.set_stroke_style_str(&hue.css_with_alpha(alpha));
            ctx.stroke();
        });
    }
}
