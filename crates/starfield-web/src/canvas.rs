//! Canvas2D implementation of the engine's [`Surface`].

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use starfield_engine::{star_points, Hsla, PaintBuffer, PaintOp, Rgba, Surface};

/// Paints the field onto an HTML canvas through its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a live canvas. Returns `None` when no 2D context is available.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasSurface { canvas, ctx })
    }
}

fn hsla_css(color: Hsla) -> String {
    format!(
        "hsla({}, {}%, {}%, {})",
        color.hue, color.saturation, color.lightness, color.alpha
    )
}

fn rgba_css(color: Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.red, color.green, color.blue, color.alpha
    )
}

impl Surface for CanvasSurface {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn draw(&mut self, frame: &PaintBuffer) {
        for op in frame.ops() {
            match *op {
                PaintOp::Wash { color } => {
                    self.ctx.set_fill_style_str(&rgba_css(color));
                    self.ctx.fill_rect(
                        0.0,
                        0.0,
                        self.canvas.width() as f64,
                        self.canvas.height() as f64,
                    );
                }
                PaintOp::TrailSegment {
                    from,
                    to,
                    width,
                    start,
                    end,
                } => {
                    let gradient = self.ctx.create_linear_gradient(
                        from.x as f64,
                        from.y as f64,
                        to.x as f64,
                        to.y as f64,
                    );
                    if gradient.add_color_stop(0.0, &hsla_css(start)).is_err()
                        || gradient.add_color_stop(1.0, &hsla_css(end)).is_err()
                    {
                        continue;
                    }
                    self.ctx.set_stroke_style_canvas_gradient(&gradient);
                    self.ctx.set_line_width(width as f64);
                    self.ctx.begin_path();
                    self.ctx.move_to(from.x as f64, from.y as f64);
                    self.ctx.line_to(to.x as f64, to.y as f64);
                    self.ctx.stroke();
                }
                PaintOp::Star {
                    center,
                    outer,
                    inner,
                    spikes,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&hsla_css(color));
                    self.ctx.begin_path();
                    let points = star_points(center, spikes, outer, inner);
                    self.ctx.move_to(points[0].x as f64, points[0].y as f64);
                    for point in &points[1..] {
                        self.ctx.line_to(point.x as f64, point.y as f64);
                    }
                    self.ctx.close_path();
                    self.ctx.fill();
                }
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_colors_format_like_the_browser_expects() {
        assert_eq!(
            hsla_css(Hsla::new(200.0, 90.0, 60.0, 0.5)),
            "hsla(200, 90%, 60%, 0.5)"
        );
        assert_eq!(rgba_css(Rgba::new(230, 240, 255, 0.1)), "rgba(230, 240, 255, 0.1)");
    }
}
