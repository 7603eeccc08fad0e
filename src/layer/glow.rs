//! Soft elliptical glow behind the waveform.

use super::{LayerEffect, PanelBounds, RenderContext};
use crate::color::{Color, GLOW};
use crate::geometry::glow_edges;
use crate::raster::{ShapeLayer, composite_over, edges_rect, gaussian_blur, oval_path};

/// Configuration for the glow.
///
/// # Consumed Properties
///
/// - [`PanelBounds`]: the glow is sized around the panel. Falls back to the
///   geometry's panel when no panel layer ran.
#[derive(Debug, Clone)]
pub struct GlowConfig {
    pub color: Color,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self { color: GLOW }
    }
}

impl LayerEffect for GlowConfig {
    const NAME: &'static str = "glow";

    fn transform(&self, ctx: &mut RenderContext) {
        let g = ctx.geometry;
        let panel = ctx.get::<PanelBounds>().map(|b| b.0).unwrap_or(g.panel);

        let Some(path) = edges_rect(glow_edges(g.size, panel)).and_then(oval_path) else {
            return;
        };
        let Some(mut layer) = ShapeLayer::new(g.size, g.size) else {
            return;
        };
        layer.fill(&path, self.color);

        let blurred = gaussian_blur(&layer.to_image(), g.glow_blur);
        composite_over(&mut ctx.canvas, &blurred, 0, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::RectPx;
    use crate::layer::LayerPipeline;

    #[test]
    fn glow_is_faint_and_centered_low() {
        let mut pipeline = LayerPipeline::empty();
        pipeline.glow.set_config(Some(GlowConfig::default()));
        let ctx = pipeline.render(256);
        let g = ctx.geometry;

        let center = ctx.canvas.get_pixel(128, 128);
        assert!(center[3] > 0 && center[3] <= 70, "center {center:?}");
        assert!(center[1] > center[0]);

        // The ellipse extends further below the panel than above it
        let above = ctx.canvas.get_pixel(128, g.panel.y - 10)[3];
        let below = ctx.canvas.get_pixel(128, g.panel.bottom() + 10)[3];
        assert!(below >= above, "below {below} vs above {above}");

        assert_eq!(ctx.canvas.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn glow_follows_emitted_panel() {
        let mut ctx = RenderContext::new(128);
        ctx.set(PanelBounds(RectPx::new(70, 70, 40, 40)));
        GlowConfig::default().transform(&mut ctx);

        assert!(ctx.canvas.get_pixel(90, 90)[3] > 0);
        assert_eq!(ctx.canvas.get_pixel(20, 20)[3], 0);
    }
}
