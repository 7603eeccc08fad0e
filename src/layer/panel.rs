//! Inner panel: dark diagonal gradient with a teal ring.

use super::{LayerEffect, PanelBounds, RenderContext};
use crate::color::{Color, PANEL_END, PANEL_RING, PANEL_START};
use crate::geometry::Edges;
use crate::gradient::{GradientDirection, paste_round_gradient};
use crate::raster::{ShapeLayer, composite_over, edges_rect};

/// Configuration for the inner panel.
///
/// # Emitted Properties
///
/// - [`PanelBounds`]: the panel's pixel rectangle.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Gradient color at the top-left corner.
    pub start: Color,
    /// Gradient color at the bottom-right corner.
    pub end: Color,
    pub ring: Color,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            start: PANEL_START,
            end: PANEL_END,
            ring: PANEL_RING,
        }
    }
}

impl LayerEffect for PanelConfig {
    const NAME: &'static str = "panel";

    fn transform(&self, ctx: &mut RenderContext) {
        let g = ctx.geometry;
        paste_round_gradient(
            &mut ctx.canvas,
            g.panel,
            g.panel_radius,
            self.start,
            self.end,
            GradientDirection::Diagonal,
        );

        let Some(rect) = edges_rect(Edges::from_rect(g.panel)) else {
            return;
        };
        let Some(mut ring) = ShapeLayer::new(g.size, g.size) else {
            return;
        };
        ring.stroke_inside(rect, g.panel_radius as f32, g.panel_ring as f32, self.ring);
        composite_over(&mut ctx.canvas, &ring.to_image(), 0, 0);
    }

    fn emit(&self, ctx: &mut RenderContext) {
        let panel = ctx.geometry.panel;
        ctx.set(PanelBounds(panel));
    }
}
