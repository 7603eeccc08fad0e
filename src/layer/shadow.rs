//! Drop shadow beneath the card.

use super::{LayerEffect, RenderContext};
use crate::color::{Color, SHADOW};
use crate::geometry::Edges;
use crate::raster::{ShapeLayer, composite_over, edges_rect, gaussian_blur, rounded_rect_path};

/// Configuration for the drop shadow.
///
/// The shadow is the card's silhouette, shifted down and blurred with a
/// standard deviation that grows with the icon size.
#[derive(Debug, Clone)]
pub struct ShadowConfig {
    pub color: Color,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self { color: SHADOW }
    }
}

impl LayerEffect for ShadowConfig {
    const NAME: &'static str = "shadow";

    fn transform(&self, ctx: &mut RenderContext) {
        let g = ctx.geometry;
        let edges = Edges::from_rect(g.card).shifted_down(g.shadow_shift as i32);

        let Some(path) = edges_rect(edges).and_then(|r| rounded_rect_path(r, g.card_radius as f32))
        else {
            return;
        };
        let Some(mut layer) = ShapeLayer::new(g.size, g.size) else {
            return;
        };
        layer.fill(&path, self.color);

        let blurred = gaussian_blur(&layer.to_image(), g.shadow_blur);
        composite_over(&mut ctx.canvas, &blurred, 0, 0);
    }
}
