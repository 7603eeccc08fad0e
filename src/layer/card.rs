//! Outer card: light vertical gradient with a thin rim.

use super::{CardBounds, LayerEffect, RenderContext};
use crate::color::{CARD_BOTTOM, CARD_OUTLINE, CARD_TOP, Color};
use crate::geometry::Edges;
use crate::gradient::{GradientDirection, paste_round_gradient};
use crate::raster::{ShapeLayer, composite_over, edges_rect};

/// Configuration for the outer card.
///
/// # Emitted Properties
///
/// - [`CardBounds`]: the card's pixel rectangle.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Gradient color at the top row.
    pub top: Color,
    /// Gradient color at the bottom row.
    pub bottom: Color,
    /// Rim drawn just inside the card's edge.
    pub outline: Color,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            top: CARD_TOP,
            bottom: CARD_BOTTOM,
            outline: CARD_OUTLINE,
        }
    }
}

impl LayerEffect for CardConfig {
    const NAME: &'static str = "card";

    fn transform(&self, ctx: &mut RenderContext) {
        let g = ctx.geometry;
        paste_round_gradient(
            &mut ctx.canvas,
            g.card,
            g.card_radius,
            self.top,
            self.bottom,
            GradientDirection::Vertical,
        );

        let Some(rect) = edges_rect(Edges::from_rect(g.card)) else {
            return;
        };
        let Some(mut rim) = ShapeLayer::new(g.size, g.size) else {
            return;
        };
        rim.stroke_inside(rect, g.card_radius as f32, g.card_outline as f32, self.outline);
        composite_over(&mut ctx.canvas, &rim.to_image(), 0, 0);
    }

    fn emit(&self, ctx: &mut RenderContext) {
        let card = ctx.geometry.card;
        ctx.set(CardBounds(card));
    }
}
