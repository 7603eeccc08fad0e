//! The stylized waveform drawn across the panel.

use super::{LayerEffect, PanelBounds, RenderContext, WaveformPoints};
use crate::color::{Color, WAVE_BASE, WAVE_HIGHLIGHT};
use crate::geometry::map_normalized;
use crate::icon::RectPx;
use crate::raster::{ShapeLayer, composite_over, polyline_path, round_stroke};

/// Normalized waveform points, left to right, within the panel.
pub const WAVEFORM_LAYOUT: [(f64, f64); 7] = [
    (0.12, 0.60),
    (0.24, 0.48),
    (0.34, 0.66),
    (0.47, 0.32),
    (0.60, 0.60),
    (0.74, 0.42),
    (0.88, 0.56),
];

/// Maps [`WAVEFORM_LAYOUT`] into `panel`, in whole pixels.
pub fn waveform_points(panel: RectPx) -> Vec<(i32, i32)> {
    WAVEFORM_LAYOUT
        .iter()
        .map(|&point| map_normalized(panel, point))
        .collect()
}

/// Configuration for the waveform.
///
/// The polyline is stroked twice with round joins and caps: a wide base line and a
/// narrower, brighter, translucent line on top of it.
///
/// # Consumed Properties
///
/// - [`PanelBounds`]: the area the layout is mapped into.
///
/// # Emitted Properties
///
/// - [`WaveformPoints`]: the mapped pixel positions.
#[derive(Debug, Clone)]
pub struct WaveformConfig {
    pub base: Color,
    pub highlight: Color,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            base: WAVE_BASE,
            highlight: WAVE_HIGHLIGHT,
        }
    }
}

impl WaveformConfig {
    fn points(ctx: &RenderContext) -> Vec<(i32, i32)> {
        let panel = ctx
            .get::<PanelBounds>()
            .map(|b| b.0)
            .unwrap_or(ctx.geometry.panel);
        waveform_points(panel)
    }
}

impl LayerEffect for WaveformConfig {
    const NAME: &'static str = "waveform";

    fn transform(&self, ctx: &mut RenderContext) {
        let g = ctx.geometry;

        // Stroke through pixel centers
        let centers: Vec<(f32, f32)> = Self::points(ctx)
            .into_iter()
            .map(|(x, y)| (x as f32 + 0.5, y as f32 + 0.5))
            .collect();
        let Some(path) = polyline_path(&centers) else {
            return;
        };
        let Some(mut layer) = ShapeLayer::new(g.size, g.size) else {
            return;
        };

        let highlight_width = (g.wave_width / 2).max(1);
        layer
            .stroke(&path, self.base, &round_stroke(g.wave_width as f32))
            .stroke(&path, self.highlight, &round_stroke(highlight_width as f32));

        composite_over(&mut ctx.canvas, &layer.to_image(), 0, 0);
    }

    fn emit(&self, ctx: &mut RenderContext) {
        let points = Self::points(ctx);
        ctx.set(WaveformPoints(points));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerPipeline;

    #[test]
    fn points_map_into_panel() {
        let panel = RectPx::new(189, 189, 646, 646);
        let points = waveform_points(panel);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], (189 + 78, 189 + 388));
        assert_eq!(points[3], (189 + 304, 189 + 207));
        assert!(points.iter().all(|&(x, y)| {
            (189..835).contains(&x) && (189..835).contains(&y)
        }));
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn waveform_strokes_its_vertices() {
        let mut pipeline = LayerPipeline::empty();
        pipeline.waveform.set_config(Some(WaveformConfig::default()));
        let ctx = pipeline.render(512);

        let points = &ctx.get::<WaveformPoints>().expect("points emitted").0;
        for &(x, y) in points {
            let pixel = ctx.canvas.get_pixel(x as u32, y as u32);
            assert!(pixel[3] > 200, "vertex ({x}, {y}) was {pixel:?}");
            // The highlight runs down the middle of the base stroke
            assert!(pixel[0] > 150, "vertex ({x}, {y}) was {pixel:?}");
        }

        // Far from the line, nothing is drawn
        assert_eq!(ctx.canvas.get_pixel(256, 20)[3], 0);
    }

    #[test]
    fn base_stroke_is_wider_than_highlight() {
        let mut pipeline = LayerPipeline::empty();
        pipeline.waveform.set_config(Some(WaveformConfig::default()));
        let ctx = pipeline.render(1024);

        // Just off the centerline of the first vertex: base stroke only
        let (x, y) = ctx.get::<WaveformPoints>().unwrap().0[0];
        let off = ctx.geometry.wave_width / 2 - 4;
        let edge = ctx.canvas.get_pixel(x as u32, y as u32 + off);
        let middle = ctx.canvas.get_pixel(x as u32, y as u32);
        assert!(edge[3] > 0);
        assert!(middle[0] > edge[0], "middle {middle:?} edge {edge:?}");
    }
}
