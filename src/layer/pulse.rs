//! Pulse markers sitting on the waveform.

use super::{LayerEffect, PanelBounds, RenderContext, WaveformPoints};
use crate::color::{Color, PULSE_ACCENTS, PULSE_SHINE};
use crate::layer::waveform::waveform_points;
use crate::raster::{ShapeLayer, circle_path, composite_over};

/// Waveform point indices that carry a pulse marker.
pub const PULSE_POINTS: [usize; 3] = [1, 3, 5];

/// Configuration for the pulse markers.
///
/// Each marker is a filled circle in its accent color with a small shine dot
/// toward its top-left.
///
/// # Consumed Properties
///
/// - [`WaveformPoints`]: marker centers. When no waveform was drawn the
///   layout is mapped into the panel directly.
#[derive(Debug, Clone)]
pub struct PulseConfig {
    /// Accent colors, in the order of [`PULSE_POINTS`].
    pub accents: [Color; 3],
    pub shine: Color,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            accents: PULSE_ACCENTS,
            shine: PULSE_SHINE,
        }
    }
}

impl LayerEffect for PulseConfig {
    const NAME: &'static str = "pulses";

    fn transform(&self, ctx: &mut RenderContext) {
        let g = ctx.geometry;
        let points = match ctx.get::<WaveformPoints>() {
            Some(WaveformPoints(points)) => points.clone(),
            None => {
                let panel = ctx.get::<PanelBounds>().map(|b| b.0).unwrap_or(g.panel);
                waveform_points(panel)
            }
        };

        let Some(mut layer) = ShapeLayer::new(g.size, g.size) else {
            return;
        };

        let radius = g.pulse_radius as f32;
        let shine_radius = (g.pulse_radius / 3).max(1) as f32;

        for (&index, &accent) in PULSE_POINTS.iter().zip(self.accents.iter()) {
            let Some(&(x, y)) = points.get(index) else {
                continue;
            };
            let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);

            if let Some(dot) = circle_path(cx, cy, radius) {
                layer.fill(&dot, accent);
            }

            // Shine's box starts one shine radius inside the marker's box
            let offset = radius - 2.0 * shine_radius;
            if let Some(shine) = circle_path(cx - offset, cy - offset, shine_radius) {
                layer.fill(&shine, self.shine);
            }
        }

        composite_over(&mut ctx.canvas, &layer.to_image(), 0, 0);
    }
}
