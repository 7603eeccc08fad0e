//! The icon renderer.

use image::RgbaImage;
use tracing::debug;

use crate::icon::IconImage;
use crate::layer::LayerPipeline;

/// Renders the icon design at any size.
///
/// `IconRenderer` holds the layer pipeline. The default pipeline draws the
/// full design; access layers through the [`pipeline`](Self::pipeline) field
/// to disable or reconfigure them.
///
/// # Layer Pipeline
///
/// 1. **Shadow** (`pipeline.shadow`) - blurred card silhouette
/// 2. **Card** (`pipeline.card`) - light gradient card with a rim
/// 3. **Panel** (`pipeline.panel`) - dark gradient panel with a ring
/// 4. **Glow** (`pipeline.glow`) - blurred ellipse behind the waveform
/// 5. **Waveform** (`pipeline.waveform`) - double-stroked polyline
/// 6. **Pulses** (`pipeline.pulses`) - accent markers on the waveform
///
/// Every render starts from a fresh canvas; nothing is shared between sizes.
///
/// # Example
///
/// ```
/// use pulse_icon_renderer::IconRenderer;
///
/// let renderer = IconRenderer::new();
/// let icon = renderer.render(32, 2);
/// assert_eq!(icon.dimensions(), (64, 64));
/// assert_eq!(icon.file_name(), "icon_32x32@2x.png");
/// ```
#[derive(Default)]
pub struct IconRenderer {
    /// The layer pipeline. Access layers directly to configure them.
    pub pipeline: LayerPipeline,
}

impl IconRenderer {
    /// Creates a renderer for the full icon design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with a custom pipeline.
    pub fn with_pipeline(pipeline: LayerPipeline) -> Self {
        Self { pipeline }
    }

    /// Renders one rendition at `logical_size` points and `scale`.
    ///
    /// The image is `logical_size * scale` pixels square.
    pub fn render(&self, logical_size: u32, scale: u32) -> IconImage {
        let pixels = logical_size * scale.max(1);
        debug!(logical_size, scale, pixels, "rendering icon");
        self.pipeline.render(pixels).into_icon(scale)
    }
}

/// Renders the full icon design as a `size` x `size` RGBA image.
///
/// The background is transparent. `size` must be positive.
pub fn render_icon(size: u32) -> RgbaImage {
    IconRenderer::new().render(size, 1).data
}

// ============================================================================
// Tests
// ============================================================================
