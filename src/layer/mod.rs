//! Layer infrastructure for composing the icon.
//!
//! The icon is drawn as a stack of layers, bottom to top. Each layer
//! encapsulates a configuration and an enabled state, and knows how to draw
//! itself onto the canvas held by a [`RenderContext`].
//!
//! # Architecture
//!
//! Each layer config implements [`LayerEffect`], which defines:
//! - How the layer draws itself
//! - What properties it emits for downstream layers
//! - What properties it consumes from upstream layers
//!
//! Properties flow through the pipeline via [`RenderContext`], enabling
//! layers to communicate without tight coupling. The waveform layer, for
//! example, publishes the pixel positions of its points so the pulse layer
//! can place its markers on them.

pub mod card;
pub mod glow;
pub mod panel;
pub mod pulse;
pub mod shadow;
pub mod waveform;

pub use card::CardConfig;
pub use glow::GlowConfig;
pub use panel::PanelConfig;
pub use pulse::PulseConfig;
pub use shadow::ShadowConfig;
pub use waveform::{WAVEFORM_LAYOUT, WaveformConfig};

use crate::geometry::IconGeometry;
use crate::icon::{IconImage, RectPx};
use image::RgbaImage;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use tracing::trace;

// ============================================================================
// Render Context
// ============================================================================

/// Context that flows through the rendering pipeline.
///
/// Layers can read properties set by upstream layers and emit new properties
/// for downstream layers to consume.
///
/// # Example
///
/// ```ignore
/// // Upstream layer emits a property
/// ctx.set(PanelBounds(rect));
///
/// // Downstream layer reads the property
/// if let Some(PanelBounds(rect)) = ctx.get::<PanelBounds>() {
///     // Use the rect...
/// }
/// ```
pub struct RenderContext {
    /// The canvas being drawn, `geometry.size` pixels square.
    pub canvas: RgbaImage,

    /// Proportional layout for the canvas size.
    pub geometry: IconGeometry,

    /// Typed property bag for inter-layer communication.
    properties: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl RenderContext {
    /// Creates a context with a fresh, fully transparent `size` x `size` canvas.
    pub fn new(size: u32) -> Self {
        Self {
            canvas: RgbaImage::new(size, size),
            geometry: IconGeometry::for_size(size),
            properties: HashMap::new(),
        }
    }

    /// Canvas edge length in pixels.
    pub fn size(&self) -> u32 {
        self.geometry.size
    }

    /// Sets a typed property that downstream layers can read.
    pub fn set<T: Any + Send + Sync>(&mut self, value: T) {
        self.properties.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Gets a typed property set by an upstream layer.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.properties
            .get(&TypeId::of::<T>())
            .and_then(|b| b.downcast_ref())
    }

    /// Finishes rendering, producing an icon image at the given scale.
    ///
    /// The content bounds are the card bounds if a card was drawn, otherwise
    /// the whole canvas.
    pub fn into_icon(self, scale: u32) -> IconImage {
        let bounds = self
            .get::<CardBounds>()
            .map(|b| b.0)
            .unwrap_or_else(|| RectPx::from_size(self.canvas.width(), self.canvas.height()));
        IconImage::new(self.canvas, scale, bounds)
    }
}

// ============================================================================
// Common Properties
// ============================================================================

/// Pixel bounds of the outer card.
///
/// Emitted by the card layer; becomes the rendered image's content bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBounds(pub RectPx);

/// Pixel bounds of the inner panel.
///
/// Emitted by the panel layer. Consumed by the glow and waveform layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelBounds(pub RectPx);

/// Pixel positions of the waveform's points, in path order.
///
/// Emitted by the waveform layer. Consumed by the pulse layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveformPoints(pub Vec<(i32, i32)>);

// ============================================================================
// Layer Traits
// ============================================================================

/// Trait for layer configurations that know how to draw themselves.
///
/// This is the core abstraction that makes layers self-contained. Each layer:
/// - Draws onto the canvas in the render context
/// - Can read properties set by upstream layers
/// - Emits properties for downstream layers in a dedicated method
///
/// The separation of [`transform`](Self::transform) and [`emit`](Self::emit)
/// provides a canonical place for property emission and makes the data flow
/// explicit.
pub trait LayerEffect: Clone {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Draw onto the canvas in the render context.
    ///
    /// Property emission happens in [`emit`](Self::emit), not here.
    fn transform(&self, ctx: &mut RenderContext);

    /// Emit properties for downstream layers to consume.
    ///
    /// Called after [`transform`](Self::transform). The default implementation
    /// emits nothing.
    fn emit(&self, _ctx: &mut RenderContext) {}
}

// ============================================================================
// Generic Layer
// ============================================================================

/// A generic layer with a configuration and an enabled flag.
///
/// Disabling a layer keeps its configuration, so it can be toggled back on.
pub struct Layer<C: LayerEffect> {
    config: Option<C>,
    enabled: bool,
}

impl<C: LayerEffect> Default for Layer<C> {
    fn default() -> Self {
        Self {
            config: None,
            enabled: true,
        }
    }
}

impl<C: LayerEffect> Layer<C> {
    /// Creates an enabled layer with the given configuration.
    pub fn with_config(config: C) -> Self {
        Self {
            config: Some(config),
            enabled: true,
        }
    }

    /// Returns the current configuration, if any.
    pub fn config(&self) -> Option<&C> {
        self.config.as_ref()
    }

    /// Sets the configuration.
    pub fn set_config(&mut self, config: Option<C>) {
        self.config = config;
    }

    /// Sets whether the layer is enabled.
    ///
    /// Returns true if the enabled state changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }

    /// Apply this layer to the render context.
    ///
    /// If the layer is not active, the context passes through unchanged.
    pub fn apply(&self, ctx: &mut RenderContext) {
        let Some(config) = self.config.as_ref().filter(|_| self.enabled) else {
            return;
        };

        trace!(layer = C::NAME, size = ctx.size(), "drawing layer");
        config.transform(ctx);
        config.emit(ctx);
    }
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The ordered stack of layers that makes up the icon.
///
/// # Draw Order
///
/// ```text
/// Transparent canvas
///     │
///     ▼
/// ┌──────────┐
/// │  Shadow  │ ◄── blurred card silhouette, shifted down
/// └────┬─────┘
///      ▼
/// ┌──────────┐
/// │   Card   │ ──► CardBounds
/// └────┬─────┘
///      ▼
/// ┌──────────┐
/// │  Panel   │ ──► PanelBounds
/// └────┬─────┘
///      ▼
/// ┌──────────┐
/// │   Glow   │ ◄── PanelBounds
/// └────┬─────┘
///      ▼
/// ┌──────────┐
/// │ Waveform │ ◄── PanelBounds, ──► WaveformPoints
/// └────┬─────┘
///      ▼
/// ┌──────────┐
/// │  Pulses  │ ◄── WaveformPoints
/// └──────────┘
/// ```
pub struct LayerPipeline {
    pub shadow: Layer<ShadowConfig>,
    pub card: Layer<CardConfig>,
    pub panel: Layer<PanelConfig>,
    pub glow: Layer<GlowConfig>,
    pub waveform: Layer<WaveformConfig>,
    pub pulses: Layer<PulseConfig>,
}

impl Default for LayerPipeline {
    /// The full icon design with every layer enabled.
    fn default() -> Self {
        Self {
            shadow: Layer::with_config(ShadowConfig::default()),
            card: Layer::with_config(CardConfig::default()),
            panel: Layer::with_config(PanelConfig::default()),
            glow: Layer::with_config(GlowConfig::default()),
            waveform: Layer::with_config(WaveformConfig::default()),
            pulses: Layer::with_config(PulseConfig::default()),
        }
    }
}

impl LayerPipeline {
    /// A pipeline with no configured layers; renders a transparent canvas.
    pub fn empty() -> Self {
        Self {
            shadow: Layer::default(),
            card: Layer::default(),
            panel: Layer::default(),
            glow: Layer::default(),
            waveform: Layer::default(),
            pulses: Layer::default(),
        }
    }

    /// Draws every active layer, in order, onto a fresh `size` x `size` canvas.
    pub fn render(&self, size: u32) -> RenderContext {
        let mut ctx = RenderContext::new(size);

        self.shadow.apply(&mut ctx);
        self.card.apply(&mut ctx);
        self.panel.apply(&mut ctx);
        self.glow.apply(&mut ctx);
        self.waveform.apply(&mut ctx);
        self.pulses.apply(&mut ctx);

        ctx
    }
}
