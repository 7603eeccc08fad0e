//! pulse-icon-renderer: procedural application icon and iconset packaging
//!
//! This crate draws a waveform app icon (a light card holding a dark panel
//! with a glowing, pulse-marked waveform) at any pixel size, writes the
//! standard iconset PNGs, and hands the iconset to a platform icon compiler.
//!
//! # Example
//!
//! ```
//! use pulse_icon_renderer::render_icon;
//!
//! let img = render_icon(64);
//! assert_eq!(img.dimensions(), (64, 64));
//! ```
//!
//! # Packaging
//!
//! [`IconPackager`] runs the whole pipeline: it checks the compiler is
//! available, writes `<workdir>/app.iconset`, then compiles it.
//!
//! ```no_run
//! use pulse_icon_renderer::{IconPackager, Iconutil};
//!
//! let manifest = IconPackager::new(Iconutil::new())
//!     .run("/tmp/out.icns".as_ref(), "/tmp/work".as_ref())?;
//! println!("{}", manifest.to_json()?);
//! # Ok::<(), pulse_icon_renderer::Error>(())
//! ```

mod color;
mod compiler;
mod error;
mod geometry;
mod gradient;
mod icon;
mod iconset;
mod layer;
mod manifest;
mod packager;
mod raster;
mod renderer;

pub use color::{Color, mix};
pub use compiler::{IconCompiler, Iconutil};
pub use error::{Error, Result};
pub use geometry::IconGeometry;
pub use gradient::{GradientDirection, gradient_image, paste_round_gradient};
pub use icon::{IconImage, RectPx};
pub use iconset::{ICON_SIZES, ICONSET_DIR_NAME, IconsetBuilder, RETINA_MAX_SIZE};
pub use layer::{
    CardBounds, CardConfig, GlowConfig, Layer, LayerEffect, LayerPipeline, PanelBounds, PanelConfig,
    PulseConfig, RenderContext, ShadowConfig, WAVEFORM_LAYOUT, WaveformConfig, WaveformPoints,
};
pub use manifest::{IconsetManifest, ManifestEntry};
pub use packager::IconPackager;
pub use renderer::{IconRenderer, render_icon};
