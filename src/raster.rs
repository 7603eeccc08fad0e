//! Shape rasterization and compositing using tiny-skia (via resvg).
//!
//! Shapes are rasterized into their own full-canvas layer and then
//! composited onto the icon, so every drawing step blends with what is
//! already there.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use resvg::tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::color::Color;
use crate::geometry::Edges;

/// Control-point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Paths
// ============================================================================

/// Converts integer edges into a tiny-skia rectangle.
pub fn edges_rect(edges: Edges) -> Option<Rect> {
    Rect::from_ltrb(
        edges.left as f32,
        edges.top as f32,
        edges.right as f32,
        edges.bottom as f32,
    )
}

/// Builds a rectangle path with circular corners of `radius`.
///
/// The radius is clamped to half the shorter side. Returns `None` for an
/// empty rectangle.
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if radius <= 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }

    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = radius * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + radius, t);
    pb.line_to(r - radius, t);
    pb.cubic_to(r - radius + k, t, r, t + radius - k, r, t + radius);
    pb.line_to(r, b - radius);
    pb.cubic_to(r, b - radius + k, r - radius + k, b, r - radius, b);
    pb.line_to(l + radius, b);
    pb.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
    pb.line_to(l, t + radius);
    pb.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
    pb.close();
    pb.finish()
}

/// Builds an ellipse path inscribed in `rect`.
pub fn oval_path(rect: Rect) -> Option<Path> {
    PathBuilder::from_oval(rect)
}

/// Builds a circle path.
pub fn circle_path(cx: f32, cy: f32, radius: f32) -> Option<Path> {
    PathBuilder::from_circle(cx, cy, radius)
}

/// Builds an open polyline through `points`.
pub fn polyline_path(points: &[(f32, f32)]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.0, first.1);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.finish()
}

/// A stroke with round joins and caps, as used for the waveform.
pub fn round_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
}

// ============================================================================
// Layers
// ============================================================================

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, color.alpha);
    paint.anti_alias = true;
    paint
}

/// A transparent layer that shapes are drawn onto before compositing.
///
/// Shapes drawn onto the same layer blend source-over with each other, so a
/// layer holding several shapes composites exactly like drawing each shape
/// onto the canvas in turn.
pub struct ShapeLayer {
    pixmap: Pixmap,
}

impl ShapeLayer {
    /// Creates a transparent `width` x `height` layer.
    ///
    /// Returns `None` if the layer cannot be allocated (zero-sized).
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
        })
    }

    /// Fills `path` with `color`.
    pub fn fill(&mut self, path: &Path, color: Color) -> &mut Self {
        self.pixmap.fill_path(
            path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        self
    }

    /// Strokes `path` with `color`.
    pub fn stroke(&mut self, path: &Path, color: Color, stroke: &Stroke) -> &mut Self {
        self.pixmap
            .stroke_path(path, &paint_for(color), stroke, Transform::identity(), None);
        self
    }

    /// Strokes the inside of a rounded rectangle with a band `width` wide.
    ///
    /// The band's outer edge coincides with the shape's edge, so the outline
    /// never spills past the filled area.
    pub fn stroke_inside(&mut self, rect: Rect, radius: f32, width: f32, color: Color) -> &mut Self {
        let half = width / 2.0;
        let inset = Rect::from_ltrb(
            rect.left() + half,
            rect.top() + half,
            rect.right() - half,
            rect.bottom() - half,
        );
        if let Some(path) = inset.and_then(|r| rounded_rect_path(r, (radius - half).max(0.0))) {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            self.stroke(&path, color, &stroke);
        }
        self
    }

    /// Converts the layer to straight-alpha RGBA.
    pub fn to_image(&self) -> RgbaImage {
        pixmap_to_rgba_image(&self.pixmap)
    }

    /// Returns the layer's alpha channel as an 8-bit coverage mask.
    pub fn to_coverage(&self) -> GrayImage {
        let mut mask = GrayImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in mask.pixels_mut().zip(self.pixmap.pixels()) {
            *dst = Luma([src.alpha()]);
        }
        mask
    }
}

/// Rasterizes `path` into an 8-bit coverage mask (255 = fully inside).
pub fn coverage_mask(width: u32, height: u32, path: &Path) -> Option<GrayImage> {
    let mut layer = ShapeLayer::new(width, height)?;
    layer.fill(path, Color::new(255, 255, 255, 255));
    Some(layer.to_coverage())
}

/// Converts a tiny-skia pixmap to an `image::RgbaImage`.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    // tiny-skia stores premultiplied alpha
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        *dst = unpremultiply(Rgba([src.red(), src.green(), src.blue(), src.alpha()]));
    }

    img
}

// ============================================================================
// Blur
// ============================================================================

/// Applies a Gaussian blur with standard deviation `sigma`.
///
/// Blurring happens on premultiplied values so color from opaque pixels
/// does not darken toward the transparent black around a shape.
pub fn gaussian_blur(img: &RgbaImage, sigma: f32) -> RgbaImage {
    let mut premultiplied = img.clone();
    for pixel in premultiplied.pixels_mut() {
        *pixel = premultiply(*pixel);
    }

    let mut blurred = image::imageops::fast_blur(&premultiplied, sigma);
    for pixel in blurred.pixels_mut() {
        *pixel = unpremultiply(*pixel);
    }
    blurred
}

fn premultiply(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    let scale = |c: u8| -> u8 { ((c as u32 * a as u32 + 127) / 255) as u8 };
    Rgba([scale(r), scale(g), scale(b), a])
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let a_f = a as f32 / 255.0;
    let scale = |c: u8| -> u8 { (c as f32 / a_f).round().min(255.0) as u8 };
    Rgba([scale(r), scale(g), scale(b), a])
}

// ============================================================================
// Compositing
// ============================================================================

/// Composites a source image onto a destination image at the specified position.
///
/// Uses standard alpha blending (source over destination).
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let dest_width = dest.width() as i32;
    let dest_height = dest.height() as i32;

    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        if src_pixel[3] == 0 {
            continue;
        }

        let dx = x + sx as i32;
        let dy = y + sy as i32;
        if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
            continue;
        }

        let dst_pixel = dest.get_pixel_mut(dx as u32, dy as u32);
        *dst_pixel = alpha_blend(*src_pixel, *dst_pixel);
    }
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Tests
// ============================================================================
