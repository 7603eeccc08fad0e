//! Size-proportional layout of the icon.
//!
//! Every dimension is a fixed fraction of the target pixel size, rounded to
//! the nearest whole pixel, so one routine yields the same proportions at
//! 16px and at 1024px.

use crate::icon::RectPx;

/// Scales `size` by `fraction` and rounds to the nearest pixel (ties to even).
pub fn scaled(size: u32, fraction: f64) -> u32 {
    (size as f64 * fraction).round_ties_even() as u32
}

/// Maps a normalized point in [0,1]x[0,1] into `rect`, in whole pixels.
pub fn map_normalized(rect: RectPx, point: (f64, f64)) -> (i32, i32) {
    let (px, py) = point;
    (
        rect.x as i32 + (px * rect.width as f64).round_ties_even() as i32,
        rect.y as i32 + (py * rect.height as f64).round_ties_even() as i32,
    )
}

/// Edges of an axis-aligned box in continuous pixel coordinates.
///
/// Unlike [`RectPx`], the edges may fall outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Edges {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_rect(rect: RectPx) -> Self {
        Self::new(
            rect.x as i32,
            rect.y as i32,
            rect.right() as i32,
            rect.bottom() as i32,
        )
    }

    /// Returns these edges moved down by `dy` pixels.
    pub fn shifted_down(self, dy: i32) -> Self {
        Self::new(self.left, self.top + dy, self.right, self.bottom + dy)
    }
}

/// All proportional measurements for one rendered size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    /// Canvas edge length in pixels.
    pub size: u32,

    /// The outer card, inset 8% from each canvas edge.
    pub card: RectPx,
    pub card_radius: u32,
    pub card_outline: u32,

    /// Downward offset of the drop shadow.
    pub shadow_shift: u32,
    /// Gaussian standard deviation for the drop shadow.
    pub shadow_blur: f32,

    /// The inner panel, inset 18.5% from each canvas edge.
    pub panel: RectPx,
    pub panel_radius: u32,
    pub panel_ring: u32,

    /// Ellipse bounds for the glow behind the waveform.
    pub glow: Edges,
    pub glow_blur: f32,

    /// Stroke width of the base waveform line.
    pub wave_width: u32,
    pub pulse_radius: u32,
}

impl IconGeometry {
    /// Computes the layout for a `size` x `size` canvas.
    pub fn for_size(size: u32) -> Self {
        let outer = scaled(size, 0.08);
        let card = inset_square(size, outer);

        let inner = scaled(size, 0.185);
        let panel = inset_square(size, inner);

        Self {
            size,
            card,
            card_radius: scaled(size, 0.21),
            card_outline: scaled(size, 0.01).max(1),
            shadow_shift: scaled(size, 0.018),
            shadow_blur: (size / 46).max(1) as f32,
            panel,
            panel_radius: scaled(size, 0.145),
            panel_ring: scaled(size, 0.015).max(2),
            glow: glow_edges(size, panel),
            glow_blur: (size / 34).max(1) as f32,
            wave_width: scaled(size, 0.046).max(2),
            pulse_radius: scaled(size, 0.034).max(2),
        }
    }
}

/// Ellipse bounds for the glow around `panel`.
///
/// The ellipse reaches further left than right and further below than
/// above, so the glow sits slightly off-center.
pub fn glow_edges(size: u32, panel: RectPx) -> Edges {
    Edges::new(
        panel.x as i32 - scaled(size, 0.06) as i32,
        panel.y as i32 - scaled(size, 0.05) as i32,
        panel.right() as i32 + scaled(size, 0.05) as i32,
        panel.bottom() as i32 + scaled(size, 0.08) as i32,
    )
}

fn inset_square(size: u32, inset: u32) -> RectPx {
    let side = size.saturating_sub(inset * 2);
    RectPx::new(inset, inset, side, side)
}
