//! Rendered icon renditions and the pixel rectangles that describe them.

use image::RgbaImage;

/// An axis-aligned rectangle in whole canvas pixels.
///
/// Describes the card and panel regions and the content bounds of a
/// rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The rectangle covering a whole `width` x `height` canvas.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// One past the last column.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the last row.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// One rendition of the icon: a square image at a logical size and scale.
///
/// An iconset pairs every logical size with an @1x image and, up to
/// 512 points, an @2x image rendered at twice the pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub data: RgbaImage,

    /// 1 for @1x, 2 for @2x.
    pub scale: u32,

    /// The card region, excluding the transparent margin and the shadow.
    pub content_bounds: RectPx,
}

impl IconImage {
    pub fn new(data: RgbaImage, scale: u32, content_bounds: RectPx) -> Self {
        Self {
            data,
            scale: scale.max(1),
            content_bounds,
        }
    }

    /// Pixel width and height.
    pub fn dimensions(&self) -> (u32, u32) {
        self.data.dimensions()
    }

    /// Edge length in points: a 64px @2x rendition is 32 points.
    pub fn logical_size(&self) -> u32 {
        self.data.width() / self.scale
    }

    /// `icon_32x32.png` for @1x, `icon_32x32@2x.png` for @2x.
    pub fn file_name(&self) -> String {
        iconset_file_name(self.logical_size(), self.scale)
    }
}

/// Builds the conventional iconset file name for a logical size and scale.
pub fn iconset_file_name(logical_size: u32, scale: u32) -> String {
    if scale > 1 {
        format!("icon_{logical_size}x{logical_size}@{scale}x.png")
    } else {
        format!("icon_{logical_size}x{logical_size}.png")
    }
}
