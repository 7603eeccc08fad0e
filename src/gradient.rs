//! Two-color gradients and gradient mask compositing.

use image::RgbaImage;
use resvg::tiny_skia::Rect;

use crate::color::{Color, mix, to_pixel};
use crate::icon::RectPx;
use crate::raster::{composite_over, coverage_mask, rounded_rect_path};

/// Direction in which a gradient interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Top row is the start color, bottom row the end color.
    Vertical,
    /// Top-left pixel is the start color, bottom-right pixel the end color.
    Diagonal,
}

/// Renders a `width` x `height` gradient from `c0` to `c1`.
///
/// Vertical gradients are interpolated per row at `y / (height - 1)`;
/// diagonal gradients per pixel at `(x + y) / (width + height - 2)`.
pub fn gradient_image(
    width: u32,
    height: u32,
    c0: Color,
    c1: Color,
    direction: GradientDirection,
) -> RgbaImage {
    match direction {
        GradientDirection::Vertical => {
            let span = height.saturating_sub(1).max(1) as f32;
            let mut img = RgbaImage::new(width, height);
            for (y, row) in img.enumerate_rows_mut() {
                let pixel = to_pixel(mix(c0, c1, y as f32 / span));
                for (_, _, p) in row {
                    *p = pixel;
                }
            }
            img
        }
        GradientDirection::Diagonal => {
            let span = (width + height).saturating_sub(2).max(1) as f32;
            RgbaImage::from_fn(width, height, |x, y| {
                to_pixel(mix(c0, c1, (x + y) as f32 / span))
            })
        }
    }
}

/// Pastes a gradient onto `canvas` clipped to a rounded rectangle.
///
/// The gradient covers the full `rect`; a rounded-rectangle coverage mask of
/// the same extent then decides how much of each gradient pixel shows.
/// Pixels outside the rounded shape leave the canvas untouched.
pub fn paste_round_gradient(
    canvas: &mut RgbaImage,
    rect: RectPx,
    radius: u32,
    c0: Color,
    c1: Color,
    direction: GradientDirection,
) {
    let Some(shape) = Rect::from_xywh(0.0, 0.0, rect.width as f32, rect.height as f32) else {
        return;
    };
    let Some(path) = rounded_rect_path(shape, radius as f32) else {
        return;
    };
    let Some(mask) = coverage_mask(rect.width, rect.height, &path) else {
        return;
    };

    let mut grad = gradient_image(rect.width, rect.height, c0, c1, direction);
    for (pixel, coverage) in grad.pixels_mut().zip(mask.pixels()) {
        pixel[3] = ((pixel[3] as u32 * coverage[0] as u32 + 127) / 255) as u8;
    }

    composite_over(canvas, &grad, rect.x as i32, rect.y as i32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{CARD_BOTTOM, CARD_TOP, PANEL_END, PANEL_START};

    const CARD_BOTTOM_CHANNELS: [u8; 3] = [208, 217, 231];

    #[test]
    fn vertical_gradient_endpoints_and_monotonic() {
        let img = gradient_image(8, 50, CARD_TOP, CARD_BOTTOM, GradientDirection::Vertical);
        assert_eq!(img.get_pixel(3, 0).0, to_pixel(CARD_TOP).0);
        assert_eq!(img.get_pixel(3, 49).0, to_pixel(CARD_BOTTOM).0);

        // Every channel of CARD_TOP is >= CARD_BOTTOM, so values never rise
        for y in 1..50 {
            let above = img.get_pixel(0, y - 1);
            let here = img.get_pixel(0, y);
            for c in 0..3 {
                assert!(here[c] <= above[c], "channel {c} rose at row {y}");
                assert!(here[c] >= CARD_BOTTOM_CHANNELS[c]);
            }
        }
    }

    #[test]
    fn vertical_gradient_rows_are_uniform() {
        let img = gradient_image(16, 16, CARD_TOP, CARD_BOTTOM, GradientDirection::Vertical);
        for y in 0..16 {
            let first = *img.get_pixel(0, y);
            assert!((0..16).all(|x| *img.get_pixel(x, y) == first));
        }
    }

    #[test]
    fn diagonal_gradient_follows_anti_diagonals() {
        let img = gradient_image(20, 12, PANEL_START, PANEL_END, GradientDirection::Diagonal);
        assert_eq!(img.get_pixel(0, 0).0, to_pixel(PANEL_START).0);
        assert_eq!(img.get_pixel(19, 11).0, to_pixel(PANEL_END).0);
        // Same x + y, same color
        assert_eq!(img.get_pixel(5, 3), img.get_pixel(3, 5));
        assert_eq!(img.get_pixel(8, 0), img.get_pixel(0, 8));
        // Green climbs from 24 to 53 along x + y
        assert!(img.get_pixel(10, 6)[1] > img.get_pixel(2, 1)[1]);
    }

    #[test]
    fn single_row_gradient_uses_start_color() {
        let img = gradient_image(4, 1, CARD_TOP, CARD_BOTTOM, GradientDirection::Vertical);
        assert_eq!(img.get_pixel(0, 0).0, to_pixel(CARD_TOP).0);

        let img = gradient_image(1, 1, PANEL_START, PANEL_END, GradientDirection::Diagonal);
        assert_eq!(img.get_pixel(0, 0).0, to_pixel(PANEL_START).0);
    }

    #[test]
    fn round_gradient_is_masked_to_shape() {
        let mut canvas = RgbaImage::new(100, 100);
        let rect = RectPx::new(10, 10, 80, 80);
        paste_round_gradient(
            &mut canvas,
            rect,
            20,
            CARD_TOP,
            CARD_BOTTOM,
            GradientDirection::Vertical,
        );

        // Outside the rectangle entirely
        assert_eq!(canvas.get_pixel(5, 50)[3], 0);
        assert_eq!(canvas.get_pixel(95, 95)[3], 0);
        // Inside the rectangle but outside the rounded corner
        assert_eq!(canvas.get_pixel(10, 10)[3], 0);
        assert_eq!(canvas.get_pixel(89, 89)[3], 0);
        // Well inside
        assert_eq!(canvas.get_pixel(50, 50)[3], 255);
        assert_eq!(canvas.get_pixel(12, 50)[3], 255);
        // Gradient color shows through
        assert_eq!(canvas.get_pixel(50, 10)[0], CARD_TOP.red);
    }

    #[test]
    fn round_gradient_replaces_opaque_background() {
        let mut canvas = RgbaImage::from_pixel(40, 40, image::Rgba([0, 0, 0, 255]));
        paste_round_gradient(
            &mut canvas,
            RectPx::new(0, 0, 40, 40),
            8,
            PANEL_START,
            PANEL_END,
            GradientDirection::Diagonal,
        );
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(20, 20).0[3], 255);
        assert_ne!(canvas.get_pixel(20, 20).0, [0, 0, 0, 255]);
    }
}
