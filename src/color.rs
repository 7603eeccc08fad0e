//! Colors and the fixed icon palette.

use image::Rgba;
use palette::Srgba;

/// An 8-bit RGBA color.
pub type Color = Srgba<u8>;

// Drop shadow under the card.
pub const SHADOW: Color = Srgba::new(6, 16, 34, 110);

// Outer card: light vertical gradient with a white rim.
pub const CARD_TOP: Color = Srgba::new(245, 249, 255, 255);
pub const CARD_BOTTOM: Color = Srgba::new(208, 217, 231, 255);
pub const CARD_OUTLINE: Color = Srgba::new(255, 255, 255, 220);

// Inner panel: dark navy to teal diagonal with a teal ring.
pub const PANEL_START: Color = Srgba::new(10, 24, 45, 255);
pub const PANEL_END: Color = Srgba::new(6, 53, 66, 255);
pub const PANEL_RING: Color = Srgba::new(82, 239, 205, 235);

pub const GLOW: Color = Srgba::new(46, 214, 186, 70);

pub const WAVE_BASE: Color = Srgba::new(120, 251, 232, 238);
pub const WAVE_HIGHLIGHT: Color = Srgba::new(230, 255, 252, 165);

/// Pulse marker accents, in waveform order: blue, green, yellow-green.
pub const PULSE_ACCENTS: [Color; 3] = [
    Srgba::new(64, 214, 255, 250),
    Srgba::new(46, 231, 170, 250),
    Srgba::new(184, 248, 98, 250),
];
pub const PULSE_SHINE: Color = Srgba::new(255, 255, 255, 155);

/// Linearly interpolates between two colors.
///
/// `t` is clamped to 0.0-1.0. Each channel is truncated toward zero, so
/// `mix(a, b, 0.0) == a` and `mix(a, b, 1.0) == b` exactly.
pub fn mix(c0: Color, c1: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t) as u8 };
    Srgba::new(
        lerp(c0.red, c1.red),
        lerp(c0.green, c1.green),
        lerp(c0.blue, c1.blue),
        lerp(c0.alpha, c1.alpha),
    )
}

/// Converts a palette color into an `image` pixel.
pub fn to_pixel(color: Color) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, color.alpha])
}
