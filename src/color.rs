//! Fill and stroke color resolution.
//!
//! The resolver never fails: undefined input degrades to a visible default
//! (opaque black) rather than aborting the render, and `none`/empty tokens
//! resolve to fully transparent so the shape is simply skipped.

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl Rgba {
  pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };
  pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
  pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
  pub const RED: Rgba = Rgba::rgb(255, 0, 0);
  pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
  pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);

  /// Creates an opaque color.
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }

  pub fn is_transparent(self) -> bool {
    self.a == 0
  }
}

/// Resolves a color token to an RGBA value.
///
/// Rules, most specific first:
/// - empty string or `none` → fully transparent
/// - `#RRGGBB` → direct channels, alpha 255
/// - `#RGB` → each nibble duplicated (`f` → `ff`)
/// - any other `#` form → channels default to 0 where parsing fails
/// - `white`/`black`/`red`/`green`/`blue` → canonical pure values
/// - anything else → opaque black
pub fn parse_color(value: &str) -> Rgba {
  let s = value.trim();

  if s.is_empty() || s == "none" {
    return Rgba::TRANSPARENT;
  }

  if let Some(hex) = s.strip_prefix('#') {
    return parse_hex(hex);
  }

  match s {
    "white" => Rgba::WHITE,
    "black" => Rgba::BLACK,
    "red" => Rgba::RED,
    "green" => Rgba::GREEN,
    "blue" => Rgba::BLUE,
    _ => Rgba::BLACK,
  }
}

/// Parses the digits after `#`. Segments that fail to parse stay 0.
fn parse_hex(hex: &str) -> Rgba {
  let mut r = 0;
  let mut g = 0;
  let mut b = 0;

  if hex.is_ascii() {
    if hex.len() == 6 {
      r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
      g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
      b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    } else if hex.len() == 3 {
      r = u8::from_str_radix(&hex[0..1].repeat(2), 16).unwrap_or(0);
      g = u8::from_str_radix(&hex[1..2].repeat(2), 16).unwrap_or(0);
      b = u8::from_str_radix(&hex[2..3].repeat(2), 16).unwrap_or(0);
    }
  }

  Rgba { r, g, b, a: 255 }
}
