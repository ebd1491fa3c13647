//! Canvas dimension resolution.
//!
//! Resolution order, first match wins per axis independently:
//! 1. explicit value in the export options (non-zero),
//! 2. `width`/`height` attribute on the root element,
//! 3. third/fourth token of a `viewBox` attribute,
//! 4. fixed 800x600 default.

use crate::element::Element;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Parses a length value, handling an optional `px` or `pt` suffix.
///
/// The number is truncated toward zero. Unparsable input yields 0, which
/// callers treat as "unresolved" rather than an error.
pub fn parse_length(value: &str) -> i32 {
  let s = value.trim();
  let s = s.strip_suffix("px").unwrap_or(s);
  let s = s.strip_suffix("pt").unwrap_or(s);

  match s.parse::<f64>() {
    Ok(n) => n as i32,
    Err(_) => 0,
  }
}

/// Resolves canvas dimensions for the given root element.
///
/// `requested_width`/`requested_height` come from the export options, where
/// 0 means "derive from the document". Never fails: a non-positive resolved
/// axis falls through to the next source and finally to the fixed default,
/// so the returned pair is always strictly positive.
pub fn resolve_dimensions(
  root: &Element,
  requested_width: u32,
  requested_height: u32,
) -> (u32, u32) {
  // Requests above i32::MAX degrade to "unresolved" instead of wrapping.
  let mut width = i32::try_from(requested_width).unwrap_or(0);
  let mut height = i32::try_from(requested_height).unwrap_or(0);

  if width <= 0 {
    if let Some(value) = root.attribute("width") {
      width = parse_length(value);
    }
  }
  if height <= 0 {
    if let Some(value) = root.attribute("height") {
      height = parse_length(value);
    }
  }

  if width <= 0 || height <= 0 {
    if let Some(view_box) = root.attribute("viewBox") {
      let parts: Vec<&str> = view_box.split_whitespace().collect();
      if parts.len() == 4 {
        if width <= 0 {
          width = parse_length(parts[2]);
        }
        if height <= 0 {
          height = parse_length(parts[3]);
        }
      }
    }
  }

  if width <= 0 {
    width = DEFAULT_WIDTH as i32;
  }
  if height <= 0 {
    height = DEFAULT_HEIGHT as i32;
  }

  (width as u32, height as u32)
}
