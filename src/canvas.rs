//! Pixel canvas backed by tiny-skia.
//!
//! The canvas wraps a `Pixmap`, fills it with an opaque white background at
//! construction, and exposes the three painting operations the rasterizer
//! needs. All painting composites over existing pixels; rectangle fills run
//! at full coverage (no antialiasing, axis-aligned), while polygon fills and
//! line strokes go through tiny-skia's coverage-based scanline rasterizer
//! for smooth edges.

use crate::color::Rgba;
use crate::error::EncodeError;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

pub struct Canvas {
  pixmap: Pixmap,
}

impl Canvas {
  /// Creates a canvas filled with opaque white.
  pub fn new(width: u32, height: u32) -> Result<Self, EncodeError> {
    let mut pixmap =
      Pixmap::new(width, height).ok_or(EncodeError::CanvasCreationFailed { width, height })?;
    pixmap.fill(Color::WHITE);
    Ok(Self { pixmap })
  }

  pub fn width(&self) -> u32 {
    self.pixmap.width()
  }

  pub fn height(&self) -> u32 {
    self.pixmap.height()
  }

  fn make_paint(color: Rgba, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = anti_alias;
    paint
  }

  /// Fills an axis-aligned rectangle at full coverage.
  ///
  /// A non-positive extent is a no-op, matching the degrade-to-invisible
  /// policy for missing shape attributes.
  pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
    if color.is_transparent() {
      return;
    }
    let Some(rect) = Rect::from_xywh(x, y, width, height) else {
      return;
    };
    let paint = Self::make_paint(color, false);
    self
      .pixmap
      .fill_rect(rect, &paint, Transform::identity(), None);
  }

  /// Fills a closed polygon with coverage-based antialiasing.
  pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba) {
    if color.is_transparent() || points.len() < 3 {
      return;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(points[0].0, points[0].1);
    for &(x, y) in &points[1..] {
      builder.line_to(x, y);
    }
    builder.close();
    let Some(path) = builder.finish() else {
      return;
    };

    let paint = Self::make_paint(color, true);
    self
      .pixmap
      .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
  }

  /// Strokes an antialiased one-pixel-wide line segment.
  pub fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba) {
    if color.is_transparent() {
      return;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(x1, y1);
    builder.line_to(x2, y2);
    let Some(path) = builder.finish() else {
      return;
    };

    let paint = Self::make_paint(color, true);
    let stroke = Stroke {
      width: 1.0,
      ..Stroke::default()
    };
    self
      .pixmap
      .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
  }

  pub fn pixmap(&self) -> &Pixmap {
    &self.pixmap
  }

  pub fn into_pixmap(self) -> Pixmap {
    self.pixmap
  }
}
