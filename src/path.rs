//! Fluent builder for SVG path data.
//!
//! Pure string assembly: commands are formatted with two decimal places and
//! joined with single spaces. The free functions below cover the common
//! shape patterns (rectangles, circles, polylines, smoothed lines and
//! areas) on top of the builder.

use std::fmt::Write;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Fluent API for constructing SVG path data.
///
/// ```
/// use rendersvg::PathBuilder;
///
/// let d = PathBuilder::new()
///   .move_to(10.0, 10.0)
///   .line_to(90.0, 90.0)
///   .close()
///   .build();
/// assert_eq!(d, "M 10.00 10.00 L 90.00 90.00 Z");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
  commands: String,
}

impl PathBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Moves the pen without drawing.
  pub fn move_to(mut self, x: f64, y: f64) -> Self {
    let _ = write!(self.commands, "M {:.2} {:.2} ", x, y);
    self
  }

  /// Draws a line from the current point.
  pub fn line_to(mut self, x: f64, y: f64) -> Self {
    let _ = write!(self.commands, "L {:.2} {:.2} ", x, y);
    self
  }

  pub fn horizontal_line_to(mut self, x: f64) -> Self {
    let _ = write!(self.commands, "H {:.2} ", x);
    self
  }

  pub fn vertical_line_to(mut self, y: f64) -> Self {
    let _ = write!(self.commands, "V {:.2} ", y);
    self
  }

  /// Draws a cubic Bézier curve.
  pub fn curve_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
    let _ = write!(
      self.commands,
      "C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2} ",
      x1, y1, x2, y2, x, y
    );
    self
  }

  /// Draws a smooth cubic Bézier curve (first control point mirrors the
  /// previous one).
  pub fn smooth_curve_to(mut self, x2: f64, y2: f64, x: f64, y: f64) -> Self {
    let _ = write!(self.commands, "S {:.2} {:.2}, {:.2} {:.2} ", x2, y2, x, y);
    self
  }

  /// Draws a quadratic Bézier curve.
  pub fn quadratic_curve_to(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
    let _ = write!(self.commands, "Q {:.2} {:.2}, {:.2} {:.2} ", x1, y1, x, y);
    self
  }

  pub fn smooth_quadratic_curve_to(mut self, x: f64, y: f64) -> Self {
    let _ = write!(self.commands, "T {:.2} {:.2} ", x, y);
    self
  }

  /// Draws an elliptical arc. `sweep` true selects the clockwise arc.
  pub fn arc_to(
    mut self,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    x: f64,
    y: f64,
  ) -> Self {
    let _ = write!(
      self.commands,
      "A {:.2} {:.2} {:.2} {} {} {:.2} {:.2} ",
      rx, ry, x_axis_rotation, large_arc as u8, sweep as u8, x, y
    );
    self
  }

  /// Closes the current subpath.
  pub fn close(mut self) -> Self {
    self.commands.push_str("Z ");
    self
  }

  /// Returns the accumulated path data, trimmed.
  pub fn build(&self) -> String {
    self.commands.trim().to_string()
  }

  /// Clears the builder for reuse.
  pub fn reset(&mut self) {
    self.commands.clear();
  }
}

/// Creates a rectangular path.
pub fn rect_path(x: f64, y: f64, width: f64, height: f64) -> String {
  PathBuilder::new()
    .move_to(x, y)
    .horizontal_line_to(x + width)
    .vertical_line_to(y + height)
    .horizontal_line_to(x)
    .close()
    .build()
}

/// Creates a rounded rectangular path. A zero `ry` falls back to `rx`.
pub fn rounded_rect_path(x: f64, y: f64, width: f64, height: f64, rx: f64, ry: f64) -> String {
  let ry = if ry == 0.0 { rx } else { ry };

  PathBuilder::new()
    .move_to(x + rx, y)
    .horizontal_line_to(x + width - rx)
    .arc_to(rx, ry, 0.0, false, true, x + width, y + ry)
    .vertical_line_to(y + height - ry)
    .arc_to(rx, ry, 0.0, false, true, x + width - rx, y + height)
    .horizontal_line_to(x + rx)
    .arc_to(rx, ry, 0.0, false, true, x, y + height - ry)
    .vertical_line_to(y + ry)
    .arc_to(rx, ry, 0.0, false, true, x + rx, y)
    .close()
    .build()
}

/// Creates a circular path from two half-circle arcs.
pub fn circle_path(cx: f64, cy: f64, r: f64) -> String {
  PathBuilder::new()
    .move_to(cx - r, cy)
    .arc_to(r, r, 0.0, false, true, cx + r, cy)
    .arc_to(r, r, 0.0, false, true, cx - r, cy)
    .close()
    .build()
}

/// Creates an elliptical path from two half-ellipse arcs.
pub fn ellipse_path(cx: f64, cy: f64, rx: f64, ry: f64) -> String {
  PathBuilder::new()
    .move_to(cx - rx, cy)
    .arc_to(rx, ry, 0.0, false, true, cx + rx, cy)
    .arc_to(rx, ry, 0.0, false, true, cx - rx, cy)
    .close()
    .build()
}

/// Creates an open path through the given points.
pub fn polyline_path(points: &[Point]) -> String {
  let Some(first) = points.first() else {
    return String::new();
  };

  let mut builder = PathBuilder::new().move_to(first.x, first.y);
  for p in &points[1..] {
    builder = builder.line_to(p.x, p.y);
  }
  builder.build()
}

/// Creates a closed path through the given points.
pub fn polygon_path(points: &[Point]) -> String {
  let Some(first) = points.first() else {
    return String::new();
  };

  let mut builder = PathBuilder::new().move_to(first.x, first.y);
  for p in &points[1..] {
    builder = builder.line_to(p.x, p.y);
  }
  builder.close().build()
}

/// Creates a smooth curve through points using cubic Bézier segments.
///
/// `tension` controls how tight the curve is (0 = straight lines, 1 = very
/// curved). Fewer than two points yields an empty path; exactly two yields
/// a straight polyline.
pub fn smooth_line_path(points: &[Point], tension: f64) -> String {
  if points.len() < 2 {
    return String::new();
  }
  if points.len() == 2 {
    return polyline_path(points);
  }

  let mut builder = PathBuilder::new().move_to(points[0].x, points[0].y);
  builder = add_smooth_segments(builder, points, tension);
  builder.build()
}

/// Creates a filled area path: the points joined by straight lines, closed
/// down to a horizontal baseline.
pub fn area_path(points: &[Point], baseline_y: f64) -> String {
  let (Some(first), Some(last)) = (points.first(), points.last()) else {
    return String::new();
  };

  let mut builder = PathBuilder::new()
    .move_to(first.x, baseline_y)
    .line_to(first.x, first.y);
  for p in &points[1..] {
    builder = builder.line_to(p.x, p.y);
  }
  builder.line_to(last.x, baseline_y).close().build()
}

/// Smooth-curve variant of [`area_path`].
pub fn smooth_area_path(points: &[Point], baseline_y: f64, tension: f64) -> String {
  let (Some(first), Some(last)) = (points.first(), points.last()) else {
    return String::new();
  };

  let mut builder = PathBuilder::new()
    .move_to(first.x, baseline_y)
    .line_to(first.x, first.y);
  builder = add_smooth_segments(builder, points, tension);
  builder.line_to(last.x, baseline_y).close().build()
}

/// Appends cubic segments through `points`, control points derived from
/// the neighboring points scaled by `tension`.
fn add_smooth_segments(mut builder: PathBuilder, points: &[Point], tension: f64) -> PathBuilder {
  for i in 0..points.len() - 1 {
    let (cp1x, cp1y) = if i == 0 {
      (
        points[i].x + (points[i + 1].x - points[i].x) * tension,
        points[i].y + (points[i + 1].y - points[i].y) * tension,
      )
    } else {
      (
        points[i].x + (points[i + 1].x - points[i - 1].x) * tension,
        points[i].y + (points[i + 1].y - points[i - 1].y) * tension,
      )
    };

    let (cp2x, cp2y) = if i == points.len() - 2 {
      (
        points[i + 1].x - (points[i + 1].x - points[i].x) * tension,
        points[i + 1].y - (points[i + 1].y - points[i].y) * tension,
      )
    } else {
      (
        points[i + 1].x - (points[i + 2].x - points[i].x) * tension,
        points[i + 1].y - (points[i + 2].y - points[i].y) * tension,
      )
    };

    builder = builder.curve_to(cp1x, cp1y, cp2x, cp2y, points[i + 1].x, points[i + 1].y);
  }
  builder
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn commands_format_with_two_decimals() {
    let d = PathBuilder::new()
      .move_to(10.0, 20.0)
      .line_to(30.5, 40.25)
      .build();
    assert_eq!(d, "M 10.00 20.00 L 30.50 40.25");
  }

  #[test]
  fn all_command_letters_render() {
    let d = PathBuilder::new()
      .move_to(0.0, 0.0)
      .horizontal_line_to(10.0)
      .vertical_line_to(10.0)
      .curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
      .smooth_curve_to(7.0, 8.0, 9.0, 10.0)
      .quadratic_curve_to(1.0, 1.0, 2.0, 2.0)
      .smooth_quadratic_curve_to(3.0, 3.0)
      .arc_to(5.0, 5.0, 0.0, false, true, 4.0, 4.0)
      .close()
      .build();
    for letter in ["M", "H", "V", "C", "S", "Q", "T", "A", "Z"] {
      assert!(d.contains(letter), "missing {letter} in {d}");
    }
    assert!(d.contains("A 5.00 5.00 0.00 0 1 4.00 4.00"));
  }

  #[test]
  fn reset_clears_accumulated_commands() {
    let mut builder = PathBuilder::new().move_to(1.0, 1.0);
    builder.reset();
    assert_eq!(builder.build(), "");
  }

  #[test]
  fn rect_path_closes_back_to_start() {
    let d = rect_path(0.0, 0.0, 10.0, 5.0);
    assert_eq!(d, "M 0.00 0.00 H 10.00 V 5.00 H 0.00 Z");
  }

  #[test]
  fn rounded_rect_defaults_ry_to_rx() {
    let with_ry = rounded_rect_path(0.0, 0.0, 20.0, 10.0, 2.0, 2.0);
    let without_ry = rounded_rect_path(0.0, 0.0, 20.0, 10.0, 2.0, 0.0);
    assert_eq!(with_ry, without_ry);
  }

  #[test]
  fn circle_path_uses_two_arcs() {
    let d = circle_path(50.0, 50.0, 10.0);
    assert_eq!(d.matches('A').count(), 2);
    assert!(d.starts_with("M 40.00 50.00"));
    assert!(d.ends_with("Z"));
  }

  #[test]
  fn polyline_and_polygon_paths() {
    let points = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)];
    let open = polyline_path(&points);
    let closed = polygon_path(&points);
    assert!(!open.ends_with('Z'));
    assert!(closed.ends_with('Z'));
    assert!(open.contains("L 10.00 0.00"));
    assert_eq!(polyline_path(&[]), "");
    assert_eq!(polygon_path(&[]), "");
  }

  #[test]
  fn smooth_line_path_edge_cases() {
    assert_eq!(smooth_line_path(&[], 0.3), "");
    assert_eq!(smooth_line_path(&[Point::new(1.0, 1.0)], 0.3), "");

    let two = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    assert_eq!(smooth_line_path(&two, 0.3), polyline_path(&two));

    let three = [Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0)];
    let d = smooth_line_path(&three, 0.3);
    assert_eq!(d.matches('C').count(), 2);
  }

  #[test]
  fn area_paths_close_down_to_the_baseline() {
    let points = [Point::new(0.0, 5.0), Point::new(10.0, 2.0)];
    let d = area_path(&points, 20.0);
    assert!(d.starts_with("M 0.00 20.00"));
    assert!(d.contains("L 10.00 20.00"));
    assert!(d.ends_with('Z'));
    assert_eq!(area_path(&[], 20.0), "");

    let smooth = smooth_area_path(
      &[Point::new(0.0, 5.0), Point::new(5.0, 2.0), Point::new(10.0, 5.0)],
      20.0,
      0.3,
    );
    assert!(smooth.starts_with("M 0.00 20.00"));
    assert!(smooth.contains('C'));
    assert!(smooth.ends_with('Z'));
  }
}
