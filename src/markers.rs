//! Marker definitions and marker-carrying element emitters.
//!
//! Markers are `<defs>` content referenced from shapes via `url(#id)`.
//! Everything here is string assembly for the vector output path; the
//! rasterizer ignores marker attributes entirely.

use crate::path::Point;
use crate::style::Style;
use std::fmt::Write;

/// Coordinate system for marker dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerUnits {
  StrokeWidth,
  UserSpaceOnUse,
}

impl MarkerUnits {
  fn as_str(self) -> &'static str {
    match self {
      MarkerUnits::StrokeWidth => "strokeWidth",
      MarkerUnits::UserSpaceOnUse => "userSpaceOnUse",
    }
  }
}

/// Marker orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerOrient {
  Auto,
  AutoStartReverse,
}

impl MarkerOrient {
  fn as_str(self) -> &'static str {
    match self {
      MarkerOrient::Auto => "auto",
      MarkerOrient::AutoStartReverse => "auto-start-reverse",
    }
  }
}

/// A marker definition for use in `<defs>`.
#[derive(Debug, Clone, Default)]
pub struct MarkerDef {
  pub id: String,
  /// e.g. `0 0 10 10`; omitted when empty
  pub view_box: String,
  pub ref_x: f64,
  pub ref_y: f64,
  /// Omitted when not positive
  pub marker_width: f64,
  /// Omitted when not positive
  pub marker_height: f64,
  pub orient: Option<MarkerOrient>,
  pub units: Option<MarkerUnits>,
  /// SVG content inside the marker
  pub content: String,
}

/// Renders a marker definition to markup.
pub fn marker(def: &MarkerDef) -> String {
  let mut out = String::new();
  let _ = write!(out, r#"<marker id="{}""#, def.id);

  if !def.view_box.is_empty() {
    let _ = write!(out, r#" viewBox="{}""#, def.view_box);
  }

  let _ = write!(out, r#" refX="{:.2}" refY="{:.2}""#, def.ref_x, def.ref_y);

  if def.marker_width > 0.0 {
    let _ = write!(out, r#" markerWidth="{:.2}""#, def.marker_width);
  }
  if def.marker_height > 0.0 {
    let _ = write!(out, r#" markerHeight="{:.2}""#, def.marker_height);
  }
  if let Some(orient) = def.orient {
    let _ = write!(out, r#" orient="{}""#, orient.as_str());
  }
  if let Some(units) = def.units {
    let _ = write!(out, r#" markerUnits="{}""#, units.as_str());
  }

  out.push_str(">\n");
  out.push_str(&def.content);
  out.push_str("\n</marker>");
  out
}

/// Creates a `url()` reference to a marker.
pub fn marker_url(id: &str) -> String {
  format!("url(#{})", id)
}

fn preset(id: &str, ref_x: f64, ref_y: f64, size: f64, content: String) -> String {
  marker(&MarkerDef {
    id: id.to_string(),
    view_box: "0 0 10 10".to_string(),
    ref_x,
    ref_y,
    marker_width: size,
    marker_height: size,
    orient: Some(MarkerOrient::Auto),
    content,
    ..MarkerDef::default()
  })
}

/// A simple arrowhead pointing along the path direction.
pub fn arrow_marker(id: &str, color: &str) -> String {
  let content = format!(r#"<path d="M 0 0 L 10 5 L 0 10 Z" fill="{}"/>"#, color);
  preset(id, 10.0, 5.0, 6.0, content)
}

pub fn circle_marker(id: &str, color: &str) -> String {
  let content = format!(r#"<circle cx="5" cy="5" r="4" fill="{}"/>"#, color);
  preset(id, 5.0, 5.0, 5.0, content)
}

pub fn square_marker(id: &str, color: &str) -> String {
  let content = format!(r#"<rect x="1" y="1" width="8" height="8" fill="{}"/>"#, color);
  preset(id, 5.0, 5.0, 5.0, content)
}

pub fn diamond_marker(id: &str, color: &str) -> String {
  let content = format!(r#"<path d="M 5 1 L 9 5 L 5 9 L 1 5 Z" fill="{}"/>"#, color);
  preset(id, 5.0, 5.0, 5.0, content)
}

pub fn triangle_marker(id: &str, color: &str) -> String {
  let content = format!(r#"<path d="M 5 1 L 9 9 L 1 9 Z" fill="{}"/>"#, color);
  preset(id, 5.0, 9.0, 5.0, content)
}

pub fn cross_marker(id: &str, color: &str, stroke_width: f64) -> String {
  let content = format!(
    r#"<path d="M 5 1 L 5 9 M 1 5 L 9 5" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
    color, stroke_width
  );
  preset(id, 5.0, 5.0, 5.0, content)
}

pub fn x_marker(id: &str, color: &str, stroke_width: f64) -> String {
  let content = format!(
    r#"<path d="M 2 2 L 8 8 M 8 2 L 2 8" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
    color, stroke_width
  );
  preset(id, 5.0, 5.0, 5.0, content)
}

/// A small dot, sized for data points.
pub fn dot_marker(id: &str, color: &str, radius: f64) -> String {
  let content = format!(r#"<circle cx="5" cy="5" r="{:.1}" fill="{}"/>"#, radius, color);
  preset(id, 5.0, 5.0, 4.0, content)
}

/// Style attributes plus any marker references.
fn apply_markers(
  style: &Style,
  marker_start: Option<&str>,
  marker_mid: Option<&str>,
  marker_end: Option<&str>,
) -> String {
  let mut attrs = style.to_attributes();
  if let Some(url) = marker_start {
    let _ = write!(attrs, r#" marker-start="{}""#, url);
  }
  if let Some(url) = marker_mid {
    let _ = write!(attrs, r#" marker-mid="{}""#, url);
  }
  if let Some(url) = marker_end {
    let _ = write!(attrs, r#" marker-end="{}""#, url);
  }
  attrs
}

/// Renders a path element with marker references.
pub fn path_with_markers(
  d: &str,
  style: &Style,
  marker_start: Option<&str>,
  marker_mid: Option<&str>,
  marker_end: Option<&str>,
) -> String {
  let attrs = apply_markers(style, marker_start, marker_mid, marker_end);
  format!(r#"<path d="{}"{}/>"#, d, attrs)
}

/// Renders a line element with marker references.
pub fn line_with_markers(
  x1: f64,
  y1: f64,
  x2: f64,
  y2: f64,
  style: &Style,
  marker_start: Option<&str>,
  marker_end: Option<&str>,
) -> String {
  let attrs = apply_markers(style, marker_start, None, marker_end);
  format!(
    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
    x1, y1, x2, y2, attrs
  )
}

/// Renders a polyline element with marker references.
pub fn polyline_with_markers(
  points: &[Point],
  style: &Style,
  marker_start: Option<&str>,
  marker_mid: Option<&str>,
  marker_end: Option<&str>,
) -> String {
  if points.is_empty() {
    return String::new();
  }

  let mut point_list = String::new();
  for (i, p) in points.iter().enumerate() {
    if i > 0 {
      point_list.push(' ');
    }
    let _ = write!(point_list, "{:.2},{:.2}", p.x, p.y);
  }

  let attrs = apply_markers(style, marker_start, marker_mid, marker_end);
  format!(r#"<polyline points="{}"{}/>"#, point_list, attrs)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn marker_renders_required_and_optional_attributes() {
    let markup = marker(&MarkerDef {
      id: "tip".to_string(),
      view_box: "0 0 10 10".to_string(),
      ref_x: 10.0,
      ref_y: 5.0,
      marker_width: 6.0,
      marker_height: 6.0,
      orient: Some(MarkerOrient::Auto),
      units: Some(MarkerUnits::StrokeWidth),
      content: "<path/>".to_string(),
    });
    assert!(markup.starts_with(r#"<marker id="tip" viewBox="0 0 10 10""#));
    assert!(markup.contains(r#"refX="10.00" refY="5.00""#));
    assert!(markup.contains(r#"markerWidth="6.00""#));
    assert!(markup.contains(r#"orient="auto""#));
    assert!(markup.contains(r#"markerUnits="strokeWidth""#));
    assert!(markup.ends_with("</marker>"));
  }

  #[test]
  fn zero_sized_dimensions_are_omitted() {
    let markup = marker(&MarkerDef {
      id: "m".to_string(),
      ..MarkerDef::default()
    });
    assert!(!markup.contains("markerWidth"));
    assert!(!markup.contains("markerHeight"));
    assert!(!markup.contains("viewBox"));
    assert!(!markup.contains("orient"));
  }

  #[test]
  fn marker_url_references_the_id() {
    assert_eq!(marker_url("arrow"), "url(#arrow)");
  }

  #[test]
  fn presets_embed_id_color_and_auto_orientation() {
    for markup in [
      arrow_marker("m1", "#ff0000"),
      circle_marker("m1", "#ff0000"),
      square_marker("m1", "#ff0000"),
      diamond_marker("m1", "#ff0000"),
      triangle_marker("m1", "#ff0000"),
      dot_marker("m1", "#ff0000", 2.0),
    ] {
      assert!(markup.contains(r#"id="m1""#));
      assert!(markup.contains("#ff0000"));
      assert!(markup.contains(r#"orient="auto""#));
    }

    let cross = cross_marker("m2", "black", 1.5);
    assert!(cross.contains(r#"stroke-width="1.5""#));
    let x = x_marker("m2", "black", 1.5);
    assert!(x.contains("stroke-linecap"));
  }

  #[test]
  fn line_with_markers_carries_references() {
    let markup = line_with_markers(
      0.0,
      0.0,
      10.0,
      10.0,
      &Style::stroked("black", 1.0),
      Some("url(#a)"),
      Some("url(#b)"),
    );
    assert!(markup.contains(r#"marker-start="url(#a)""#));
    assert!(markup.contains(r#"marker-end="url(#b)""#));
    assert!(!markup.contains("marker-mid"));
    assert!(markup.contains(r#"x2="10.00""#));
  }

  #[test]
  fn polyline_with_markers_formats_points() {
    let points = [Point::new(0.0, 0.0), Point::new(5.0, 2.5)];
    let markup = polyline_with_markers(
      &points,
      &Style::default(),
      None,
      Some("url(#mid)"),
      None,
    );
    assert!(markup.contains(r#"points="0.00,0.00 5.00,2.50""#));
    assert!(markup.contains(r#"marker-mid="url(#mid)""#));
    assert_eq!(polyline_with_markers(&[], &Style::default(), None, None, None), "");
  }
}
