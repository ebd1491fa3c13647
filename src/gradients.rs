//! Linear and radial gradient definitions.
//!
//! Gradient markup goes into `<defs>` and is referenced from fills and
//! strokes via `url(#id)`. The rasterizer does not resolve gradient fills;
//! these exist for the vector output path only.

use std::fmt::Write;

/// A color stop in a gradient.
#[derive(Debug, Clone)]
pub struct GradientStop {
  /// Percentage or decimal, e.g. `0%`, `50%`, `1.0`
  pub offset: String,
  /// Any color value
  pub color: String,
  /// Emitted only when strictly between 0 and 1
  pub opacity: f64,
}

impl GradientStop {
  pub fn new(offset: &str, color: &str) -> Self {
    Self {
      offset: offset.to_string(),
      color: color.to_string(),
      opacity: 1.0,
    }
  }
}

/// Coordinate system for gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientUnits {
  UserSpaceOnUse,
  ObjectBoundingBox,
}

impl GradientUnits {
  fn as_str(self) -> &'static str {
    match self {
      GradientUnits::UserSpaceOnUse => "userSpaceOnUse",
      GradientUnits::ObjectBoundingBox => "objectBoundingBox",
    }
  }
}

/// How a gradient fills outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientSpreadMethod {
  Pad,
  Reflect,
  Repeat,
}

impl GradientSpreadMethod {
  fn as_str(self) -> &'static str {
    match self {
      GradientSpreadMethod::Pad => "pad",
      GradientSpreadMethod::Reflect => "reflect",
      GradientSpreadMethod::Repeat => "repeat",
    }
  }
}

/// A linear gradient definition. Coordinate fields accept percentages or
/// absolute values and are omitted from output when empty.
#[derive(Debug, Clone, Default)]
pub struct LinearGradientDef {
  pub id: String,
  pub x1: String,
  pub y1: String,
  pub x2: String,
  pub y2: String,
  pub stops: Vec<GradientStop>,
  pub units: Option<GradientUnits>,
  pub spread_method: Option<GradientSpreadMethod>,
}

/// A radial gradient definition. The focal point and radius are optional.
#[derive(Debug, Clone, Default)]
pub struct RadialGradientDef {
  pub id: String,
  pub cx: String,
  pub cy: String,
  pub r: String,
  pub fx: String,
  pub fy: String,
  pub fr: String,
  pub stops: Vec<GradientStop>,
  pub units: Option<GradientUnits>,
  pub spread_method: Option<GradientSpreadMethod>,
}

fn write_attr(out: &mut String, name: &str, value: &str) {
  if !value.is_empty() {
    let _ = write!(out, r#" {}="{}""#, name, value);
  }
}

fn write_stops(out: &mut String, stops: &[GradientStop]) {
  for stop in stops {
    let _ = write!(
      out,
      r#"  <stop offset="{}" stop-color="{}""#,
      stop.offset, stop.color
    );
    if stop.opacity > 0.0 && stop.opacity < 1.0 {
      let _ = write!(out, r#" stop-opacity="{:.2}""#, stop.opacity);
    }
    out.push_str("/>\n");
  }
}

/// Renders a linear gradient definition for use in `<defs>`.
pub fn linear_gradient(def: &LinearGradientDef) -> String {
  let mut out = String::new();
  let _ = write!(out, r#"<linearGradient id="{}""#, def.id);

  write_attr(&mut out, "x1", &def.x1);
  write_attr(&mut out, "y1", &def.y1);
  write_attr(&mut out, "x2", &def.x2);
  write_attr(&mut out, "y2", &def.y2);
  if let Some(units) = def.units {
    write_attr(&mut out, "gradientUnits", units.as_str());
  }
  if let Some(spread) = def.spread_method {
    write_attr(&mut out, "spreadMethod", spread.as_str());
  }

  out.push_str(">\n");
  write_stops(&mut out, &def.stops);
  out.push_str("</linearGradient>");
  out
}

/// Renders a radial gradient definition for use in `<defs>`.
pub fn radial_gradient(def: &RadialGradientDef) -> String {
  let mut out = String::new();
  let _ = write!(out, r#"<radialGradient id="{}""#, def.id);

  write_attr(&mut out, "cx", &def.cx);
  write_attr(&mut out, "cy", &def.cy);
  write_attr(&mut out, "r", &def.r);
  write_attr(&mut out, "fx", &def.fx);
  write_attr(&mut out, "fy", &def.fy);
  write_attr(&mut out, "fr", &def.fr);
  if let Some(units) = def.units {
    write_attr(&mut out, "gradientUnits", units.as_str());
  }
  if let Some(spread) = def.spread_method {
    write_attr(&mut out, "spreadMethod", spread.as_str());
  }

  out.push_str(">\n");
  write_stops(&mut out, &def.stops);
  out.push_str("</radialGradient>");
  out
}

/// Creates a `url()` reference to a gradient for fill or stroke values.
pub fn gradient_url(id: &str) -> String {
  format!("url(#{})", id)
}

/// Creates a two-color linear gradient along one of the eight recognized
/// axis or diagonal angles (degrees). Unrecognized angles run left to
/// right.
pub fn simple_linear_gradient(id: &str, start_color: &str, end_color: &str, angle: f64) -> String {
  let (x1, y1, x2, y2) = if angle == 90.0 {
    ("0%", "100%", "0%", "0%")
  } else if angle == 180.0 {
    ("100%", "0%", "0%", "0%")
  } else if angle == 270.0 {
    ("0%", "0%", "0%", "100%")
  } else if angle == 45.0 {
    ("0%", "100%", "100%", "0%")
  } else if angle == 135.0 {
    ("100%", "100%", "0%", "0%")
  } else if angle == 225.0 {
    ("100%", "0%", "0%", "100%")
  } else if angle == 315.0 {
    ("0%", "0%", "100%", "100%")
  } else {
    ("0%", "0%", "100%", "0%")
  };

  linear_gradient(&LinearGradientDef {
    id: id.to_string(),
    x1: x1.to_string(),
    y1: y1.to_string(),
    x2: x2.to_string(),
    y2: y2.to_string(),
    stops: vec![
      GradientStop::new("0%", start_color),
      GradientStop::new("100%", end_color),
    ],
    ..LinearGradientDef::default()
  })
}

/// Creates a two-color radial gradient centered on the bounding box.
pub fn simple_radial_gradient(id: &str, center_color: &str, edge_color: &str) -> String {
  radial_gradient(&RadialGradientDef {
    id: id.to_string(),
    cx: "50%".to_string(),
    cy: "50%".to_string(),
    r: "50%".to_string(),
    stops: vec![
      GradientStop::new("0%", center_color),
      GradientStop::new("100%", edge_color),
    ],
    ..RadialGradientDef::default()
  })
}
