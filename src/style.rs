//! Presentation attribute assembly for generated markup.

use std::fmt::Write;

/// Shape presentation attributes. Unset fields are omitted from output.
#[derive(Debug, Clone, Default)]
pub struct Style {
  pub fill: Option<String>,
  pub stroke: Option<String>,
  pub stroke_width: Option<f64>,
  pub opacity: Option<f64>,
}

impl Style {
  /// A fill-only style.
  pub fn filled(color: &str) -> Self {
    Self {
      fill: Some(color.to_string()),
      ..Self::default()
    }
  }

  /// A stroke-only style.
  pub fn stroked(color: &str, width: f64) -> Self {
    Self {
      stroke: Some(color.to_string()),
      stroke_width: Some(width),
      ..Self::default()
    }
  }

  /// Formats the style as attribute text, each attribute preceded by a
  /// space so the result can be appended directly after a tag name.
  pub fn to_attributes(&self) -> String {
    let mut out = String::new();
    if let Some(fill) = &self.fill {
      let _ = write!(out, r#" fill="{}""#, fill);
    }
    if let Some(stroke) = &self.stroke {
      let _ = write!(out, r#" stroke="{}""#, stroke);
    }
    if let Some(width) = self.stroke_width {
      let _ = write!(out, r#" stroke-width="{}""#, width);
    }
    if let Some(opacity) = self.opacity {
      let _ = write!(out, r#" opacity="{}""#, opacity);
    }
    out
  }
}
