//! Shape rasterization over the element tree.
//!
//! The walk is pre-order and depth-first; painting order follows document
//! order exactly, so later siblings and descendants paint over earlier
//! ones. Container tags contribute nothing visually and only recurse.
//! Text and path elements are not rasterized in this version. They are
//! skipped, not errors, but their children still render so container-like
//! custom tags cannot hide descendants.
//!
//! This component never fails: every attribute read degrades to zero or a
//! default color, so a partially-specified shape renders as invisible
//! rather than aborting the export.

use crate::canvas::Canvas;
use crate::color::parse_color;
use crate::element::Element;
use log::trace;

/// Segment count for the circle polygon approximation. A fixed
/// fidelity/performance trade-off, not configurable.
const CIRCLE_SEGMENTS: u32 = 32;

/// Paints every supported shape in the subtree onto the canvas.
pub fn render_element(elem: &Element, canvas: &mut Canvas) {
  match elem.tag.as_str() {
    "rect" => render_rect(elem, canvas),
    "circle" => render_circle(elem, canvas),
    "line" => render_line(elem, canvas),
    // Everything else (the svg root, groups, text, path, and unknown
    // tags) has no direct visual effect and recurses into children.
    // Text and path rasterization are stated gaps, not bugs.
    _ => {
      for child in &elem.children {
        render_element(child, canvas);
      }
    }
  }
}

fn render_rect(elem: &Element, canvas: &mut Canvas) {
  let x = elem.length("x");
  let y = elem.length("y");
  let width = elem.length("width");
  let height = elem.length("height");
  let fill = parse_color(elem.attribute("fill").unwrap_or(""));

  trace!("rect {}x{} at ({}, {})", width, height, x, y);
  canvas.fill_rect(x as f32, y as f32, width as f32, height as f32, fill);
}

fn render_circle(elem: &Element, canvas: &mut Canvas) {
  let cx = elem.length("cx") as f32;
  let cy = elem.length("cy") as f32;
  let r = elem.length("r") as f32;
  let fill = parse_color(elem.attribute("fill").unwrap_or(""));

  trace!("circle r={} at ({}, {})", r, cx, cy);
  canvas.fill_polygon(&circle_polygon(cx, cy, r), fill);
}

fn render_line(elem: &Element, canvas: &mut Canvas) {
  let x1 = elem.length("x1") as f32;
  let y1 = elem.length("y1") as f32;
  let x2 = elem.length("x2") as f32;
  let y2 = elem.length("y2") as f32;
  let stroke = parse_color(elem.attribute("stroke").unwrap_or(""));

  trace!("line ({}, {}) -> ({}, {})", x1, y1, x2, y2);
  canvas.stroke_line(x1, y1, x2, y2, stroke);
}

/// Approximates a circle as a closed polygon of equal-angle segments,
/// starting at the point directly right of the center.
fn circle_polygon(cx: f32, cy: f32, radius: f32) -> Vec<(f32, f32)> {
  let mut points = Vec::with_capacity(CIRCLE_SEGMENTS as usize + 1);
  points.push((cx + radius, cy));

  for i in 1..=CIRCLE_SEGMENTS {
    let angle = i as f32 * std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
    points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
  }

  points
}
