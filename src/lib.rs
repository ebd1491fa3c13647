//! SVG markup helpers and raster export.
//!
//! The library has two halves:
//!
//! - **Markup generation**: a fluent [`PathBuilder`] for path data plus
//!   marker and gradient definition helpers. Pure string assembly for the
//!   vector output path.
//! - **Raster export**: [`export`] parses an SVG document into a generic
//!   element tree, paints the supported shape subset onto an RGBA canvas,
//!   and encodes the result as PNG or JPEG. SVG format is a byte-identical
//!   passthrough.
//!
//! # Export pipeline
//!
//! 1. **Parse**: SVG text → [`Element`] tree
//! 2. **Resolve**: canvas dimensions from options, root attributes, or viewBox
//! 3. **Paint**: rect/circle/line onto a white canvas, document order
//! 4. **Encode**: canvas → PNG/JPEG bytes
//!
//! Rendering is best-effort: missing or unparsable shape attributes degrade
//! to zero/default values rather than failing the export. Only a missing
//! root element, an encoder failure, or an unknown format token are fatal.

pub mod canvas;
pub mod color;
pub mod dimensions;
pub mod element;
pub mod error;
pub mod export;
pub mod gradients;
pub mod image_output;
pub mod markers;
pub mod path;
pub mod raster;
pub mod style;

pub use color::Rgba;
pub use element::Element;
pub use error::{EncodeError, Error, FormatError, ParseError, Result};
pub use export::{export, ExportFormat, ExportOptions};
pub use path::{PathBuilder, Point};
pub use style::Style;
