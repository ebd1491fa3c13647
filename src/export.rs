//! Export entry point and format selection.
//!
//! [`export`] is a pure function from (SVG text, options) to output bytes.
//! SVG format returns the input verbatim with no parsing at all; the raster
//! formats run the full parse → resolve → paint → encode pipeline. Every
//! call allocates its own tree and canvas and shares nothing, so concurrent
//! calls need no synchronization.

use crate::canvas::Canvas;
use crate::dimensions::resolve_dimensions;
use crate::element::parse_document;
use crate::error::{FormatError, Result};
use crate::image_output::{encode_image, OutputFormat};
use crate::raster::render_element;
use log::debug;
use std::str::FromStr;

/// Export target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
  /// SVG passthrough: input returned unchanged
  Svg,
  /// Lossless raster
  Png,
  /// Lossy raster
  Jpeg,
}

impl ExportFormat {
  /// Returns the MIME type for this format.
  pub fn mime_type(self) -> &'static str {
    match self {
      ExportFormat::Svg => "image/svg+xml",
      ExportFormat::Png => "image/png",
      ExportFormat::Jpeg => "image/jpeg",
    }
  }

  /// Returns the canonical file extension, dot included.
  pub fn file_extension(self) -> &'static str {
    match self {
      ExportFormat::Svg => ".svg",
      ExportFormat::Png => ".png",
      ExportFormat::Jpeg => ".jpg",
    }
  }
}

impl FromStr for ExportFormat {
  type Err = FormatError;

  /// Case-insensitive; accepts `jpeg` and `jpg` as the same format.
  fn from_str(s: &str) -> std::result::Result<Self, FormatError> {
    match s.trim().to_ascii_lowercase().as_str() {
      "svg" => Ok(ExportFormat::Svg),
      "png" => Ok(ExportFormat::Png),
      "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
      other => Err(FormatError::UnknownFormat {
        name: other.to_string(),
      }),
    }
  }
}

/// Export settings.
#[derive(Debug, Clone)]
pub struct ExportOptions {
  pub format: ExportFormat,
  /// Raster width; 0 derives it from the document
  pub width: u32,
  /// Raster height; 0 derives it from the document
  pub height: u32,
  /// JPEG quality; 0 means "use the default", out-of-range values clamp
  /// into 1..=100
  pub quality: i32,
  /// Dots per inch. Reserved for physical-unit scaling; unused by the
  /// current rasterizer.
  pub dpi: u32,
}

impl Default for ExportOptions {
  fn default() -> Self {
    Self {
      format: ExportFormat::Svg,
      width: 0,
      height: 0,
      quality: 90,
      dpi: 96,
    }
  }
}

const DEFAULT_JPEG_QUALITY: i32 = 90;

fn clamp_quality(quality: i32) -> u8 {
  let quality = if quality == 0 {
    DEFAULT_JPEG_QUALITY
  } else {
    quality
  };
  quality.clamp(1, 100) as u8
}

/// Converts SVG text to the requested format.
///
/// # Errors
///
/// Fails when no root element can be found in the input (raster formats
/// only) or when the encoder rejects the finished pixel buffer.
pub fn export(svg_data: &str, options: &ExportOptions) -> Result<Vec<u8>> {
  let format = match options.format {
    ExportFormat::Svg => return Ok(svg_data.as_bytes().to_vec()),
    ExportFormat::Png => OutputFormat::Png,
    ExportFormat::Jpeg => OutputFormat::Jpeg(clamp_quality(options.quality)),
  };

  let root = parse_document(svg_data)?;
  let (width, height) = resolve_dimensions(&root, options.width, options.height);
  debug!("rasterizing {}x{} as {:?}", width, height, options.format);

  let mut canvas = Canvas::new(width, height)?;
  render_element(&root, &mut canvas);

  Ok(encode_image(&canvas.into_pixmap(), format)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_parsing_is_case_insensitive() {
    assert_eq!("svg".parse::<ExportFormat>().unwrap(), ExportFormat::Svg);
    assert_eq!("SVG".parse::<ExportFormat>().unwrap(), ExportFormat::Svg);
    assert_eq!("Png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
    assert_eq!("jpeg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
    assert_eq!("JPG".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
  }

  #[test]
  fn unknown_format_tokens_are_rejected() {
    assert!(matches!(
      "bmp".parse::<ExportFormat>(),
      Err(FormatError::UnknownFormat { .. })
    ));
    assert!(matches!(
      "".parse::<ExportFormat>(),
      Err(FormatError::UnknownFormat { .. })
    ));
  }

  #[test]
  fn mime_types_and_extensions() {
    assert_eq!(ExportFormat::Svg.mime_type(), "image/svg+xml");
    assert_eq!(ExportFormat::Png.mime_type(), "image/png");
    assert_eq!(ExportFormat::Jpeg.mime_type(), "image/jpeg");
    assert_eq!(ExportFormat::Svg.file_extension(), ".svg");
    assert_eq!(ExportFormat::Png.file_extension(), ".png");
    assert_eq!(ExportFormat::Jpeg.file_extension(), ".jpg");
  }

  #[test]
  fn quality_zero_substitutes_the_default() {
    assert_eq!(clamp_quality(0), 90);
  }

  #[test]
  fn quality_clamps_into_range() {
    assert_eq!(clamp_quality(150), 100);
    assert_eq!(clamp_quality(-5), 1);
    assert_eq!(clamp_quality(1), 1);
    assert_eq!(clamp_quality(100), 100);
    assert_eq!(clamp_quality(55), 55);
  }

  #[test]
  fn default_options_are_svg_passthrough() {
    let options = ExportOptions::default();
    assert_eq!(options.format, ExportFormat::Svg);
    assert_eq!(options.quality, 90);
    assert_eq!(options.dpi, 96);
    assert_eq!(options.width, 0);
    assert_eq!(options.height, 0);
  }
}
