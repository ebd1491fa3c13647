//! Canvas encoding to compressed image formats.
//!
//! PNG uses the codec's default deflate compression. JPEG takes a quality
//! that the export layer has already clamped into 1..=100. tiny-skia stores
//! premultiplied alpha, so pixels are converted back to straight alpha
//! before handing them to the codec; JPEG additionally flattens to RGB.

use crate::error::EncodeError;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Raster output format with its encode parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Png,
  /// JPEG with quality 1-100.
  Jpeg(u8),
}

/// Serializes the pixel buffer into the requested format.
pub fn encode_image(pixmap: &Pixmap, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
  let width = pixmap.width();
  let height = pixmap.height();

  let mut rgba_data = Vec::with_capacity(width as usize * height as usize * 4);
  for pixel in pixmap.pixels() {
    let c = pixel.demultiply();
    rgba_data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
  }

  let mut buffer = Vec::new();
  match format {
    OutputFormat::Png => {
      let img = RgbaImage::from_raw(width, height, rgba_data).ok_or_else(|| {
        EncodeError::EncodeFailed {
          format: "PNG".to_string(),
          reason: "pixel buffer does not match canvas dimensions".to_string(),
        }
      })?;
      img
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| EncodeError::EncodeFailed {
          format: "PNG".to_string(),
          reason: e.to_string(),
        })?;
    }
    OutputFormat::Jpeg(quality) => {
      let rgb_data: Vec<u8> = rgba_data
        .chunks_exact(4)
        .flat_map(|chunk| [chunk[0], chunk[1], chunk[2]])
        .collect();
      let img = RgbImage::from_raw(width, height, rgb_data).ok_or_else(|| {
        EncodeError::EncodeFailed {
          format: "JPEG".to_string(),
          reason: "pixel buffer does not match canvas dimensions".to_string(),
        }
      })?;
      let mut cursor = Cursor::new(&mut buffer);
      let encoder = JpegEncoder::new_with_quality(&mut cursor, quality);
      img
        .write_with_encoder(encoder)
        .map_err(|e| EncodeError::EncodeFailed {
          format: "JPEG".to_string(),
          reason: e.to_string(),
        })?;
    }
  }

  Ok(buffer)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tiny_skia::Color;

  fn solid_pixmap(r: u8, g: u8, b: u8) -> Pixmap {
    let mut pixmap = Pixmap::new(4, 4).expect("pixmap");
    pixmap.fill(Color::from_rgba8(r, g, b, 255));
    pixmap
  }

  #[test]
  fn png_bytes_carry_the_signature_and_round_trip() {
    let pixmap = solid_pixmap(200, 10, 30);
    let bytes = encode_image(&pixmap, OutputFormat::Png).expect("png encode");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (4, 4));
    assert_eq!(decoded.get_pixel(2, 2).0, [200, 10, 30, 255]);
  }

  #[test]
  fn jpeg_bytes_carry_the_start_of_stream_marker() {
    let pixmap = solid_pixmap(0, 128, 0);
    let bytes = encode_image(&pixmap, OutputFormat::Jpeg(90)).expect("jpeg encode");
    assert!(bytes.len() > 3);
    assert_eq!(&bytes[0..3], &[0xFF, 0xD8, 0xFF]);
  }

  #[test]
  fn jpeg_quality_changes_output_bytes() {
    let mut pixmap = Pixmap::new(16, 16).expect("pixmap");
    for (idx, pixel) in pixmap.pixels_mut().iter_mut().enumerate() {
      let x = (idx % 16) as u8;
      let y = (idx / 16) as u8;
      *pixel = tiny_skia::ColorU8::from_rgba(x * 16, y * 16, x * 8 + y * 8, 255).premultiply();
    }

    let low = encode_image(&pixmap, OutputFormat::Jpeg(10)).expect("q10");
    let high = encode_image(&pixmap, OutputFormat::Jpeg(95)).expect("q95");
    assert_ne!(low, high, "quality should affect output bytes");
  }
}
