//! Error types for rendersvg
//!
//! Three fatal error kinds cover the export pipeline:
//! - Parse errors (no root element in the input document)
//! - Encode errors (canvas allocation or codec failure)
//! - Format errors (unknown format token)
//!
//! Everything below the document level (missing attributes, unparsable
//! lengths, unknown color tokens, unsupported tags) degrades to a default
//! value during rendering and never surfaces here.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.

use thiserror::Error;

/// Result type alias for rendersvg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for rendersvg
///
/// Each variant wraps a more specific error type for that stage of the
/// export pipeline.
#[derive(Error, Debug)]
pub enum Error {
  /// Document parsing error
  #[error("Parse error: {0}")]
  Parse(#[from] ParseError),

  /// Canvas or image encoding error
  #[error("Encode error: {0}")]
  Encode(#[from] EncodeError),

  /// Export format selection error
  #[error("Format error: {0}")]
  Format(#[from] FormatError),
}

/// Errors that occur while parsing an SVG document into an element tree
///
/// Parsing is deliberately lenient: truncated input and unclosed elements
/// still yield a usable partial tree. The only unrecoverable condition is
/// input in which no root element can be identified at all.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
  /// No root element found in the input
  #[error("no SVG root element found")]
  NoRootElement,
}

/// Errors that occur while allocating the canvas or encoding pixels
#[derive(Error, Debug, Clone)]
pub enum EncodeError {
  /// Canvas creation failed
  #[error("Failed to create canvas: {width}x{height}")]
  CanvasCreationFailed { width: u32, height: u32 },

  /// Image encoding failed
  #[error("Failed to encode image as {format}: {reason}")]
  EncodeFailed { format: String, reason: String },
}

/// Errors that occur while selecting an export format
#[derive(Error, Debug, Clone)]
pub enum FormatError {
  /// Unrecognized format token
  #[error("unknown format: {name}")]
  UnknownFormat { name: String },
}
