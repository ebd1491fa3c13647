//! Generic attributed element tree and the lenient document parser.
//!
//! The parser is a single forward scan over the token stream with an
//! explicit open-element stack. It performs no schema validation: unknown
//! tags and attributes are preserved verbatim, and a truncated document
//! (unclosed elements, tokenizer error mid-stream) still yields the partial
//! tree built so far. The producer of the input is typically this crate's
//! own markup helpers, not an arbitrary source, so leniency beats strictness
//! here. The only fatal condition is input with no start tag at all.

use crate::error::ParseError;
use std::collections::HashMap;
use xmlparser::{ElementEnd, Token, Tokenizer};

/// A node in the parsed document tree.
///
/// Built once per parse call and never mutated afterwards. Attribute keys
/// are local names (namespace prefixes dropped); iteration order of the
/// attribute map never affects rendering.
#[derive(Debug, Clone, Default)]
pub struct Element {
  /// Local tag name
  pub tag: String,
  /// Attribute name → string value
  pub attributes: HashMap<String, String>,
  /// Child elements in document order
  pub children: Vec<Element>,
  /// Trimmed text payload, if any
  pub text: Option<String>,
}

impl Element {
  pub fn new(tag: &str) -> Self {
    Self {
      tag: tag.to_string(),
      ..Self::default()
    }
  }

  /// Returns the attribute value, if present.
  pub fn attribute(&self, name: &str) -> Option<&str> {
    self.attributes.get(name).map(String::as_str)
  }

  /// Reads an attribute as a length, degrading to 0 when the attribute is
  /// missing or unparsable. This is the single substitution point for all
  /// geometric attribute reads.
  pub fn length(&self, name: &str) -> i32 {
    self
      .attribute(name)
      .map(crate::dimensions::parse_length)
      .unwrap_or(0)
  }
}

/// Parses a document into its root element.
///
/// The scan stops at the first tokenizer error; everything parsed up to
/// that point remains usable. Elements still open at end of input are
/// attached to their parents as if closed there.
pub fn parse_document(text: &str) -> Result<Element, ParseError> {
  let mut root: Option<Element> = None;
  let mut stack: Vec<Element> = Vec::new();
  // Element whose attributes are still streaming in.
  let mut pending: Option<Element> = None;

  for token in Tokenizer::from(text) {
    let token = match token {
      Ok(token) => token,
      Err(_) => break,
    };

    match token {
      Token::ElementStart { local, .. } => {
        pending = Some(Element::new(local.as_str()));
      }
      Token::Attribute { local, value, .. } => {
        if let Some(elem) = pending.as_mut() {
          elem
            .attributes
            .insert(local.as_str().to_string(), value.as_str().to_string());
        }
      }
      Token::ElementEnd { end, .. } => match end {
        ElementEnd::Open => {
          if let Some(elem) = pending.take() {
            stack.push(elem);
          }
        }
        ElementEnd::Empty => {
          if let Some(elem) = pending.take() {
            attach(&mut stack, &mut root, elem);
          }
        }
        ElementEnd::Close(..) => {
          if let Some(elem) = stack.pop() {
            attach(&mut stack, &mut root, elem);
          }
        }
      },
      Token::Text { text } | Token::Cdata { text, .. } => {
        let trimmed = text.as_str().trim();
        if !trimmed.is_empty() {
          if let Some(open) = stack.last_mut() {
            open.text = Some(trimmed.to_string());
          }
        }
      }
      _ => {}
    }
  }

  // Unclosed elements at end of input: close them bottom-up.
  while let Some(elem) = stack.pop() {
    attach(&mut stack, &mut root, elem);
  }

  root.ok_or(ParseError::NoRootElement)
}

/// Attaches a completed element to its parent, or promotes it to root.
/// The first completed top-level element wins; later siblings are dropped.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, elem: Element) {
  if let Some(parent) = stack.last_mut() {
    parent.children.push(elem);
  } else if root.is_none() {
    *root = Some(elem);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_root_with_attributes() {
    let root = parse_document(r#"<svg width="100" height="50"></svg>"#).unwrap();
    assert_eq!(root.tag, "svg");
    assert_eq!(root.attribute("width"), Some("100"));
    assert_eq!(root.attribute("height"), Some("50"));
    assert!(root.children.is_empty());
  }

  #[test]
  fn parses_nested_children_in_document_order() {
    let root = parse_document(
      r#"<svg><g><rect x="1"/><circle r="2"/></g><line x1="3"/></svg>"#,
    )
    .unwrap();
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].tag, "g");
    assert_eq!(root.children[0].children[0].tag, "rect");
    assert_eq!(root.children[0].children[1].tag, "circle");
    assert_eq!(root.children[1].tag, "line");
  }

  #[test]
  fn deep_nesting_keeps_grandchildren() {
    let root = parse_document(r#"<svg><g><g><rect width="5"/></g></g></svg>"#).unwrap();
    let inner = &root.children[0].children[0];
    assert_eq!(inner.children[0].tag, "rect");
    assert_eq!(inner.children[0].attribute("width"), Some("5"));
  }

  #[test]
  fn tolerates_unclosed_elements() {
    let root = parse_document(r#"<svg><g><rect x="1"/>"#).unwrap();
    assert_eq!(root.tag, "svg");
    assert_eq!(root.children[0].tag, "g");
    assert_eq!(root.children[0].children[0].tag, "rect");
  }

  #[test]
  fn captures_trimmed_text() {
    let root = parse_document("<svg><text>  hello  </text></svg>").unwrap();
    assert_eq!(root.children[0].text.as_deref(), Some("hello"));
  }

  #[test]
  fn preserves_unknown_tags_and_attributes() {
    let root = parse_document(r#"<svg><widget foo="bar"/></svg>"#).unwrap();
    assert_eq!(root.children[0].tag, "widget");
    assert_eq!(root.children[0].attribute("foo"), Some("bar"));
  }

  #[test]
  fn empty_input_is_an_error() {
    assert!(matches!(parse_document(""), Err(ParseError::NoRootElement)));
  }

  #[test]
  fn garbage_before_any_start_tag_is_an_error() {
    assert!(matches!(
      parse_document("this is not markup"),
      Err(ParseError::NoRootElement)
    ));
  }

  #[test]
  fn length_reads_degrade_to_zero() {
    let root = parse_document(r#"<svg><rect x="10" y="oops"/></svg>"#).unwrap();
    let rect = &root.children[0];
    assert_eq!(rect.length("x"), 10);
    assert_eq!(rect.length("y"), 0);
    assert_eq!(rect.length("missing"), 0);
  }
}
