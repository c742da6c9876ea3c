//! Payload walker.
//!
//! Every model type implements [`Node`], which maps one child element name to
//! one of its fields. [`fill`] walks an element's children in document order
//! and hands each to the visitor; leaf values go through the [`Scalar`] table.
//! Targets are populated in place and the walk stops at the first failure, so
//! whatever was decoded before the failure stays in the target.

use sxd_document::dom::Element;
use thiserror::Error;

use crate::clock::ScalarError;

mod scalar;
mod xml;

pub use scalar::Scalar;

use xml::{DocExt, ElemExt};

/// The payload does not have the structure of a report.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error("payload is not well-formed XML: {0}")]
    Xml(#[from] sxd_document::parser::Error),

    #[error("payload has no root element")]
    MissingRoot,

    #[error("element <{element}>: {source}")]
    Field {
        element: String,
        #[source]
        source: ScalarError,
    },
}

/// A structure decoded from the children of one element.
pub trait Node {
    /// Decodes `child` into the field it names. Returns `Ok(false)` when the
    /// name does not belong to this node.
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError>;
}

/// Decodes all child elements of `element` into `target`.
pub fn fill<N: Node>(target: &mut N, element: Element<'_>) -> Result<(), DecodeError> {
    for child in element.child_elements() {
        target.visit(child.local_name(), child)?;
    }
    Ok(())
}

/// Decodes a leaf element into `slot`.
pub fn scalar<T: Scalar>(slot: &mut T, child: Element<'_>) -> Result<bool, DecodeError> {
    let text = child.direct_text();
    *slot = T::from_text(&text).map_err(|source| DecodeError::Field {
        element: child.local_name().to_owned(),
        source,
    })?;
    Ok(true)
}

/// Decodes a nested structure into `slot`.
pub fn nested<N: Node>(slot: &mut N, child: Element<'_>) -> Result<bool, DecodeError> {
    fill(slot, child)?;
    Ok(true)
}

/// Decodes an optional nested structure, creating it on first sight.
pub fn optional<N: Node + Default>(slot: &mut Option<N>, child: Element<'_>) -> Result<bool, DecodeError> {
    nested(slot.get_or_insert_with(N::default), child)
}

/// Appends one entry decoded from `child` to `list`. A partially decoded
/// entry is still appended.
pub fn push<N: Node + Default>(list: &mut Vec<N>, child: Element<'_>) -> Result<bool, DecodeError> {
    let mut item = N::default();
    let result = fill(&mut item, child);
    list.push(item);
    result.map(|()| true)
}

/// Appends every `<item_name>` child of `child` to `list`, for wrapper
/// elements such as `<tides><tide_data/>...</tides>`.
pub fn push_each<N: Node + Default>(
    list: &mut Vec<N>,
    child: Element<'_>,
    item_name: &str,
) -> Result<bool, DecodeError> {
    for item in child.child_elements_named(item_name) {
        push(list, item)?;
    }
    Ok(true)
}

/// Records the text of `<error><msg>` as the error signal.
pub fn error_signal(slot: &mut Option<String>, child: Element<'_>) -> Result<bool, DecodeError> {
    for msg in child.child_elements_named("msg") {
        *slot = Some(msg.direct_text());
    }
    Ok(true)
}

/// Decodes a whole payload into a fresh `N`.
///
/// The target is returned even when decoding fails, holding every field
/// decoded before the failure.
pub fn decode<N: Node + Default>(bytes: &[u8]) -> (N, Option<DecodeError>) {
    let mut target = N::default();
    let error = decode_into(&mut target, bytes).err();
    (target, error)
}

fn decode_into<N: Node>(target: &mut N, bytes: &[u8]) -> Result<(), DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    let package = sxd_document::parser::parse(text)?;
    let doc = package.as_document();
    let root = doc.root_element().ok_or(DecodeError::MissingRoot)?;
    fill(target, root)
}
