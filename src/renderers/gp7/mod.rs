//! Guitar Pro 7 (GPIF) export
//!
//! `document` holds the flat export model, `to_xml` turns it into an element
//! tree, and `xml` writes that tree out.

pub mod document;
pub mod to_xml;
pub mod xml;

pub use document::Document;
pub use to_xml::to_xml;
pub use xml::{XmlDocument, XmlElement, XmlNode};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported duration: {0}")]
    UnsupportedDuration(i32),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Serialize a document straight to GPIF text
pub fn export_gpif(doc: &Document) -> Result<String, ExportError> {
    to_xml(doc)?.to_xml_string()
}
