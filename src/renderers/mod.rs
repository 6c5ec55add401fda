//! Renderers module for tablature scores
//!
//! This module contains export logic for converting scores into other file
//! formats.

pub mod gp7;

// Re-export commonly used types
pub use gp7::{export_gpif, to_xml, Document as Gp7Document, ExportError};
