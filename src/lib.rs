//! Tablature Score WASM Module
//!
//! Score model, undoable editing actions and Guitar Pro 7 export for a
//! guitar tablature editor.

pub mod api;
pub mod models;
pub mod renderers;
pub mod settings;
pub mod undo;

// Re-export commonly used types
pub use models::*;
pub use renderers::{export_gpif, ExportError};
pub use undo::{Action, ActionError, UndoStack};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            log::warn!("Logger already initialized: {}", e);
        }
    }

    log::info!("Tablature Score WASM module initialized");
}
