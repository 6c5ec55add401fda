//! Tablature Score WASM API
//!
//! JavaScript-facing functions over a single editing session. The session is
//! owned by WASM; the host reads the score back with `getScore` after edits.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error conversion at the JS boundary
//! - `session`: the open score with its undo history

pub mod helpers;
pub mod session;

pub use session::Session;

use lazy_static::lazy_static;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

use crate::models::{Score, ScoreLocation};
use crate::renderers::gp7::{self, Document};
use helpers::{deserialize, js_error, serialize};

lazy_static! {
    static ref SESSION: Mutex<Session> = Mutex::new(Session::new());
}

fn lock_session() -> Result<MutexGuard<'static, Session>, JsValue> {
    SESSION
        .lock()
        .map_err(|e| js_error("Session unavailable", e))
}

/// Serialize an export document to GPIF XML text
#[wasm_bindgen(js_name = exportGpif)]
pub fn export_gpif(document_js: JsValue) -> Result<String, JsValue> {
    let document: Document = deserialize(document_js, "Document deserialization error")?;
    gp7::export_gpif(&document).map_err(|e| js_error("GPIF export failed", e))
}

/// Replace the open score
#[wasm_bindgen(js_name = loadScore)]
pub fn load_score(score_js: JsValue) -> Result<(), JsValue> {
    let score: Score = deserialize(score_js, "Score deserialization error")?;
    lock_session()?.load_score(score);
    Ok(())
}

#[wasm_bindgen(js_name = getScore)]
pub fn get_score() -> Result<JsValue, JsValue> {
    let session = lock_session()?;
    serialize(session.score(), "Score serialization error")
}

#[wasm_bindgen(js_name = setLineSpacing)]
pub fn set_line_spacing(spacing: i32) -> Result<(), JsValue> {
    log::info!("setLineSpacing called: {}", spacing);
    lock_session()?
        .set_line_spacing(spacing)
        .map_err(|e| js_error("Set line spacing failed", e))
}

#[wasm_bindgen(js_name = removeTappedHarmonic)]
pub fn remove_tapped_harmonic(location_js: JsValue) -> Result<(), JsValue> {
    let location: ScoreLocation = deserialize(location_js, "Location deserialization error")?;
    log::info!("removeTappedHarmonic called at {}", location);
    lock_session()?
        .remove_tapped_harmonic(location)
        .map_err(|e| js_error("Remove tapped harmonic failed", e))
}

#[wasm_bindgen(js_name = addStandardFilters)]
pub fn add_standard_filters() -> Result<(), JsValue> {
    lock_session()?
        .add_standard_filters()
        .map_err(|e| js_error("Add standard filters failed", e))
}

#[wasm_bindgen(js_name = adjustRehearsalSigns)]
pub fn adjust_rehearsal_signs() -> Result<(), JsValue> {
    lock_session()?.adjust_rehearsal_signs();
    Ok(())
}

/// Sorted, de-duplicated chord names as strings
#[wasm_bindgen(js_name = findAllChordNames)]
pub fn find_all_chord_names() -> Result<JsValue, JsValue> {
    let names = lock_session()?.find_all_chord_names();
    serialize(&names, "Chord name serialization error")
}

/// Undo the last edit operation
#[wasm_bindgen(js_name = undo)]
pub fn undo() -> Result<(), JsValue> {
    log::info!("undo called");
    lock_session()?.undo().map_err(|e| js_error("Undo failed", e))
}

/// Redo the last undone edit operation
#[wasm_bindgen(js_name = redo)]
pub fn redo() -> Result<(), JsValue> {
    log::info!("redo called");
    lock_session()?.redo().map_err(|e| js_error("Redo failed", e))
}

#[wasm_bindgen(js_name = canUndo)]
pub fn can_undo() -> Result<bool, JsValue> {
    Ok(lock_session()?.can_undo())
}

#[wasm_bindgen(js_name = canRedo)]
pub fn can_redo() -> Result<bool, JsValue> {
    Ok(lock_session()?.can_redo())
}
