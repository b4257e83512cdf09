//! chordlib — guitar chord diagram validation, layout and SVG rendering.
//!
//! A chord is described by per-string statuses (open / closed / none), a list
//! of marks (single-string clamps and multi-string barres) and an optional
//! title. [`ChordModel`] validates and normalizes it, [`ChordRenderer`] lays it
//! out as [`DrawPrimitive`]s, and [`render_diagram_to_svg`] turns those into
//! an SVG document.
//!
//! # Example
//! ```
//! use chordlib::render_json_to_svg;
//!
//! let svg = render_json_to_svg(r#"{
//!     "title": "Am",
//!     "statusPerString": ["open", null, null, null, "open", "closed"],
//!     "marks": [
//!         {"fret": 1, "string": 2},
//!         {"fret": 2, "string": 3},
//!         {"fret": 2, "string": 4}
//!     ]
//! }"#).unwrap();
//! assert!(svg.contains("Am"));
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod validate;

#[cfg(target_os = "android")]
pub mod android;

pub use error::{Error, Result, ValidationError};
pub use model::*;
pub use parser::{parse_chord_json, parse_chord_value};
pub use renderer::{
    render_chord_to_svg, render_diagram_to_svg, CanvasConfig, ChordRenderer, Diagram, DrawPrimitive,
    TextAnchor,
};
pub use validate::{ChordConfig, ChordModel};

/// Validate a JSON chord description with the default configuration.
pub fn validate_json(json: &str) -> Result<NormalizedChord> {
    ChordModel::default().validate_json(json)
}

/// Validate and lay out a JSON chord description, returning the diagram as JSON.
/// Useful for hosts that draw the primitives themselves.
pub fn layout_json(json: &str) -> Result<String> {
    let chord = validate_json(json)?;
    let diagram = ChordRenderer::default().layout(&chord);
    Ok(diagram.to_json()?)
}

/// Validate a JSON chord description and render it to SVG.
pub fn render_json_to_svg(json: &str) -> Result<String> {
    render_json_to_svg_with(json, &ChordConfig::default(), &CanvasConfig::default())
}

/// Like [`render_json_to_svg`], with explicit instrument and canvas settings.
pub fn render_json_to_svg_with(
    json: &str,
    config: &ChordConfig,
    canvas: &CanvasConfig,
) -> Result<String> {
    let chord = ChordModel::new(*config).validate_json(json)?;
    Ok(render_chord_to_svg(&chord, Some(canvas)))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a JSON chord description and return SVG as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// `canvas_json` may be null (default canvas) or a partial `CanvasConfig`
/// JSON object. Returns null if either input is invalid.
///
/// # Safety
/// `chord_json` must be a valid null-terminated UTF-8 C string; `canvas_json`
/// must be null or one.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_json(
    chord_json: *const c_char,
    canvas_json: *const c_char,
) -> *mut c_char {
    if chord_json.is_null() {
        return std::ptr::null_mut();
    }
    let chord = match unsafe { CStr::from_ptr(chord_json) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let canvas = if canvas_json.is_null() {
        CanvasConfig::default()
    } else {
        let parsed = unsafe { CStr::from_ptr(canvas_json) }
            .to_str()
            .ok()
            .and_then(|s| CanvasConfig::from_json(s).ok());
        match parsed {
            Some(c) => c,
            None => return std::ptr::null_mut(),
        }
    };

    match render_json_to_svg_with(chord, &ChordConfig::default(), &canvas) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            log::warn!("chordlib_render_json: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
