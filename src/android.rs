//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{layout_json, render_json_to_svg};

/// Render a JSON chord description to SVG.
///
/// Called from Kotlin as:
///   external fun renderJson(chordJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    chord_json: JString,
) -> jstring {
    let json: String = match env.get_string(&chord_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match render_json_to_svg(&json) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("renderJson: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Lay out a JSON chord description and return the diagram as JSON.
///
/// Called from Kotlin as:
///   external fun layoutJson(chordJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_layoutJson(
    mut env: JNIEnv,
    _class: JClass,
    chord_json: JString,
) -> jstring {
    let json: String = match env.get_string(&chord_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match layout_json(&json) {
        Ok(diagram) => match env.new_string(&diagram) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("layoutJson: {e}");
            std::ptr::null_mut()
        }
    }
}
