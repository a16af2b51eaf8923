//! Browser-based WASM tests for the module surface.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_version() {
    let version = pagefx::version();
    assert!(!version.is_empty());
    // Version should be semver-like
    assert!(version.contains('.'));
}

#[wasm_bindgen_test]
fn test_start_is_idempotent() {
    pagefx::start().expect("first start");
    assert!(pagefx::is_ready());
    pagefx::start().expect("second start only refreshes");
    assert!(pagefx::is_ready());
}

#[wasm_bindgen_test]
fn test_style_sheet_installed_once() {
    pagefx::start().expect("start");
    pagefx::start().expect("start again");

    let document = web_sys::window().unwrap().document().unwrap();
    let sheets = document
        .query_selector_all(&format!("#{}", pagefx::styles::STYLE_ID))
        .unwrap();
    assert_eq!(sheets.length(), 1);

    let sheet = document.get_element_by_id(pagefx::styles::STYLE_ID).unwrap();
    let css = sheet.text_content().unwrap_or_default();
    assert!(css.contains(".scroll-top.visible"));
    assert!(css.contains("@keyframes ripple"));
}

#[wasm_bindgen_test]
fn test_scroll_top_control_created_once() {
    pagefx::start().expect("start");
    pagefx::start().expect("start again");

    let document = web_sys::window().unwrap().document().unwrap();
    let controls = document.query_selector_all("button.scroll-top").unwrap();
    assert_eq!(controls.length(), 1);

    let control = document.query_selector("button.scroll-top").unwrap().unwrap();
    assert_eq!(control.get_attribute("title").as_deref(), Some("Scroll to top"));
}

#[wasm_bindgen_test]
fn test_start_with_invalid_config_throws() {
    let err: JsValue = pagefx::start_with_config(r#"{ "chartAspect": -1 }"#).unwrap_err();
    let message = js_sys::Error::from(err).message();
    assert!(String::from(message).contains("chartAspect"));
}

#[wasm_bindgen_test]
fn test_start_with_unknown_key_throws() {
    assert!(pagefx::start_with_config(r#"{ "rippleColor": "red" }"#).is_err());
}

#[wasm_bindgen_test]
fn test_refresh_without_new_tables() {
    pagefx::start().expect("start");
    pagefx::refresh().expect("refresh");
    assert_eq!(pagefx::refresh().expect("refresh"), 0);
}
