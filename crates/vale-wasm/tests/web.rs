//! Runs under `wasm-pack test --headless`; compiled out on native targets.
#![cfg(target_arch = "wasm32")]

use vale_wasm::{generate, land_cover_pixels, landmarks};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn minimap_has_one_rgba_pixel_per_cell() {
    let snapshot = generate(r#"{"width": 24, "height": 16, "seed": 2}"#).unwrap();
    let pixels = land_cover_pixels(&snapshot).unwrap();
    assert_eq!(pixels.length(), 24 * 16 * 4);
}

#[wasm_bindgen_test]
fn bad_request_is_a_js_error() {
    assert!(generate(r#"{"width": 0, "height": 0}"#).is_err());
    let snapshot = generate(r#"{"width": 24, "height": 16, "seed": 2}"#).unwrap();
    assert!(landmarks(&snapshot, 12.0, 8.0, 2.0, 4.0).is_ok());
}
