//! Browser bindings. Every function takes and returns JSON so the UI can keep
//! the grid as an opaque snapshot string between calls.

use serde::Serialize;
use vale_core::{FaunaRequest, GenerationRequest, Window};
use wasm_bindgen::prelude::*;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(js_err)
}

/// Generate a grid from a `GenerationRequest` JSON and return its snapshot.
#[wasm_bindgen]
pub fn generate(request_json: &str) -> Result<String, JsValue> {
    let request: GenerationRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request: {e}")))?;
    let grid = vale_core::generate(&request).map_err(js_err)?;
    vale_core::serialize(&grid).map_err(js_err)
}

/// Contour segments for the view window `[min_x, max_x) × [min_y, max_y)`.
#[wasm_bindgen(js_name = extractContours)]
pub fn extract_contours(
    snapshot: &str,
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
    interval: f64,
) -> Result<JsValue, JsValue> {
    let grid = vale_core::deserialize(snapshot).map_err(js_err)?;
    let window = Window::new(min_x, min_y, max_x, max_y);
    let segments = vale_core::extract_contours(&grid, window, interval).map_err(js_err)?;
    to_js(&segments)
}

/// Animals as `[{type, x, y}]`; `request_json` is a `FaunaRequest`.
#[wasm_bindgen(js_name = placeFauna)]
pub fn place_fauna(snapshot: &str, request_json: &str) -> Result<JsValue, JsValue> {
    let grid = vale_core::deserialize(snapshot).map_err(js_err)?;
    let request: FaunaRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid fauna request: {e}")))?;
    to_js(&vale_core::place_fauna(&grid, &request))
}

/// Peak and valley markers visible at a pan/zoom state.
#[wasm_bindgen]
pub fn landmarks(
    snapshot: &str,
    center_x: f64,
    center_y: f64,
    zoom: f64,
    min_spacing: f64,
) -> Result<JsValue, JsValue> {
    let grid = vale_core::deserialize(snapshot).map_err(js_err)?;
    let window = Window::around(center_x, center_y, zoom, &grid);
    to_js(&vale_core::landmarks(&grid, window, min_spacing))
}

/// RGBA pixels (one per cell) coloured by land cover, for the minimap.
#[wasm_bindgen(js_name = landCoverPixels)]
pub fn land_cover_pixels(snapshot: &str) -> Result<js_sys::Uint8ClampedArray, JsValue> {
    let grid = vale_core::deserialize(snapshot).map_err(js_err)?;
    let mut rgba = Vec::with_capacity(grid.cells().len() * 4);
    for cell in grid.cells() {
        let [r, g, b] = cell.land_cover.color();
        rgba.extend_from_slice(&[r, g, b, 255]);
    }
    Ok(js_sys::Uint8ClampedArray::from(rgba.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_returns_snapshot() {
        let snapshot = generate(r#"{"width": 40, "height": 30, "preset": "hills", "seed": 4}"#).unwrap();
        let grid = vale_core::deserialize(&snapshot).unwrap();
        assert_eq!((grid.width(), grid.height()), (40, 30));
    }
}
