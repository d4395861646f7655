//! Strip wrapper and renderer payloads.

use js_sys::Float64Array;
use mobius_core::sampling::row_major;
use mobius_core::{MobiusStrip, QuadratureRule, StripParams};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmMobiusStrip {
    strip: MobiusStrip,
    rule: QuadratureRule,
}

pub(crate) fn parse_rule(rule_name: &str) -> Result<QuadratureRule, String> {
    rule_name.parse::<QuadratureRule>()
}

#[wasm_bindgen]
impl WasmMobiusStrip {
    #[wasm_bindgen(constructor)]
    pub fn new(
        radius: f64,
        width: f64,
        resolution: u32,
        rule_name: &str,
    ) -> Result<WasmMobiusStrip, JsValue> {
        console_error_panic_hook::set_once();

        let rule = parse_rule(rule_name).map_err(|e| JsValue::from_str(&e))?;
        let strip = MobiusStrip::new(StripParams::new(radius, width, resolution as usize))
            .map_err(|e| JsValue::from_str(&format!("Invalid strip: {}", e)))?;

        Ok(WasmMobiusStrip { strip, rule })
    }

    pub fn resolution(&self) -> u32 {
        self.strip.resolution() as u32
    }

    pub fn radius(&self) -> f64 {
        self.strip.params().radius
    }

    pub fn width(&self) -> f64 {
        self.strip.params().width
    }

    pub fn surface_area(&self) -> Result<f64, JsValue> {
        self.strip
            .surface_area_with(self.rule)
            .map_err(|e| JsValue::from_str(&format!("Surface area failed: {}", e)))
    }

    pub fn edge_length(&self) -> Result<f64, JsValue> {
        self.strip
            .edge_length_with(self.rule)
            .map_err(|e| JsValue::from_str(&format!("Edge length failed: {}", e)))
    }

    /// Row-major x coordinates, `resolution * resolution` entries.
    pub fn x_grid(&self) -> Float64Array {
        Float64Array::from(row_major(self.strip.x()).as_slice())
    }

    pub fn y_grid(&self) -> Float64Array {
        Float64Array::from(row_major(self.strip.y()).as_slice())
    }

    pub fn z_grid(&self) -> Float64Array {
        Float64Array::from(row_major(self.strip.z()).as_slice())
    }

    /// `{ rows, cols, x, y, z }` with row-major flattened grids.
    pub fn coordinate_grids(&self) -> Result<JsValue, JsValue> {
        to_value(&self.strip.coordinate_grids())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// The `v = +w/2` boundary curve as `{ v, u, x, y, z }`.
    pub fn boundary_curve(&self) -> Result<JsValue, JsValue> {
        let curve = self.strip.edge_curve(self.strip.params().half_width());
        to_value(&curve).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rule_accepts_known_rules() {
        assert_eq!(parse_rule("simpson"), Ok(QuadratureRule::Simpson));
        assert_eq!(parse_rule("trapezoid"), Ok(QuadratureRule::Trapezoid));
        assert!(parse_rule("gauss").is_err());
    }

    #[test]
    fn wasm_strip_reports_core_measurements() {
        let wrapper = WasmMobiusStrip::new(1.0, 0.2, 64, "simpson").expect("strip");
        let core = MobiusStrip::with_dimensions(1.0, 0.2, 64).expect("core strip");

        assert_eq!(wrapper.resolution(), 64);
        assert_eq!(wrapper.radius(), 1.0);
        assert_eq!(wrapper.width(), 0.2);
        assert_eq!(
            wrapper.surface_area().expect("area"),
            core.surface_area().expect("core area")
        );
        assert_eq!(
            wrapper.edge_length().expect("edge"),
            core.edge_length().expect("core edge")
        );
        assert_eq!(wrapper.strip.x().shape(), (64, 64));
    }

    #[test]
    fn wasm_strip_measures_extreme_widths_like_the_core() {
        let wrapper = WasmMobiusStrip::new(1.0, 1e-200, 51, "simpson").expect("strip");
        let area = wrapper.surface_area().expect("area");
        assert!(area.is_finite() && area >= 0.0);
        assert!(wrapper.edge_length().expect("edge").is_finite());
    }

    #[test]
    fn wasm_strip_uses_selected_rule() {
        let wrapper = WasmMobiusStrip::new(1.0, 0.2, 2, "trapezoid").expect("strip");
        let area = wrapper.surface_area().expect("trapezoid handles two samples");
        assert!(area.is_finite());
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn wasm_strip_rejects_invalid_parameters() {
        assert!(WasmMobiusStrip::new(0.0, 0.2, 10, "simpson").is_err());
        assert!(WasmMobiusStrip::new(1.0, 0.2, 1, "simpson").is_err());
        assert!(WasmMobiusStrip::new(1.0, 0.2, 10, "midpoint").is_err());
        assert!(WasmMobiusStrip::new(1.0, f64::from_bits(1), 10, "simpson").is_err());
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn wasm_strip_reports_degenerate_simpson() {
        let wrapper = WasmMobiusStrip::new(1.0, 0.2, 2, "simpson").expect("strip");
        assert!(wrapper.surface_area().is_err());
        assert!(wrapper.edge_length().is_err());
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn wasm_strip_grid_arrays_are_flattened() {
        let wrapper = WasmMobiusStrip::new(1.0, 0.2, 8, "simpson").expect("strip");
        assert_eq!(wrapper.x_grid().length(), 64);
        assert_eq!(wrapper.z_grid().length(), 64);
    }
}
