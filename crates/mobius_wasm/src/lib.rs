//! WASM bridge exposing `mobius_core` strips to a browser renderer.

mod strip;

pub use strip::WasmMobiusStrip;
