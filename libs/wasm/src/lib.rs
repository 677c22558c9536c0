//! WASM-facing entry points for the Quadray geometry engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every export returns a [`MeshHandle`] of flat buffers;
//! native tests call the `*_internal` helpers, which keep Rust error types
//! and do not need a JS host.
//!
//! ```
//! let mesh = quadray_wasm::build_polyhedron_internal("cube", 1.0, true).unwrap();
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.triangle_count(), 12);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use quadray_engine::matrix::{LayoutRule, SymmetryFlags};
use quadray_engine::{
    BuildOptions, EngineError, EngineResult, GenerationParams, GeometryEngine, GridMode,
    PolyhedronKind, ProjectionMode,
};
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "quadray-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn engine() -> &'static GeometryEngine {
    static ENGINE: OnceLock<GeometryEngine> = OnceLock::new();
    ENGINE.get_or_init(GeometryEngine::default)
}

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Builds a named polyhedron and returns its buffers.
///
/// `kind` is matched case-insensitively, ignoring spaces, dashes and
/// underscores.
///
/// # Errors
/// Returns a JavaScript error value for an unknown kind or invalid scale.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const mesh = build_polyhedron_buffers("octahedron", 1.0, true);
/// ```
#[wasm_bindgen]
pub fn build_polyhedron_buffers(
    kind: &str,
    scale: f64,
    normalize: bool,
) -> Result<MeshHandle, JsValue> {
    build_polyhedron_internal(kind, scale, normalize).map_err(to_js)
}

/// Host-only helper behind [`build_polyhedron_buffers`].
///
/// # Examples
/// ```
/// let mesh = quadray_wasm::build_polyhedron_internal("tetrahedron", 1.0, true).unwrap();
/// assert_eq!(mesh.segment_count(), 6);
/// ```
pub fn build_polyhedron_internal(
    kind: &str,
    scale: f64,
    normalize: bool,
) -> EngineResult<MeshHandle> {
    let kind: PolyhedronKind = kind.parse()?;
    let options = BuildOptions {
        normalize,
        custom_coordinates: None,
    };
    let solid = engine().build(kind, scale, &options)?;
    let json = params_to_json(&solid.metadata.params)?;
    Ok(MeshHandle::from_mesh(&solid.mesh).with_params(json))
}

/// Rebuilds a polyhedron from the JSON returned by `MeshHandle.params_json`.
///
/// # Errors
/// Returns a JavaScript error value for malformed JSON or invalid
/// parameters.
#[wasm_bindgen]
pub fn regenerate_buffers(params_json: &str) -> Result<MeshHandle, JsValue> {
    regenerate_internal(params_json).map_err(to_js)
}

/// Host-only helper behind [`regenerate_buffers`].
pub fn regenerate_internal(params_json: &str) -> EngineResult<MeshHandle> {
    let params: GenerationParams = serde_json::from_str(params_json)
        .map_err(|err| EngineError::invalid_parameter(format!("bad parameters: {err}")))?;
    let solid = engine().regenerate(&params)?;
    Ok(MeshHandle::from_mesh(&solid.mesh).with_params(params_to_json(&params)?))
}

fn params_to_json(params: &GenerationParams) -> EngineResult<String> {
    serde_json::to_string(params)
        .map_err(|err| EngineError::invariant(format!("parameters did not serialize: {err}")))
}

/// Instances a polyhedron over an `n × n` matrix in one batched buffer.
///
/// Each cell is sized so its largest coordinate is `half_size`, which makes
/// neighbours at spacing `2·half_size` touch. Tetrahedra use the
/// checkerboard rule so alternate cells are flipped; every other solid sits
/// on a plain grid.
///
/// # Errors
/// Returns a JavaScript error value for an unknown kind, a bad size or an
/// oversized result.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const batch = create_matrix_buffers("cube", 4, 1.0, false);
/// ```
#[wasm_bindgen]
pub fn create_matrix_buffers(
    kind: &str,
    n: u32,
    half_size: f64,
    interstitial: bool,
) -> Result<MeshHandle, JsValue> {
    create_matrix_internal(kind, n as usize, half_size, interstitial).map_err(to_js)
}

/// Host-only helper behind [`create_matrix_buffers`].
pub fn create_matrix_internal(
    kind: &str,
    n: usize,
    half_size: f64,
    interstitial: bool,
) -> EngineResult<MeshHandle> {
    let kind: PolyhedronKind = kind.parse()?;
    let base = engine().build_fitted(kind, half_size, &BuildOptions::default())?;
    let rule = match kind {
        PolyhedronKind::Tetrahedron | PolyhedronKind::DualTetrahedron => {
            LayoutRule::Checkerboard { half_size }
        }
        _ => LayoutRule::Grid { half_size },
    };
    let batch = engine().matrix(n, &base.mesh, rule, SymmetryFlags { interstitial })?;
    Ok(MeshHandle::from_batch(batch))
}

/// Builds a Class I geodesic of a triangle-faced solid.
///
/// `mode` is one of `"off"`, `"insphere"`, `"midsphere"` or `"outsphere"`
/// (case-insensitive, dashes and underscores ignored).
///
/// # Errors
/// Returns a JavaScript error value for an unknown kind or mode, a base with
/// non-triangular faces, or a frequency outside the supported range.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const dome = build_geodesic_buffers("icosahedron", 3, "outsphere", 1.0);
/// ```
#[wasm_bindgen]
pub fn build_geodesic_buffers(
    kind: &str,
    frequency: u32,
    mode: &str,
    scale: f64,
) -> Result<MeshHandle, JsValue> {
    build_geodesic_internal(kind, frequency, mode, scale).map_err(to_js)
}

/// Host-only helper behind [`build_geodesic_buffers`].
///
/// # Examples
/// ```
/// let dome = quadray_wasm::build_geodesic_internal("icosahedron", 2, "out-sphere", 1.0).unwrap();
/// assert_eq!(dome.vertex_count(), 42);
/// assert_eq!(dome.triangle_count(), 80);
/// ```
pub fn build_geodesic_internal(
    kind: &str,
    frequency: u32,
    mode: &str,
    scale: f64,
) -> EngineResult<MeshHandle> {
    let kind: PolyhedronKind = kind.parse()?;
    let mode: ProjectionMode = mode.parse()?;
    let dome = engine().geodesic(kind, frequency, mode, scale)?;
    Ok(MeshHandle::from_mesh(&dome.mesh))
}

/// Builds grid line segments: `"uniform"`, `"polar"` or `"cartesian"`.
///
/// # Errors
/// Returns a JavaScript error value for an unknown mode or invalid scale.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const grid = build_grid_buffers("polar", 5, 1.0);
/// ```
#[wasm_bindgen]
pub fn build_grid_buffers(
    mode: &str,
    tessellations: i32,
    scale: f64,
) -> Result<MeshHandle, JsValue> {
    build_grid_internal(mode, tessellations, scale).map_err(to_js)
}

/// Host-only helper behind [`build_grid_buffers`].
///
/// # Examples
/// ```
/// let grid = quadray_wasm::build_grid_internal("uniform", 3, 1.0).unwrap();
/// assert_eq!(grid.triangle_count(), 0);
/// assert_eq!(grid.segment_count(), 108);
/// ```
pub fn build_grid_internal(mode: &str, tessellations: i32, scale: f64) -> EngineResult<MeshHandle> {
    let grid = match mode.trim().to_ascii_lowercase().as_str() {
        "uniform" | "ivm" => engine().grid(GridMode::Uniform, tessellations, scale)?,
        "polar" => engine().polar_grid(tessellations, scale)?,
        "cartesian" => engine().grid(GridMode::Cartesian, tessellations, scale)?,
        _ => {
            return Err(EngineError::invalid_parameter(format!(
                "unknown grid mode '{mode}'"
            )))
        }
    };
    Ok(MeshHandle::from_mesh(&grid))
}

#[cfg(test)]
mod tests;
