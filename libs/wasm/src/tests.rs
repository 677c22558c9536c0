//! Tests for the WASM-facing buffer helpers.

use super::*;

#[test]
fn polyhedron_buffers_for_cube() {
    let mesh = build_polyhedron_internal("cube", 1.0, true).expect("cube builds");

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.segment_count(), 12);
    assert_eq!(mesh.positions().len(), 24); // 8 vertices * 3 components
    assert_eq!(mesh.indices().len(), 36); // 12 triangles * 3 indices
    assert_eq!(mesh.edge_positions().len(), 72);
}

#[test]
fn polyhedron_kind_names_are_lenient() {
    for name in ["Truncated Tetrahedron", "truncated-tetrahedron", "TRUNCATED_TETRAHEDRON"] {
        let mesh = build_polyhedron_internal(name, 1.0, true).expect("known kind");
        assert_eq!(mesh.vertex_count(), 12);
    }
}

#[test]
fn unknown_kind_is_rejected() {
    let err = build_polyhedron_internal("pentagonal prism", 1.0, true).unwrap_err();
    assert!(matches!(err, EngineError::InvalidParameter { .. }));
    assert!(err.to_string().contains("pentagonal prism"));
}

#[test]
fn invalid_scale_is_rejected() {
    assert!(build_polyhedron_internal("cube", 0.0, true).is_err());
    assert!(build_polyhedron_internal("cube", f64::NAN, true).is_err());
}

#[test]
fn buffers_are_finite_and_in_range() {
    let mesh = build_polyhedron_internal("rhombic dodecahedron", 2.0, true).expect("builds");

    for &v in &mesh.positions() {
        assert!(v.is_finite(), "vertex value should be finite");
    }
    let vertex_count = mesh.vertex_count();
    for &idx in &mesh.indices() {
        assert!(idx < vertex_count, "index {idx} out of range");
    }
}

#[test]
fn params_json_regenerates_identical_buffers() {
    let original = build_polyhedron_internal("cuboctahedron", 1.5, false).expect("builds");
    let json = original.params_json().expect("polyhedra carry params");
    let rebuilt = regenerate_internal(&json).expect("regenerates");
    assert_eq!(original, rebuilt);
}

#[test]
fn malformed_params_are_rejected() {
    assert!(regenerate_internal("{\"kind\":").is_err());
    assert!(regenerate_internal("{\"kind\":\"Cube\",\"scale\":-1.0,\"normalize\":true}").is_err());
}

#[test]
fn matrix_buffers_batch_every_cell() {
    let batch = create_matrix_internal("cube", 3, 1.0, false).expect("matrix builds");
    assert_eq!(batch.vertex_count(), 9 * 8);
    assert_eq!(batch.triangle_count(), 9 * 12);
    assert_eq!(batch.segment_count(), 9 * 12);
    assert!(batch.params_json().is_none());
}

#[test]
fn matrix_buffers_with_interstitial_cells() {
    let batch = create_matrix_internal("octahedron", 3, 1.0, true).expect("matrix builds");
    assert_eq!(batch.vertex_count(), 13 * 6);
}

#[test]
fn matrix_neighbours_touch_without_overlap() {
    for kind in PolyhedronKind::ALL {
        let name = kind.to_string();
        let batch = create_matrix_internal(&name, 2, 1.0, false).expect("matrix builds");
        let per_cell = batch.vertex_count() as usize / 4;
        let positions = batch.positions();
        let xs = |cell: usize| {
            positions[cell * per_cell * 3..(cell + 1) * per_cell * 3]
                .chunks(3)
                .map(|p| p[0])
                .collect::<Vec<_>>()
        };
        let right_of_first = xs(0).into_iter().fold(f64::MIN, f64::max);
        let left_of_second = xs(1).into_iter().fold(f64::MAX, f64::min);
        assert!(
            (right_of_first - left_of_second).abs() < 1e-9,
            "{name}: cell 0 reaches {right_of_first}, cell 1 starts at {left_of_second}"
        );
    }
}

#[test]
fn matrix_size_zero_is_rejected() {
    assert!(create_matrix_internal("cube", 0, 1.0, false).is_err());
}

#[test]
fn geodesic_buffers_for_icosahedron() {
    let dome = build_geodesic_internal("icosahedron", 3, "OutSphere", 1.0).expect("dome builds");
    assert_eq!(dome.vertex_count(), 92);
    assert_eq!(dome.triangle_count(), 180);
    assert_eq!(dome.segment_count(), 270);
    assert!(dome.params_json().is_none());
}

#[test]
fn geodesic_rejects_bad_inputs() {
    assert!(build_geodesic_internal("cube", 2, "outsphere", 1.0).is_err());
    assert!(build_geodesic_internal("octahedron", 2, "hemisphere", 1.0).is_err());
    assert!(build_geodesic_internal("octahedron", 0, "off", 1.0).is_err());
}

#[test]
fn grid_buffers_are_segments_only() {
    let grid = build_grid_internal("cartesian", 2, 1.0).expect("grid builds");
    assert_eq!(grid.triangle_count(), 0);
    // 3 planes × 2 directions × 3 lines
    assert_eq!(grid.segment_count(), 18);
}

#[test]
fn polar_grid_uses_configured_segments() {
    let grid = build_grid_internal("Polar", 1, 1.0).expect("grid builds");
    let segments = GeometryEngine::default().config().polar_segments;
    assert_eq!(grid.segment_count(), 7 * (segments + 4));
}

#[test]
fn zero_tessellations_give_empty_grid() {
    let grid = build_grid_internal("uniform", 0, 1.0).expect("empty grid");
    assert!(grid.is_empty());
}

#[test]
fn unknown_grid_mode_is_rejected() {
    assert!(build_grid_internal("hexagonal", 2, 1.0).is_err());
}
