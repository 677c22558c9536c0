use approx::assert_abs_diff_eq;
use glam::{DVec2, DVec3};
use quadray_engine::matrix::{LayoutRule, SymmetryFlags};
use quadray_engine::{
    build_layout, build_polyhedron, convex_hull_2d, create_matrix, geodesic, regenerate,
    sphere_plane_circle_intersection, subdivide_polygon, validate_spacing, BasePolygon,
    BuildOptions, GenerationParams, GeometryEngine, Plane, PolyhedronKind, ProjectionMode,
    Quadray,
};

#[test]
fn normalize_is_idempotent() {
    for q in [
        Quadray::new(1.0, 0.0, 0.0, 0.0),
        Quadray::new(2.0, 1.0, 1.0, 0.0),
        Quadray::new(-3.5, 0.25, 7.0, 1.0),
    ] {
        let once = q.normalize();
        let twice = once.normalize();
        assert_abs_diff_eq!(once.w, twice.w, epsilon = 1e-12);
        assert_abs_diff_eq!(once.x, twice.x, epsilon = 1e-12);
        assert_abs_diff_eq!(once.y, twice.y, epsilon = 1e-12);
        assert_abs_diff_eq!(once.z, twice.z, epsilon = 1e-12);
    }
}

#[test]
fn tetrahedron_vertices_have_quadrance_eight() {
    let tetra = build_polyhedron(
        PolyhedronKind::Tetrahedron,
        1.0,
        &BuildOptions {
            normalize: true,
            custom_coordinates: None,
        },
    )
    .unwrap();
    let v = tetra.mesh.vertices();
    for i in 0..v.len() {
        for j in (i + 1)..v.len() {
            assert_abs_diff_eq!(v[i].distance_squared(v[j]), 8.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn cuboctahedron_counts() {
    let cubo = build_polyhedron(PolyhedronKind::Cuboctahedron, 1.0, &BuildOptions::default()).unwrap();
    assert_eq!(cubo.mesh.vertex_count(), 12);
    assert_eq!(cubo.mesh.edge_count(), 24);
    assert_eq!(cubo.mesh.faces_with_sides(3), 8);
    assert_eq!(cubo.mesh.faces_with_sides(4), 6);
}

#[test]
fn truncated_tetrahedron_counts() {
    let tt = build_polyhedron(
        PolyhedronKind::TruncatedTetrahedron,
        1.0,
        &BuildOptions::default(),
    )
    .unwrap();
    assert_eq!(tt.mesh.vertex_count(), 12);
    assert_eq!(tt.mesh.edge_count(), 18);
    assert_eq!(tt.mesh.faces_with_sides(3), 4);
    assert_eq!(tt.mesh.faces_with_sides(6), 4);
}

#[test]
fn every_face_winds_outward() {
    for kind in PolyhedronKind::ALL {
        for scale in [0.5, 1.0, 3.0] {
            let solid = build_polyhedron(kind, scale, &BuildOptions::default()).unwrap();
            let mesh = &solid.mesh;
            for (f, face) in mesh.faces().iter().enumerate() {
                let v0 = mesh.vertex(face[0]);
                let v1 = mesh.vertex(face[1]);
                let v2 = mesh.vertex(face[2]);
                let normal = (v1 - v0).cross(v2 - v0);
                assert!(normal.dot(mesh.face_centroid(f)) >= 0.0, "{kind} face {f}");
            }
        }
    }
}

#[test]
fn triangular_tiling_counts() {
    let g2 = subdivide_polygon(BasePolygon::Triangle, 2, 1.0).unwrap();
    assert_eq!(g2.face_count(), 4);
    let g3 = subdivide_polygon(BasePolygon::Triangle, 3, 1.0).unwrap();
    assert_eq!(g3.face_count(), 16);
}

#[test]
fn unit_square_hull() {
    let square = [
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ];
    assert_eq!(convex_hull_2d(&square), square.to_vec());
}

#[test]
fn sphere_plane_circle() {
    let plane = Plane::from_point_normal(DVec3::new(0.0, 0.0, 3.0), DVec3::Z).unwrap();
    let circle = sphere_plane_circle_intersection(DVec3::ZERO, 5.0, &plane, 32).unwrap();
    assert_abs_diff_eq!(circle.radius, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(circle.center.distance(DVec3::new(0.0, 0.0, 3.0)), 0.0, epsilon = 1e-12);
}

#[test]
fn cube_matrix_spacing() {
    let cube = build_polyhedron(PolyhedronKind::Cube, 1.0, &BuildOptions::default()).unwrap();
    let rule = LayoutRule::Grid { half_size: 1.0 };
    let batch = create_matrix(3, &cube.mesh, rule, SymmetryFlags::default()).unwrap();
    let report = validate_spacing(batch.layout(), 3, rule.spacing(), 1e-6);
    assert!(report.violations.is_empty());

    let mut layout = build_layout(3, rule, SymmetryFlags::default()).unwrap();
    layout[8].y += 0.01;
    let report = validate_spacing(&layout, 3, rule.spacing(), 1e-6);
    assert_eq!(report.violations.len(), 1);
}

#[test]
fn regenerate_after_json_round_trip() {
    let options = BuildOptions {
        normalize: false,
        custom_coordinates: None,
    };
    for kind in PolyhedronKind::ALL {
        let original = build_polyhedron(kind, 2.5, &options).unwrap();
        let json = serde_json::to_string(&original.metadata.params).unwrap();
        let params: GenerationParams = serde_json::from_str(&json).unwrap();
        let rebuilt = regenerate(&params).unwrap();
        assert_eq!(original.mesh.vertices(), rebuilt.mesh.vertices());
        assert_eq!(original.mesh.edges(), rebuilt.mesh.edges());
        assert_eq!(original.mesh.faces(), rebuilt.mesh.faces());
    }
}

#[test]
fn regenerate_with_custom_coordinates() {
    let custom: Vec<Quadray> = (0..6)
        .map(|i| {
            let mut c = [0.0; 4];
            let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
            let (a, b) = pairs[i];
            c[a] = 1.5;
            c[b] = 1.5;
            Quadray::from_array(c)
        })
        .collect();
    let original = build_polyhedron(
        PolyhedronKind::Octahedron,
        1.0,
        &BuildOptions {
            normalize: true,
            custom_coordinates: Some(custom),
        },
    )
    .unwrap();
    let json = serde_json::to_string(&original.metadata.params).unwrap();
    let rebuilt = regenerate(&serde_json::from_str(&json).unwrap()).unwrap();
    assert_eq!(original.mesh, rebuilt.mesh);
}

#[test]
fn engine_instances_are_independent() {
    let a = GeometryEngine::default();
    let b = GeometryEngine::default();
    let x = a
        .build(PolyhedronKind::RhombicDodecahedron, 1.0, &BuildOptions::default())
        .unwrap();
    let y = b
        .build(PolyhedronKind::RhombicDodecahedron, 1.0, &BuildOptions::default())
        .unwrap();
    assert_eq!(x, y);
    assert_eq!(a.basis(), b.basis());
}

#[test]
fn icosahedral_dome_counts_and_radius() {
    for f in [1, 2, 3, 6] {
        let dome = geodesic(PolyhedronKind::Icosahedron, f, ProjectionMode::OutSphere, 2.0).unwrap();
        let f2 = (f * f) as usize;
        assert_eq!(dome.mesh.vertex_count(), 10 * f2 + 2);
        assert_eq!(dome.mesh.edge_count(), 30 * f2);
        assert_eq!(dome.mesh.face_count(), 20 * f2);
        let target = dome.target_quadrance.unwrap();
        for v in dome.mesh.vertices() {
            assert_abs_diff_eq!(v.length_squared(), target, epsilon = 1e-9);
        }
    }
}
