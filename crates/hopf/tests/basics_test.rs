//! Basic integration tests for hopf-rs.
//!
//! These run the whole pipeline: parameters to 4D points, 4D points to 3D
//! points, 3D points to files on disk, and files back to points.

use std::f64::consts::{FRAC_PI_2, SQRT_2};
use std::path::PathBuf;

use hopf::*;
use proptest::prelude::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hopf-rs-{}-{name}", std::process::id()))
}

#[test]
fn test_equator_point_end_to_end() {
    let p = FibreParams::new(FRAC_PI_2, 0.0, 0.0).evaluate().unwrap();
    assert!((p.length_squared() - 1.0).abs() < 1e-12);

    let q = stereographic(p).unwrap();
    let h = SQRT_2 / 2.0;
    assert!((q - DVec3::new(h, 0.0, h)).length() < 1e-9);
}

#[test]
fn test_ply_file_roundtrip() {
    init_logging();
    let options = Options {
        points_per_fibre: 50,
        ..Options::default()
    };
    let seeds = ring(1.0, 0.0, 0.3, 6);
    let cloud = fibre_point_cloud("cloud", seeds, &options).unwrap();
    assert_eq!(cloud.num_points(), 300);

    let path = temp_path("cloud.ply");
    save_ply_points(&cloud, &path, &PlyFormat::from(&options))
        .unwrap();

    let mut file = std::fs::File::open(&path).unwrap();
    let back = io::read_ply_points(&mut file).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(back.len(), cloud.num_points());
    for (a, b) in cloud.points().iter().zip(&back) {
        assert!((*a - *b).length() < 1e-9);
    }
}

#[test]
fn test_obj_mesh_file() {
    let options = Options {
        points_per_fibre: 16,
        vertex_normals: true,
        ..Options::default()
    };
    let mesh = woven_surface(
        "band",
        BasePoint::new(1.0, 0.0),
        BasePoint::new(1.0, 2.0),
        4,
        &options,
    )
    .unwrap();

    let path = temp_path("band.obj");
    save_obj_mesh(&mesh, &path, &ObjFormat::from(&options))
        .unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let n_vertices = text.lines().filter(|l| l.starts_with("v ")).count();
    let normals: Vec<DVec3> = text
        .lines()
        .filter_map(|l| l.strip_prefix("vn "))
        .map(|l| {
            let xyz: Vec<f64> = l.split_whitespace().map(|v| v.parse().unwrap()).collect();
            DVec3::new(xyz[0], xyz[1], xyz[2])
        })
        .collect();
    let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
    assert_eq!(n_vertices, mesh.num_vertices());
    assert_eq!(normals.len(), n_vertices);
    assert!(normals.iter().all(|n| (n.length() - 1.0).abs() < 1e-9));
    assert_eq!(faces.len(), mesh.num_faces());

    // Every corner is `v//vn` with the same 1-based, in-range index.
    for face in faces {
        for corner in face.split_whitespace().skip(1) {
            let (v, vn) = corner.split_once("//").unwrap();
            assert_eq!(v, vn);
            let index: usize = v.parse().unwrap();
            assert!((1..=n_vertices).contains(&index));
        }
    }
}

#[test]
fn test_obj_lines_without_enough_samples() {
    for points_per_fibre in [0, 1] {
        let options = Options {
            points_per_fibre,
            ..Options::default()
        };
        let curves = fibre_curves("f", [(1.0, 0.0), (1.2, 0.5)], &options)
            .unwrap();

        let mut buf = Vec::new();
        io::write_obj_lines(&curves, &mut buf).unwrap();
        assert!(buf.is_empty(), "{}", String::from_utf8_lossy(&buf));
    }
}

#[test]
fn test_obj_lines_file() {
    let options = Options {
        points_per_fibre: 10,
        spacing: Spacing::arc_length(),
        ..Options::default()
    };
    let curves = fibre_curves("fibre", [(0.5, 0.0), (0.5, 1.0), (0.5, 2.0)], &options)
        .unwrap();

    let path = temp_path("lines.obj");
    save_obj_lines(&curves, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(text.lines().filter(|l| l.starts_with("o fibre_")).count(), 3);
    let last_line = text.lines().last().unwrap();
    assert_eq!(last_line, "l 21 22 23 24 25 26 27 28 29 30 21");
}

#[test]
fn test_options_file() {
    let path = temp_path("options.json");
    std::fs::write(&path, r#"{ "points_per_fibre": 7, "pole_policy": "Clamp" }"#)
        .unwrap();
    let options = Options::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(options.points_per_fibre, 7);
    assert_eq!(options.pole_policy, PolePolicy::Clamp);
    assert_eq!(options.ply_scalar, PlyScalar::Double);
}

#[test]
fn test_missing_output_directory_is_an_io_error() {
    let cloud = PointCloud::new("cloud", vec![DVec3::ZERO]);
    let path = temp_path("no-such-dir").join("cloud.ply");
    let err = save_ply_points(&cloud, &path, &PlyFormat::default())
        .unwrap_err();
    assert!(matches!(err, HopfError::Io(_)));
}

#[test]
fn test_fibre_closes_after_full_turn() {
    let fibre = Fibre::full(SurfacePoint::from_degrees(30.0, 40.0));
    let first = stereographic(fibre.point_at(0.0)).unwrap();
    let last = stereographic(fibre.point_at(FULL_TURN)).unwrap();
    assert!((first - last).length() < 1e-9);
}

proptest! {
    #[test]
    fn prop_projection_inverts(
        theta in 0.0..std::f64::consts::PI,
        phi in 0.0..std::f64::consts::TAU,
        alpha in 0.0..FULL_TURN,
    ) {
        let p = hopf_point(theta, phi, alpha);
        prop_assume!(1.0 - p.w > 1e-3);
        let back = inverse_stereographic(stereographic(p).unwrap());
        prop_assert!((back - p).length() < 1e-9);
    }
}
