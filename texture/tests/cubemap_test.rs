use geometry::ray::Ray;
use math::float::Inside;
use math::hcm::{vec3, Point3};
use radiometry::color::Color;
use texture::{CubeFace, CubeMap, CubeMapError, Solid, TextureMap};

/// Echoes the texture coordinate back as a color, tagged with a per-face marker in blue.
struct UvProbe(f32);

impl TextureMap for UvProbe {
    fn sample(&self, (u, v): (f32, f32)) -> Color {
        Color::new(u, v, self.0)
    }
}

fn probe_cube() -> CubeMap {
    let mut cube = CubeMap::new();
    for face in CubeFace::ALL {
        cube.set_face(face, Box::new(UvProbe(face.index() as f32)));
    }
    cube
}

fn sample_dir(cube: &CubeMap, x: f32, y: f32, z: f32) -> Color {
    cube.sample(&Ray::new(Point3::ORIGIN, vec3(x, y, z))).unwrap()
}

fn assert_sample(actual: Color, expected: Color) {
    assert!(
        actual.max_channel_diff(expected) < 1e-5,
        "sampled {}, expected {}",
        actual,
        expected
    );
}

#[test]
fn positive_x_center() {
    let cube = probe_cube();
    assert_sample(sample_dir(&cube, 1.0, 0.0, 0.0), Color::new(0.5, 0.5, 0.0));
}

#[test]
fn per_face_sign_conventions() {
    let cube = probe_cube();
    // Each direction leans towards +y and +z (or +x) by half of the dominant magnitude.
    // +X: u = -z, v = y
    assert_sample(sample_dir(&cube, 2.0, 1.0, 1.0), Color::new(0.25, 0.75, 0.0));
    // -X: u = z, v = y
    assert_sample(sample_dir(&cube, -2.0, 1.0, 1.0), Color::new(0.75, 0.75, 1.0));
    // +Y: u = x, v = -z
    assert_sample(sample_dir(&cube, 1.0, 2.0, 1.0), Color::new(0.75, 0.25, 2.0));
    // -Y: u = x, v = z
    assert_sample(sample_dir(&cube, 1.0, -2.0, 1.0), Color::new(0.75, 0.75, 3.0));
    // +Z: u = x, v = y
    assert_sample(sample_dir(&cube, 1.0, 1.0, 2.0), Color::new(0.75, 0.75, 4.0));
    // -Z: u = -x, v = y
    assert_sample(sample_dir(&cube, 1.0, 1.0, -2.0), Color::new(0.25, 0.75, 5.0));
}

#[test]
fn u_and_v_are_remapped_independently() {
    let cube = probe_cube();
    // On +Z, u comes from x and v from y; they must not collapse onto each other.
    let c = sample_dir(&cube, -0.5, 0.25, 1.0);
    assert_sample(c, Color::new(0.25, 0.625, 4.0));
}

#[test]
fn coordinates_stay_in_unit_square() {
    let cube = probe_cube();
    let dirs = [
        (0.3, -0.9, 0.2),
        (-0.7, 0.7, 0.69),
        (0.01, 0.02, -1.0),
        (5.0, -5.0, 4.999),
        (-1.0, -1.0, -1.0),
    ];
    for (x, y, z) in dirs.iter().copied() {
        let c = sample_dir(&cube, x, y, z);
        assert!(c.r.inside((0.0, 1.0)), "u = {} for ({}, {}, {})", c.r, x, y, z);
        assert!(c.g.inside((0.0, 1.0)), "v = {} for ({}, {}, {})", c.g, x, y, z);
    }
}

#[test]
fn replacing_a_face_returns_the_old_map() {
    let mut cube = CubeMap::new();
    assert!(!cube.has_face(CubeFace::NegY));
    let old = cube.set_face(CubeFace::NegY, Box::new(Solid::new(Color::white())));
    assert!(old.is_none());

    let old = cube
        .set_nth_map(3, Box::new(Solid::new(Color::gray(0.5))))
        .unwrap()
        .expect("slot 3 was filled");
    assert_eq!(old.sample((0.5, 0.5)), Color::white());
    assert_sample(sample_dir(&cube, 0.0, -1.0, 0.0), Color::gray(0.5));
}

#[test]
fn out_of_range_slot_is_rejected() {
    let mut cube = CubeMap::new();
    let res = cube.set_nth_map(6, Box::new(Solid::new(Color::white())));
    assert!(matches!(res, Err(CubeMapError::FaceIndex(6))));
}

#[test]
fn empty_face_is_an_error() {
    let mut cube = CubeMap::new();
    cube.set_face(CubeFace::PosX, Box::new(Solid::new(Color::white())));
    let r = Ray::new(Point3::ORIGIN, vec3(0.0, 0.0, -1.0));
    match cube.sample(&r) {
        Err(CubeMapError::MissingFace(face)) => assert_eq!(face, CubeFace::NegZ),
        Err(e) => panic!("unexpected error {}", e),
        Ok(c) => panic!("unexpected sample {}", c),
    }
}

#[test]
fn missing_skybox_directory_reports_the_face() {
    match CubeMap::from_dir("/nonexistent/skybox") {
        Err(CubeMapError::Load { face, .. }) => assert_eq!(face, CubeFace::PosX),
        Err(e) => panic!("unexpected error {}", e),
        Ok(_) => panic!("loading from a missing directory succeeded"),
    }
}
