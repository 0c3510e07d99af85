//! End-to-end checks of the sampling half of the pipeline.

use ascii_cube::core::math::DVec3;
use ascii_cube::core::{Cube, SampleParams};

fn reference_params() -> SampleParams {
    SampleParams {
        light: DVec3::new(0.0, 0.0, -1.0),
        focal_length: 2.5,
        camera_distance: 5.0,
        density: 1,
        char_aspect: 2.0,
        screen_width: 80,
        screen_height: 24,
    }
}

#[test]
fn unrotated_cube_culls_only_the_far_face() {
    let cube = Cube::new(1.0);
    let params = reference_params();

    // Top (+Z) points straight away from the camera; the four sides are edge-on
    // (view component 0, below the cull threshold) and stay in.
    let visible = cube.visible_faces(params.camera_distance);
    assert_eq!(visible.as_slice(), &[0, 2, 3, 4, 5]);

    let points = cube.sample(&params);
    assert_eq!(points.len(), 5 * 4);

    // Only the bottom face sees the light head-on; edge-on sides get 0.
    let lit: Vec<_> = points.iter().filter(|p| p.intensity > 0.0).collect();
    assert_eq!(lit.len(), 4);
    for p in lit {
        assert_eq!(p.intensity, 1.0);
        assert_eq!(p.depth, 4.0);
    }
}

#[test]
fn unrotated_bottom_face_projects_to_expected_cells() {
    let cube = Cube::new(1.0);
    let points = cube.sample(&reference_params());
    let mut corners: Vec<(i32, i32)> = points
        .iter()
        .filter(|p| p.intensity > 0.0)
        .map(|p| (p.x, p.y))
        .collect();
    corners.sort_unstable();

    // proj = ±1 * 2.5 / 4 = ±0.625; scale_x = 24, scale_y = 12.
    // x = trunc(±15 + 40), y = trunc(±7.5 + 12).
    assert_eq!(corners, vec![(25, 4), (25, 19), (55, 4), (55, 19)]);
}

#[test]
fn tumbled_cube_culls_exactly_three_faces() {
    let mut cube = Cube::new(1.0);
    cube.update_rotation(DVec3::new(0.6, 0.785, 0.0));
    let visible = cube.visible_faces(5.0);
    assert_eq!(visible.len(), 3);

    // One face out of each opposite pair (bottom/top, front/back, right/left).
    for (a, b) in [(0, 1), (2, 4), (3, 5)] {
        assert!(visible.contains(&a) ^ visible.contains(&b));
    }
}

#[test]
fn visible_face_count_stays_in_range_while_spinning() {
    let mut cube = Cube::new(1.0);
    let step = DVec3::new(0.5f64.to_radians(), 1.0f64.to_radians(), 0.3f64.to_radians());
    for _ in 0..720 {
        cube.update_rotation(step);
        let n = cube.visible_faces(5.0).len();
        assert!((1..=5).contains(&n), "{n} faces visible");
    }
}

#[test]
fn intensities_are_normalized() {
    let mut cube = Cube::new(1.5);
    let mut params = reference_params();
    params.density = 6;
    params.light = DVec3::new(0.5, 0.8, -1.0).normalize();
    for i in 0..50 {
        cube.update_rotation(DVec3::new(0.11, 0.07, 0.05) * f64::from(i % 3));
        for p in cube.sample(&params) {
            assert!((0.0..=1.0).contains(&p.intensity));
            assert!(p.depth > 0.0);
        }
    }
}
