//! Integration tests for the render pipeline
//!
//! Drive a full Scene against the recording collaborators: clip-plane
//! seeding and estimation, uniform uploads, and agreement between the
//! two pose calling conventions. No GPU required.
//!
//! Run with: cargo test --test render_integration_tests


use lidar_scan_engine::glam::{DQuat, DVec3};
use lidar_scan_engine::scene::MIN_NEAR_PLANE;
use lidar_scan_engine::{EulerPose, PhysicsPose, Pose, Scene};
use scan_test_utils::{RecordingDevice, RecordingShader, SphereMesh, UniformValue};

/// Camera on the +Z axis looking back at the model, no rotations.
fn head_on_pose(camera_distance: f64) -> Pose {
    Pose::from_euler(&EulerPose {
        model_rotation: DVec3::ZERO,
        camera_position: DVec3::new(0.0, 0.0, camera_distance),
        camera_rotation: DVec3::ZERO,
    })
}

// ============================================================================
// CLIP PLANE SEEDING AND ESTIMATION
// ============================================================================

#[test]
fn test_integration_seeded_clip_planes_before_first_render() {
    let scene = Scene::new(Box::new(SphereMesh::new(100.0)), 1.0, 200.0);

    // camera_d 200 minus the staging-cube half diagonal 174.
    assert_eq!(scene.near_plane_bound(), 26.0);
    assert_eq!(scene.near_plane(), 26.0);
    assert_eq!(scene.far_plane(), 374.0);
}

#[test]
fn test_integration_render_estimates_sphere_bounds() {
    let mut device = RecordingDevice::new(4, 4);
    let shader = RecordingShader::new();
    let mut scene = Scene::new(Box::new(SphereMesh::new(100.0)), 1.0, 200.0);

    scene
        .render(&mut device, &shader, 20.0, &head_on_pose(200.0))
        .unwrap();

    // Sphere of radius 100 seen from 200 out: bounds 100 and 300,
    // margins applied on top.
    assert!((scene.near_plane_bound() - 100.0).abs() < 1e-3);
    assert!((scene.near_plane() - 99.0).abs() < 1e-3);
    assert!((scene.far_plane() - 303.0).abs() < 1e-3);

    // The shader sees exactly the stored planes.
    assert_eq!(
        shader.uniform("near_plane"),
        Some(UniformValue::Scalar(scene.near_plane()))
    );
    assert_eq!(
        shader.uniform("far_plane"),
        Some(UniformValue::Scalar(scene.far_plane()))
    );
}

#[test]
fn test_integration_near_plane_invariant_across_poses() {
    for camera_distance in [150.0f64, 200.0, 500.0, 1000.0] {
        for radius in [10.0f32, 100.0, 173.0] {
            let mut device = RecordingDevice::new(2, 2);
            let shader = RecordingShader::new();
            let mut scene = Scene::new(Box::new(SphereMesh::new(radius)), 1.0, 200.0);

            scene
                .render(&mut device, &shader, 20.0, &head_on_pose(camera_distance))
                .unwrap();

            assert!(scene.near_plane() >= MIN_NEAR_PLANE);
            assert!(scene.near_plane() < scene.far_plane());
        }
    }
}

// ============================================================================
// POSE CONVENTION AGREEMENT
// ============================================================================

#[test]
fn test_integration_euler_and_physics_conventions_agree() {
    let euler = Pose::from_euler(&EulerPose {
        model_rotation: DVec3::ZERO,
        camera_position: DVec3::new(0.0, 0.0, 200.0),
        camera_rotation: DVec3::ZERO,
    });
    let physics = Pose::from_physics(&PhysicsPose {
        model_orientation: DQuat::IDENTITY,
        translation: DVec3::new(0.0, 0.0, -200.0),
        camera_orientation: DQuat::IDENTITY,
    });

    let render = |pose: &Pose| {
        let mut device = RecordingDevice::new(2, 2);
        let shader = RecordingShader::new();
        let mut scene = Scene::new(Box::new(SphereMesh::new(100.0)), 1.0, 200.0);
        scene.render(&mut device, &shader, 20.0, pose).unwrap();
        (
            scene.near_plane(),
            scene.far_plane(),
            shader.uniform("ViewMatrix"),
            shader.uniform("ModelViewMatrix"),
            shader.uniform("ModelViewProjectionMatrix"),
        )
    };

    assert_eq!(render(&euler), render(&physics));
}
