use approx::{assert_abs_diff_eq, assert_relative_eq};
use drape::collision::resolve_collisions;
use drape::{ContactReport, Particle, Plane, Sphere, Vec3};

fn particle(position: Vec3<f64>, velocity: Vec3<f64>) -> Particle<f64> {
    let mut p = Particle::new(position, 0.01);
    p.velocity = velocity;
    p
}

#[test]
fn plane_clamps_height_and_reverses_normal_velocity() {
    let plane_y = -5.0;
    let eps = 0.01;
    let plane = Plane::ground(plane_y, 0.5, 0.1);

    let cases = [
        (Vec3::new(0.0, -5.5, 0.0), Vec3::new(0.0, -3.0, 0.0)),
        (Vec3::new(1.2, -5.0, -0.4), Vec3::new(0.5, -0.1, 0.5)),
        (Vec3::new(-3.0, -4.995, 2.0), Vec3::new(-2.0, -10.0, 1.0)),
    ];
    for (position, velocity) in cases {
        let mut p = particle(position, velocity);
        assert!(plane.resolve(&mut p, eps));
        assert_abs_diff_eq!(p.position.y, plane_y + eps, epsilon = 1e-12);
        assert!(p.velocity.y > 0.0, "normal velocity should flip sign");
        assert_relative_eq!(p.velocity.y, -0.5 * velocity.y, epsilon = 1e-12);
        assert_relative_eq!(p.velocity.x, 0.9 * velocity.x, epsilon = 1e-12);
        assert_relative_eq!(p.velocity.z, 0.9 * velocity.z, epsilon = 1e-12);
    }
}

#[test]
fn sphere_radial_impact_keeps_half_speed_reversed() {
    let sphere = Sphere::new(Vec3::new(0.0, -4.0, -0.7), 0.5, 0.5, 0.0);
    let incoming = Vec3::new(0.0, -2.0, 0.0);
    let mut p = particle(Vec3::new(0.0, -3.52, -0.7), incoming);

    assert!(sphere.resolve(&mut p, 0.01));
    assert_abs_diff_eq!(p.velocity.y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.velocity.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.velocity.z, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.position.y, -3.49, epsilon = 1e-12);
}

#[test]
fn frictionless_sphere_keeps_tangential_velocity() {
    let sphere = Sphere::new(Vec3::zero(), 1.0, 0.5, 0.0);
    let mut p = particle(Vec3::new(0.0, 0.9, 0.0), Vec3::new(0.3, -2.0, -0.2));

    assert!(sphere.resolve(&mut p, 0.01));
    assert_abs_diff_eq!(p.velocity.x, 0.3, epsilon = 1e-12);
    assert_abs_diff_eq!(p.velocity.z, -0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(p.velocity.y, 1.0, epsilon = 1e-12);
}

#[test]
fn full_friction_removes_relative_sliding() {
    let sphere = Sphere::new(Vec3::zero(), 1.0, 0.0, 1.0);
    let mut p = particle(Vec3::new(0.0, 0.95, 0.0), Vec3::new(2.0, -1.0, 0.0));

    assert!(sphere.resolve(&mut p, 0.01));
    assert_abs_diff_eq!(p.velocity.length(), 0.0, epsilon = 1e-12);
}

#[test]
fn moving_sphere_carries_particle() {
    let sphere = Sphere::new(Vec3::zero(), 1.0, 0.0, 0.0).with_velocity(Vec3::new(0.0, 1.0, 0.0));
    let mut p = particle(Vec3::new(0.0, 1.0, 0.0), Vec3::zero());

    assert!(sphere.resolve(&mut p, 0.01));
    assert_abs_diff_eq!(p.velocity.y, 1.0, epsilon = 1e-12);
}

#[test]
fn plane_and_sphere_both_resolve_in_one_pass() {
    let plane = Plane::ground(0.0, 0.5, 0.0);
    let sphere = Sphere::new(Vec3::new(0.0, -0.3, 0.0), 0.5, 0.0, 0.0);
    let mut particles = [particle(Vec3::new(0.0, -0.05, 0.0), Vec3::new(0.0, -1.0, 0.0))];

    let report = resolve_collisions(&mut particles, &[plane], &[sphere], 0.01);

    assert_eq!(report, ContactReport { plane_contacts: 1, sphere_contacts: 1 });
    assert_eq!(report.total(), 2);
    // The sphere runs last and leaves the particle on its surface.
    assert_abs_diff_eq!(particles[0].position.y, 0.21, epsilon = 1e-12);
}

#[test]
fn particle_outside_everything_is_untouched() {
    let mut particles = [particle(Vec3::new(3.0, 3.0, 3.0), Vec3::new(1.0, 1.0, 1.0))];
    let report = resolve_collisions(
        &mut particles,
        &[Plane::ground(0.0, 0.5, 0.1)],
        &[Sphere::new(Vec3::zero(), 1.0, 0.5, 0.5)],
        0.01,
    );
    assert_eq!(report.total(), 0);
    assert_eq!(particles[0].position, Vec3::new(3.0, 3.0, 3.0));
    assert_eq!(particles[0].velocity, Vec3::new(1.0, 1.0, 1.0));
}
