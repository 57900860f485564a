use approx::assert_relative_eq;
use drape::{Particle, SpringDamper, Vec3};

fn pair(b: Vec3<f64>) -> Vec<Particle<f64>> {
    vec![Particle::new(Vec3::zero(), 1.0), Particle::new(b, 1.0)]
}

#[test]
fn zero_force_at_rest_length_and_rest() {
    let particles = pair(Vec3::new(0.3, -0.4, 0.0));
    let spring = SpringDamper::from_particles(0, 1, &particles, 1.0, 0.01);
    assert_relative_eq!(spring.rest_length, 0.5, epsilon = 1e-15);

    let f = spring.force(&particles);
    assert_eq!(f.length(), 0.0);
}

#[test]
fn compressed_spring_pushes_apart() {
    let mut particles = pair(Vec3::new(1.0, 0.0, 0.0));
    let spring = SpringDamper::new(0, 1, 2.0, 4.0, 0.0);
    spring.apply(&mut particles);

    // Hooke: |F| = k * |rest - dist| = 4
    assert_relative_eq!(particles[0].force.x, -4.0);
    assert_relative_eq!(particles[1].force.x, 4.0);
}

#[test]
fn damping_opposes_separation() {
    let mut particles = pair(Vec3::new(0.0, 1.0, 0.0));
    particles[1].velocity = Vec3::new(0.0, 3.0, 0.0);
    let spring = SpringDamper::from_particles(0, 1, &particles, 10.0, 0.5);
    spring.apply(&mut particles);

    // Only the damper acts: c * closing speed = 1.5, pulling the pair together.
    assert_relative_eq!(particles[0].force.y, 1.5);
    assert_relative_eq!(particles[1].force.y, -1.5);
}

#[test]
fn damping_ignores_tangential_motion() {
    let mut particles = pair(Vec3::new(1.0, 0.0, 0.0));
    particles[1].velocity = Vec3::new(0.0, 0.0, 7.0);
    let spring = SpringDamper::from_particles(0, 1, &particles, 1.0, 2.0);
    assert_eq!(spring.force(&particles).length(), 0.0);
}

#[test]
fn forces_are_equal_and_opposite() {
    let mut particles = pair(Vec3::new(0.7, -1.3, 0.4));
    particles[0].velocity = Vec3::new(0.2, 0.1, -0.5);
    particles[1].velocity = Vec3::new(-1.0, 0.3, 0.9);
    let spring = SpringDamper::new(0, 1, 0.9, 3.0, 0.2);
    spring.apply(&mut particles);

    let net = particles[0].force + particles[1].force;
    assert_relative_eq!(net.length(), 0.0, epsilon = 1e-12);
}
