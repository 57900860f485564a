//! Explicit Euler time stepping.

use crate::anchor::Anchor;
use crate::float::Float;
use crate::particle::Particle;

/// Advance every particle by `dt`.
///
/// Free particles integrate their accumulated force. Attached particles
/// are snapped to `anchor.transform(offset)` when an anchor is given;
/// their velocity is not derived from the anchor's motion.
pub fn integrate<F: Float>(particles: &mut [Particle<F>], dt: F, anchor: Option<&Anchor<F>>) {
    for p in particles.iter_mut() {
        if !p.is_attached() {
            p.integrate(dt);
        } else if let Some(anchor) = anchor {
            p.move_to(anchor.transform(p.offset));
        }
    }
}
