//! Mass-spring-damper cloth simulation for real-time use.
//!
//! `drape` simulates a rectangular grid of point masses joined by
//! spring-dampers, pushed by gravity and aerodynamic drag, and colliding
//! with static planes and moving spheres. Rendering stays outside the
//! crate: each frame the host calls [`Cloth::animate`] and reads back
//! vertex positions and smoothed normals from the [`SurfaceMesh`].
//!
//! # Features
//!
//! - **Spring-damper network**: structural, shear and strided bending springs
//! - **Explicit Euler**: fixed substeps per frame for stiff springs
//! - **Aerodynamics**: per-triangle drag against ambient air
//! - **Collisions**: bounce and friction against planes and spinning spheres
//! - **Attachment**: pin edges to a movable, rotatable anchor; detach at will
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod quat;
pub mod particle;
pub mod spring;
pub mod anchor;
pub mod config;
pub mod mesh;
pub mod surface;
pub mod environment;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod cloth;
pub mod preset;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec2, Vec3};
pub use quat::Quat;
pub use particle::Particle;
pub use spring::SpringDamper;
pub use anchor::Anchor;
pub use config::{Attachment, ClothConfig, GridPoint, Layout};
pub use mesh::ParticleMesh;
pub use surface::{Face, SurfaceMesh};
pub use environment::{Air, Environment};
pub use collision::{ContactReport, Plane, Sphere};
pub use cloth::Cloth;
pub use preset::Preset;
pub use observer::{NoOpStepObserver, StepObserver, StepStats};
pub use error::ClothError;
