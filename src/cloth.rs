//! The simulated cloth: particle mesh, surface view and anchor.

use crate::anchor::Anchor;
use crate::collision::resolve_collisions;
use crate::config::ClothConfig;
use crate::environment::Environment;
use crate::error::ClothError;
use crate::float::Float;
use crate::forces;
use crate::integrator;
use crate::mesh::ParticleMesh;
use crate::observer::StepObserver;
use crate::surface::SurfaceMesh;
use crate::vec::Vec3;
use alloc::vec::Vec;

/// A cloth driven by spring-dampers, gravity and drag, colliding with the
/// planes and spheres of an [`Environment`].
///
/// ```
/// use drape::{Cloth, ClothConfig, Environment, NoOpStepObserver, Vec3};
/// use drape::anchor::Anchor;
///
/// let config: ClothConfig<f32> = ClothConfig::new().with_subdivisions(6, 4);
/// let mut cloth = Cloth::new(&config, Anchor::at(Vec3::new(0.0, 2.0, 0.0))).unwrap();
/// let env = Environment::new().with_gravity(Vec3::new(0.0, -9.81, 0.0));
///
/// cloth.animate(1.0 / 60.0, &env, &mut NoOpStepObserver);
/// assert_eq!(cloth.surface().face_count(), 2 * 5 * 3);
/// ```
pub struct Cloth<F: Float> {
    mesh: ParticleMesh<F>,
    surface: SurfaceMesh<F>,
    triangles: Vec<[usize; 3]>,
    anchor: Anchor<F>,
    substeps: usize,
    collision_epsilon: F,
}

impl<F: Float> Cloth<F> {
    pub fn new(config: &ClothConfig<F>, anchor: Anchor<F>) -> Result<Self, ClothError> {
        let mesh = ParticleMesh::new(config, &anchor)?;
        let surface = SurfaceMesh::new(&mesh);
        let triangles = mesh.triangles();
        Ok(Cloth {
            mesh,
            surface,
            triangles,
            anchor,
            substeps: config.substeps,
            collision_epsilon: config.collision_epsilon,
        })
    }

    /// Advance by `dt`, split into equal substeps of forces, integration
    /// and collisions, then refresh the surface normals.
    pub fn animate<O: StepObserver>(
        &mut self,
        dt: F,
        environment: &Environment<F>,
        observer: &mut O,
    ) {
        let sub_dt = dt / F::from_f32(self.substeps as f32);
        for i in 0..self.substeps {
            self.substep(sub_dt, environment, observer);
            observer.on_substep_complete(i);
        }
        self.surface.compute_normals();
        observer.on_step_complete();
    }

    /// One substep. Surface positions are synced at the end; normals are not.
    pub fn substep<O: StepObserver>(
        &mut self,
        dt: F,
        environment: &Environment<F>,
        observer: &mut O,
    ) {
        let (particles, springs) = self.mesh.particles_and_springs_mut();
        forces::accumulate(particles, springs, &self.triangles, environment);
        observer.on_forces();

        let anchor = self.mesh.is_attached().then_some(&self.anchor);
        integrator::integrate(self.mesh.particles_mut(), dt, anchor);
        observer.on_integrate();

        let report = resolve_collisions(
            self.mesh.particles_mut(),
            &environment.planes,
            &environment.spheres,
            self.collision_epsilon,
        );
        observer.on_collisions(&report);

        self.surface.sync_positions(&self.mesh);
    }

    /// Release all attachment constraints.
    pub fn detach(&mut self) {
        self.mesh.detach();
    }

    /// Move the transform attached particles follow from the next substep on.
    pub fn set_anchor(&mut self, anchor: Anchor<F>) {
        self.anchor = anchor;
    }

    pub fn anchor(&self) -> &Anchor<F> { &self.anchor }
    pub fn mesh(&self) -> &ParticleMesh<F> { &self.mesh }
    pub fn surface(&self) -> &SurfaceMesh<F> { &self.surface }
    pub fn surface_mut(&mut self) -> &mut SurfaceMesh<F> { &mut self.surface }
    pub fn substeps(&self) -> usize { self.substeps }
    pub fn is_attached(&self) -> bool { self.mesh.is_attached() }

    /// Unweighted mean particle position, attached particles included.
    pub fn centroid(&self) -> Vec3<F> {
        let ps = self.mesh.particles();
        let sum = ps.iter().fold(Vec3::zero(), |acc, p| acc + p.position);
        sum.scale(F::one() / F::from_f32(ps.len() as f32))
    }

    /// First particle whose position or velocity is NaN or infinite.
    pub fn check_finite(&self) -> Result<(), ClothError> {
        match self.mesh.particles().iter().position(|p| !p.is_finite()) {
            Some(index) => Err(ClothError::NonFiniteState { index }),
            None => Ok(()),
        }
    }
}
