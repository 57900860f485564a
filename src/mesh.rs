//! Particle grid and its spring-damper topology.

use crate::anchor::Anchor;
use crate::config::{ClothConfig, GridPoint};
use crate::error::ClothError;
use crate::float::Float;
use crate::particle::Particle;
use crate::spring::SpringDamper;
use crate::vec::Vec3;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A `subdivisions_x` by `subdivisions_y` grid of particles joined by
/// structural, shear and bending spring-dampers.
///
/// Particles are stored column-major: grid point `(x, y)` has index
/// `x * subdivisions_y + y`. Topology is fixed after construction.
pub struct ParticleMesh<F: Float> {
    particles: Vec<Particle<F>>,
    springs: Vec<SpringDamper<F>>,
    attached: Vec<usize>,
    structural_count: usize,
    subdivisions_x: usize,
    subdivisions_y: usize,
    total_mass: F,
    is_attached: bool,
}

impl<F: Float> ParticleMesh<F> {
    /// Build the grid relative to `anchor`.
    ///
    /// Steps: lay out particles, jitter X and Z in anchor space, connect
    /// neighbours, add strided bending springs, then pin the attached set.
    ///
    /// Offsets include the jitter and rest lengths are measured after it,
    /// so the new mesh is at rest whether or not it is attached.
    pub fn new(config: &ClothConfig<F>, anchor: &Anchor<F>) -> Result<Self, ClothError> {
        config.validate()?;

        let sx = config.subdivisions_x;
        let sy = config.subdivisions_y;
        let count = sx * sy;
        let particle_mass = config.mass / F::from_f32(count as f32);

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut particles = Vec::with_capacity(count);
        for x in 0..sx {
            for y in 0..sy {
                let point = GridPoint {
                    x,
                    y,
                    subdivisions_x: sx,
                    subdivisions_y: sy,
                    width: config.width,
                    height: config.height,
                };
                let mut offset = config.layout.position(point);
                offset.x = offset.x + config.jitter * F::from_f32(rng.random_range(-1.0..=1.0));
                offset.z = offset.z + config.jitter * F::from_f32(rng.random_range(-1.0..=1.0));
                let mut p = Particle::new(anchor.transform(offset), particle_mass);
                p.offset = offset;
                particles.push(p);
            }
        }

        let mut springs = Vec::new();
        connect_cells(&mut springs, &particles, (sx, sy), (1, 1), config);
        let structural_count = springs.len();
        connect_cells(
            &mut springs,
            &particles,
            (sx, sy),
            (config.bending_spacing_x, config.bending_spacing_y),
            config,
        );

        let mut attached: Vec<usize> = config
            .attachment
            .points(sx, sy)
            .into_iter()
            .map(|(x, y)| x * sy + y)
            .collect();
        attached.sort_unstable();
        attached.dedup();
        for &i in &attached {
            particles[i].mass = F::zero();
        }

        Ok(ParticleMesh {
            particles,
            springs,
            is_attached: !attached.is_empty(),
            attached,
            structural_count,
            subdivisions_x: sx,
            subdivisions_y: sy,
            total_mass: config.mass,
        })
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        x * self.subdivisions_y + y
    }

    /// Release every attached particle, giving each the uniform share
    /// of the total mass. Anchor-driven positioning stops for good.
    pub fn detach(&mut self) {
        let share = self.particle_mass();
        for &i in &self.attached {
            self.particles[i].mass = share;
        }
        self.is_attached = false;
    }

    /// Uniform per-particle mass, `total_mass / particle_count`.
    pub fn particle_mass(&self) -> F {
        self.total_mass / F::from_f32(self.particles.len() as f32)
    }

    /// Cell corner triples `(p1, p2, p3)` and `(p1, p3, p4)`, two per cell.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        let (sx, sy) = (self.subdivisions_x, self.subdivisions_y);
        let mut out = Vec::with_capacity(2 * (sx - 1) * (sy - 1));
        for x in 0..sx - 1 {
            for y in 0..sy - 1 {
                let [p1, p2, p3, p4] = corners(sy, x, y, 1, 1);
                out.push([p1, p2, p3]);
                out.push([p1, p3, p4]);
            }
        }
        out
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.particles }
    pub fn particle(&self, x: usize, y: usize) -> &Particle<F> { &self.particles[self.index(x, y)] }
    pub fn springs(&self) -> &[SpringDamper<F>] { &self.springs }

    /// Particles for writing alongside the read-only spring topology.
    pub fn particles_and_springs_mut(&mut self) -> (&mut [Particle<F>], &[SpringDamper<F>]) {
        (&mut self.particles, &self.springs)
    }

    pub fn attached_indices(&self) -> &[usize] { &self.attached }
    pub fn is_attached(&self) -> bool { self.is_attached }
    pub fn subdivisions_x(&self) -> usize { self.subdivisions_x }
    pub fn subdivisions_y(&self) -> usize { self.subdivisions_y }
    pub fn total_mass(&self) -> F { self.total_mass }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn structural_count(&self) -> usize { self.structural_count }
    pub fn bending_count(&self) -> usize { self.springs.len() - self.structural_count }

    pub fn positions(&self) -> Vec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }
}

/// Indices of the cell with top-left corner `(x, y)` and size `(dx, dy)`:
/// top-left, top-right, bottom-right, bottom-left.
fn corners(sy: usize, x: usize, y: usize, dx: usize, dy: usize) -> [usize; 4] {
    [
        x * sy + y,
        (x + dx) * sy + y,
        (x + dx) * sy + y + dy,
        x * sy + y + dy,
    ]
}

/// Spring every cell of a lattice with the given stride.
fn connect_cells<F: Float>(
    springs: &mut Vec<SpringDamper<F>>,
    particles: &[Particle<F>],
    (grid_x, grid_y): (usize, usize),
    (dx, dy): (usize, usize),
    config: &ClothConfig<F>,
) {
    let (k, c) = (config.spring_constant, config.damping_factor);
    let spring = |a, b| SpringDamper::from_particles(a, b, particles, k, c);

    //  p1___p2
    //  |\  /
    //  | \/      top and left edges plus both diagonals per cell,
    //  | /\      right and bottom edges on the last column and row
    //  p4  p3
    for x in (0..grid_x).step_by(dx).take_while(|x| x + dx < grid_x) {
        for y in (0..grid_y).step_by(dy).take_while(|y| y + dy < grid_y) {
            let [p1, p2, p3, p4] = corners(grid_y, x, y, dx, dy);
            springs.push(spring(p1, p2));
            springs.push(spring(p4, p1));
            springs.push(spring(p1, p3));
            springs.push(spring(p2, p4));

            if x + 2 * dx >= grid_x {
                springs.push(spring(p2, p3));
            }
            if y + 2 * dy >= grid_y {
                springs.push(spring(p3, p4));
            }
        }
    }
}
