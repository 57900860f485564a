//! Renderable triangle surface derived from the particle grid.

use crate::float::Float;
use crate::mesh::ParticleMesh;
use crate::vec::{Vec2, Vec3};
use alloc::vec::Vec;

/// One triangle of the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face<F: Float> {
    pub indices: [usize; 3],
    /// Unit flat normal, refreshed by [`SurfaceMesh::compute_normals`].
    pub normal: Vec3<F>,
    /// Texture coordinates of the three corners. Fixed at creation.
    pub uvs: [Vec2<F>; 3],
}

/// Positions mirror the particles 1:1; faces are two triangles per grid
/// cell sharing the `p1`–`p3` diagonal.
///
/// Vertex normals are the normalized sum of the unit normals of every
/// face touching the vertex. Dirty flags tell the renderer which
/// buffers changed since its last upload.
pub struct SurfaceMesh<F: Float> {
    positions: Vec<Vec3<F>>,
    normals: Vec<Vec3<F>>,
    uvs: Vec<Vec2<F>>,
    faces: Vec<Face<F>>,
    positions_dirty: bool,
    normals_dirty: bool,
}

impl<F: Float> SurfaceMesh<F> {
    pub fn new(mesh: &ParticleMesh<F>) -> Self {
        let sx = mesh.subdivisions_x();
        let sy = mesh.subdivisions_y();

        let mut uvs = Vec::with_capacity(sx * sy);
        for x in 0..sx {
            for y in 0..sy {
                let u = F::from_f32(x as f32) / F::from_f32((sx - 1) as f32);
                let v = F::from_f32(y as f32) / F::from_f32((sy - 1) as f32);
                uvs.push(Vec2::new(u, F::one() - v));
            }
        }

        let faces = mesh
            .triangles()
            .into_iter()
            .map(|indices| Face {
                indices,
                normal: Vec3::zero(),
                uvs: indices.map(|i| uvs[i]),
            })
            .collect();

        let mut surface = SurfaceMesh {
            positions: mesh.positions(),
            normals: Vec::new(),
            uvs,
            faces,
            positions_dirty: true,
            normals_dirty: true,
        };
        surface.compute_normals();
        surface
    }

    /// Copy the current particle positions into the vertex buffer.
    pub fn sync_positions(&mut self, mesh: &ParticleMesh<F>) {
        for (dst, p) in self.positions.iter_mut().zip(mesh.particles()) {
            *dst = p.position;
        }
        self.positions_dirty = true;
    }

    /// Recompute flat face normals and smoothed vertex normals.
    pub fn compute_normals(&mut self) {
        let mut sums = alloc::vec![Vec3::zero(); self.positions.len()];
        for face in self.faces.iter_mut() {
            let [a, b, c] = face.indices;
            let e1 = self.positions[b] - self.positions[a];
            let e2 = self.positions[c] - self.positions[a];
            face.normal = e1.cross(e2).normalize();
            for i in face.indices {
                sums[i] += face.normal;
            }
        }
        self.normals = sums.into_iter().map(|n| n.normalize()).collect();
        self.normals_dirty = true;
    }

    /// Clear both dirty flags once the renderer has uploaded the buffers.
    pub fn mark_clean(&mut self) {
        self.positions_dirty = false;
        self.normals_dirty = false;
    }

    pub fn positions(&self) -> &[Vec3<F>] { &self.positions }
    pub fn normals(&self) -> &[Vec3<F>] { &self.normals }
    pub fn uvs(&self) -> &[Vec2<F>] { &self.uvs }
    pub fn faces(&self) -> &[Face<F>] { &self.faces }
    pub fn vertex_count(&self) -> usize { self.positions.len() }
    pub fn face_count(&self) -> usize { self.faces.len() }
    pub fn positions_dirty(&self) -> bool { self.positions_dirty }
    pub fn normals_dirty(&self) -> bool { self.normals_dirty }

    /// Flat `[x0, y0, z0, x1, ...]`.
    pub fn position_buffer(&self) -> Vec<F> {
        flatten(&self.positions)
    }

    /// Flat `[nx0, ny0, nz0, ...]`.
    pub fn normal_buffer(&self) -> Vec<F> {
        flatten(&self.normals)
    }

    /// Flat `[u0, v0, u1, v1, ...]`, one pair per vertex.
    pub fn uv_buffer(&self) -> Vec<F> {
        self.uvs.iter().flat_map(|uv| [uv.x, uv.y]).collect()
    }

    /// Triangle list indices.
    pub fn index_buffer(&self) -> Vec<u32> {
        self.faces
            .iter()
            .flat_map(|f| f.indices.map(|i| i as u32))
            .collect()
    }
}

fn flatten<F: Float>(vs: &[Vec3<F>]) -> Vec<F> {
    vs.iter().flat_map(|v| [v.x, v.y, v.z]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Anchor;
    use crate::config::{Attachment, ClothConfig};
    use approx::assert_abs_diff_eq;

    fn flat_mesh(sx: usize, sy: usize) -> ParticleMesh<f64> {
        let config = ClothConfig::new()
            .with_size(1.0, 1.0)
            .with_subdivisions(sx, sy)
            .with_jitter(0.0, 0)
            .with_attachment(Attachment::None);
        ParticleMesh::new(&config, &Anchor::default()).unwrap()
    }

    #[test]
    fn counts_follow_grid() {
        let surface = SurfaceMesh::new(&flat_mesh(5, 3));
        assert_eq!(surface.vertex_count(), 15);
        assert_eq!(surface.face_count(), 2 * 4 * 2);
        assert_eq!(surface.index_buffer().len(), 3 * 16);
        assert_eq!(surface.position_buffer().len(), 45);
        assert_eq!(surface.uv_buffer().len(), 30);
    }

    #[test]
    fn flat_grid_normals_agree() {
        let surface = SurfaceMesh::new(&flat_mesh(4, 4));
        // x right and y down in the XY plane: the winding faces -Z.
        for f in surface.faces() {
            assert_abs_diff_eq!(f.normal.z, -1.0, epsilon = 1e-12);
        }
        for n in surface.normals() {
            assert_abs_diff_eq!(n.z, -1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn uvs_span_unit_square() {
        let surface = SurfaceMesh::new(&flat_mesh(3, 3));
        assert_eq!(surface.uvs()[0], Vec2::new(0.0, 1.0));
        assert_eq!(surface.uvs()[8], Vec2::new(1.0, 0.0));
        let f = surface.faces()[0];
        assert_eq!(f.uvs, [Vec2::new(0.0, 1.0), Vec2::new(0.5, 1.0), Vec2::new(0.5, 0.5)]);
    }

    #[test]
    fn dirty_flags_cycle() {
        let mesh = flat_mesh(2, 2);
        let mut surface = SurfaceMesh::new(&mesh);
        assert!(surface.positions_dirty() && surface.normals_dirty());
        surface.mark_clean();
        assert!(!surface.positions_dirty());
        surface.sync_positions(&mesh);
        assert!(surface.positions_dirty());
        assert!(!surface.normals_dirty());
    }
}
