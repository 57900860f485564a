//! Cloth construction parameters.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid coordinates and extents handed to a custom layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridPoint<F: Float> {
    pub x: usize,
    pub y: usize,
    pub subdivisions_x: usize,
    pub subdivisions_y: usize,
    pub width: F,
    pub height: F,
}

impl<F: Float> GridPoint<F> {
    /// Normalized position along X in [0, 1].
    pub fn u(&self) -> F {
        F::from_f32(self.x as f32) / F::from_f32((self.subdivisions_x - 1) as f32)
    }

    /// Normalized position along Y in [0, 1].
    pub fn v(&self) -> F {
        F::from_f32(self.y as f32) / F::from_f32((self.subdivisions_y - 1) as f32)
    }
}

/// Initial placement of the grid, relative to the anchor.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout<F: Float> {
    /// XY plane, hanging down: x in [-w/2, w/2], y in [-h, 0].
    Vertical,
    /// XZ plane, centred: x in [-w/2, w/2], z in [-h/2, h/2].
    Horizontal,
    /// Caller-supplied placement.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(GridPoint<F>) -> Vec3<F>),
}

/// Variants compare equal by kind only; custom placement functions are
/// not compared.
impl<F: Float> PartialEq for Layout<F> {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl<F: Float> Layout<F> {
    pub fn position(&self, point: GridPoint<F>) -> Vec3<F> {
        let half = F::half();
        match self {
            Layout::Vertical => Vec3::new(
                point.u() * point.width - point.width * half,
                -point.v() * point.height,
                F::zero(),
            ),
            Layout::Horizontal => Vec3::new(
                point.u() * point.width - point.width * half,
                F::zero(),
                -point.v() * point.height + point.height * half,
            ),
            Layout::Custom(place) => place(point),
        }
    }
}

/// Which particles are pinned to the anchor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Attachment {
    None,
    /// Column x = 0, the pole side.
    Flag,
    /// Row y = 0, the top edge.
    Sheet,
    /// Columns x = 0 and x = last.
    Hammock,
    /// Explicit `(x, y)` grid coordinates.
    Points(Vec<(usize, usize)>),
}

impl Attachment {
    /// Grid coordinates selected on a `sx` by `sy` grid.
    pub fn points(&self, sx: usize, sy: usize) -> Vec<(usize, usize)> {
        match self {
            Attachment::None => Vec::new(),
            Attachment::Flag => (0..sy).map(|y| (0, y)).collect(),
            Attachment::Sheet => (0..sx).map(|x| (x, 0)).collect(),
            Attachment::Hammock => (0..sy)
                .flat_map(|y| [(0, y), (sx - 1, y)])
                .collect(),
            Attachment::Points(points) => points.clone(),
        }
    }
}

/// Configuration for a cloth.
///
/// # Builder Pattern
/// ```
/// use drape::config::{Attachment, ClothConfig};
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_size(1.0, 1.0)
///     .with_subdivisions(8, 8)
///     .with_springs(5.0, 0.05)
///     .with_attachment(Attachment::Sheet)
///     .with_substeps(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothConfig<F: Float> {
    /// World-space extent along X. Default: 2.
    pub width: F,
    /// World-space extent along the second grid axis. Default: 1.5.
    pub height: F,
    /// Total mass, split evenly over all particles. Default: 0.3.
    pub mass: F,
    /// Particle columns. Default: 30.
    pub subdivisions_x: usize,
    /// Particle rows. Default: 15.
    pub subdivisions_y: usize,
    /// Default: 1.
    pub spring_constant: F,
    /// Default: 0.01.
    pub damping_factor: F,
    /// Stride in cells between bending springs. Default: 3 x 3.
    pub bending_spacing_x: usize,
    pub bending_spacing_y: usize,
    /// Substeps per `animate` call. Higher = more stable. Default: 10.
    pub substeps: usize,
    /// Maximum random displacement in X and Z. Default: 0.01.
    pub jitter: F,
    /// Seed for the jitter. Default: 0.
    pub seed: u64,
    /// Contact skin for planes and spheres. Default: 0.01.
    pub collision_epsilon: F,
    pub attachment: Attachment,
    pub layout: Layout<F>,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            width: F::two(),
            height: F::from_f32(1.5),
            mass: F::from_f32(0.3),
            subdivisions_x: 30,
            subdivisions_y: 15,
            spring_constant: F::one(),
            damping_factor: F::from_f32(0.01),
            bending_spacing_x: 3,
            bending_spacing_y: 3,
            substeps: 10,
            jitter: F::from_f32(0.01),
            seed: 0,
            collision_epsilon: F::from_f32(0.01),
            attachment: Attachment::Flag,
            layout: Layout::Vertical,
        }
    }

    pub fn with_size(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_subdivisions(mut self, x: usize, y: usize) -> Self {
        self.subdivisions_x = x;
        self.subdivisions_y = y;
        self
    }

    pub fn with_springs(mut self, spring_constant: F, damping_factor: F) -> Self {
        self.spring_constant = spring_constant;
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_bending_spacing(mut self, x: usize, y: usize) -> Self {
        self.bending_spacing_x = x;
        self.bending_spacing_y = y;
        self
    }

    pub fn with_substeps(mut self, substeps: usize) -> Self {
        self.substeps = substeps;
        self
    }

    pub fn with_jitter(mut self, jitter: F, seed: u64) -> Self {
        self.jitter = jitter;
        self.seed = seed;
        self
    }

    pub fn with_collision_epsilon(mut self, epsilon: F) -> Self {
        self.collision_epsilon = epsilon;
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = attachment;
        self
    }

    pub fn with_layout(mut self, layout: Layout<F>) -> Self {
        self.layout = layout;
        self
    }

    pub fn particle_count(&self) -> usize {
        self.subdivisions_x * self.subdivisions_y
    }

    /// Reject configurations that cannot produce a usable mesh.
    pub fn validate(&self) -> Result<(), ClothError> {
        let (sx, sy) = (self.subdivisions_x, self.subdivisions_y);
        if sx < 2 || sy < 2 {
            return Err(ClothError::InvalidGridDimensions { x: sx, y: sy });
        }
        let positive = |v: F| v.is_finite() && v > F::zero();
        if !positive(self.width) || !positive(self.height) {
            return Err(ClothError::InvalidExtent);
        }
        if !positive(self.mass) {
            return Err(ClothError::InvalidMass);
        }
        if self.substeps == 0 {
            return Err(ClothError::InvalidSubsteps);
        }
        if self.bending_spacing_x == 0 || self.bending_spacing_y == 0 {
            return Err(ClothError::InvalidBendingSpacing);
        }
        let non_negative = |v: F| v.is_finite() && v >= F::zero();
        if !non_negative(self.spring_constant) || !non_negative(self.damping_factor) {
            return Err(ClothError::InvalidSpringParameters);
        }
        if let Attachment::Points(points) = &self.attachment {
            if let Some(&(x, y)) = points.iter().find(|&&(x, y)| x >= sx || y >= sy) {
                return Err(ClothError::AttachmentOutOfBounds { x, y });
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ClothConfig::<f32>::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_single_row() {
        let config = ClothConfig::<f32>::new().with_subdivisions(5, 1);
        assert_eq!(
            config.validate(),
            Err(ClothError::InvalidGridDimensions { x: 5, y: 1 })
        );
    }

    #[test]
    fn rejects_zero_substeps_and_spacing() {
        let config = ClothConfig::<f64>::new().with_substeps(0);
        assert_eq!(config.validate(), Err(ClothError::InvalidSubsteps));
        let config = ClothConfig::<f64>::new().with_bending_spacing(0, 3);
        assert_eq!(config.validate(), Err(ClothError::InvalidBendingSpacing));
    }

    #[test]
    fn rejects_bad_mass_and_extent() {
        assert_eq!(
            ClothConfig::<f32>::new().with_mass(0.0).validate(),
            Err(ClothError::InvalidMass)
        );
        assert_eq!(
            ClothConfig::<f32>::new().with_size(f32::NAN, 1.0).validate(),
            Err(ClothError::InvalidExtent)
        );
        assert_eq!(
            ClothConfig::<f32>::new().with_springs(-1.0, 0.0).validate(),
            Err(ClothError::InvalidSpringParameters)
        );
    }

    #[test]
    fn rejects_points_off_grid() {
        let config = ClothConfig::<f32>::new()
            .with_subdivisions(4, 4)
            .with_attachment(Attachment::Points(vec![(0, 0), (4, 1)]));
        assert_eq!(
            config.validate(),
            Err(ClothError::AttachmentOutOfBounds { x: 4, y: 1 })
        );
    }

    #[test]
    fn attachment_selectors() {
        assert_eq!(Attachment::Flag.points(3, 2), vec![(0, 0), (0, 1)]);
        assert_eq!(Attachment::Sheet.points(3, 2), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(
            Attachment::Hammock.points(3, 2),
            vec![(0, 0), (2, 0), (0, 1), (2, 1)]
        );
        assert!(Attachment::None.points(3, 2).is_empty());
    }

    #[test]
    fn vertical_layout_spans_extent() {
        let corner = |x, y| GridPoint {
            x,
            y,
            subdivisions_x: 3,
            subdivisions_y: 3,
            width: 2.0f64,
            height: 1.0,
        };
        assert_eq!(Layout::Vertical.position(corner(0, 0)), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(Layout::Vertical.position(corner(2, 2)), Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(Layout::Horizontal.position(corner(2, 2)), Vec3::new(1.0, 0.0, -0.5));
    }

    fn lifted(point: GridPoint<f64>) -> Vec3<f64> {
        Vec3::new(point.u(), 1.0, point.v())
    }

    fn sunk(point: GridPoint<f64>) -> Vec3<f64> {
        Vec3::new(point.u(), -1.0, point.v())
    }

    #[test]
    fn layouts_compare_by_kind() {
        assert_eq!(Layout::<f64>::Vertical, Layout::Vertical);
        assert_ne!(Layout::<f64>::Vertical, Layout::Horizontal);
        assert_eq!(Layout::Custom(lifted), Layout::Custom(sunk));
        assert_ne!(Layout::Custom(lifted), Layout::Vertical);

        let a = ClothConfig::<f64>::new().with_layout(Layout::Custom(lifted));
        assert_eq!(a.clone(), a);
    }
}
