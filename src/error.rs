//! Error types for cloth construction and state checks.

use core::fmt;

/// Errors that can occur while building or checking a cloth.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid must be at least 2x2 particles.
    InvalidGridDimensions { x: usize, y: usize },
    /// Width and height must be positive and finite.
    InvalidExtent,
    /// Total mass must be positive and finite.
    InvalidMass,
    /// At least one substep per frame is required.
    InvalidSubsteps,
    /// Bending stride must be at least one cell on both axes.
    InvalidBendingSpacing,
    /// Spring constant and damping factor must be non-negative and finite.
    InvalidSpringParameters,
    /// An explicit attachment point lies outside the grid.
    AttachmentOutOfBounds { x: usize, y: usize },
    /// A particle position or velocity is NaN or infinite.
    NonFiniteState { index: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { x, y } => {
                write!(f, "grid must be at least 2x2 (got {}x{})", x, y)
            }
            ClothError::InvalidExtent => write!(f, "width and height must be positive and finite"),
            ClothError::InvalidMass => write!(f, "mass must be positive and finite"),
            ClothError::InvalidSubsteps => write!(f, "substep count must be at least 1"),
            ClothError::InvalidBendingSpacing => write!(f, "bending spacing must be at least 1"),
            ClothError::InvalidSpringParameters => {
                write!(f, "spring constant and damping must be non-negative and finite")
            }
            ClothError::AttachmentOutOfBounds { x, y } => {
                write!(f, "attachment point ({}, {}) is outside the grid", x, y)
            }
            ClothError::NonFiniteState { index } => {
                write!(f, "particle {} has a non-finite position or velocity", index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_dimensions() {
        let e = ClothError::InvalidGridDimensions { x: 1, y: 4 };
        assert_eq!(e.to_string(), "grid must be at least 2x2 (got 1x4)");
    }
}
