//! Face-normal computation via Newell's method.
//!
//! Newell's method sums cross-terms over all edges of a polygon instead of
//! picking three vertices and hoping they are not collinear. That makes it
//! robust for the slightly non-planar polygons that topological operators
//! produce before renormalization.

use crate::geometry::vector::Vector3;
use thiserror::Error;

/// Minimum accumulator length accepted before a normal counts as degenerate.
pub const MIN_NORMAL_LENGTH: f64 = 1e-12;

/// Errors from face-normal computation.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum NormalError {
    /// Fewer than three vertices were supplied.
    #[error("insufficient vertices for normal calculation: {count}")]
    InsufficientVertices {
        /// Number of vertices that were supplied.
        count: usize,
    },

    /// The Newell accumulator was shorter than [`MIN_NORMAL_LENGTH`],
    /// which happens for collinear or coincident vertices.
    #[error("degenerate face normal (length {length:e})")]
    Degenerate {
        /// Length of the accumulated (un-normalized) normal.
        length: f64,
    },
}

/// Computes the unit normal of the polygon described by `positions` using
/// Newell's method.
///
/// The winding of `positions` determines the direction: counter-clockwise
/// order (viewed from the tip of the returned normal) yields that normal.
///
/// # Errors
///
/// Returns [`NormalError::InsufficientVertices`] for fewer than three
/// positions and [`NormalError::Degenerate`] when the accumulator is too
/// short to normalize reliably.
///
/// # Examples
///
/// ```rust
/// use conway::geometry::{newell_normal, Vector3};
///
/// // A unit square in the XY plane, wound counter-clockwise seen from +Z.
/// let square = [
///     Vector3::new(0.0, 0.0, 0.0),
///     Vector3::new(1.0, 0.0, 0.0),
///     Vector3::new(1.0, 1.0, 0.0),
///     Vector3::new(0.0, 1.0, 0.0),
/// ];
///
/// let normal = newell_normal(&square).unwrap();
/// assert_eq!(normal, Vector3::new(0.0, 0.0, 1.0));
/// ```
pub fn newell_normal(positions: &[Vector3]) -> Result<Vector3, NormalError> {
    if positions.len() < 3 {
        return Err(NormalError::InsufficientVertices {
            count: positions.len(),
        });
    }

    let mut normal = Vector3::ZERO;
    for (i, &current) in positions.iter().enumerate() {
        let next = positions[(i + 1) % positions.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    let length = normal.length();
    if length < MIN_NORMAL_LENGTH {
        return Err(NormalError::Degenerate { length });
    }

    Ok(normal * (1.0 / length))
}
