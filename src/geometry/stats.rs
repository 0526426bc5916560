//! Aggregate geometric measurements over a whole mesh.
//!
//! These records are diagnostic output: they summarize edge lengths, face
//! areas, and spatial extent without exposing any connectivity. They are
//! produced by [`Mesh::geometry_stats`](crate::core::mesh::Mesh::geometry_stats).

use crate::geometry::vector::Vector3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box over the vertices of a mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Component-wise minimum corner.
    pub min: Vector3,
    /// Component-wise maximum corner.
    pub max: Vector3,
}

impl BoundingBox {
    /// Creates a degenerate box containing only `point`.
    #[must_use]
    pub const fn at(point: Vector3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box to contain `point`.
    pub fn expand(&mut self, point: Vector3) {
        self.min = self.min.component_min(point);
        self.max = self.max.component_max(point);
    }

    /// Edge lengths of the box along the three axes.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Summary statistics over a mesh's edges, faces, and extent.
///
/// A mesh with no edges or no faces yields the all-zero record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryStats {
    /// Shortest edge length.
    pub min_edge_length: f64,
    /// Longest edge length.
    pub max_edge_length: f64,
    /// Mean edge length.
    pub avg_edge_length: f64,
    /// Smallest face area.
    pub min_face_area: f64,
    /// Largest face area.
    pub max_face_area: f64,
    /// Mean face area.
    pub avg_face_area: f64,
    /// Axis-aligned bounding box over all vertices.
    pub bounding_box: BoundingBox,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_expansion() {
        let mut bounds = BoundingBox::at(Vector3::new(1.0, 1.0, 1.0));
        bounds.expand(Vector3::new(-1.0, 0.0, 2.0));
        bounds.expand(Vector3::new(0.0, 3.0, 0.0));

        assert_eq!(bounds.min, Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(bounds.extent(), Vector3::new(2.0, 3.0, 2.0));
    }

    #[test]
    fn default_stats_are_zero() {
        let stats = GeometryStats::default();
        assert_eq!(stats.min_edge_length, 0.0);
        assert_eq!(stats.max_face_area, 0.0);
        assert_eq!(stats.bounding_box.extent(), Vector3::ZERO);
    }
}
