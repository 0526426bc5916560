//! Face entity with its lazily computed geometry record.
//!
//! A face stores its boundary twice: an ordered vertex sequence (counter-
//! clockwise seen from outside the mesh) and the parallel edge sequence where
//! `edges[i]` joins `vertices[i]` to `vertices[(i + 1) % n]`. Derived
//! geometry (normal, centroid, area) is computed once on demand and cached
//! behind a per-face readers-writer lock with the double-checked pattern, so
//! concurrent readers always observe one bitwise-identical record.

use crate::core::mesh::{EdgeKey, VertexKey};
use crate::geometry::vector::Vector3;
use std::sync::{PoisonError, RwLock};

/// Derived per-face geometry: outward normal, centroid, and area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    /// Unit outward normal (zero for degenerate faces).
    pub normal: Vector3,
    /// Arithmetic mean of the boundary vertex positions.
    pub centroid: Vector3,
    /// Polygon area from fan triangulation.
    pub area: f64,
}

/// A polygonal mesh face.
#[derive(Debug)]
pub struct Face {
    vertices: Vec<VertexKey>,
    edges: Vec<EdgeKey>,
    geometry: RwLock<Option<FaceGeometry>>,
}

impl Face {
    pub(crate) fn new(vertices: Vec<VertexKey>, edges: Vec<EdgeKey>) -> Self {
        Self {
            vertices,
            edges,
            geometry: RwLock::new(None),
        }
    }

    /// Number of boundary vertices (equal to the number of boundary edges).
    #[inline]
    #[must_use]
    pub fn degree(&self) -> usize {
        self.vertices.len()
    }

    /// Boundary vertices in counter-clockwise order seen from outside.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[VertexKey] {
        &self.vertices
    }

    /// Boundary edges; `edges()[i]` joins `vertices()[i]` to its successor.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Whether `edge` bounds this face.
    #[inline]
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeKey) -> bool {
        self.edges.contains(&edge)
    }

    pub(crate) fn remove_edge(&mut self, edge: EdgeKey) {
        self.edges.retain(|&e| e != edge);
    }

    /// Returns the cached geometry record, if one has been computed.
    pub(crate) fn cached_geometry(&self) -> Option<FaceGeometry> {
        *self
            .geometry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a freshly computed geometry record.
    ///
    /// Double-checked: if another thread stored a record between the caller's
    /// cache miss and this call, the already-stored record wins and is
    /// returned, so every observer sees identical values.
    pub(crate) fn store_geometry(&self, computed: FaceGeometry) -> FaceGeometry {
        let mut slot = self
            .geometry
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match *slot {
            Some(existing) => existing,
            None => {
                *slot = Some(computed);
                computed
            }
        }
    }

    pub(crate) fn invalidate_geometry(&self) {
        *self
            .geometry
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn sample_face() -> Face {
        let mut vertices: SlotMap<VertexKey, ()> = SlotMap::with_key();
        let mut edges: SlotMap<EdgeKey, ()> = SlotMap::with_key();
        let vs: Vec<_> = (0..3).map(|_| vertices.insert(())).collect();
        let es: Vec<_> = (0..3).map(|_| edges.insert(())).collect();
        Face::new(vs, es)
    }

    #[test]
    fn degree_matches_boundary_length() {
        let face = sample_face();
        assert_eq!(face.degree(), 3);
        assert_eq!(face.vertices().len(), face.edges().len());
    }

    #[test]
    fn geometry_cache_double_check_keeps_first_record() {
        let face = sample_face();
        assert!(face.cached_geometry().is_none());

        let first = FaceGeometry {
            normal: Vector3::new(0.0, 0.0, 1.0),
            centroid: Vector3::ZERO,
            area: 1.0,
        };
        let second = FaceGeometry {
            normal: Vector3::new(0.0, 0.0, 1.0),
            centroid: Vector3::ZERO,
            area: 2.0,
        };

        assert_eq!(face.store_geometry(first), first);
        // A racing store must observe and keep the existing record.
        assert_eq!(face.store_geometry(second), first);
        assert_eq!(face.cached_geometry(), Some(first));

        face.invalidate_geometry();
        assert!(face.cached_geometry().is_none());
        assert_eq!(face.store_geometry(second), second);
    }

    #[test]
    fn edge_removal_keeps_vertex_sequence() {
        let mut face = sample_face();
        let doomed = face.edges()[1];
        face.remove_edge(doomed);
        assert_eq!(face.edges().len(), 2);
        assert!(!face.contains_edge(doomed));
        assert_eq!(face.degree(), 3);
    }
}
