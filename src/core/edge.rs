//! Edge entity and the canonical vertex-pair key used for edge deduplication.
//!
//! Edges are undirected: the pair `(a, b)` and the pair `(b, a)` describe the
//! same edge. [`VertexPair`] canonicalizes endpoint order so the mesh can keep
//! a single hash map from unordered pairs to edges, giving O(1) idempotent
//! edge creation.

use crate::core::collections::SmallBuffer;
use crate::core::mesh::{FaceKey, VertexKey};
use slotmap::Key;

/// Canonical identifier for an unordered pair of vertices.
///
/// The endpoints are reordered on construction so `(a, b)` and `(b, a)` map
/// to the same value. Ordering uses the raw slotmap key representation, which
/// is arbitrary but stable within a mesh lifetime.
///
/// # Examples
///
/// ```rust
/// use conway::core::edge::VertexPair;
/// use conway::core::mesh::Mesh;
/// use conway::geometry::Vector3;
///
/// let mesh = Mesh::new("pair");
/// let a = mesh.add_vertex(Vector3::ZERO);
/// let b = mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0));
///
/// assert_eq!(VertexPair::new(a, b), VertexPair::new(b, a));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexPair {
    v0: VertexKey,
    v1: VertexKey,
}

impl VertexPair {
    /// Creates a canonical pair from two vertex keys in either order.
    #[must_use]
    pub fn new(a: VertexKey, b: VertexKey) -> Self {
        if a.data().as_ffi() <= b.data().as_ffi() {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }

    /// The two endpoints in canonical order.
    #[inline]
    #[must_use]
    pub const fn endpoints(self) -> (VertexKey, VertexKey) {
        (self.v0, self.v1)
    }
}

/// A mesh edge: two distinct endpoint vertices and the faces that share it.
///
/// A closed manifold gives every edge exactly two incident faces; a single
/// face is permitted transiently while a mesh is under construction.
#[derive(Clone, Debug)]
pub struct Edge {
    endpoints: (VertexKey, VertexKey),
    faces: SmallBuffer<FaceKey, 2>,
}

impl Edge {
    pub(crate) fn new(a: VertexKey, b: VertexKey) -> Self {
        Self {
            endpoints: (a, b),
            faces: SmallBuffer::new(),
        }
    }

    /// The endpoint vertices in creation order.
    #[inline]
    #[must_use]
    pub const fn endpoints(&self) -> (VertexKey, VertexKey) {
        self.endpoints
    }

    /// Whether `vertex` is one of the endpoints.
    #[inline]
    #[must_use]
    pub fn has_endpoint(&self, vertex: VertexKey) -> bool {
        self.endpoints.0 == vertex || self.endpoints.1 == vertex
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not an
    /// endpoint of this edge.
    #[must_use]
    pub fn other_vertex(&self, vertex: VertexKey) -> Option<VertexKey> {
        if self.endpoints.0 == vertex {
            Some(self.endpoints.1)
        } else if self.endpoints.1 == vertex {
            Some(self.endpoints.0)
        } else {
            None
        }
    }

    /// Faces incident to this edge.
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &[FaceKey] {
        &self.faces
    }

    pub(crate) fn attach_face(&mut self, face: FaceKey) {
        if !self.faces.contains(&face) {
            self.faces.push(face);
        }
    }

    pub(crate) fn detach_face(&mut self, face: FaceKey) {
        self.faces.retain(|&mut f| f != face);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collections::FastHashSet;
    use slotmap::SlotMap;

    fn three_vertices() -> (VertexKey, VertexKey, VertexKey) {
        let mut vertices: SlotMap<VertexKey, ()> = SlotMap::with_key();
        (vertices.insert(()), vertices.insert(()), vertices.insert(()))
    }

    #[test]
    fn vertex_pair_is_canonical() {
        let (a, b, c) = three_vertices();

        assert_eq!(VertexPair::new(a, b), VertexPair::new(b, a));
        assert_ne!(VertexPair::new(a, b), VertexPair::new(a, c));

        let mut pairs: FastHashSet<VertexPair> = FastHashSet::default();
        pairs.insert(VertexPair::new(a, b));
        pairs.insert(VertexPair::new(b, a));
        pairs.insert(VertexPair::new(b, c));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn other_vertex_returns_none_for_non_endpoint() {
        let (a, b, c) = three_vertices();
        let edge = Edge::new(a, b);

        assert_eq!(edge.other_vertex(a), Some(b));
        assert_eq!(edge.other_vertex(b), Some(a));
        assert_eq!(edge.other_vertex(c), None);
    }

    #[test]
    fn face_attachment_is_bounded_and_idempotent() {
        let (a, b, _) = three_vertices();
        let mut faces: SlotMap<FaceKey, ()> = SlotMap::with_key();
        let f1 = faces.insert(());
        let f2 = faces.insert(());

        let mut edge = Edge::new(a, b);
        edge.attach_face(f1);
        edge.attach_face(f1);
        edge.attach_face(f2);
        assert_eq!(edge.faces(), &[f1, f2]);

        edge.detach_face(f1);
        assert_eq!(edge.faces(), &[f2]);
    }
}
