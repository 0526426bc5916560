//! Vertex entity: a position plus incidence bookkeeping.

use crate::core::collections::SmallBuffer;
use crate::core::mesh::{EdgeKey, FaceKey};
use crate::geometry::vector::Vector3;

/// A mesh vertex.
///
/// Besides its position, a vertex records the edges and faces incident to it.
/// Both lists are kept in first-attachment order and free of duplicates; they
/// are the starting point for the ordered ring traversals on
/// [`Mesh`](crate::core::mesh::Mesh).
#[derive(Clone, Debug)]
pub struct Vertex {
    position: Vector3,
    edges: SmallBuffer<EdgeKey, 8>,
    faces: SmallBuffer<FaceKey, 8>,
}

impl Vertex {
    pub(crate) fn new(position: Vector3) -> Self {
        Self {
            position,
            edges: SmallBuffer::new(),
            faces: SmallBuffer::new(),
        }
    }

    /// Position of the vertex.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Number of incident edges.
    ///
    /// Every vertex of a valid closed polyhedron has degree at least 3.
    #[inline]
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Incident edges in first-attachment order.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Incident faces in first-attachment order.
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &[FaceKey] {
        &self.faces
    }

    pub(crate) fn attach_edge(&mut self, edge: EdgeKey) {
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    pub(crate) fn detach_edge(&mut self, edge: EdgeKey) {
        self.edges.retain(|&mut e| e != edge);
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
    use slotmap::SlotMap;

    #[test]
    fn attachment_is_idempotent() {
        let mut edges: SlotMap<EdgeKey, ()> = SlotMap::with_key();
        let e = edges.insert(());

        let mut vertex = Vertex::new(Vector3::ZERO);
        vertex.attach_edge(e);
        vertex.attach_edge(e);
        assert_eq!(vertex.degree(), 1);

        vertex.detach_edge(e);
        assert_eq!(vertex.degree(), 0);
    }

    #[test]
    fn face_attachment_preserves_order() {
        let mut faces: SlotMap<FaceKey, ()> = SlotMap::with_key();
        let f1 = faces.insert(());
        let f2 = faces.insert(());
        let f3 = faces.insert(());

        let mut vertex = Vertex::new(Vector3::ZERO);
        vertex.attach_face(f2);
        vertex.attach_face(f1);
        vertex.attach_face(f3);
        assert_eq!(vertex.faces(), &[f2, f1, f3]);

        vertex.detach_face(f1);
        assert_eq!(vertex.faces(), &[f2, f3]);
    }
}
