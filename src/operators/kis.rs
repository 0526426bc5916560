//! Kis operator (`k`): raise a pyramid on every face.

use crate::core::collections::FastHashMap;
use crate::core::mesh::{Mesh, VertexKey};
use crate::operators::Operator;

/// Height of the raised apex above each face centroid, along the face normal.
const APEX_HEIGHT: f64 = 0.5;

/// The kis (stellation) operator.
///
/// Keeps every input vertex, adds one apex vertex per input face at
/// `centroid + 0.5 · normal`, and replaces each face with a fan of triangles
/// from its boundary edges to the apex. The output has `V + F` vertices and
/// only triangular faces.
pub struct Kis;

impl Operator for Kis {
    fn symbol(&self) -> char {
        'k'
    }

    fn name(&self) -> &'static str {
        "kis"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let output = Mesh::new(format!("k{}", mesh.name()));

        let mut carried: FastHashMap<VertexKey, VertexKey> =
            FastHashMap::with_capacity_and_hasher(mesh.vertex_count(), Default::default());
        for vertex in mesh.vertex_keys() {
            let Some(position) = mesh.position(vertex) else {
                continue;
            };
            carried.insert(vertex, output.add_vertex(position));
        }

        for face in mesh.face_keys() {
            let (Some(centroid), Some(normal)) =
                (mesh.face_centroid(face), mesh.face_normal(face))
            else {
                continue;
            };
            let apex = output.add_vertex(centroid + normal * APEX_HEIGHT);

            let ring: Vec<VertexKey> = mesh
                .face_vertices(face)
                .into_iter()
                .filter_map(|vertex| carried.get(&vertex).copied())
                .collect();
            for (i, &base) in ring.iter().enumerate() {
                let next = ring[(i + 1) % ring.len()];
                output.add_face(&[base, next, apex]);
            }
        }

        output.normalize();
        tracing::debug!(input = %mesh.stats(), output = %output.stats(), "applied kis");
        output
    }
}

/// Applies [`Kis`] to `mesh`.
#[must_use]
pub fn kis(mesh: &Mesh) -> Mesh {
    Kis.apply(mesh)
}
