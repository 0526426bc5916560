//! Dual operator (`d`): exchange vertices and faces.

use crate::core::collections::FastHashMap;
use crate::core::mesh::{FaceKey, Mesh, VertexKey};
use crate::operators::Operator;

/// The dual operator.
///
/// Places an output vertex at the centroid of every input face, joins the
/// dual vertices of the two faces flanking each input edge, and closes one
/// output face per input vertex using the cyclic face ring around it.
/// Vertex and face counts swap; the edge count is preserved, and applying
/// the operator twice restores the input's (V, E, F).
pub struct Dual;

impl Operator for Dual {
    fn symbol(&self) -> char {
        'd'
    }

    fn name(&self) -> &'static str {
        "dual"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let output = Mesh::new(format!("d{}", mesh.name()));

        // One dual vertex per input face, at the face centroid.
        let mut dual_vertices: FastHashMap<FaceKey, VertexKey> =
            FastHashMap::with_capacity_and_hasher(mesh.face_count(), Default::default());
        for face in mesh.face_keys() {
            let Some(centroid) = mesh.face_centroid(face) else {
                continue;
            };
            dual_vertices.insert(face, output.add_vertex(centroid));
        }

        // One dual edge per interior input edge, joining the flanking faces.
        for edge in mesh.edge_keys() {
            if let [first, second] = mesh.edge_faces(edge)[..] {
                if let (Some(&a), Some(&b)) =
                    (dual_vertices.get(&first), dual_vertices.get(&second))
                {
                    output.add_edge(a, b);
                }
            }
        }

        // One dual face per input vertex of degree >= 3, in ring order.
        for vertex in mesh.vertex_keys() {
            if mesh.vertex_faces(vertex).len() < 3 {
                continue;
            }
            let boundary: Vec<VertexKey> = mesh
                .faces_around_vertex(vertex)
                .into_iter()
                .filter_map(|face| dual_vertices.get(&face).copied())
                .collect();
            output.add_face(&boundary);
        }

        output.normalize();
        tracing::debug!(input = %mesh.stats(), output = %output.stats(), "applied dual");
        output
    }
}

/// Applies [`Dual`] to `mesh`.
#[must_use]
pub fn dual(mesh: &Mesh) -> Mesh {
    Dual.apply(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{available_seeds, cube, seed, tetrahedron};
    use crate::topology::validation::validate_complete;

    #[test]
    fn dual_of_cube_is_an_octahedron() {
        let result = dual(&cube());
        assert_eq!(result.vertex_count(), 6);
        assert_eq!(result.edge_count(), 12);
        assert_eq!(result.face_count(), 8);
        assert_eq!(result.name(), "dCube");
        validate_complete(&result).unwrap();
    }

    #[test]
    fn tetrahedron_is_self_dual() {
        let result = dual(&tetrahedron());
        assert_eq!(result.vertex_count(), 4);
        assert_eq!(result.edge_count(), 6);
        assert_eq!(result.face_count(), 4);
    }

    #[test]
    fn dual_swaps_vertex_and_face_counts() {
        for (symbol, _) in available_seeds() {
            let input = seed(symbol).unwrap();
            let result = dual(&input);
            assert_eq!(result.vertex_count(), input.face_count(), "{symbol}");
            assert_eq!(result.face_count(), input.vertex_count(), "{symbol}");
            assert_eq!(result.edge_count(), input.edge_count(), "{symbol}");
        }
    }

    #[test]
    fn double_dual_restores_counts() {
        for (symbol, _) in available_seeds() {
            let input = seed(symbol).unwrap();
            let result = dual(&dual(&input));
            assert_eq!(result.vertex_count(), input.vertex_count(), "{symbol}");
            assert_eq!(result.edge_count(), input.edge_count(), "{symbol}");
            assert_eq!(result.face_count(), input.face_count(), "{symbol}");
            validate_complete(&result).unwrap();
        }
    }
}
