//! Ambo operator (`a`): rectification.

use crate::core::collections::FastHashMap;
use crate::core::mesh::{EdgeKey, Mesh, VertexKey};
use crate::operators::Operator;

/// The ambo (rectification) operator.
///
/// Places an output vertex at the midpoint of every input edge. Every input
/// face shrinks to the polygon over its edge midpoints, and every input
/// vertex of degree >= 3 gains a new polygon over the midpoints of its
/// incident edges in ring order. The output has one vertex per input edge,
/// and every output vertex has degree 4 (two face polygons and two vertex
/// polygons meet there).
pub struct Ambo;

impl Operator for Ambo {
    fn symbol(&self) -> char {
        'a'
    }

    fn name(&self) -> &'static str {
        "ambo"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let output = Mesh::new(format!("a{}", mesh.name()));

        // One output vertex per input edge midpoint.
        let mut midpoints: FastHashMap<EdgeKey, VertexKey> =
            FastHashMap::with_capacity_and_hasher(mesh.edge_count(), Default::default());
        for edge in mesh.edge_keys() {
            let Some(midpoint) = mesh.edge_midpoint(edge) else {
                continue;
            };
            midpoints.insert(edge, output.add_vertex(midpoint));
        }

        // Shrunken face polygons, in face-edge order.
        for face in mesh.face_keys() {
            let boundary: Vec<VertexKey> = mesh
                .face_edges(face)
                .into_iter()
                .filter_map(|edge| midpoints.get(&edge).copied())
                .collect();
            output.add_face(&boundary);
        }

        // Vertex polygons, in edge-ring order.
        for vertex in mesh.vertex_keys() {
            if mesh.vertex_degree(vertex).unwrap_or(0) < 3 {
                continue;
            }
            let boundary: Vec<VertexKey> = mesh
                .edges_around_vertex(vertex)
                .into_iter()
                .filter_map(|edge| midpoints.get(&edge).copied())
                .collect();
            output.add_face(&boundary);
        }

        output.normalize();
        tracing::debug!(input = %mesh.stats(), output = %output.stats(), "applied ambo");
        output
    }
}

/// Applies [`Ambo`] to `mesh`.
#[must_use]
pub fn ambo(mesh: &Mesh) -> Mesh {
    Ambo.apply(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{available_seeds, cube, seed, tetrahedron};
    use crate::topology::validation::validate_complete;

    #[test]
    fn ambo_of_cube_is_a_cuboctahedron() {
        let result = ambo(&cube());
        assert_eq!(result.vertex_count(), 12);
        assert_eq!(result.edge_count(), 24);
        assert_eq!(result.face_count(), 14);
        assert_eq!(result.name(), "aCube");
        validate_complete(&result).unwrap();
    }

    #[test]
    fn ambo_of_tetrahedron_is_an_octahedron() {
        let result = ambo(&tetrahedron());
        assert_eq!(result.vertex_count(), 6);
        assert_eq!(result.edge_count(), 12);
        assert_eq!(result.face_count(), 8);
    }

    #[test]
    fn output_vertex_count_equals_input_edge_count() {
        for (symbol, _) in available_seeds() {
            let input = seed(symbol).unwrap();
            let result = ambo(&input);
            assert_eq!(result.vertex_count(), input.edge_count(), "{symbol}");
        }
    }

    #[test]
    fn every_output_vertex_has_degree_four() {
        for (symbol, _) in available_seeds() {
            let result = ambo(&seed(symbol).unwrap());
            for vertex in result.vertex_keys() {
                assert_eq!(
                    result.vertex_degree(vertex),
                    Some(4),
                    "rectified {symbol} vertices are 4-valent"
                );
            }
        }
    }
}
