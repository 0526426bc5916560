//! Truncate operator (`t`): cut off every vertex.

use crate::core::collections::FastHashMap;
use crate::core::mesh::{EdgeKey, Mesh, VertexKey};
use crate::operators::Operator;

/// Truncation parameter: each edge is cut at 1/3 and 2/3 of its length.
const TRUNCATE_FACTOR: f64 = 1.0 / 3.0;

/// The truncate operator.
///
/// Every input edge contributes two output vertices, one near each endpoint,
/// keyed by `(edge, endpoint)`. Every input face survives as a polygon with
/// twice as many vertices (the two cut points near each original corner, in
/// face order), and every input vertex is replaced by a small facet over the
/// cut points of its incident edges in ring order. Faces that would
/// degenerate below three vertices are skipped.
pub struct Truncate;

impl Operator for Truncate {
    fn symbol(&self) -> char {
        't'
    }

    fn name(&self) -> &'static str {
        "truncate"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let output = Mesh::new(format!("t{}", mesh.name()));

        // Two cut vertices per input edge, keyed by (edge, nearest endpoint).
        let mut cuts: FastHashMap<(EdgeKey, VertexKey), VertexKey> =
            FastHashMap::with_capacity_and_hasher(mesh.edge_count() * 2, Default::default());
        for edge in mesh.edge_keys() {
            let Some((a, b)) = mesh.edge_endpoints(edge) else {
                continue;
            };
            let (Some(pa), Some(pb)) = (mesh.position(a), mesh.position(b)) else {
                continue;
            };
            let span = pb - pa;
            cuts.insert((edge, a), output.add_vertex(pa + span * TRUNCATE_FACTOR));
            cuts.insert((edge, b), output.add_vertex(pa + span * (1.0 - TRUNCATE_FACTOR)));
        }

        // Each input face keeps its circuit, visiting both cut points at
        // every corner: first the one on the edge from the previous vertex,
        // then the one on the edge to the next vertex.
        for face in mesh.face_keys() {
            let ring = mesh.face_vertices(face);
            let n = ring.len();
            let mut boundary = Vec::with_capacity(n * 2);
            for (i, &corner) in ring.iter().enumerate() {
                let previous = ring[(i + n - 1) % n];
                let next = ring[(i + 1) % n];
                let (Some(edge_in), Some(edge_out)) =
                    (mesh.find_edge(corner, previous), mesh.find_edge(corner, next))
                else {
                    continue;
                };
                if let Some(&cut) = cuts.get(&(edge_in, corner)) {
                    boundary.push(cut);
                }
                if let Some(&cut) = cuts.get(&(edge_out, corner)) {
                    boundary.push(cut);
                }
            }
            if boundary.len() >= 3 {
                output.add_face(&boundary);
            }
        }

        // Each input vertex becomes a small facet over its cut points.
        for vertex in mesh.vertex_keys() {
            let boundary: Vec<VertexKey> = mesh
                .edges_around_vertex(vertex)
                .into_iter()
                .filter_map(|edge| cuts.get(&(edge, vertex)).copied())
                .collect();
            if boundary.len() >= 3 {
                output.add_face(&boundary);
            }
        }

        output.normalize();
        tracing::debug!(input = %mesh.stats(), output = %output.stats(), "applied truncate");
        output
    }
}

/// Applies [`Truncate`] to `mesh`.
#[must_use]
pub fn truncate(mesh: &Mesh) -> Mesh {
    Truncate.apply(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{available_seeds, cube, icosahedron, seed};
    use crate::topology::validation::validate_complete;

    #[test]
    fn truncated_cube_counts() {
        let result = truncate(&cube());
        assert_eq!(result.vertex_count(), 24);
        assert_eq!(result.edge_count(), 36);
        assert_eq!(result.face_count(), 14);
        assert_eq!(result.name(), "tCube");
        validate_complete(&result).unwrap();
    }

    #[test]
    fn truncated_icosahedron_is_the_soccer_ball() {
        let result = truncate(&icosahedron());
        assert_eq!(result.vertex_count(), 60);
        assert_eq!(result.edge_count(), 90);
        assert_eq!(result.face_count(), 32);

        // 12 pentagons (one per input vertex) and 20 hexagons.
        let mut pentagons = 0;
        let mut hexagons = 0;
        for face in result.face_keys() {
            match result.face_degree(face) {
                Some(5) => pentagons += 1,
                Some(6) => hexagons += 1,
                other => panic!("unexpected face degree {other:?}"),
            }
        }
        assert_eq!(pentagons, 12);
        assert_eq!(hexagons, 20);
    }

    #[test]
    fn truncation_counts_follow_the_edge_formula() {
        // t: V' = 2E, E' = 3E, F' = F + V.
        for (symbol, _) in available_seeds() {
            let input = seed(symbol).unwrap();
            let result = truncate(&input);
            assert_eq!(result.vertex_count(), 2 * input.edge_count(), "{symbol}");
            assert_eq!(result.edge_count(), 3 * input.edge_count(), "{symbol}");
            assert_eq!(
                result.face_count(),
                input.face_count() + input.vertex_count(),
                "{symbol}"
            );
            assert_eq!(result.euler_characteristic(), 2, "{symbol}");
        }
    }
}
