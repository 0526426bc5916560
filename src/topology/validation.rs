//! Mesh validation: topology, manifoldness, planarity, winding, and geometry.
//!
//! Validation is post-hoc by design: the incremental builder keeps
//! cross-references symmetric and windings outward, operators rebuild
//! topology from traversals, and these checks are the arbiter that the
//! result really is a closed, well-formed 2-manifold. Each focused check
//! returns the first failure it finds, identifying the offending entity by
//! key; [`validate_complete`] chains all of them.
//!
//! # Examples
//!
//! ```rust
//! use conway::seed::cube;
//! use conway::topology::validation::validate_complete;
//!
//! validate_complete(&cube()).unwrap();
//! ```

use crate::core::mesh::{EdgeKey, FaceKey, Mesh, VertexKey};
use thiserror::Error;

/// Maximum distance a vertex may sit from its face's plane.
pub const PLANARITY_TOLERANCE: f64 = 1e-10;

/// Minimum edge length before an edge counts as degenerate.
pub const MIN_EDGE_LENGTH: f64 = 1e-12;

/// Minimum face area before a face counts as degenerate.
pub const MIN_FACE_AREA: f64 = 1e-12;

/// Winding slack: a face fails only when its normal clearly points inward
/// (dot product with the outward radial below this threshold).
pub const WINDING_TOLERANCE: f64 = -0.1;

/// Errors from mesh validation.
///
/// Variants group into the five check families: topology
/// ([`EulerCharacteristic`](Self::EulerCharacteristic),
/// [`VertexDegree`](Self::VertexDegree), [`FaceDegree`](Self::FaceDegree),
/// [`EdgeFaceCount`](Self::EdgeFaceCount)), manifoldness
/// ([`NonManifoldEdge`](Self::NonManifoldEdge),
/// [`VertexFaceCount`](Self::VertexFaceCount),
/// [`OpenFaceFan`](Self::OpenFaceFan)), planarity, winding, and geometric
/// degeneracy.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MeshValidationError {
    /// `V - E + F` differs from 2.
    #[error("invalid Euler characteristic: {chi} (expected 2)")]
    EulerCharacteristic {
        /// The computed characteristic.
        chi: isize,
    },

    /// A vertex has fewer than three incident edges.
    #[error("vertex {vertex:?} has degree {degree} (minimum 3)")]
    VertexDegree {
        /// The offending vertex.
        vertex: VertexKey,
        /// Its edge count.
        degree: usize,
    },

    /// A face has fewer than three boundary vertices.
    #[error("face {face:?} has degree {degree} (minimum 3)")]
    FaceDegree {
        /// The offending face.
        face: FaceKey,
        /// Its boundary length.
        degree: usize,
    },

    /// An edge bounds no face, or more than two.
    #[error("edge {edge:?} has {count} incident faces (expected 1 or 2)")]
    EdgeFaceCount {
        /// The offending edge.
        edge: EdgeKey,
        /// Its face count.
        count: usize,
    },

    /// An edge is shared by more than two faces.
    #[error("edge {edge:?} has {count} incident faces (expected 2)")]
    NonManifoldEdge {
        /// The offending edge.
        edge: EdgeKey,
        /// Its face count.
        count: usize,
    },

    /// A vertex touches fewer than three faces.
    #[error("vertex {vertex:?} has only {count} incident faces (minimum 3)")]
    VertexFaceCount {
        /// The offending vertex.
        vertex: VertexKey,
        /// Its face count.
        count: usize,
    },

    /// The faces around a vertex do not form a single closed cycle.
    #[error("faces around vertex {vertex:?} do not form a connected cycle")]
    OpenFaceFan {
        /// The offending vertex.
        vertex: VertexKey,
    },

    /// A vertex of a non-triangular face lies off the face's plane.
    #[error(
        "face {face:?} vertex {index} is {distance:e} from the face plane (tolerance {PLANARITY_TOLERANCE:e})"
    )]
    NonPlanarFace {
        /// The offending face.
        face: FaceKey,
        /// Index of the off-plane vertex within the boundary sequence.
        index: usize,
        /// Its distance from the plane of the first three vertices.
        distance: f64,
    },

    /// A face's normal points inward.
    #[error("face {face:?} has incorrect winding (normal points inward)")]
    InwardWinding {
        /// The offending face.
        face: FaceKey,
    },

    /// An edge is shorter than [`MIN_EDGE_LENGTH`].
    #[error("edge {edge:?} has degenerate length {length:e}")]
    DegenerateEdge {
        /// The offending edge.
        edge: EdgeKey,
        /// Its length.
        length: f64,
    },

    /// A face has area below [`MIN_FACE_AREA`].
    #[error("face {face:?} has degenerate area {area:e}")]
    DegenerateFace {
        /// The offending face.
        face: FaceKey,
        /// Its area.
        area: f64,
    },
}

/// Checks the basic topological requirements: vertex and face degrees at
/// least 3, one or two faces per edge, and Euler characteristic 2.
///
/// Entity-local properties are checked before the global characteristic so
/// the error names the most specific defect available.
pub fn validate_topology(mesh: &Mesh) -> Result<(), MeshValidationError> {
    for vertex in mesh.vertex_keys() {
        let degree = mesh.vertex_degree(vertex).unwrap_or(0);
        if degree < 3 {
            return Err(MeshValidationError::VertexDegree { vertex, degree });
        }
    }

    for face in mesh.face_keys() {
        let degree = mesh.face_degree(face).unwrap_or(0);
        if degree < 3 {
            return Err(MeshValidationError::FaceDegree { face, degree });
        }
    }

    for edge in mesh.edge_keys() {
        let count = mesh.edge_faces(edge).len();
        if count == 0 || count > 2 {
            return Err(MeshValidationError::EdgeFaceCount { edge, count });
        }
    }

    let chi = mesh.euler_characteristic();
    if chi != 2 {
        return Err(MeshValidationError::EulerCharacteristic { chi });
    }

    Ok(())
}

/// Checks that the mesh is a 2-manifold: no edge bounds more than two faces,
/// and the faces around every vertex form a single closed fan.
///
/// Edges with a single face are tolerated here (they occur transiently while
/// a mesh is under construction); [`validate_topology`] rejects meshes whose
/// edges bound nothing at all.
pub fn validate_manifold(mesh: &Mesh) -> Result<(), MeshValidationError> {
    for edge in mesh.edge_keys() {
        let count = mesh.edge_faces(edge).len();
        if count > 2 {
            return Err(MeshValidationError::NonManifoldEdge { edge, count });
        }
    }

    for vertex in mesh.vertex_keys() {
        let count = mesh.vertex_faces(vertex).len();
        if count < 3 {
            return Err(MeshValidationError::VertexFaceCount { vertex, count });
        }

        // Consecutive faces of the cyclic ring must share an edge, including
        // the wrap-around pair; a pinched or split fan breaks this.
        let ring = mesh.faces_around_vertex(vertex);
        for i in 0..ring.len() {
            let current = mesh.face_edges(ring[i]);
            let next = mesh.face_edges(ring[(i + 1) % ring.len()]);
            if !current.iter().any(|edge| next.contains(edge)) {
                return Err(MeshValidationError::OpenFaceFan { vertex });
            }
        }
    }

    Ok(())
}

/// Checks that every non-triangular face is planar within
/// [`PLANARITY_TOLERANCE`], measured against the plane of its first three
/// vertices.
pub fn validate_planarity(mesh: &Mesh) -> Result<(), MeshValidationError> {
    for face in mesh.face_keys() {
        let boundary = mesh.face_vertices(face);
        if boundary.len() <= 3 {
            continue;
        }

        let positions: Vec<_> = boundary
            .iter()
            .filter_map(|&vertex| mesh.position(vertex))
            .collect();
        if positions.len() != boundary.len() {
            continue;
        }

        let normal = (positions[1] - positions[0])
            .cross(positions[2] - positions[0])
            .normalized();
        for (index, &position) in positions.iter().enumerate().skip(3) {
            let distance = normal.dot(position - positions[0]).abs();
            if distance > PLANARITY_TOLERANCE {
                return Err(MeshValidationError::NonPlanarFace {
                    face,
                    index,
                    distance,
                });
            }
        }
    }

    Ok(())
}

/// Checks that every face normal points outward from the mesh centroid,
/// within [`WINDING_TOLERANCE`] of slack.
pub fn validate_winding(mesh: &Mesh) -> Result<(), MeshValidationError> {
    let centroid = mesh.centroid();

    for face in mesh.face_keys() {
        let (Some(normal), Some(face_centroid)) =
            (mesh.face_normal(face), mesh.face_centroid(face))
        else {
            continue;
        };
        let outward = (face_centroid - centroid).normalized();
        if normal.dot(outward) < WINDING_TOLERANCE {
            return Err(MeshValidationError::InwardWinding { face });
        }
    }

    Ok(())
}

/// Checks for geometric degeneracy: zero-length edges and zero-area faces.
pub fn validate_geometry(mesh: &Mesh) -> Result<(), MeshValidationError> {
    for edge in mesh.edge_keys() {
        if let Some(length) = mesh.edge_length(edge) {
            if length < MIN_EDGE_LENGTH {
                return Err(MeshValidationError::DegenerateEdge { edge, length });
            }
        }
    }

    for face in mesh.face_keys() {
        if let Some(area) = mesh.face_area(face) {
            if area < MIN_FACE_AREA {
                return Err(MeshValidationError::DegenerateFace { face, area });
            }
        }
    }

    Ok(())
}

/// Runs every check: topology, manifold, planarity, winding, geometry.
///
/// Returns the first failure in that order.
///
/// Note that planarity is a property of the *geometry*, not the topology:
/// duals place vertices at face centroids, and the centroid-based dual of a
/// non-uniform solid (a join or gyro of most seeds, for example) carries
/// quadrilateral faces that are slightly but genuinely non-planar. Such
/// meshes fail this check while still being perfectly good closed
/// 2-manifolds; use [`validate_structural`] for them.
pub fn validate_complete(mesh: &Mesh) -> Result<(), MeshValidationError> {
    validate_topology(mesh)?;
    validate_manifold(mesh)?;
    validate_planarity(mesh)?;
    validate_winding(mesh)?;
    validate_geometry(mesh)?;
    Ok(())
}

/// Runs every check except planarity: topology, manifold, winding, geometry.
///
/// This is the strongest validation that every operator output satisfies;
/// see [`validate_complete`] for why planarity is excluded.
pub fn validate_structural(mesh: &Mesh) -> Result<(), MeshValidationError> {
    validate_topology(mesh)?;
    validate_manifold(mesh)?;
    validate_winding(mesh)?;
    validate_geometry(mesh)?;
    Ok(())
}

/// Quick boolean form of the topological requirements.
///
/// Equivalent to `validate_topology(mesh).is_ok()`; use
/// [`validate_complete`] for full diagnostics.
#[must_use]
pub fn is_valid(mesh: &Mesh) -> bool {
    validate_topology(mesh).is_ok()
}

impl Mesh {
    /// Quick topological sanity check; see [`is_valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid(self)
    }

    /// Full validation; see [`validate_complete`].
    pub fn validate_complete(&self) -> Result<(), MeshValidationError> {
        validate_complete(self)
    }

    /// Planarity-free validation; see [`validate_structural`].
    pub fn validate_structural(&self) -> Result<(), MeshValidationError> {
        validate_structural(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector3;
    use crate::seed::{available_seeds, cube, seed};

    #[test]
    fn seeds_pass_every_check() {
        for (symbol, _) in available_seeds() {
            let mesh = seed(symbol).unwrap();
            assert!(mesh.is_valid(), "{symbol}");
            mesh.validate_complete()
                .unwrap_or_else(|error| panic!("{symbol}: {error}"));
        }
    }

    #[test]
    fn removing_a_face_breaks_euler() {
        let mesh = cube();
        let face = mesh.face_keys()[0];
        mesh.remove_face(face);

        // V=8, E=12, F=5 after the removal.
        assert!(!mesh.is_valid());
        assert_eq!(
            validate_topology(&mesh),
            Err(MeshValidationError::EulerCharacteristic { chi: 1 })
        );
    }

    #[test]
    fn orphaned_edge_fails_the_face_count_check() {
        let mesh = cube();
        // Remove both faces along one edge; the edge then bounds nothing.
        let edge = mesh.edge_keys()[0];
        for face in mesh.edge_faces(edge) {
            mesh.remove_face(face);
        }

        let result = validate_topology(&mesh);
        assert!(
            matches!(result, Err(MeshValidationError::EdgeFaceCount { count: 0, .. })),
            "expected a zero-face edge, got {result:?}"
        );
    }

    #[test]
    fn low_degree_vertex_is_reported() {
        let mesh = cube();
        let vertex = mesh.vertex_keys()[0];
        // Remove one edge at the vertex; its degree drops to 2.
        let edge = mesh.vertex_edges(vertex)[0];
        mesh.remove_edge(edge);

        let result = validate_topology(&mesh);
        assert!(
            matches!(result, Err(MeshValidationError::VertexDegree { degree: 2, .. })),
            "expected a degree-2 vertex, got {result:?}"
        );
    }

    #[test]
    fn pinched_vertex_fails_the_manifold_check() {
        // Two triangle fans joined only at a hub vertex: the hub's faces
        // cannot form a single cycle.
        let mesh = crate::core::mesh::Mesh::new("pinched");
        let hub = mesh.add_vertex(Vector3::ZERO);
        let a = mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0));
        let b = mesh.add_vertex(Vector3::new(0.0, 1.0, 0.0));
        let c = mesh.add_vertex(Vector3::new(0.5, 0.5, 1.0));
        let d = mesh.add_vertex(Vector3::new(-1.0, 0.0, -1.0));
        let e = mesh.add_vertex(Vector3::new(0.0, -1.0, -1.0));
        let f = mesh.add_vertex(Vector3::new(-0.5, -0.5, -2.0));
        for triangle in [
            [hub, a, b],
            [hub, b, c],
            [hub, c, a],
            [hub, d, e],
            [hub, e, f],
            [hub, f, d],
        ] {
            mesh.add_face(&triangle);
        }

        let result = validate_manifold(&mesh);
        assert!(
            matches!(result, Err(MeshValidationError::OpenFaceFan { vertex }) if vertex == hub),
            "expected an open fan at the hub, got {result:?}"
        );
    }

    #[test]
    fn degenerate_edge_is_reported() {
        let mesh = crate::core::mesh::Mesh::new("sliver");
        let a = mesh.add_vertex(Vector3::ZERO);
        let b = mesh.add_vertex(Vector3::new(1e-15, 0.0, 0.0));
        let c = mesh.add_vertex(Vector3::new(0.0, 1.0, 0.0));
        mesh.add_face(&[a, b, c]);

        let result = validate_geometry(&mesh);
        assert!(
            matches!(result, Err(MeshValidationError::DegenerateEdge { .. })),
            "expected a degenerate edge, got {result:?}"
        );
    }

    #[test]
    fn rhombic_dual_is_structurally_valid_but_not_planar() {
        // The join of a cube places its quad vertices at two incompatible
        // radii, so the faces are honest 2-manifold quads that are not flat.
        let mesh = crate::operators::join(&cube());
        assert_eq!(validate_structural(&mesh), Ok(()));
        assert!(matches!(
            validate_planarity(&mesh),
            Err(MeshValidationError::NonPlanarFace { .. })
        ));
    }

    #[test]
    fn validation_error_messages_name_the_entity() {
        let mesh = cube();
        mesh.remove_face(mesh.face_keys()[0]);
        let error = validate_topology(&mesh).unwrap_err();
        assert!(error.to_string().contains("Euler characteristic"));
    }
}
