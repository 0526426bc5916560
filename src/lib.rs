//! # conway
//!
//! An implementation of [Conway polyhedron notation](https://en.wikipedia.org/wiki/Conway_polyhedron_notation):
//! a compact string language that builds complex polyhedra by composing
//! topological operators over the five Platonic solids.
//!
//! # Features
//!
//! - Five Platonic seeds: tetrahedron (`T`), cube (`C`), octahedron (`O`),
//!   dodecahedron (`D`), icosahedron (`I`)
//! - Operators dual (`d`), ambo (`a`), truncate (`t`), kis (`k`), join (`j`),
//!   and the compound forms ortho (`o`), expand (`e`), gyro (`g`), snub (`s`)
//! - A half-edge-style mesh with O(1) edge deduplication, ordered ring
//!   traversals, and cached geometry, safe for concurrent use
//! - Validation of every topological and geometric invariant a closed
//!   2-manifold must satisfy
//!
//! # Basic usage
//!
//! ```rust
//! use conway::notation::parse;
//!
//! // A truncated icosahedron (the classic soccer ball).
//! let soccer_ball = parse("tI").unwrap();
//!
//! assert_eq!(soccer_ball.vertex_count(), 60);
//! assert_eq!(soccer_ball.edge_count(), 90);
//! assert_eq!(soccer_ball.face_count(), 32);
//! assert_eq!(soccer_ball.euler_characteristic(), 2);
//! ```
//!
//! Operators apply **right to left**: `dtC` is the dual of the truncated
//! cube, not the truncation of the dual. Every evaluation starts from a
//! fresh clone of the seed and every operator returns a fresh mesh, so
//! unrelated expressions can be evaluated from multiple threads freely.
//!
//! # Working with operators directly
//!
//! ```rust
//! use conway::operators::{dual, truncate};
//! use conway::seed::cube;
//!
//! let result = dual(&truncate(&cube()));
//! assert_eq!(result.stats(), "dtCube: V=14, E=36, F=24, χ=2");
//! ```
//!
//! # Invariants and validation
//!
//! Every mesh produced by a seed constructor or an operator satisfies:
//!
//! - **Euler's formula** — `V − E + F = 2`
//! - **Manifoldness** — every edge bounds exactly two faces, and the faces
//!   around every vertex form a single cycle
//! - **Winding** — faces are wound counter-clockwise seen from outside, so
//!   normals point outward
//! - **Normalization** — centered at the origin with the farthest vertex at
//!   unit distance
//!
//! [`topology::validation`] exposes each check individually and
//! [`topology::validation::validate_complete`] chains them:
//!
//! ```rust
//! use conway::notation::parse;
//!
//! let mesh = parse("kD").unwrap();
//! mesh.validate_complete().unwrap();
//! ```
//!
//! # Errors
//!
//! Parsing reports the first offending character
//! ([`notation::NotationError`]); validation reports the first failing
//! entity by key ([`topology::validation::MeshValidationError`]). Operator
//! application itself never fails: operators rely on the mesh core to keep
//! construction consistent and on the validator for post-hoc checking.

#![forbid(unsafe_code)]

/// Core mesh data structures: entities, arenas, and the incremental builder.
pub mod core {
    pub mod collections;
    pub mod edge;
    pub mod face;
    pub mod mesh;
    pub mod vertex;

    pub use edge::{Edge, VertexPair};
    pub use face::{Face, FaceGeometry};
    pub use mesh::{EdgeKey, FaceKey, Mesh, VertexKey};
    pub use vertex::Vertex;
    // collections is not re-exported wholesale; import aliases explicitly.
}

/// Vector math, face normals, and geometric summaries.
pub mod geometry {
    pub mod normal;
    pub mod stats;
    pub mod vector;

    pub use normal::{MIN_NORMAL_LENGTH, NormalError, newell_normal};
    pub use stats::{BoundingBox, GeometryStats};
    pub use vector::Vector3;
}

pub mod notation;
pub mod operators;
pub mod seed;

/// Topological validation of constructed meshes.
pub mod topology {
    pub mod validation;

    pub use validation::MeshValidationError;
}

/// Re-exports of the most commonly used items.
pub mod prelude {
    pub use crate::core::mesh::{EdgeKey, FaceKey, Mesh, VertexKey};
    pub use crate::geometry::{GeometryStats, Vector3};
    pub use crate::notation::{NotationError, Parser, must_parse, parse};
    pub use crate::operators::{
        Operator, ambo, dual, expand, gyro, join, kis, ortho, snub, truncate,
    };
    pub use crate::seed::{
        available_seeds, cube, dodecahedron, icosahedron, octahedron, seed, tetrahedron,
    };
    pub use crate::topology::validation::{
        MeshValidationError, is_valid, validate_complete, validate_structural,
    };
}
