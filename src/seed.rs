//! The five Platonic seed polyhedra.
//!
//! Every Conway notation expression bottoms out in one of these seeds:
//!
//! | Symbol | Seed | V | E | F |
//! |---|---|---|---|---|
//! | `T` | Tetrahedron | 4 | 6 | 4 |
//! | `C` | Cube | 8 | 12 | 6 |
//! | `O` | Octahedron | 6 | 12 | 8 |
//! | `D` | Dodecahedron | 20 | 30 | 12 |
//! | `I` | Icosahedron | 12 | 30 | 20 |
//!
//! Coordinates are the classical parametrizations (golden ratio for `D` and
//! `I`), faces are wound counter-clockwise seen from outside, and every seed
//! is normalized (centered, farthest vertex at distance 1) before it is
//! returned.

use crate::core::mesh::{Mesh, VertexKey};
use crate::geometry::vector::Vector3;

/// The golden ratio φ = (1 + √5) / 2.
fn golden_ratio() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

fn add_vertices(mesh: &Mesh, positions: &[Vector3]) -> Vec<VertexKey> {
    positions
        .iter()
        .map(|&position| mesh.add_vertex(position))
        .collect()
}

fn add_faces(mesh: &Mesh, vertices: &[VertexKey], faces: &[&[usize]]) {
    for indices in faces {
        let boundary: Vec<VertexKey> = indices.iter().map(|&i| vertices[i]).collect();
        mesh.add_face(&boundary);
    }
}

/// Regular tetrahedron (V=4, E=6, F=4).
#[must_use]
pub fn tetrahedron() -> Mesh {
    let mesh = Mesh::new("Tetrahedron");
    let a = 1.0 / 3.0_f64.sqrt();
    let vertices = add_vertices(
        &mesh,
        &[
            Vector3::new(a, a, a),
            Vector3::new(a, -a, -a),
            Vector3::new(-a, a, -a),
            Vector3::new(-a, -a, a),
        ],
    );
    add_faces(
        &mesh,
        &vertices,
        &[&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]],
    );
    mesh.normalize();
    mesh
}

/// Cube (V=8, E=12, F=6).
#[must_use]
pub fn cube() -> Mesh {
    let mesh = Mesh::new("Cube");
    let vertices = add_vertices(
        &mesh,
        &[
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, 1.0, -1.0),
            Vector3::new(1.0, -1.0, 1.0),
            Vector3::new(1.0, -1.0, -1.0),
            Vector3::new(-1.0, 1.0, 1.0),
            Vector3::new(-1.0, 1.0, -1.0),
            Vector3::new(-1.0, -1.0, 1.0),
            Vector3::new(-1.0, -1.0, -1.0),
        ],
    );
    add_faces(
        &mesh,
        &vertices,
        &[
            &[0, 2, 3, 1],
            &[4, 5, 7, 6],
            &[0, 1, 5, 4],
            &[2, 6, 7, 3],
            &[0, 4, 6, 2],
            &[1, 3, 7, 5],
        ],
    );
    mesh.normalize();
    mesh
}

/// Regular octahedron (V=6, E=12, F=8).
#[must_use]
pub fn octahedron() -> Mesh {
    let mesh = Mesh::new("Octahedron");
    let vertices = add_vertices(
        &mesh,
        &[
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ],
    );
    add_faces(
        &mesh,
        &vertices,
        &[
            &[0, 2, 4],
            &[0, 4, 3],
            &[0, 3, 5],
            &[0, 5, 2],
            &[1, 4, 2],
            &[1, 3, 4],
            &[1, 5, 3],
            &[1, 2, 5],
        ],
    );
    mesh.normalize();
    mesh
}

/// Regular dodecahedron (V=20, E=30, F=12).
#[must_use]
pub fn dodecahedron() -> Mesh {
    let mesh = Mesh::new("Dodecahedron");
    let phi = golden_ratio();
    let inv_phi = 1.0 / phi;

    let vertices = add_vertices(
        &mesh,
        &[
            // Cube corners.
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, 1.0, -1.0),
            Vector3::new(1.0, -1.0, 1.0),
            Vector3::new(1.0, -1.0, -1.0),
            Vector3::new(-1.0, 1.0, 1.0),
            Vector3::new(-1.0, 1.0, -1.0),
            Vector3::new(-1.0, -1.0, 1.0),
            Vector3::new(-1.0, -1.0, -1.0),
            // Rectangle in the YZ plane.
            Vector3::new(0.0, phi, inv_phi),
            Vector3::new(0.0, phi, -inv_phi),
            Vector3::new(0.0, -phi, inv_phi),
            Vector3::new(0.0, -phi, -inv_phi),
            // Rectangle in the XZ plane.
            Vector3::new(inv_phi, 0.0, phi),
            Vector3::new(inv_phi, 0.0, -phi),
            Vector3::new(-inv_phi, 0.0, phi),
            Vector3::new(-inv_phi, 0.0, -phi),
            // Rectangle in the XY plane.
            Vector3::new(phi, inv_phi, 0.0),
            Vector3::new(phi, -inv_phi, 0.0),
            Vector3::new(-phi, inv_phi, 0.0),
            Vector3::new(-phi, -inv_phi, 0.0),
        ],
    );
    add_faces(
        &mesh,
        &vertices,
        &[
            &[0, 8, 4, 14, 12],
            &[0, 12, 2, 17, 16],
            &[0, 16, 1, 9, 8],
            &[1, 16, 17, 3, 13],
            &[1, 13, 15, 5, 9],
            &[2, 12, 14, 6, 10],
            &[2, 10, 11, 3, 17],
            &[3, 11, 7, 15, 13],
            &[4, 8, 9, 5, 18],
            &[4, 18, 19, 6, 14],
            &[5, 15, 7, 19, 18],
            &[6, 19, 7, 11, 10],
        ],
    );
    mesh.normalize();
    mesh
}

/// Regular icosahedron (V=12, E=30, F=20).
#[must_use]
pub fn icosahedron() -> Mesh {
    let mesh = Mesh::new("Icosahedron");
    let phi = golden_ratio();

    let vertices = add_vertices(
        &mesh,
        &[
            Vector3::new(0.0, 1.0, phi),
            Vector3::new(0.0, 1.0, -phi),
            Vector3::new(0.0, -1.0, phi),
            Vector3::new(0.0, -1.0, -phi),
            Vector3::new(1.0, phi, 0.0),
            Vector3::new(1.0, -phi, 0.0),
            Vector3::new(-1.0, phi, 0.0),
            Vector3::new(-1.0, -phi, 0.0),
            Vector3::new(phi, 0.0, 1.0),
            Vector3::new(phi, 0.0, -1.0),
            Vector3::new(-phi, 0.0, 1.0),
            Vector3::new(-phi, 0.0, -1.0),
        ],
    );
    add_faces(
        &mesh,
        &vertices,
        &[
            &[0, 2, 8],
            &[0, 8, 4],
            &[0, 4, 6],
            &[0, 6, 10],
            &[0, 10, 2],
            &[3, 1, 9],
            &[3, 9, 5],
            &[3, 5, 7],
            &[3, 7, 11],
            &[3, 11, 1],
            &[2, 10, 7],
            &[2, 7, 5],
            &[2, 5, 8],
            &[8, 5, 9],
            &[8, 9, 4],
            &[4, 9, 1],
            &[4, 1, 6],
            &[6, 1, 11],
            &[6, 11, 10],
            &[10, 11, 7],
        ],
    );
    mesh.normalize();
    mesh
}

/// Looks up a seed by its notation symbol.
///
/// Returns `None` for anything outside `T`, `C`, `O`, `D`, `I` (the lookup is
/// case-sensitive).
///
/// # Examples
///
/// ```rust
/// use conway::seed::seed;
///
/// let cube = seed('C').unwrap();
/// assert_eq!(cube.stats(), "Cube: V=8, E=12, F=6, χ=2");
/// assert!(seed('x').is_none());
/// assert!(seed('c').is_none());
/// ```
#[must_use]
pub fn seed(symbol: char) -> Option<Mesh> {
    match symbol {
        'T' => Some(tetrahedron()),
        'C' => Some(cube()),
        'O' => Some(octahedron()),
        'D' => Some(dodecahedron()),
        'I' => Some(icosahedron()),
        _ => None,
    }
}

/// The available seeds as `(symbol, name)` pairs, in notation order.
#[must_use]
pub fn available_seeds() -> Vec<(char, &'static str)> {
    vec![
        ('T', "Tetrahedron"),
        ('C', "Cube"),
        ('O', "Octahedron"),
        ('D', "Dodecahedron"),
        ('I', "Icosahedron"),
    ]
}
