//! Compound operators defined by composition: ortho, expand, gyro, snub.
//!
//! Each of these is a composition of the primitive operators, relabeled with
//! its own symbol. Their combinatorics therefore follow directly from the
//! primitives: an expanded cube has the counts of a double rectification, a
//! snub is the dual of a gyro, and so on.

use crate::core::mesh::Mesh;
use crate::operators::{Operator, ambo::ambo, dual::dual, join::join};

/// The ortho operator, `o = j(j(P))`.
pub struct Ortho;

impl Operator for Ortho {
    fn symbol(&self) -> char {
        'o'
    }

    fn name(&self) -> &'static str {
        "ortho"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let mut output = join(&join(mesh));
        output.set_name(format!("o{}", mesh.name()));
        output
    }
}

/// The expand operator, `e = a(a(P))`.
pub struct Expand;

impl Operator for Expand {
    fn symbol(&self) -> char {
        'e'
    }

    fn name(&self) -> &'static str {
        "expand"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let mut output = ambo(&ambo(mesh));
        output.set_name(format!("e{}", mesh.name()));
        output
    }
}

/// The gyro operator, `g = d(a(P))`.
pub struct Gyro;

impl Operator for Gyro {
    fn symbol(&self) -> char {
        'g'
    }

    fn name(&self) -> &'static str {
        "gyro"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let mut output = dual(&ambo(mesh));
        output.set_name(format!("g{}", mesh.name()));
        output
    }
}

/// The snub operator, `s = d(g(P))`.
pub struct Snub;

impl Operator for Snub {
    fn symbol(&self) -> char {
        's'
    }

    fn name(&self) -> &'static str {
        "snub"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let mut output = dual(&gyro(mesh));
        output.set_name(format!("s{}", mesh.name()));
        output
    }
}

/// Applies [`Ortho`] to `mesh`.
#[must_use]
pub fn ortho(mesh: &Mesh) -> Mesh {
    Ortho.apply(mesh)
}

/// Applies [`Expand`] to `mesh`.
#[must_use]
pub fn expand(mesh: &Mesh) -> Mesh {
    Expand.apply(mesh)
}

/// Applies [`Gyro`] to `mesh`.
#[must_use]
pub fn gyro(mesh: &Mesh) -> Mesh {
    Gyro.apply(mesh)
}

/// Applies [`Snub`] to `mesh`.
#[must_use]
pub fn snub(mesh: &Mesh) -> Mesh {
    Snub.apply(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{available_seeds, seed};
    use crate::topology::validation::validate_structural;

    fn counts(mesh: &Mesh) -> (usize, usize, usize) {
        (mesh.vertex_count(), mesh.edge_count(), mesh.face_count())
    }

    #[test]
    fn compound_definitions_match_explicit_compositions() {
        for (symbol, _) in available_seeds() {
            let input = seed(symbol).unwrap();

            assert_eq!(counts(&ortho(&input)), counts(&join(&join(&input))), "{symbol}: o = jj");
            assert_eq!(counts(&expand(&input)), counts(&ambo(&ambo(&input))), "{symbol}: e = aa");
            assert_eq!(counts(&gyro(&input)), counts(&dual(&ambo(&input))), "{symbol}: g = da");
            assert_eq!(counts(&snub(&input)), counts(&dual(&gyro(&input))), "{symbol}: s = dg");
        }
    }

    #[test]
    fn compound_outputs_are_valid_closed_meshes() {
        let input = seed('C').unwrap();
        for result in [ortho(&input), expand(&input), gyro(&input), snub(&input)] {
            assert_eq!(result.euler_characteristic(), 2, "{}", result.name());
            validate_structural(&result)
                .unwrap_or_else(|error| panic!("{} invalid: {error}", result.name()));
        }
    }

    #[test]
    fn compound_names_use_their_own_symbol() {
        let input = seed('T').unwrap();
        assert_eq!(ortho(&input).name(), "oTetrahedron");
        assert_eq!(expand(&input).name(), "eTetrahedron");
        assert_eq!(gyro(&input).name(), "gTetrahedron");
        assert_eq!(snub(&input).name(), "sTetrahedron");
    }
}
