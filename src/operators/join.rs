//! Join operator (`j`): the dual of the rectification.

use crate::core::mesh::Mesh;
use crate::operators::{Operator, ambo::ambo, dual::dual};

/// The join operator, defined as `dual(ambo(P))`.
///
/// Joining replaces every input edge with a rhombic face: the output has one
/// face per input edge and carries both the input's vertices and the duals
/// of its faces as vertices. The composed result is relabeled with `j` so
/// `join` of `"Cube"` is `"jCube"`, not `"daCube"`.
pub struct Join;

impl Operator for Join {
    fn symbol(&self) -> char {
        'j'
    }

    fn name(&self) -> &'static str {
        "join"
    }

    fn apply(&self, mesh: &Mesh) -> Mesh {
        let mut output = dual(&ambo(mesh));
        output.set_name(format!("j{}", mesh.name()));
        output
    }
}

/// Applies [`Join`] to `mesh`.
#[must_use]
pub fn join(mesh: &Mesh) -> Mesh {
    Join.apply(mesh)
}
