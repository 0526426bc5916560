//! Conway operators: functors from mesh to mesh.
//!
//! Every operator consumes a mesh by reference and produces a fresh,
//! normalized mesh; inputs are never mutated, which is what lets unrelated
//! expressions evaluate in parallel. Each operator carries a one-character
//! notation symbol and a human-readable name, and prefixes its symbol to the
//! input's name (`dual` of `"Cube"` is `"dCube"`, `dual` of `"tC"` is
//! `"dtC"`).
//!
//! The primitive operators rebuild topology from ring traversals:
//!
//! - [`Dual`] — one output vertex per input face, one output face per input
//!   vertex; edge count is preserved.
//! - [`Ambo`] — output vertices at input edge midpoints (rectification).
//! - [`Truncate`] — cuts every input vertex, leaving a small facet.
//! - [`Kis`] — raises a pyramid on every input face.
//!
//! The remaining operators are defined by composition and relabel their
//! result with their own symbol: [`Join`] = `d ∘ a`, [`Ortho`] = `j ∘ j`,
//! [`Expand`] = `a ∘ a`, [`Gyro`] = `d ∘ a`, [`Snub`] = `d ∘ g`.
//!
//! # Examples
//!
//! ```rust
//! use conway::operators::{dual, Operator, Dual};
//! use conway::seed::cube;
//!
//! let octa = dual(&cube());
//! assert_eq!(octa.stats(), "dCube: V=6, E=12, F=8, χ=2");
//!
//! // The trait object form carries the notation metadata.
//! let op: &dyn Operator = &Dual;
//! assert_eq!((op.symbol(), op.name()), ('d', "dual"));
//! ```

pub mod ambo;
pub mod compound;
pub mod dual;
pub mod join;
pub mod kis;
pub mod truncate;

pub use ambo::{Ambo, ambo};
pub use compound::{Expand, Gyro, Ortho, Snub, expand, gyro, ortho, snub};
pub use dual::{Dual, dual};
pub use join::{Join, join};
pub use kis::{Kis, kis};
pub use truncate::{Truncate, truncate};

use crate::core::mesh::Mesh;

/// A Conway operator.
///
/// Implementations are stateless unit structs; the trait exists so the
/// notation parser can treat a pipeline of operators uniformly and so
/// callers can enumerate what is available.
pub trait Operator: Send + Sync {
    /// One-character notation symbol (`'d'`, `'a'`, ...).
    fn symbol(&self) -> char;

    /// Lower-case human-readable name (`"dual"`, `"ambo"`, ...).
    fn name(&self) -> &'static str;

    /// Applies the operator, producing a fresh normalized mesh.
    fn apply(&self, mesh: &Mesh) -> Mesh;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::cube;

    #[test]
    fn operators_expose_symbols_and_names() {
        let table: [(&dyn Operator, char, &str); 9] = [
            (&Dual, 'd', "dual"),
            (&Ambo, 'a', "ambo"),
            (&Truncate, 't', "truncate"),
            (&Kis, 'k', "kis"),
            (&Join, 'j', "join"),
            (&Ortho, 'o', "ortho"),
            (&Expand, 'e', "expand"),
            (&Gyro, 'g', "gyro"),
            (&Snub, 's', "snub"),
        ];
        for (op, symbol, name) in table {
            assert_eq!(op.symbol(), symbol);
            assert_eq!(op.name(), name);
        }
    }

    #[test]
    fn every_operator_prefixes_its_symbol() {
        let input = cube();
        let ops: [&dyn Operator; 9] = [
            &Dual, &Ambo, &Truncate, &Kis, &Join, &Ortho, &Expand, &Gyro, &Snub,
        ];
        for op in ops {
            let output = op.apply(&input);
            assert_eq!(
                output.name(),
                format!("{}Cube", op.symbol()),
                "{} must prefix its symbol",
                op.name()
            );
        }
    }
}
