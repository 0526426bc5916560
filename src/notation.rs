//! Notation parsing and evaluation.
//!
//! A notation string is scanned left to right: the first seed character
//! (`T`, `C`, `O`, `D`, `I`) fixes the seed, every operator character
//! (`d a t k j o e g s`) is collected in input order, and anything else is an
//! error naming the offending character. Evaluation then clones the seed and
//! applies the collected operators **right to left**, so `dtC` means
//! `dual(truncate(Cube))`.
//!
//! The seed may open or close the string (`Td` and `dT` both parse),
//! matching the grammar `SEED OP* | OP* SEED`. Leading and trailing
//! whitespace is ignored; internal whitespace is not.
//!
//! # Examples
//!
//! ```rust
//! use conway::notation::{parse, NotationError};
//!
//! let soccer_ball = parse("tI").unwrap();
//! assert_eq!(soccer_ball.stats(), "tIcosahedron: V=60, E=90, F=32, χ=2");
//!
//! assert_eq!(parse(""), Err(NotationError::EmptyNotation));
//! assert_eq!(parse("dt"), Err(NotationError::NoSeed));
//! ```

use crate::core::collections::FastHashMap;
use crate::core::mesh::Mesh;
use crate::operators::{Ambo, Dual, Expand, Gyro, Join, Kis, Operator, Ortho, Snub, Truncate};
use crate::seed;
use thiserror::Error;

/// Errors from notation parsing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotationError {
    /// The input was blank after trimming.
    #[error("empty notation string")]
    EmptyNotation,

    /// The scan finished without encountering a seed character.
    #[error("no seed polyhedron found in notation")]
    NoSeed,

    /// The final character was offered as a seed but is not one.
    #[error("unknown seed polyhedron: {symbol}")]
    UnknownSeed {
        /// The offending character.
        symbol: char,
    },

    /// A character is neither a known operator nor an acceptable seed.
    #[error("unknown operation: {symbol} at position {position}")]
    UnknownOperation {
        /// The offending character.
        symbol: char,
        /// Its character position within the trimmed input.
        position: usize,
    },
}

/// A reusable notation parser.
///
/// Holds the operator registry; [`parse`] and [`must_parse`] are one-shot
/// conveniences over a fresh instance.
pub struct Parser {
    operations: FastHashMap<char, &'static dyn Operator>,
}

impl Parser {
    /// Creates a parser with the standard operator set registered.
    #[must_use]
    pub fn new() -> Self {
        let mut operations: FastHashMap<char, &'static dyn Operator> = FastHashMap::default();
        for op in [
            &Dual as &'static dyn Operator,
            &Ambo,
            &Truncate,
            &Kis,
            &Join,
            &Ortho,
            &Expand,
            &Gyro,
            &Snub,
        ] {
            operations.insert(op.symbol(), op);
        }
        Self { operations }
    }

    /// Parses and evaluates a notation string.
    ///
    /// # Errors
    ///
    /// Returns a [`NotationError`] describing the first problem found; see
    /// the [module documentation](self) for the scanning rules.
    pub fn parse(&self, notation: &str) -> Result<Mesh, NotationError> {
        let notation = notation.trim();
        if notation.is_empty() {
            return Err(NotationError::EmptyNotation);
        }

        let symbols: Vec<char> = notation.chars().collect();
        let mut seed_mesh: Option<Mesh> = None;
        let mut pipeline: Vec<&dyn Operator> = Vec::new();

        for (position, &symbol) in symbols.iter().enumerate() {
            if seed_mesh.is_none() {
                if let Some(mesh) = seed::seed(symbol) {
                    seed_mesh = Some(mesh);
                    continue;
                }
            }

            if let Some(&op) = self.operations.get(&symbol) {
                pipeline.push(op);
                continue;
            }

            return if seed_mesh.is_none() && position == symbols.len() - 1 {
                Err(NotationError::UnknownSeed { symbol })
            } else {
                Err(NotationError::UnknownOperation { symbol, position })
            };
        }

        let Some(seed_mesh) = seed_mesh else {
            return Err(NotationError::NoSeed);
        };

        let mut result = seed_mesh.clone();
        for op in pipeline.iter().rev() {
            result = op.apply(&result);
        }

        tracing::debug!(notation, result = %result.stats(), "evaluated notation");
        Ok(result)
    }

    /// Parses a notation string and discards the mesh.
    ///
    /// # Errors
    ///
    /// Exactly the errors of [`Parser::parse`].
    pub fn validate(&self, notation: &str) -> Result<(), NotationError> {
        self.parse(notation).map(|_| ())
    }

    /// The registered operators as `(symbol, name)` pairs, sorted by symbol.
    #[must_use]
    pub fn available_operations(&self) -> Vec<(char, &'static str)> {
        let mut listing: Vec<(char, &'static str)> = self
            .operations
            .iter()
            .map(|(&symbol, op)| (symbol, op.name()))
            .collect();
        listing.sort_unstable();
        listing
    }

    /// The known seeds as `(symbol, name)` pairs, in notation order.
    #[must_use]
    pub fn available_seeds(&self) -> Vec<(char, &'static str)> {
        seed::available_seeds()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses and evaluates a notation string with a fresh [`Parser`].
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(notation: &str) -> Result<Mesh, NotationError> {
    Parser::new().parse(notation)
}

/// Like [`parse`], but panics on error.
///
/// # Panics
///
/// Panics with the notation error's message when `notation` does not parse.
#[must_use]
pub fn must_parse(notation: &str) -> Mesh {
    match parse(notation) {
        Ok(mesh) => mesh,
        Err(error) => panic!("invalid notation {notation:?}: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_seeds_parse() {
        for (symbol, name) in seed::available_seeds() {
            let mesh = parse(&symbol.to_string()).unwrap();
            assert_eq!(mesh.name(), name);
        }
    }

    #[test]
    fn operators_apply_right_to_left() {
        // dtC is dual(truncate(Cube)): the truncated cube has (24, 36, 14),
        // so its dual must have (14, 36, 24).
        let mesh = parse("dtC").unwrap();
        assert_eq!(mesh.vertex_count(), 14);
        assert_eq!(mesh.edge_count(), 36);
        assert_eq!(mesh.face_count(), 24);
        assert_eq!(mesh.name(), "dtCube");
    }

    #[test]
    fn seed_may_appear_last() {
        let mesh = parse("dT").unwrap();
        assert_eq!(mesh.name(), "dTetrahedron");
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert!(parse("  dT  ").is_ok());
        assert!(parse("\ttI\n").is_ok());
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(parse(""), Err(NotationError::EmptyNotation));
        assert_eq!(parse("   "), Err(NotationError::EmptyNotation));
    }

    #[test]
    fn missing_seed() {
        assert_eq!(parse("dt"), Err(NotationError::NoSeed));
        assert_eq!(parse("d"), Err(NotationError::NoSeed));
    }

    #[test]
    fn unknown_final_character_is_an_unknown_seed() {
        assert_eq!(parse("X"), Err(NotationError::UnknownSeed { symbol: 'X' }));
        assert_eq!(parse("dX"), Err(NotationError::UnknownSeed { symbol: 'X' }));
    }

    #[test]
    fn unknown_operation_reports_position() {
        assert_eq!(
            parse("xT"),
            Err(NotationError::UnknownOperation {
                symbol: 'x',
                position: 0
            })
        );
        assert_eq!(
            parse("Cx"),
            Err(NotationError::UnknownOperation {
                symbol: 'x',
                position: 1
            })
        );
        // A second seed is not an operator.
        assert_eq!(
            parse("TC"),
            Err(NotationError::UnknownOperation {
                symbol: 'C',
                position: 1
            })
        );
    }

    #[test]
    fn notation_is_case_sensitive() {
        assert!(parse("c").is_err());
        assert!(parse("DT").is_err(), "D is a seed, T cannot follow");
    }

    #[test]
    fn must_parse_returns_the_mesh() {
        let mesh = must_parse("aC");
        assert_eq!(mesh.vertex_count(), 12);
    }

    #[test]
    #[should_panic(expected = "invalid notation")]
    fn must_parse_panics_on_error() {
        let _ = must_parse("not a polyhedron");
    }

    #[test]
    fn validate_is_parse_without_the_mesh() {
        let parser = Parser::new();
        assert_eq!(parser.validate("dtkaC"), Ok(()));
        assert_eq!(parser.validate("dt"), Err(NotationError::NoSeed));
    }

    #[test]
    fn listings_cover_the_grammar() {
        let parser = Parser::new();
        let ops = parser.available_operations();
        let symbols: String = ops.iter().map(|&(symbol, _)| symbol).collect();
        assert_eq!(symbols, "adegjkost");
        assert_eq!(parser.available_seeds().len(), 5);
    }
}
