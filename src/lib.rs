//! # cubetools - Transforms for Cube-Augmented DIMACS Files
//!
//! Tooling for DIMACS CNF files augmented with cube (`a`) lines, as used in
//! cube-and-conquer SAT solving. The cube set of an instance can be shuffled,
//! a random subset of it sampled, or a single cube merged into the clause set
//! as unit clauses of a standalone CNF instance.

use std::io;

pub mod dimacs;
pub mod formula;

pub use formula::{CubeFormula, CubeSelection};

/// Errors occurring within the cube transform pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A cube operation was requested on an instance without cube lines
    #[error("no cubes found in file")]
    NoCubes,
    /// An explicit 1-based cube index outside the valid range
    #[error("cube index out of range: {0}")]
    IndexOutOfRange(usize),
    /// A cube line contained a token that is not an integer literal
    #[error("malformed literal in cube line '{0}'")]
    MalformedLiteral(String),
}
