//! # Cube Formula Type and Transforms
//!
//! In-memory representation of a cube-augmented DIMACS instance and the three
//! transforms on its cube set: shuffling, sampling, and exporting one cube as
//! unit clauses of a standalone CNF.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use rand::{seq::SliceRandom, Rng};

use crate::{
    dimacs::{self, LineKind},
    Error,
};

/// Selects the cube to resolve in [`CubeFormula::write_cnf`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeSelection {
    /// The cube at the given 1-based position in the instance
    Index(usize),
    /// A uniformly random cube
    Random,
}

/// A cube-augmented DIMACS instance with its lines classified
///
/// All lines are kept verbatim in their original order; the transforms only
/// ever reorder, drop, or append whole lines. The instance is fully
/// materialized in memory before any transform runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeFormula {
    lines: Vec<(LineKind, String)>,
}

impl CubeFormula {
    /// Reads and classifies an instance from a buffered reader
    ///
    /// # Errors
    ///
    /// If reading fails
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            lines.push((LineKind::classify(&line), line));
        }
        Ok(Self { lines })
    }

    /// Reads and classifies an instance from a file path
    ///
    /// # Errors
    ///
    /// If the file cannot be opened or reading fails
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// The number of cube lines in the instance
    #[must_use]
    pub fn cube_count(&self) -> usize {
        self.cubes().count()
    }

    /// The number of clause lines in the instance
    ///
    /// Every [`LineKind::Clause`] line counts once. Blank lines classify as
    /// clause lines and are included; established cubing toolchains count
    /// them the same way, so this is kept as is.
    #[must_use]
    pub fn clause_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|(kind, _)| *kind == LineKind::Clause)
            .count()
    }

    /// The maximum variable index over all clause lines and the given extra
    /// literals, or `0` if there are none
    ///
    /// The recomputed value is authoritative for new output; the declared
    /// header of the input may over- or undercount and is never consulted.
    #[must_use]
    pub fn max_variable(&self, extra: &[i32]) -> u32 {
        self.clause_lines()
            .flat_map(dimacs::clause_literals)
            .chain(extra.iter().copied())
            .map(i32::unsigned_abs)
            .max()
            .unwrap_or(0)
    }

    /// Writes the instance with all cubes retained but in random order
    ///
    /// Equivalent to [`CubeFormula::write_sample`] with `n` set to the cube
    /// count.
    ///
    /// # Errors
    ///
    /// If writing fails
    pub fn write_shuffled<W: Write, R: Rng>(&self, rng: &mut R, writer: W) -> Result<(), Error> {
        self.write_sample(self.cube_count(), rng, writer)
    }

    /// Writes the instance with a random subset of `min(n, cube_count)`
    /// cubes in random order
    ///
    /// Non-cube lines come first, verbatim and in their original relative
    /// order, followed by the retained cube lines. `n = 0` is valid and
    /// emits no cube lines at all.
    ///
    /// # Errors
    ///
    /// If writing fails
    pub fn write_sample<W: Write, R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
        mut writer: W,
    ) -> Result<(), Error> {
        let mut cubes: Vec<&str> = self.cubes().collect();
        cubes.shuffle(rng);
        cubes.truncate(n);
        for (kind, line) in &self.lines {
            if *kind != LineKind::Cube {
                writeln!(writer, "{line}")?;
            }
        }
        for cube in cubes {
            writeln!(writer, "{cube}")?;
        }
        Ok(())
    }

    /// Writes a standalone CNF with the selected cube merged into the clause
    /// set as unit clauses
    ///
    /// The output starts with a freshly computed `p cnf` header, followed by
    /// every clause line verbatim in original order, followed by one unit
    /// clause per literal of the selected cube, in cube order. Comment,
    /// header, and cube lines of the input are dropped. Selection and cube
    /// parsing are validated before the first output byte is written.
    ///
    /// # Errors
    ///
    /// - [`Error::NoCubes`] if the instance contains no cube lines
    /// - [`Error::IndexOutOfRange`] if an explicit index does not resolve
    /// - [`Error::MalformedLiteral`] if the selected cube fails to parse
    /// - [`Error::Io`] if writing fails
    pub fn write_cnf<W: Write, R: Rng>(
        &self,
        selection: CubeSelection,
        rng: &mut R,
        mut writer: W,
    ) -> Result<(), Error> {
        let cubes: Vec<&str> = self.cubes().collect();
        if cubes.is_empty() {
            return Err(Error::NoCubes);
        }
        let resolved = match selection {
            CubeSelection::Random => rng.random_range(0..cubes.len()),
            CubeSelection::Index(idx) => idx
                .checked_sub(1)
                .filter(|zero_based| *zero_based < cubes.len())
                .ok_or(Error::IndexOutOfRange(idx))?,
        };
        let lits = dimacs::cube_literals(cubes[resolved])?;
        let n_vars = self.max_variable(&lits);
        let n_clauses = self.clause_count() + lits.len();
        writeln!(writer, "p cnf {n_vars} {n_clauses}")?;
        for line in self.clause_lines() {
            writeln!(writer, "{line}")?;
        }
        for lit in lits {
            writeln!(writer, "{lit} 0")?;
        }
        Ok(())
    }

    /// Iterates over the cube lines in original order
    fn cubes(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|(kind, _)| *kind == LineKind::Cube)
            .map(|(_, line)| line.as_str())
    }

    /// Iterates over the clause lines in original order
    fn clause_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|(kind, _)| *kind == LineKind::Clause)
            .map(|(_, line)| line.as_str())
    }
}
