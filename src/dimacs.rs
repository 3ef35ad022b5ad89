//! # Parsing Cube-Augmented DIMACS Lines
//!
//! Functions for classifying and parsing the lines of a DIMACS CNF file
//! augmented with cube (`a`) lines.
//! The approach is to accept input instances, even if they are not technically
//! in spec, as long as the input is still reasonable.
//!
//! ## References
//!
//! - [DIMACS CNF](http://www.satcompetition.org/2011/format-benchmarks2011.html)
//! - Heule, Kullmann, Biere: _Cube-and-Conquer for Satisfiability_

use nom::{
    bytes::complete::tag,
    character::complete::{i32, multispace0, multispace1},
    multi::separated_list0,
    sequence::preceded,
    IResult,
};

use crate::Error;

/// The kind of a line in a cube-augmented DIMACS file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A comment line (marker `c`)
    Comment,
    /// The problem line (marker `p`)
    Header,
    /// A cube line (marker `a`)
    Cube,
    /// Anything else, including empty lines
    Clause,
}

impl LineKind {
    /// Classifies a raw line by its first character only
    ///
    /// Lines with leading whitespace before a marker fall through to
    /// [`LineKind::Clause`], as do empty lines.
    #[must_use]
    pub fn classify(line: &str) -> Self {
        match line.as_bytes().first() {
            Some(b'c') => LineKind::Comment,
            Some(b'p') => LineKind::Header,
            Some(b'a') => LineKind::Cube,
            _ => LineKind::Clause,
        }
    }
}

/// Parses the literals of a cube line up to the terminating zero
///
/// The leading `a` marker is skipped and the terminating zero is excluded
/// from the result. Content after the terminating zero is ignored. A cube
/// ending without a terminator is accepted, so `a 0` and `a` both yield an
/// empty cube.
///
/// # Errors
///
/// [`Error::MalformedLiteral`] if a token before the terminator does not
/// parse as an integer
pub fn cube_literals(line: &str) -> Result<Vec<i32>, Error> {
    let malformed = || Error::MalformedLiteral(line.trim_end().to_owned());
    let (remain, mut lits) = cube_body(line).map_err(|_| malformed())?;
    if let Some(end) = lits.iter().position(|&l| l == 0) {
        lits.truncate(end);
        return Ok(lits);
    }
    if !remain.trim().is_empty() {
        return Err(malformed());
    }
    Ok(lits)
}

/// Nom parser for the token stream after the cube marker
fn cube_body(input: &str) -> IResult<&str, Vec<i32>> {
    preceded(
        preceded(tag("a"), multispace0),
        separated_list0(multispace1, i32),
    )(input)
}

/// Leniently extracts the literals of a clause line for metadata
/// recomputation
///
/// Integers are read until the first zero, the first non-numeric token, or
/// the end of the line, mirroring formatted stream extraction. No parse
/// failure is reported; clause lines are never re-serialized.
#[must_use]
pub fn clause_literals(line: &str) -> Vec<i32> {
    let Ok((_, mut lits)) = clause_body(line) else {
        return Vec::new();
    };
    if let Some(end) = lits.iter().position(|&l| l == 0) {
        lits.truncate(end);
    }
    lits
}

/// Nom parser for the leading integer tokens of a clause line
fn clause_body(input: &str) -> IResult<&str, Vec<i32>> {
    preceded(multispace0, separated_list0(multispace1, i32))(input)
}

#[cfg(test)]
mod tests {
    use super::{clause_literals, cube_literals, LineKind};
    use crate::Error;

    #[test]
    fn classify_markers() {
        assert_eq!(LineKind::classify("c a comment"), LineKind::Comment);
        assert_eq!(LineKind::classify("p cnf 3 2"), LineKind::Header);
        assert_eq!(LineKind::classify("a 1 -2 0"), LineKind::Cube);
        assert_eq!(LineKind::classify("1 -2 0"), LineKind::Clause);
        assert_eq!(LineKind::classify("-1 2 0"), LineKind::Clause);
    }

    #[test]
    fn classify_first_character_only() {
        // no trimming, markers after whitespace do not count
        assert_eq!(LineKind::classify(" a 1 0"), LineKind::Clause);
        assert_eq!(LineKind::classify(" c comment"), LineKind::Clause);
        assert_eq!(LineKind::classify(""), LineKind::Clause);
    }

    #[test]
    fn cube_literals_pass() {
        assert_eq!(cube_literals("a 1 -2 3 0").unwrap(), vec![1, -2, 3]);
        assert_eq!(cube_literals("a  1   -2 0").unwrap(), vec![1, -2]);
        assert_eq!(cube_literals("a1 -2 0").unwrap(), vec![1, -2]);
    }

    #[test]
    fn cube_literals_empty_cube() {
        assert!(cube_literals("a 0").unwrap().is_empty());
        assert!(cube_literals("a").unwrap().is_empty());
    }

    #[test]
    fn cube_literals_missing_terminator() {
        assert_eq!(cube_literals("a 1 -2").unwrap(), vec![1, -2]);
        assert_eq!(cube_literals("a 1 -2   ").unwrap(), vec![1, -2]);
    }

    #[test]
    fn cube_literals_ignores_tail_after_terminator() {
        assert_eq!(cube_literals("a 1 0 5 xyz").unwrap(), vec![1]);
    }

    #[test]
    fn cube_literals_fail() {
        assert!(matches!(
            cube_literals("a 1 x 0"),
            Err(Error::MalformedLiteral(line)) if line == "a 1 x 0"
        ));
        assert!(matches!(
            cube_literals("abc"),
            Err(Error::MalformedLiteral(line)) if line == "abc"
        ));
        // does not fit in an i32
        assert!(matches!(
            cube_literals("a 99999999999 0"),
            Err(Error::MalformedLiteral(_))
        ));
    }

    #[test]
    fn clause_literals_stop_at_zero() {
        assert_eq!(clause_literals("1 -2 3 0"), vec![1, -2, 3]);
        assert_eq!(clause_literals("1 -2 0 9"), vec![1, -2]);
    }

    #[test]
    fn clause_literals_lenient() {
        assert_eq!(clause_literals("1 -2 xyz 3"), vec![1, -2]);
        assert_eq!(clause_literals(""), Vec::<i32>::new());
        assert_eq!(clause_literals("   "), Vec::<i32>::new());
    }
}
