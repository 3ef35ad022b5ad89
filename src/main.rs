//! # `cubetools`
//!
//! A small tool for transforming DIMACS CNF files augmented with cube (`a`)
//! lines, as used in cube-and-conquer SAT solving.
//!
//! By default the cube lines of the instance are shuffled. Alternatively, a
//! random subset of the cubes can be sampled, or a single cube can be merged
//! into the clause set as unit clauses of a standalone CNF instance.

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{ArgGroup, Parser};
use cubetools::{CubeFormula, CubeSelection};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["sample", "as_cnf", "as_cnf_random"])))]
struct Args {
    /// The instance to transform, a DIMACS CNF file with cube (`a`) lines
    instance: PathBuf,
    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Sample a random subset of n cubes from the instance
    #[arg(long, value_name = "N")]
    sample: Option<usize>,
    /// Output as CNF with the i-th cube (1-based) as unit clauses
    #[arg(long, value_name = "I")]
    as_cnf: Option<usize>,
    /// Output as CNF with a random cube as unit clauses
    #[arg(long)]
    as_cnf_random: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let formula = CubeFormula::from_path(&args.instance)
        .with_context(|| format!("could not read instance {}", args.instance.display()))?;

    let mut writer = BufWriter::new(io::stdout().lock());
    if let Some(idx) = args.as_cnf {
        formula.write_cnf(CubeSelection::Index(idx), &mut rng, &mut writer)?;
    } else if args.as_cnf_random {
        formula.write_cnf(CubeSelection::Random, &mut rng, &mut writer)?;
    } else if let Some(n) = args.sample {
        formula.write_sample(n, &mut rng, &mut writer)?;
    } else {
        formula.write_shuffled(&mut rng, &mut writer)?;
    }
    writer.flush()?;

    Ok(())
}
