use anyhow::{bail, ensure, Context, Result};
use bio::io::fasta;
use clap::{value_parser, Parser};
use itertools::Itertools;
use log::info;
use nw_algos::{
    cli::{AlgorithmArgs, CostArgs},
    Algorithm, NW,
};
use nw_types::{Aligner, BaseTable, Cost, Seq};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Needleman-Wunsch distance between pairs of DNA sequences.
#[derive(Parser, Serialize, Deserialize)]
#[clap(author, about, disable_version_flag(true))]
// Override some generator flags
#[clap(mut_arg("seed", |a| a.hide_short_help(true)))]
#[clap(mut_arg("cnt", |a| a.hide_short_help(true)))]
#[clap(mut_arg("error_model", |a| a.hide_short_help(true)))]
#[clap(group(
    clap::ArgGroup::new("input_type")
        .required(true)
        .args(&["input", "length"]),
))]
pub struct Cli {
    /// A .seq, .txt, or Fasta file with sequence pairs, or a directory of them.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: Option<PathBuf>,

    /// Write one distance per line to this file instead of stdout.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub output: Option<PathBuf>,

    /// Run all four evaluators on each pair and fail when they disagree.
    #[clap(long, display_order = 2)]
    pub check: bool,

    #[clap(flatten)]
    pub algorithm: AlgorithmArgs,

    #[clap(flatten)]
    pub costs: CostArgs,

    /// Options to generate an input pair.
    #[clap(flatten, next_help_heading = "Generated input")]
    pub generate: pa_generate::DatasetGenerator,
}

impl Cli {
    /// The configured evaluator, followed by the three others when `--check` is set.
    pub fn aligners<'t>(&self, table: &'t BaseTable) -> Result<Vec<Box<dyn Aligner + 't>>> {
        let cm = self.costs.cost_model()?;
        let algorithm = self.algorithm.algorithm();
        let mut algorithms = vec![algorithm];
        if self.check {
            algorithms.extend(
                Algorithm::all(self.algorithm.cache_size)
                    .into_iter()
                    .filter(|&other| other != algorithm),
            );
        }
        Ok(algorithms
            .into_iter()
            .map(|algorithm| Box::new(NW::new(cm, table, algorithm)) as Box<dyn Aligner + 't>)
            .collect())
    }

    /// Call the given function for each pair in the input.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(Seq, Seq) -> Result<()>,
    ) -> Result<()> {
        let Some(input) = &self.input else {
            // Generate random input.
            let seed = self.generate.seed.unwrap_or_else(|| {
                let seed = ChaCha8Rng::from_entropy().gen_range(0..1_000);
                info!("Seed: {seed}");
                seed
            });
            let rng = &mut ChaCha8Rng::seed_from_u64(seed);
            for _ in 0..self.generate.cnt.unwrap_or(1) {
                let (a, b) = self.generate.settings.generate(rng);
                run_pair(&a, &b)?;
            }
            return Ok(());
        };

        let files = if input.is_file() {
            vec![input.clone()]
        } else {
            let mut files: Vec<PathBuf> = input
                .read_dir()
                .with_context(|| format!("{} is not a file or directory", input.display()))?
                .map(|entry| entry.map(|entry| entry.path()))
                .collect::<std::io::Result<_>>()?;
            files.sort();
            files
        };

        for f in files {
            process_file(&f, &mut run_pair).with_context(|| format!("in {}", f.display()))?;
        }
        Ok(())
    }
}

/// The distance given by the first aligner. Fails when any other aligner disagrees.
pub fn checked_distance(aligners: &mut [Box<dyn Aligner + '_>], a: Seq, b: Seq) -> Result<Cost> {
    let Some((first, others)) = aligners.split_first_mut() else {
        bail!("no aligner to run");
    };
    let d = first.distance(a, b)?;
    for other in others {
        let d2 = other.distance(a, b)?;
        ensure!(d == d2, "{first:?} gives {d} but {other:?} gives {d2}");
    }
    Ok(d)
}

/// Writes one distance per line.
pub fn write_distances(path: &Path, distances: &[Cost]) -> Result<()> {
    std::fs::write(path, distances.iter().map(|d| format!("{d}\n")).join(""))
        .with_context(|| format!("writing {}", path.display()))
}

fn process_file(f: &Path, run_pair: &mut impl FnMut(Seq, Seq) -> Result<()>) -> Result<()> {
    let Some(ext) = f.extension().and_then(|ext| ext.to_str()) else {
        bail!("Unknown file extension. Must be in {{seq,txt,fna,fa,fasta}}.");
    };
    match ext {
        "seq" | "txt" => {
            let lines = BufReader::new(File::open(f)?).lines();
            for (a, b) in lines.tuples() {
                let (mut a, mut b) = (a?.into_bytes(), b?.into_bytes());
                if ext == "seq" {
                    ensure!(a.first() == Some(&b'>'), "expected a line starting with '>'");
                    ensure!(b.first() == Some(&b'<'), "expected a line starting with '<'");
                    a.remove(0);
                    b.remove(0);
                }
                run_pair(&a, &b)?;
            }
        }
        "fna" | "fa" | "fasta" => {
            let records = fasta::Reader::new(BufReader::new(File::open(f)?)).records();
            for (a, b) in records.tuples() {
                run_pair(a?.seq(), b?.seq())?;
            }
        }
        ext => bail!("Unknown file extension {ext:?}. Must be in {{seq,txt,fna,fa,fasta}}."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!("nw-bin-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join(name))
    }

    fn pairs_in(name: &str, content: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let path = temp_path(name)?;
        File::create(&path)?.write_all(content)?;
        let cli = Cli::try_parse_from(["nw", "-i", path.to_str().unwrap()])?;
        let mut pairs = vec![];
        let result = cli.process_input_pairs(|a, b| {
            pairs.push((a.to_vec(), b.to_vec()));
            Ok(())
        });
        std::fs::remove_file(&path)?;
        result.map(|()| pairs)
    }

    #[test]
    fn txt_input() {
        let pairs = pairs_in("pairs.txt", b"ACGT\nACG\nAAAA\nTTTT\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                (b"ACGT".to_vec(), b"ACG".to_vec()),
                (b"AAAA".to_vec(), b"TTTT".to_vec())
            ]
        );
    }

    #[test]
    fn seq_input() {
        let pairs = pairs_in("pairs.seq", b">AC-GT\n<ACGT\n").unwrap();
        assert_eq!(pairs, vec![(b"AC-GT".to_vec(), b"ACGT".to_vec())]);
        assert!(pairs_in("bad.seq", b"ACGT\n<ACGT\n").is_err());
    }

    #[test]
    fn fasta_input() {
        let pairs = pairs_in("pairs.fa", b">a\nACGT\nTT\n>b\nACG\n").unwrap();
        assert_eq!(pairs, vec![(b"ACGTTT".to_vec(), b"ACG".to_vec())]);
    }

    #[test]
    fn unknown_extension() {
        assert!(pairs_in("pairs.csv", b"ACGT\nACG\n").is_err());
    }

    #[derive(Debug)]
    struct Constant(Cost);

    impl Aligner for Constant {
        fn distance(&mut self, _a: Seq, _b: Seq) -> nw_types::Result<Cost> {
            Ok(self.0)
        }
    }

    #[test]
    fn check_runs_all_evaluators() {
        let table = BaseTable::dna();
        let args = [
            "nw",
            "-i",
            "pairs.txt",
            "--algorithm",
            "cache-aware",
            "--cache-size",
            "64",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.aligners(&table).unwrap().len(), 1);

        let cli = Cli::try_parse_from(args.into_iter().chain(["--check"])).unwrap();
        let mut aligners = cli.aligners(&table).unwrap();
        assert_eq!(aligners.len(), 4);
        assert_eq!(checked_distance(&mut aligners, b"AC-GTN", b"ACGT").unwrap(), 1);
    }

    #[test]
    fn check_flags_disagreement() {
        let mut aligners: Vec<Box<dyn Aligner>> = vec![];
        aligners.push(Box::new(Constant(3)));
        aligners.push(Box::new(Constant(3)));
        assert_eq!(checked_distance(&mut aligners, b"A", b"C").unwrap(), 3);
        aligners.push(Box::new(Constant(4)));
        let err = checked_distance(&mut aligners, b"A", b"C").unwrap_err();
        assert!(err.to_string().contains("gives 4"), "{err}");
        assert!(checked_distance(&mut [], b"A", b"C").is_err());
    }

    #[test]
    fn output_file() {
        let path = temp_path("distances.txt").unwrap();
        write_distances(&path, &[3, 0, 12]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "3\n0\n12\n");
        std::fs::remove_file(&path).unwrap();
    }
}
