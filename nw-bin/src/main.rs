use anyhow::Result;
use clap::Parser;
use log::info;
use nw_bin::{checked_distance, write_distances, Cli};
use nw_types::*;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let table = BaseTable::dna();
    let mut aligners = args.aligners(&table)?;

    let start = Instant::now();
    let mut distances = vec![];
    args.process_input_pairs(|a: Seq, b: Seq| {
        let d = checked_distance(&mut aligners, a, b)?;
        if args.output.is_none() {
            println!("{d}");
        }
        distances.push(d);
        Ok(())
    })?;
    info!(
        "{} pairs, total distance {} in {:.3}s",
        distances.len(),
        distances.iter().sum::<Cost>(),
        start.elapsed().as_secs_f64()
    );

    if let Some(output) = &args.output {
        write_distances(output, &distances)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    #[test]
    fn cli_test() {
        <super::Cli as clap::CommandFactory>::command().debug_assert();
    }
}
