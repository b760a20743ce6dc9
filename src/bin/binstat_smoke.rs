use std::io::{self, Write};

use anyhow::{Context, Result};
use binstat::Accumulator;
use binstat::report::pretty_print_block_stats;
use binstat::streams::generators::Ar1Generator;
use binstat::tasks::BinningTask;

const CHAIN_SAMPLES: usize = 1_000_000;

fn main() -> Result<()> {
    let mut obs = Accumulator::<f64>::new();
    for x in [1.0, 2.0, 3.0] {
        obs.ingest(x)?;
    }
    println!("{}", obs.mean().context("mean of three samples")?);

    let generator = Ar1Generator::new(0.0, 0.9, 1.0, Some(CHAIN_SAMPLES), 1234)?;
    println!(
        "AR(1) chain: rho = 0.9, tau_int = {:.2}, naive error = {:.3e}",
        generator.tau_int(),
        generator.stationary_std() / (CHAIN_SAMPLES as f64).sqrt()
    );

    let mut task = BinningTask::new(Box::new(generator), Accumulator::new(), None, 250_000)?;
    let summary = task.run().context("AR(1) binning run")?;
    println!("{summary}");

    let mut stdout = io::stdout().lock();
    pretty_print_block_stats(task.accumulator(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
