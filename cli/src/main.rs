mod logger;
mod sample;

use anyhow::{Context, Result};
use clap::Parser;
use participatory_budget_core_rs::selection::assess_items;
use participatory_budget_core_rs::{elect, Electorate};
use std::process::ExitCode;

/// Participatory budget election
///
/// Without flags, elects the next item of the bundled sample election and
/// prints the report.
#[derive(Parser, Debug)]
#[command(name = "pb-elect", version)]
struct Opts {
    /// Replay the documented scenarios and compare exact report text
    #[arg(long)]
    self_test: bool,
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    logger::init_cli_logger();

    let result = if opts.self_test {
        self_test::run()
    } else {
        run_sample()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Elect the next item of the bundled sample election
fn run_sample() -> Result<()> {
    let votes = sample::votes();
    let balances = sample::balances();
    let costs = sample::costs();

    let electorate =
        Electorate::from_parallel(&votes, &balances).context("invalid sample election")?;
    for assessment in assess_items(&electorate, &costs) {
        tracing::debug!(
            item = %assessment.item,
            supporters = assessment.supporters,
            supporter_total = assessment.supporter_total,
            shortfall = assessment.shortfall(),
            "initial affordability"
        );
    }

    let outcome = elect(&votes, &balances, &costs).context("sample election failed")?;
    tracing::info!(
        "📊 {} chosen after {} top-up round(s)",
        outcome.item,
        outcome.rounds
    );
    Ok(())
}
