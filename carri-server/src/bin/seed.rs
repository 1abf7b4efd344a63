//! carri-seed: load the demo catalog
//!
//! ```text
//! carri-seed [--clear] <products|suppliers|employees|company|all>
//! ```

use carri_server::seed::{self, SeedTarget};
use carri_server::{Config, ServerState, setup_environment};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "carri-seed", version, about = "Seed CarriAcces with demo data")]
struct Cli {
    /// Delete existing rows before seeding
    #[arg(long)]
    clear: bool,

    /// Table to seed
    #[arg(value_enum)]
    target: SeedTarget,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_environment();
    let cli = Cli::parse();

    let config = Config::from_env();
    let state = ServerState::initialize(&config).await?;

    let reports = seed::run(&state, cli.target, cli.clear).await?;
    for report in reports {
        let label = report.target.label();
        if report.skipped {
            println!("{label}: already populated, skipped (use --clear to replace)");
            continue;
        }
        if report.cleared > 0 {
            println!("{label}: removed {} existing row(s)", report.cleared);
        }
        for name in &report.created {
            println!("{label}: created {name}");
        }
        println!("{label}: {} row(s) created", report.created.len());
    }

    Ok(())
}
