//! Entry point: parse CLI, set up logging and run the seed routine.

use anyhow::Context;
use clap::Parser;
use sports_data::{cli::SportsData, commands::handle_seed};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let config = SportsData::parse().into_config();
    config.logging.init();

    // Step failures are logged inside the run and do not change the exit status
    handle_seed(&config).with_context(|| {
        format!(
            "Error! Cannot create the database connection to {}",
            config.database.display()
        )
    })?;

    Ok(())
}
