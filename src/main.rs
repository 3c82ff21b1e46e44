// Entrypoint for the travel planner CLI.
// - Keeps `main` small: set up logging, load the data files and hand them to
//   the UI loop.
// - Returns `anyhow::Result` so a corrupt data file aborts with a readable
//   diagnostic.

use travel_planner::config::Config;
use travel_planner::input::Terminal;
use travel_planner::ui::{main_menu, Planner};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Data directory from `TRAVEL_PLANNER_DATA_DIR` or `~/.travel_planner`.
    let mut planner = Planner::load(Config::from_env())?;
    tracing::debug!(data_dir = %planner.config().data_dir().display(), "starting");

    // Blocks until the user picks "exit".
    main_menu(&mut Terminal, &mut planner)?;
    Ok(())
}
