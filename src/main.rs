use clap::Parser;
use gamesclub::console::Console;
use gamesclub::menu;
use gamesclub::store::FileReportStore;
use std::error::Error;
use std::path::PathBuf;

/// interactive games club statistics recorder
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Records per-session game scores and playtimes for a named player, shows the summary statistics, and saves a per-player text report that can be read back later."
)]
struct Cli {
    /// directory where player report files are written and read
    #[clap(short = 'd', long, default_value = ".")]
    reports_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = FileReportStore::with_dir(&cli.reports_dir);
    let mut console = Console::stdio();
    menu::run(&mut console, &store)?;

    Ok(())
}
