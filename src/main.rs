use std::path::PathBuf;
use std::process;

use clap::Parser;

use adventure_world::{GameState, load_game_data};

#[derive(Parser)]
#[command(name = "adventure-world")]
#[command(about = "Load and check a text-adventure world file")]
#[command(version)]
struct Cli {
    /// World document (.json, or .toml)
    #[arg(default_value = "world.json")]
    path: PathBuf,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report problems; don't render the start room
    #[arg(short, long)]
    quiet: bool,
}

/// Base log level for a `-v` count: error, info, debug, trace.
///
/// Warnings are skipped on purpose. Skipped entries are printed from the load
/// report, so the library's own `warn!` lines would only repeat them.
fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level(verbosity));
    // RUST_LOG still wins when set
    builder.parse_default_env();
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = match load_game_data(&cli.path) {
        Ok(report) => report,
        Err(e) => {
            // LoadError already names the file
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    for diagnostic in &report.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    let world = report.world;
    println!(
        "Loaded {}: {} rooms, {} items, starting in '{}'.",
        cli.path.display(),
        world.room_count(),
        world.item_count(),
        world.start_room_name()
    );

    if !cli.quiet {
        let game = GameState::new(world);
        print!("\n{}", game.look());
    }
}
