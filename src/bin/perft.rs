use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nichess::positions;
use nichess::search::{perft, perft_divide, perft_parallel};
use nichess::{Atlas, Game, RulesConfig};

/// Count leaf nodes of the useful-action tree below a position.
#[derive(Parser, Debug)]
#[command(name = "perft")]
struct Args {
    /// Built-in position name or an encoded position string.
    #[arg(long, default_value = "start")]
    position: String,

    #[arg(long, default_value_t = 2)]
    depth: u32,

    /// Print the node count below every root action.
    #[arg(long)]
    divide: bool,

    /// Split root actions across all cores.
    #[arg(long, conflicts_with = "divide")]
    parallel: bool,

    /// Play without walls (overrides --config).
    #[arg(long)]
    no_walls: bool,

    /// Rules config as JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match RulesConfig::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                return ExitCode::from(2);
            }
        },
        None => RulesConfig::default(),
    };
    if args.no_walls {
        config.walls = false;
    }

    let encoded = positions::by_name(&args.position).unwrap_or(args.position.as_str());
    let atlas = Arc::new(Atlas::new());
    let mut game = match Game::from_encoded_with_config(atlas, config, encoded) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: cannot load position {:?}: {e}", args.position);
            eprintln!("Built-in positions: {}", positions::available_names().join(", "));
            return ExitCode::from(2);
        }
    };

    info!(position = %args.position, depth = args.depth, walls = game.config().walls, "perft");
    let started = Instant::now();

    let nodes = if args.divide {
        let divided = perft_divide(&mut game, args.depth);
        for (action, n) in &divided {
            println!("{action}: {n}");
        }
        divided.iter().map(|(_, n)| n).sum::<u64>()
    } else if args.parallel {
        perft_parallel(&game, args.depth)
    } else {
        perft(&mut game, args.depth)
    };

    let elapsed = started.elapsed();
    info!(nodes, elapsed_ms = elapsed.as_millis() as u64, "done");
    println!("perft({}) = {nodes}", args.depth);
    ExitCode::SUCCESS
}
