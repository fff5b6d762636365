//! Arena CLI
//!
//! Run engine-vs-engine matches or play against an engine in the terminal.

use std::path::PathBuf;

use anyhow::Context;
use arena::{play_session, ArenaConfig, EngineKind, MatchConfig, MatchReport, MatchRunner};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Battle chess match runner and terminal driver")]
struct Cli {
    /// TOML config file; flags override its values
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `battle_core=debug` (default: RUST_LOG, then info)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a series of engine-vs-engine games
    Match(MatchArgs),
    /// Play white against an engine
    Play(PlayArgs),
}

#[derive(Debug, Args)]
struct MatchArgs {
    /// Number of games
    #[arg(long, short)]
    games: Option<u32>,

    /// Turns before a game is called a draw
    #[arg(long)]
    max_turns: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    first: Option<EngineKind>,

    #[arg(long, value_enum)]
    second: Option<EngineKind>,

    /// Score greedy candidates in parallel
    #[arg(long)]
    parallel: bool,

    /// Keep engine one on white for every game
    #[arg(long)]
    no_alternate: bool,

    /// Write the JSON report here
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct PlayArgs {
    /// Engine playing black
    #[arg(long, value_enum)]
    engine: Option<EngineKind>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    parallel: bool,
}

fn init_tracing(directive: Option<&str>) -> anyhow::Result<()> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d).with_context(|| format!("bad log filter {d:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ArenaConfig> {
    match path {
        Some(p) => ArenaConfig::load(p),
        None => Ok(ArenaConfig::default()),
    }
}

fn run_match(mut config: ArenaConfig, args: MatchArgs) -> anyhow::Result<()> {
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(first) = args.first {
        config.first_engine = first;
    }
    if let Some(second) = args.second {
        config.second_engine = second;
    }
    if args.out.is_some() {
        config.results_path = args.out;
    }
    config.parallel_search |= args.parallel;
    config.alternate_sides &= !args.no_alternate;

    let (mut engine1, mut engine2) = config.build_engines();
    info!(
        engine1 = engine1.name(),
        engine2 = engine2.name(),
        games = config.games,
        max_turns = config.max_turns,
        "starting match"
    );

    let runner = MatchRunner::new(MatchConfig::from(&config));
    let (result, games) = runner
        .run_match(engine1.as_mut(), engine2.as_mut())
        .context("match aborted")?;

    let report = MatchReport {
        engine1: engine1.name().to_string(),
        engine2: engine2.name().to_string(),
        result,
        games,
        config,
    };
    report.print_report();

    if let Some(path) = &report.config.results_path {
        report.save(path)?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}

fn run_play(mut config: ArenaConfig, args: PlayArgs) -> anyhow::Result<()> {
    if let Some(engine) = args.engine {
        config.second_engine = engine;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.parallel_search |= args.parallel;
    let mut engine = config.build_opponent();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play_session(stdin.lock(), stdout.lock(), engine.as_mut())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref())?;
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Match(args) => run_match(config, args),
        Command::Play(args) => run_play(config, args),
    }
}
