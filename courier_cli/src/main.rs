use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    config::Settings, generate::GenerateSubcommands, stats::StatsArgs, stops::StopsArgs,
    timeline::TimelineArgs, watch::WatchArgs, window::WindowArgs,
};

mod config;
mod generate;
mod parsers;
mod render;
mod stats;
mod stops;
mod timeline;
mod watch;
mod window;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,

    /// IANA time zone used to display times, overrides COURIER_TIMEZONE
    #[arg(long, global = true)]
    timezone: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the reconstructed timeline of a batch
    Timeline {
        #[command(flatten)]
        args: TimelineArgs,
    },
    /// Print the stops of a batch with their ETA health
    Stops {
        #[command(flatten)]
        args: StopsArgs,
    },
    /// Check whether a meal window may be dispatched
    Window {
        #[command(flatten)]
        args: WindowArgs,
    },
    /// Aggregate batch counts for a meal window
    Stats {
        #[command(flatten)]
        args: StatsArgs,
    },
    /// Re-render the timeline of a batch on every refresh interval
    Watch {
        #[command(flatten)]
        args: WatchArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let params = Settings::from_env()
        .with_timezone(cli.timezone)
        .into_params()?;

    match cli.command {
        Some(Commands::Timeline { args }) => timeline::run(args, &params)?,
        Some(Commands::Stops { args }) => stops::run(args)?,
        Some(Commands::Window { args }) => window::run(args, &params)?,
        Some(Commands::Stats { args }) => stats::run(args)?,
        Some(Commands::Watch { args }) => watch::run(args, &params)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
