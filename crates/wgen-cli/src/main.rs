//! wgen CLI - Generate embedded web server sources from a folder of assets

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{build, generate, init};
use wgen_emit::ConnectionMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wgen")]
#[command(about = "Turn a folder of web assets into handler sources for an embedded web server", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sources from an input folder without a project
    Generate {
        /// Input folder
        input: String,

        /// Scaffold template file (built-in scaffold when omitted)
        #[arg(short, long)]
        template: Option<String>,

        /// Output folder; sources are written to <output>/main
        #[arg(short, long, default_value = ".")]
        output: String,

        /// Replace an existing <output>/main folder
        #[arg(short, long)]
        force: bool,

        /// SSID of the network the board joins
        #[arg(short, long, default_value = "")]
        ssid: String,

        /// Network password
        #[arg(long, env = config::ENV_PASSWORD, hide_env_values = true)]
        password: Option<String>,

        /// Port of the web server
        #[arg(short, long, default_value_t = 80)]
        port: u16,

        /// Connection library used by the sketch
        #[arg(short, long, default_value = "wifinina")]
        mode: ConnectionMode,

        /// Hide the plain text credentials warning
        #[arg(short, long)]
        quiet: bool,
    },

    /// Create a new project
    Init {
        /// Target folder where the project is created
        #[arg(default_value = ".")]
        target: String,

        /// Delete files that block project creation
        #[arg(short, long)]
        force: bool,
    },

    /// Generate sources for an existing project
    Build {
        /// Project folder
        #[arg(default_value = ".")]
        target: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            template,
            output,
            force,
            ssid,
            password,
            port,
            mode,
            quiet,
        } => generate::run(generate::GenerateArgs {
            input,
            template,
            output,
            force,
            ssid,
            password,
            port,
            mode,
            quiet,
        }),
        Commands::Init { target, force } => init::run(&target, force),
        Commands::Build { target } => build::run(&target),
    }
}
