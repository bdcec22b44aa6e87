//! corrugate - corrugated sphere generator
//!
//! Stands in for the interactive controls: resolution flags replace the
//! sliders and a move string replaces the marker keys. Output is OBJ for
//! inspection in any mesh viewer.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "corrugate")]
#[command(about = "Corrugated sphere mesh generator")]
#[command(version)]
struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every surface command
#[derive(Args, Debug, Clone)]
pub struct SurfaceArgs {
    /// Path to a corrugate.toml config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cells around u (overrides config)
    #[arg(short = 'u', long)]
    pub u_resolution: Option<u32>,

    /// Cells along v (overrides config)
    #[arg(short = 'v', long)]
    pub v_resolution: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the flat-shaded surface as OBJ
    Generate {
        #[command(flatten)]
        surface: SurfaceArgs,

        /// Output .obj file
        #[arg(short, long)]
        output: PathBuf,

        /// Object name written to the OBJ
        #[arg(long, default_value = "corrugated_sphere")]
        name: String,
    },

    /// Export the U/V wireframe as OBJ lines
    Wireframe {
        #[command(flatten)]
        surface: SurfaceArgs,

        /// Output .obj file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Replay marker key presses (L/R/U/D) and report the marker center
    Marker {
        #[command(flatten)]
        surface: SurfaceArgs,

        /// Key presses, e.g. "RRUUL"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Export the marker sphere at its final position
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print buffer sizes for a resolution
    Stats {
        #[command(flatten)]
        surface: SurfaceArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            surface,
            output,
            name,
        } => commands::generate(&surface, &output, &name),
        Commands::Wireframe { surface, output } => commands::wireframe(&surface, &output),
        Commands::Marker {
            surface,
            moves,
            output,
        } => commands::marker(&surface, &moves, output.as_deref()),
        Commands::Stats { surface } => commands::stats(&surface),
    }
}
