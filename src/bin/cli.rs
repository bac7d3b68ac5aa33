// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! buildgeom CLI

use anyhow::{Context, Result};
use buildgeom::io::{self, Format};
use buildgeom::{build_script, demo, Config, Geometry, Script};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "buildgeom")]
#[command(about = "Bake immediate-mode drawing scripts into static meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a JSON script into a mesh file
    Build {
        /// Input script
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format (defaults to the output extension)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file (defaults to ./buildgeom.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Export one of the stock scenes
    Demo {
        #[arg(value_enum)]
        scene: Scene,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format (defaults to the output extension)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Seed for the tree scenes
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },

    /// Build a script and print mesh statistics
    Stats {
        /// Input script
        input: PathBuf,

        /// Configuration file (defaults to ./buildgeom.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Gltf,
    Glb,
    Stl,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Gltf => Format::Gltf,
            OutputFormat::Glb => Format::Glb,
            OutputFormat::Stl => Format::Stl,
            OutputFormat::Json => Format::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Scene {
    Shapes,
    Tree,
    ColoredTree,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            input,
            output,
            format,
            config,
        } => {
            let geometry = build_file(&input, config.as_deref())?;
            write(&geometry, &output, format, cli.verbose)?;
        }
        Commands::Demo {
            scene,
            output,
            format,
            seed,
        } => {
            let geometry = match scene {
                Scene::Shapes => demo::shapes(),
                Scene::Tree => demo::tree(seed),
                Scene::ColoredTree => demo::colored_tree(seed),
            }?;
            write(&geometry, &output, format, cli.verbose)?;
        }
        Commands::Stats { input, config } => {
            let geometry = build_file(&input, config.as_deref())?;
            print_stats(&geometry);
        }
        Commands::Version => {
            println!("buildgeom v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings, or info with `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_file(input: &Path, config: Option<&Path>) -> Result<Geometry> {
    let config = match config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env_overrides()?;
            config
        }
        None => Config::load()?,
    };
    let script = Script::from_file(input)?;
    let geometry = build_script(&script, &config.surface)
        .with_context(|| format!("Failed to build {:?}", input))?;
    Ok(geometry)
}

fn write(geometry: &Geometry, output: &Path, format: Option<OutputFormat>, verbose: bool) -> Result<()> {
    let start = std::time::Instant::now();
    io::export(geometry, output, format.map(Format::from))?;

    if verbose {
        print_stats(geometry);
        println!("{} {:.2?}", "Exported in".bright_black(), start.elapsed());
    }
    println!(
        "{} {} -> {}",
        "✓".green(),
        geometry.id.bold(),
        output.display().to_string().cyan()
    );
    Ok(())
}

fn print_stats(geometry: &Geometry) {
    let bbox = geometry.bounding_box();
    println!("{}", geometry.id.bold());
    println!("  {} {}", "Vertices:".bright_black(), geometry.vertex_count().to_string().cyan());
    println!("  {} {}", "Faces:".bright_black(), geometry.face_count().to_string().cyan());
    println!("  {} {}", "Edges:".bright_black(), geometry.edge_count().to_string().cyan());
    if bbox.is_empty() {
        println!("  {} {}", "Bounds:".bright_black(), "empty".yellow());
    } else {
        let size = bbox.size();
        println!(
            "  {} [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
            "Bounds:".bright_black(),
            bbox.min.x,
            bbox.min.y,
            bbox.min.z,
            bbox.max.x,
            bbox.max.y,
            bbox.max.z
        );
        println!(
            "  {} {:.3} x {:.3} x {:.3}",
            "Size:".bright_black(),
            size.x,
            size.y,
            size.z
        );
    }
}
