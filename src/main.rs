//! Tessera - OBJ meshes to GPU-ready buffers
//!
//! Usage:
//!   tessera inspect model.obj         Load a file and print what was built
//!   tessera cycle a.obj b.obj         Run the model-swapping viewer loop headless
//!   tessera config                    Print the effective settings

mod settings;
mod state;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tessera_assets::{AssetServer, LoadOptions, LoadStats, Mesh, NormalMode};
use tessera_render::MeshBuffers;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use settings::Settings;
use state::{SwapOutcome, ViewerState};

#[derive(Parser)]
#[command(name = "tessera", version, about = "Load OBJ meshes into GPU-ready buffers")]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of settings
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load one OBJ file and report the resulting mesh
    Inspect {
        path: PathBuf,

        /// Average normals across adjacent faces instead of last-write-wins
        #[arg(long)]
        accumulate: bool,

        /// Skip malformed records instead of failing
        #[arg(long)]
        lenient: bool,

        /// Print the full mesh as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cycle through models on a timer without a window
    Cycle {
        /// Models to show in turn (overrides settings)
        models: Vec<PathBuf>,

        /// Model shown when a load fails
        #[arg(long)]
        fallback: Option<PathBuf>,

        /// Seconds between swaps
        #[arg(long)]
        interval: Option<f32>,

        /// Number of frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u32,

        /// Simulated seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,

        /// Switch to the next shading mode on every successful swap
        #[arg(long)]
        cycle_shading: bool,
    },
    /// Print the effective settings as TOML
    Config {
        /// Write the settings file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

#[derive(Serialize)]
struct InspectReport<'a> {
    path: &'a Path,
    positions: usize,
    tex_coords: usize,
    declared_normals: usize,
    faces: usize,
    triangles: usize,
    degenerate_triangles: usize,
    skipped_lines: usize,
    vertex_buffer_bytes: usize,
    index_buffer_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    mesh: Option<&'a Mesh>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    // Initialize logging
    let level = if cli.verbose {
        "debug"
    } else {
        settings.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    match cli.command {
        Command::Inspect {
            path,
            accumulate,
            lenient,
            json,
        } => {
            let mut options = if lenient {
                LoadOptions {
                    normal_mode: settings.loader.normal_mode,
                    degenerate_triangles: settings.loader.degenerate_triangles,
                    ..LoadOptions::lenient()
                }
            } else {
                settings.loader
            };
            if accumulate {
                options.normal_mode = NormalMode::Accumulate;
            }
            inspect(&path, &options, json)
        }
        Command::Cycle {
            models,
            fallback,
            interval,
            frames,
            dt,
            cycle_shading,
        } => {
            let mut viewer = settings.viewer.clone();
            if !models.is_empty() {
                viewer.models = models;
            }
            if fallback.is_some() {
                viewer.fallback_model = fallback;
            }
            if let Some(interval) = interval {
                viewer.swap_interval = interval;
            }
            cycle(&viewer, settings.loader, frames, dt, cycle_shading)
        }
        Command::Config { init } => {
            if init {
                match cli.config {
                    Some(path) if !path.exists() => settings.save_to(&path)?,
                    Some(_) => {}
                    None => {
                        let exists = Settings::default_path().is_some_and(|p| p.exists());
                        if !exists {
                            settings.save()?;
                        }
                    }
                }
            }
            print!("{}", toml::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}

fn inspect(path: &Path, options: &LoadOptions, json: bool) -> Result<()> {
    let mut server = AssetServer::new(".", *options);
    let handle = server
        .load_mesh(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let entry = server
        .entry(handle)
        .with_context(|| format!("{} is not loaded", handle))?;
    let buffers = MeshBuffers::from_mesh(&entry.mesh);
    let stats: LoadStats = entry.stats;

    let report = InspectReport {
        path,
        positions: stats.positions,
        tex_coords: stats.tex_coords,
        declared_normals: stats.raw_normals,
        faces: stats.faces,
        triangles: stats.triangles,
        degenerate_triangles: stats.degenerate_triangles,
        skipped_lines: stats.skipped_lines,
        vertex_buffer_bytes: buffers.vertex_bytes().len(),
        index_buffer_bytes: buffers.index_bytes().len(),
        mesh: json.then_some(&entry.mesh),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", path.display());
        println!("  positions:        {}", report.positions);
        println!("  tex coords:       {}", report.tex_coords);
        println!("  declared normals: {}", report.declared_normals);
        println!("  faces:            {}", report.faces);
        println!("  triangles:        {}", report.triangles);
        println!("  degenerate:       {}", report.degenerate_triangles);
        println!("  skipped lines:    {}", report.skipped_lines);
        println!("  vertex buffer:    {} bytes", report.vertex_buffer_bytes);
        println!("  index buffer:     {} bytes", report.index_buffer_bytes);
    }

    Ok(())
}

fn cycle(
    viewer: &settings::ViewerSettings,
    options: LoadOptions,
    frames: u32,
    dt: f32,
    cycle_shading: bool,
) -> Result<()> {
    if viewer.models.is_empty() {
        anyhow::bail!("No models to cycle; pass paths or set viewer.models in the settings file");
    }

    let mut state = ViewerState::new(viewer, options);
    info!("Cycling {} models with {} shading", viewer.models.len(), state.shading().name());

    let report = |outcome: SwapOutcome, state: &ViewerState| match outcome {
        SwapOutcome::Loaded(path) => println!(
            "[{:>8.2}s] {} ({} triangles, {} shading)",
            state.clock().total_time,
            path.display(),
            state.model().mesh().triangle_count(),
            state.shading().name()
        ),
        SwapOutcome::Fallback { failed, error } => println!(
            "[{:>8.2}s] {} failed ({}), showing fallback",
            state.clock().total_time,
            failed.display(),
            error
        ),
        SwapOutcome::Failed { failed, error } => println!(
            "[{:>8.2}s] {} failed ({}), nothing to show",
            state.clock().total_time,
            failed.display(),
            error
        ),
    };

    if let Some(outcome) = state.start() {
        report(outcome, &state);
    }
    for _ in 0..frames {
        if let Some(outcome) = state.update(dt) {
            if cycle_shading && outcome.is_loaded() {
                state.cycle_shading();
            }
            report(outcome, &state);
        }
    }

    info!(
        "Finished after {} frames, last buffers hold {} indices",
        state.clock().frame_count,
        state.buffers().index_count()
    );

    Ok(())
}
