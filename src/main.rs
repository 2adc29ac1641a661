//! Command line driver for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life::{
    config::{CliOverrides, Settings},
    game_of_life::{io::pattern_file_name, patterns, write_named_patterns, Grid, Seeder},
    simulation::Simulation,
    utils::{format_grid_with_coords, format_stats, ColorOutput, FrameRenderer},
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board width for a random fill or a named pattern (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Board height for a random fill or a named pattern (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Random seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pattern file to start from (overrides config)
        #[arg(short, long, conflicts_with = "named")]
        pattern: Option<PathBuf>,

        /// Built-in pattern to start from (overrides config)
        #[arg(short, long)]
        named: Option<String>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Worker threads (overrides config)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Pause between generations in milliseconds (overrides config)
        #[arg(long)]
        wait_ms: Option<u64>,

        /// Print the time taken by each generation instead of drawing it
        #[arg(long)]
        timing: bool,
    },

    /// Print a pattern with coordinates
    Show {
        /// Pattern file
        #[arg(conflicts_with = "named", required_unless_present = "named")]
        pattern: Option<PathBuf>,

        /// Built-in pattern name
        #[arg(short, long)]
        named: Option<String>,

        /// Configuration file path, used for the pattern glyphs
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Dump the grid as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a default configuration and the built-in pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            seed,
            pattern,
            named,
            generations,
            workers,
            wait_ms,
            timing,
        } => {
            let overrides = CliOverrides {
                generations,
                workers,
                wait_ms,
                width,
                height,
                random_seed: seed,
                pattern_file: pattern,
                named_pattern: named,
            };
            run_command(config, overrides, timing)
        }
        Commands::Show {
            pattern,
            named,
            config,
            json,
        } => show_command(pattern, named, config, json),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Read settings from `path`, falling back to defaults when it does not exist.
/// Validation is left to the caller, after command line overrides are applied.
fn load_settings(path: &PathBuf) -> Result<Settings> {
    if path.exists() {
        Settings::read_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, timing: bool) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut simulation = Simulation::from_settings(&settings)?;
    let mut renderer = FrameRenderer::from_config(&settings.render);
    let draw = settings.render.enabled && !timing;
    let wait = Duration::from_millis(settings.render.wait_ms);

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Generation 0: {} ({} workers)",
            format_stats(simulation.current()),
            simulation.stepper().workers()
        ))
    );
    if draw {
        if let Some(frame) = renderer.render(simulation.current()) {
            println!("\n\n\n\n{}", frame);
        }
    }

    let summary = simulation.run(
        settings.simulation.generations,
        settings.simulation.stop_when_static,
        |grid, report| {
            if timing {
                println!(
                    "Generation {}: {:?} ({} alive)",
                    report.generation, report.elapsed, report.population
                );
            } else if draw {
                if let Some(frame) = renderer.render(grid) {
                    println!("\n\n\n\n{}", frame);
                }
            }
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        },
    );

    if summary.stopped_static {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Grid stopped changing at generation {}",
                simulation.generation()
            ))
        );
    }
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Ran {} generation(s) in {:.3}s: {}",
            summary.generations_run,
            summary.elapsed.as_secs_f64(),
            format_stats(simulation.current())
        ))
    );

    Ok(())
}

fn show_command(
    pattern: Option<PathBuf>,
    named: Option<String>,
    config_path: PathBuf,
    json: bool,
) -> Result<()> {
    let settings = load_settings(&config_path)?;
    let seeder = Seeder::new(settings.pattern);

    let grid: Grid = match (pattern, named) {
        (Some(path), _) => seeder.load(&path)?,
        (None, Some(name)) => seeder
            .named(&name)
            .with_context(|| format!("Failed to load named pattern '{}'", name))?,
        (None, None) => anyhow::bail!("Either a pattern file or --named is required"),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&grid).context("Failed to serialize grid")?
        );
    } else {
        println!("{}", format_grid_with_coords(&grid));
        println!("{}", format_stats(&grid));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    write_config(&config_dir.join("default.yaml"), &Settings::default(), force)?;

    let written = write_named_patterns(&patterns_dir).context("Failed to write patterns")?;
    println!(
        "Created {} pattern files in: {}",
        written.len(),
        patterns_dir.display()
    );

    // One ready-made configuration per built-in pattern, pointing into the chosen directory
    let examples_dir = config_dir.join("examples");
    for name in patterns::names() {
        let mut settings = Settings::default();
        settings.seed = life::config::SeedConfig::File {
            path: patterns_dir.join(pattern_file_name(name)),
        };
        settings.simulation.generations = 100;
        write_config(&examples_dir.join(format!("{}.yaml", name)), &settings, force)?;
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_dir.join("default.yaml").display());
    println!(
        "2. Run: game_of_life run --config {}",
        examples_dir.join("glider.yaml").display()
    );

    Ok(())
}

fn write_config(path: &Path, settings: &Settings, force: bool) -> Result<()> {
    let path = path.to_path_buf();
    if path.exists() && !force {
        println!("Skipped: {} (already exists)", path.display());
        return Ok(());
    }
    settings
        .to_file(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    println!("Created: {}", path.display());
    Ok(())
}
