use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sequence_core::SequenceStore;
use shared::{
    domain::{Placement, Scene, SceneId},
    error::ErrorReport,
    protocol::{DerivedMetrics, GestureEvent, StoreEvent},
};
use tracing::info;

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(about = "Inspect and reorder a scene sequence and its pacing metrics")]
struct Cli {
    /// Config file; defaults to ./pacing.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the smoothed curve, pacing score and summary statistics.
    Metrics {
        scenes: PathBuf,
        #[arg(long)]
        smoothing: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Drop one scene next to the scene at `index`.
    Move {
        scenes: PathBuf,
        scene_id: String,
        index: usize,
        #[arg(long, value_enum, default_value_t = PlacementArg::Before)]
        placement: PlacementArg,
        #[arg(long)]
        smoothing: Option<f64>,
    },
    /// Apply a JSON list of gesture events and print every resulting change.
    Replay {
        scenes: PathBuf,
        gestures: PathBuf,
        #[arg(long)]
        smoothing: Option<f64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlacementArg {
    Before,
    After,
}

impl From<PlacementArg> for Placement {
    fn from(value: PlacementArg) -> Self {
        match value {
            PlacementArg::Before => Placement::Before,
            PlacementArg::After => Placement::After,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref());

    match cli.command {
        Command::Metrics {
            scenes,
            smoothing,
            json,
        } => {
            let mut store = open_store(&scenes, settings)?;
            if let Some(factor) = smoothing {
                store.set_smoothing_factor_f64(factor)?;
            }
            let metrics = store.derived_metrics();
            if json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                print_metrics(&store, &metrics);
            }
        }
        Command::Move {
            scenes,
            scene_id,
            index,
            placement,
            smoothing,
        } => {
            let mut store = open_store(&scenes, settings)?;
            if let Some(factor) = smoothing {
                store.set_smoothing_factor_f64(factor)?;
            }
            store.begin_drag(&SceneId::new(scene_id));
            store.update_drag_target(index, placement.into());
            let outcome = store.drop_dragged();
            info!(outcome = ?outcome, "drop resolved");
            print_metrics(&store, &store.derived_metrics());
        }
        Command::Replay {
            scenes,
            gestures,
            smoothing,
        } => {
            let mut store = open_store(&scenes, settings)?;
            if let Some(factor) = smoothing {
                let event = match store.set_smoothing_factor_f64(factor) {
                    Ok(()) => StoreEvent::SmoothingChanged {
                        revision: store.revision(),
                        factor: store.smoothing_factor().get(),
                        metrics: store.derived_metrics(),
                    },
                    Err(err) => StoreEvent::Error(ErrorReport::from(err)),
                };
                println!("{}", serde_json::to_string(&event)?);
            }

            let raw = fs::read_to_string(&gestures)
                .with_context(|| format!("failed to read gestures '{}'", gestures.display()))?;
            let events: Vec<GestureEvent> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse gestures '{}'", gestures.display()))?;

            for event in &events {
                if store.apply_gesture(event).is_moved() {
                    let change = StoreEvent::OrderChanged {
                        revision: store.revision(),
                        order: store.scene_ids(),
                        metrics: store.derived_metrics(),
                    };
                    println!("{}", serde_json::to_string(&change)?);
                }
            }
            info!(
                gestures = events.len(),
                revision = store.revision(),
                "replay finished"
            );
        }
    }

    Ok(())
}

fn open_store(path: &Path, settings: analytics::AnalyticsConfig) -> Result<SequenceStore> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenes '{}'", path.display()))?;
    let scenes: Vec<Scene> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse scenes '{}'", path.display()))?;
    let store = SequenceStore::new(scenes, settings)
        .with_context(|| format!("invalid scene list '{}'", path.display()))?;
    Ok(store)
}

fn print_metrics(store: &SequenceStore, metrics: &DerivedMetrics) {
    println!("smoothing factor: {}", store.smoothing_factor());
    for (scene, smoothed) in store.order().iter().zip(&metrics.smoothed) {
        let label = if scene.name.is_empty() {
            scene.id.as_str()
        } else {
            scene.name.as_str()
        };
        println!("  {:<24} {:>5.1} -> {:>5.1}", label, scene.appeal, smoothed);
    }
    println!("pacing score: {:.1}", metrics.pacing_score);
    println!(
        "min {:.1}  max {:.1}  range {:.1}  average {:.1}",
        metrics.min, metrics.max, metrics.range, metrics.average
    );
}
