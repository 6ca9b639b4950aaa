mod app;
mod config;
mod util;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON scene file overriding the built-in scene.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Seed for initial node placement and velocities.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => config::load_scene(path)
            .with_context(|| format!("failed to load scene file {}", path.display()))?,
        None => config::SceneConfig::default(),
    };
    log::info!(
        "scene: {} hubs, {} dust nodes, link distance {:.0}, seed {}",
        scene.hub_labels.len(),
        scene.dust_count,
        scene.link_distance,
        args.seed
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "constellation",
        options,
        Box::new(move |cc| Ok(Box::new(app::ConstellationApp::new(cc, scene, args.seed)))),
    )
    .map_err(|error| anyhow::anyhow!("eframe exited with an error: {error}"))
}
