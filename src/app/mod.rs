use std::collections::VecDeque;

use eframe::egui::{self, Context};

use crate::config::SceneConfig;

mod nodes;
mod physics;
mod proximity;
mod scene;
mod ui;

use nodes::Node;

pub struct ConstellationApp {
    scene: Scene,
}

/// Canvas pixel bounds. Written only by `Scene::sync_bounds` on the UI
/// thread; everything else reads the latest value.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CanvasBounds {
    width: f32,
    height: f32,
}

impl CanvasBounds {
    const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// Single-owner simulation state, threaded through every frame by the
/// `eframe::App::update` callback.
struct Scene {
    config: SceneConfig,
    seed: u64,
    bounds: CanvasBounds,
    nodes: Vec<Node>,
    /// Per-frame proximity pairs `(i, j)` with `i < j`, reused as scratch.
    link_scratch: Vec<(usize, usize)>,
    link_count: usize,
    animate: bool,
    show_fps: bool,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
}

impl Scene {
    fn new(config: SceneConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            bounds: CanvasBounds::ZERO,
            nodes: Vec::new(),
            link_scratch: Vec::new(),
            link_count: 0,
            animate: true,
            show_fps: true,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
        }
    }

    fn hub_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_hub()).count()
    }
}

impl ConstellationApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SceneConfig, seed: u64) -> Self {
        Self {
            scene: Scene::new(config, seed),
        }
    }
}

impl eframe::App for ConstellationApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.scene.update_fps_counter(ctx);
        self.scene.show_top_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.scene.draw_scene(ui);
            });

        // Keep the frame chain alive: one repaint request per tick.
        ctx.request_repaint();
    }
}
