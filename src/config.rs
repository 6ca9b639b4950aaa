use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use eframe::egui::Color32;
use serde::Deserialize;

/// Scene parameters. The defaults are the built-in constellation; a JSON
/// file passed via `--scene` may override any subset of fields.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub hub_labels: Vec<String>,
    pub dust_count: usize,
    /// Two nodes closer than this get a link drawn between them.
    pub link_distance: f32,
    pub hub_radius: f32,
    pub dust_radius: f32,
    /// Initial velocity components are uniform in `[-max_axis_speed, max_axis_speed]`.
    pub max_axis_speed: f32,
    pub background: [u8; 4],
    pub edge_color: [u8; 4],
    pub hub_color: [u8; 4],
    pub dust_color: [u8; 4],
    pub label_color: [u8; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            hub_labels: ["Ingest", "Transform", "Analyze", "Serve"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            dust_count: 30,
            link_distance: 150.0,
            hub_radius: 8.0,
            dust_radius: 3.0,
            max_axis_speed: 0.5,
            background: [15, 23, 42, 255],
            edge_color: [148, 163, 184, 26],
            hub_color: [96, 165, 250, 255],
            dust_color: [51, 65, 85, 255],
            label_color: [255, 255, 255, 255],
        }
    }
}

impl SceneConfig {
    pub fn node_count(&self) -> usize {
        self.hub_labels.len() + self.dust_count
    }

    pub fn background_color(&self) -> Color32 {
        rgba(self.background)
    }

    pub fn edge_stroke_color(&self) -> Color32 {
        rgba(self.edge_color)
    }

    pub fn hub_fill_color(&self) -> Color32 {
        rgba(self.hub_color)
    }

    pub fn dust_fill_color(&self) -> Color32 {
        rgba(self.dust_color)
    }

    pub fn label_text_color(&self) -> Color32 {
        rgba(self.label_color)
    }
}

fn rgba([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn load_scene(path: &Path) -> Result<SceneConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let scene: SceneConfig =
        serde_json::from_str(&raw).context("scene file is not valid scene JSON")?;

    ensure!(scene.link_distance > 0.0, "link_distance must be positive");
    ensure!(scene.hub_radius > 0.0, "hub_radius must be positive");
    ensure!(scene.dust_radius > 0.0, "dust_radius must be positive");
    ensure!(
        scene.max_axis_speed >= 0.0,
        "max_axis_speed must not be negative"
    );

    Ok(scene)
}
