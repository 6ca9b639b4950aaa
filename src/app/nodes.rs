use eframe::egui::{Pos2, Vec2, pos2, vec2};

use crate::config::SceneConfig;
use crate::util::{uniform01, uniform_symmetric};

use super::CanvasBounds;

/// One drifting point in the constellation. Hubs carry a label and the
/// larger radius; dust nodes are unlabeled filler. Label and radius are
/// fixed at spawn time and never change.
#[derive(Clone, Debug)]
pub(super) struct Node {
    pub pos: Pos2,
    pub vel: Vec2,
    pub label: Option<String>,
    pub radius: f32,
}

impl Node {
    pub fn is_hub(&self) -> bool {
        self.label.is_some()
    }
}

/// Build the full node population: one hub per label in label order, then
/// `dust_count` dust nodes. The hubs-first order is stable for the life of
/// the run and doubles as the positional index used for link bookkeeping.
///
/// Zero bounds place every node at (0, 0); they drift apart once a resize
/// yields a real canvas.
pub(super) fn spawn_nodes(config: &SceneConfig, bounds: CanvasBounds, seed: u64) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(config.node_count());

    for (index, label) in config.hub_labels.iter().enumerate() {
        nodes.push(spawn_node(
            config,
            bounds,
            seed,
            index,
            Some(label.clone()),
            config.hub_radius,
        ));
    }

    for dust in 0..config.dust_count {
        let index = config.hub_labels.len() + dust;
        nodes.push(spawn_node(config, bounds, seed, index, None, config.dust_radius));
    }

    nodes
}

fn spawn_node(
    config: &SceneConfig,
    bounds: CanvasBounds,
    seed: u64,
    index: usize,
    label: Option<String>,
    radius: f32,
) -> Node {
    Node {
        pos: pos2(
            uniform01((seed, index, 0u8)) * bounds.width,
            uniform01((seed, index, 1u8)) * bounds.height,
        ),
        vel: vec2(
            uniform_symmetric((seed, index, 2u8), config.max_axis_speed),
            uniform_symmetric((seed, index, 3u8), config.max_axis_speed),
        ),
        label,
        radius,
    }
}
