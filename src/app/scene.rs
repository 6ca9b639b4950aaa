use eframe::egui::{Align2, FontId, Painter, Rect, Sense, Stroke, Ui, Vec2, vec2};

use super::nodes::spawn_nodes;
use super::physics::step_nodes;
use super::proximity::proximity_pairs;
use super::{CanvasBounds, Scene};

const LABEL_OFFSET_X: f32 = 15.0;
const LABEL_FONT_SIZE: f32 = 14.0;

impl Scene {
    /// One tick of the loop: measure bounds, link, draw, integrate.
    ///
    /// Links are computed from the positions nodes held at the end of the
    /// previous tick and nodes move only after drawing, so the lines and
    /// circles painted in one frame always agree with each other.
    pub(super) fn draw_scene(&mut self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            // No drawing surface yet; decline to run this tick.
            return;
        }

        self.sync_bounds(rect.size());

        if self.nodes.is_empty() {
            self.nodes = spawn_nodes(&self.config, self.bounds, self.seed);
            log::info!(
                "spawned {} nodes ({} hubs, {} dust) over {:.0}x{:.0}",
                self.nodes.len(),
                self.hub_count(),
                self.nodes.len() - self.hub_count(),
                self.bounds.width,
                self.bounds.height
            );
        }

        proximity_pairs(
            &self.nodes,
            self.config.link_distance,
            &mut self.link_scratch,
        );
        self.link_count = self.link_scratch.len();

        let painter = ui.painter_at(rect);
        self.paint(&painter, rect);

        if self.animate {
            step_nodes(&mut self.nodes, self.bounds);
        }
    }

    /// The only place canvas bounds change. Runs once per tick with the
    /// panel's current size; an unchanged size leaves bounds untouched.
    pub(super) fn sync_bounds(&mut self, size: Vec2) {
        let next = CanvasBounds {
            width: size.x,
            height: size.y,
        };
        if next != self.bounds {
            self.bounds = next;
        }
    }

    /// Paint order is load-bearing: background, then links, then node
    /// circles, then hub labels, so markers and text never sit under lines.
    fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, self.config.background_color());

        let origin = rect.left_top();
        let stroke = Stroke::new(1.0, self.config.edge_stroke_color());
        for &(a, b) in &self.link_scratch {
            painter.line_segment(
                [
                    origin + self.nodes[a].pos.to_vec2(),
                    origin + self.nodes[b].pos.to_vec2(),
                ],
                stroke,
            );
        }

        for node in &self.nodes {
            let fill = if node.is_hub() {
                self.config.hub_fill_color()
            } else {
                self.config.dust_fill_color()
            };
            painter.circle_filled(origin + node.pos.to_vec2(), node.radius, fill);
        }

        for node in &self.nodes {
            if let Some(label) = &node.label {
                painter.text(
                    origin + node.pos.to_vec2() + vec2(LABEL_OFFSET_X, 0.0),
                    Align2::LEFT_CENTER,
                    label,
                    FontId::proportional(LABEL_FONT_SIZE),
                    self.config.label_text_color(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SceneConfig;

    use super::*;

    #[test]
    fn sync_bounds_is_idempotent() {
        let mut scene = Scene::new(SceneConfig::default(), 0);
        scene.sync_bounds(vec2(800.0, 600.0));
        let first = scene.bounds;

        scene.sync_bounds(vec2(800.0, 600.0));
        assert_eq!(scene.bounds, first);
        assert_eq!(scene.bounds.width, 800.0);
        assert_eq!(scene.bounds.height, 600.0);
    }

    #[test]
    fn sync_bounds_tracks_the_latest_size() {
        let mut scene = Scene::new(SceneConfig::default(), 0);
        scene.sync_bounds(vec2(800.0, 600.0));
        scene.sync_bounds(vec2(1024.0, 768.0));
        assert_eq!(scene.bounds.width, 1024.0);
        assert_eq!(scene.bounds.height, 768.0);
    }
}
