use eframe::egui::{self, Align, Context, Layout};

use super::Scene;

impl Scene {
    pub(super) fn update_fps_counter(&mut self, ctx: &Context) {
        const FPS_SAMPLE_WINDOW: usize = 120;

        let dt = ctx.input(|input| input.stable_dt);
        if dt <= f32::EPSILON {
            return;
        }

        self.fps_current = (1.0 / dt).clamp(0.0, 1000.0);
        self.fps_samples.push_back(self.fps_current);
        while self.fps_samples.len() > FPS_SAMPLE_WINDOW {
            self.fps_samples.pop_front();
        }
    }

    pub(super) fn fps_display_text(&self) -> Option<String> {
        if !self.show_fps || self.fps_samples.is_empty() {
            return None;
        }

        let average = self.fps_samples.iter().sum::<f32>() / self.fps_samples.len() as f32;
        Some(format!("FPS {:.0} | avg {average:.1}", self.fps_current))
    }

    pub(super) fn show_top_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("constellation");
                    ui.separator();
                    let hubs = self.hub_count();
                    ui.label(format!("hubs: {hubs}"));
                    ui.label(format!("dust: {}", self.nodes.len().saturating_sub(hubs)));
                    ui.label(format!("links: {}", self.link_count));
                    ui.separator();
                    ui.checkbox(&mut self.animate, "Animate");

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.checkbox(&mut self.show_fps, "FPS");
                        if let Some(text) = self.fps_display_text() {
                            ui.label(text);
                        }
                    });
                });
            });
    }
}
