// ui.rs - Menu row and board painting for the Game of Life window

use eframe::egui;
use egui::{Rect, Vec2};
use std::time::Duration;

use conway::DriverState;

use crate::GameWindow;

const REFRESH: Duration = Duration::from_millis(50);
const SPACING: f32 = 1.0;

impl eframe::App for GameWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh();

        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                ui.label(format!("Generation #{}", self.generation));
                ui.label(format!("Alive: {}", self.alive));

                let button_text = if self.control.is_paused() { "Play" } else { "Pause" };
                if ui.button(button_text).clicked() {
                    self.control.toggle_play_pause();
                }

                if ui.button("Reset").clicked() {
                    self.control.reset();
                }
            });

            ui.separator();

            // Board, square, fitted to whatever space is left
            let side = self.size.get();
            let available = ui.available_size();
            let gaps = SPACING * (side as f32 - 1.0);
            let box_size = ((available.x.min(available.y) - gaps) / side as f32).max(1.0);
            let total_size = Vec2::splat((box_size + SPACING) * side as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
            let start_pos = response.rect.min;

            for coord in self.size.coords() {
                let x = start_pos.x + coord.y as f32 * (box_size + SPACING);
                let y = start_pos.y + coord.x as f32 * (box_size + SPACING);
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let cell_color = if self.board[self.size.index(coord)] {
                    self.live_color
                } else {
                    self.dead_color
                };
                painter.rect_filled(rect, 0.0, cell_color);
            }
        });

        // Keep polling while the loop can still send something
        if self.control.state() != DriverState::Terminated {
            ctx.request_repaint_after(REFRESH);
        }
    }
}
