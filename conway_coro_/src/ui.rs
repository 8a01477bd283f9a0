// ui.rs - Renders the latest generation and forwards gestures to the simulation

use conway::sizing;
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::GameOfLife;

const SPACING: f32 = 0.5;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = self.frame.latest();
        let running = self.simulation.is_running();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.simulation.request_toggle_run();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.simulation.request_clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.simulation.request_randomize();
                }

                if ui.button("Fit to window").clicked() {
                    self.fit_requested = true;
                }

                ui.separator();

                ui.label(format!("Generation: {}", frame.generation));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.label("Click cells to toggle them while paused. Edges wrap around.");

            ui.separator();

            let grid = &frame.grid;
            let (rows, cols) = grid.dimensions();
            let stats_height = 2.0 * ui.spacing().interact_size.y;
            let area = ui.available_size() - Vec2::new(0.0, stats_height);

            if std::mem::take(&mut self.fit_requested) {
                let (fit_rows, fit_cols) = sizing::fit_to_viewport(area.x, area.y);
                if let Err(e) = self.simulation.resize(fit_rows, fit_cols) {
                    log::error!("cannot resize grid: {e}");
                }
                // The resized frame arrives through the observer.
                return;
            }

            // Square cells, as large as the area allows.
            let pitch = (area.x / cols as f32).min(area.y / rows as f32).max(2.0);
            let box_size = pitch - SPACING;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(pitch * cols as f32, pitch * rows as f32);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for (row, cells) in grid.iter_rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + col as f32 * pitch,
                            start_pos.y + row as f32 * pitch,
                        ),
                        Vec2::splat(box_size),
                    );

                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            // Handle clicking; the simulation ignores toggles while running
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    let row = (offset.y / pitch) as usize;
                    let col = (offset.x / pitch) as usize;
                    self.simulation.request_toggle(row, col);
                }
            }

            ui.separator();

            let total = rows * cols;
            let live_cells = grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total as f32) * 100.0
                ));
            });
        });
    }
}
