//! UI rendering methods for the Easel application.

use crate::EaselApp;
use crate::colors;
use crate::constants::{ARTBOARD_SIZE, KEY_ZOOM_STEP, SIDEBAR_WIDTH, SLIDER_TRACK_HEIGHT};
use crate::widgets;
use easel::input::WheelInput;
use easel::viewport::{MAX_SCALE, MIN_SCALE};
use eframe::egui;

impl EaselApp {
    /// Handles keyboard shortcuts for zoom.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                self.viewport
                    .zoom_about_center(self.viewport.scale() * KEY_ZOOM_STEP);
            }
            if i.key_pressed(egui::Key::Minus) {
                self.viewport
                    .zoom_about_center(self.viewport.scale() / KEY_ZOOM_STEP);
            }
            if i.key_pressed(egui::Key::Num0) {
                self.viewport.reset();
            }
        });
    }

    /// Renders the bottom status bar with controls hint and zoom readout.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Scroll: Pan | Ctrl+Scroll: Zoom | Drag: Pan | +/-: Zoom | 0: Reset");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{:.0}%", self.zoom_readout));
                });
            });
        });
    }

    /// Renders the left sidebar panel.
    pub fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.show_sidebar_content(ui);
                });
            });
    }

    /// Renders the sidebar content: brush parameter sliders.
    fn show_sidebar_content(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);

        ui.strong("Brush");
        ui.separator();

        if self.tool_sliders.is_empty() {
            ui.label("No tool sliders configured");
            return;
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for slider in &mut self.tool_sliders {
                ui.vertical(|ui| {
                    widgets::vertical_slider(ui, &mut slider.state, SLIDER_TRACK_HEIGHT);
                    ui.add_space(4.0);
                    ui.label(&slider.decl.label);
                    // Numeric readout mirrors the slider's current value.
                    ui.monospace(format!("{}", slider.state.value()));
                });
                ui.add_space(16.0);
            }
        });
    }

    /// Renders the central panel containing the canvas viewport.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors::CANVAS_BACKGROUND))
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();
                self.show_canvas(ui);
                self.show_zoom_controls(ctx, panel_rect);
            });
    }

    /// Renders the canvas viewport: artboard drawing plus wheel/drag input.
    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let (viewport_rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        self.handle_canvas_drag(&response);
        self.handle_canvas_wheel(ui, viewport_rect);

        ui.set_clip_rect(viewport_rect);
        self.draw_artboard(ui, viewport_rect);
    }

    /// Routes primary-button drags into the viewport's drag session.
    fn handle_canvas_drag(&mut self, response: &egui::Response) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                self.canvas_drag = self.viewport.begin_drag(pos);
            }
        } else if response.dragged_by(egui::PointerButton::Primary) {
            if let (Some(token), Some(pos)) = (self.canvas_drag, response.interact_pointer_pos()) {
                self.viewport.drag_to(token, pos);
            }
        } else if response.drag_stopped() {
            if let Some(token) = self.canvas_drag.take() {
                self.viewport.end_drag(token);
            }
        } else if self.canvas_drag.is_some() {
            // The release never reached us (focus change mid-drag).
            self.viewport.cancel_drag();
            self.canvas_drag = None;
        }
    }

    /// Routes wheel input over the viewport into pan or zoom.
    fn handle_canvas_wheel(&mut self, ui: &egui::Ui, viewport_rect: egui::Rect) {
        let (raw_scroll, modifiers, hover_pos) =
            ui.input(|i| (i.raw_scroll_delta, i.modifiers, i.pointer.hover_pos()));

        if raw_scroll == egui::Vec2::ZERO {
            return;
        }
        let Some(hover) = hover_pos else {
            return;
        };
        if !viewport_rect.contains(hover) {
            return;
        }

        self.viewport
            .handle_wheel(WheelInput::from_egui(raw_scroll, modifiers), hover, viewport_rect);
    }

    /// Draws the artboard page under the current transform.
    fn draw_artboard(&self, ui: &egui::Ui, viewport_rect: egui::Rect) {
        let half = ARTBOARD_SIZE / 2.0;
        let min = self
            .viewport
            .screen_from_world(egui::pos2(-half.x, -half.y), viewport_rect);
        let max = self
            .viewport
            .screen_from_world(egui::pos2(half.x, half.y), viewport_rect);
        let page = egui::Rect::from_min_max(min, max);

        let painter = ui.painter();
        painter.rect_filled(page.translate(egui::vec2(4.0, 6.0)), 0.0, colors::ARTBOARD_SHADOW);
        painter.rect_filled(page, 0.0, colors::ARTBOARD_FILL);
        painter.rect_stroke(
            page,
            0.0,
            egui::Stroke::new(1.0, colors::ARTBOARD_OUTLINE),
            egui::StrokeKind::Outside,
        );
    }

    /// Renders the floating zoom controls panel.
    fn show_zoom_controls(&mut self, ctx: &egui::Context, panel_rect: egui::Rect) {
        let margin = 12.0;
        let panel_width = 160.0;
        let panel_height = 36.0;

        let anchor_pos = egui::pos2(
            panel_rect.right() - panel_width - margin,
            panel_rect.bottom() - panel_height - margin,
        );

        egui::Area::new(egui::Id::new("zoom_controls"))
            .fixed_pos(anchor_pos)
            .interactable(true)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(ui.style().visuals.window_fill.gamma_multiply(0.95))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let mut scale = self.viewport.scale();
                            ui.add(
                                egui::Slider::new(&mut scale, MIN_SCALE..=MAX_SCALE)
                                    .logarithmic(true)
                                    .show_value(false),
                            );
                            if scale != self.viewport.scale() {
                                self.viewport.zoom_about_center(scale);
                            }
                            if ui.button("Fit").on_hover_text("Reset view (0)").clicked() {
                                self.viewport.reset();
                            }
                        });
                    });
            });
    }
}
