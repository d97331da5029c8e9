//! Custom egui widgets for the sidebar.

use crate::colors;
use crate::constants::SLIDER_TRACK_WIDTH;
use easel::input::{self, DragToken};
use easel::slider::{SliderState, THUMB_HEIGHT};
use eframe::egui;

/// Vertical drag-slider: a rounded track with an oval thumb. Dragging the
/// thumb follows the pointer, pressing the track jumps to that position, and
/// arrow keys (±1, ±10 with shift) step the value while the slider has focus.
pub fn vertical_slider(
    ui: &mut egui::Ui,
    slider: &mut SliderState,
    track_height: f32,
) -> egui::Response {
    let (track_rect, response) = ui.allocate_exact_size(
        egui::vec2(SLIDER_TRACK_WIDTH, track_height),
        egui::Sense::click_and_drag(),
    );

    handle_pointer(ui, slider, &response, track_rect);
    handle_keys(ui, slider, &response);
    draw_slider(ui, slider, track_rect, &response);

    response
}

fn handle_pointer(
    ui: &egui::Ui,
    slider: &mut SliderState,
    response: &egui::Response,
    track_rect: egui::Rect,
) {
    // The session token outlives this frame; park it in egui memory keyed by
    // the widget id so each slider instance tracks only its own drag.
    let drag_id = response.id.with("drag-token");

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let (Some(token), Some(pos)) = (slider.begin_drag(), response.interact_pointer_pos()) {
            // Pointer-down snaps immediately; the session tracks moves after.
            slider.drag_to(token, track_rect.top(), track_rect.height(), pos.y);
            ui.data_mut(|d| d.insert_temp(drag_id, token));
        }
    } else if response.dragged_by(egui::PointerButton::Primary) {
        let token = ui.data(|d| d.get_temp::<DragToken>(drag_id));
        if let (Some(token), Some(pos)) = (token, response.interact_pointer_pos()) {
            slider.drag_to(token, track_rect.top(), track_rect.height(), pos.y);
        }
    } else if response.drag_stopped() {
        if let Some(token) = ui.data(|d| d.get_temp::<DragToken>(drag_id)) {
            slider.end_drag(token);
            ui.data_mut(|d| d.remove::<DragToken>(drag_id));
        }
        slider.cancel_drag();
    } else if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            slider.jump_to(track_rect.top(), track_rect.height(), pos.y);
        }
    }

    if response.clicked() || response.drag_started() {
        response.request_focus();
    }
}

fn handle_keys(ui: &egui::Ui, slider: &mut SliderState, response: &egui::Response) {
    if !response.has_focus() {
        return;
    }

    let (up, down, shift) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowUp),
            i.key_pressed(egui::Key::ArrowDown),
            i.modifiers.shift,
        )
    });

    let step = input::keyboard_step(shift);
    if up {
        slider.step(step);
    }
    if down {
        slider.step(-step);
    }
}

fn draw_slider(
    ui: &egui::Ui,
    slider: &SliderState,
    track_rect: egui::Rect,
    response: &egui::Response,
) {
    let painter = ui.painter();
    let rounding = track_rect.width() / 2.0;

    painter.rect_filled(track_rect, rounding, colors::SLIDER_TRACK);
    if response.has_focus() {
        painter.rect_stroke(
            track_rect,
            rounding,
            egui::Stroke::new(1.0, colors::SLIDER_FOCUS),
            egui::StrokeKind::Outside,
        );
    }

    let thumb_top = track_rect.top() + slider.thumb_offset(track_rect.height());
    let thumb_rect = egui::Rect::from_min_size(
        egui::pos2(track_rect.left() + 2.0, thumb_top),
        egui::vec2(track_rect.width() - 4.0, THUMB_HEIGHT),
    );
    let thumb_color = if slider.is_dragging() {
        colors::SLIDER_THUMB_ACTIVE
    } else {
        colors::SLIDER_THUMB
    };
    painter.rect_filled(thumb_rect, THUMB_HEIGHT / 2.0, thumb_color);
}
