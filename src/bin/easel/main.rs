#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod constants;
mod ui;
mod widgets;

use assets::{load_tools, load_tools_from_path};
use clap::Parser;
use easel::input::DragToken;
use easel::slider::{SliderConfig, SliderState};
use easel::viewport::ViewportController;
use easel::{SliderDecl, ToolsConfig};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::path::PathBuf;

/// Canvas editor shell: pan/zoom viewport with brush parameter sliders.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Load tool configuration from a RON file instead of the embedded default
    #[arg(long)]
    config: Option<PathBuf>,
}

/// One sidebar slider: its declaration plus live value state.
struct ToolSlider {
    decl: SliderDecl,
    state: SliderState,
}

/// Main application state for the Easel editor shell.
pub struct EaselApp {
    viewport: ViewportController,
    canvas_drag: Option<DragToken>,
    tool_sliders: Vec<ToolSlider>,
    /// Scale carried by the last transform-changed notification, in percent.
    zoom_readout: f32,
    toasts: Toasts,
}

impl EaselApp {
    fn new(_cc: &eframe::CreationContext<'_>, args: &Args) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let tools = match &args.config {
            Some(path) => load_tools_from_path(path),
            None => load_tools(),
        };
        let tools = match tools {
            Ok(tools) => tools,
            Err(err) => {
                log::warn!("Tool config unavailable, using built-in defaults: {err}");
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(10.0)
                        .show_icon(true),
                    ..Default::default()
                });
                ToolsConfig::fallback()
            }
        };

        let tool_sliders = tools
            .sliders
            .into_iter()
            .map(|decl| ToolSlider {
                state: SliderState::new(SliderConfig::from_decl(&decl)),
                decl,
            })
            .collect();

        Self {
            viewport: ViewportController::new(),
            canvas_drag: None,
            tool_sliders,
            zoom_readout: 100.0,
            toasts,
        }
    }
}

impl eframe::App for EaselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        self.show_status_bar(ctx);
        self.show_sidebar(ctx);
        self.show_central_panel(ctx);

        if let Some(event) = self.viewport.take_transform_changed() {
            self.zoom_readout = event.scale * 100.0;
            log::trace!("canvas transform changed, scale {:.3}", event.scale);
        }

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Easel",
        options,
        Box::new(move |cc| Ok(Box::new(EaselApp::new(cc, &args)))),
    )
}
