use eframe::egui;
use tokio::runtime::Runtime;

use crate::cli::PowerCfg;
use crate::state::PowerSession;
use crate::types::PlanPreset;

enum Status {
    Idle,
    Success(String),
    Error(String),
}

pub struct PowerModeApp {
    session: PowerSession<PowerCfg>,
    runtime: Runtime,
    status: Status,
}

impl PowerModeApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        session: PowerSession<PowerCfg>,
        runtime: Runtime,
    ) -> Self {
        Self {
            session,
            runtime,
            status: Status::Idle,
        }
    }

    fn switch_to(&mut self, preset: PlanPreset) {
        // Blocks the UI until powercfg returns
        let result = self.runtime.block_on(self.session.activate(preset.label()));
        self.status = match result {
            Ok(done) => Status::Success(format!("Switched to {} mode", done.name)),
            Err(e) => {
                tracing::error!("{}", e);
                Status::Error(e.to_string())
            }
        };
    }
}

fn preset_color(preset: PlanPreset) -> egui::Color32 {
    match preset {
        PlanPreset::HighPerformance => egui::Color32::from_rgb(0x4C, 0xAF, 0x50),
        PlanPreset::Balanced => egui::Color32::from_rgb(0x21, 0x96, 0xF3),
        PlanPreset::PowerSaver => egui::Color32::from_rgb(0xFF, 0x98, 0x00),
    }
}

impl eframe::App for PowerModeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Windows Power Mode Switcher");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label("Current Power Plan:");
                ui.strong(self.session.active_plan_name().name().unwrap_or("Unknown"));
            });

            match self.session.discovery_error() {
                Some(err) => {
                    ui.colored_label(egui::Color32::RED, err.to_string());
                }
                None => {
                    ui.weak(format!("Available plans: {}", self.session.list_plans().join(", ")));
                }
            }

            ui.add_space(10.0);
            let mut clicked = None;
            ui.vertical_centered(|ui| {
                for preset in PlanPreset::ALL {
                    let text = egui::RichText::new(preset.caption())
                        .strong()
                        .color(egui::Color32::WHITE);
                    let button = egui::Button::new(text).fill(preset_color(preset));
                    if ui.add_sized([260.0, 36.0], button).clicked() {
                        clicked = Some(preset);
                    }
                    ui.add_space(8.0);
                }
            });
            if let Some(preset) = clicked {
                self.switch_to(preset);
            }

            match &self.status {
                Status::Idle => {}
                Status::Success(msg) => {
                    ui.colored_label(egui::Color32::from_rgb(0x4C, 0xAF, 0x50), msg.as_str());
                }
                Status::Error(msg) => {
                    ui.colored_label(egui::Color32::RED, msg.as_str());
                }
            }

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}
