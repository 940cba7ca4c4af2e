use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use egui::TextureHandle;
use shared::domain::{Gender, AGE_STAGES, MAX_AGE, MIN_AGE};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{PreviewImage, UiEvent};
use crate::controller::flow::{NameFlow, PhotoFlow};
use crate::controller::orchestration::dispatch_backend_command;

const PORTRAIT_MAX_WIDTH: f32 = 360.0;

pub struct BabyVisionApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    name_flow: NameFlow,
    photo_flow: PhotoFlow,

    portrait_preview: Option<PreviewImage>,
    portrait_texture: Option<TextureHandle>,

    homepage: Option<String>,
    status: String,
}

impl BabyVisionApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            name_flow: NameFlow::default(),
            photo_flow: PhotoFlow::default(),
            portrait_preview: None,
            portrait_texture: None,
            homepage: None,
            status: "Backend worker starting...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::BackendReady { homepage } => {
                    self.homepage = Some(homepage);
                    self.status = "Ready".to_string();
                }
                UiEvent::BackendStartupFailed { reason } => {
                    self.status = format!("Backend worker failed to start: {reason}");
                }
                UiEvent::NamesGenerated { names, suggestions } => {
                    self.name_flow.complete_success(names, suggestions);
                }
                UiEvent::NamesFailed => self.name_flow.complete_failure(),
                UiEvent::PortraitGenerated { portrait, preview } => {
                    self.photo_flow.complete_success(portrait);
                    // The old texture belongs to the replaced portrait.
                    self.portrait_preview = preview;
                    self.portrait_texture = None;
                }
                UiEvent::PortraitFailed => self.photo_flow.complete_failure(),
            }
        }
    }

    fn render_name_panel(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("Name Generator");
            ui.label("Describe your preferences");
            ui.add(
                egui::TextEdit::multiline(&mut self.name_flow.preference_input)
                    .hint_text("E.g., biblical names, nature-inspired, modern and unique...")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );

            let in_flight = self.name_flow.status.is_in_flight();
            ui.horizontal(|ui| {
                let label = if in_flight {
                    "Generating names..."
                } else {
                    "Generate names"
                };
                let clicked = ui
                    .add_enabled(self.name_flow.can_submit(), egui::Button::new(label))
                    .clicked();
                if in_flight {
                    ui.spinner();
                }
                if clicked {
                    if let Some(cmd) = self.name_flow.begin_submit() {
                        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
                            self.name_flow.complete_failure();
                        }
                    }
                }
            });

            if !self.name_flow.names.is_empty() {
                ui.add_space(8.0);
                ui.strong("Suggested names:");
                egui::Grid::new("generated_names")
                    .num_columns(2)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        for pair in self.name_flow.names.chunks(2) {
                            for name in pair {
                                ui.label(name);
                            }
                            ui.end_row();
                        }
                    });
            }

            if !self.name_flow.suggestions.is_empty() {
                ui.add_space(6.0);
                ui.strong("Helpful tips:");
                for tip in &self.name_flow.suggestions {
                    ui.label(format!("• {tip}"));
                }
            }
        });
    }

    fn render_photo_panel(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("Photo Generator");

            ui.label("Gender");
            ui.horizontal(|ui| {
                for gender in Gender::ALL {
                    ui.selectable_value(&mut self.photo_flow.gender, gender, gender.label());
                }
            });

            ui.add_space(6.0);
            ui.add(
                egui::Slider::new(&mut self.photo_flow.age, MIN_AGE..=MAX_AGE).text("Age (years)"),
            );
            ui.horizontal_wrapped(|ui| {
                for stage in AGE_STAGES {
                    if ui.small_button(stage.label).clicked() {
                        self.photo_flow.set_age(stage.age as i32);
                    }
                }
            });

            let in_flight = self.photo_flow.status.is_in_flight();
            ui.horizontal(|ui| {
                let label = if in_flight {
                    "Generating photo..."
                } else {
                    "Generate photo"
                };
                let clicked = ui
                    .add_enabled(self.photo_flow.can_submit(), egui::Button::new(label))
                    .clicked();
                if in_flight {
                    ui.spinner();
                }
                if clicked {
                    if let Some(cmd) = self.photo_flow.begin_submit() {
                        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
                            self.photo_flow.complete_failure();
                        }
                    }
                }
            });

            ui.add_space(8.0);
            self.render_portrait(ui);
        });
    }

    fn render_portrait(&mut self, ui: &mut egui::Ui) {
        let Some(caption) = self.photo_flow.caption() else {
            if !self.photo_flow.status.is_in_flight() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(32.0);
                        ui.weak("Click \"Generate photo\" to visualize your child");
                        ui.add_space(32.0);
                    });
                });
            }
            return;
        };

        if self.portrait_texture.is_none() {
            if let Some(preview) = &self.portrait_preview {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [preview.width, preview.height],
                    &preview.rgba,
                );
                self.portrait_texture = Some(ui.ctx().load_texture(
                    "generated-portrait",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }

        match &self.portrait_texture {
            Some(texture) => {
                let size = scaled_portrait_size(
                    texture.size_vec2(),
                    ui.available_width().min(PORTRAIT_MAX_WIDTH),
                );
                ui.add(egui::Image::new(texture).fit_to_exact_size(size));
                ui.strong(caption);
            }
            None => {
                // Portrait committed but pixels unavailable; keep the caption
                // and the raw reference visible.
                ui.strong(caption);
                if let Some(portrait) = &self.photo_flow.portrait {
                    ui.hyperlink(&portrait.image_url);
                }
            }
        }
    }
}

impl eframe::App for BabyVisionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        // Completion events arrive from the worker thread without any input
        // event to wake the UI, so poll while a request is running.
        if self.name_flow.status.is_in_flight() || self.photo_flow.status.is_in_flight() {
            ctx.request_repaint_after(Duration::from_millis(120));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("BabyVision");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.hyperlink_to("Powered by Fenado AI", "https://fenado.ai");
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
                if let Some(homepage) = self.homepage.clone() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.hyperlink_to("Share", homepage);
                    });
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading("Meet Your Future Little One");
                    ui.weak("Discover the perfect name and visualize your child at different ages");
                });
                ui.add_space(12.0);

                ui.columns(2, |columns| {
                    self.render_name_panel(&mut columns[0]);
                    self.render_photo_panel(&mut columns[1]);
                });

                ui.add_space(12.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.strong("How it works");
                        ui.label(
                            "Generate creative name suggestions from your preferences and \
                             preview AI portraits of your future child across different ages.",
                        );
                    });
                });
            });
        });
    }
}

fn scaled_portrait_size(texture_size: egui::Vec2, max_width: f32) -> egui::Vec2 {
    if texture_size.x <= 0.0 {
        return texture_size;
    }
    let scale = (max_width / texture_size.x).min(1.0);
    texture_size * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_scales_down_to_fit_but_never_up() {
        let size = scaled_portrait_size(egui::vec2(720.0, 480.0), 360.0);
        assert_eq!(size, egui::vec2(360.0, 240.0));

        let size = scaled_portrait_size(egui::vec2(200.0, 300.0), 360.0);
        assert_eq!(size, egui::vec2(200.0, 300.0));
    }
}
