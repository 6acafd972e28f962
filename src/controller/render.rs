use crate::controller::core::{Model, RequestState};
use crate::image_upload::SelectedImage;
use crate::prediction_api::interface::PredictionRecord;

/// What the user did this frame. The app shell turns these into events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    UploadClicked,
    PredictClicked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub prediction: String,
    pub confidence_text: String,
}

/// One display row per record, order preserved.
pub fn result_rows(records: &[PredictionRecord]) -> Vec<ResultRow> {
    records
        .iter()
        .map(|record| ResultRow {
            label: record.label.clone(),
            prediction: record.prediction.clone(),
            confidence_text: confidence_text(record.confidence),
        })
        .collect()
}

pub fn confidence_text(confidence: Option<f64>) -> String {
    match confidence {
        Some(value) => format!("Confidence: {:.2}%", value * 100.0),
        None => "Confidence: N/A".to_string(),
    }
}

pub fn predict_button_label(state: &RequestState) -> &'static str {
    match state {
        RequestState::Loading => "Processing Image...",
        _ => "Run Prediction",
    }
}

pub fn upload_caption(selected: Option<&SelectedImage>) -> String {
    match selected {
        Some(file) => format!("File: {}", file.name),
        None => "Drop or Click to Upload Otolith Image".to_string(),
    }
}

pub fn show(
    ctx: &egui::Context,
    model: &Model,
    preview: Option<&egui::TextureHandle>,
) -> Vec<Intent> {
    let mut intents = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.heading("Otolith Species Classification");
        ui.label(
            "Analyze otolith images to predict taxonomic and specific epithet details \
             using a multi-output CNN model.",
        );
        ui.add_space(8.0);
    });

    egui::SidePanel::left("upload_pane")
        .resizable(false)
        .default_width(340.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);

            let caption = upload_caption(model.selected.as_ref());
            if ui
                .add_sized([ui.available_width(), 80.0], egui::Button::new(caption))
                .clicked()
            {
                intents.push(Intent::UploadClicked);
            }

            if let Some(texture) = preview {
                ui.add_space(12.0);
                ui.add(
                    egui::Image::new(texture)
                        .max_size(egui::vec2(320.0, 320.0))
                        .rounding(6.0),
                );
            }

            ui.add_space(12.0);
            let can_predict =
                model.selected.is_some() && model.request_state != RequestState::Loading;
            let button = egui::Button::new(predict_button_label(&model.request_state));
            if ui.add_enabled(can_predict, button).clicked() {
                intents.push(Intent::PredictClicked);
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(12.0);
        ui.heading("Prediction Results");
        ui.add_space(8.0);

        match &model.request_state {
            RequestState::Failed(message) => error_banner(ui, message),
            RequestState::Loading => {
                ui.label("Loading...");
            }
            RequestState::Success(records) => {
                for row in result_rows(records) {
                    result_row(ui, &row);
                }
            }
            RequestState::Idle => {
                ui.weak("Upload an image and press \"Run Prediction\" to view results.");
            }
        }
    });

    intents
}

fn error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgb(254, 226, 226))
        .rounding(6.0)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.colored_label(
                egui::Color32::from_rgb(185, 28, 28),
                egui::RichText::new(format!("Error: {message}")).strong(),
            );
        });
}

fn result_row(ui: &mut egui::Ui, row: &ResultRow) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(6.0)
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(row.label.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(row.confidence_text.as_str());
                });
            });
            ui.label(row.prediction.as_str());
        });
    ui.add_space(6.0);
}
