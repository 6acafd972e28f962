use app::App;
use config::Config;
use file_picker::impl_rfd::FilePickerRfd;
use file_picker::interface::FilePicker;
use prediction_api::impl_http::PredictionApiHttp;
use prediction_api::interface::PredictionApi;
use std::sync::Arc;

mod app;
mod config;
mod controller;
mod error;
mod file_picker;
mod image_upload;
mod prediction_api;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = Config::default();
    log::info!("prediction endpoint: {}", config.api_base_url);

    let prediction_api: Arc<dyn PredictionApi> = Arc::new(PredictionApiHttp::new(&config)?);
    let file_picker: Arc<dyn FilePicker> = Arc::new(FilePickerRfd::new());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 620.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Otolith Species Classification",
        options,
        Box::new(move |cc| {
            Box::new(App::new(prediction_api, file_picker, cc.egui_ctx.clone()))
        }),
    )?;

    Ok(())
}
