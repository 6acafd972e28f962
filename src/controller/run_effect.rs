use crate::controller::core::{Effect, Event};
use crate::error::PredictError;
use crate::image_upload;
use crate::prediction_api::interface::PredictionApi;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Executes effects on worker threads and reports their completion events
/// back through the channel. State is never touched here; the update loop
/// owns it.
#[derive(Clone)]
pub struct RunEffect {
    prediction_api: Arc<dyn PredictionApi>,
    event_sender: Sender<Event>,
    ui_ctx: egui::Context,
}

impl RunEffect {
    pub fn new(
        prediction_api: Arc<dyn PredictionApi>,
        event_sender: Sender<Event>,
        ui_ctx: egui::Context,
    ) -> Self {
        Self {
            prediction_api,
            event_sender,
            ui_ctx,
        }
    }

    pub fn spawn(&self, effects: Vec<Effect>) {
        for effect in effects {
            let runner = self.clone();
            std::thread::spawn(move || runner.run_effect(effect));
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::LoadImage { file_seq, path } => {
                log::info!("loading image {:?}", path);
                let result = image_upload::load_selected(&path);
                self.send(Event::ImageLoadDone { file_seq, result });
            }
            Effect::Predict {
                request_seq,
                upload,
            } => {
                log::info!("submitting {} for prediction", upload.name);
                let result = self.prediction_api.predict(&upload);
                if let Err(err) = &result {
                    match err {
                        PredictError::Server { status, .. } => {
                            log::warn!("prediction endpoint returned status {status}: {err}");
                        }
                        other => log::warn!("prediction failed: {other:?}"),
                    }
                }
                self.send(Event::PredictDone {
                    request_seq,
                    result,
                });
            }
        }
    }

    fn send(&self, event: Event) {
        // The receiver is gone once the window closes; nothing left to do.
        if self.event_sender.send(event).is_ok() {
            self.ui_ctx.request_repaint();
        }
    }
}
