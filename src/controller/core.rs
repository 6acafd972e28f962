use crate::error::PredictError;
use crate::image_upload::{Preview, SelectedImage};
use crate::prediction_api::interface::PredictionRecord;
use std::path::PathBuf;

/// Single source of truth for the results pane. `Loading` holds if and only
/// if a prediction request is outstanding.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Vec<PredictionRecord>),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct Model {
    /// Generation counter for file selections; a load completion only
    /// commits when it carries the latest value.
    pub file_seq: u64,
    /// Generation counter for prediction requests; bumped on issue and on
    /// any new selection, so superseded responses are dropped rather than
    /// racing last-settled-wins.
    pub request_seq: u64,
    pub selected: Option<SelectedImage>,
    pub preview: Option<Preview>,
    pub request_state: RequestState,
}

#[derive(Debug)]
pub enum Event {
    FilePicked(Option<PathBuf>),
    ImageLoadDone {
        file_seq: u64,
        result: Result<(SelectedImage, Preview), PredictError>,
    },
    PredictRequested,
    PredictDone {
        request_seq: u64,
        result: Result<Vec<PredictionRecord>, PredictError>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadImage { file_seq: u64, path: PathBuf },
    Predict { request_seq: u64, upload: SelectedImage },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::FilePicked(None) => (model, vec![]),

        Event::FilePicked(Some(path)) => {
            let mut model = model;
            model.file_seq += 1;
            let file_seq = model.file_seq;
            (model, vec![Effect::LoadImage { file_seq, path }])
        }

        Event::ImageLoadDone { file_seq, result } if file_seq == model.file_seq => {
            let mut model = model;
            // A new selection invalidates whatever request is in flight.
            model.request_seq += 1;
            match result {
                Ok((selected, preview)) => {
                    model.selected = Some(selected);
                    model.preview = Some(preview);
                    model.request_state = RequestState::Idle;
                }
                Err(err) => {
                    model.selected = None;
                    model.preview = None;
                    model.request_state = RequestState::Failed(err.to_string());
                }
            }
            (model, vec![])
        }

        Event::PredictRequested => {
            if model.request_state == RequestState::Loading {
                return (model, vec![]);
            }
            match model.selected.clone() {
                None => {
                    let mut model = model;
                    model.request_state =
                        RequestState::Failed(PredictError::NoFileSelected.to_string());
                    (model, vec![])
                }
                Some(upload) => {
                    let mut model = model;
                    model.request_seq += 1;
                    model.request_state = RequestState::Loading;
                    let request_seq = model.request_seq;
                    (model, vec![Effect::Predict { request_seq, upload }])
                }
            }
        }

        Event::PredictDone {
            request_seq,
            result,
        } if request_seq == model.request_seq => {
            let mut model = model;
            model.request_state = match result {
                Ok(records) => RequestState::Success(records),
                Err(err) => RequestState::Failed(err.to_string()),
            };
            (model, vec![])
        }

        // Completions from a superseded selection or request.
        Event::ImageLoadDone { .. } | Event::PredictDone { .. } => (model, vec![]),
    }
}
