use crate::config::Config;
use crate::error::PredictError;
use crate::image_upload::SelectedImage;
use crate::prediction_api::interface::{PredictionApi, PredictionRecord};
use reqwest::blocking::multipart::{Form, Part};

const PREDICT_PATH: &str = "/predict/";

pub struct PredictionApiHttp {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl PredictionApiHttp {
    pub fn new(config: &Config) -> Result<Self, PredictError> {
        // The service can take a long time on large images; no client-side
        // deadline, the request settles when the network layer does.
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|err| PredictError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.api_base_url, PREDICT_PATH),
        })
    }
}

impl PredictionApi for PredictionApiHttp {
    fn predict(&self, upload: &SelectedImage) -> Result<Vec<PredictionRecord>, PredictError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.name.clone())
            .mime_str(&upload.mime)
            .map_err(|err| PredictError::Transport(err.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|err| PredictError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| PredictError::Transport(err.to_string()))?;

        if !status.is_success() {
            let value: serde_json::Value = serde_json::from_str(&body)
                .map_err(|err| PredictError::Transport(err.to_string()))?;
            let detail = value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string);
            return Err(PredictError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        parse_records(&body)
    }
}

fn parse_records(body: &str) -> Result<Vec<PredictionRecord>, PredictError> {
    match serde_json::from_str::<Vec<PredictionRecord>>(body) {
        Ok(records) => {
            if records
                .iter()
                .any(|record| record.confidence.is_some_and(|c| !c.is_finite()))
            {
                return Err(PredictError::InvalidValues);
            }
            Ok(records)
        }
        // Python's json.dumps writes bare NaN/Infinity tokens, which are not
        // valid JSON. A 2xx body that only fails to parse because of them is
        // the invalid-values case, not a malformed response.
        Err(_) if has_non_finite_token(body) => Err(PredictError::InvalidValues),
        Err(err) => Err(PredictError::Transport(err.to_string())),
    }
}

fn has_non_finite_token(body: &str) -> bool {
    let bytes = body.as_bytes();
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'N' if bytes[i..].starts_with(b"NaN") => return true,
            b'I' if bytes[i..].starts_with(b"Infinity") => return true,
            _ => {}
        }
        i += 1;
    }
    false
}
