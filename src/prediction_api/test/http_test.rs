use crate::config::Config;
use crate::error::PredictError;
use crate::prediction_api::impl_http::PredictionApiHttp;
use crate::prediction_api::interface::{PredictionApi, PredictionRecord};
use crate::prediction_api::test::fixture;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn predict_against(server: &MockServer) -> Result<Vec<PredictionRecord>, PredictError> {
    predict_at(&server.uri()).await
}

// The client is blocking by design (effects run on plain worker threads),
// so build and drive it off the test runtime.
async fn predict_at(base_url: &str) -> Result<Vec<PredictionRecord>, PredictError> {
    let base_url = base_url.to_string();
    tokio::task::spawn_blocking(move || {
        let config = Config {
            api_base_url: base_url,
        };
        let api = PredictionApiHttp::new(&config).unwrap();
        api.predict(&fixture::sample_upload())
    })
    .await
    .unwrap()
}

fn taxonomy_body() -> String {
    serde_json::to_string(&vec![
        PredictionRecord {
            label: "Genus".to_string(),
            prediction: "Gadus".to_string(),
            confidence: Some(0.97),
        },
        PredictionRecord {
            label: "Scientific Name".to_string(),
            prediction: "Gadus morhua".to_string(),
            confidence: Some(0.91),
        },
        PredictionRecord {
            label: "Family".to_string(),
            prediction: "Gadidae".to_string(),
            confidence: Some(0.88),
        },
        PredictionRecord {
            label: "Specific Epithet".to_string(),
            prediction: "morhua".to_string(),
            confidence: None,
        },
    ])
    .unwrap()
}

#[tokio::test]
async fn posts_multipart_and_returns_records_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("otolith1.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(taxonomy_body(), "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let records = predict_against(&server).await.unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].label, "Genus");
    assert_eq!(records[0].prediction, "Gadus");
    assert_eq!(records[0].confidence, Some(0.97));
    assert_eq!(records[3].confidence, None);
}

#[tokio::test]
async fn server_error_detail_becomes_the_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_raw(r#"{"detail":"model not loaded"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = predict_against(&server).await.unwrap_err();

    assert_eq!(
        err,
        PredictError::Server {
            status: 500,
            detail: Some("model not loaded".to_string()),
        }
    );
    assert_eq!(err.to_string(), "Prediction failed: model not loaded");
}

#[tokio::test]
async fn server_error_without_detail_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/"))
        .respond_with(ResponseTemplate::new(502).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let err = predict_against(&server).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Prediction failed: An unexpected error occurred on the server."
    );
}

#[tokio::test]
async fn non_json_error_body_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("Internal Server Error", "text/plain"))
        .mount(&server)
        .await;

    let err = predict_against(&server).await.unwrap_err();

    assert!(matches!(err, PredictError::Transport(_)));
    assert_eq!(
        err.to_string(),
        "Prediction failed. Please check the API server and try again."
    );
}

#[tokio::test]
async fn nan_in_a_successful_body_is_an_invalid_values_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"label":"Genus","prediction":"Gadus","confidence":NaN}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let err = predict_against(&server).await.unwrap_err();

    assert_eq!(err, PredictError::InvalidValues);
    assert!(err.to_string().contains("invalid values (NaN)"));
}

#[tokio::test]
async fn missing_required_field_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"prediction":"Gadus","confidence":0.9}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let err = predict_against(&server).await.unwrap_err();

    assert!(matches!(err, PredictError::Transport(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    let err = predict_at("http://127.0.0.1:1").await.unwrap_err();

    assert!(matches!(err, PredictError::Transport(_)));
    assert_eq!(
        err.to_string(),
        "Prediction failed. Please check the API server and try again."
    );
}
