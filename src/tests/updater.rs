use super::{config_for, refused_url};
use crate::{
    api::NamecheapClient,
    ddns::{UpdateOutcome, Updater},
    logging::capture::CapturedLines,
};
use log::LevelFilter;
use reqwest::StatusCode;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn updater_for(url: &str, sink: &CapturedLines) -> Updater<NamecheapClient> {
    let config = config_for(url);
    let logger = sink
        .logger(LevelFilter::Info)
        .with("host", config.host.clone())
        .with("domain_name", config.domain_name.clone());
    let client = NamecheapClient::new(&config).unwrap();
    Updater::new(client, logger, Duration::from_millis(50))
}

#[tokio::test]
async fn test_successful_update_logs_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let sink = CapturedLines::default();
    let outcome = updater_for(&server.uri(), &sink).update_once().await;

    assert_eq!(
        outcome,
        UpdateOutcome::Updated {
            status: StatusCode::OK
        }
    );
    let infos = sink.with_msg("successfully updated DNS entry");
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0]["status_code"], 200);
    assert_eq!(infos[0]["host"], "@");
    assert_eq!(infos[0]["domain_name"], "example.com");
    assert!(sink.with_level("error").is_empty());
}

#[tokio::test]
async fn test_rejected_update_logs_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such domain"))
        .expect(1)
        .mount(&server)
        .await;

    let sink = CapturedLines::default();
    let outcome = updater_for(&server.uri(), &sink).update_once().await;

    assert!(matches!(outcome, UpdateOutcome::Rejected { status, .. } if status == StatusCode::NOT_FOUND));

    let errors = sink.with_level("error");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "got error response from DNS server");
    assert_eq!(errors[0]["status_code"], 404);
    assert_eq!(errors[0]["status"], "404 Not Found");
    assert_eq!(errors[0]["response_body"], "no such domain");
    assert!(sink.with_msg("successfully updated DNS entry").is_empty());
}

#[tokio::test]
async fn test_connection_refused_logs_one_error() {
    let sink = CapturedLines::default();
    let outcome = updater_for(&refused_url(), &sink).update_once().await;

    assert_eq!(outcome, UpdateOutcome::Failed);
    let errors = sink.with_level("error");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "failed to send DNS update request");
    assert!(sink.with_msg("successfully updated DNS entry").is_empty());
}

#[tokio::test]
async fn test_loop_keeps_running_after_connection_refused() {
    let sink = CapturedLines::default();
    let updater = updater_for(&refused_url(), &sink);
    let shutdown = CancellationToken::new();

    tokio::join!(updater.run(shutdown.clone()), async {
        tokio::time::sleep(Duration::from_millis(400)).await;
        shutdown.cancel();
    });

    assert!(sink.with_msg("failed to send DNS update request").len() >= 2);
    assert_eq!(sink.with_msg("shutting down").len(), 1);
}
