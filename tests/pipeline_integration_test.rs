use httpmock::prelude::*;
use soonami::app::display::{AlertLabels, DisplayTimezone, OutputFormat};
use soonami::core::transport::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use soonami::core::Pipeline;
use soonami::domain::model::DecodeMode;
use soonami::{DisplayFormatter, EarthquakePipeline, FetchTask, HttpTransport, TerminalView};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const QUERY_PATH: &str = "/fdsnws/event/1/query";

fn usgs_like_body() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "metadata": {"status": 200, "count": 2},
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "mag": 7.1,
                    "place": "Test Region",
                    "time": 1387221600000i64,
                    "tsunami": 1,
                    "title": "M 7.1 - Test"
                },
                "geometry": {"type": "Point", "coordinates": [-70.0, -20.0, 25.0]},
                "id": "test0001"
            },
            {
                "type": "Feature",
                "properties": {"time": 1, "tsunami": 0, "title": "second"}
            }
        ]
    })
}

fn default_transport() -> HttpTransport {
    HttpTransport::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT).unwrap()
}

fn pipeline_for(server: &MockServer, path_and_query: &str) -> EarthquakePipeline<HttpTransport> {
    EarthquakePipeline::new(default_transport(), server.url(path_and_query))
}

#[tokio::test]
async fn test_end_to_end_first_feature() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path(QUERY_PATH)
            .query_param("format", "geojson")
            .query_param("minmagnitude", "7");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(usgs_like_body());
    });

    let pipeline = pipeline_for(&server, "/fdsnws/event/1/query?format=geojson&minmagnitude=7");
    let event = pipeline.run().await.expect("event");

    api_mock.assert();
    assert_eq!(event.title(), "M 7.1 - Test");
    assert_eq!(event.occurred_at_epoch_millis(), 1387221600000);
    assert_eq!(event.tsunami_alert(), 1);
}

#[tokio::test]
async fn test_pretty_printed_body_survives_line_joining() {
    let server = MockServer::start();
    let pretty = serde_json::to_string_pretty(&usgs_like_body()).unwrap();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(QUERY_PATH);
        then.status(200).body(pretty);
    });

    let pipeline = pipeline_for(&server, QUERY_PATH).with_decode_mode(DecodeMode::Lines);
    let body = pipeline.fetch_body().await;
    assert!(!body.contains('\n'));

    let event = pipeline.run().await.expect("event");
    api_mock.assert_hits(2);
    assert_eq!(event.title(), "M 7.1 - Test");
}

#[tokio::test]
async fn test_empty_feature_list() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(QUERY_PATH);
        then.status(200).json_body(serde_json::json!({"features": []}));
    });

    let pipeline = pipeline_for(&server, QUERY_PATH);

    assert!(pipeline.run().await.is_none());
    api_mock.assert();
}

#[tokio::test]
async fn test_not_found_is_not_parsed() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(QUERY_PATH);
        then.status(404).body("<html><body>Not Found</body></html>");
    });

    let pipeline = pipeline_for(&server, QUERY_PATH);

    assert_eq!(pipeline.fetch_body().await, "");
    assert!(pipeline.run().await.is_none());
    api_mock.assert_hits(2);
}

#[tokio::test]
async fn test_server_error_with_valid_json_is_ignored() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(QUERY_PATH);
        then.status(500).json_body(usgs_like_body());
    });

    let pipeline = pipeline_for(&server, QUERY_PATH);

    assert!(pipeline.run().await.is_none());
}

#[tokio::test]
async fn test_garbage_body_yields_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(QUERY_PATH);
        then.status(200).body("this is not json");
    });

    let pipeline = pipeline_for(&server, QUERY_PATH);

    assert!(pipeline.run().await.is_none());
}

#[tokio::test]
async fn test_read_timeout_yields_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(QUERY_PATH);
        then.status(200)
            .json_body(usgs_like_body())
            .delay(Duration::from_millis(1500));
    });

    let transport = HttpTransport::new(Duration::from_secs(5), Duration::from_millis(200)).unwrap();
    let pipeline = EarthquakePipeline::new(transport, server.url(QUERY_PATH));

    assert!(pipeline.run().await.is_none());
}

#[tokio::test]
async fn test_connection_dropped_mid_body_yields_nothing() {
    // 回應標頭宣告的長度比實際送出的多，送到一半就斷線
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await.unwrap();
        let partial = &usgs_like_body().to_string()[..40];
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n",
            partial.len() + 500
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(partial.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    let pipeline = EarthquakePipeline::new(default_transport(), format!("http://{}{}", addr, QUERY_PATH));

    assert_eq!(pipeline.fetch_body().await, "");
    server.await.unwrap();
}

#[tokio::test]
async fn test_invalid_endpoint_makes_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(usgs_like_body());
    });

    let pipeline = EarthquakePipeline::new(default_transport(), "htp//broken url");

    assert!(pipeline.run().await.is_none());
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_background_fetch_delivers_to_view() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(QUERY_PATH);
        then.status(200).json_body(usgs_like_body());
    });

    let handle = FetchTask::spawn(Arc::new(pipeline_for(&server, QUERY_PATH)));
    let formatter = DisplayFormatter::new(DisplayTimezone::Utc, AlertLabels::default());
    let mut view = TerminalView::new(Vec::new(), OutputFormat::Text);

    let shown = handle.deliver(&mut view, &formatter).await.unwrap();

    assert!(shown);
    let out = String::from_utf8(view.into_inner()).unwrap();
    assert_eq!(
        out,
        "M 7.1 - Test\nMon, 16 Dec 2013 at 19:20:00 UTC\nTsunami alert: Yes\n"
    );
}

#[tokio::test]
async fn test_background_fetch_failure_leaves_view_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(QUERY_PATH);
        then.status(503);
    });

    let handle = FetchTask::spawn(Arc::new(pipeline_for(&server, QUERY_PATH)));
    let formatter = DisplayFormatter::default();
    let mut view = TerminalView::new(Vec::new(), OutputFormat::Text);

    let shown = handle.deliver(&mut view, &formatter).await.unwrap();

    assert!(!shown);
    assert!(view.into_inner().is_empty());
}
