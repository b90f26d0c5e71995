use latency_common::LatencyError;
use latency_probe::{HttpProbe, LatencySource};
use std::time::Duration;

#[test]
fn test_new_rejects_malformed_url() {
    let err = HttpProbe::new("not a url", None).err().expect("should fail");
    assert!(matches!(err, LatencyError::InvalidUrl(msg) if msg.starts_with("not a url")));
}

#[test]
fn test_new_rejects_non_http_scheme() {
    let err = HttpProbe::new("ftp://example.com/file", None).err().expect("should fail");
    assert!(matches!(err, LatencyError::InvalidUrl(msg) if msg.contains("ftp")));
}

#[test]
fn test_new_accepts_http_and_https() {
    let probe = HttpProbe::new("http://127.0.0.1:8080/health", None).unwrap();
    assert_eq!(probe.url(), "http://127.0.0.1:8080/health");
    assert!(HttpProbe::new("https://example.com", Some(Duration::from_secs(2))).is_ok());
}

#[tokio::test]
async fn test_get_records_status_on_200() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/").with_status(200).with_body("ok").create_async().await;

    let mut probe = HttpProbe::new(&server.url(), None).unwrap();
    let m = probe.measure().await;

    assert_eq!(m.outcome, Ok(200));
    assert!(m.elapsed > Duration::ZERO);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_server_error_is_still_a_round_trip() {
    let mut server = mockito::Server::new_async().await;
    server.mock("GET", "/slow").with_status(503).create_async().await;

    let probe = HttpProbe::new(&format!("{}/slow", server.url()), None).unwrap();
    let m = probe.get().await;

    assert_eq!(m.outcome, Ok(503));
    assert!(!m.is_error());
}

#[tokio::test]
async fn test_get_each_call_sends_a_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/").with_status(204).expect(3).create_async().await;

    let mut probe = HttpProbe::new(&server.url(), None).unwrap();
    for _ in 0..3 {
        assert_eq!(probe.measure().await.outcome, Ok(204));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_keeps_elapsed_time() {
    // Reserve a port and release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let probe = HttpProbe::new(&format!("http://127.0.0.1:{port}/"), None).unwrap();
    let m = probe.get().await;

    assert!(matches!(m.outcome, Err(LatencyError::NetworkError(_))), "got {:?}", m.outcome);
    assert!(m.elapsed < Duration::from_secs(30));
}
