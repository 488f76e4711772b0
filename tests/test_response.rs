use wicket::http::error::ProtocolError;
use wicket::http::response::ResponseState;
use wicket::http::writer::ResponseWriter;

fn started_state() -> ResponseState {
    let mut state = ResponseState::new();
    state
        .start(
            "200 OK",
            vec![("Content-Type".to_string(), "text/plain".to_string())],
        )
        .unwrap();
    state
}

#[test]
fn test_state_starts_empty() {
    let state = ResponseState::new();

    assert_eq!(state.status, "");
    assert!(state.headers.is_empty());
    assert!(!state.started());
}

#[test]
fn test_state_start_registers_status_and_headers() {
    let state = started_state();

    assert_eq!(state.status, "200 OK");
    assert_eq!(state.headers.len(), 1);
    assert!(state.started());
}

#[test]
fn test_state_rejects_second_start() {
    let mut state = started_state();
    let result = state.start("500 Internal Server Error", vec![]);

    assert!(matches!(result, Err(ProtocolError::DoubleResponseStart)));
    // First registration survives.
    assert_eq!(state.status, "200 OK");
}

#[tokio::test]
async fn test_writer_sends_headers_with_first_chunk() {
    let state = started_state();
    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);

    assert!(!writer.headers_sent());
    writer.write(&state, b"hi").await.unwrap();
    assert!(writer.headers_sent());

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhi"
    );
}

#[tokio::test]
async fn test_writer_sends_headers_only_once() {
    let state = started_state();
    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);

    writer.write(&state, b"one").await.unwrap();
    writer.write(&state, b"two").await.unwrap();
    writer.finish(&state).await.unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nonetwo"
    );
}

#[tokio::test]
async fn test_writer_finish_emits_headers_for_empty_body() {
    let state = started_state();
    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);

    writer.finish(&state).await.unwrap();

    assert!(writer.headers_sent());
    assert_eq!(out, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\n");
}

#[tokio::test]
async fn test_writer_preserves_header_order_and_duplicates() {
    let mut state = ResponseState::new();
    state
        .start(
            "200 OK",
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "3".to_string()),
            ],
        )
        .unwrap();

    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);
    writer.finish(&state).await.unwrap();

    assert_eq!(out, b"HTTP/1.1 200 OK\r\nA: 1\r\nB: 2\r\nA: 3\r\n\r\n");
}

#[tokio::test]
async fn test_writer_send_error_produces_minimal_response() {
    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);

    writer.send_error("400 Bad Request").await.unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n"
    );
}

#[tokio::test]
async fn test_writer_send_error_is_noop_after_headers_sent() {
    let state = started_state();
    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);

    writer.write(&state, b"partial").await.unwrap();
    writer
        .send_error("500 Internal Server Error")
        .await
        .unwrap();
    drop(writer);

    // Nothing after the partial body; the broken response is not patched.
    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\npartial"
    );
}
