//! Submits forms and fetches the gallery against a local one-shot HTTP server.

use mickeys_commerce::forms::{ContactMessage, ContactSubject};
use mickeys_data::{FetchClient, FetchError, FormSubmitter, GalleryClient, ScriptEndpoint, SubmitError, Submission};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve a single response, returning the request line that was received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/javascript\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base, handle)
}

fn contact() -> ContactMessage {
    ContactMessage {
        first_name: "Jo".to_string(),
        last_name: "Lee".to_string(),
        email: "jo@example.com".to_string(),
        phone: Some("902-555-0100".to_string()),
        subject: ContactSubject::Reservation,
        message: "Table for six on Friday?".to_string(),
    }
}

#[tokio::test]
async fn test_accepted_submission() {
    let (base, server) = serve_once("200 OK", r#"handleResponse({"success":true})"#).await;
    let endpoint = ScriptEndpoint::new(FetchClient::new().unwrap(), &format!("{}/exec", base)).unwrap();

    let outcome = endpoint.submit(&contact()).await.unwrap();
    assert_eq!(outcome, Submission::Accepted);

    let request_line = server.await.unwrap();
    assert!(request_line.starts_with("GET /exec?action=contact&firstName=Jo"));
    assert!(request_line.contains("subject=reservation"));
    assert!(request_line.contains("callback=handleResponse"));
}

#[tokio::test]
async fn test_rejected_submission() {
    let (base, server) = serve_once("200 OK", r#"handleResponse({"success":false})"#).await;
    let endpoint = ScriptEndpoint::new(FetchClient::new().unwrap(), &format!("{}/exec", base)).unwrap();

    let err = endpoint.submit(&contact()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Rejected));
    server.await.unwrap();
}

#[tokio::test]
async fn test_http_error_is_reported() {
    let (base, server) = serve_once("500 Internal Server Error", "boom").await;
    let endpoint = ScriptEndpoint::new(FetchClient::new().unwrap(), &format!("{}/exec", base)).unwrap();

    let err = endpoint.submit(&contact()).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Fetch(FetchError::HttpError { status: 500, .. })
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn test_gallery_fetch() {
    let (base, server) = serve_once(
        "200 OK",
        r#"[{"url":"/g/1.webp","title":"Patio","category":"Ambiance","description":"Summer nights"},
            {"url":"/g/2.webp","title":"Platter","category":"Food"}]"#,
    )
    .await;
    let client = GalleryClient::new(FetchClient::new().unwrap(), format!("{}/api/gallery", base));

    let gallery = client.fetch().await.unwrap();
    assert_eq!(gallery.images().len(), 2);
    assert_eq!(gallery.categories(), vec!["Ambiance", "Food"]);
    assert_eq!(server.await.unwrap(), "GET /api/gallery HTTP/1.1");
}
