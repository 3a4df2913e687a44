use axum::http::StatusCode;
use axum_test::TestServer;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt;
use user_api::{create_router, AppState, UserStore};

/// 收集日志输出的写入器
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_request_logging_records_start_and_completion() {
    let logs = LogBuffer::default();
    let writer = logs.clone();

    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(move || writer.clone()),
        )
        .with(tracing_subscriber::filter::EnvFilter::new("info"));
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = create_router(AppState::new(UserStore::seeded()), "./static");
    let server = TestServer::new(app).unwrap();

    let response = server.get("/user").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "User ID is required\n");

    let response = server.get("/user").add_query_param("id", 3).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["name"], "Bob Johnson");

    let output = logs.contents();
    assert!(output.contains("Started GET /user"), "{}", output);
    assert!(output.contains("Completed GET /user - 400"), "{}", output);
    assert!(output.contains("Completed GET /user - 200"), "{}", output);

    let started = output.matches("Started GET /user").count();
    let completed = output.matches("Completed GET /user").count();
    assert_eq!(started, 2);
    assert_eq!(completed, 2);
}
