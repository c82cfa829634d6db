use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use crate::config::{ServerConfig, DEFAULT_DIAG_PORT, MAX_LARGETEXT_KBYTES};
use crate::environment::EnvSnapshot;
use crate::instance::VCAP_APPLICATION_VAR;
use crate::runner::{CommandOutput, CommandRunner};
use crate::state::AppState;

use super::create_router;

/// Records every command it is asked to run and answers with a fixed stdout.
#[derive(Default)]
struct RecordingRunner {
    commands: Mutex<Vec<String>>,
    stdout: String,
}

impl RecordingRunner {
    fn returning(stdout: &str) -> Arc<Self> {
        Arc::new(Self {
            commands: Mutex::new(Vec::new()),
            stdout: stdout.to_string(),
        })
    }

    fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &str) -> std::io::Result<CommandOutput> {
        self.commands.lock().unwrap().push(command.to_string());
        Ok(CommandOutput {
            stdout: self.stdout.clone(),
            stderr: String::new(),
            status: Some(0),
        })
    }
}

/// Always fails to spawn, like a container missing its shell.
struct FailingRunner;

#[async_trait]
impl CommandRunner for FailingRunner {
    async fn run(&self, _command: &str) -> std::io::Result<CommandOutput> {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "sh not found",
        ))
    }
}

fn make_router_with(runner: Arc<dyn CommandRunner>, env: EnvSnapshot) -> Router {
    let config = ServerConfig::from_snapshot(&env, DEFAULT_DIAG_PORT).unwrap();
    create_router(AppState::new(config, env, runner))
}

fn make_router() -> Router {
    make_router_with(RecordingRunner::returning(""), EnvSnapshot::default())
}

async fn get(router: Router, path: &str) -> Response {
    router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn home_reports_the_platform_instance_id() {
    let env = EnvSnapshot::from_pairs([(VCAP_APPLICATION_VAR, r#"{"instance_id":"fixture-7"}"#)]);
    let router = make_router_with(RecordingRunner::returning(""), env);

    let response = get(router, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("fixture-7"));
}

#[tokio::test]
async fn health_fails_exactly_three_times_then_recovers() {
    let router = make_router();

    for hit in 1..=3 {
        let response = get(router.clone(), "/health").await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "hit {hit} should fail"
        );
        assert!(body_string(response).await.contains(&format!("hit {hit} of 3")));
    }

    for _ in 0..2 {
        let response = get(router.clone(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }
}

#[tokio::test]
async fn delay_zero_confirms_immediately() {
    let response = get(make_router(), "/delay/0").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Slept for 0 seconds\n");
}

#[tokio::test]
async fn delay_rejects_a_non_numeric_segment_with_axums_400() {
    let response = get(make_router(), "/delay/soon").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn largetext_returns_exactly_the_requested_kbytes() {
    let response = get(make_router(), "/largetext/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await.len(), 2 * 1024);
}

#[tokio::test]
async fn largetext_caps_at_five_megabytes() {
    let response = get(make_router(), "/largetext/999999").await;
    let expected = (MAX_LARGETEXT_KBYTES * 1024) as usize;
    assert_eq!(body_string(response).await.len(), expected);
}

#[tokio::test]
async fn logspew_confirms_the_line_count() {
    let response = get(make_router(), "/logspew/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Just wrote 2 kbytes to the log\n");
}

#[tokio::test]
async fn env_single_returns_the_value() {
    let env = EnvSnapshot::from_pairs([("GREETING", "hello")]);
    let router = make_router_with(RecordingRunner::returning(""), env);

    let response = get(router, "/env/GREETING").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "hello");
}

#[tokio::test]
async fn env_single_answers_unset_with_an_empty_200() {
    let response = get(make_router(), "/env/DEFINITELY_NOT_SET").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "");
}

#[tokio::test]
async fn env_text_lists_name_value_pairs() {
    let env = EnvSnapshot::from_pairs([("A", "1"), ("B", "2")]);
    let router = make_router_with(RecordingRunner::returning(""), env);

    let body = body_string(get(router, "/env").await).await;

    assert!(body.contains("A=1\n"));
    assert!(body.contains("B=2\n"));
}

#[tokio::test]
async fn env_json_is_an_object_of_the_snapshot() {
    let env = EnvSnapshot::from_pairs([("PORT", "8080")]);
    let router = make_router_with(RecordingRunner::returning(""), env);

    let response = get(router, "/env.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["PORT"], "8080");
}

#[tokio::test]
async fn uptime_is_monotonically_non_decreasing() {
    let router = make_router();

    let first: u64 = body_string(get(router.clone(), "/uptime").await)
        .await
        .parse()
        .unwrap();
    let second: u64 = body_string(get(router, "/uptime").await)
        .await
        .parse()
        .unwrap();

    assert!(second >= first);
}

#[tokio::test]
async fn sigterm_lists_deliverable_signals() {
    let body = body_string(get(make_router(), "/sigterm").await).await;
    assert!(body.contains("SIGTERM"));
    assert!(body.contains("SIGKILL"));
}

#[tokio::test]
async fn sigterm_delivers_a_harmless_signal_to_this_process() {
    // SIGWINCH is ignored by default, so the test process survives delivery.
    let response = get(make_router(), "/sigterm/SIGWINCH").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("SIGWINCH"));
}

#[tokio::test]
async fn sigterm_with_an_unknown_name_is_a_500() {
    let response = get(make_router(), "/sigterm/NOTASIGNAL").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response).await.contains("unknown signal"));
}

#[tokio::test]
async fn ping_interpolates_the_address_verbatim() {
    let runner = RecordingRunner::returning("4 packets transmitted\n");
    let router = make_router_with(runner.clone(), EnvSnapshot::default());

    let response = get(router, "/ping/192.0.2.7").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "4 packets transmitted\n");
    assert_eq!(runner.commands(), vec!["ping -c 4 192.0.2.7".to_string()]);
}

#[tokio::test]
async fn shell_routes_build_the_expected_commands() {
    let runner = RecordingRunner::returning("");
    let router = make_router_with(runner.clone(), EnvSnapshot::default());

    get(router.clone(), "/lsb_release").await;
    get(router.clone(), "/find/passwd").await;
    get(router.clone(), "/dpkg/curl").await;
    get(router, "/myip").await;

    assert_eq!(
        runner.commands(),
        vec![
            "lsb_release --all".to_string(),
            "find / -name passwd".to_string(),
            "dpkg -l curl".to_string(),
            r"ip route get 1 | awk '{print $NF;exit}'".to_string(),
        ]
    );
}

#[tokio::test]
async fn echo_selects_the_redirect_for_the_destination() {
    let runner = RecordingRunner::returning("");
    let router = make_router_with(runner.clone(), EnvSnapshot::default());

    let response = get(router.clone(), "/echo/stderr/hello").await;
    assert_eq!(body_string(response).await, "Echoed 'hello' to stderr\n");

    get(router.clone(), "/echo/stdout/hi").await;
    get(router.clone(), "/echo/null/quiet").await;
    get(router, "/echo/out.log/saved").await;

    assert_eq!(
        runner.commands(),
        vec![
            "echo 'hello' 1>&2".to_string(),
            "echo 'hi'".to_string(),
            "echo 'quiet' > /dev/null".to_string(),
            "echo 'saved' > out.log".to_string(),
        ]
    );
}

#[tokio::test]
async fn a_runner_spawn_failure_surfaces_as_a_500() {
    let router = make_router_with(Arc::new(FailingRunner), EnvSnapshot::default());

    let response = get(router, "/ping/localhost").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response).await.contains("command failed to start"));
}

#[tokio::test]
async fn undeclared_routes_get_axums_404() {
    let response = get(make_router(), "/definitely/not/declared").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
