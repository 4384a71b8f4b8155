use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::{
    cmp::Ordering,
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct RuntimeConfig {
    port: u16,
    static_dir: String,
    log_level: LogLevel,
}

impl RuntimeConfig {
    fn from_env() -> Self {
        Self {
            port: parse_env_port("PORT", DEFAULT_PORT),
            static_dir: parse_env_non_empty_string("SITE_STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            log_level: parse_log_level("SITE_LOG_LEVEL", DEFAULT_LOG_LEVEL),
        }
    }
}

#[derive(Clone, Serialize)]
struct HealthPayload {
    ok: bool,
    uptime_seconds: u64,
}

#[derive(Clone)]
struct AppState {
    config: RuntimeConfig,
    started_at: u64,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = RuntimeConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let port = config.port;

    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "port": port,
            "static_dir": config.static_dir.as_str(),
        }),
    );

    // Unknown paths fall back to the SPA shell so client-side anchors like
    // /redstone-blog resolve after a hard refresh.
    let index_path = format!("{}/index.html", config.static_dir);
    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_path));

    let state = AppState {
        config,
        started_at: now_unix_seconds(),
    };

    let app = Router::new()
        .route("/api/health", get(get_health))
        .fallback_service(static_service)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("server listening on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_health(State(state): State<AppState>) -> Json<HealthPayload> {
    log_event(
        &state.config,
        LogLevel::Debug,
        "health_check",
        serde_json::json!({}),
    );

    Json(HealthPayload {
        ok: true,
        uptime_seconds: now_unix_seconds().saturating_sub(state.started_at),
    })
}

fn parse_env_port(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn log_event(config: &RuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels_rank_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info, LogLevel::Info.max(LogLevel::Debug));
    }

    #[test]
    fn parse_log_level_accepts_known_names_case_insensitively() {
        std::env::set_var("TEST_SITE_LOG_LEVEL_KNOWN", "DeBuG");
        assert_eq!(
            parse_log_level("TEST_SITE_LOG_LEVEL_KNOWN", LogLevel::Info),
            LogLevel::Debug
        );
        std::env::remove_var("TEST_SITE_LOG_LEVEL_KNOWN");
    }

    #[test]
    fn parse_log_level_falls_back_on_unknown_names() {
        std::env::set_var("TEST_SITE_LOG_LEVEL_UNKNOWN", "verbose");
        assert_eq!(
            parse_log_level("TEST_SITE_LOG_LEVEL_UNKNOWN", LogLevel::Info),
            LogLevel::Info
        );
        std::env::remove_var("TEST_SITE_LOG_LEVEL_UNKNOWN");
    }

    #[test]
    fn parse_env_port_rejects_garbage_and_zero() {
        std::env::set_var("TEST_SITE_PORT_GARBAGE", "not-a-port");
        assert_eq!(parse_env_port("TEST_SITE_PORT_GARBAGE", 8080), 8080);
        std::env::remove_var("TEST_SITE_PORT_GARBAGE");

        std::env::set_var("TEST_SITE_PORT_ZERO", "0");
        assert_eq!(parse_env_port("TEST_SITE_PORT_ZERO", 8080), 8080);
        std::env::remove_var("TEST_SITE_PORT_ZERO");

        std::env::set_var("TEST_SITE_PORT_OK", " 3000 ");
        assert_eq!(parse_env_port("TEST_SITE_PORT_OK", 8080), 3000);
        std::env::remove_var("TEST_SITE_PORT_OK");
    }

    #[test]
    fn health_payload_serializes_expected_shape() {
        let payload = HealthPayload {
            ok: true,
            uptime_seconds: 12,
        };
        let json = serde_json::to_value(&payload).expect("serializable");
        assert_eq!(json, serde_json::json!({"ok": true, "uptime_seconds": 12}));
    }
}
