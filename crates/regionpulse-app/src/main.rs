//! # regionpulse-app
//!
//! regionpulse 서버 바이너리 진입점.
//! 설정 로드, 텔레메트리 1회 로드, 웹 서버 라이프사이클 관리.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use regionpulse_core::config::AppConfig;
use regionpulse_storage::TelemetryStore;
use regionpulse_web::WebServer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// regionpulse 분석 서버
///
/// 리전별 지연/가용성 텔레메트리 요약 API
#[derive(Parser, Debug)]
#[command(name = "regionpulse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON 설정 파일 경로
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 텔레메트리 데이터 파일 경로 (기본: q-vercel-latency.json)
    ///
    /// 상대 경로는 작업 디렉터리에서 먼저 찾고, 없으면 실행 파일 디렉터리에서 찾는다.
    #[arg(long, short = 'd')]
    data: Option<PathBuf>,

    /// 웹 서버 포트 (기본: 8000)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// 외부 접근 허용 (0.0.0.0 바인드)
    #[arg(long)]
    allow_external: bool,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

/// 설정 결정: 기본값 < 설정 파일 < CLI 인자
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default_config(),
    };

    if let Some(ref data) = args.data {
        config.data.telemetry_path = data.clone();
    }
    if let Some(port) = args.port {
        config.web.port = port;
    }
    if args.allow_external {
        config.web.allow_external = true;
    }

    config
        .validate()
        .map_err(|e| anyhow!("설정 검증 실패: {}", e))?;
    Ok(config)
}

/// 데이터 파일 위치 결정
///
/// 절대 경로이거나 작업 디렉터리 기준으로 존재하면 그대로 사용한다.
/// 그렇지 않으면 실행 파일 디렉터리 기준 경로가 존재할 때 그쪽을 사용한다.
/// 둘 다 없으면 원래 경로를 돌려주어 로드 에러에 사용자가 준 경로가 남게 한다.
fn locate_data_file(path: &Path, exe_dir: Option<&Path>) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    match exe_dir.map(|dir| dir.join(path)) {
        Some(candidate) if candidate.exists() => candidate,
        _ => path.to_path_buf(),
    }
}

/// 로그 필터 문자열 (`RUST_LOG`가 없을 때 사용)
fn log_filter(level: &str) -> String {
    format!(
        "regionpulse={level},regionpulse_app={level},regionpulse_core={level},regionpulse_storage={level},regionpulse_web={level},tower_http={level}"
    )
}

/// Ctrl-C / SIGTERM 대기
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Ctrl-C 핸들러 설치 실패: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("SIGTERM 핸들러 설치 실패: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter(&args.log_level))),
        )
        .init();

    info!("regionpulse 시작");

    let config = resolve_config(&args).inspect_err(|e| error!("설정 로드 실패: {:#}", e))?;

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let data_path = locate_data_file(&config.data.telemetry_path, exe_dir.as_deref());

    // 데이터 로드 실패 시 소켓을 열기 전에 종료
    let store = TelemetryStore::load(&data_path)
        .with_context(|| format!("텔레메트리 로드 실패: {}", data_path.display()))
        .inspect_err(|e| error!("{:#}", e))?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("종료 신호 수신");
        let _ = shutdown_tx.send(true);
    });

    WebServer::new(Arc::new(store), config.web)
        .run(shutdown_rx)
        .await
        .context("웹 서버 실행 실패")?;

    info!("regionpulse 종료");
    Ok(())
}
