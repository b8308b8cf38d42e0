//! # regionpulse-web
//!
//! 리전별 지연 분석 HTTP API 서버.
//! Axum 기반 REST API.
//!
//! ## 엔드포인트
//! - `GET /`: 동작 확인
//! - `POST /analytics`: 리전별 요약 통계

pub mod error;
pub mod handlers;
pub mod routes;

use axum::http::Method;
use axum::Router;
use regionpulse_core::config::WebConfig;
use regionpulse_storage::TelemetryStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// 포트 바인드 최대 시도 횟수
const MAX_PORT_ATTEMPTS: u16 = 10;

/// 웹 서버 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    /// 읽기 전용 텔레메트리 저장소
    pub store: Arc<TelemetryStore>,
}

impl AppState {
    /// 새 상태 생성
    pub fn new(store: Arc<TelemetryStore>) -> Self {
        Self { store }
    }
}

/// CORS 정책: 모든 origin의 POST 허용, 모든 헤더 허용, 자격증명 불허
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers(Any)
        .allow_credentials(false)
}

/// 전체 애플리케이션 라우터 구성
pub fn app(state: AppState) -> Router {
    routes::api_routes()
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP API 서버
pub struct WebServer {
    config: WebConfig,
    state: AppState,
}

impl WebServer {
    /// 새 웹 서버 생성
    pub fn new(store: Arc<TelemetryStore>, config: WebConfig) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    /// 서버 실행
    ///
    /// [`bind`](Self::bind)로 리스너를 얻은 뒤 종료 신호까지 요청을 처리합니다.
    ///
    /// # Arguments
    /// * `shutdown_rx` - 종료 신호 수신 채널
    ///
    /// # Returns
    /// 성공 시 `Ok(())`, 모든 포트 바인드 실패 시 `Err`
    pub async fn run(self, shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_rx).await
    }

    /// 리스너 바인드
    ///
    /// 기본 포트에서 시작하여, 포트가 이미 사용 중이면 다음 포트를 시도합니다.
    /// 최대 10개 포트를 시도한 후 실패하면 에러를 반환합니다.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        let host = if self.config.allow_external {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let base_port = self.config.port;
        let mut last_error = None;

        for attempt in 0..MAX_PORT_ATTEMPTS {
            // u16::MAX를 넘으면 더 시도할 포트가 없음
            let Some(port) = base_port.checked_add(attempt) else {
                break;
            };

            let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
                Ok(a) => a,
                Err(e) => {
                    error!("잘못된 주소 {}:{}: {}", host, port, e);
                    continue;
                }
            };

            match TcpListener::bind(addr).await {
                Ok(listener) => {
                    if attempt > 0 {
                        warn!("포트 {} 사용 불가, 대체 포트 {} 사용", base_port, port);
                    }
                    return Ok(listener);
                }
                Err(e) => {
                    if e.kind() == std::io::ErrorKind::AddrInUse {
                        warn!("포트 {} 이미 사용 중, 다음 포트 시도...", port);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!(
                    "포트 {}-{} 모두 사용 불가",
                    base_port,
                    base_port.saturating_add(MAX_PORT_ATTEMPTS - 1)
                ),
            )
        }))
    }

    /// 바인드된 리스너에서 종료 신호까지 요청 처리
    pub async fn serve(
        self,
        listener: TcpListener,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> Result<(), std::io::Error> {
        let local = listener.local_addr()?;
        info!("분석 API 서버 시작: http://{}", local);

        axum::serve(listener, app(self.state))
            .with_graceful_shutdown(async move {
                loop {
                    if *shutdown_rx.borrow() {
                        info!("API 서버 종료 신호 수신");
                        break;
                    }
                    if shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
            })
            .await?;

        info!("분석 API 서버 종료");
        Ok(())
    }
}
