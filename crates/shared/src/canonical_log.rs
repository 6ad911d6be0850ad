//! # Canonical Log Line ミドルウェア
//!
//! リクエストごとに、メソッド・パス・ステータス・レイテンシを 1 行にまとめた
//! サマリログ（`log.type = "canonical"`）を出力する tower Layer。
//!
//! TraceLayer の内側に配置するため、ログには `request` スパンのフィールド
//! （request_id など）が付与される。
//!
//! | 結果 | レベル |
//! |------|--------|
//! | 1xx〜4xx | INFO |
//! | 5xx | WARN |
//! | 内側の Service がエラー | ERROR |
//!
//! `/health` 配下は定期的なヘルスチェックのノイズになるため出力しない。

use std::{
    fmt::Display,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Method, Request, Response};
use tower::{Layer, Service};

fn is_health_check_path(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// Canonical Log Line を出力する Layer
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

/// 1 リクエスト分の記録対象
struct RequestSummary {
    method: Method,
    path:   String,
    start:  Instant,
}

impl RequestSummary {
    fn emit<B, E: Display>(&self, result: &Result<Response<B>, E>) {
        let latency_ms = u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(response) if response.status().is_server_error() => tracing::warn!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.status_code = response.status().as_u16(),
                http.latency_ms = latency_ms,
                "リクエスト完了"
            ),
            Ok(response) => tracing::info!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.status_code = response.status().as_u16(),
                http.latency_ms = latency_ms,
                "リクエスト完了"
            ),
            Err(err) => tracing::error!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.latency_ms = latency_ms,
                error.message = %err,
                "リクエスト処理エラー"
            ),
        }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // ready になった inner を取り出し、代わりに clone を残す
        let ready = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, ready);

        if is_health_check_path(req.uri().path()) {
            return Box::pin(inner.call(req));
        }

        let summary = RequestSummary {
            method: req.method().clone(),
            path:   req.uri().path().to_owned(),
            start:  Instant::now(),
        };

        Box::pin(async move {
            let result = inner.call(req).await;
            summary.emit(&result);
            result
        })
    }
}
