//! HTTP front end
//!
//! Thin axum layer that routes `GET /{z}/{x}/{y}` (and the same under
//! `/tiles`) to [`TileCacheProxy::handle`] and turns the resulting
//! [`TileResponse`] into an HTTP response. Each request runs on its own tokio
//! task; nothing here holds state besides the shared proxy.

use std::io;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::proxy::{TileCacheProxy, TileResponse};

/// Build the router serving tiles from `proxy`.
pub fn router(proxy: Arc<TileCacheProxy>) -> Router {
    Router::new()
        .route("/:z/:x/:y", get(tile))
        .route("/tiles/:z/:x/:y", get(tile))
        .with_state(proxy)
}

/// Serve tiles on `listener` until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns an I/O error if the listener fails.
pub async fn serve(
    listener: TcpListener,
    proxy: Arc<TileCacheProxy>,
    shutdown: CancellationToken,
) -> io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "Tile proxy listening");

    axum::serve(listener, router(proxy))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Tile proxy stopped");
    Ok(())
}

async fn tile(
    State(proxy): State<Arc<TileCacheProxy>>,
    Path((z, x, y)): Path<(String, String, String)>,
) -> TileResponse {
    proxy.handle(&z, &x, &y).await
}

impl IntoResponse for TileResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or_else(|_| {
            warn!(status = self.status, "Invalid status code, sending 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        let mut response = (status, self.body).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.content_type),
        );
        if let Some(cache_control) = self.cache_control {
            match HeaderValue::from_str(&cache_control) {
                Ok(value) => {
                    headers.insert(header::CACHE_CONTROL, value);
                }
                Err(e) => warn!(error = %e, "Invalid Cache-Control value"),
            }
        }
        response
    }
}
