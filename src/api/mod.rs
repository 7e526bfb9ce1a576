pub mod handlers;
pub mod upload;

pub use handlers::*;
pub use upload::UploadGate;

use crate::service::ReconcileService;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

/// multipart 边界和其他表单字段的余量
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub reconciler: Arc<ReconcileService>,
    pub upload: UploadGate,
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    let body_limit = state.upload.max_bytes() + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health_check))
        .route("/api/orders/paid-not-printed", get(list_paid_not_printed))
        .route("/api/orders/paid-not-printed/export", get(export_paid_not_printed))
        .route("/api/orders/:order_id/verify-invoice", post(verify_invoice))
        .layer(ServiceBuilder::new().layer(DefaultBodyLimit::max(body_limit)))
        .with_state(state)
}
