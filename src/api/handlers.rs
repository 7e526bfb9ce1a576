use super::AppState;
use crate::error::AppError;
use crate::models::{PaidOrdersResponse, VerifyInvoiceResponse};
use crate::service::VerifyInvoiceRequest;
use axum::{
    extract::{multipart::MultipartError, Json, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

/// 查询参数: 门店ID
#[derive(Debug, Default, Deserialize)]
pub struct StoreQuery {
    #[serde(rename = "storeId")]
    pub store_id: Option<String>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Invoice file is too large".to_string())
    } else {
        AppError::Validation(format!("Invalid upload form: {}", e))
    }
}

/// 上传发票 PDF 并与订单核对
/// 表单字段: file (PDF), employeeId (可选, 操作人)
pub async fn verify_invoice(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Query(query): Query<StoreQuery>,
    multipart: Option<Multipart>,
) -> Result<Json<VerifyInvoiceResponse>, AppError> {
    let mut req = VerifyInvoiceRequest {
        order_id,
        store_id: query.store_id,
        ..Default::default()
    };

    if let Some(mut multipart) = multipart {
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("file") => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    if bytes.is_empty() {
                        continue;
                    }
                    state
                        .upload
                        .check(file_name.as_deref(), content_type.as_deref(), bytes.len())?;
                    req.document = Some(bytes.to_vec());
                }
                Some("employeeId") => {
                    let text = field.text().await.map_err(multipart_error)?;
                    let text = text.trim();
                    if !text.is_empty() {
                        let actor = Uuid::parse_str(text).map_err(|_| {
                            AppError::Validation("Invalid employee id".to_string())
                        })?;
                        req.actor_id = Some(actor);
                    }
                }
                _ => {}
            }
        }
    }

    let response = state.reconciler.verify_invoice(req).await?;
    Ok(Json(response))
}

/// 已付款未打印订单列表
pub async fn list_paid_not_printed(
    State(state): State<AppState>,
    Query(query): Query<StoreQuery>,
) -> Result<Json<PaidOrdersResponse>, AppError> {
    let response = state
        .reconciler
        .list_paid_not_printed(query.store_id.as_deref())
        .await?;
    Ok(Json(response))
}

/// 已付款未打印订单导出为 CSV
pub async fn export_paid_not_printed(
    State(state): State<AppState>,
    Query(query): Query<StoreQuery>,
) -> Result<Response, AppError> {
    let body = state
        .reconciler
        .export_paid_not_printed_csv(query.store_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"paid-not-printed.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}
