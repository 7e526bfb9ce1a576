use crate::db::{ActivityLog, OrderRepository};
use crate::error::AppError;
use crate::extraction::TextExtractor;
use crate::models::{ActivityAction, ActivityEntry, VerifyInvoiceResponse};
use crate::reconcile::{compare_fields, ExtractedDocument, ReconciliationResult};
use std::sync::Arc;
use uuid::Uuid;

/// 发票核对请求 (上传校验已在 HTTP 层完成)
#[derive(Debug, Default)]
pub struct VerifyInvoiceRequest {
    pub order_id: String,
    pub store_id: Option<String>,
    pub actor_id: Option<Uuid>,
    pub document: Option<Vec<u8>>,
}

/// 发票对账服务
pub struct ReconcileService {
    pub(crate) orders: Arc<dyn OrderRepository>,
    activity: Arc<dyn ActivityLog>,
    extractor: Arc<TextExtractor>,
}

pub(crate) fn parse_order_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::Validation("Invalid order id".to_string()))
}

pub(crate) fn parse_store_id(raw: Option<&str>) -> Result<Uuid, AppError> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| AppError::Validation("Missing or invalid store id".to_string()))
}

impl ReconcileService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        activity: Arc<dyn ActivityLog>,
        extractor: Arc<TextExtractor>,
    ) -> Self {
        Self {
            orders,
            activity,
            extractor,
        }
    }

    /// 核对上传的发票 PDF 与订单记录
    pub async fn verify_invoice(
        &self,
        req: VerifyInvoiceRequest,
    ) -> Result<VerifyInvoiceResponse, AppError> {
        let order_id = parse_order_id(&req.order_id)?;
        let store_id = parse_store_id(req.store_id.as_deref())?;
        let Some(document) = req.document.filter(|bytes| !bytes.is_empty()) else {
            return Err(AppError::Validation(
                "No invoice file uploaded, please attach the PDF file".to_string(),
            ));
        };

        let order = self
            .orders
            .find_order(order_id, store_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found in this store", order_id)))?;

        // PDF 解析是 CPU 密集操作, 放到阻塞线程池
        let extractor = self.extractor.clone();
        let extracted = tokio::task::spawn_blocking(move || extractor.extract_text(&document))
            .await
            .map_err(|e| AppError::Internal(format!("extraction task failed: {}", e)))??;

        let doc = ExtractedDocument::new(extracted.text, extracted.pages);
        let result = ReconciliationResult::build(compare_fields(&order, &doc), &doc);

        tracing::info!(
            "Order {} reconciled: status={:?}, mismatched={}/{}, pages={}",
            order_id,
            result.status(),
            result.mismatched(),
            result.total_checks(),
            doc.pages
        );

        self.audit(ActivityEntry {
            actor_id: req.actor_id,
            store_id,
            action: ActivityAction::Validate,
            target_type: "order".to_string(),
            target_id: order_id,
            description: result.describe(order_id),
        })
        .await;

        Ok(result.into_response())
    }

    /// 审计日志写入失败只记录, 不影响响应
    async fn audit(&self, entry: ActivityEntry) {
        let target = entry.target_id;
        if let Err(e) = self.activity.record(entry).await {
            tracing::warn!("Failed to write activity log for order {}: {}", target, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_must_be_uuid() {
        assert!(matches!(parse_order_id("abc"), Err(AppError::Validation(_))));
        let id = Uuid::new_v4();
        assert_eq!(parse_order_id(&format!(" {} ", id)).unwrap(), id);
    }

    #[test]
    fn store_id_is_required() {
        assert!(matches!(parse_store_id(None), Err(AppError::Validation(_))));
        assert!(matches!(parse_store_id(Some("  ")), Err(AppError::Validation(_))));
        assert!(matches!(parse_store_id(Some("store-1")), Err(AppError::Validation(_))));
        assert!(parse_store_id(Some(&Uuid::new_v4().to_string())).is_ok());
    }
}
