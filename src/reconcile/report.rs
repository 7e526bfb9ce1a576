use super::document::ExtractedDocument;
use crate::models::{FieldCheck, FieldKey, ReconcileStatus, VerifyInvoiceResponse, VerifySummary};
use indexmap::IndexMap;
use uuid::Uuid;

/// 单次对账结果, 不落库
#[derive(Debug, Clone)]
pub struct ReconciliationResult {
    checks: IndexMap<FieldKey, FieldCheck>,
    mismatched: usize,
    status: ReconcileStatus,
    text_preview: String,
}

impl ReconciliationResult {
    pub fn build(checks: Vec<FieldCheck>, doc: &ExtractedDocument) -> Self {
        let checks: IndexMap<FieldKey, FieldCheck> =
            checks.into_iter().map(|check| (check.field, check)).collect();
        let mismatched = checks.values().filter(|check| !check.matched).count();
        let status = if mismatched == 0 {
            ReconcileStatus::Aligned
        } else {
            ReconcileStatus::Diverged
        };

        Self {
            checks,
            mismatched,
            status,
            text_preview: doc.preview(),
        }
    }

    pub fn status(&self) -> ReconcileStatus {
        self.status
    }

    pub fn mismatched(&self) -> usize {
        self.mismatched
    }

    pub fn total_checks(&self) -> usize {
        self.checks.len()
    }

    pub fn check(&self, field: FieldKey) -> Option<&FieldCheck> {
        self.checks.get(&field)
    }

    pub fn mismatched_fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.checks
            .values()
            .filter(|check| !check.matched)
            .map(|check| check.field)
    }

    /// 写入审计日志的描述
    pub fn describe(&self, order_id: Uuid) -> String {
        match self.status {
            ReconcileStatus::Aligned => {
                format!("Invoice reconciliation for order {}: aligned", order_id)
            }
            ReconcileStatus::Diverged => format!(
                "Invoice reconciliation for order {}: {} mismatched field(s)",
                order_id, self.mismatched
            ),
        }
    }

    pub fn into_response(self) -> VerifyInvoiceResponse {
        let message = match self.status {
            ReconcileStatus::Aligned => "Invoice matches the order".to_string(),
            ReconcileStatus::Diverged => format!(
                "Invoice differs from the order in {} field(s)",
                self.mismatched
            ),
        };

        VerifyInvoiceResponse {
            message,
            summary: VerifySummary {
                total_checks: self.checks.len(),
                mismatched: self.mismatched,
                status: self.status,
                text_preview: self.text_preview,
            },
            checks: self.checks.into_values().collect(),
        }
    }
}
