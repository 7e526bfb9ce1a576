pub mod paid_orders;
pub mod reconciler;

pub use reconciler::{ReconcileService, VerifyInvoiceRequest};
