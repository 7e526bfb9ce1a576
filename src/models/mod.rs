pub mod activity;
pub mod check;
pub mod order;
pub mod response;

pub use activity::{ActivityAction, ActivityEntry};
pub use check::{CheckValue, FieldCheck, FieldKey};
pub use order::{
    CustomerRef, EmployeeRef, OrderRecord, OrderRow, OrderStatus, PaymentMethod, WALK_IN_CUSTOMER,
};
pub use response::{
    PaidOrdersResponse, PaidOrdersSummary, ReconcileStatus, VerifyInvoiceResponse, VerifySummary,
};
