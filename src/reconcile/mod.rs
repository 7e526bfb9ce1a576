pub mod amount;
pub mod comparator;
pub mod document;
pub mod labels;
pub mod report;

pub use amount::{decimal_to_number, sanitize_amount};
pub use comparator::compare_fields;
pub use document::ExtractedDocument;
pub use labels::extract_label;
pub use report::ReconciliationResult;
