use crate::error::AppError;

const PDF_MIME: &str = "application/pdf";

/// 上传文件校验: 仅接受 PDF, 且不超过大小上限
#[derive(Debug, Clone, Copy)]
pub struct UploadGate {
    max_bytes: usize,
}

impl UploadGate {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn check(
        &self,
        file_name: Option<&str>,
        content_type: Option<&str>,
        len: usize,
    ) -> Result<(), AppError> {
        let declared_pdf = content_type
            .map(|ct| ct.trim().eq_ignore_ascii_case(PDF_MIME))
            .unwrap_or(false);
        let named_pdf = file_name
            .map(|name| name.trim().to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false);

        if !declared_pdf && !named_pdf {
            return Err(AppError::UnsupportedUpload(
                "Only PDF invoices are accepted".to_string(),
            ));
        }
        if len > self.max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Invoice file exceeds the {} MB limit",
                self.max_bytes / (1024 * 1024)
            )));
        }
        Ok(())
    }
}
