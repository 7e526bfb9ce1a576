//! 文本提取适配层
//!
//! 每次调用创建一个解析器实例, 由 [`ScopedParser`] 持有,
//! 无论成功、失败还是 panic 展开, 离开作用域时都会释放。

pub mod pdf;

use crate::config::ExtractionConfig;
use thiserror::Error;

pub use pdf::PdfParserFactory;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("failed to read document text: {0}")]
    Text(String),

    #[error("unknown extraction backend '{0}'")]
    UnknownBackend(String),
}

/// 提取结果
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub pages: usize,
}

/// 单次调用内使用的解析器
pub trait DocumentParser: Send {
    fn text(&mut self) -> Result<ExtractedText, ExtractionError>;

    /// 释放解析器持有的资源
    fn destroy(&mut self);
}

/// 解析器工厂, 启动时按配置选定
pub trait ParserFactory: Send + Sync {
    fn name(&self) -> &'static str;

    fn open(&self, buffer: &[u8]) -> Result<Box<dyn DocumentParser>, ExtractionError>;
}

struct ScopedParser {
    inner: Box<dyn DocumentParser>,
}

impl ScopedParser {
    fn text(&mut self) -> Result<ExtractedText, ExtractionError> {
        self.inner.text()
    }
}

impl Drop for ScopedParser {
    fn drop(&mut self) {
        self.inner.destroy();
    }
}

/// 文本提取器
pub struct TextExtractor {
    factory: Box<dyn ParserFactory>,
}

impl TextExtractor {
    pub fn new(factory: Box<dyn ParserFactory>) -> Self {
        Self { factory }
    }

    /// 根据配置选择后端; 未知后端在启动时即报错
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        match config.backend.trim().to_ascii_lowercase().as_str() {
            "pdf" | "pdf-extract" => Ok(Self::new(Box::new(PdfParserFactory))),
            other => Err(ExtractionError::UnknownBackend(other.to_string())),
        }
    }

    pub fn backend(&self) -> &'static str {
        self.factory.name()
    }

    pub fn extract_text(&self, buffer: &[u8]) -> Result<ExtractedText, ExtractionError> {
        let mut parser = ScopedParser {
            inner: self.factory.open(buffer)?,
        };
        let extracted = parser.text()?;
        tracing::debug!(
            "Extracted {} chars from {} page(s) via {}",
            extracted.text.len(),
            extracted.pages,
            self.factory.name()
        );
        Ok(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingParser {
        fail: bool,
        released: Arc<AtomicUsize>,
    }

    impl DocumentParser for CountingParser {
        fn text(&mut self) -> Result<ExtractedText, ExtractionError> {
            if self.fail {
                return Err(ExtractionError::Text("broken stream".to_string()));
            }
            Ok(ExtractedText {
                text: "Tổng tiền: 1.000".to_string(),
                pages: 1,
            })
        }

        fn destroy(&mut self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct CountingFactory {
        fail: bool,
        released: Arc<AtomicUsize>,
    }

    impl ParserFactory for CountingFactory {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn open(&self, _buffer: &[u8]) -> Result<Box<dyn DocumentParser>, ExtractionError> {
            Ok(Box::new(CountingParser {
                fail: self.fail,
                released: self.released.clone(),
            }))
        }
    }

    fn extractor(fail: bool) -> (TextExtractor, Arc<AtomicUsize>) {
        let released = Arc::new(AtomicUsize::new(0));
        let factory = CountingFactory {
            fail,
            released: released.clone(),
        };
        (TextExtractor::new(Box::new(factory)), released)
    }

    #[test]
    fn parser_released_after_success() {
        let (extractor, released) = extractor(false);
        let extracted = extractor.extract_text(b"%PDF").unwrap();
        assert_eq!(extracted.pages, 1);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn parser_released_after_failure() {
        let (extractor, released) = extractor(true);
        assert!(extractor.extract_text(b"%PDF").is_err());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_backend_fails_at_construction() {
        let config = ExtractionConfig {
            backend: "ocr".to_string(),
        };
        assert!(matches!(
            TextExtractor::from_config(&config),
            Err(ExtractionError::UnknownBackend(name)) if name == "ocr"
        ));

        let config = ExtractionConfig {
            backend: "pdf".to_string(),
        };
        assert_eq!(TextExtractor::from_config(&config).unwrap().backend(), "pdf");
    }
}
