use super::{DocumentParser, ExtractedText, ExtractionError, ParserFactory};
use lopdf::Document;

/// lopdf 负责结构与页数, pdf-extract 负责文本
pub struct PdfParserFactory;

impl ParserFactory for PdfParserFactory {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn open(&self, buffer: &[u8]) -> Result<Box<dyn DocumentParser>, ExtractionError> {
        let document =
            Document::load_mem(buffer).map_err(|e| ExtractionError::Parse(e.to_string()))?;

        Ok(Box::new(PdfParser {
            buffer: buffer.to_vec(),
            document: Some(document),
        }))
    }
}

struct PdfParser {
    buffer: Vec<u8>,
    document: Option<Document>,
}

impl DocumentParser for PdfParser {
    fn text(&mut self) -> Result<ExtractedText, ExtractionError> {
        let pages = self
            .document
            .as_ref()
            .map(|doc| doc.get_pages().len())
            .ok_or_else(|| ExtractionError::Parse("parser already released".to_string()))?;

        let text = pdf_extract::extract_text_from_mem(&self.buffer)
            .map_err(|e| ExtractionError::Text(e.to_string()))?;

        Ok(ExtractedText { text, pages })
    }

    fn destroy(&mut self) {
        self.document = None;
        self.buffer = Vec::new();
        tracing::trace!("PDF parser released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// 用 lopdf 在内存中生成一页只含一行文字的 PDF
    fn one_page_pdf(line: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn reads_pages_and_text_from_real_pdf() {
        let bytes = one_page_pdf("Total: 150.000");
        let mut parser = PdfParserFactory.open(&bytes).unwrap();

        let extracted = parser.text().unwrap();
        assert_eq!(extracted.pages, 1);
        assert!(extracted.text.contains("Total: 150.000"), "{:?}", extracted.text);

        parser.destroy();
        assert!(parser.text().is_err());
    }

    #[test]
    fn garbage_bytes_fail_to_open() {
        let result = PdfParserFactory.open(b"definitely not a pdf");
        assert!(matches!(result, Err(ExtractionError::Parse(_))));
    }

    #[test]
    fn released_parser_refuses_text() {
        let mut parser = PdfParser {
            buffer: Vec::new(),
            document: None,
        };
        parser.destroy();
        assert!(parser.text().is_err());
    }
}
