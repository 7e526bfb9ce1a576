/// 预览保留的最大行数
pub const PREVIEW_LINES: usize = 30;

/// 单次对账的提取文本, 用完即弃
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub raw_text: String,
    pub lines: Vec<String>,
    pub normalized: String,
    pub pages: usize,
}

impl ExtractedDocument {
    pub fn new(raw_text: String, pages: usize) -> Self {
        let lines: Vec<String> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        let normalized = raw_text.to_lowercase();

        Self {
            raw_text,
            lines,
            normalized,
            pages,
        }
    }

    pub fn preview(&self) -> String {
        self.lines
            .iter()
            .take(PREVIEW_LINES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
