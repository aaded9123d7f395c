/// Recognized text, in the reading order reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrResult {
    pub lines: Vec<String>,
    pub full_text: String,
}

impl OcrResult {
    /// Trailing blank lines are dropped so `lines` always matches `full_text`.
    pub fn from_lines(mut lines: Vec<String>) -> Self {
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let mut full_text = lines.join("\n");
        full_text.truncate(full_text.trim_end().len());

        Self { lines, full_text }
    }

    pub fn is_blank(&self) -> bool {
        self.full_text.trim().is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_joins_with_newlines_in_given_order() {
        let result = OcrResult::from_lines(vec!["Hello".to_string(), "World".to_string()]);

        assert_eq!(result.full_text, "Hello\nWorld");
        assert_eq!(result.line_count(), 2);
        assert!(!result.is_blank());
    }

    #[test]
    fn test_from_lines_trims_trailing_whitespace_only() {
        let result = OcrResult::from_lines(vec!["  indented".to_string(), "last  ".to_string()]);

        assert_eq!(result.full_text, "  indented\nlast");
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let result = OcrResult::from_lines(vec![" ".to_string(), "\t".to_string()]);

        assert!(result.is_blank());
        assert_eq!(result.full_text, "");
        assert_eq!(result.line_count(), 0);
    }

    #[test]
    fn test_trailing_blank_lines_are_not_counted() {
        let result = OcrResult::from_lines(vec![
            "a".to_string(),
            " ".to_string(),
            "b".to_string(),
            "  ".to_string(),
        ]);

        assert_eq!(result.full_text, "a\n \nb");
        assert_eq!(result.lines, vec!["a", " ", "b"]);
        assert_eq!(result.line_count(), 3);
    }
}
