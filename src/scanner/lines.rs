/// Incrementally maps byte offsets within one span's text to the number of
/// newlines before them.
///
/// Matches inside a span are visited in increasing offset order, so the
/// cursor usually only moves forward a short distance; out-of-order queries
/// are still answered correctly by scanning the delta backward. Never reuse
/// a counter across different texts.
pub struct LineCounter {
    text: String,
    len: usize,
    last_offset: usize,
    last_line: u32,
}

impl LineCounter {
    pub fn new(text: String) -> Self {
        let len = text.len();
        Self {
            text,
            len,
            last_offset: 0,
            last_line: 0,
        }
    }

    /// Count of newline characters in `text[0..offset]`. Offsets are
    /// clamped to the text length; only the bytes between the previous and
    /// the new offset are scanned.
    pub fn line_for_offset(&mut self, offset: usize) -> u32 {
        let offset = offset.min(self.len);
        let bytes = self.text.as_bytes();

        if offset >= self.last_offset {
            self.last_line += count_newlines(&bytes[self.last_offset..offset]);
        } else {
            self.last_line -= count_newlines(&bytes[offset..self.last_offset]);
        }

        self.last_offset = offset;
        self.last_line
    }
}

fn count_newlines(bytes: &[u8]) -> u32 {
    bytes.iter().filter(|&&b| b == b'\n').count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_queries() {
        let mut counter = LineCounter::new("ab\ncd\nef".to_string());
        assert_eq!(counter.line_for_offset(0), 0);
        assert_eq!(counter.line_for_offset(2), 0);
        assert_eq!(counter.line_for_offset(3), 1);
        assert_eq!(counter.line_for_offset(6), 2);
        assert_eq!(counter.line_for_offset(8), 2);
    }

    #[test]
    fn test_backward_queries() {
        let mut counter = LineCounter::new("ab\ncd\nef".to_string());
        assert_eq!(counter.line_for_offset(8), 2);
        assert_eq!(counter.line_for_offset(4), 1);
        assert_eq!(counter.line_for_offset(0), 0);
        assert_eq!(counter.line_for_offset(7), 2);
    }

    #[test]
    fn test_offset_clamped_to_length() {
        let mut counter = LineCounter::new("a\nb".to_string());
        assert_eq!(counter.line_for_offset(100), 1);
    }

    #[test]
    fn test_no_newlines() {
        let mut counter = LineCounter::new("single line".to_string());
        assert_eq!(counter.line_for_offset(11), 0);
        assert_eq!(counter.line_for_offset(3), 0);
    }

    #[test]
    fn test_empty_text() {
        let mut counter = LineCounter::new(String::new());
        assert_eq!(counter.line_for_offset(0), 0);
        assert_eq!(counter.line_for_offset(5), 0);
    }
}
