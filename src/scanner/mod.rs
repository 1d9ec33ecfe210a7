pub mod escape;
pub mod lines;
pub mod suggestions;
pub mod words;

use crate::dict::Dictionary;
use crate::{SpanKind, TextSpan, TypoFinding};
use escape::QuoteStyle;
use lines::LineCounter;

/// Tokenization-aware typo scanner.
///
/// Consumes classified token spans for one file and reports dictionary hits
/// with their absolute line numbers. The dictionary is borrowed: one loaded
/// dictionary serves every scan in the process, and concurrent per-file
/// scans can share it freely since it is never mutated.
pub struct TypoScanner<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> TypoScanner<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// Host entry point: scan one file, tokenized when spans are supplied,
    /// as plain text otherwise.
    pub fn scan_file(&self, text: &str, spans: Option<&[TextSpan]>) -> Vec<TypoFinding> {
        match spans {
            Some(spans) => self.scan(spans),
            None => self.scan_plain_text(text),
        }
    }

    /// Treat the entire input as a single inline-text span starting at
    /// line 1. This is the batch-mode path; no tokenizer required.
    pub fn scan_plain_text(&self, text: &str) -> Vec<TypoFinding> {
        let span = TextSpan::new(SpanKind::InlineText, text, 1);
        self.scan(std::slice::from_ref(&span))
    }

    /// Scan classified spans in order. Findings preserve span order, and
    /// left-to-right match order within each span.
    pub fn scan(&self, spans: &[TextSpan]) -> Vec<TypoFinding> {
        let mut findings = Vec::new();

        for span in spans {
            match span.kind {
                SpanKind::StringLiteralEscaped => {
                    self.scan_string_literal(span, QuoteStyle::Double, &mut findings);
                }
                SpanKind::StringLiteralRaw => {
                    self.scan_string_literal(span, QuoteStyle::Single, &mut findings);
                }
                SpanKind::Identifier => {
                    self.scan_identifier(span, &mut findings);
                }
                SpanKind::InlineText | SpanKind::Comment => {
                    self.scan_free_text(span, &mut findings);
                }
            }
        }

        findings
    }

    fn scan_string_literal(
        &self,
        span: &TextSpan,
        style: QuoteStyle,
        findings: &mut Vec<TypoFinding>,
    ) {
        let decoded = match escape::decode(&span.text, style) {
            Ok(decoded) => decoded,
            // an undecodable literal skips this span, not the file
            Err(_) => return,
        };
        let counting_text = escape::decode_for_line_count(&span.text, style);
        self.emit_free_text_findings(span, &decoded, counting_text, findings);
    }

    fn scan_free_text(&self, span: &TextSpan, findings: &mut Vec<TypoFinding>) {
        self.emit_free_text_findings(span, &span.text, span.text.clone(), findings);
    }

    /// Extract plain words from `text`, look them up, and emit findings.
    /// Words that miss the dictionary but look like embedded identifiers
    /// (camelCase, snake_case) are decomposed and their segments looked up,
    /// provided the decomposition yields at least two segments — single
    /// capitalized prose words stay unreported.
    fn emit_free_text_findings(
        &self,
        span: &TextSpan,
        text: &str,
        counting_text: String,
        findings: &mut Vec<TypoFinding>,
    ) {
        let mut counter = LineCounter::new(counting_text);

        for (word, offset) in words::extract_words(text) {
            let line = span.start_line + counter.line_for_offset(offset);

            if let Some(corrections) = self.dictionary.lookup(&word.to_lowercase()) {
                self.emit(word, span.kind, line, corrections, false, findings);
                continue;
            }

            if !words::looks_like_identifier(word) {
                continue;
            }
            let parts = words::identifier_parts(word);
            if parts.len() < 2 {
                continue;
            }
            for part in parts {
                if let Some(corrections) = self.dictionary.lookup(&part.to_lowercase()) {
                    self.emit(part, span.kind, line, corrections, false, findings);
                }
            }
        }
    }

    /// Identifiers report the span's start line for every segment; a single
    /// identifier token never crosses a line boundary.
    fn scan_identifier(&self, span: &TextSpan, findings: &mut Vec<TypoFinding>) {
        for part in words::identifier_parts(&span.text) {
            if let Some(corrections) = self.dictionary.lookup(&part.to_lowercase()) {
                self.emit(
                    part,
                    SpanKind::Identifier,
                    span.start_line,
                    corrections,
                    true,
                    findings,
                );
            }
        }
    }

    fn emit(
        &self,
        word: &str,
        kind: SpanKind,
        line: u32,
        corrections: &[String],
        context_is_identifier: bool,
        findings: &mut Vec<TypoFinding>,
    ) {
        if let Some(kept) = suggestions::filter(corrections, context_is_identifier) {
            findings.push(TypoFinding {
                word: word.to_string(),
                kind,
                line,
                suggestions: kept,
            });
        }
    }
}
