pub mod cli;
pub mod config;
pub mod dict;
pub mod scanner;
pub mod walk;

pub use config::Config;
pub use dict::Dictionary;
pub use scanner::TypoScanner;

/// Lexical region a piece of text was lexed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Double-quoted string literal carrying the full escape grammar.
    StringLiteralEscaped,
    /// Single-quoted string literal; only the quote and the backslash
    /// itself can be escaped.
    StringLiteralRaw,
    /// A code identifier (variable, function, class name, ...).
    Identifier,
    /// Free-form text or markup embedded between code constructs.
    InlineText,
    /// A source comment.
    Comment,
}

impl SpanKind {
    /// Human-readable phrase used in reports.
    pub fn description(&self) -> &'static str {
        match self {
            SpanKind::StringLiteralEscaped | SpanKind::StringLiteralRaw => "a string literal",
            SpanKind::Identifier => "an identifier",
            SpanKind::InlineText => "inline text",
            SpanKind::Comment => "a comment",
        }
    }

    /// Short machine name used in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            SpanKind::StringLiteralEscaped => "string-literal",
            SpanKind::StringLiteralRaw => "raw-string-literal",
            SpanKind::Identifier => "identifier",
            SpanKind::InlineText => "inline-text",
            SpanKind::Comment => "comment",
        }
    }
}

/// One classified token of source text, as produced by the host's lexer.
#[derive(Debug, Clone)]
pub struct TextSpan {
    pub kind: SpanKind,
    /// Raw source text of the token, exactly as captured (string literals
    /// include their surrounding quotes).
    pub text: String,
    /// 1-based line the token starts on.
    pub start_line: u32,
}

impl TextSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>, start_line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            start_line,
        }
    }
}

/// One reported candidate misspelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypoFinding {
    /// The word exactly as it appeared in the source.
    pub word: String,
    /// Kind of span the word was found in.
    pub kind: SpanKind,
    /// Absolute 1-based line number in the scanned file.
    pub line: u32,
    /// Ordered corrections; when there are two or more entries the final
    /// one is a free-text caveat rather than a correction.
    pub suggestions: Vec<String>,
}
