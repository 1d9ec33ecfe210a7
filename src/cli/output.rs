use crate::scanner::suggestions;
use crate::TypoFinding;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonFinding {
    file: String,
    line: u32,
    word: String,
    kind: String,
    suggestions: Vec<String>,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    file: String,
    total_findings: usize,
    findings: Vec<JsonFinding>,
}

pub fn print_findings(
    file_path: &Path,
    findings: &[TypoFinding],
    file_text: &str,
    with_context: bool,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => {
            print_text_findings(file_path, findings, file_text, with_context, colored_output)
        }
        OutputFormat::Json => print_json_findings(file_path, findings),
    }
}

fn print_text_findings(
    file_path: &Path,
    findings: &[TypoFinding],
    file_text: &str,
    with_context: bool,
    colored_output: bool,
) {
    let file_name = file_path.display().to_string();

    for finding in findings {
        let location = format!("{}:{}", file_name, finding.line);
        let message = suggestions::format_suggestion_text(&finding.suggestions, &finding.word);

        if colored_output {
            println!(
                "{}: Saw a possible typo {} in {} ({})",
                location.blue().bold(),
                format!("\"{}\"", finding.word).red().bold(),
                finding.kind.description(),
                message.green()
            );
        } else {
            println!(
                "{}: Saw a possible typo \"{}\" in {} ({})",
                location,
                finding.word,
                finding.kind.description(),
                message
            );
        }

        if with_context {
            if let Some(line) = file_text.lines().nth(finding.line as usize - 1) {
                if colored_output {
                    println!("    {}", line.trim().dimmed());
                } else {
                    println!("    {}", line.trim());
                }
            }
        }
    }
}

fn print_json_findings(file_path: &Path, findings: &[TypoFinding]) {
    let json_findings: Vec<JsonFinding> = findings
        .iter()
        .map(|f| JsonFinding {
            file: file_path.display().to_string(),
            line: f.line,
            word: f.word.clone(),
            kind: f.kind.name().to_string(),
            suggestions: f.suggestions.clone(),
            message: suggestions::format_suggestion_text(&f.suggestions, &f.word),
        })
        .collect();

    let output = JsonOutput {
        file: file_path.display().to_string(),
        total_findings: findings.len(),
        findings: json_findings,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// Summary goes to stderr: stdout carries only findings, so the exit-code
/// and per-line output contracts stay parseable.
pub fn print_summary(total_findings: usize, files_scanned: usize, colored_output: bool) {
    let file_word = if files_scanned == 1 { "file" } else { "files" };

    if total_findings == 0 {
        let message = format!("No typos found in {} {}", files_scanned, file_word);
        if colored_output {
            eprintln!("{}", message.green().bold());
        } else {
            eprintln!("{}", message);
        }
    } else {
        let typo_word = if total_findings == 1 { "typo" } else { "typos" };
        let message = format!(
            "{} possible {} found in {} {}",
            total_findings, typo_word, files_scanned, file_word
        );
        if colored_output {
            eprintln!("{}", message.yellow().bold());
        } else {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
