use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io;
use std::path::PathBuf;
use typochk::cli::output::{self, OutputFormat};
use typochk::dict::ignore::IgnoreList;
use typochk::{walk, Config, Dictionary, TypoScanner};

#[derive(Parser, Debug)]
#[command(name = "typochk")]
#[command(version, about = "A fast dictionary-driven typo scanner", long_about = None)]
struct Cli {
    /// Files or directories to scan
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Typo dictionary file (one `typo->correction1,correction2` per line)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// File of words to never report, one per line
    #[arg(long)]
    ignore_file: Option<PathBuf>,

    /// File extension to scan inside directories (repeatable)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Scan every file regardless of extension
    #[arg(long, conflicts_with = "extensions")]
    all_types: bool,

    /// Print the offending source line under each finding
    #[arg(short = 'c', long)]
    with_context: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "typochk", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(
        cli.dictionary.clone(),
        cli.ignore_file.clone(),
        cli.extensions.clone(),
        cli.all_types,
        cli.with_context,
    )?;

    if cli.paths.is_empty() {
        anyhow::bail!("No paths specified. Use --help for usage information.");
    }

    // A missing or empty dictionary is fatal; everything downstream
    // depends on it.
    let dictionary = match &config.dictionary {
        Some(path) => Dictionary::load(path)?,
        None => Dictionary::builtin(),
    };

    let ignore_list = match &config.ignore_file {
        Some(path) if path.exists() => IgnoreList::load(path)?,
        _ => IgnoreList::default(),
    };

    let scanner = TypoScanner::new(&dictionary);
    let files = walk::discover_files(&cli.paths, &config.extensions);

    let mut total_findings = 0usize;

    for file in &files {
        let bytes = match fs::read(file) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("Warning: cannot read {}: {}", file.display(), err);
                continue;
            }
        };

        if walk::is_probably_binary(&bytes) {
            eprintln!("Note: skipping binary file {}", file.display());
            continue;
        }

        let text = String::from_utf8_lossy(&bytes);
        let findings: Vec<_> = scanner
            .scan_file(&text, None)
            .into_iter()
            .filter(|finding| !ignore_list.contains(&finding.word))
            .collect();

        total_findings += findings.len();
        output::print_findings(
            file,
            &findings,
            &text,
            config.with_context,
            !cli.no_color,
            &cli.format,
        );
    }

    if matches!(cli.format, OutputFormat::Text) {
        output::print_summary(total_findings, files.len(), !cli.no_color);
    }

    // Exit status carries the finding count; saturate below the wrap-around
    // so 256 findings never read as a clean run.
    std::process::exit(total_findings.min(255) as i32);
}
