//! docaudit CLI - document structure and formatting audit tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docaudit::export::{document_to_json, to_json, JsonFormat, Report};
use docaudit::{
    analyze_file_with_options, write_csv, AnalyzeOptions, Analyzer, BatchOptions,
    BatchProcessor, BatchTotals, Document, FormatQuality, PatternTable,
};

#[derive(Parser)]
#[command(name = "docaudit")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Audit heading styles, captions and references in document corpora", long_about = None)]
struct Cli {
    /// Input paragraph dump or corpus directory
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Custom pattern table (JSON)
    #[arg(long, global = true, value_name = "FILE", env = "DOCAUDIT_PATTERNS")]
    patterns: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single paragraph dump
    Analyze {
        /// Input paragraph dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the analyzed document as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// Analyze every paragraph dump below a directory
    Batch {
        /// Corpus directory
        #[arg(value_name = "DIR", env = "DOCAUDIT_INPUT")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", env = "DOCAUDIT_OUTPUT")]
        output: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "all")]
        format: ExportFormat,

        /// Discard the checkpoint and start over
        #[arg(long)]
        reset: bool,

        /// Checkpoint file
        #[arg(long, value_name = "FILE", env = "DOCAUDIT_CHECKPOINT")]
        checkpoint: Option<PathBuf>,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Print the built-in pattern table
    Patterns {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    /// CSV reports (summary, sections, issues)
    Csv,
    /// JSON report
    Json,
    /// Both CSV and JSON
    All,
}

impl ExportFormat {
    fn csv(self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::All)
    }

    fn json(self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::All)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            json,
            compact,
        }) => cmd_analyze(&input, cli.patterns.as_deref(), json, compact),
        Some(Commands::Batch {
            input,
            output,
            format,
            reset,
            checkpoint,
            sequential,
        }) => {
            let mut options = BatchOptions::new().with_reset(reset);
            if let Some(path) = checkpoint {
                options = options.with_checkpoint(path);
            }
            if sequential {
                options = options.sequential();
            }
            cmd_batch(&input, output.as_deref(), format, options, cli.patterns.as_deref())
        }
        Some(Commands::Patterns { output }) => cmd_patterns(output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: batch for directories, analyze for files
            match cli.input {
                Some(input) if input.is_dir() => cmd_batch(
                    &input,
                    None,
                    ExportFormat::All,
                    BatchOptions::new(),
                    cli.patterns.as_deref(),
                ),
                Some(input) => cmd_analyze(&input, cli.patterns.as_deref(), false, false),
                None => {
                    println!("{}", "Usage: docaudit <PATH>".yellow());
                    println!("       docaudit --help for more information");
                    Ok(())
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn analyze_options(patterns: Option<&Path>) -> Result<AnalyzeOptions, Box<dyn std::error::Error>> {
    let mut options = AnalyzeOptions::new();
    if let Some(path) = patterns {
        options = options.with_patterns(PatternTable::load(path)?);
    }
    Ok(options)
}

fn quality_label(quality: FormatQuality) -> colored::ColoredString {
    match quality {
        FormatQuality::Excellent => quality.as_str().green().bold(),
        FormatQuality::Good => quality.as_str().green(),
        FormatQuality::Fair => quality.as_str().yellow(),
        FormatQuality::Poor => quality.as_str().red(),
    }
}

fn cmd_analyze(
    input: &Path,
    patterns: Option<&Path>,
    json: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = analyze_file_with_options(input, analyze_options(patterns)?)?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", document_to_json(&doc, format)?);
        return Ok(());
    }

    print_document(&doc);
    Ok(())
}

fn print_document(doc: &Document) {
    println!("{}", "Document".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), doc.path.display());
    println!("{}: {}", "Title".bold(), doc.title);
    println!("{}: {}", "Author".bold(), doc.author);
    println!("{}: {}", "Author (text)".bold(), doc.author_from_text);
    println!("{}: {}", "Words".bold(), doc.word_count);
    println!(
        "{}: {} ({} unique)",
        "Images".bold(),
        doc.image_count,
        doc.unique_image_count
    );
    println!(
        "{}: {} Arabic, {} English",
        "References".bold(),
        doc.arabic_reference_count,
        doc.english_reference_count
    );
    println!("{}: {}", "Footnotes".bold(), doc.footnote_count);

    println!();
    println!("{}", "Formatting".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let stats = &doc.heading_stats;
    println!(
        "{}: {} ({} proper, {} Normal, {} font-based)",
        "Headings".bold(),
        stats.total,
        stats.proper_style,
        stats.normal_style,
        stats.font_based
    );
    println!(
        "{}: {}",
        "Uses proper styles".bold(),
        if doc.uses_proper_styles { "Yes" } else { "No" }
    );
    println!("{}: {}", "Quality".bold(), quality_label(doc.format_quality));

    if doc.total_format_issues() == 0 {
        return;
    }

    println!();
    println!(
        "{} ({})",
        "Issues".yellow().bold(),
        doc.total_format_issues()
    );
    for issue in &doc.heading_hierarchy_issues {
        println!(
            "  {} {} ({} → {})",
            "•".dimmed(),
            issue.heading,
            issue.current_style,
            issue.suggested_style.green()
        );
    }
    for marker in &doc.images_missing_captions {
        println!("  {} {} (missing caption)", "•".dimmed(), marker);
    }
    for issue in &doc.format_issues {
        println!("  {} {}", "•".dimmed(), issue.red());
    }
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    format: ExportFormat,
    options: BatchOptions,
    patterns: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("docaudit_output"));

    let analyzer = Analyzer::new(analyze_options(patterns)?);
    let processor = BatchProcessor::new(analyzer, options.with_exclude(&output_dir));

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = processor.run(input, |progress| {
        pb.set_length(progress.total as u64);
        pb.set_position(progress.completed as u64);
        pb.set_message(progress.document.name.clone());
    })?;
    pb.finish_with_message("Done!");

    if report.documents.is_empty() {
        println!(
            "{} ({} of {} files skipped)",
            "All files already processed!".green(),
            report.skipped,
            report.total_files
        );
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;
    let mut written = Vec::new();
    if format.csv() {
        written.extend(write_csv(&output_dir, &report.documents)?);
    }
    if format.json() {
        let path = output_dir.join("report.json");
        fs::write(&path, to_json(&Report::new(&report.documents), JsonFormat::Pretty)?)?;
        written.push(path);
    }

    let totals = BatchTotals::from_documents(&report.documents);
    totals.log_summary();

    println!("\n{}", "Processing Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Files found".bold(), report.total_files);
    println!("{}: {}", "Skipped (checkpoint)".bold(), report.skipped);
    println!("{}: {}", "Processed".bold(), report.processed());
    if report.failed > 0 {
        println!("{}: {}", "Failed".bold(), report.failed.to_string().red());
    }
    println!("{}: {}", "Time".bold(), report.elapsed_display());
    println!();
    for quality in FormatQuality::ALL {
        println!("  {}: {}", quality_label(quality), totals.count(quality));
    }
    if !totals.poor_documents.is_empty() {
        println!("\n{}", "Poor formatting:".red().bold());
        for name in totals.poor_documents.iter().take(5) {
            println!("  {} {}", "•".dimmed(), name);
        }
    }

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    Ok(())
}

fn cmd_patterns(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = PatternTable::builtin().to_json()?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docaudit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document structure and formatting audit tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/docaudit".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_batch_args() {
        let cli = Cli::try_parse_from([
            "docaudit",
            "batch",
            "corpus",
            "--format",
            "csv",
            "--sequential",
            "--patterns",
            "custom.json",
        ])
        .unwrap();
        assert_eq!(cli.patterns, Some(PathBuf::from("custom.json")));
        match cli.command {
            Some(Commands::Batch {
                input,
                format,
                sequential,
                reset,
                ..
            }) => {
                assert_eq!(input, PathBuf::from("corpus"));
                assert!(format.csv() && !format.json());
                assert!(sequential);
                assert!(!reset);
            }
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_compact_requires_json() {
        assert!(Cli::try_parse_from(["docaudit", "analyze", "a.json", "--compact"]).is_err());
        assert!(Cli::try_parse_from(["docaudit", "analyze", "a.json", "--json", "--compact"]).is_ok());
    }

    #[test]
    fn test_bare_path() {
        let cli = Cli::try_parse_from(["docaudit", "paper.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("paper.json")));
    }

    #[test]
    fn test_patterns_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patterns.json");
        cmd_patterns(Some(&path)).unwrap();

        let table = PatternTable::load(&path).unwrap();
        assert_eq!(table.len(), PatternTable::builtin().len());
    }

    #[test]
    fn test_batch_writes_exports() {
        let corpus = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(
            corpus.path().join("paper.json"),
            r#"{"paragraphs": [{"index": 0, "text": "Title"}, {"index": 1, "text": "Author"}]}"#,
        )
        .unwrap();

        let options = BatchOptions::new()
            .with_checkpoint(out.path().join("checkpoint.json"))
            .sequential();
        cmd_batch(corpus.path(), Some(out.path()), ExportFormat::All, options, None).unwrap();

        assert!(out.path().join("summary.csv").exists());
        assert!(out.path().join("sections.csv").exists());
        assert!(out.path().join("report.json").exists());
    }

    #[test]
    fn test_rerun_keeps_previous_exports() {
        let corpus = tempdir().unwrap();
        fs::write(
            corpus.path().join("paper.json"),
            r#"{"paragraphs": [{"index": 0, "text": "Title"}, {"index": 1, "text": "Author"},
                {"index": 2, "text": "[Figure 1] map"}]}"#,
        )
        .unwrap();
        let out = corpus.path().join("docaudit_output");
        let options = BatchOptions::new()
            .with_checkpoint(corpus.path().join("processing_checkpoint.json"))
            .sequential();

        cmd_batch(corpus.path(), Some(&out), ExportFormat::All, options.clone(), None).unwrap();
        let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
        let report = fs::read_to_string(out.join("report.json")).unwrap();
        assert!(out.join("issues.csv").exists());

        cmd_batch(corpus.path(), Some(&out), ExportFormat::All, options, None).unwrap();
        assert_eq!(fs::read_to_string(out.join("summary.csv")).unwrap(), summary);
        assert_eq!(fs::read_to_string(out.join("report.json")).unwrap(), report);
        assert!(out.join("issues.csv").exists());
        assert_eq!(summary.lines().count(), 2);
    }
}
