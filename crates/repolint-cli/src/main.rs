//! CLI entry point for repolint.
//!
//! This module handles argument parsing, IO and exit codes. All lint logic
//! lives in the `repolint-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};
use repolint_app::{
    exit_code, format_list, parse_report_json, run_annotations, run_lint, run_list, run_markdown,
    serialize_report, write_text, LintInput, OutputFormat, StdoutReporter, EXIT_FATAL,
};
use repolint_types::LintReport;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "repolint",
    version,
    about = "Lint a repository for community health files and conventions",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    #[command(flatten)]
    lint: LintArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lint a directory (the default when no subcommand is given).
    Lint(LintArgs),

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/repolint/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (prints to stdout when omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/repolint/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// List built-in rules and axioms.
    List,
}

#[derive(Args, Debug, Clone)]
struct LintArgs {
    /// Directory to lint.
    #[arg(default_value = ".")]
    target_dir: Utf8PathBuf,

    /// Directory to lint, as a flag.
    #[arg(long = "target-dir", value_name = "DIR", conflicts_with = "target_dir")]
    target_dir_flag: Option<Utf8PathBuf>,

    /// Ruleset file to use instead of discovering repolint.json.
    #[arg(long)]
    ruleset: Option<Utf8PathBuf>,

    /// Only check paths matching these globs (or living under these directories).
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    paths: Vec<String>,

    /// How results are printed.
    #[arg(long, value_enum, default_value_t = Format::Symbol)]
    format: Format,

    /// Where to write the JSON report.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Where to write a Markdown summary.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Symbol,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Symbol => OutputFormat::Symbol,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.cmd {
        Some(Commands::Lint(args)) => cmd_lint(&args),
        None => cmd_lint(&cli.lint),
        Some(Commands::Md { report, output }) => cmd_md(&report, output.as_deref()).map(|()| 0),
        Some(Commands::Annotations { report, max }) => cmd_annotations(&report, max).map(|()| 0),
        Some(Commands::List) => {
            print!("{}", format_list(&run_list()));
            Ok(0)
        }
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("repolint error: {err:#}");
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn cmd_lint(args: &LintArgs) -> anyhow::Result<i32> {
    let requested = args.target_dir_flag.as_ref().unwrap_or(&args.target_dir);
    let target_dir = requested
        .canonicalize_utf8()
        .unwrap_or_else(|_| requested.clone());
    if !target_dir.is_dir() {
        anyhow::bail!("target directory does not exist: {target_dir}");
    }

    let format = OutputFormat::from(args.format);
    let mut reporter = StdoutReporter::for_format(format);
    let output = run_lint(
        LintInput {
            target_dir: &target_dir,
            ruleset_path: args.ruleset.as_deref(),
            filter_paths: args.paths.clone(),
            format,
        },
        &mut reporter,
    )?;

    if let Some(path) = &args.report_out {
        let data = serialize_report(&output.report)?;
        write_text(path, &data).context("write report json")?;
    }
    if let Some(path) = &args.markdown_out {
        let md = run_markdown(&output.report);
        write_text(path, md.as_bytes()).context("write markdown")?;
    }

    Ok(exit_code(output.failed))
}

fn read_report(path: &Utf8Path) -> anyhow::Result<LintReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {path}"))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let md = run_markdown(&read_report(report_path)?);
    match output {
        Some(out_path) => write_text(out_path, md.as_bytes()).context("write markdown output"),
        None => {
            print!("{md}");
            Ok(())
        }
    }
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    for annotation in run_annotations(&read_report(report_path)?, max) {
        println!("{annotation}");
    }
    Ok(())
}
