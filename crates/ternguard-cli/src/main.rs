//! CLI entry point for ternguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `ternguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::sync::Once;
use ternguard_app::{
    parse_report_json, render_annotations, render_markdown, run_check, run_explain,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code, CheckInput,
    ExplainOutput,
};
use ternguard_settings::Overrides;
use ternguard_types::{RepoPath, TernguardReport};

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

#[derive(Parser, Debug)]
#[command(
    name = "ternguard",
    version,
    about = "Line-break policy guard for conditional expressions"
)]
struct Cli {
    /// Repository root that sources and config are resolved against.
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Path to ternguard config TOML, relative to the root.
    #[arg(long, default_value = "ternguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|compat).
    #[arg(long)]
    profile: Option<String>,

    /// Override ternary style (always|always-multiline|never).
    #[arg(long)]
    style: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate policy and write artifacts.
    Check {
        /// Files to check, relative to the root. Discovers sources when omitted.
        paths: Vec<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/ternguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/ternguard/comment.md")]
        markdown_out: Utf8PathBuf,

        /// Print GitHub Actions annotations to stdout.
        #[arg(long)]
        annotations: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/ternguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/ternguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g. "layout.multiline_ternary") or code (e.g. "expected_cons_alt").
        identifier: String,
    },

    /// Print the JSON schema of the report envelope.
    Schema,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref paths,
            ref report_out,
            write_markdown,
            ref markdown_out,
            annotations,
        } => cmd_check(
            &cli,
            paths,
            report_out,
            write_markdown,
            markdown_out,
            annotations,
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Schema => cmd_schema(),
    }
}

fn cmd_check(
    cli: &Cli,
    paths: &[String],
    report_out: &Utf8PathBuf,
    write_markdown: bool,
    markdown_out: &Utf8PathBuf,
    annotations: bool,
) -> anyhow::Result<()> {
    let repo_root = cli
        .root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.root.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.is_dir() {
            anyhow::bail!("root is not a directory: {}", repo_root);
        }
        // Missing config file is allowed (defaults apply).
        let cfg_path = repo_root.join(&cli.config);
        let cfg_text = if cfg_path.exists() {
            std::fs::read_to_string(&cfg_path)
                .with_context(|| format!("read config: {}", cfg_path))?
        } else {
            String::new()
        };

        let overrides = Overrides {
            profile: cli.profile.clone(),
            style: cli.style.clone(),
            max_findings: cli.max_findings,
        };

        let explicit = (!paths.is_empty())
            .then(|| paths.iter().map(|p| RepoPath::new(p.as_str())).collect());

        let input = CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides,
            paths: explicit,
        };

        let output = run_check(input)?;

        write_report_file(report_out, &output.report).context("write report json")?;

        let renderable = to_renderable(&output.report);
        if write_markdown {
            let md = render_markdown(&renderable);
            write_text_file(markdown_out, &md).context("write markdown")?;
        }
        if annotations {
            for annotation in render_annotations(&renderable, usize::MAX) {
                println!("{}", annotation);
            }
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("ternguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &camino::Utf8Path, report: &TernguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(report_path: &Utf8PathBuf) -> anyhow::Result<TernguardReport> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", ternguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                ternguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(TernguardReport);
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{}", text);
    Ok(())
}
