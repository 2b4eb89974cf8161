//! CLI entry point for brandguard.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup and exit codes.
//! All business logic lives in the `brandguard-app` crate.

use anyhow::Context;
use brandguard_app::{
    format_not_found, render_markdown, report_exit_code, report_schema, run_check, run_explain,
    serialize_report, CheckInput,
};
use brandguard_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_FILE: &str = "brandguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "brandguard",
    version,
    about = "Brand guideline compliance checks for creative canvases"
)]
struct Cli {
    /// Path to brandguard config TOML (default: ./brandguard.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override profile (default|strict|lenient).
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a canvas and emit a compliance report.
    Check {
        /// Canvas JSON (bare canvas or `{ canvasState, guidelines }`); `-` reads stdin.
        #[arg(long)]
        canvas: Utf8PathBuf,

        /// Override the maximum text coverage, in percent.
        #[arg(long)]
        max_text_coverage: Option<f64>,

        /// Override the minimum logo area, in square pixels.
        #[arg(long)]
        min_logo_size: Option<f64>,

        /// Override the safe-zone margin, in pixels.
        #[arg(long)]
        safe_zone_margin: Option<f64>,

        /// Enable the contrast advisory with this minimum ratio.
        #[arg(long)]
        min_contrast_ratio: Option<f64>,

        /// Where to write the JSON report (stdout when omitted).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Print a Markdown summary to stdout instead of the JSON report.
        #[arg(long)]
        markdown: bool,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "canvas.safe_zone") or code (e.g., "text_coverage") to explain.
        identifier: String,
    },

    /// Print the JSON schema of the compliance report.
    Schema,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref canvas,
            max_text_coverage,
            min_logo_size,
            safe_zone_margin,
            min_contrast_ratio,
            ref report_out,
            markdown,
        } => {
            let overrides = Overrides {
                profile: cli.profile.clone(),
                max_text_coverage,
                min_logo_size,
                safe_zone_margin,
                min_contrast_ratio,
            };
            let result = cmd_check(
                cli.config.as_deref(),
                canvas,
                overrides,
                report_out.as_deref(),
                markdown,
            );
            match result {
                Ok(0) => Ok(()),
                Ok(code) => std::process::exit(code),
                Err(err) => {
                    eprintln!("brandguard error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Schema => {
            println!("{}", report_schema()?);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` controls the filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_check(
    config: Option<&Utf8Path>,
    canvas: &Utf8Path,
    overrides: Overrides,
    report_out: Option<&Utf8Path>,
    markdown: bool,
) -> anyhow::Result<i32> {
    let config_text = read_config(config)?;
    let payload_text = read_payload(canvas)?;

    let output = run_check(CheckInput {
        payload_text: &payload_text,
        config_text: &config_text,
        overrides,
    })?;

    if let Some(path) = report_out {
        write_report_file(path, &serialize_report(&output.report)?)
            .context("write report json")?;
    }

    if markdown {
        print!("{}", render_markdown(&output.report));
    } else if report_out.is_none() {
        let data = serialize_report(&output.report)?;
        println!("{}", String::from_utf8_lossy(&data));
    }

    Ok(report_exit_code(&output.report))
}

/// An explicit `--config` must exist; the implicit default file is optional.
fn read_config(config: Option<&Utf8Path>) -> anyhow::Result<String> {
    match config {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
        }
        None => {
            let path = Utf8Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                tracing::debug!(%path, "using default config file");
                std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
            } else {
                Ok(String::new())
            }
        }
    }
}

fn read_payload(canvas: &Utf8Path) -> anyhow::Result<String> {
    if canvas.as_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read canvas from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(canvas).with_context(|| format!("read canvas: {canvas}"))
    }
}

fn write_report_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        Some(text) => {
            print!("{text}");
            Ok(())
        }
        None => {
            eprint!("{}", format_not_found(identifier));
            std::process::exit(1);
        }
    }
}
