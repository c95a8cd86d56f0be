//! # roma
//!
//! Builds the static Roma Burger landing page and checks its content.
//!
//! ## Usage
//!
//! ```bash
//! # Render dist/index.html and dist/boot.js
//! roma build --out dist
//!
//! # Light palette, no map library
//! roma build --out dist --theme cream --no-map-assets --force
//!
//! # Validate content and scroll anchors (exit code 1 on defects)
//! roma check
//! roma check --json
//! ```
//!
//! The wasm runtime itself is built separately
//! (`wasm-pack build site/wasm --target web --out-dir ../../dist/pkg`).

mod bundle;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use roma_site::theme::ThemeVariant;

#[derive(Parser, Debug)]
#[command(name = "roma")]
#[command(about = "Build and check the Roma Burger landing page")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page into an output directory
    Build(BuildArgs),
    /// Validate content and cross-reference scroll targets
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
struct BuildArgs {
    /// Output directory
    #[arg(long, short, default_value = "dist")]
    out: PathBuf,

    /// Color palette
    #[arg(long, value_enum, default_value_t = ThemeArg::Noir)]
    theme: ThemeArg,

    /// Path of the wasm-bindgen glue, relative to the output directory
    #[arg(long, default_value = roma_site::WASM_GLUE)]
    wasm_glue: String,

    /// Do not link Leaflet; the franchise map stays a plain list
    #[arg(long)]
    no_map_assets: bool,

    /// Overwrite an existing index.html
    #[arg(long)]
    force: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Noir,
    Cream,
}

impl From<ThemeArg> for ThemeVariant {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Noir => ThemeVariant::Noir,
            ThemeArg::Cream => ThemeVariant::Cream,
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        Command::Build(build) => {
            bundle::build(&bundle::BuildOptions {
                out: build.out,
                theme: build.theme.into(),
                wasm_glue: build.wasm_glue,
                map_assets: !build.no_map_assets,
                force: build.force,
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { json } => report::check(json),
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[roma] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
