// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! taxpack CLI entry point.
//!
//! `generate` materializes the reference documents, `pack` assembles the
//! archive from whatever files exist, and `build` runs both in sequence.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taxpack::package::PackageSpec;
use taxpack::{archive, content, report};

/// Bundle the Indian taxation & business-compliance reference documents
/// into a single zip archive with a generated README.
#[derive(Parser, Debug)]
#[command(name = "taxpack", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Working directory for generated files and the archive.
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    /// Archive output path, overriding the bundle's archive name.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Path to a JSON package spec replacing the built-in bundle.
    #[arg(long, global = true)]
    spec: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the reference documents and assemble the archive.
    Build,

    /// Generate the reference documents only.
    Generate,

    /// Assemble the archive from whatever files already exist.
    Pack,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = run(&cli);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let spec = match &cli.spec {
        Some(path) => PackageSpec::from_path(path)?,
        None => PackageSpec::default(),
    };

    match cli.command {
        Commands::Build => {
            run_generate(cli)?;
            run_pack(cli, &spec)
        }
        Commands::Generate => run_generate(cli),
        Commands::Pack => run_pack(cli, &spec),
    }
}

fn run_generate(cli: &Cli) -> Result<()> {
    content::materialize(&cli.dir)?;
    for file in content::reference_files() {
        println!("✓ Wrote {}", file.path());
    }
    Ok(())
}

fn run_pack(cli: &Cli, spec: &PackageSpec) -> Result<()> {
    let manifest = spec.manifest();
    let readme = spec.render_readme()?;
    let archive_path = match &cli.out {
        Some(out) => out.clone(),
        None => cli.dir.join(spec.archive_file_name()),
    };

    let result = archive::assemble(&manifest, &cli.dir, &archive_path, &readme)
        .context("Archive assembly failed")?;

    for line in report::render_member_lines(&manifest, &result) {
        println!("{line}");
    }
    println!();
    println!(
        "{}",
        report::render_summary(&result, &spec.archive_file_name())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn cli_parse_build() {
        let cli = Cli::try_parse_from(["taxpack", "build"]).unwrap();
        assert!(matches!(cli.command, Commands::Build));
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(cli.out.is_none());
        assert!(cli.spec.is_none());
    }

    #[test]
    fn cli_parse_generate_with_dir() {
        let cli = Cli::try_parse_from(["taxpack", "generate", "--dir", "/tmp/bundle"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate));
        assert_eq!(cli.dir, PathBuf::from("/tmp/bundle"));
    }

    #[test]
    fn cli_parse_pack_with_out_and_spec() {
        let cli = Cli::try_parse_from([
            "taxpack",
            "pack",
            "--out",
            "dist/bundle.zip",
            "--spec",
            "bundle.json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Pack));
        assert_eq!(cli.out, Some(PathBuf::from("dist/bundle.zip")));
        assert_eq!(cli.spec, Some(PathBuf::from("bundle.json")));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["taxpack", "build"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["taxpack", "-vv", "build"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["taxpack"]).is_err());
    }

    #[test]
    fn cli_parse_unknown_subcommand_errors() {
        assert!(Cli::try_parse_from(["taxpack", "upload"]).is_err());
    }
}
