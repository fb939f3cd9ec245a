// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Tetromino tray piece generator

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use scadgen::{compile, create_part, io, BuildConfig, CompileStats, Pattern};

#[derive(Parser)]
#[command(name = "tetromino")]
#[command(about = "Generates OpenSCAD scripts for tetromino tray pieces", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile piece scripts and write them to the output directory
    Build {
        /// Pieces to build (default: every configured piece)
        pieces: Vec<String>,

        /// Output directory for .scad files
        #[arg(short, long)]
        out: Option<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<String>,

        /// Write a JSON build report to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Print one piece's script to stdout
    Show {
        /// Piece name
        piece: String,

        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Show version information
    Version,
}

#[derive(Serialize)]
struct PieceReport {
    name: String,
    path: Option<String>,
    stats: Option<CompileStats>,
    millis: u128,
    error: Option<String>,
}

#[derive(Serialize)]
struct BuildReport {
    timestamp: String,
    out_dir: String,
    total: usize,
    failed: usize,
    pieces: Vec<PieceReport>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Build {
            pieces,
            out,
            config,
            report,
        }) => {
            build_command(
                pieces,
                out.as_deref(),
                config.as_deref(),
                report.as_deref(),
                cli.verbose,
            )?;
        }
        Some(Commands::Show { piece, config }) => {
            show_command(piece, config.as_deref())?;
        }
        Some(Commands::Version) => {
            println!("tetromino v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // Default behavior: build every configured piece
            build_command(&[], None, None, None, cli.verbose)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<BuildConfig> {
    match path {
        Some(path) => BuildConfig::from_file(path),
        None => BuildConfig::load(),
    }
}

fn resolve_pieces(config: &BuildConfig, requested: &[String]) -> Vec<(String, Vec<String>)> {
    let mut selected = config.selected_pieces();

    if !requested.is_empty() {
        for name in requested {
            if !selected.iter().any(|(known, _)| known == name) {
                eprintln!("{} Unknown piece: {}", "Error:".red(), name);
                let known: Vec<String> =
                    selected.iter().map(|(known, _)| known.clone()).collect();
                eprintln!("Known pieces: {}", known.join(", "));
                std::process::exit(1);
            }
        }
        selected.retain(|(name, _)| requested.iter().any(|pick| pick == name));
    }

    selected
}

fn build_command(
    requested: &[String],
    out: Option<&str>,
    config: Option<&str>,
    report: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(out) = out {
        config.out_dir = PathBuf::from(out);
    }

    let selected = resolve_pieces(&config, requested);
    if selected.is_empty() {
        eprintln!("{}", "No pieces selected".red());
        std::process::exit(1);
    }

    // Reject malformed patterns before any geometry is built.
    let mut pieces = Vec::with_capacity(selected.len());
    for (name, rows) in &selected {
        match Pattern::from_rows(rows) {
            Ok(pattern) => pieces.push((name.clone(), pattern)),
            Err(e) => {
                eprintln!("{} Piece {}: {}", "Error:".red(), name, e);
                std::process::exit(1);
            }
        }
    }

    if verbose {
        println!("{}", format!("Building {} pieces...", pieces.len()).bold());
    }

    let progress = if verbose {
        let pb = ProgressBar::new(pieces.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let compiled: Vec<_> = pieces
        .par_iter()
        .map(|(name, pattern)| {
            let piece_start = Instant::now();
            let result = compile(&create_part(pattern));
            if let Some(ref pb) = progress {
                pb.inc(1);
            }
            (name.clone(), result, piece_start.elapsed())
        })
        .collect();
    if let Some(pb) = progress {
        pb.finish_with_message("Build complete");
    }

    let mut reports = Vec::with_capacity(compiled.len());
    let mut failed = 0;
    for (name, result, elapsed) in compiled {
        match result {
            Ok(part) => {
                let path = io::scad_path_for(&config.out_dir, &name);
                io::write_scad(&part, &path)?;
                if verbose {
                    println!(
                        "  {} {} ({} nodes, {} modules, {} lines, {:.2?})",
                        "✓".green(),
                        path.display(),
                        part.stats.nodes,
                        part.stats.modules,
                        part.stats.lines,
                        elapsed
                    );
                }
                reports.push(PieceReport {
                    name,
                    path: Some(path.display().to_string()),
                    stats: Some(part.stats),
                    millis: elapsed.as_millis(),
                    error: None,
                });
            }
            Err(e) => {
                failed += 1;
                eprintln!("{} Piece {}: {}", "Error:".red(), name, e);
                reports.push(PieceReport {
                    name,
                    path: None,
                    stats: None,
                    millis: elapsed.as_millis(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let total = reports.len();
    if let Some(report_path) = report {
        let report = BuildReport {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            out_dir: config.out_dir.display().to_string(),
            total,
            failed,
            pieces: reports,
        };
        std::fs::write(report_path, serde_json::to_string_pretty(&report)?)?;
        if verbose {
            println!("Report written to: {}", report_path);
        }
    }

    if failed > 0 {
        eprintln!(
            "{} {} of {} pieces failed",
            "Error:".red(),
            failed,
            total
        );
        std::process::exit(1);
    }

    println!(
        "Successfully wrote {} pieces to {} in {:.2?}",
        total,
        config.out_dir.display(),
        start.elapsed()
    );

    Ok(())
}

fn show_command(piece: &str, config: Option<&str>) -> Result<()> {
    let config = load_config(config)?;

    let selected = config.selected_pieces();
    let rows = match selected.iter().find(|(name, _)| name == piece) {
        Some((_, rows)) => rows,
        None => {
            eprintln!("{} Unknown piece: {}", "Error:".red(), piece);
            let known: Vec<String> = selected.iter().map(|(name, _)| name.clone()).collect();
            eprintln!("Known pieces: {}", known.join(", "));
            std::process::exit(1);
        }
    };

    let pattern = Pattern::from_rows(rows)?;
    let part = compile(&create_part(&pattern))?;
    print!("{}", part.text());

    Ok(())
}
