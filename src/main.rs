//! Bézier-Path Inspect.
//!
//! Lädt eine Spline aus JSON und gibt ihre abgeleiteten Daten aus:
//! Segment-Längen, Bounding-Box und gleichabständige Abtastpunkte.
//!
//! Aufruf: `bezier-path-inspect <spline.json> [--samples N] [--options FILE]`

use anyhow::Result;
use bezier_path::{load_spline_file, SplineOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Gibt Länge, Bounds und Abtastpunkte einer Bézier-Spline aus")]
struct Cli {
    /// Spline-Datei (JSON)
    input: PathBuf,

    /// Anzahl gleichabständiger Abtastpunkte
    #[arg(long, default_value_t = 8)]
    samples: usize,

    /// Optionen-Datei (TOML), sonst `bezier_path.toml` neben der Binary
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let options = match &cli.options {
        Some(path) => SplineOptions::load_from_file(path),
        None => SplineOptions::load_from_file(&SplineOptions::config_path()),
    };

    let mut spline = load_spline_file(&cli.input, options)?;
    let total = spline.calc_bezier_length();
    let bounds = spline.calc_bounding_box();

    println!("Datei:     {}", cli.input.display());
    println!("Segmente:  {}", spline.segment_count());
    println!("Loop:      {}", spline.is_loop());
    println!("Länge:     {:.4}", total);
    for (index, length) in spline.segment_lengths().unwrap_or_default().iter().enumerate() {
        println!("  Segment {:>3}: {:.4}", index, length);
    }
    println!("Bounds:    min {} max {}", bounds.min(), bounds.max());

    println!("Abtastung ({} Punkte):", cli.samples);
    for (index, point) in spline.distribute(cli.samples).iter().enumerate() {
        println!("  {:>3}: {}", index, point);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["bezier-path-inspect", "pfad.json"])
            .expect("gültige Argumente");
        assert_eq!(cli.input, PathBuf::from("pfad.json"));
        assert_eq!(cli.samples, 8);
        assert!(cli.options.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "bezier-path-inspect",
            "--samples",
            "3",
            "pfad.json",
            "--options",
            "opt.toml",
        ])
        .expect("gültige Argumente");
        assert_eq!(cli.samples, 3);
        assert_eq!(cli.options, Some(PathBuf::from("opt.toml")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["bezier-path-inspect"]).is_err());
        assert!(Cli::try_parse_from(["bezier-path-inspect", "a.json", "b.json"]).is_err());
        assert!(
            Cli::try_parse_from(["bezier-path-inspect", "a.json", "--samples", "viele"]).is_err()
        );
        assert!(Cli::try_parse_from(["bezier-path-inspect", "a.json", "--verbose"]).is_err());
    }
}
