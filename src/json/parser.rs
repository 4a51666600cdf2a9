//! Parser für Spline-JSON.

use super::SplineData;
use crate::core::BezierSpline;
use crate::shared::SplineOptions;
use anyhow::{Context, Result};
use std::path::Path;

/// Parsed eine Spline aus einem JSON-String (Standard-Optionen)
pub fn parse_spline(json: &str) -> Result<BezierSpline> {
    parse_spline_with_options(json, SplineOptions::default())
}

/// Parsed eine Spline aus einem JSON-String und berechnet ihre Längendaten
pub fn parse_spline_with_options(json: &str, options: SplineOptions) -> Result<BezierSpline> {
    let data: SplineData = serde_json::from_str(json).context("Spline-JSON nicht lesbar")?;
    let spline = data
        .into_spline(options)
        .context("Spline-Daten ungültig")?;
    Ok(spline)
}

/// Lädt eine Spline aus einer JSON-Datei
pub fn load_spline_file(path: &Path, options: SplineOptions) -> Result<BezierSpline> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
    let spline = parse_spline_with_options(&content, options)?;
    log::info!(
        "Spline geladen: {} Segment(e), Loop: {}",
        spline.segment_count(),
        spline.is_loop()
    );
    Ok(spline)
}
