//! Writer für Spline-JSON.

use super::SplineData;
use crate::core::BezierSpline;
use anyhow::{Context, Result};
use std::path::Path;

/// Schreibt die bestimmenden Felder einer Spline als JSON
pub fn write_spline(spline: &BezierSpline) -> Result<String> {
    let data = SplineData::from(spline);
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Speichert eine Spline als JSON-Datei
pub fn save_spline_file(path: &Path, spline: &BezierSpline) -> Result<()> {
    let content = write_spline(spline)?;
    std::fs::write(path, content)
        .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
    log::info!("Spline gespeichert nach: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_uses_loop_key_and_skips_derived_data() {
        let mut spline = BezierSpline::default();
        spline.add_curve();
        spline.set_loop(true);

        let json = write_spline(&spline).expect("Serialisierung erwartet");
        assert!(json.contains("\"loop\": true"));
        assert!(json.contains("\"modes\""));
        assert!(!json.contains("length"));
    }
}
