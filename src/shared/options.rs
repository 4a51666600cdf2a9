//! Zentrale Konfiguration für Spline-Berechnungen.
//!
//! `SplineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Bogenlänge ──────────────────────────────────────────────────────

/// Sehnen pro Segment für die Längenschätzung.
pub const LENGTH_STEPS_PER_SEGMENT: usize = 20;
/// Auflösung der Distanz→Parameter-Tabelle pro Segment.
pub const LUT_DIVISIONS: usize = 16;

// ── Bounding-Box ────────────────────────────────────────────────────

/// Abtastpunkte pro Segment für die Bounding-Box.
pub const BOUNDS_STEPS_PER_SEGMENT: usize = 20;

// ── Topologie-Edits ─────────────────────────────────────────────────

/// Abstand der Platzhalter-Punkte beim Anhängen eines Segments (entlang +X).
pub const ADD_CURVE_SPACING: f32 = 1.0;
/// Skalierung der Geschwindigkeit für die Handles eines eingefügten Joints.
pub const INSERT_HANDLE_SCALE: f32 = 0.01;
/// Abstand der Brücken-Handles beim Zusammenfügen zweier Splines.
pub const BRIDGE_HANDLE_OFFSET: f32 = 0.01;

/// Alle zur Laufzeit änderbaren Spline-Optionen.
/// Wird als `bezier_path.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineOptions {
    // ── Bogenlänge ──────────────────────────────────────────────
    /// Sehnen pro Segment für `calc_bezier_length`
    #[serde(default = "default_length_steps")]
    pub length_steps: usize,
    /// LUT-Auflösung pro Segment (unabhängig von `length_steps`)
    #[serde(default = "default_lut_divisions")]
    pub lut_divisions: usize,

    // ── Bounding-Box ────────────────────────────────────────────
    /// Abtastpunkte pro Segment für `calc_bounding_box`
    #[serde(default = "default_bounds_steps")]
    pub bounds_steps: usize,

    // ── Edits ───────────────────────────────────────────────────
    /// Abstand der neuen Punkte bei `add_curve`
    #[serde(default = "default_add_curve_spacing")]
    pub add_curve_spacing: f32,
    /// Handle-Skalierung bei `insert_next_point`
    #[serde(default = "default_insert_handle_scale")]
    pub insert_handle_scale: f32,
    /// Handle-Abstand an der Naht bei `add_bezier_data`
    #[serde(default = "default_bridge_handle_offset")]
    pub bridge_handle_offset: f32,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            length_steps: LENGTH_STEPS_PER_SEGMENT,
            lut_divisions: LUT_DIVISIONS,
            bounds_steps: BOUNDS_STEPS_PER_SEGMENT,
            add_curve_spacing: ADD_CURVE_SPACING,
            insert_handle_scale: INSERT_HANDLE_SCALE,
            bridge_handle_offset: BRIDGE_HANDLE_OFFSET,
        }
    }
}

/// Serde-Defaults (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_length_steps() -> usize {
    LENGTH_STEPS_PER_SEGMENT
}

fn default_lut_divisions() -> usize {
    LUT_DIVISIONS
}

fn default_bounds_steps() -> usize {
    BOUNDS_STEPS_PER_SEGMENT
}

fn default_add_curve_spacing() -> f32 {
    ADD_CURVE_SPACING
}

fn default_insert_handle_scale() -> f32 {
    INSERT_HANDLE_SCALE
}

fn default_bridge_handle_offset() -> f32 {
    BRIDGE_HANDLE_OFFSET
}

impl SplineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(self).context("Optionen nicht als TOML darstellbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_path"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_path.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_divisions_independent() {
        let opts = SplineOptions::default();
        assert_eq!(opts.length_steps, 20);
        assert_eq!(opts.lut_divisions, 16);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: SplineOptions = toml::from_str("lut_divisions = 32\n").expect("TOML gültig");
        assert_eq!(opts.lut_divisions, 32);
        assert_eq!(opts.length_steps, LENGTH_STEPS_PER_SEGMENT);
        assert_eq!(opts.bridge_handle_offset, BRIDGE_HANDLE_OFFSET);
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = SplineOptions {
            length_steps: 40,
            insert_handle_scale: 0.25,
            ..SplineOptions::default()
        };
        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let parsed: SplineOptions = toml::from_str(&text).expect("TOML gültig");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("bezier_path_missing_options_1f3a.toml");
        assert_eq!(SplineOptions::load_from_file(&path), SplineOptions::default());
    }

    #[test]
    fn test_save_and_reload_file() {
        let path = std::env::temp_dir().join("bezier_path_options_roundtrip.toml");
        let opts = SplineOptions {
            bounds_steps: 5,
            ..SplineOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern fehlgeschlagen");
        let loaded = SplineOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_save_into_missing_directory_reports_path() {
        let path = std::env::temp_dir()
            .join("bezier_path_kein_ordner")
            .join("optionen.toml");
        let err = SplineOptions::default()
            .save_to_file(&path)
            .expect_err("Fehler erwartet");
        assert!(format!("{:#}", err).contains("optionen.toml"));
    }
}
