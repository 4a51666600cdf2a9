//! Bogenlängen-Cache für Bewegung mit konstanter Geschwindigkeit.
//!
//! Pro Segment wird die Länge über Sehnen approximiert und eine stückweise
//! lineare Tabelle (LUT) von lokalem Parameter → normierter Distanz aufgebaut.
//! Die Umkehrung dieser Tabelle liefert zu einem Distanz-Anteil den passenden
//! Kurvenparameter.

use super::bezier::{self, SegmentParam};
use glam::Vec3;

/// Untergrenze für Längen, durch die geteilt wird (degenerierte Segmente).
pub const LENGTH_EPSILON: f32 = 1e-6;

/// Abgeleitete Längendaten einer Spline
///
/// Wird komplett aus den Kontrollpunkten neu aufgebaut, nie inkrementell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArcLengthCache {
    /// Absolute Länge pro Segment
    segment_lengths: Vec<f32>,
    /// Kumulierter Längenanteil am Ende jedes Segments (streng monoton, letzter = 1)
    joint_fractions: Vec<f32>,
    /// LUT-Zeilen hintereinander, je `divisions + 1` Einträge
    lut: Vec<f32>,
    /// Auflösung einer LUT-Zeile
    divisions: usize,
    /// Summe aller Segment-Längen
    total_length: f32,
}

impl ArcLengthCache {
    /// Baut den Cache für die gegebenen Segmente auf.
    ///
    /// `length_steps`: Sehnen pro Segment für die Längenschätzung.
    /// `lut_divisions`: Auflösung der LUT pro Segment.
    pub fn build<I>(segments: I, length_steps: usize, lut_divisions: usize) -> Self
    where
        I: IntoIterator<Item = [Vec3; 4]>,
    {
        let divisions = lut_divisions.max(1);
        let segments: Vec<[Vec3; 4]> = segments.into_iter().collect();

        let segment_lengths: Vec<f32> = segments
            .iter()
            .map(|&p| bezier::chord_length(p, length_steps))
            .collect();
        let total_length = segment_lengths.iter().sum();

        let mut lut = Vec::with_capacity(segments.len() * (divisions + 1));
        for &p in &segments {
            lut.extend(lut_row(p, divisions));
        }

        Self {
            joint_fractions: joint_fractions(&segment_lengths),
            segment_lengths,
            lut,
            divisions,
            total_length,
        }
    }

    /// Anzahl der Segmente, für die der Cache gebaut wurde
    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }

    /// Gesamtlänge der Spline
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Länge je Segment
    pub fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    /// Normierte Position jedes Segment-Endes entlang der Gesamtlänge
    pub fn joint_fractions(&self) -> &[f32] {
        &self.joint_fractions
    }

    /// LUT-Auflösung
    pub fn divisions(&self) -> usize {
        self.divisions
    }

    /// LUT-Zeile eines Segments (`divisions + 1` Werte in [0, 1])
    pub fn lut_row(&self, segment: usize) -> &[f32] {
        let stride = self.divisions + 1;
        &self.lut[segment * stride..(segment + 1) * stride]
    }

    /// Bildet einen globalen Distanz-Anteil auf Segment + lokalen Parameter ab.
    pub fn locate(&self, t: f32) -> SegmentParam {
        let last = self.segment_count() - 1;
        if t >= 1.0 {
            return SegmentParam { segment: last, t: 1.0 };
        }
        let t = t.max(0.0);

        let segment = self
            .joint_fractions
            .iter()
            .position(|&fraction| fraction >= t)
            .unwrap_or(last);
        let start = if segment == 0 {
            0.0
        } else {
            self.joint_fractions[segment - 1]
        };
        let span = (self.joint_fractions[segment] - start).max(LENGTH_EPSILON);
        let local_distance = ((t - start) / span).clamp(0.0, 1.0);

        SegmentParam {
            segment,
            t: self.invert(segment, local_distance),
        }
    }

    /// Kehrt die LUT eines Segments um: Distanz-Anteil → lokaler Parameter.
    ///
    /// Findet kein Intervall den Wert (numerischer Randfall), wird `t` unverändert
    /// zurückgegeben.
    pub fn invert(&self, segment: usize, t: f32) -> f32 {
        let row = self.lut_row(segment);
        let Some(i) = row
            .windows(2)
            .position(|pair| t >= pair[0] && t <= pair[1])
        else {
            return t;
        };

        let width = (row[i + 1] - row[i]).max(f32::EPSILON);
        let x = (t - row[i]) / width;
        (i as f32 + x) / self.divisions as f32
    }
}

/// Eine LUT-Zeile: kumulierte Sehnenlängen, auf [0, 1] normiert.
fn lut_row(p: [Vec3; 4], divisions: usize) -> Vec<f32> {
    let mut row = Vec::with_capacity(divisions + 1);
    row.push(0.0);

    let mut previous = bezier::point(p, 0.0);
    let mut accumulated = 0.0;
    for j in 1..=divisions {
        let current = bezier::point(p, j as f32 / divisions as f32);
        accumulated += previous.distance(current);
        row.push(accumulated);
        previous = current;
    }

    let total = accumulated.max(LENGTH_EPSILON);
    for value in row.iter_mut().skip(1) {
        *value /= total;
    }
    row
}

/// Kumulierte Anteile. Jede Länge wird auf `LENGTH_EPSILON` relativ zur
/// Gesamtlänge angehoben (mindestens absolut `LENGTH_EPSILON`), damit die Folge
/// auch bei Null-Längen in langen Pfaden streng monoton bleibt.
fn joint_fractions(segment_lengths: &[f32]) -> Vec<f32> {
    let epsilon = f64::from(LENGTH_EPSILON);
    let raw_total: f64 = segment_lengths.iter().map(|&l| f64::from(l)).sum();
    let floor = (raw_total * epsilon).max(epsilon);
    let floored: Vec<f64> = segment_lengths
        .iter()
        .map(|&length| f64::from(length).max(floor))
        .collect();
    let sum: f64 = floored.iter().sum();

    let mut running = 0.0;
    let mut fractions: Vec<f32> = floored
        .iter()
        .map(|length| {
            running += length;
            (running / sum) as f32
        })
        .collect();
    if let Some(last) = fractions.last_mut() {
        *last = 1.0;
    }
    fractions
}
