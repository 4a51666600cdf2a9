//! Reine Auswertungs-Funktionen für ein kubisches Bézier-Segment.
//!
//! Die Polynome werden in `f64` akkumuliert und als `f32` zurückgegeben,
//! damit lange Pfade mit großen Koordinaten nicht an Präzision verlieren.

use glam::{DVec3, Vec3};

/// Segment-Index plus lokaler Parameter innerhalb dieses Segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParam {
    /// 0-basierter Segment-Index (nicht der Kontrollpunkt-Index)
    pub segment: usize,
    /// Lokaler Kurvenparameter in [0, 1]
    pub t: f32,
}

/// Bildet einen globalen Parameter gleichmäßig auf `segment_count` Segmente ab.
///
/// Jedes Segment bekommt denselben Parameterbereich, unabhängig von seiner Länge.
/// `t >= 1` landet exakt auf dem Ende des letzten Segments.
pub fn uniform_param(t: f32, segment_count: usize) -> SegmentParam {
    debug_assert!(segment_count > 0, "Spline ohne Segmente");
    let last = segment_count - 1;
    if t >= 1.0 {
        return SegmentParam { segment: last, t: 1.0 };
    }

    let scaled = t.clamp(0.0, 1.0) * segment_count as f32;
    // Rundung kann knapp unter 1.0 auf `segment_count` landen
    let segment = (scaled as usize).min(last);
    SegmentParam {
        segment,
        t: (scaled - segment as f32).min(1.0),
    }
}

/// Berechnet einen Punkt auf dem Segment `p0..p3` (t wird auf [0, 1] geklemmt).
///
/// `B(t) = (1-t)³·p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³·p3`
pub fn point(p: [Vec3; 4], t: f32) -> Vec3 {
    let t = f64::from(t.clamp(0.0, 1.0));
    let mt = 1.0 - t;
    let [p0, p1, p2, p3] = p.map(|v| v.as_dvec3());

    let b: DVec3 =
        mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3;
    b.as_vec3()
}

/// Erste Ableitung (Geschwindigkeit bezüglich des lokalen Parameters).
///
/// `B'(t) = 3(1-t)²·(p1-p0) + 6(1-t)t·(p2-p1) + 3t²·(p3-p2)`
pub fn first_derivative(p: [Vec3; 4], t: f32) -> Vec3 {
    let t = f64::from(t.clamp(0.0, 1.0));
    let mt = 1.0 - t;
    let [p0, p1, p2, p3] = p.map(|v| v.as_dvec3());

    let d: DVec3 = 3.0 * mt * mt * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (p3 - p2);
    d.as_vec3()
}

/// Approximierte Länge eines Segments über `steps` Sehnen.
pub fn chord_length(p: [Vec3; 4], steps: usize) -> f32 {
    let steps = steps.max(1);
    let mut previous = point(p, 0.0);
    let mut length = 0.0;
    for i in 1..=steps {
        let current = point(p, i as f32 / steps as f32);
        length += previous.distance(current);
        previous = current;
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_uniform_param_bounds() {
        assert_eq!(uniform_param(0.0, 3), SegmentParam { segment: 0, t: 0.0 });
        assert_eq!(uniform_param(1.0, 3), SegmentParam { segment: 2, t: 1.0 });
        assert_eq!(uniform_param(4.2, 3), SegmentParam { segment: 2, t: 1.0 });
        assert_eq!(uniform_param(-1.0, 3), SegmentParam { segment: 0, t: 0.0 });
    }

    #[test]
    fn test_uniform_param_splits_equally() {
        let param = uniform_param(0.5, 2);
        assert_eq!(param.segment, 1);
        assert_relative_eq!(param.t, 0.0);

        let param = uniform_param(0.625, 4);
        assert_eq!(param.segment, 2);
        assert_relative_eq!(param.t, 0.5);
    }

    #[test]
    fn test_point_hits_endpoints() {
        let p = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(5.0, 5.0, 1.0),
            Vec3::new(5.0, 0.0, 2.0),
        ];
        assert_eq!(point(p, 0.0), p[0]);
        assert_eq!(point(p, 1.0), p[3]);
    }

    #[test]
    fn test_point_clamps_parameter() {
        let p = straight();
        assert_eq!(point(p, -2.0), p[0]);
        assert_eq!(point(p, 7.5), p[3]);
    }

    #[test]
    fn test_straight_segment_midpoint() {
        let mid = point(straight(), 0.5);
        assert_relative_eq!(mid.x, 1.5);
        assert_relative_eq!(mid.y, 0.0);
        assert_relative_eq!(mid.z, 0.0);
    }

    #[test]
    fn test_derivative_of_evenly_spaced_line_is_constant() {
        // Gleichmäßig verteilte Kontrollpunkte → konstante Geschwindigkeit 3 * Abstand
        for t in [0.0, 0.25, 0.5, 1.0] {
            let v = first_derivative(straight(), t);
            assert_relative_eq!(v.x, 3.0, epsilon = 1e-5);
            assert_relative_eq!(v.y, 0.0);
        }
    }

    #[test]
    fn test_derivative_at_ends_points_to_handles() {
        let p = [
            Vec3::ZERO,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(4.0, 2.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
        ];
        assert_eq!(first_derivative(p, 0.0), 3.0 * (p[1] - p[0]));
        assert_eq!(first_derivative(p, 1.0), 3.0 * (p[3] - p[2]));
    }

    #[test]
    fn test_chord_length_of_line() {
        assert_relative_eq!(chord_length(straight(), 20), 3.0, epsilon = 1e-5);
        // steps = 0 wird auf 1 angehoben
        assert_relative_eq!(chord_length(straight(), 0), 3.0, epsilon = 1e-5);
    }
}
