//! Planar distance helpers used by pathing, targeting and placement.

use crate::types::Point;

/// Euclidean distance between two points.
pub fn distance(p: Point, q: Point) -> f64 {
    p.distance(q)
}

/// Minimum distance from `p` to the segment `a`..`b`.
///
/// The projection parameter is clamped to `[0, 1]`. A degenerate segment
/// (`a == b`) falls back to the distance from `p` to `a`.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    distance(p, a + ab * t)
}

/// Step `from` toward `to` by `step` along the straight line, stopping on
/// `to` instead of passing it.
///
/// Returns `from` unchanged when the two points coincide.
pub fn step_toward(from: Point, to: Point, step: f64) -> Point {
    let delta = to - from;
    let d = delta.length();
    if d == 0.0 {
        return from;
    }
    if step >= d {
        return to;
    }
    from + delta / d * step
}
