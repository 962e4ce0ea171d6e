//! Path model: the waypoint polyline enemies follow and the corridor
//! around it that towers may not occupy.

use towerline_core::error::SimError;
use towerline_core::geometry::point_segment_distance;
use towerline_core::types::Point;

/// An ordered polyline of at least two resolved waypoints plus a corridor width.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    corridor_width: f64,
}

impl Path {
    pub fn new(points: Vec<Point>, corridor_width: f64) -> Result<Self, SimError> {
        if points.len() < 2 {
            return Err(SimError::PathTooShort(points.len()));
        }
        Ok(Self {
            points,
            corridor_width,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn corridor_width(&self) -> f64 {
        self.corridor_width
    }

    pub fn waypoint_count(&self) -> usize {
        self.points.len()
    }

    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// Waypoint at `index`, clamped to the final waypoint.
    pub fn point_at(&self, index: usize) -> Point {
        self.points[index.min(self.last_index())]
    }

    /// Where enemies enter.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Where enemies leave and cost a life.
    pub fn goal(&self) -> Point {
        self.points[self.last_index()]
    }

    /// Shortest distance from `point` to any segment of the path.
    pub fn distance_to(&self, point: Point) -> f64 {
        self.points
            .windows(2)
            .map(|seg| point_segment_distance(point, seg[0], seg[1]))
            .fold(f64::INFINITY, f64::min)
    }

    /// True when `point` is within `corridor_width / 2 + padding` of any segment.
    pub fn corridor_contains(&self, point: Point, padding: f64) -> bool {
        let limit = self.corridor_width / 2.0 + padding;
        self.points
            .windows(2)
            .any(|seg| point_segment_distance(point, seg[0], seg[1]) <= limit)
    }
}
