//! Track model: places, path samples and the route that groups them
//!
//! A [`TrackRoute`] is filled by an input reader, annotated in place by the
//! matcher and the resampler, and finally handed to the document builder.

use crate::{PackageError, Result};
use geo::Point;

/// A raw position sample in the track's own coordinate order (longitude first)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// x = longitude, y = latitude
    pub point: Point<f64>,
    /// Elevation in meters, absent for most place markers
    pub elevation: Option<f64>,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64, elevation: Option<f64>) -> Self {
        Self {
            point: Point::new(longitude, latitude),
            elevation,
        }
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    /// Planar Euclidean distance on raw (longitude, latitude) values, elevation ignored
    #[inline]
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        let dx = self.longitude() - other.longitude();
        let dy = self.latitude() - other.latitude();
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<&gpx::Waypoint> for Coordinate {
    fn from(waypoint: &gpx::Waypoint) -> Self {
        Self {
            point: waypoint.point(),
            elevation: waypoint.elevation,
        }
    }
}

/// A named point of interest anchoring the start or end of a segment
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub name: String,
    pub position: Coordinate,
    /// Index of the nearest path sample, set by the matcher
    pub closest_sample_index: Option<usize>,
    /// Planar distance to that sample, set by the matcher
    pub closest_distance: Option<f64>,
    /// Number of path samples between this place and the next one, set by the resampler
    pub segment_waypoint_count: usize,
    /// Waypoints of the segment starting at this place, set by the resampler
    pub waypoints: Vec<Coordinate>,
}

impl Place {
    pub fn new(name: impl Into<String>, position: Coordinate) -> Self {
        Self {
            name: name.into(),
            position,
            closest_sample_index: None,
            closest_distance: None,
            segment_waypoint_count: 0,
            waypoints: Vec::new(),
        }
    }
}

/// One navigable unit: ordered places plus the continuous path they lie on
///
/// Places are expected in visiting order along the path. The matcher never
/// reorders them; [`crate::build_waypoints`] rejects places whose matched
/// samples run backwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackRoute {
    pub id: u32,
    pub name: String,
    pub places: Vec<Place>,
    pub path: Vec<Coordinate>,
}

impl TrackRoute {
    pub fn new(id: u32, name: impl Into<String>, places: Vec<Place>, path: Vec<Coordinate>) -> Self {
        Self {
            id,
            name: name.into(),
            places,
            path,
        }
    }

    /// Check the minimum shape required before matching
    ///
    /// A route needs a non-empty path and at least two places.
    pub fn validate(&self) -> Result<()> {
        if self.path.is_empty() {
            return Err(self.malformed("route has no path samples"));
        }
        match self.places.len() {
            0 => Err(self.malformed("route has no places")),
            1 => Err(self.malformed("route has a single place, at least 2 are required")),
            _ => Ok(()),
        }
    }

    pub(crate) fn malformed(&self, reason: impl Into<String>) -> PackageError {
        PackageError::MalformedInput {
            route: self.name.clone(),
            reason: reason.into(),
        }
    }

    /// Total number of waypoints across all segments
    pub fn total_waypoints(&self) -> usize {
        self.places.iter().map(|place| place.waypoints.len()).sum()
    }
}
