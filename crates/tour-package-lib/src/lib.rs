//! Tour Package Library - Track to Guided-Tour Conversion
//!
//! This library turns a geospatial track (named places plus a continuous path of
//! coordinate samples) into a turn-by-turn guided-tour package that in-car
//! navigation units import from a USB drive.
//!
//! # Architecture
//!
//! - **[`TrackRoute`]**: Places and path samples of one navigable unit
//! - **[`assign_closest_samples`]**: Nearest-point matching of places onto the path
//! - **[`build_waypoints`]**: Segment-aware downsampling between consecutive places
//! - **[`render`]**: Builds the hierarchical [`Element`] document for one route
//! - **[`package`]**: Nests each document in a tar.gz inside a device-shaped zip
//! - **[`TourPackager`]**: High-level driver running every stage with a [`Config`]
//!
//! # Pipeline
//!
//! input reader → matcher → resampler → document builder → archive packager
//!
//! Every stage is synchronous and works purely in memory. Distances are planar
//! Euclidean on raw longitude/latitude values, which is an approximation that is
//! good enough for snapping named places onto a densely sampled track.

mod archive;
mod config;
mod document;
mod input;
mod matcher;
mod pipeline;
mod resample;
mod track;
pub mod utils;

// Public API exports
pub use archive::{RenderedRoute, ZipBuilder, package, tar_gz_document, write_to_directory};
pub use config::{Config, ErrorPolicy};
pub use document::{DocumentOptions, Element, render};
pub use input::{parse_gpx, parse_kml, routes_from_gpx};
pub use matcher::assign_closest_samples;
pub use pipeline::TourPackager;
pub use resample::build_waypoints;
pub use track::{Coordinate, Place, TrackRoute};
pub use utils::ROUTES_DIR;

use std::fmt;

/// Pipeline stage in which a route failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Match,
    Resample,
    Package,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validate => "validation",
            Stage::Match => "place matching",
            Stage::Resample => "resampling",
            Stage::Package => "packaging",
        };
        f.write_str(name)
    }
}

/// Error types for the conversion pipeline
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("Malformed route '{route}': {reason}")]
    MalformedInput { route: String, reason: String },

    #[error("Place '{place}' in route '{route}' was never matched to a path sample")]
    UnassignedPlace { route: String, place: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Route {id} ('{route}') failed during {stage}: {source}")]
    RouteFailed {
        id: u32,
        route: String,
        stage: Stage,
        #[source]
        source: Box<PackageError>,
    },

    #[error("Invalid KML: {0}")]
    Kml(String),

    #[error("Invalid XML document: {0}")]
    InvalidXml(String),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("XML escape error: {0}")]
    XmlEscape(#[from] quick_xml::escape::EscapeError),

    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackageError {
    /// Attach route identity and the failing stage to an error
    pub fn in_route(self, id: u32, route: &str, stage: Stage) -> Self {
        PackageError::RouteFailed {
            id,
            route: route.to_string(),
            stage,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PackageError>;
