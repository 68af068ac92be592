//! Input readers turning KML and GPX documents into [`TrackRoute`]s
//!
//! Readers only extract places and samples. Shape checks (two places, a
//! non-empty path) happen later in [`TrackRoute::validate`] so that one bad
//! route can be skipped without losing the rest of the file.

use crate::{Coordinate, Element, PackageError, Place, Result, TrackRoute};

/// Read every route of a KML document
///
/// Each `Document/Folder` holding a `Placemark` with a `LineString` becomes a
/// route; other folders are ignored. Identifiers count accepted folders from 1.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn parse_kml(bytes: &[u8]) -> Result<Vec<TrackRoute>> {
    let root = Element::parse(bytes)?;
    let document = if root.name == "Document" {
        &root
    } else {
        root.find("Document")
            .ok_or_else(|| PackageError::Kml("missing <Document> element".to_string()))?
    };

    let mut routes = Vec::new();
    for folder in document.children_named("Folder") {
        let Some(line) = folder
            .children_named("Placemark")
            .find_map(|placemark| placemark.find("LineString"))
        else {
            continue;
        };

        let id = routes.len() as u32 + 1;
        let name = element_name(folder).unwrap_or_else(|| format!("Route {id}"));

        let mut places = Vec::new();
        for placemark in folder.children_named("Placemark") {
            let Some(point) = placemark.find("Point") else {
                continue;
            };
            let text = point.find("coordinates").map(Element::text).unwrap_or("");
            let position = parse_place_position(text)?;
            let place_name =
                element_name(placemark).unwrap_or_else(|| format!("Place {}", places.len() + 1));
            places.push(Place::new(place_name, position));
        }

        let path = parse_path(line.find("coordinates").map(Element::text).unwrap_or(""))?;
        tracing::debug!(
            "KML route {} '{}': {} places, {} samples",
            id,
            name,
            places.len(),
            path.len()
        );
        routes.push(TrackRoute::new(id, name, places, path));
    }

    Ok(routes)
}

/// Trimmed `<name>` text, `None` when missing or blank
fn element_name(element: &Element) -> Option<String> {
    let name = element.find("name")?.text().trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn parse_components(tuple: &str) -> Result<Vec<f64>> {
    tuple
        .split(',')
        .map(|component| {
            component
                .trim()
                .parse::<f64>()
                .map_err(|_| PackageError::Kml(format!("invalid coordinate '{tuple}'")))
        })
        .collect()
}

/// `lon,lat` or `lon,lat,alt`
fn parse_place_position(text: &str) -> Result<Coordinate> {
    let text = text.trim();
    match parse_components(text)?.as_slice() {
        [lon, lat] => Ok(Coordinate::new(*lon, *lat, None)),
        [lon, lat, alt] => Ok(Coordinate::new(*lon, *lat, Some(*alt))),
        _ => Err(PackageError::Kml(format!(
            "place position '{text}' needs 2 or 3 components"
        ))),
    }
}

/// Whitespace-separated `lon,lat,alt` tuples; tuples of other arity are skipped
fn parse_path(text: &str) -> Result<Vec<Coordinate>> {
    let mut path = Vec::new();
    for tuple in text.split_whitespace() {
        if tuple.split(',').count() != 3 {
            tracing::trace!("Skipping path sample '{}'", tuple);
            continue;
        }
        let components = parse_components(tuple)?;
        path.push(Coordinate::new(components[0], components[1], Some(components[2])));
    }
    Ok(path)
}

/// Read every route of a GPX document
pub fn parse_gpx(bytes: &[u8]) -> Result<Vec<TrackRoute>> {
    let gpx = gpx::read(bytes)?;
    Ok(routes_from_gpx(&gpx))
}

/// One route per track; named top-level waypoints are the places
///
/// Segments of a track are concatenated into a single path.
pub fn routes_from_gpx(gpx: &gpx::Gpx) -> Vec<TrackRoute> {
    let places: Vec<Place> = gpx
        .waypoints
        .iter()
        .filter_map(|waypoint| {
            let name = waypoint.name.as_ref()?;
            Some(Place::new(name.clone(), Coordinate::from(waypoint)))
        })
        .collect();

    gpx.tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let id = index as u32 + 1;
            let name = track
                .name
                .clone()
                .unwrap_or_else(|| format!("Track {id}"));
            let path = track
                .segments
                .iter()
                .flat_map(|segment| segment.points.iter().map(Coordinate::from))
                .collect();
            TrackRoute::new(id, name, places.clone(), path)
        })
        .collect()
}
