//! Segment resampling: bounded waypoint lists between consecutive places

use crate::{PackageError, Result, TrackRoute};

/// Build the waypoint list of every segment in the route
///
/// Segment `i` covers the path samples from place `i`'s matched sample up to
/// (excluding) place `i + 1`'s matched sample, taken every
/// `max(1, count / max_waypoints_per_segment)` samples. The first segment
/// starts with the first place's own position and every segment ends with the
/// next place's own position, so segments always begin and end on named places.
///
/// Requires [`crate::assign_closest_samples`] to have run. Places matched to
/// samples that run backwards along the path are rejected.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn build_waypoints(route: &mut TrackRoute, max_waypoints_per_segment: usize) -> Result<()> {
    if max_waypoints_per_segment == 0 {
        return Err(PackageError::InvalidConfiguration(
            "max waypoints per segment must be positive".to_string(),
        ));
    }

    let indices = route
        .places
        .iter()
        .map(|place| {
            place
                .closest_sample_index
                .filter(|&index| index < route.path.len())
                .ok_or_else(|| PackageError::UnassignedPlace {
                    route: route.name.clone(),
                    place: place.name.clone(),
                })
        })
        .collect::<Result<Vec<usize>>>()?;

    for (i, pair) in indices.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(route.malformed(format!(
                "place '{}' (sample {}) lies before place '{}' (sample {}) along the path",
                route.places[i + 1].name,
                pair[1],
                route.places[i].name,
                pair[0]
            )));
        }
    }

    let TrackRoute { places, path, .. } = route;
    for place in places.iter_mut() {
        place.segment_waypoint_count = 0;
        place.waypoints.clear();
    }

    for i in 0..places.len().saturating_sub(1) {
        let start = indices[i];
        let count = indices[i + 1] - start;
        let step = (count / max_waypoints_per_segment).max(1);
        let next_position = places[i + 1].position;

        let place = &mut places[i];
        place.segment_waypoint_count = count;
        if i == 0 {
            place.waypoints.push(place.position);
        }
        place
            .waypoints
            .extend(path[start..start + count].iter().step_by(step).copied());
        place.waypoints.push(next_position);

        tracing::trace!(segment = i, count, step, waypoints = place.waypoints.len());
    }

    Ok(())
}
