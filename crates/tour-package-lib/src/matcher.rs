//! Nearest-point matching of places onto path samples

use crate::{Coordinate, Place};

/// Assign every place the index of its nearest path sample
///
/// Brute force O(places × samples); tracks are hundreds to low thousands of
/// samples. On exact ties the earliest sample wins. An empty path leaves every
/// place unassigned.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn assign_closest_samples(places: &mut [Place], path: &[Coordinate]) {
    for place in places.iter_mut() {
        place.closest_sample_index = None;
        place.closest_distance = None;
    }

    for (index, sample) in path.iter().enumerate() {
        for place in places.iter_mut() {
            let distance = sample.planar_distance(&place.position);
            let closer = match place.closest_distance {
                None => true,
                Some(current) => distance < current,
            };
            if closer {
                place.closest_sample_index = Some(index);
                place.closest_distance = Some(distance);
            }
        }
    }

    tracing::trace!(places = places.len(), samples = path.len(), "matched places");
}
