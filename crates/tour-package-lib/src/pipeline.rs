//! TourPackager - Top-level driver running every conversion stage
//!
//! This module provides the high-level API: validate, match and resample each
//! route, render its document, then package all documents together.

use crate::{
    Config, DocumentOptions, ErrorPolicy, PackageError, RenderedRoute, Result, Stage, TrackRoute,
    archive, assign_closest_samples, build_waypoints, render,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Converts track routes into guided-tour packages
#[derive(Debug, Clone)]
pub struct TourPackager {
    config: Config,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl TourPackager {
    /// Create a packager, rejecting invalid configuration up front
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a route, match its places and build the segment waypoints
    pub fn prepare(&self, route: &mut TrackRoute) -> Result<()> {
        route
            .validate()
            .map_err(|err| err.in_route(route.id, &route.name, Stage::Validate))?;

        assign_closest_samples(&mut route.places, &route.path);
        if let Some(place) = route
            .places
            .iter()
            .find(|place| place.closest_sample_index.is_none())
        {
            return Err(PackageError::UnassignedPlace {
                route: route.name.clone(),
                place: place.name.clone(),
            }
            .in_route(route.id, &route.name, Stage::Match));
        }

        build_waypoints(route, self.config.max_waypoints_per_segment)
            .map_err(|err| err.in_route(route.id, &route.name, Stage::Resample))?;

        tracing::debug!(
            "Prepared route {} '{}': {} places, {} samples, {} waypoints",
            route.id,
            route.name,
            route.places.len(),
            route.path.len(),
            route.total_waypoints()
        );
        Ok(())
    }

    /// Render the document of a prepared route
    pub fn render(&self, route: &TrackRoute, options: &DocumentOptions) -> RenderedRoute {
        RenderedRoute {
            id: route.id,
            name: route.name.clone(),
            document: render(route, options),
        }
    }

    /// Prepare and render every route, in parallel
    ///
    /// Output order follows input order. Failing routes abort the run under
    /// [`ErrorPolicy::Strict`] and are dropped under [`ErrorPolicy::SkipInvalid`].
    pub fn build(&self, routes: Vec<TrackRoute>) -> Result<Vec<RenderedRoute>> {
        let options = DocumentOptions::from_config(&self.config);
        self.build_with(routes, &options)
    }

    fn build_with(
        &self,
        routes: Vec<TrackRoute>,
        options: &DocumentOptions,
    ) -> Result<Vec<RenderedRoute>> {
        #[cfg(feature = "profiling")]
        profiling::scope!("pipeline::build");

        let results: Vec<Result<RenderedRoute>> = routes
            .into_par_iter()
            .map(|mut route| {
                self.prepare(&mut route)?;
                Ok(self.render(&route, options))
            })
            .collect();

        match self.config.error_policy {
            ErrorPolicy::Strict => results.into_iter().collect(),
            ErrorPolicy::SkipInvalid => Ok(results
                .into_iter()
                .filter_map(|result| match result {
                    Ok(rendered) => Some(rendered),
                    Err(err) => {
                        tracing::warn!("Skipping route: {}", err);
                        None
                    }
                })
                .collect()),
        }
    }

    /// Convert routes into the final zip archive bytes
    pub fn package(&self, routes: Vec<TrackRoute>) -> Result<Vec<u8>> {
        let options = DocumentOptions::from_config(&self.config);
        let rendered = self.build_with(routes, &options)?;
        archive::package(&rendered, options.creation_time)
    }

    /// Convert routes and write them below `root` in the device directory layout
    pub fn write_to_directory(&self, routes: Vec<TrackRoute>, root: &Path) -> Result<Vec<PathBuf>> {
        let options = DocumentOptions::from_config(&self.config);
        let rendered = self.build_with(routes, &options)?;
        archive::write_to_directory(&rendered, root, options.creation_time)
    }
}
