use crate::geo::models::{Coordinate, Region};
use crate::map::surface::MapSurface;
use filter::DistanceFilter;

pub mod consts;
pub mod feed;
pub mod filter;
#[cfg(test)]
pub mod tests;

/// Turns location updates into map recentering.
#[derive(Clone, Debug, Default)]
pub struct LocationAdapter {
    filter: DistanceFilter,
}

impl LocationAdapter {
    /// Recenters `surface` on `fix` and returns the new region, unless the fix is missing or
    /// too close to the previous one.
    pub fn on_update<M: MapSurface>(
        &mut self,
        surface: &mut M,
        fix: Option<Coordinate>,
    ) -> Option<Region> {
        let Some(fix) = fix else {
            tracing::debug!("Location update without a fix, skipping.");
            return None;
        };
        if !self.filter.accept(fix) {
            tracing::debug!(
                latitude = fix.latitude,
                longitude = fix.longitude,
                "Location update filtered out.",
            );
            return None;
        }
        let region = Region::around(fix);
        surface.set_region(region);
        tracing::info!(
            task = "recentered",
            latitude = fix.latitude,
            longitude = fix.longitude,
        );
        Some(region)
    }
}
