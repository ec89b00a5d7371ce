use consts::EARTH_RADIUS;
use models::Coordinate;

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Great-circle distance between two coordinates, in meters.
pub fn distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    let phi_1 = from.latitude.to_radians();
    let phi_2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS * c
}
