use std::f64::consts::TAU;

use super::{Point3, EARTH_RADIUS_KM, SCENE_EARTH_RADIUS};

/// Closed circular path derived from a single observed sample.
///
/// Points are evenly spaced on a circle of radius (globe radius + scaled
/// elevation) in the equatorial plane, tilted by declination, then rotated
/// about the polar (Y) axis by right ascension. This is a one-shot geometry
/// approximation, not orbital mechanics: no eccentricity, no drift, no time
/// of flight. Same inputs always yield the same sequence.
pub fn generate_orbit_points(
    ra_deg: f64,
    dec_deg: f64,
    elevation_km: f64,
    altitude_scale: f64,
    samples: usize,
) -> Vec<Point3> {
    let radius = SCENE_EARTH_RADIUS + altitude_scale * (elevation_km / EARTH_RADIUS_KM);
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    let (sin_ra, cos_ra) = ra_deg.to_radians().sin_cos();

    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let angle = TAU * i as f64 / samples as f64;
        let x = radius * angle.cos();
        let z = radius * angle.sin();

        // Tilt by declination (rotation about X; the base circle has y = 0).
        let y_tilt = -z * sin_dec;
        let z_tilt = z * cos_dec;

        // Rotate about the polar axis by right ascension.
        let x_rot = x * cos_ra - z_tilt * sin_ra;
        let z_rot = x * sin_ra + z_tilt * cos_ra;

        points.push(Point3::new(x_rot, y_tilt, z_rot));
    }

    points
}
