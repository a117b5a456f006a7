//! Engine-agnostic state for the globe view: precomputed orbit paths, trail
//! buffers and marker positions. A renderer only has to read positions out;
//! nothing here depends on a 3-D engine.

mod orbit;
mod trail;

pub use orbit::generate_orbit_points;
pub use trail::Trail;

use serde::Serialize;

/// The globe is drawn with radius 1; everything else is scaled to it.
pub const SCENE_EARTH_RADIUS: f64 = 1.0;
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Visual exaggeration; higher values push satellites farther from the surface.
pub const DEFAULT_ALTITUDE_SCALE: f64 = 0.5;
pub const DEFAULT_ORBIT_SAMPLES: usize = 500;
pub const DEFAULT_TRAIL_LENGTH: usize = 250;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// One active satellite: its precomputed path, current index and trail.
#[derive(Debug, Clone)]
pub struct Marker {
    pub norad_id: u32,
    pub color: String,
    path: Vec<Point3>,
    trail: Trail,
    index: usize,
}

impl Marker {
    /// `path` must be non-empty; the orbit generator always returns at least
    /// one point for a positive sample count.
    pub fn new(norad_id: u32, color: String, path: Vec<Point3>, trail_length: usize) -> Self {
        assert!(!path.is_empty(), "marker path must be non-empty");
        Self {
            norad_id,
            color,
            path,
            trail: Trail::new(trail_length),
            index: 0,
        }
    }

    pub fn position(&self) -> Point3 {
        self.path[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &[Point3] {
        &self.path
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Moves to the next path point (wrapping at the end) and records it in
    /// the trail. Returns the new position.
    pub fn advance(&mut self) -> Point3 {
        self.index = (self.index + 1) % self.path.len();
        let position = self.path[self.index];
        self.trail.record(position);
        position
    }
}

/// Marker set plus fixed city markers. One orbit path and one trail per
/// active satellite; a new fetch cycle replaces the whole set.
#[derive(Debug, Default)]
pub struct Scene {
    markers: Vec<Marker>,
    cities: Vec<Point3>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_city(&mut self, lat_deg: f64, lon_deg: f64) {
        self.cities
            .push(surface_point(lat_deg, lon_deg, SCENE_EARTH_RADIUS));
    }

    pub fn cities(&self) -> &[Point3] {
        &self.cities
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Drops every previous marker and trail wholesale. Called once a new
    /// batch of position reports has arrived, so a slow fetch never leaves
    /// the view empty in the meantime.
    pub fn replace_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    /// Per-frame update: every marker advances one path point.
    pub fn step(&mut self) {
        for marker in &mut self.markers {
            marker.advance();
        }
    }
}

/// Lat/lon to a point on the globe surface. West longitudes land on the
/// negative-theta side so the texture lines up.
pub fn surface_point(lat_deg: f64, lon_deg: f64, radius: f64) -> Point3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = -lon_deg.to_radians();
    Point3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}
