use nalgebra::{Matrix3, Vector3};
use tracing::debug;

use super::geodetic::{EcefCoord, Geodetic, LatitudeSolver};
use crate::error::Result;

/// Topocentric South-East-Zenith displacement, kilometers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezVector {
    pub s: f64,
    pub e: f64,
    pub z: f64,
}

impl SezVector {
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.s, self.e, self.z)
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }
}

/// Rotation taking ECEF directions into the SEZ frame at `geodetic` (rows are S, E, Z)
#[rustfmt::skip]
pub fn sez_rotation(geodetic: &Geodetic) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = geodetic.lat_rad.sin_cos();
    let (sin_lon, cos_lon) = geodetic.lon_rad.sin_cos();

    Matrix3::new(
        sin_lat * cos_lon, sin_lat * sin_lon, -cos_lat,
        -sin_lon,          cos_lon,           0.0,
        cos_lat * cos_lon, cos_lat * sin_lon, sin_lat,
    )
}

/// Express `target - observer` in the SEZ frame centered at the observer
pub fn rotate_to_sez(observer: &EcefCoord, geodetic: &Geodetic, target: &EcefCoord) -> SezVector {
    let d = target - observer;
    let (lat, lon) = (geodetic.lat_rad, geodetic.lon_rad);

    // Term order kept as written so results are reproducible bit for bit
    SezVector {
        s: -d.z * lat.cos() + d.x * lon.cos() * lat.sin() + d.y * lat.sin() * lon.sin(),
        e: d.y * lon.cos() - d.x * lon.sin(),
        z: d.x * lat.cos() * lon.cos() + d.z * lat.sin() + d.y * lat.cos() * lon.sin(),
    }
}

/// Observer-relative ECEF to SEZ conversion with an injectable latitude solver
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SezConverter {
    solver: LatitudeSolver,
}

impl SezConverter {
    pub fn new(solver: LatitudeSolver) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &LatitudeSolver {
        &self.solver
    }

    /// Solve the observer's geodetic position, then rotate the displacement into SEZ
    pub fn convert(&self, observer: &EcefCoord, target: &EcefCoord) -> Result<SezVector> {
        let solution = self.solver.solve(observer)?;
        let sez = rotate_to_sez(observer, &solution.geodetic, target);

        debug!(s_km = sez.s, e_km = sez.e, z_km = sez.z, "converted target to SEZ");
        Ok(sez)
    }
}

/// Convert `target` into SEZ coordinates relative to `observer` on the reference ellipsoid
pub fn ecef_to_sez(observer: &EcefCoord, target: &EcefCoord) -> Result<SezVector> {
    SezConverter::default().convert(observer, target)
}
