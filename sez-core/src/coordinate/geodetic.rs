use nalgebra::Vector3;
use tracing::{debug, trace};

use super::ellipsoid::Ellipsoid;
use crate::error::{CoordinateError, Result};

/// ECEF coordinates (Earth-Centered, Earth-Fixed), kilometers
pub type EcefCoord = Vector3<f64>;

/// Upper bound on latitude refinement steps
pub const MAX_ITERATIONS: usize = 5;
/// Successive latitude estimates closer than this are considered converged (radians)
pub const CONVERGENCE_TOLERANCE_RAD: f64 = 1e-6;

/// Geodetic latitude and longitude of a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub lat_rad: f64,
    pub lon_rad: f64,
}

impl Geodetic {
    pub fn lat_deg(&self) -> f64 {
        self.lat_rad.to_degrees()
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon_rad.to_degrees()
    }
}

/// Outcome of the latitude refinement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeSolution {
    pub geodetic: Geodetic,
    /// Refinement steps actually performed (always at least one)
    pub iterations: usize,
    /// False when the iteration cap was hit before the tolerance was met
    pub converged: bool,
}

/// Bounded fixed-point solver for geodetic latitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeSolver {
    pub ellipsoid: Ellipsoid,
    pub max_iterations: usize,
    pub tolerance_rad: f64,
}

impl Default for LatitudeSolver {
    fn default() -> Self {
        Self::new(Ellipsoid::REFERENCE)
    }
}

impl LatitudeSolver {
    /// Solver with the standard iteration cap and tolerance on the given ellipsoid
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            max_iterations: MAX_ITERATIONS,
            tolerance_rad: CONVERGENCE_TOLERANCE_RAD,
        }
    }

    /// Compute geodetic latitude and longitude of an ECEF position.
    ///
    /// Longitude is exact. Latitude starts from the geocentric latitude and is
    /// refined until two successive estimates agree within `tolerance_rad` or
    /// `max_iterations` steps have run. Hitting the cap is not an error; the
    /// last estimate is returned with `converged == false`.
    ///
    /// Positions at the Earth's center or on the polar axis have no defined
    /// geodetic longitude and are rejected.
    pub fn solve(&self, ecef: &EcefCoord) -> Result<LatitudeSolution> {
        let (x, y, z) = (ecef.x, ecef.y, ecef.z);

        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(CoordinateError::NonFinite { x, y, z }.into());
        }

        let r_km = (x.powi(2) + y.powi(2) + z.powi(2)).sqrt();
        if r_km == 0.0 {
            return Err(CoordinateError::AtEarthCenter.into());
        }

        let r_lon_km = (x.powi(2) + y.powi(2)).sqrt();
        if r_lon_km == 0.0 {
            return Err(CoordinateError::OnPolarAxis { z_km: z }.into());
        }

        let lon_rad = y.atan2(x);
        let e2 = self.ellipsoid.eccentricity_squared();

        let mut lat_rad = (z / r_km).asin();
        let mut iterations = 0;
        let converged = loop {
            let c_e = self.ellipsoid.prime_vertical_radius(lat_rad);
            let prev_lat_rad = lat_rad;
            lat_rad = ((z + c_e * e2 * prev_lat_rad.sin()) / r_lon_km).atan();
            iterations += 1;

            let delta = (lat_rad - prev_lat_rad).abs();
            trace!(iterations, lat_rad, delta, "latitude refinement step");

            if delta <= self.tolerance_rad {
                break true;
            }
            if iterations >= self.max_iterations {
                break false;
            }
        };

        let geodetic = Geodetic { lat_rad, lon_rad };
        if converged {
            debug!(
                lat_deg = geodetic.lat_deg(),
                lon_deg = geodetic.lon_deg(),
                iterations,
                "geodetic latitude converged"
            );
        } else {
            debug!(
                lat_deg = geodetic.lat_deg(),
                lon_deg = geodetic.lon_deg(),
                iterations,
                "geodetic latitude hit iteration cap, using last estimate"
            );
        }

        Ok(LatitudeSolution {
            geodetic,
            iterations,
            converged,
        })
    }
}

/// Geodetic latitude/longitude of an ECEF position on the reference ellipsoid
pub fn ecef_to_geodetic(ecef: &EcefCoord) -> Result<Geodetic> {
    Ok(LatitudeSolver::default().solve(ecef)?.geodetic)
}

/// Inverse transform used by tests to place points on the ellipsoid
#[cfg(test)]
pub(crate) fn geodetic_to_ecef(ellipsoid: &Ellipsoid, geodetic: &Geodetic, alt_km: f64) -> EcefCoord {
    let (sin_lat, cos_lat) = geodetic.lat_rad.sin_cos();
    let (sin_lon, cos_lon) = geodetic.lon_rad.sin_cos();

    let n = ellipsoid.prime_vertical_radius(geodetic.lat_rad);
    let e2 = ellipsoid.eccentricity_squared();

    Vector3::new(
        (n + alt_km) * cos_lat * cos_lon,
        (n + alt_km) * cos_lat * sin_lon,
        (n * (1.0 - e2) + alt_km) * sin_lat,
    )
}
