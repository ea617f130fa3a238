/// Reference ellipsoid equatorial radius (km)
pub const R_E_KM: f64 = 6378.137;
/// Reference ellipsoid first eccentricity
pub const E_E: f64 = 0.081819221456;

/// Oblate reference ellipsoid described by its equatorial radius and first eccentricity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub equatorial_radius_km: f64,
    pub eccentricity: f64,
}

impl Ellipsoid {
    /// WGS-84-like model used for every conversion unless another one is injected
    pub const REFERENCE: Ellipsoid = Ellipsoid {
        equatorial_radius_km: R_E_KM,
        eccentricity: E_E,
    };

    pub const fn new(equatorial_radius_km: f64, eccentricity: f64) -> Self {
        Self {
            equatorial_radius_km,
            eccentricity,
        }
    }

    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity.powi(2)
    }

    /// Radius of curvature in the prime vertical at the given geodetic latitude
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        let denom = (1.0 - self.eccentricity_squared() * lat_rad.sin().powi(2)).sqrt();
        self.equatorial_radius_km / denom
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_reference_constants() {
        let ellipsoid = Ellipsoid::default();
        assert_eq!(ellipsoid.equatorial_radius_km, 6378.137);
        assert_eq!(ellipsoid.eccentricity, 0.081819221456);
        assert!((ellipsoid.eccentricity_squared() - 0.006694385).abs() < 1e-12);
    }

    #[test]
    fn test_prime_vertical_radius_at_equator() {
        // sin(0) = 0, so the radius collapses to the equatorial radius
        let n = Ellipsoid::REFERENCE.prime_vertical_radius(0.0);
        assert_eq!(n, R_E_KM);
    }

    #[test]
    fn test_prime_vertical_radius_at_pole() {
        // a / sqrt(1 - e^2) ~= 6399.594 km for WGS-84
        let n = Ellipsoid::REFERENCE.prime_vertical_radius(FRAC_PI_2);
        assert!((n - 6399.5936).abs() < 1e-3);
    }

    #[test]
    fn test_sphere_has_constant_radius() {
        let sphere = Ellipsoid::new(6371.0, 0.0);
        for lat in [-1.2, -0.3, 0.0, 0.7, 1.5] {
            assert_eq!(sphere.prime_vertical_radius(lat), 6371.0);
        }
    }
}
