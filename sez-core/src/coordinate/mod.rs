//! Coordinate system transformations

mod ellipsoid;
mod geodetic;
mod sez;

pub use ellipsoid::{Ellipsoid, E_E, R_E_KM};
pub use geodetic::{
    ecef_to_geodetic, EcefCoord, Geodetic, LatitudeSolution, LatitudeSolver,
    CONVERGENCE_TOLERANCE_RAD, MAX_ITERATIONS,
};
pub use sez::{ecef_to_sez, rotate_to_sez, sez_rotation, SezConverter, SezVector};
