//! ECEF to topocentric South-East-Zenith conversion

pub mod coordinate;
pub mod error;

pub use coordinate::{
    ecef_to_geodetic, ecef_to_sez, EcefCoord, Ellipsoid, Geodetic, LatitudeSolver, SezConverter,
    SezVector,
};
pub use error::{CoordinateError, Result, SezError};
